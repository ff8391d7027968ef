use anyhow::Result;
use clap::Parser;
use fullcycle_core::FullPeriodLcg;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
struct Args {
    #[arg(long, default_value_t = 1_000_000)]
    modulus: u64,

    #[arg(long)]
    seed: Option<u64>,

    /// Print at most this many values.
    #[arg(long, default_value_t = 20)]
    limit: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut lcg = FullPeriodLcg::new(args.modulus, &mut ChaCha8Rng::seed_from_u64(seed))?;
    info!(seed, params = ?lcg.params(), "walking [0, {})", args.modulus);

    for value in lcg.cycle().take(args.limit) {
        println!("{value}");
    }
    Ok(())
}
