use clap::Parser;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use karma_cfg::case_gen::FileNumberAllocator;
use karma_cfg::swap_pin::swap_random_pin;

#[derive(Parser, Debug)]
#[command(
    name = "karma-swap",
    about = "Swap the movable 4 pin with a random 1 pin and write the next numbered deck",
    version
)]
struct Cli {
    /// KARMA input deck to read; left unchanged
    #[arg(short = 'i', long = "input", default_value = "KARMA.IN")]
    input: PathBuf,

    /// Directory receiving the numbered KARMA_{n:05}.IN copy
    #[arg(short = 'd', long = "dir", default_value = ".")]
    dir: PathBuf,

    /// Seed for reproducible pin selection
    #[arg(long = "seed")]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let original = fs::read_to_string(&cli.input)
        .map_err(|e| format!("failed to read {}: {e}", cli.input.display()))?;

    let outcome = match cli.seed {
        Some(seed) => swap_random_pin(&original, &mut StdRng::seed_from_u64(seed))?,
        None => swap_random_pin(&original, &mut rand::rng())?,
    };

    fs::create_dir_all(&cli.dir)?;
    let mut allocator = FileNumberAllocator::scan(&cli.dir)?;
    let out_path = allocator.next_path();
    fs::write(&out_path, &outcome.text)?;

    println!("new deck written: {}", out_path.display());
    println!(
        "moved 4 from row {} col {} to row {} col {} ({} candidate 1s)",
        outcome.from.0, outcome.from.1, outcome.to.0, outcome.to.1, outcome.target_count
    );

    Ok(())
}
