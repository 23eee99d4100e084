use clap::Parser;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use karma_cfg::case_gen::{CaseOutput, generate_cases};
use karma_cfg::plot_map::render_maps_rgba;

#[derive(Parser, Debug)]
#[command(
    name = "karma-cases",
    about = "Generate randomized full-core KARMA input decks from a 1/8 CFG map",
    version
)]
struct Cli {
    /// Base KARMA input deck holding the 1/8 CFG block
    #[arg(short = 'i', long = "input", default_value = "KARMA.IN")]
    input: PathBuf,

    /// Directory receiving per-case subdirectories
    #[arg(short = 'o', long = "output", default_value = "output")]
    output: PathBuf,

    /// Number of cases to generate
    #[arg(short = 'n', long = "cases", default_value_t = 5)]
    cases: usize,

    /// Render the last case to a PNG
    #[arg(long = "plot", short = 'p')]
    plot: bool,

    /// Directory receiving the rendered PNG
    #[arg(long = "png-dir", default_value = "png")]
    png_dir: PathBuf,

    /// Pixel size of one rendered cell
    #[arg(long = "cell-px", default_value_t = 24)]
    cell_px: u32,

    /// Seed for reproducible randomization
    #[arg(long = "seed")]
    seed: Option<u64>,
}

fn plot_last_case(cli: &Cli, last: &CaseOutput) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(&cli.png_dir)?;
    let (pixels, w, h) = render_maps_rgba(&last.eighth, &last.full, cli.cell_px)?;
    let out_png = cli.png_dir.join("karma_cfg_expansion.png");

    match image::RgbaImage::from_raw(w, h, pixels) {
        Some(img) => {
            img.save(&out_png)?;
            println!("plot written: {}", out_png.display());
        }
        None => eprintln!("Failed to build RGBA image for {} ({w}x{h})", out_png.display()),
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let base_text = fs::read_to_string(&cli.input)
        .map_err(|e| format!("failed to read {}: {e}", cli.input.display()))?;
    fs::create_dir_all(&cli.output)?;

    let outputs = match cli.seed {
        Some(seed) => generate_cases(&base_text, cli.cases, &cli.output, &mut StdRng::seed_from_u64(seed))?,
        None => generate_cases(&base_text, cli.cases, &cli.output, &mut rand::rng())?,
    };

    for out in &outputs {
        println!(
            "case written: {} ({}x{} full map)",
            out.case_dir.display(),
            out.full.size(),
            out.full.size()
        );
    }

    if cli.plot {
        match outputs.last() {
            Some(last) => plot_last_case(&cli, last)?,
            None => eprintln!("No cases generated, nothing to plot"),
        }
    }

    Ok(())
}
