use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser)]
#[command(name = "meibo-sitegen")]
#[command(about = "Static profile site generator")]
#[command(long_about = "\
Static profile site generator

Reads a profile list JSON file and writes index.html plus one HTML page
per profile into the output directory. Profiles carrying an originalPage
reference are linked from the index but not regenerated.")]
struct Cli {
    /// Profile list JSON file
    #[arg(default_value = "profiles.json")]
    input: PathBuf,

    /// Output directory for the generated pages
    #[arg(default_value = ".")]
    output: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match meibo_sitegen::generate(&cli.input, &cli.output) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Site generation failed: {e}");
            ExitCode::FAILURE
        }
    }
}
