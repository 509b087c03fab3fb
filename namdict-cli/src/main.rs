//! convert-names
//!
//! Converts nam_dict.txt into the `name;origins;` list format.

mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use namdict_convert::{ConvertOptions, convert_file};

const DATASET_FILE: &str = "0717-182/nam_dict.txt";
const DATASET_URL: &str = "https://www.heise.de/ct/ftp/07/17/182/";

#[derive(Parser, Debug)]
#[command(name = "convert-names")]
#[command(about = "Convert nam_dict.txt into a name;origins; list", long_about = None)]
#[command(disable_help_flag = true)]
struct Cli {
    /// Path to nam_dict.txt (ISO-8859-1)
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,

    /// Path of the list to write
    #[arg(allow_hyphen_values = true)]
    output: PathBuf,
}

fn main() -> ExitCode {
    logging::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            print_usage();
            return ExitCode::from(1);
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<(), namdict_convert::ConvertError> {
    let report = convert_file(&cli.input, &cli.output, &ConvertOptions::default())?;

    log::info!(
        "Converted {} lines: {} names, {} reference entries, {} warnings",
        report.lines,
        report.names,
        report.references,
        report.warnings.len(),
    );
    log::info!(
        "{} Wrote {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        cli.output.display(),
    );
    Ok(())
}

fn print_usage() {
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| "convert-names".to_string());
    log::info!("Usage: {program} <input-file> <output-file>");
    log::info!("");
    log::info!("This program processes {DATASET_FILE}");
    log::info!("from {DATASET_URL}");
}
