use anyhow::Result;
use clap::Parser;
use stacfix::{run_batch, BatchOptions, FixOptions, StacError, DEFAULT_ITEMS_DIR};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status when the items directory is missing or the run cannot proceed
/// (unreadable directory, closed stdout)
const EXIT_ENVIRONMENT_ERROR: u8 = 1;

#[derive(Parser)]
#[command(name = "stacfix")]
#[command(version, about = "Fix STAC Items: parse stringified geometry and drop empty fields")]
#[command(long_about = "Fix STAC Items: parse stringified geometry and drop empty fields\n\n\
    Every *.json file in the items directory whose \"type\" is \"Feature\" is checked.\n\
    Modified files are rewritten in place with 2-space indentation.\n\n\
    Exit status:\n  \
    0  nothing needed fixing\n  \
    1  the items directory is missing or cannot be read\n  \
    2  one or more files were modified")]
struct Cli {
    /// Directory containing STAC Item JSON files
    #[arg(default_value = DEFAULT_ITEMS_DIR)]
    dir: PathBuf,

    /// Report what would change without writing any file
    #[arg(long)]
    dry_run: bool,

    /// Verbose output for debugging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(error) => {
            eprintln!("❌ {error:#}");
            ExitCode::from(EXIT_ENVIRONMENT_ERROR)
        }
    }
}

fn run(cli: &Cli) -> Result<u8> {
    if cli.verbose {
        eprintln!("Items directory: {}", cli.dir.display());
    }

    let options = BatchOptions {
        fix: FixOptions {
            dry_run: cli.dry_run,
        },
        verbose: cli.verbose,
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    let summary = match run_batch(&cli.dir, options, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(summary) => summary,
        Err(error @ StacError::DirectoryMissing(_)) => {
            eprintln!("❌ {error}");
            return Ok(EXIT_ENVIRONMENT_ERROR);
        }
        Err(error) => return Err(error.into()),
    };

    Ok(summary.exit_code())
}
