mod commands;
mod output;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use refdes_core::extraction::Backend;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "refdes",
    version,
    about = "Extract reference designators and Top/BTM sides from assembly PDFs"
)]
struct Cli {
    /// More log output (-v info, -vv per-line detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract designators from a PDF and write <name>_RefDes.xlsx next to it
    Extract {
        /// Path to the placement PDF
        input_file: Option<PathBuf>,

        /// Text extraction backend: auto (default), pdftotext or lopdf
        #[arg(short, long, default_value = "auto")]
        backend: Backend,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the spreadsheet here instead of next to the PDF
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Number of rows to preview after writing
        #[arg(long, default_value_t = 10)]
        preview: usize,
    },
    /// Classify already-extracted text without writing a spreadsheet
    Scan {
        /// Path to a plain text file
        text_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Extract {
            input_file,
            backend,
            output,
            out,
            preview,
        } => commands::extract::run(input_file, backend, &output, out, preview),
        Commands::Scan { text_file, output } => commands::scan::run(&text_file, &output),
    };

    match result {
        Ok(status) => {
            let code = status.exit_code();
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}
