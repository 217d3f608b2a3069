use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use codec::EncodeOptions;
use openlr_tools::{
    collect_inputs, encode_report, explain_line, format_layout, load_line, EncodeReport,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "openlr-tools",
    version,
    about = "OpenLR line location reference encoding tools"
)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode JSON line references.
    Encode {
        /// A JSON file, or a directory of them.
        path: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = EncodeFormat::Base64)]
        format: EncodeFormat,
        /// Reject values the wire format would truncate or wrap.
        #[arg(long)]
        strict: bool,
        /// Glob filter when encoding a directory.
        #[arg(long)]
        glob: Option<String>,
    },
    /// Print the byte layout of an encoded line reference.
    Explain {
        /// A JSON file.
        path: PathBuf,
        /// Reject values the wire format would truncate or wrap.
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EncodeFormat {
    Base64,
    Hex,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Encode {
            path,
            format,
            strict,
            glob,
        } => {
            let options = encode_options(strict);
            if path.is_dir() {
                let inputs = collect_inputs(&path, glob.as_deref())?;
                info!(dir = %path.display(), count = inputs.len(), "encoding directory");
                for input in inputs {
                    let report = encode_file(&input, &options)?;
                    print_report(&report, format, true)?;
                }
            } else {
                let report = encode_file(&path, &options)?;
                print_report(&report, format, false)?;
            }
        }
        Command::Explain { path, strict } => {
            let line = load_line(&path)?;
            let entries = explain_line(&line, &encode_options(strict))
                .with_context(|| format!("encode {}", path.display()))?;
            print!("{}", format_layout(&entries));
        }
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

const fn encode_options(strict: bool) -> EncodeOptions {
    if strict {
        EncodeOptions::strict()
    } else {
        EncodeOptions::lenient()
    }
}

fn encode_file(path: &Path, options: &EncodeOptions) -> Result<EncodeReport> {
    let line = load_line(path)?;
    debug!(path = %path.display(), points = line.points.len(), "loaded line");
    encode_report(&line, options, Some(path)).with_context(|| format!("encode {}", path.display()))
}

fn print_report(report: &EncodeReport, format: EncodeFormat, labeled: bool) -> Result<()> {
    let label = || {
        report
            .path
            .as_ref()
            .map(|path| format!("{}: ", path.display()))
            .unwrap_or_default()
    };
    match format {
        EncodeFormat::Base64 if labeled => println!("{}{}", label(), report.base64),
        EncodeFormat::Base64 => println!("{}", report.base64),
        EncodeFormat::Hex if labeled => println!("{}{}", label(), report.hex),
        EncodeFormat::Hex => println!("{}", report.hex),
        EncodeFormat::Json => {
            let json = serde_json::to_string_pretty(report).context("serialize json")?;
            println!("{json}");
        }
    }
    Ok(())
}
