use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use searchopts::{Options, check, format, parse};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log decoding and validation steps
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse option strings and print each as a JSON record
    Parse {
        #[arg(value_name = "RAW", required = true)]
        raw: Vec<String>,

        /// Indent the JSON output
        #[arg(short, long)]
        pretty: bool,
    },
    /// Read a JSON record and print its canonical option string
    Format {
        /// JSON record; read from stdin when omitted
        #[arg(value_name = "JSON")]
        json: Option<String>,
    },
    /// Print the canonical form of each option string
    Normalize {
        #[arg(value_name = "RAW", required = true)]
        raw: Vec<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Parse { raw, pretty } => {
            for s in &raw {
                let opts = parse_arg(s)?;
                let json = if pretty {
                    serde_json::to_string_pretty(&opts)?
                } else {
                    serde_json::to_string(&opts)?
                };
                println!("{json}");
            }
        }
        Command::Format { json } => {
            let json = match json {
                Some(json) => json,
                None => {
                    let mut buf = String::new();
                    io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read stdin")?;
                    buf
                }
            };
            let opts: Options =
                serde_json::from_str(&json).context("Failed to read options record")?;
            check(&opts).context("Invalid options record")?;
            println!("{}", format(&opts));
        }
        Command::Normalize { raw } => {
            for s in &raw {
                println!("{}", format(&parse_arg(s)?));
            }
        }
    }
    Ok(())
}

fn parse_arg(raw: &str) -> Result<Options> {
    parse(raw).with_context(|| format!("Failed to parse {raw:?}"))
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}
