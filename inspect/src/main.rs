//! graphmodel-inspect
//!
//! Decodes a JSON payload through one of the model families and prints which
//! concrete type the discriminator resolved to, the fields that landed in the
//! additional-data bag, and the payload as re-encoded from the decoded value.
//!
//! Usage:
//!   graphmodel-inspect payload.json --family entity --pretty
//!   cat page.json | graphmodel-inspect - --family entity-collection

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use graphmodel_inspect::{inspect, read_input, render, Family};
use graphmodel_serialization::JsonConfig;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "graphmodel-inspect")]
#[command(about = "Decode a payload through a model family and report the resolved type")]
struct Args {
    /// Payload file, or `-` for stdin
    input: PathBuf,

    /// Family to decode the payload through
    #[arg(short, long, value_enum, default_value = "entity")]
    family: Family,

    /// Indent the report
    #[arg(short, long)]
    pretty: bool,

    /// Maximum nesting depth of the payload
    #[arg(long, default_value_t = JsonConfig::default().max_depth)]
    max_depth: usize,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = JsonConfig {
        max_depth: args.max_depth,
        pretty: args.pretty,
        ..JsonConfig::default()
    };

    let bytes = read_input(&args.input)?;
    info!("Decoding {} bytes as {}", bytes.len(), args.family.name());
    let report = inspect(&bytes, args.family, &config)?;
    println!("{}", render(&report, config.pretty)?);
    Ok(())
}
