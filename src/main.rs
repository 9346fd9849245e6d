//! mrpdump CLI entry point.

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mrpdump::cli::{input, write_field_table, Args, OutputFormatter, Payload};
use mrpdump_core::{default_registry, FrameDecoder, Protocol};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Set up logging
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| args.log_filter().into()),
        )
        .init();

    if args.list_fields {
        return list_fields();
    }

    let payloads = collect_payloads(&args)?;
    if payloads.is_empty() {
        bail!("no payloads to decode. Use --help for usage.");
    }

    let decoder = FrameDecoder::new(args.decode_config());
    let formatter = OutputFormatter::new(args.format);
    let mut stdout = io::stdout().lock();

    let mut malformed = 0;
    for payload in &payloads {
        tracing::debug!(payload = %payload.label, len = payload.bytes.len(), "decoding");
        let outcome = decoder.decode(&payload.bytes, args.offset);
        if let Err(e) = &outcome {
            tracing::info!(payload = %payload.label, error = %e, "malformed payload");
            malformed += 1;
        }
        formatter
            .write(&payload.label, &outcome, &mut stdout)
            .context("Failed to write output")?;
    }
    stdout.flush()?;

    if malformed > 0 {
        bail!("{malformed} of {} payloads malformed", payloads.len());
    }
    Ok(())
}

fn collect_payloads(args: &Args) -> Result<Vec<Payload>> {
    if let Some(path) = &args.file {
        return Ok(vec![input::from_file(path)?]);
    }
    if args.reads_stdin() {
        return input::from_lines(io::stdin().lock());
    }
    input::from_args(&args.payloads)
}

fn list_fields() -> Result<()> {
    let registry = default_registry();
    let mut stdout = io::stdout().lock();

    for parser in registry.all_parsers() {
        writeln!(stdout, "{} ({})", parser.display_name(), parser.name())?;
        write_field_table(&parser.schema_fields(), &mut stdout)?;
    }
    Ok(())
}
