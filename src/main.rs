use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{filter::Directive, EnvFilter};
use wordsift::{cli::Cli, pipeline};

/// Send pipeline stage events (and each dropped plural) to stderr
///
/// RUST_LOG still applies to other targets; this crate is forced to TRACE.
fn init_tracing(debug: bool) {
    if !debug {
        return;
    }

    let filter = match "wordsift=trace".parse::<Directive>() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let config = args.pipeline_config();
    let stats = pipeline::run(&config)?;

    println!(
        "{} words written to {}",
        stats.written,
        config.output.display()
    );

    if args.stats {
        stats.print_summary();
    }

    Ok(())
}
