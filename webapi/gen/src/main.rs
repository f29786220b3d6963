//! Command-line front end for the Steam Web API client generator.

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use steam_webapi_gen::fetch::{EndpointConfig, SchemaSource};
use steam_webapi_gen::schema::DuplicatePolicy;
use steam_webapi_gen::{GeneratorError, generate_to};

#[derive(Parser)]
#[command(
    name = "steam-webapi-gen",
    about = "Generates typed Rust clients from the Steam Web API schema"
)]
struct Cli {
    /// Steam Web API key. Keyed fetches see the full method list.
    #[arg(long, default_value = "")]
    key: String,

    /// Read the schema from a local JSON file instead of the live service.
    #[arg(long, conflicts_with_all = ["partner", "insecure"])]
    file: Option<PathBuf>,

    /// Fetch from the partner endpoint (implies HTTPS, requires a key).
    #[arg(long)]
    partner: bool,

    /// Fetch over plain HTTP. Ignored for partner fetches.
    #[arg(long)]
    insecure: bool,

    /// Directory to write the generated tree into.
    #[arg(long, short, default_value = "generated")]
    output: PathBuf,

    /// What to do when the schema repeats a name.
    #[arg(long, value_enum, default_value = "overwrite")]
    on_duplicate: OnDuplicate,

    /// Generate and validate everything without writing any file.
    #[arg(long)]
    dry_run: bool,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum OnDuplicate {
    /// Last schema entry wins, like the live service's own listings.
    Overwrite,
    /// Fail the run on any repeated name.
    Reject,
}

impl From<OnDuplicate> for DuplicatePolicy {
    fn from(value: OnDuplicate) -> Self {
        match value {
            OnDuplicate::Overwrite => DuplicatePolicy::Overwrite,
            OnDuplicate::Reject => DuplicatePolicy::Reject,
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "steam_webapi_gen=warn",
        1 => "steam_webapi_gen=info",
        2 => "steam_webapi_gen=debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("{} {err}", "error:".red().bold());
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            eprintln!("  {} {cause}", "caused by:".red());
            source = cause.source();
        }
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), GeneratorError> {
    if cli.partner && cli.key.is_empty() {
        return Err(GeneratorError::Config(
            "the partner endpoint requires --key".to_string(),
        ));
    }
    if cli.partner && cli.insecure {
        tracing::warn!("--insecure is ignored: partner traffic is always HTTPS");
    }

    let source = match &cli.file {
        Some(path) => SchemaSource::File(path.clone()),
        None => SchemaSource::Remote(EndpointConfig {
            key: cli.key.clone(),
            secure: !cli.insecure,
            partner: cli.partner,
        }),
    };

    let document = source.load().await?;
    let summary = generate_to(&document, &cli.output, cli.on_duplicate.into(), cli.dry_run)?;

    for skip in &summary.skipped_params {
        eprintln!("{} {skip}", "warning:".yellow().bold());
    }
    let verb = if cli.dry_run { "validated" } else { "wrote" };
    println!(
        "{} {verb} {} file(s) under {} ({} parameter(s) skipped)",
        "done:".green().bold(),
        summary.files_written.len(),
        cli.output.display(),
        summary.skipped_params.len()
    );
    Ok(())
}
