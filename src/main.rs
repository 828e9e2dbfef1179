// Inherit lint configuration from lib.rs for consistency
#![allow(clippy::missing_errors_doc, clippy::needless_pass_by_value)]

use clap::Parser;
use tracing_subscriber::EnvFilter;

use whatthetokens::catalog::Catalog;
use whatthetokens::cli::commands::{Cli, Command};
use whatthetokens::cli::output;
use whatthetokens::config::{Config, EstimateSettings, OutputFormat};
use whatthetokens::operations::{self, EstimateRequest};

fn main() {
    let cli = Cli::parse();

    let default_level = if matches!(cli.command, Command::Mcp) {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    init_tracing(default_level);

    if let Err(e) = run(cli) {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

/// Log to stderr; stdout carries command output and the MCP transport.
fn init_tracing(default_level: tracing::Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

fn run(cli: Cli) -> CmdResult {
    let config = get_config()?;
    let catalog = get_catalog(&config)?;
    let format = cli.format.unwrap_or(config.settings.output.format);

    match cli.command {
        Command::Estimate {
            query,
            model,
            output_tokens,
        } => cmd_estimate(&config, &catalog, &query, model.as_deref(), output_tokens, format),
        Command::Tokens { text } => cmd_tokens(&text, format),
        Command::Compare { energy_wh } => cmd_compare(&catalog, energy_wh, format),
        Command::Models { provider } => cmd_models(&catalog, provider.as_deref(), format),
        Command::Equivalences { all } => cmd_equivalences(&catalog, all, format),
        Command::Mcp => cmd_mcp(catalog, config.settings.estimate),
    }
}

type CmdResult = Result<(), Box<dyn std::fmt::Display>>;

fn map_err(e: impl std::fmt::Display + 'static) -> Box<dyn std::fmt::Display> {
    Box::new(e.to_string())
}

fn get_config() -> Result<Config, Box<dyn std::fmt::Display>> {
    Config::from_cwd().map_err(map_err)
}

fn get_catalog(config: &Config) -> Result<Catalog, Box<dyn std::fmt::Display>> {
    Catalog::load(&config.settings.catalog).map_err(map_err)
}

fn cmd_estimate(
    config: &Config,
    catalog: &Catalog,
    query: &str,
    model: Option<&str>,
    output_tokens: Option<u64>,
    format: OutputFormat,
) -> CmdResult {
    let request = EstimateRequest {
        query,
        model_id: model,
        output_tokens,
    }
    .or_defaults(&config.settings.estimate);
    let report = operations::estimate(catalog, &request).map_err(map_err)?;
    println!("{}", output::format_output(&report, format));
    Ok(())
}

fn cmd_tokens(text: &str, format: OutputFormat) -> CmdResult {
    let result = operations::count_tokens(text);
    println!("{}", output::format_output(&result, format));
    Ok(())
}

fn cmd_compare(catalog: &Catalog, energy_wh: f64, format: OutputFormat) -> CmdResult {
    let result = operations::compare_energy(catalog, energy_wh).map_err(map_err)?;
    println!("{}", output::format_output(&result, format));
    Ok(())
}

fn cmd_models(catalog: &Catalog, provider: Option<&str>, format: OutputFormat) -> CmdResult {
    let result = operations::list_models(catalog, provider);
    println!("{}", output::format_output(&result, format));
    Ok(())
}

fn cmd_equivalences(catalog: &Catalog, all: bool, format: OutputFormat) -> CmdResult {
    let result = operations::list_equivalences(catalog, all);
    println!("{}", output::format_output(&result, format));
    Ok(())
}

fn cmd_mcp(catalog: Catalog, defaults: EstimateSettings) -> CmdResult {
    let rt = tokio::runtime::Runtime::new().map_err(map_err)?;
    rt.block_on(async {
        whatthetokens::mcp::server::start_mcp_server(catalog, defaults)
            .await
            .map_err(map_err)
    })
}
