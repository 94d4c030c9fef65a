use clap::Parser;
use course_tools::app;
use course_tools::config::CliConfig;
use course_tools::core::JsonValidator;
use course_tools::utils::logger;
use course_tools::utils::validation::Validate;

/// Check that the course file is valid JSON
#[derive(Parser)]
#[command(name = "validate_json")]
struct Cli {
    #[command(flatten)]
    config: CliConfig,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.config.verbose);

    if let Err(e) = cli.config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    app::launch(JsonValidator, &cli.config)?;
    Ok(())
}
