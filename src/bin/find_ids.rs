use clap::Parser;
use course_tools::app;
use course_tools::config::CliConfig;
use course_tools::core::IdLineScanner;
use course_tools::utils::logger;
use course_tools::utils::validation::Validate;

/// Print every line of the course file that holds a four-space-indented "id" field
#[derive(Parser)]
#[command(name = "find_ids")]
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

    app::launch(IdLineScanner::new(), &cli.config)?;
    Ok(())
}
