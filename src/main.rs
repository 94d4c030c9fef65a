use clap::{Parser, Subcommand};
use course_tools::app;
use course_tools::config::CliConfig;
use course_tools::core::{CourseLister, IdLineScanner, JsonValidator, SummaryExporter};
use course_tools::utils::logger;
use course_tools::utils::validation::Validate;

#[derive(Parser)]
#[command(name = "course-tools")]
#[command(about = "Small utilities for inspecting the course data file")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print raw lines holding a four-space-indented "id" field
    Scan(CliConfig),
    /// Print "ID: <id>, Title: <title>" for every course
    List(CliConfig),
    /// Print the id and title of every course as a JSON array
    Export(CliConfig),
    /// Check that the course file is valid JSON
    Validate(CliConfig),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.command {
        Command::Scan(config)
        | Command::List(config)
        | Command::Export(config)
        | Command::Validate(config) => config,
    };
    logger::init_cli_logger(config.verbose);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let outcome = match &cli.command {
        Command::Scan(config) => app::launch(IdLineScanner::new(), config)?,
        Command::List(config) => app::launch(CourseLister, config)?,
        Command::Export(config) => app::launch(SummaryExporter, config)?,
        Command::Validate(config) => app::launch(JsonValidator, config)?,
    };

    tracing::debug!("Finished with {:?}", outcome);
    Ok(())
}
