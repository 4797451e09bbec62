use arune::config::AppConfig;
use arune::error::AppError;
use arune::telemetry;
use clap::{Parser, Subcommand};

use crate::demo::{run_demo, run_score, DemoArgs, ScoreArgs};

#[derive(Parser, Debug)]
#[command(
    name = "Arune Report Engine",
    about = "Score Arune surveys and render financial-profile reports from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run an end-to-end demo: seed a session, submit the bundled sample
    /// survey, generate and print the report
    Demo(DemoArgs),
    /// Score an answers JSON file and print the resulting report
    Score(ScoreArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Demo(args) => run_demo(args, &config),
        Command::Score(args) => run_score(args, &config),
    }
}
