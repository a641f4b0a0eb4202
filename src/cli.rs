use crate::demo::{run_demo, DemoArgs};
use crate::server;
use candidate_aptitude::config::AppConfig;
use candidate_aptitude::error::AppError;
use candidate_aptitude::screening::{
    CandidateRecord, EvaluationRequest, Rubric, ScreeningService,
};
use candidate_aptitude::telemetry;
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Candidate Aptitude Screener",
    about = "Score job candidates against role rubrics from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate a JSON array of candidate records and print the annotated batch
    Evaluate(EvaluateArgs),
    /// Print the rubric resolved for a role
    Rubric(RubricArgs),
    /// Score a built-in set of sample candidates
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    /// JSON file holding an array of candidate records
    #[arg(long)]
    input: PathBuf,
    /// Role rubric to apply (defaults to APP_DEFAULT_ROLE)
    #[arg(long)]
    role: Option<String>,
    /// JSON file with a custom rubric; takes precedence over --role
    #[arg(long)]
    rubric: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RubricArgs {
    /// Role to resolve (defaults to APP_DEFAULT_ROLE)
    #[arg(long)]
    role: Option<String>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Evaluate(args) => run_evaluate(args),
        Command::Rubric(args) => run_rubric(args),
        Command::Demo(args) => run_demo(args),
    }
}

fn load_service() -> Result<ScreeningService, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(ScreeningService::new(config.screening.default_role))
}

fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let service = load_service()?;

    let candidates: Vec<CandidateRecord> = serde_json::from_str(&fs::read_to_string(&args.input)?)?;
    let rubric = match args.rubric {
        Some(path) => Some(serde_json::from_str::<Rubric>(&fs::read_to_string(path)?)?),
        None => None,
    };

    let evaluation = service.evaluate(EvaluationRequest {
        role: args.role,
        rubric,
        candidates,
    })?;

    println!("{}", serde_json::to_string_pretty(&evaluation)?);
    Ok(())
}

fn run_rubric(args: RubricArgs) -> Result<(), AppError> {
    let service = load_service()?;
    let view = service.rubric(args.role.as_deref());
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
