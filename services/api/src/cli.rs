use crate::predict::{run_batch, run_options, run_predict, BatchArgs, PredictArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use salary_whisperer::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Salary Whisperer",
    about = "Estimate salary ranges from the command line or over HTTP",
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
    /// Estimate a salary range for a single profile
    Predict(PredictArgs),
    /// Estimate every profile in a CSV file
    Batch(BatchArgs),
    /// List the selectable options for each profile field
    Options,
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

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Predict(args) => run_predict(args).await,
        Command::Batch(args) => run_batch(args),
        Command::Options => {
            run_options();
            Ok(())
        }
    }
}
