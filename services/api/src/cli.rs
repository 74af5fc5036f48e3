use crate::demo::{run_quote_demo, QuoteDemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use offer_costing::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Offer Costing",
    about = "Compute employer cost breakdowns and candidate offers from the command line",
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
    /// Quote a worked example without starting the service
    Quote {
        #[command(subcommand)]
        command: QuoteCommand,
    },
}

#[derive(Subcommand, Debug)]
enum QuoteCommand {
    /// Walk the five phases for a sample candidate and print the breakdown
    Demo(QuoteDemoArgs),
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
        Command::Quote {
            command: QuoteCommand::Demo(args),
        } => run_quote_demo(args),
    }
}
