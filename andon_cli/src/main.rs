mod commands;

use anyhow::Result;
use andon_api::Client;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "andon")]
#[command(about = "Report station data to Andon")]
struct Cli {
    /// Organization name within Andon
    #[arg(long, env = "ANDON_ORG_NAME", global = true)]
    org: Option<String>,

    /// API token generated on the Andon org settings page
    #[arg(long, env = "ANDON_API_TOKEN", global = true, hide_env_values = true)]
    token: Option<String>,

    /// Override the API base URL
    #[arg(long, env = "ANDON_ENDPOINT", global = true)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report the outcome of a process at a station
    Report(commands::report::ReportArgs),
    /// Change the status color of a station
    UpdateStatus(commands::status::UpdateStatusArgs),
}

impl Commands {
    fn is_dry_run(&self) -> bool {
        match self {
            Commands::Report(args) => args.dry_run,
            Commands::UpdateStatus(args) => args.dry_run,
        }
    }
}

impl Cli {
    fn org_name(&self) -> Result<&str> {
        self.org
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("--org or ANDON_ORG_NAME is required"))
    }

    fn client(&self) -> Result<Client> {
        let org = self.org_name()?;
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("--token or ANDON_API_TOKEN is required"))?;
        let mut client = Client::new(org, token)?;
        if let Some(ref endpoint) = self.endpoint {
            client.set_endpoint(endpoint);
        }
        Ok(client)
    }
}

/// Runs the selected subcommand. Dry runs only need the organization name,
/// so the client (and its token) is built only when a request is sent.
async fn dispatch(cli: &Cli) -> Result<()> {
    if cli.command.is_dry_run() {
        let org = cli.org_name()?;
        return match &cli.command {
            Commands::Report(args) => commands::print_payload(org, &args.to_request()),
            Commands::UpdateStatus(args) => commands::print_payload(org, &args.to_request()),
        };
    }

    let client = cli.client()?;
    match &cli.command {
        Commands::Report(args) => commands::report::run(args, &client).await?,
        Commands::UpdateStatus(args) => commands::status::run(args, &client).await?,
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("andon=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    dispatch(&cli).await
}
