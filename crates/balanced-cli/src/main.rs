/*
[INPUT]:  CLI arguments, stage config file, BALANCED_* environment variables
[OUTPUT]: JSON of provisioned environments, listings and resources on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, subcommands, or environment resolution
*/

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use balanced_adapter::{BalancedClient, ClientConfig, Environment, Method, Payload, StageConfig};

const SANDBOX_STAGE: &str = "test";

#[derive(Parser, Debug)]
#[command(name = "balanced", version, about = "Balanced payments API client")]
struct Cli {
    /// Deployment stage; `test` provisions a fresh sandbox marketplace,
    /// anything else reads `{stage}/balanced.conf`
    #[arg(long = "stage", value_name = "STAGE", default_value = SANDBOX_STAGE)]
    stage: String,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the resolved environment
    Provision,
    /// List a collection
    List {
        #[arg(value_enum)]
        resource: Resource,
        #[arg(long, default_value_t = 10)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Fetch any resource by URI
    Get { uri: String },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Resource {
    Cards,
    Holds,
    Debits,
    Credits,
    Refunds,
    BankAccounts,
    Events,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    info!(stage = %args.stage, "starting balanced client");
    let environment = resolve_environment(&args.stage).await?;
    info!(
        api_root = environment.api_root(),
        marketplace_id = environment.marketplace_id().unwrap_or_default(),
        "environment resolved"
    );

    let output = match args.command {
        Command::Provision => json!({
            "api_root": environment.api_root(),
            "api_key": environment.api_key(),
            "marketplace_id": environment.marketplace_id(),
        }),
        Command::List {
            resource,
            limit,
            offset,
        } => {
            let client = BalancedClient::new(environment).context("build client")?;
            list(&client, resource, limit, offset)
                .await
                .with_context(|| format!("list {resource:?}"))?
        }
        Command::Get { uri } => {
            let client = BalancedClient::new(environment).context("build client")?;
            let bytes = client
                .execute(Method::GET, &uri, &Payload::new())
                .await
                .with_context(|| format!("get {uri}"))?;
            serde_json::from_slice(&bytes).context("decode response")?
        }
    };

    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("encode output")?
    );
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

async fn resolve_environment(stage: &str) -> Result<Environment> {
    if stage == SANDBOX_STAGE {
        return Environment::provision_sandbox(ClientConfig::default())
            .await
            .context("provision sandbox marketplace");
    }
    let config = StageConfig::load(stage).with_context(|| format!("load stage {stage}"))?;
    Ok(config.to_environment())
}

async fn list(
    client: &BalancedClient,
    resource: Resource,
    limit: u32,
    offset: u32,
) -> Result<serde_json::Value> {
    let value = match resource {
        Resource::Cards => serde_json::to_value(client.list_cards(limit, offset).await?)?,
        Resource::Holds => serde_json::to_value(client.list_holds(limit, offset).await?)?,
        Resource::Debits => serde_json::to_value(client.list_debits(limit, offset).await?)?,
        Resource::Credits => serde_json::to_value(client.list_credits(limit, offset).await?)?,
        Resource::Refunds => serde_json::to_value(client.list_refunds(limit, offset).await?)?,
        Resource::BankAccounts => {
            serde_json::to_value(client.list_bank_accounts(limit, offset).await?)?
        }
        Resource::Events => serde_json::to_value(client.list_events(limit, offset).await?)?,
    };
    Ok(value)
}
