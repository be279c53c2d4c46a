use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use stackcheck::api::{sync_records, DigitalOceanClient, SyncAction};
use stackcheck::config::{load_config, Config};
use stackcheck::dns::models::{LOAD_BALANCER_OUTPUT, PLATFORM_STACK};
use stackcheck::dns::{group_by_domain, ResolutionContext, ResolvedDnsRecord};
use stackcheck::outputs::{LiveOutputs, MockOutputs, OutputSource};
use stackcheck::runner::{
    platform_context, resolve_config_records, InfrastructureValidator, ValidationMode,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stackcheck", about = "Validate stack outputs and resolve DNS records")]
struct Cli {
    #[arg(long, short, env = "STACKCHECK_CONFIG", default_value = "config.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate foundation and platform stack outputs
    Validate {
        #[arg(long, value_enum, default_value_t = ValidationMode::Mock)]
        mode: ValidationMode,
        /// Stack name, defaults to the configured environment
        #[arg(long)]
        stack: Option<String>,
        /// Write a JSON report to the configured report directory
        #[arg(long)]
        save: bool,
    },
    /// Print the resolved DNS records as JSON
    Resolve {
        #[arg(long)]
        load_balancer_ip: Option<String>,
        #[arg(long, value_enum, default_value_t = ValidationMode::Mock)]
        mode: ValidationMode,
        #[arg(long)]
        stack: Option<String>,
    },
    /// Create or adopt the resolved DNS records at the provider
    Sync {
        #[arg(long)]
        load_balancer_ip: Option<String>,
        #[arg(long, value_enum, default_value_t = ValidationMode::Live)]
        mode: ValidationMode,
        #[arg(long)]
        stack: Option<String>,
    },
}

fn output_source(mode: ValidationMode) -> Box<dyn OutputSource> {
    if mode.uses_live_outputs() {
        Box::new(LiveOutputs::new())
    } else {
        Box::new(MockOutputs)
    }
}

async fn resolve(
    config: &Config,
    load_balancer_ip: Option<String>,
    mode: ValidationMode,
    stack: Option<&str>,
) -> Result<Vec<ResolvedDnsRecord>> {
    let context = match load_balancer_ip {
        Some(ip) => ResolutionContext::new().with_value(PLATFORM_STACK, LOAD_BALANCER_OUTPUT, ip),
        None => platform_context(config, output_source(mode).as_ref(), stack).await?,
    };
    Ok(resolve_config_records(config, &context)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    match cli.command {
        Command::Validate { mode, stack, save } => {
            let source = output_source(mode);
            let validator = InfrastructureValidator::new(&config, source.as_ref(), mode);
            let report = validator.validate_all(stack.as_deref()).await?;
            println!("{}", report.render());

            if save {
                let dir = config
                    .report_dir
                    .clone()
                    .unwrap_or_else(|| PathBuf::from("reports"));
                report.save(&dir)?;
            }
            report.ensure_passed()?;
            println!("✅ Infrastructure validation passed");
        }
        Command::Resolve {
            load_balancer_ip,
            mode,
            stack,
        } => {
            let records = resolve(&config, load_balancer_ip, mode, stack.as_deref()).await?;
            for (domain, group) in group_by_domain(&records) {
                info!("{}: {} records", domain, group.len());
            }
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Command::Sync {
            load_balancer_ip,
            mode,
            stack,
        } => {
            mode.ensure_live_outputs("sync")?;
            let provider = config
                .provider
                .as_ref()
                .context("No provider configured")?;
            let records = resolve(&config, load_balancer_ip, mode, stack.as_deref()).await?;
            let client = DigitalOceanClient::with_base_url(
                provider.api_token.to_string(),
                provider.base_url.to_string(),
            );
            let actions = sync_records(&client, &records).await?;
            let adopted = actions
                .iter()
                .filter(|action| matches!(action, SyncAction::Adopted(_)))
                .count();
            println!(
                "Synced {} records ({} adopted, {} created)",
                actions.len(),
                adopted,
                actions.len() - adopted
            );
        }
    }

    Ok(())
}
