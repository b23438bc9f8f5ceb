use clap::Parser;
use devfile_registry::utils::{logger, validation::Validate};
use devfile_registry::{fetch_samples, CliConfig, ConfigProvider, RegistryClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting devfile-registry CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    let client = RegistryClient::from_config(&config)?;

    match fetch_samples(&client, config.registry_url()).await {
        Ok(samples) => {
            tracing::info!(
                "Fetched {} samples from {}",
                samples.len(),
                config.registry_url()
            );
            println!("{}", serde_json::to_string_pretty(&samples)?);
        }
        Err(e) => {
            tracing::error!("Failed to fetch samples: {}", e);
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
