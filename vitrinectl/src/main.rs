//! `vitrinectl`: headless driver for the Vitrine storefront engine.

mod args;
mod run;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vitrine_config::{ConfigLoad, ConfigLoader, ConfigLoaderOptions};
use vitrine_core::model::Catalog;

use crate::args::{Cli, Command, ConfigAction};

fn load_config(cli: &Cli) -> Result<ConfigLoad> {
    ConfigLoader::with_options(ConfigLoaderOptions {
        config_path: cli.config.clone(),
        env_file: Some(cli.env_file.clone()),
        search_root: None,
    })
    .load()
    .context("failed to load storefront configuration")
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitrinectl=info,vitrine_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Command::Run(args) => {
            let load = load_config(&cli)?;
            let catalog = Catalog::storefront();
            catalog.validate().context("built-in catalog is invalid")?;
            let summaries = run::run(&catalog, &load.settings, args).await?;
            for summary in summaries {
                println!("{summary}");
            }
        }
        Command::Catalog { pretty } => {
            let catalog = Catalog::storefront();
            let json = if *pretty {
                serde_json::to_string_pretty(&catalog)
            } else {
                serde_json::to_string(&catalog)
            }
            .context("failed to serialize catalog")?;
            println!("{json}");
        }
        Command::Config { action } => {
            let load = load_config(&cli)?;
            match action {
                ConfigAction::Show => {
                    println!("# source: {}", load.source);
                    let rendered = toml::to_string_pretty(&load.config)
                        .context("failed to render configuration")?;
                    print!("{rendered}");
                }
                ConfigAction::Check => {
                    for warning in load.warnings.iter() {
                        println!("warning: {}", warning.message);
                        if let Some(hint) = &warning.hint {
                            println!("  hint: {hint}");
                        }
                    }
                    println!(
                        "configuration OK ({} warning(s), source: {})",
                        load.warnings.len(),
                        load.source
                    );
                }
            }
        }
    }

    Ok(())
}
