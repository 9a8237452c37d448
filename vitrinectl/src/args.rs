use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use vitrine_core::CarouselKey;

#[derive(Parser)]
#[command(
    name = "vitrinectl",
    version,
    about = "Drive the Vitrine storefront engine without a renderer"
)]
pub struct Cli {
    /// Storefront config file (TOML or JSON). Overrides $VITRINE_CONFIG_PATH.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Env file read before configuration is resolved
    #[arg(long, global = true, default_value = ".env")]
    pub env_file: PathBuf,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the storefront carousels in real time and log every page change
    Run(RunArgs),
    /// Print the built-in catalog as JSON
    Catalog {
        #[arg(long)]
        pretty: bool,
    },
    /// Inspect the effective configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration and where it came from
    Show,
    /// Validate the configuration and report guard-rail warnings
    Check,
}

#[derive(Debug, Clone, clap::Args)]
pub struct RunArgs {
    /// How long to run, e.g. `30s` or `2m`
    #[arg(long, default_value = "30s", value_parser = humantime::parse_duration)]
    pub duration: Duration,
    /// Initial viewport width in logical pixels
    #[arg(long, default_value_t = 1024)]
    pub width: u32,
    /// Keep the pointer over a carousel for the whole run
    #[arg(long, value_enum)]
    pub hover: Vec<CarouselArg>,
    /// Resize the viewport after a delay, e.g. `10s=600`
    #[arg(long = "resize-at", value_name = "DELAY=WIDTH")]
    pub resize_at: Vec<ResizeAt>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CarouselArg {
    Hero,
    Deals,
    Testimonials,
}

impl From<CarouselArg> for CarouselKey {
    fn from(arg: CarouselArg) -> Self {
        match arg {
            CarouselArg::Hero => CarouselKey::Hero,
            CarouselArg::Deals => CarouselKey::Deals,
            CarouselArg::Testimonials => CarouselKey::Testimonials,
        }
    }
}

/// Scheduled viewport resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeAt {
    pub after: Duration,
    pub width: u32,
}

impl FromStr for ResizeAt {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (after, width) = raw
            .split_once('=')
            .ok_or_else(|| format!("expected DELAY=WIDTH, got `{raw}`"))?;
        let after = humantime::parse_duration(after.trim())
            .map_err(|err| format!("invalid delay `{after}`: {err}"))?;
        let width = width
            .trim()
            .parse()
            .map_err(|err| format!("invalid width `{width}`: {err}"))?;
        Ok(Self { after, width })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_at_parses_delay_and_width() {
        let resize: ResizeAt = "10s=600".parse().unwrap();
        assert_eq!(resize.after, Duration::from_secs(10));
        assert_eq!(resize.width, 600);

        let resize: ResizeAt = "1m 30s = 1280".parse().unwrap();
        assert_eq!(resize.after, Duration::from_secs(90));
        assert_eq!(resize.width, 1280);
    }

    #[test]
    fn resize_at_rejects_garbage() {
        assert!("600".parse::<ResizeAt>().is_err());
        assert!("soon=600".parse::<ResizeAt>().is_err());
        assert!("10s=wide".parse::<ResizeAt>().is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
