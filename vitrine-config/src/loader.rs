use std::env;
use std::path::PathBuf;

use tracing::{info, warn};
use vitrine_core::StorefrontSettings;

use crate::error::ConfigLoadError;
use crate::models::{StorefrontConfig, StorefrontConfigSource};
use crate::validation::{self, ConfigWarnings};

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    /// Directory searched for default config files. Defaults to the
    /// working directory.
    pub search_root: Option<PathBuf>,
}

/// Validated configuration ready to drive a storefront.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: StorefrontConfig,
    pub settings: StorefrontSettings,
    pub source: StorefrontConfigSource,
    pub warnings: ConfigWarnings,
    pub env_file_loaded: bool,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn with_search_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.options.search_root = Some(root.into());
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };

        let (config, source) = self.read_config()?;
        let warnings = validation::apply_guard_rails(&config)?;
        let settings = config
            .to_settings()
            .map_err(|source| ConfigLoadError::Settings { source })?;

        info!(%source, env_file_loaded, "storefront configuration loaded");
        for warning in warnings.iter() {
            warn!(hint = ?warning.hint, "{}", warning.message);
        }

        Ok(ConfigLoad {
            config,
            settings,
            source,
            warnings,
            env_file_loaded,
        })
    }

    fn read_config(
        &self,
    ) -> Result<(StorefrontConfig, StorefrontConfigSource), ConfigLoadError>
    {
        if let Some(path) = &self.options.config_path {
            if !path.exists() {
                return Err(ConfigLoadError::MissingConfig {
                    path: path.clone(),
                });
            }
            let config = StorefrontConfig::load_from_file(path)
                .map_err(ConfigLoadError::Storefront)?;
            return Ok((config, StorefrontConfigSource::File(path.clone())));
        }

        let root = self
            .options
            .search_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        StorefrontConfig::resolve(|name| env::var(name).ok(), &root)
            .map_err(ConfigLoadError::Storefront)
    }
}
