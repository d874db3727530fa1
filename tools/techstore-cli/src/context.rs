//! CLI execution context.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use techstore_commerce::catalog::seed::{demo_catalog, demo_coupons};
use techstore_commerce::money::Currency;
use techstore_commerce::store::{KvPort, Store};
use techstore_kv::KvStore;

use crate::config::CliConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self {
            config,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &PathBuf) -> Option<CliConfig> {
        let config_names = ["techstore.toml", ".techstore.toml"];

        let mut current = start.clone();
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Currency prices are shown in.
    pub fn currency(&self) -> Currency {
        Currency::from_code(&self.config.store.currency).unwrap_or_default()
    }

    /// WhatsApp contact the checkout message is addressed to.
    pub fn whatsapp_number(&self) -> &str {
        &self.config.checkout.whatsapp_number
    }

    /// Directory the persisted snapshot lives in.
    pub fn data_dir(&self) -> PathBuf {
        match &self.config.store.data_dir {
            Some(dir) => self.resolve_path(dir),
            None => platform_data_dir().join("techstore"),
        }
    }

    /// Open the storefront state, rehydrating the persisted cart.
    ///
    /// The catalog and coupon book are the in-memory demo seed; only the
    /// cart, the applied coupon and the user placeholder survive runs.
    pub fn open_store(&self) -> Result<Store<KvPort>> {
        let data_dir = self.data_dir();
        self.output
            .debug(&format!("using data dir {}", data_dir.display()));
        let kv = KvStore::open(&data_dir)
            .with_context(|| format!("Failed to open data dir {}", data_dir.display()))?;

        Ok(Store::open(
            demo_catalog(),
            demo_coupons(),
            self.currency(),
            KvPort::new(kv),
        ))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// Get the platform-specific data directory.
fn platform_data_dir() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share")
    } else {
        PathBuf::from("/tmp")
    }
}
