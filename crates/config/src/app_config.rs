// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::load_config::{find_in_parent, resolve_config_path};
use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};
use tracing::debug;
use wcs_convolution::ConvolverKind;
use wcs_lcew::OracleKind;
use wcs_matmul::ProductConfig;

/// File searched for upwards from the working directory.
pub const DEFAULT_CONFIG_NAME: &str = "wcs.config.yaml";

/// Prefix of environment overrides, e.g. `WCS_PRODUCT__BUDGET_FACTOR=10`.
pub const ENV_PREFIX: &str = "WCS_";

/// The full application configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WcsConfig {
    /// Matrix product tuning
    pub product: ProductConfig,
    /// LCEW backend used by the product
    pub oracle: OracleKind,
    /// Convolution backend used by the pattern matcher
    pub convolver: ConvolverKind,
    /// Default tracing filter when `RUST_LOG` is unset and no `-v` is given
    pub log_level: String,
}

impl Default for WcsConfig {
    fn default() -> Self {
        Self {
            product: ProductConfig::default(),
            oracle: OracleKind::default(),
            convolver: ConvolverKind::default(),
            log_level: "info".to_string(),
        }
    }
}

impl WcsConfig {
    /// Rejects settings no command can run with.
    pub fn validate(&self) -> Result<()> {
        self.product
            .validate()
            .context("Invalid product configuration")?;
        if self.log_level.trim().is_empty() {
            bail!("log_level must not be empty");
        }
        Ok(())
    }

    /// Renders the configuration as it would appear in a config file.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Could not serialize configuration")
    }
}

/// Load the configuration, reading the file at `config_file` if given or the
/// nearest `wcs.config.yaml` otherwise.
pub fn load_config(config_file: Option<PathBuf>) -> Result<WcsConfig> {
    load_config_in(env::current_dir()?, config_file)
}

/// [`load_config`] relative to an explicit working directory.
pub fn load_config_in(cwd: PathBuf, config_file: Option<PathBuf>) -> Result<WcsConfig> {
    let explicit = config_file.is_some();
    let resolved = resolve_config_path(find_in_parent, cwd, DEFAULT_CONFIG_NAME, config_file);

    let mut figment = Figment::from(Serialized::defaults(WcsConfig::default()));
    if let Some(path) = resolved {
        if explicit && !path.exists() {
            bail!("Configuration file not found: {}", path.display());
        }
        debug!(path = %path.display(), "reading configuration file");
        figment = figment.merge(Yaml::file(path));
    }

    let config: WcsConfig = figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .context("Could not parse configuration")?;

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|jail| {
            let config =
                load_config_in(jail.directory().to_path_buf(), None).map_err(|e| e.to_string())?;
            assert_eq!(config, WcsConfig::default());
            assert_eq!(config.product.budget_factor, 50.0);
            assert_eq!(config.oracle, OracleKind::Jump);
            assert_eq!(config.convolver, ConvolverKind::Ntt);
            Ok(())
        });
    }

    #[test]
    fn test_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_NAME,
                r#"
oracle: naive
product:
  budget_factor: 2.5
"#,
            )?;
            jail.create_dir("nested")?;
            let cwd = jail.directory().join("nested");

            let config = load_config_in(cwd, None).map_err(|e| e.to_string())?;
            assert_eq!(config.oracle, OracleKind::Naive);
            assert_eq!(config.product.budget_factor, 2.5);
            // untouched keys keep their defaults
            assert_eq!(config.convolver, ConvolverKind::Ntt);
            assert_eq!(config.log_level, "info");
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file() {
        Jail::expect_with(|jail| {
            jail.create_file(DEFAULT_CONFIG_NAME, "log_level: warn\n")?;
            jail.create_file("other.yaml", "log_level: trace\nconvolver: schoolbook\n")?;

            let config = load_config_in(
                jail.directory().to_path_buf(),
                Some(PathBuf::from("other.yaml")),
            )
            .map_err(|e| e.to_string())?;
            assert_eq!(config.log_level, "trace");
            assert_eq!(config.convolver, ConvolverKind::Schoolbook);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(DEFAULT_CONFIG_NAME, "product:\n  budget_factor: 2.5\n")?;
            jail.set_env("WCS_PRODUCT__BUDGET_FACTOR", "7.5");
            jail.set_env("WCS_ORACLE", "naive");

            let config =
                load_config_in(jail.directory().to_path_buf(), None).map_err(|e| e.to_string())?;
            assert_eq!(config.product.budget_factor, 7.5);
            assert_eq!(config.oracle, OracleKind::Naive);
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file() {
        Jail::expect_with(|jail| {
            let err = load_config_in(
                jail.directory().to_path_buf(),
                Some(PathBuf::from("/nope/wcs.yaml")),
            )
            .unwrap_err();
            assert!(err.to_string().contains("Configuration file not found"));
            Ok(())
        });
    }

    #[test]
    fn test_invalid_values() {
        Jail::expect_with(|jail| {
            jail.create_file(DEFAULT_CONFIG_NAME, "product:\n  budget_factor: -1\n")?;
            assert!(load_config_in(jail.directory().to_path_buf(), None).is_err());

            jail.create_file(DEFAULT_CONFIG_NAME, "oracle: suffix-tree\n")?;
            let err = load_config_in(jail.directory().to_path_buf(), None).unwrap_err();
            assert!(err.to_string().contains("Could not parse configuration"));
            Ok(())
        });
    }

    #[test]
    fn test_yaml_roundtrip() {
        Jail::expect_with(|jail| {
            let mut config = WcsConfig::default();
            config.oracle = OracleKind::Naive;
            config.product.budget_factor = 12.0;
            jail.create_file(DEFAULT_CONFIG_NAME, &config.to_yaml().map_err(|e| e.to_string())?)?;

            let loaded =
                load_config_in(jail.directory().to_path_buf(), None).map_err(|e| e.to_string())?;
            assert_eq!(loaded, config);
            Ok(())
        });
    }
}
