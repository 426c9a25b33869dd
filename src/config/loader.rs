//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the scheme's
//! rules from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{AidRules, AllowanceConfig, RulesConfig, ScheduleRules, SchemeMetadata};

/// Loads and provides access to the simulation rules.
///
/// # Directory Structure
///
/// ```text
/// config/are/
/// ├── scheme.yaml     # Scheme metadata
/// ├── allowance.yaml  # Reference income, formula, eligibility, duration, waiting period
/// ├── aids.yaml       # Complementary aid amounts
/// └── schedule.yaml   # Deadlines and calendar offsets
/// ```
///
/// # Example
///
/// ```no_run
/// use benefit_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/are")?;
/// println!("Reference ceiling: {}", loader.rules().reference_income().ceiling);
/// # Ok::<(), benefit_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    rules: RulesConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    /// - A loaded value breaks a constraint checked by [`RulesConfig::validate`]
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<SchemeMetadata>(&path.join("scheme.yaml"))?;
        let allowance = Self::load_yaml::<AllowanceConfig>(&path.join("allowance.yaml"))?;
        let aids = Self::load_yaml::<AidRules>(&path.join("aids.yaml"))?;
        let schedule = Self::load_yaml::<ScheduleRules>(&path.join("schedule.yaml"))?;

        debug!(
            path = %path.display(),
            scheme = %metadata.code,
            version = %metadata.version,
            "Loaded simulation rules"
        );

        let rules = RulesConfig::new(metadata, allowance, aids, schedule);
        rules.validate().map_err(|err| match err {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path.join("allowance.yaml").display().to_string(),
                message,
            },
            other => other,
        })?;

        Ok(Self { rules })
    }

    /// Wraps an already-built rule set.
    pub fn from_rules(rules: RulesConfig) -> Self {
        Self { rules }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded rule set.
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Returns the scheme metadata.
    pub fn scheme(&self) -> &SchemeMetadata {
        self.rules.scheme()
    }
}
