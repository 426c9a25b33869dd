//! Configuration loading and management for the Benefit Simulation Engine.
//!
//! This module provides functionality to load the scheme's regulatory
//! parameters from YAML files: reference income, replacement formula,
//! durations, waiting periods, complementary aid amounts and schedule offsets.
//!
//! # Example
//!
//! ```no_run
//! use benefit_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/are").unwrap();
//! println!("Loaded scheme: {}", config.scheme().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AidRules, AllowanceConfig, AllowanceRules, DurationRules, EligibilityRules,
    ReferenceIncomeRules, RulesConfig, ScheduleRules, SchemeMetadata, WaitingPeriodRules,
};
