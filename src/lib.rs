//! Benefit Simulation Engine for unemployment-replacement allowances
//!
//! This crate decides whether a claimant qualifies for the return-to-work
//! allowance, computes the daily, monthly and total amounts, estimates
//! complementary aids and projects the administrative steps and key dates
//! of the claim. Every figure carries an audit trail.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod persistence;
pub mod telemetry;
