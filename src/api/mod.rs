//! HTTP API module for the Benefit Simulation Engine.
//!
//! This module provides the REST API endpoints for running simulations and
//! browsing the simulation history.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
