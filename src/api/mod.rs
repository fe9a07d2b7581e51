//! HTTP API module for the attendance engine.
//!
//! This module exposes the core's logical operations (daily
//! classification, monthly aggregation, lifecycle transition, and the edit
//! guard) to the storage/API collaborators.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    DailySummaryRequest, EditCheckRequest, MonthlySummaryRequest, TransitionRequest,
};
pub use response::{ApiError, EditCheckResponse};
pub use state::AppState;
