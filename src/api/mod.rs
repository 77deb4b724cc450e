//! HTTP API module for the billing engine.
//!
//! This module provides the REST API endpoints for billing children,
//! viewing the facility calendar, and forecasting group revenue.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AttendanceEntry, CalculationRequest, ForecastRequest, MonthCalculationRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
