//! Web layer for the lift disruptions dashboard.
//!
//! Provides the server-rendered dashboard page and JSON endpoints for
//! the disruption list and its statistics.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
