//! HTTP-agnostic description of the shellpane API
//!
//! This module holds the wire contract shared by clients and servers:
//! typed request/response structures, the route table, and the query
//! parameter naming convention.
//!
//! ## Design
//!
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Routes are static**: [`Route::path`] is a constant table
//! - **Both halves of the query convention live here**: the client encoder
//!   and [`decode_step_output_query`] share the same parameter names

mod error;
mod query;
mod routes;
mod types;

pub use error::QueryError;
pub use query::decode_step_output_query;
pub use routes::{Route, STEP_ENV_PREFIX, STEP_NAME_PARAM, VIEW_ENV_PREFIX, VIEW_NAME_PARAM};
pub use types::{
    GetStepOutputRequest, GetStepOutputResponse, GetViewSpecsRequest, GetViewSpecsResponse,
};
