//! Server-side reading of the step output query convention
//!
//! Env override keys carry no delimiter: `view_envBRANCH=main` sets the view
//! variable `BRANCH`. The name is whatever follows the known prefix.

use std::collections::BTreeMap;

use super::error::QueryError;
use super::routes::{STEP_ENV_PREFIX, STEP_NAME_PARAM, VIEW_ENV_PREFIX, VIEW_NAME_PARAM};
use super::types::GetStepOutputRequest;
use crate::models::EnvOverride;

/// Parse a raw (still percent-encoded) query string into a request
///
/// Repeated keys keep their last value. Overrides come back sorted by name
/// since the query does not preserve their original order. Keys matching
/// neither parameter nor prefix are ignored.
pub fn decode_step_output_query(query: &str) -> Result<GetStepOutputRequest, QueryError> {
    let params: BTreeMap<String, String> =
        url::form_urlencoded::parse(query.as_bytes()).into_owned().collect();

    let mut request = GetStepOutputRequest {
        view_name: params
            .get(VIEW_NAME_PARAM)
            .cloned()
            .ok_or(QueryError::MissingParam(VIEW_NAME_PARAM))?,
        step_name: params
            .get(STEP_NAME_PARAM)
            .cloned()
            .ok_or(QueryError::MissingParam(STEP_NAME_PARAM))?,
        ..GetStepOutputRequest::default()
    };

    for (key, value) in &params {
        if let Some(name) = key.strip_prefix(VIEW_ENV_PREFIX) {
            request.view_env.push(EnvOverride::new(name, value.as_str()));
        } else if let Some(name) = key.strip_prefix(STEP_ENV_PREFIX) {
            request.step_env.push(EnvOverride::new(name, value.as_str()));
        }
    }

    Ok(request)
}
