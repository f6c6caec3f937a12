//! Request URL construction
//!
//! The step output query is built as a mapping: each computed key holds one
//! value, so a later override with the same name replaces an earlier one.
//! Keys are written in sorted order.

use std::collections::BTreeMap;

use url::Url;

use crate::api::{
    GetStepOutputRequest, Route, STEP_ENV_PREFIX, STEP_NAME_PARAM, VIEW_ENV_PREFIX,
    VIEW_NAME_PARAM,
};
use crate::models::EnvOverride;

/// Host and route path joined, before parsing
#[must_use]
pub fn raw_url(host: &str, route: Route) -> String {
    format!("{host}{}", route.path())
}

/// Absolute URL for a route with no parameters
pub fn route_url(host: &str, route: Route) -> Result<Url, url::ParseError> {
    Url::parse(&raw_url(host, route))
}

/// URL for [`Route::GetViewSpecs`]; no query is added
pub fn view_specs_url(host: &str) -> Result<Url, url::ParseError> {
    route_url(host, Route::GetViewSpecs)
}

/// URL for [`Route::GetStepOutput`] with the request encoded into the query
///
/// Parameters already on `host` are kept unless a request key replaces them.
pub fn step_output_url(host: &str, req: &GetStepOutputRequest) -> Result<Url, url::ParseError> {
    let mut url = route_url(host, Route::GetStepOutput)?;

    let mut params: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (key, value) in url.query_pairs() {
        params.entry(key.into_owned()).or_default().push(value.into_owned());
    }

    params.insert(VIEW_NAME_PARAM.to_string(), vec![req.view_name.clone()]);
    params.insert(STEP_NAME_PARAM.to_string(), vec![req.step_name.clone()]);
    set_overrides(&mut params, VIEW_ENV_PREFIX, &req.view_env);
    set_overrides(&mut params, STEP_ENV_PREFIX, &req.step_env);

    url.query_pairs_mut().clear().extend_pairs(
        params
            .iter()
            .flat_map(|(key, values)| values.iter().map(move |value| (key, value))),
    );

    Ok(url)
}

fn set_overrides(params: &mut BTreeMap<String, Vec<String>>, prefix: &str, envs: &[EnvOverride]) {
    for env in envs {
        params.insert(format!("{prefix}{}", env.name), vec![env.value.clone()]);
    }
}
