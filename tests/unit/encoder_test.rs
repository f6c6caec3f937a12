//! Tests for request URL construction
//!
//! The step output query is a mapping with sorted keys and last-write-wins
//! semantics for repeated override names.

use std::collections::BTreeMap;

use shellpane::api::{GetStepOutputRequest, Route};
use shellpane::client::encoder::{raw_url, route_url, step_output_url, view_specs_url};
use url::Url;

fn pairs(url: &Url) -> Vec<(String, String)> {
    url.query_pairs().into_owned().collect()
}

fn param_map(url: &Url) -> BTreeMap<String, String> {
    url.query_pairs().into_owned().collect()
}

// =============================================================================
// STEP OUTPUT URL
// =============================================================================

#[test]
fn step_output_url_carries_names_and_prefixed_overrides() {
    let req = GetStepOutputRequest::new("build", "compile").with_view_env("BRANCH", "main");
    let url = step_output_url("http://x", &req).unwrap();

    assert_eq!(
        url.as_str(),
        "http://x/api/get-step-output?step_name=compile&view_envBRANCH=main&view_name=build"
    );

    let expected: BTreeMap<String, String> = [
        ("view_name", "build"),
        ("step_name", "compile"),
        ("view_envBRANCH", "main"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    assert_eq!(param_map(&url), expected);
}

#[test]
fn step_output_url_duplicate_override_keeps_last_value() {
    let req = GetStepOutputRequest::new("v", "s")
        .with_view_env("BRANCH", "first")
        .with_view_env("OTHER", "x")
        .with_view_env("BRANCH", "last");
    let url = step_output_url("http://x", &req).unwrap();

    let branch: Vec<_> = pairs(&url)
        .into_iter()
        .filter(|(k, _)| k == "view_envBRANCH")
        .collect();
    assert_eq!(branch, vec![("view_envBRANCH".to_string(), "last".to_string())]);
}

#[test]
fn step_output_url_view_and_step_scopes_do_not_collide() {
    let req = GetStepOutputRequest::new("v", "s")
        .with_view_env("LEVEL", "view")
        .with_step_env("LEVEL", "step");
    let params = param_map(&step_output_url("http://x", &req).unwrap());

    assert_eq!(params["view_envLEVEL"], "view");
    assert_eq!(params["step_envLEVEL"], "step");
}

#[test]
fn step_output_url_reserved_characters_round_trip() {
    let name = "a b&c=d/e?f#g%h+i;ü";
    let req = GetStepOutputRequest::new(name, name).with_step_env("X", name);
    let url = step_output_url("http://x", &req).unwrap();

    let all = pairs(&url);
    let view_names: Vec<_> = all.iter().filter(|(k, _)| k == "view_name").collect();
    let step_names: Vec<_> = all.iter().filter(|(k, _)| k == "step_name").collect();
    assert_eq!(view_names.len(), 1);
    assert_eq!(step_names.len(), 1);
    assert_eq!(view_names[0].1, name);
    assert_eq!(step_names[0].1, name);
    assert_eq!(param_map(&url)["step_envX"], name);
    assert!(url.fragment().is_none());
}

#[test]
fn step_output_url_allows_empty_values() {
    let req = GetStepOutputRequest::new("", "");
    let url = step_output_url("http://x", &req).unwrap();
    assert_eq!(url.query(), Some("step_name=&view_name="));
}

#[test]
fn step_output_url_rejects_unparseable_host() {
    let req = GetStepOutputRequest::new("v", "s");
    assert!(step_output_url("", &req).is_err());
    assert!(step_output_url("not a host", &req).is_err());
    assert!(step_output_url("http://[::1", &req).is_err());
}

// =============================================================================
// VIEW SPECS URL
// =============================================================================

#[test]
fn view_specs_url_has_no_query() {
    let url = view_specs_url("http://x").unwrap();
    assert_eq!(url.as_str(), "http://x/api/get-view-specs");
    assert!(url.query().is_none());
}

#[test]
fn view_specs_url_keeps_host_port_and_prefix() {
    let url = view_specs_url("https://example.com:8443/shellpane").unwrap();
    assert_eq!(url.as_str(), "https://example.com:8443/shellpane/api/get-view-specs");
}

#[test]
fn raw_url_is_plain_concatenation() {
    assert_eq!(raw_url("http://x", Route::GetStepOutput), "http://x/api/get-step-output");
    assert_eq!(raw_url("", Route::GetViewSpecs), "/api/get-view-specs");
    assert!(route_url("", Route::GetViewSpecs).is_err());
}
