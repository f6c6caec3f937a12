//! Data models shared by the shellpane client and server
//!
//! Core abstractions:
//! - `ViewSpec`: a named command template and the env vars it accepts
//! - `EnvOverride`: a per-invocation value for one of those env vars
//! - `ViewOutput`: what a step printed and how it exited
//!
//! Field names on the wire are PascalCase.

mod env;
mod view;

pub use env::{EnvOverride, EnvSpec};
pub use view::{ShellpaneConfig, ViewOutput, ViewSpec};
