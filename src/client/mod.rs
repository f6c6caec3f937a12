//! Typed client for a shellpane server
//!
//! ```no_run
//! use shellpane::api::GetStepOutputRequest;
//! use shellpane::client::{CallContext, Client, ClientOpts};
//! use shellpane::config::ClientConfig;
//!
//! # async fn run() -> Result<(), shellpane::client::ClientError> {
//! let client = Client::new(ClientOpts {
//!     config: ClientConfig::default(),
//!     http_client: reqwest::Client::new(),
//! });
//! let req = GetStepOutputRequest::new("build", "compile").with_view_env("BRANCH", "main");
//! let rsp = client.get_step_output(&CallContext::new(), &req).await?;
//! println!("{}", rsp.output.stdout);
//! # Ok(())
//! # }
//! ```

pub mod encoder;

mod context;
mod error;
mod transport;

use reqwest::Method;
use serde::de::DeserializeOwned;
use url::Url;

pub use context::CallContext;
pub use error::{ClientError, ErrorKind};

use crate::api::{
    GetStepOutputRequest, GetStepOutputResponse, GetViewSpecsRequest, GetViewSpecsResponse, Route,
};
use crate::config::ClientConfig;
use transport::{NO_BODY, Transport};

/// Everything needed to build a [`Client`]
#[derive(Debug, Clone)]
pub struct ClientOpts {
    /// Host and credentials
    pub config: ClientConfig,
    /// Transport shared by every call; owns the connection pool
    pub http_client: reqwest::Client,
}

/// Client for the two shellpane operations
///
/// Holds no mutable state. Clone it freely and call it concurrently, each
/// call with its own [`CallContext`].
#[derive(Debug, Clone)]
pub struct Client {
    host: String,
    transport: Transport,
}

impl Client {
    /// Create a client from options
    #[must_use]
    pub fn new(opts: ClientOpts) -> Self {
        Self {
            host: opts.config.host,
            transport: Transport::new(opts.http_client, opts.config.basic_auth),
        }
    }

    /// Host every route is resolved against
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Fetch one step's captured output
    pub async fn get_step_output(
        &self,
        ctx: &CallContext,
        req: &GetStepOutputRequest,
    ) -> Result<GetStepOutputResponse, ClientError> {
        let route = Route::GetStepOutput;
        let url = encoder::step_output_url(&self.host, req)
            .map_err(|e| self.url_error(route, e))?;
        self.get(ctx, route, url).await
    }

    /// Fetch the server's view catalog
    pub async fn get_view_specs(
        &self,
        ctx: &CallContext,
        _req: &GetViewSpecsRequest,
    ) -> Result<GetViewSpecsResponse, ClientError> {
        let route = Route::GetViewSpecs;
        let url = encoder::view_specs_url(&self.host)
            .map_err(|e| self.url_error(route, e))?;
        self.get(ctx, route, url).await
    }

    fn url_error(&self, route: Route, e: url::ParseError) -> ClientError {
        ClientError::new(route, encoder::raw_url(&self.host, route), ErrorKind::UrlConstruction(e))
    }

    async fn get<Rsp: DeserializeOwned + Send>(
        &self,
        ctx: &CallContext,
        route: Route,
        url: Url,
    ) -> Result<Rsp, ClientError> {
        let target = url.to_string();
        log::debug!("{route}: GET {target}");
        self.transport
            .execute(ctx, Method::GET, url, NO_BODY)
            .await
            .map_err(|kind| ClientError::new(route, target, kind))
    }
}
