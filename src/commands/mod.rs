//! Command implementations

mod step_output;
mod views;

pub use step_output::step_output;
pub use views::views;

use std::path::PathBuf;

use shellpane::client::{CallContext, Client, ClientOpts};
use shellpane::config::ClientConfig;
use tokio_util::sync::CancellationToken;

/// Where to find the server, from global flags
#[derive(Debug)]
pub struct Connection {
    /// Explicit config file
    pub config: Option<PathBuf>,
    /// Host override
    pub host: Option<String>,
}

impl Connection {
    /// Load config and build a client plus a context for one call
    ///
    /// Ctrl-C cancels the call.
    fn connect(&self) -> anyhow::Result<(Client, CallContext)> {
        let mut config = ClientConfig::load(self.config.as_deref())?;
        if let Some(host) = &self.host {
            config.host.clone_from(host);
        }
        log::debug!("using host {}", config.host);

        let token = CancellationToken::new();
        let mut ctx = CallContext::with_token(token.clone());
        if let Some(timeout) = config.timeout() {
            ctx = ctx.with_timeout(timeout);
        }

        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                token.cancel();
            }
        });

        let client = Client::new(ClientOpts {
            config,
            http_client: reqwest::Client::new(),
        });
        Ok((client, ctx))
    }
}
