//! One JSON request/response exchange
//!
//! Both operations go through [`Transport::execute`]: encode the payload,
//! send once, require a 200, read the whole body, decode it.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::context::CallContext;
use super::error::ErrorKind;
use crate::config::BasicAuthConfig;

/// Payload for requests that carry none; encodes as `null`
pub(crate) const NO_BODY: Option<&()> = None;

/// Sends requests over a caller-supplied `reqwest::Client`
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    http: reqwest::Client,
    basic_auth: BasicAuthConfig,
}

impl Transport {
    pub(crate) fn new(http: reqwest::Client, basic_auth: BasicAuthConfig) -> Self {
        Self { http, basic_auth }
    }

    /// Perform a single exchange bounded by `ctx`
    ///
    /// No retry is attempted. A non-200 body is read for context only and
    /// never decoded.
    pub(crate) async fn execute<Req, Rsp>(
        &self,
        ctx: &CallContext,
        method: Method,
        url: Url,
        payload: Option<&Req>,
    ) -> Result<Rsp, ErrorKind>
    where
        Req: Serialize + Sync + ?Sized,
        Rsp: DeserializeOwned + Send,
    {
        let body = serde_json::to_vec(&payload).map_err(ErrorKind::Encoding)?;

        let mut request = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        if self.basic_auth.is_configured() {
            request =
                request.basic_auth(&self.basic_auth.username, Some(&self.basic_auth.password));
        }

        ctx.run(async move {
            let response = request.send().await.map_err(ErrorKind::Network)?;

            let status = response.status();
            log::debug!("{} responded {status}", response.url());
            if status != StatusCode::OK {
                let body = match response.text().await {
                    Ok(body) => body,
                    Err(e) => {
                        log::debug!("failed to read body of {status} response: {e}");
                        String::new()
                    },
                };
                log::warn!("unexpected status {status}: {body}");
                return Err(ErrorKind::UnexpectedStatus {
                    status: status.as_u16(),
                    body,
                });
            }

            let bytes = response.bytes().await.map_err(ErrorKind::Io)?;
            serde_json::from_slice(&bytes).map_err(|source| ErrorKind::Decoding {
                body: String::from_utf8_lossy(&bytes).into_owned(),
                source,
            })
        })
        .await
    }
}
