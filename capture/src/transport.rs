//! Transport seam for the capture request.
//!
//! Native builds use [`HttpTransport`] (`reqwest`). Browser builds with the
//! `hydrate` feature use [`BrowserTransport`] (`gloo-net`), which sends the
//! path relative to the page origin.
//!
//! Neither transport sets a timeout or retries. The HTTP status is passed
//! back in the [`Reply`] and is not treated as a failure here.

use crate::error::TriggerError;

/// What came back from one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

/// Sends the capture request once.
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait Transport: Send + Sync {
    /// Issue one `POST /capturar_saldo` and read the body as text.
    ///
    /// # Errors
    ///
    /// Returns [`TriggerError::Transport`] if the request or the body read
    /// fails.
    async fn post_capture(&self) -> Result<Reply, TriggerError>;
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::HttpTransport;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use reqwest::header::CONTENT_TYPE;

    use super::{Reply, Transport};
    use crate::endpoint::{CONTENT_TYPE_JSON, capture_url};
    use crate::error::{ConfigError, TriggerError};

    pub struct HttpTransport {
        http: reqwest::Client,
        url: String,
    }

    impl HttpTransport {
        /// Build a transport targeting `{base_url}/capturar_saldo`.
        ///
        /// # Errors
        ///
        /// Returns an error if the base URL is not `http(s)` or the HTTP
        /// client cannot be constructed.
        pub fn new(base_url: &str) -> Result<Self, ConfigError> {
            let url = capture_url(base_url)?;
            let http = reqwest::Client::builder()
                .build()
                .map_err(|e| ConfigError::ClientBuild(e.to_string()))?;
            Ok(Self { http, url })
        }

        #[must_use]
        pub fn url(&self) -> &str {
            &self.url
        }
    }

    #[async_trait::async_trait]
    impl Transport for HttpTransport {
        async fn post_capture(&self) -> Result<Reply, TriggerError> {
            let response = self
                .http
                .post(&self.url)
                .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
                .send()
                .await
                .map_err(|e| TriggerError::Transport(e.to_string()))?;

            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| TriggerError::Transport(e.to_string()))?;
            Ok(Reply { status, body })
        }
    }
}

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
pub use browser::BrowserTransport;

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
mod browser {
    use super::{Reply, Transport};
    use crate::endpoint::{CAPTURE_PATH, CONTENT_TYPE_JSON};
    use crate::error::TriggerError;

    /// `fetch`-backed transport; the path resolves against the page origin.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserTransport;

    #[async_trait::async_trait(?Send)]
    impl Transport for BrowserTransport {
        async fn post_capture(&self) -> Result<Reply, TriggerError> {
            let resp = gloo_net::http::Request::post(CAPTURE_PATH)
                .header("Content-Type", CONTENT_TYPE_JSON)
                .send()
                .await
                .map_err(|e| TriggerError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| TriggerError::Transport(e.to_string()))?;
            Ok(Reply { status, body })
        }
    }
}
