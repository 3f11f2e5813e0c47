//! The capture trigger: request, decode, display.
//!
//! DESIGN
//! ======
//! The trigger owns no state beyond its collaborators, so clones are cheap
//! and overlapping invocations never see each other. `fire` is what an event
//! handler calls: it spawns the sequence and returns at once. `run` is the
//! same sequence awaited in place, and hands back the [`Outcome`].
//!
//! Failures go down one explicit branch: a single `Surface::diagnose` call,
//! plus a notification only when the policy is `FailurePolicy::Surface`.

#[cfg(test)]
#[path = "trigger_test.rs"]
mod tests;

use std::sync::Arc;

use crate::config::FailurePolicy;
use crate::error::TriggerError;
use crate::payload::ResponsePayload;
use crate::surface::Surface;
use crate::transport::Transport;

/// Result of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user was shown this text.
    Notified(String),
    /// The invocation failed and was recorded.
    Failed(TriggerError),
}

#[derive(Clone)]
pub struct RemoteActionTrigger {
    transport: Arc<dyn Transport>,
    surface: Arc<dyn Surface>,
    policy: FailurePolicy,
}

impl RemoteActionTrigger {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, surface: Arc<dyn Surface>, policy: FailurePolicy) -> Self {
        Self { transport, surface, policy }
    }

    #[must_use]
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Send one capture request and report what happened.
    pub async fn run(&self) -> Outcome {
        match self.request().await {
            Ok(payload) => {
                let text = payload.display_text();
                self.surface.notify(&text);
                Outcome::Notified(text)
            }
            Err(err) => {
                self.surface.diagnose(&err);
                if self.policy == FailurePolicy::Surface {
                    self.surface.notify(&err.user_message());
                }
                Outcome::Failed(err)
            }
        }
    }

    async fn request(&self) -> Result<ResponsePayload, TriggerError> {
        let reply = self.transport.post_capture().await?;
        log::debug!("capture reply: status={} bytes={}", reply.status, reply.body.len());
        ResponsePayload::parse(&reply.body)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl RemoteActionTrigger {
    /// Trigger backed by `reqwest`, printing notifications to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL is not `http(s)` or the
    /// HTTP client cannot be built.
    pub fn from_config(config: &crate::config::TriggerConfig) -> Result<Self, crate::error::ConfigError> {
        let transport = crate::transport::HttpTransport::new(&config.base_url)?;
        Ok(Self::new(
            Arc::new(transport),
            Arc::new(crate::surface::ConsoleSurface),
            config.failure_policy,
        ))
    }

    /// Spawn one invocation on the tokio runtime and return immediately.
    pub fn fire(&self) -> tokio::task::JoinHandle<Outcome> {
        let trigger = self.clone();
        tokio::spawn(async move { trigger.run().await })
    }
}

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
impl RemoteActionTrigger {
    /// Trigger backed by `fetch` and `window.alert`.
    #[must_use]
    pub fn browser(policy: FailurePolicy) -> Self {
        Self::new(
            Arc::new(crate::transport::BrowserTransport),
            Arc::new(crate::surface::BrowserSurface),
            policy,
        )
    }

    /// Queue one invocation on the page's event loop and return immediately.
    pub fn fire(&self) {
        let trigger = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            trigger.run().await;
        });
    }
}
