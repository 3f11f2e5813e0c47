//! Where outcomes are reported.
//!
//! `notify` is the user-visible channel (a blocking alert in the browser,
//! stdout for the CLI). `diagnose` is the developer channel and defaults to
//! one `log::error!` record per failure.

use crate::error::TriggerError;

pub trait Surface: Send + Sync {
    /// Show `text` to the user.
    fn notify(&self, text: &str);

    /// Record a failed invocation for developers.
    fn diagnose(&self, err: &TriggerError) {
        log::error!("capture failed: code={} {err}", err.error_code());
    }
}

/// Prints notifications to stdout; diagnostics go through `log`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSurface;

impl Surface for ConsoleSurface {
    fn notify(&self, text: &str) {
        println!("{text}");
    }
}

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
pub use browser::BrowserSurface;

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
mod browser {
    use super::Surface;

    /// `window.alert` for notifications; `console_log` carries diagnostics.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserSurface;

    impl Surface for BrowserSurface {
        fn notify(&self, text: &str) {
            let Some(window) = web_sys::window() else {
                log::warn!("no window available for alert: {text}");
                return;
            };
            if let Err(e) = window.alert_with_message(text) {
                log::warn!("alert failed: {e:?}");
            }
        }
    }
}
