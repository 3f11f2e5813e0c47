//! # capture
//!
//! Client-side trigger for the balance capture action.
//!
//! One invocation sends `POST /capturar_saldo` and shows the `mensaje`
//! field of the JSON reply to the user. Failures are written to the
//! diagnostic log and, by default, never reach the user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server behind `/capturar_saldo` is an opaque collaborator. This crate
//! owns only the request, the reply decoding, and the two ways of reporting
//! an outcome (`Surface::notify` and `Surface::diagnose`). Native builds talk
//! HTTP through `reqwest`; the `hydrate` feature on `wasm32` adds a
//! `gloo-net` transport and exports `capturarSaldo` to the page.

pub mod config;
pub mod endpoint;
pub mod error;
pub mod payload;
pub mod surface;
pub mod transport;
pub mod trigger;

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
pub mod browser;

pub use config::{FailurePolicy, TriggerConfig};
pub use error::{ConfigError, TriggerError};
pub use payload::ResponsePayload;
pub use surface::Surface;
pub use transport::{Reply, Transport};
pub use trigger::{Outcome, RemoteActionTrigger};
