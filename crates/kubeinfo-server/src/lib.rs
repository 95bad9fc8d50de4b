//! kubeinfo server library entry.
//!
//! Wires config, app state, request logging, the info/probe/metrics routes,
//! and the signal-driven lifecycle into one HTTP server. Consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod fault;
pub mod lifecycle;
pub mod middleware;
pub mod obs;
pub mod ops;
pub mod router;
pub mod server;
pub mod shutdown;
