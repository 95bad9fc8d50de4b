//! kubeinfo-core: shared error type and wire payloads.
//!
//! This crate performs no I/O. It defines the JSON shapes every route answers
//! with, so probes and dashboards can depend on them without pulling in the
//! server.

pub mod error;
pub mod payload;
