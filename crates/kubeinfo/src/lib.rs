//! Top-level facade crate for kubeinfo.
//!
//! Re-exports the payload/error types and the server library so users can depend on a single crate.

pub mod core {
    pub use kubeinfo_core::*;
}

pub mod server {
    pub use kubeinfo_server::*;
}
