//! Fail-fast fault handling.
//!
//! Any panic, in a handler, a spawned task, or `main`, is logged and the
//! process exits with status 1 at once. No drain happens on this path.

use std::any::Any;

use kubeinfo_core::error::EXIT_FAULT;

pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| l.to_string())
            .unwrap_or_else(|| "<unknown>".to_string());
        tracing::error!(
            panic = panic_message(info.payload()),
            %location,
            "uncaught fault, terminating"
        );
        std::process::exit(EXIT_FAULT);
    }));
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "<non-string panic payload>"
    }
}
