//! Panic handler for state logging.
//!
//! This module installs a custom panic hook that writes the panic location,
//! the panic message, and a snapshot of service state to stderr before
//! chaining to the default handler. Tile requests are shielded from panics
//! by the HTTP layer, so anything that reaches this hook happened outside a
//! request (startup, shutdown, background reload).
//!
//! The hook uses a global registry since panic hooks must be `'static`.

use std::io::Write;
use std::panic::{self, PanicHookInfo};
use std::sync::{Mutex, OnceLock};

/// Global registry for panic-time state capture.
static STATE_REGISTRY: OnceLock<Mutex<StateRegistry>> = OnceLock::new();

/// Registry of callbacks invoked during panic handling.
#[derive(Default)]
struct StateRegistry {
    /// Callback producing a preformatted service state report.
    state_callback: Option<Box<dyn Fn() -> String + Send + Sync>>,
}

/// Initialize the panic handler.
///
/// This should be called once early in application startup. It sets up a
/// custom panic hook that will:
///
/// 1. Log the panic location and message
/// 2. Capture and log service state via the registered callback
/// 3. Chain to the default panic handler
///
/// Subsequent calls add further hooks in front of the existing chain, so
/// callers should invoke this exactly once.
pub fn init() {
    let _ = STATE_REGISTRY.get_or_init(|| Mutex::new(StateRegistry::default()));

    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info: &PanicHookInfo<'_>| {
        handle_panic(info);
        original_hook(info);
    }));
}

/// Set the callback for state capture on panic.
///
/// The callback is invoked during panic handling to produce a report of
/// current service state (request counters, cache status) for logging.
pub fn set_state_callback<F>(callback: F)
where
    F: Fn() -> String + Send + Sync + 'static,
{
    if let Some(registry) = STATE_REGISTRY.get() {
        if let Ok(mut guard) = registry.lock() {
            guard.state_callback = Some(Box::new(callback));
        }
    }
}

/// Handle a panic by logging state to stderr.
fn handle_panic(info: &PanicHookInfo<'_>) {
    // Write to stderr directly since the tracing writer may be broken
    let mut stderr = std::io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "=== floodtile panic handler ===");

    if let Some(location) = info.location() {
        let _ = writeln!(
            stderr,
            "Location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        );
    }
    if let Some(message) = info.payload().downcast_ref::<&str>() {
        let _ = writeln!(stderr, "Message: {}", message);
    } else if let Some(message) = info.payload().downcast_ref::<String>() {
        let _ = writeln!(stderr, "Message: {}", message);
    }

    if let Some(registry) = STATE_REGISTRY.get() {
        if let Ok(guard) = registry.lock() {
            if let Some(ref callback) = guard.state_callback {
                let _ = writeln!(stderr, "--- Service state ---");
                let _ = writeln!(stderr, "{}", callback());
            }
        }
    }

    let _ = writeln!(stderr, "=== end panic handler ===");
    let _ = stderr.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_callback_registration() {
        init();

        set_state_callback(|| "tiles rendered: 42".to_string());

        let registry = STATE_REGISTRY.get().expect("registry initialized");
        let guard = registry.lock().unwrap();
        let callback = guard.state_callback.as_ref().expect("callback registered");
        assert_eq!(callback(), "tiles rendered: 42");
    }
}
