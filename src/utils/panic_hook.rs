use std::panic;
use leptos::logging::log;

/// Sets up a panic hook that reports to the browser console and tags the
/// message so it stands out from the app's own log lines.
pub fn set_custom_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        // Let console_error_panic_hook print the full message and stack first
        console_error_panic_hook::hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_default();

        log!("[PANIC] {message} at {location}");
        if message.contains("OwnerDisposed") {
            log!("[PANIC] A callback ran after its component was unmounted (e.g. an event on a closed check-in dialog)");
        }
    }));
}

/// Call from the hydrate or csr entry point
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}
