//! Routes the `log` facade and panics to the browser console.

/// Install the console logger and panic hook. Safe to call more than once.
#[cfg(target_arch = "wasm32")]
pub fn init() {
    console_error_panic_hook::set_once();
    // Only fails if a logger is already installed.
    let _ = console_log::init_with_level(crate::config::LOG_LEVEL);
}

/// Native builds (tests, tooling) leave the facade unconfigured.
#[cfg(not(target_arch = "wasm32"))]
pub fn init() {}
