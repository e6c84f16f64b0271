//! Debug logging
//!
//! The TUI owns the terminal, so log output goes to a file in the temp
//! directory, and only in debug builds. `RUST_LOG` overrides the default
//! `debug` filter.

#[cfg(debug_assertions)]
const LOG_FILE: &str = "lolaunch-debug.log";

#[cfg(debug_assertions)]
pub fn init() {
    use std::fs::File;

    let path = std::env::temp_dir().join(LOG_FILE);
    let Ok(file) = File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();

    log::debug!("Logging to {}", path.display());
}

#[cfg(not(debug_assertions))]
pub fn init() {}
