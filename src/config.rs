use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Waitroom";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Database file path, `WAITROOM_DB` or a file next to the process.
pub fn database_path() -> PathBuf {
    std::env::var_os("WAITROOM_DB")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("waitroom.db"))
}

/// Listen port, `WAITROOM_PORT` or 8000.
pub fn port() -> u16 {
    std::env::var("WAITROOM_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000)
}

/// Directory holding the kiosk page, `WAITROOM_STATIC` or `static/`.
pub fn static_dir() -> PathBuf {
    std::env::var_os("WAITROOM_STATIC")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("static"))
}

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "info,waitroom=debug"
}
