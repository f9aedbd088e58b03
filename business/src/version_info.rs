//! Version information for the application, populated at build time.

/// Get the build date in RFC3339 format.
pub fn build_date() -> &'static str {
    env!("BUILD_DATE")
}

/// Get the git commit hash (short), or `unknown` outside a checkout.
pub fn build_commit() -> &'static str {
    env!("BUILD_COMMIT")
}

/// Get the package version.
pub fn build_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Returns the environment label and info string.
///
/// Debug builds show the commit, release builds the package version.
pub fn env_version_info() -> (&'static str, &'static str) {
    if cfg!(debug_assertions) {
        ("dev", build_commit())
    } else {
        ("stable", build_version())
    }
}

/// Format the environment and version info as a display string.
pub fn format_env_version() -> String {
    let (env_name, info) = env_version_info();
    format!("{env_name}:{info}")
}
