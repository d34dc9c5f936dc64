//! Version string shown by `advent --version`.

/// Formats `pkg_version (revision)` from the git metadata captured at build time.
fn format_version(pkg_version: &str, sha: Option<&str>, dirty: Option<&str>) -> String {
    let revision = match (sha, dirty) {
        (Some(sha), Some("true")) => format!("{sha}-dirty"),
        (Some(sha), _) => sha.to_owned(),
        (None, _) => "unknown".to_owned(),
    };
    format!("{pkg_version} ({revision})")
}

/// Returns the package version with the git revision it was built from.
pub(crate) fn long_version() -> String {
    format_version(
        env!("CARGO_PKG_VERSION"),
        option_env!("VERGEN_GIT_SHA"),
        option_env!("VERGEN_GIT_DIRTY"),
    )
}
