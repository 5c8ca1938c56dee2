/// Crate version, baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Human-facing version line, with the git hash when the build embeds one.
#[must_use]
pub fn version_string() -> String {
    match option_env!("SITEKIT_BUILD_GIT_HASH") {
        Some(hash) => format!("sitekit {VERSION} ({hash})"),
        None => format!("sitekit {VERSION}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_not_empty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_version_string_contains_version() {
        let vs = version_string();
        assert!(vs.contains(VERSION));
        assert!(vs.starts_with("sitekit "));
    }
}
