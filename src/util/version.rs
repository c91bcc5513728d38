pub const APP_NAME: &str = "Bike Resale Estimator";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

/// Human-facing version string: the git tag when the build had one, the
/// crate version otherwise.
pub fn version_label() -> String {
    if let Some(tag) = GIT_TAG {
        tag.to_string()
    } else {
        format!("v{}", APP_VERSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_label_is_never_empty() {
        assert!(!version_label().is_empty());
    }
}
