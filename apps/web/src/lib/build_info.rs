//! Build metadata captured by `built` at compile time, plus the runtime
//! settings worth showing next to it on the build page.

use super::{built_info, config::AppConfig};

pub fn git_commit_hash() -> &'static str {
    match built_info::GIT_COMMIT_HASH {
        Some(value) if !value.is_empty() => value,
        _ => "unknown",
    }
}

pub fn version() -> &'static str {
    built_info::PKG_VERSION
}

/// Label and value rows for the build page, in display order.
pub fn details(config: &AppConfig) -> Vec<(&'static str, String)> {
    vec![
        ("Package", built_info::PKG_NAME.to_string()),
        ("Version", format!("v{}", version())),
        ("Commit", git_commit_hash().to_string()),
        ("Profile", built_info::PROFILE.to_string()),
        ("Compiler", built_info::RUSTC_VERSION.to_string()),
        ("API", config.api_base_url.clone()),
        ("Page size", config.page_size.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::{details, git_commit_hash, version};
    use crate::app_lib::config::AppConfig;

    #[test]
    fn version_matches_package() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
        assert!(!git_commit_hash().is_empty());
    }

    #[test]
    fn details_include_build_and_listing_settings() {
        let config = AppConfig {
            api_base_url: "https://api.example.test".to_string(),
            page_size: 12,
            ..AppConfig::default()
        };

        let rows = details(&config);
        let labels: Vec<_> = rows.iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            ["Package", "Version", "Commit", "Profile", "Compiler", "API", "Page size"]
        );
        assert_eq!(rows[0].1, env!("CARGO_PKG_NAME"));
        assert_eq!(rows[1].1, format!("v{}", env!("CARGO_PKG_VERSION")));
        assert_eq!(rows[5].1, "https://api.example.test");
        assert_eq!(rows[6].1, "12");
    }
}
