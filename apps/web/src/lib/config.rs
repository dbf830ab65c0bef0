//! Build-time configuration for the listing endpoint, page size and logging,
//! with an optional runtime override. The runtime config is read from
//! `window.DIRECTORY_CONFIG` (if present) so static deployments can point at a
//! different API without rebuilding. Configuration values are public; do not
//! store secrets here.

/// Listing API used when no base URL is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://dummyjson.com";
/// Rows per page when no page size is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 5;
/// Filter directives for `tracing`, e.g. `"debug"` or `"directory_web=trace"`.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub page_size: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let build_time = RuntimeConfig {
            api_base_url: option_env!("DIRECTORY_API_BASE_URL").and_then(normalize_runtime_value),
            page_size: option_env!("DIRECTORY_PAGE_SIZE").and_then(parse_page_size),
            log_level: option_env!("DIRECTORY_LOG_LEVEL").and_then(normalize_runtime_value),
        };

        let mut config = Self::default();
        apply_runtime_overrides(&mut config, build_time);

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    page_size: Option<u32>,
    log_level: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.page_size {
        config.page_size = value;
    }
    if let Some(value) = runtime.log_level {
        config.log_level = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("DIRECTORY_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        page_size: read_runtime_value(&object, "page_size")
            .as_deref()
            .and_then(parse_page_size),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

/// Reads a string or number property; numbers are stringified so numeric
/// settings can be written either way in the host page.
#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    let value = match value.as_f64() {
        Some(number) => number.to_string(),
        None => value.as_string()?,
    };
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Page sizes must be positive; zero would divide the listing into no pages.
fn parse_page_size(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|size| *size > 0)
}

#[cfg(test)]
mod tests {
    use super::{
        AppConfig, DEFAULT_API_BASE_URL, DEFAULT_PAGE_SIZE, RuntimeConfig, apply_runtime_overrides,
        normalize_runtime_value, parse_page_size,
    };

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.example.test "),
            Some("https://api.example.test".to_string())
        );
    }

    #[test]
    fn parse_page_size_rejects_zero_and_garbage() {
        assert_eq!(parse_page_size("10"), Some(10));
        assert_eq!(parse_page_size(" 7 "), Some(7));
        assert_eq!(parse_page_size("0"), None);
        assert_eq!(parse_page_size("-3"), None);
        assert_eq!(parse_page_size("ten"), None);
    }

    #[test]
    fn load_without_overrides_uses_defaults() {
        let config = AppConfig::load();
        assert!(!config.api_base_url.is_empty());
        assert!(config.page_size > 0);
    }

    #[test]
    fn apply_runtime_overrides_ignores_missing_values() {
        let mut config = AppConfig::default();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("  "),
            page_size: parse_page_size("0"),
            ..RuntimeConfig::default()
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig::default();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://api.override"),
            page_size: parse_page_size("20"),
            log_level: normalize_runtime_value("debug"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.page_size, 20);
        assert_eq!(config.log_level, "debug");
    }
}
