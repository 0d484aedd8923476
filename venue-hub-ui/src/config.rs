//! Embedded configuration.

use std::sync::OnceLock;

use venue_hub::Config;

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Configuration baked in from `config.toml` at build time
pub fn app_config() -> &'static Config {
    CONFIG.get_or_init(|| {
        Config::from_toml_str(include_str!("../config.toml")).unwrap_or_else(|e| {
            web_sys::console::error_1(&format!("Invalid embedded config: {}", e).into());
            Config::default()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = Config::from_toml_str(include_str!("../config.toml")).unwrap();
        assert_eq!(config.layout.mobile_breakpoint_px, 800);
        assert_eq!(config.identity.user_role_key, "onesignalUserRole");
    }
}
