use std::sync::LazyLock;

/// Local storage key holding the JSON review list.
pub const REVIEWS_STORAGE_KEY: &str = "portfolio_reviews";
/// Local storage key holding the admin flag (`"true"` when logged in).
pub const ADMIN_STORAGE_KEY: &str = "isAdmin";

const DEFAULT_EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
const DEFAULT_EMAILJS_SERVICE_ID: &str = "service_44uul35";
const DEFAULT_EMAILJS_TEMPLATE_ID: &str = "template_odzww4c";
const DEFAULT_EMAILJS_PUBLIC_KEY: &str = "D57bI41aFe_LV-EdK";
const DEFAULT_ADMIN_PASSWORD: &str = "rafacharlokali2";

pub static SITE_CONFIG: LazyLock<SiteConfig> = LazyLock::new(SiteConfig::from_env);

/// Settings compiled into both the server and the wasm bundle.
///
/// Everything here ends up in client-side code, so none of it is secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub emailjs_api_url: String,
    pub emailjs_service_id: String,
    pub emailjs_template_id: String,
    pub emailjs_public_key: String,
    pub admin_password: String,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self {
            emailjs_api_url: or_default(
                option_env!("PORTFOLIO_EMAILJS_API_URL"),
                DEFAULT_EMAILJS_API_URL,
            ),
            emailjs_service_id: or_default(
                option_env!("PORTFOLIO_EMAILJS_SERVICE_ID"),
                DEFAULT_EMAILJS_SERVICE_ID,
            ),
            emailjs_template_id: or_default(
                option_env!("PORTFOLIO_EMAILJS_TEMPLATE_ID"),
                DEFAULT_EMAILJS_TEMPLATE_ID,
            ),
            emailjs_public_key: or_default(
                option_env!("PORTFOLIO_EMAILJS_PUBLIC_KEY"),
                DEFAULT_EMAILJS_PUBLIC_KEY,
            ),
            admin_password: or_default(
                option_env!("PORTFOLIO_ADMIN_PASSWORD"),
                DEFAULT_ADMIN_PASSWORD,
            ),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn or_default(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_default() {
        assert_eq!(or_default(None, "fallback"), "fallback");
        assert_eq!(or_default(Some(""), "fallback"), "fallback");
        assert_eq!(or_default(Some("   "), "fallback"), "fallback");
        assert_eq!(or_default(Some(" svc_1 "), "fallback"), "svc_1");
    }

    #[test]
    fn test_config_values_present() {
        let conf = SiteConfig::from_env();
        assert!(conf.emailjs_api_url.starts_with("https://"));
        assert!(!conf.emailjs_service_id.is_empty());
        assert!(!conf.emailjs_template_id.is_empty());
        assert!(!conf.emailjs_public_key.is_empty());
        assert!(!conf.admin_password.is_empty());
        assert_eq!(*SITE_CONFIG, conf);
    }
}
