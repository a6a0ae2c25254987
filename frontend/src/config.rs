// Build-time configuration. Override with environment variables when running trunk.

pub const USED_EMAILS_KEY: &str = "usedEmails";
pub const DARK_MODE_KEY: &str = "darkMode";

const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Clone, Debug, PartialEq)]
pub struct EmailJsConfig {
    pub endpoint: &'static str,
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub public_key: &'static str,
}

pub fn get_emailjs_config() -> EmailJsConfig {
    EmailJsConfig {
        endpoint: option_env!("EMAILJS_ENDPOINT").unwrap_or(DEFAULT_EMAILJS_ENDPOINT),
        service_id: option_env!("EMAILJS_SERVICE_ID").unwrap_or("service_533swr7"),
        template_id: option_env!("EMAILJS_TEMPLATE_ID").unwrap_or("template_56bp0mi"),
        public_key: option_env!("EMAILJS_PUBLIC_KEY").unwrap_or("GqcG-qWTRU8OhepQW"),
    }
}
