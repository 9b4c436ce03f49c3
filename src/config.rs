/// Production lookup webhook; override with PHOTO_WEBHOOK_URL.
pub const DEFAULT_WEBHOOK_URL: &str =
    "https://primary-production-aac6.up.railway.app/webhook/request_photo";

/// Origin the webhook expects on lookup requests; override with PUBLIC_ORIGIN.
pub const DEFAULT_PUBLIC_ORIGIN: &str = "https://whatspy.chat";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub webhook_url: String,
    pub public_origin: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let webhook_url = std::env::var("PHOTO_WEBHOOK_URL")
            .unwrap_or_else(|_| DEFAULT_WEBHOOK_URL.to_string());
        let public_origin = std::env::var("PUBLIC_ORIGIN")
            .unwrap_or_else(|_| DEFAULT_PUBLIC_ORIGIN.to_string());
        let port = match std::env::var("ENVIRONMENT").as_deref() {
            Ok("staging") => 3100,
            _ => 3000,
        };

        Self {
            webhook_url,
            public_origin,
            port,
        }
    }
}
