use std::env;

/// Runtime configuration, read once from the environment at startup.
///
/// With no variables set the site runs fully in-process: in-memory stores
/// and no notifications.
#[derive(Debug, Default, Clone)]
pub struct AppConfig {
    /// Secret key for private session cookies. Rocket generates an ephemeral
    /// one in debug builds when unset.
    pub secret_key: Option<String>,
    /// Base URL of the managed key-value table service (cloud variant).
    pub table_endpoint: Option<String>,
    /// Topic URL for login/signup/booking notifications (cloud variant).
    pub notify_topic_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        AppConfig {
            secret_key: env::var("SECRET_KEY").ok(),
            table_endpoint: env::var("TABLE_ENDPOINT").ok(),
            notify_topic_url: env::var("NOTIFY_TOPIC_URL").ok(),
        }
    }
}
