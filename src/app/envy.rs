use std::{env, time::Duration};

use serde::Deserialize;

use super::{errors::DefaultAppError, models::app_error::AppError};

const DEFAULT_REDIRECT_DELAY_MS: u64 = 1500;
const DEFAULT_READ_TIME: u32 = 5;
const DEFAULT_AUTHOR_NAME: &str = "Alex Johnson";
const DEFAULT_AUTHOR_AVATAR_URL: &str = "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-4.0.3&auto=format&fit=crop&w=1170&q=80";

fn default_app_env() -> String {
    "development".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,

    pub redirect_delay_ms: Option<u64>,
    pub default_read_time: Option<u32>,

    pub author_name: Option<String>,
    pub author_avatar_url: Option<String>,
}

impl Default for Envy {
    fn default() -> Self {
        Self {
            app_env: default_app_env(),
            redirect_delay_ms: None,
            default_read_time: None,
            author_name: None,
            author_avatar_url: None,
        }
    }
}

impl Envy {
    /// Reads `.env.{APP_ENV}` if present, then deserializes the process
    /// environment.
    pub fn load() -> Result<Self, AppError> {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| default_app_env());
        let _ = dotenvy::from_filename(format!(".env.{}", app_env));

        Self::from_vars(env::vars())
    }

    /// Deserializes from `(NAME, value)` pairs. Unset variables keep their
    /// defaults.
    pub fn from_vars<I>(vars: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        match envy::from_iter::<_, Envy>(vars) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::error!(%e);
                Err(DefaultAppError::InternalError.value())
            }
        }
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms.unwrap_or(DEFAULT_REDIRECT_DELAY_MS))
    }

    pub fn default_read_time(&self) -> u32 {
        self.default_read_time.unwrap_or(DEFAULT_READ_TIME)
    }

    pub fn author_name(&self) -> &str {
        self.author_name.as_deref().unwrap_or(DEFAULT_AUTHOR_NAME)
    }

    pub fn author_avatar_url(&self) -> &str {
        self.author_avatar_url
            .as_deref()
            .unwrap_or(DEFAULT_AUTHOR_AVATAR_URL)
    }
}
