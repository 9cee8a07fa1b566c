use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_EMAIL_FROM_NAME: &str = "EndOfHunger Support";

/// Origins accepted by CORS when `ALLOWED_ORIGINS` is unset.
const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:3001",
    "http://localhost:3002",
    "http://127.0.0.1:3000",
    "https://dineflowfrontend.vercel.app",
    "https://dineflowbackend.onrender.com",
];

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub bind_addr: SocketAddr,

    /// Base URL of the customer/admin frontend, used in reset links and company URLs.
    pub frontend_url: Option<String>,
    pub allowed_origins: Vec<String>,

    pub smtp_host: String,
    pub email_user: Option<String>,
    pub email_pass: Option<String>,
    pub email_from_name: String,

    pub gemini_api_key: Option<String>,

    /// Resolve public requests without any tenant signal to the newest company.
    pub tenant_fallback_latest: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required = |name: &str| {
            optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let bind_addr = optional("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BIND_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        let tenant_fallback_latest = match optional("TENANT_FALLBACK_LATEST") {
            None => false,
            Some(value) => parse_bool(&value).ok_or_else(|| ConfigError::InvalidEnvVar {
                name: "TENANT_FALLBACK_LATEST".to_string(),
                reason: format!("expected true or false, got '{}'", value),
            })?,
        };

        let allowed_origins = match optional("ALLOWED_ORIGINS") {
            Some(list) => list
                .split(',')
                .map(|o| o.trim().trim_end_matches('/').to_string())
                .filter(|o| !o.is_empty())
                .collect(),
            None => DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|o| o.to_string())
                .collect(),
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            bind_addr,
            frontend_url: optional("FRONTEND_URL").map(|u| u.trim_end_matches('/').to_string()),
            allowed_origins,
            smtp_host: optional("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            email_user: optional("EMAIL_USER"),
            email_pass: optional("EMAIL_PASS"),
            email_from_name: optional("EMAIL_FROM_NAME")
                .unwrap_or_else(|| DEFAULT_EMAIL_FROM_NAME.to_string()),
            gemini_api_key: optional("GEMINI_API_KEY"),
            tenant_fallback_latest,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    /// Expected: defaults fill every optional setting
    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_SECRET", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.port(), 5000);
        assert_eq!(config.smtp_host, "smtp.gmail.com");
        assert_eq!(config.email_from_name, "EndOfHunger Support");
        assert!(config.allowed_origins.contains(&"http://localhost:3000".to_string()));
        assert!(!config.tenant_fallback_latest);
        assert!(config.email_user.is_none());
    }

    /// Expected: Err(MissingEnvVar("JWT_SECRET"))
    #[test]
    fn rejects_missing_jwt_secret() {
        let result = Config::from_lookup(lookup(&[("DATABASE_URL", "sqlite::memory:")]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(ref name))) if name == "JWT_SECRET"
        ));
    }

    /// Expected: Err(InvalidEnvVar) for an unparsable flag
    #[test]
    fn rejects_invalid_fallback_flag() {
        let result = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_SECRET", "secret"),
            ("TENANT_FALLBACK_LATEST", "sometimes"),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }

    #[test]
    fn parses_origin_list_and_trims_trailing_slashes() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_SECRET", "secret"),
            ("ALLOWED_ORIGINS", "https://a.example.com/, https://b.example.com"),
            ("FRONTEND_URL", "https://app.example.com/"),
            ("TENANT_FALLBACK_LATEST", "true"),
        ]))
        .unwrap();

        assert_eq!(
            config.allowed_origins,
            vec!["https://a.example.com", "https://b.example.com"]
        );
        assert_eq!(config.frontend_url.as_deref(), Some("https://app.example.com"));
        assert!(config.tenant_fallback_latest);
    }
}
