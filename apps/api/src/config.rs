use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::contact::dispatch::EMAILJS_SEND_URL;

const DEFAULT_PORT: u16 = 5000;

/// Application configuration loaded from environment variables.
/// Only `PORT` can fail; everything else falls back to a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory mounted under `/public`.
    pub public_dir: PathBuf,
    /// File served by `GET /api/download-cv`.
    pub cv_path: PathBuf,
    /// `None` when any of the three EmailJS variables is missing.
    pub emailjs: Option<EmailJsCredentials>,
    pub emailjs_api_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let public_dir =
            PathBuf::from(optional_env("PUBLIC_DIR").unwrap_or_else(|| "public".to_string()));
        let cv_path = cv_path_or_default(&public_dir, optional_env("CV_PATH"));

        Ok(Config {
            port: parse_port(optional_env("PORT"))?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            public_dir,
            cv_path,
            emailjs: emailjs_from(
                std::env::var("EMAILJS_SERVICE_ID").ok(),
                std::env::var("EMAILJS_TEMPLATE_ID").ok(),
                std::env::var("EMAILJS_PUBLIC_KEY").ok(),
            ),
            emailjs_api_url: optional_env("EMAILJS_API_URL")
                .unwrap_or_else(|| EMAILJS_SEND_URL.to_string()),
        })
    }
}

/// Unset means the default port; anything set must parse as a `u16`.
fn parse_port(raw: Option<String>) -> Result<u16> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .with_context(|| format!("PORT must be a valid port number, got {value:?}")),
    }
}

fn cv_path_or_default(public_dir: &Path, cv_path: Option<String>) -> PathBuf {
    cv_path
        .map(PathBuf::from)
        .unwrap_or_else(|| public_dir.join("cv.pdf"))
}

/// Credentials are only usable when all three values are real.
fn emailjs_from(
    service_id: Option<String>,
    template_id: Option<String>,
    public_key: Option<String>,
) -> Option<EmailJsCredentials> {
    Some(EmailJsCredentials {
        service_id: credential(service_id)?,
        template_id: credential(template_id)?,
        public_key: credential(public_key)?,
    })
}

/// Blank values and `.env.example` placeholders (`your_service_id`,
/// `your_public_key_here`, ...) count as unset.
fn credential(raw: Option<String>) -> Option<String> {
    non_blank(raw).filter(|v| !v.starts_with("your_"))
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Reads a variable, treating blank values as unset.
fn optional_env(key: &str) -> Option<String> {
    non_blank(std::env::var(key).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn test_port_defaults_when_unset() {
        assert_eq!(parse_port(None).unwrap(), 5000);
        assert_eq!(parse_port(some("8080")).unwrap(), 8080);
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        for bad in ["http", "-1", "70000", "50 00"] {
            let err = parse_port(some(bad)).unwrap_err();
            assert!(err.to_string().contains("PORT"), "{bad}: {err}");
        }
    }

    #[test]
    fn test_cv_path_defaults_under_public_dir() {
        let public = Path::new("assets");
        assert_eq!(cv_path_or_default(public, None), public.join("cv.pdf"));
        assert_eq!(
            cv_path_or_default(public, some("/srv/me.pdf")),
            PathBuf::from("/srv/me.pdf")
        );
    }

    #[test]
    fn test_emailjs_requires_all_three_values() {
        let creds = emailjs_from(some(" svc "), some("tpl"), some("key")).unwrap();
        assert_eq!(creds.service_id, "svc");
        assert_eq!(creds.public_key, "key");

        assert!(emailjs_from(some("svc"), None, some("key")).is_none());
        assert!(emailjs_from(some("svc"), some("tpl"), some("   ")).is_none());
    }

    #[test]
    fn test_emailjs_placeholders_count_as_unset() {
        assert!(emailjs_from(some("your_service_id_here"), some("tpl"), some("key")).is_none());
        assert!(emailjs_from(some("svc"), some("your_template_id"), some("key")).is_none());
        assert!(emailjs_from(some("svc"), some("tpl"), some("your_public_key_here")).is_none());
    }
}
