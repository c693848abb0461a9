//! AWS Credentials loading
//!
//! Supports:
//! - Environment variables (AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY, AWS_SESSION_TOKEN)
//! - Shared credentials file (~/.aws/credentials or AWS_SHARED_CREDENTIALS_FILE)
//! - Static keys in ~/.aws/config (or AWS_CONFIG_FILE)

use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// AWS credentials
#[derive(Debug, Clone)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

/// Load credentials for a given profile
pub fn load_credentials(profile: &str) -> Result<Credentials> {
    // 1. Environment variables apply to the default profile only
    if profile == "default" {
        if let Ok(creds) = load_from_env() {
            debug!("Loaded credentials from environment variables");
            return Ok(creds);
        }
    }

    // 2. Shared credentials file
    match load_from_credentials_file(profile) {
        Ok(creds) => {
            debug!(
                "Loaded credentials from credentials file for profile '{}'",
                profile
            );
            return Ok(creds);
        }
        Err(e) => debug!("Credentials file lookup failed: {}", e),
    }

    // 3. Config file with direct credentials
    match load_from_config_file(profile) {
        Ok(creds) => {
            debug!(
                "Loaded credentials from config file for profile '{}'",
                profile
            );
            return Ok(creds);
        }
        Err(e) => debug!("Config file lookup failed: {}", e),
    }

    Err(anyhow!(
        "No credentials found for profile '{}'. Run 'aws configure --profile {}' or set AWS_ACCESS_KEY_ID/AWS_SECRET_ACCESS_KEY",
        profile,
        profile
    ))
}

/// Load credentials from environment variables
fn load_from_env() -> Result<Credentials> {
    let access_key_id =
        env::var("AWS_ACCESS_KEY_ID").map_err(|_| anyhow!("AWS_ACCESS_KEY_ID not set"))?;
    let secret_access_key =
        env::var("AWS_SECRET_ACCESS_KEY").map_err(|_| anyhow!("AWS_SECRET_ACCESS_KEY not set"))?;
    let session_token = env::var("AWS_SESSION_TOKEN").ok();

    Ok(Credentials {
        access_key_id,
        secret_access_key,
        session_token,
    })
}

/// Get AWS config directory
pub fn aws_config_dir() -> Result<PathBuf> {
    if let Ok(path) = env::var("AWS_CONFIG_FILE") {
        if let Some(parent) = PathBuf::from(path).parent() {
            return Ok(parent.to_path_buf());
        }
    }

    dirs::home_dir()
        .map(|h| h.join(".aws"))
        .ok_or_else(|| anyhow!("Could not find home directory"))
}

fn config_file_path() -> Result<PathBuf> {
    if let Ok(path) = env::var("AWS_CONFIG_FILE") {
        return Ok(PathBuf::from(path));
    }
    Ok(aws_config_dir()?.join("config"))
}

/// Parse an INI-style file into sections.
///
/// `[profile name]` headers (config file style) are stored under `name`.
fn parse_ini_file(content: &str) -> HashMap<String, HashMap<String, String>> {
    let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
    let mut current_section = String::new();

    for line in content.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            current_section = line[1..line.len() - 1].trim().to_string();
            if let Some(name) = current_section.strip_prefix("profile ") {
                current_section = name.trim().to_string();
            }
            sections.entry(current_section.clone()).or_default();
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            if !current_section.is_empty() {
                sections
                    .entry(current_section.clone())
                    .or_default()
                    .insert(key.trim().to_string(), value.trim().to_string());
            }
        }
    }

    sections
}

/// Pull static keys for `profile` out of an INI document
fn credentials_from_ini(content: &str, profile: &str) -> Result<Credentials> {
    let sections = parse_ini_file(content);

    let section = sections
        .get(profile)
        .ok_or_else(|| anyhow!("Profile '{}' not found", profile))?;

    let access_key_id = section
        .get("aws_access_key_id")
        .ok_or_else(|| anyhow!("aws_access_key_id not found for profile '{}'", profile))?
        .clone();

    let secret_access_key = section
        .get("aws_secret_access_key")
        .ok_or_else(|| anyhow!("aws_secret_access_key not found for profile '{}'", profile))?
        .clone();

    Ok(Credentials {
        access_key_id,
        secret_access_key,
        session_token: section.get("aws_session_token").cloned(),
    })
}

/// Load credentials from ~/.aws/credentials or AWS_SHARED_CREDENTIALS_FILE
fn load_from_credentials_file(profile: &str) -> Result<Credentials> {
    let creds_path = if let Ok(path) = env::var("AWS_SHARED_CREDENTIALS_FILE") {
        PathBuf::from(path)
    } else {
        aws_config_dir()?.join("credentials")
    };
    let content =
        fs::read_to_string(&creds_path).map_err(|_| anyhow!("Could not read {:?}", creds_path))?;

    credentials_from_ini(&content, profile)
}

/// Load credentials from ~/.aws/config (for direct credentials only)
fn load_from_config_file(profile: &str) -> Result<Credentials> {
    let config_path = config_file_path()?;
    let content = fs::read_to_string(&config_path)
        .map_err(|_| anyhow!("Could not read {:?}", config_path))?;

    credentials_from_ini(&content, profile)
}

/// Region configured for a profile in ~/.aws/config
pub fn get_profile_region(profile: &str) -> Option<String> {
    let content = fs::read_to_string(config_file_path().ok()?).ok()?;
    region_from_ini(&content, profile)
}

fn region_from_ini(content: &str, profile: &str) -> Option<String> {
    parse_ini_file(content)
        .get(profile)
        .and_then(|section| section.get("region"))
        .filter(|region| !region.is_empty())
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CREDENTIALS: &str = r#"
[default]
aws_access_key_id = AKIADEFAULT
aws_secret_access_key = secret_default

# staging keys
[staging]
aws_access_key_id = AKIASTAGING
aws_secret_access_key = secret_staging
aws_session_token = token_staging
"#;

    const CONFIG: &str = r#"
[default]
region = us-east-1

[profile voice]
region = eu-central-1
aws_access_key_id = AKIAVOICE
aws_secret_access_key = secret_voice

[profile empty]
region =
"#;

    #[test]
    fn test_parse_ini_file() {
        let sections = parse_ini_file(CONFIG);

        assert!(sections.contains_key("default"));
        assert!(sections.contains_key("voice")); // "profile " prefix stripped
        assert_eq!(
            sections.get("voice").unwrap().get("region").unwrap(),
            "eu-central-1"
        );
    }

    #[test]
    fn test_credentials_from_ini() {
        let creds = credentials_from_ini(CREDENTIALS, "staging").unwrap();
        assert_eq!(creds.access_key_id, "AKIASTAGING");
        assert_eq!(creds.secret_access_key, "secret_staging");
        assert_eq!(creds.session_token.as_deref(), Some("token_staging"));

        let creds = credentials_from_ini(CREDENTIALS, "default").unwrap();
        assert!(creds.session_token.is_none());
    }

    #[test]
    fn test_credentials_from_config_profile_section() {
        let creds = credentials_from_ini(CONFIG, "voice").unwrap();
        assert_eq!(creds.access_key_id, "AKIAVOICE");
    }

    #[test]
    fn test_missing_profile_or_keys() {
        let err = credentials_from_ini(CREDENTIALS, "prod").unwrap_err();
        assert!(err.to_string().contains("Profile 'prod' not found"));

        let err = credentials_from_ini(CONFIG, "default").unwrap_err();
        assert!(err.to_string().contains("aws_access_key_id"));
    }

    #[test]
    fn test_region_from_ini() {
        assert_eq!(region_from_ini(CONFIG, "voice").as_deref(), Some("eu-central-1"));
        assert_eq!(region_from_ini(CONFIG, "default").as_deref(), Some("us-east-1"));
        assert_eq!(region_from_ini(CONFIG, "empty"), None);
        assert_eq!(region_from_ini(CONFIG, "missing"), None);
    }
}
