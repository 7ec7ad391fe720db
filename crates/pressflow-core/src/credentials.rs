//! AWS credentials file lookup
//!
//! Reads `~/.aws/credentials` the way the AWS CLI writes it: INI
//! sections per profile with `aws_access_key_id` and
//! `aws_secret_access_key` keys. Secret values never reach logs or
//! error messages.

use std::path::{Path, PathBuf};

use pressflow_api::AwsCredentials;

use crate::error::Result;

/// Path of the shared AWS credentials file under `home`
pub fn credentials_file(home: &Path) -> PathBuf {
    home.join(".aws").join("credentials")
}

/// Profile names defined in the credentials file, in file order.
/// An absent file is an empty list, not an error.
pub fn available_profiles(home: &Path) -> Result<Vec<String>> {
    let path = credentials_file(home);
    if !path.exists() {
        return Ok(Vec::new());
    }

    let contents = std::fs::read_to_string(&path)?;
    let mut profiles = Vec::new();
    for line in contents.lines() {
        if let Some(name) = section_name(line) {
            profiles.push(name.to_string());
        }
    }
    Ok(profiles)
}

/// Credentials of a profile, when the profile exists and carries both
/// keys
pub fn profile_credentials(home: &Path, profile: &str) -> Result<Option<AwsCredentials>> {
    let path = credentials_file(home);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let mut in_profile = false;
    let mut access_key_id = None;
    let mut secret_access_key = None;

    for line in contents.lines() {
        if let Some(name) = section_name(line) {
            if in_profile {
                break;
            }
            in_profile = name == profile;
            continue;
        }
        if !in_profile {
            continue;
        }

        if let Some((key, value)) = key_value(line) {
            match key {
                "aws_access_key_id" => access_key_id = Some(value.to_string()),
                "aws_secret_access_key" => secret_access_key = Some(value.to_string()),
                _ => {}
            }
        }
    }

    Ok(match (access_key_id, secret_access_key) {
        (Some(access_key_id), Some(secret_access_key)) => Some(AwsCredentials {
            access_key_id,
            secret_access_key,
        }),
        _ => None,
    })
}

fn section_name(line: &str) -> Option<&str> {
    let line = line.trim();
    line.strip_prefix('[')?.strip_suffix(']')
}

fn key_value(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim()))
}
