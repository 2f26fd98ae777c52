use crate::error::Top10Error;
use anyhow::{Context, Result};
use std::env;
use std::fs;
use tracing::error;
use url::Url;

/// Retrieve some environment variable value by its name. Also checks if the environment variable
/// value is in some file, the path to which is retrieved from an environment variable by the
/// given name concatenated with `_FILE`.
///
/// Returns [Result::Ok()] if a non-empty value is retrieved from either environment variable;
/// returns [Top10Error::Configuration] otherwise.
pub fn get_env_var(name: &str) -> Result<String, Top10Error> {
    match get_optional_env_var(name) {
        Some(value) => Ok(value),
        None => {
            let err = Top10Error::Configuration {
                name: name.to_string(),
            };
            error!(variable = name, "{}", err);
            Err(err)
        }
    }
}

/// Like [get_env_var], but an absent or blank value is not an error.
pub fn get_optional_env_var(name: &str) -> Option<String> {
    let raw = match env::var(name) {
        Ok(s) => Some(s),
        Err(_) => get_from_file(name).ok(),
    };

    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Read an optional URL from the environment, falling back to `default` when unset.
pub fn get_url_or_default(name: &str, default: &str) -> Result<Url, Top10Error> {
    let raw = get_optional_env_var(name).unwrap_or_else(|| default.to_string());
    Url::parse(&raw).map_err(|e| Top10Error::InvalidUrl {
        name: name.to_string(),
        value: raw,
        source: e,
    })
}

fn get_from_file(name: &str) -> Result<String> {
    let path = env::var(format!("{}_FILE", name))?;
    fs::read_to_string(&path).with_context(|| format!("Could not read {}.", path))
}

pub mod variables {
    pub use crate::environment_variables::*;
}
