use dataflip_manifest::{ConnectionSource, ContextConfig};

use super::{Error, Result};

/// Resolve the connection string of a context group.
///
/// `env` sources are read from the process environment; an unset or empty
/// variable is a configuration error.
pub fn connection_string(config: &ContextConfig) -> Result<String> {
    let location = format!("context '{}'", config.name);
    match config.database.source() {
        Ok(ConnectionSource::Url(url)) => Ok(url.to_string()),
        Ok(ConnectionSource::Env(var)) => match std::env::var(var) {
            Ok(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(Error::Configuration {
                location,
                message: format!("environment variable '{}' is not set", var),
            }),
        },
        Err(message) => Err(Error::Configuration {
            location,
            message: message.to_string(),
        }),
    }
}
