//! Connect configuration snapshot, read once per container lifecycle.

use std::env;

use thiserror::Error;

const INSTANCE_ID_VAR: &str = "CONNECT_INSTANCE_ID";
const FLOW_ID_VAR: &str = "CONNECT_FLOW_ID";
const PHONE_NUMBER_VAR: &str = "CONNECT_PHONE_NUMBER";

#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Missing environment variables for Connect configuration: {0} is not set")]
    MissingVar(&'static str),
}

/// Identifies the Connect instance, the contact flow to run once the call
/// connects, and the number calls are placed from.
#[derive(Debug, Clone)]
pub struct ConnectConfig {
    pub instance_id: String,
    pub contact_flow_id: String,
    pub source_phone_number: String,
}

impl ConnectConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    // Lookup-based constructor so tests never mutate process environment
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let require = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::MissingVar(name))
        };

        Ok(Self {
            instance_id: require(INSTANCE_ID_VAR)?,
            contact_flow_id: require(FLOW_ID_VAR)?,
            source_phone_number: require(PHONE_NUMBER_VAR)?,
        })
    }
}
