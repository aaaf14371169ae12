use model::env::{DEFAULT_TABLE_NAME, RELAY_TABLE_NAME, RELAY_TABLE_REGION};

/// Where records are written, read from the environment at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub table_name: String,
    /// When unset the AWS default provider chain decides
    pub table_region: Option<String>,
}

impl RelayConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        RelayConfig {
            table_name: non_blank(RELAY_TABLE_NAME).unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            table_region: non_blank(RELAY_TABLE_REGION),
        }
    }
}
