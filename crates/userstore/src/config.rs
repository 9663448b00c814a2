use std::{env, fmt, time::Duration};

/// Which store the service talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreMode {
    /// DynamoDB Local at `Config::local_endpoint`, with throwaway credentials.
    Local,
    /// Managed DynamoDB in `Config::region`, using the default credential chain.
    Aws,
    /// Process-local map. Nothing survives a restart.
    Memory,
}

impl StoreMode {
    /// Parses the value of the `ENV` variable. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "local" => Some(Self::Local),
            "aws" => Some(Self::Aws),
            "memory" => Some(Self::Memory),
            _ => None,
        }
    }
}

impl fmt::Display for StoreMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Local => "local",
            Self::Aws => "aws",
            Self::Memory => "memory",
        };
        f.write_str(name)
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend selection (default: local)
    pub store_mode: StoreMode,
    /// AWS region used in `aws` mode (default: "us-east-1")
    pub region: String,
    /// DynamoDB table name (default: "Users")
    pub table_name: String,
    /// Endpoint used in `local` mode (default: "http://localhost:8000")
    pub local_endpoint: String,
    /// Per-request deadline in seconds (default: 10)
    pub request_timeout_seconds: u64,
    /// How long shutdown waits for in-flight requests, in seconds (default: 10)
    pub shutdown_grace_seconds: u64,
}

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_TABLE_NAME: &str = "Users";
pub const DEFAULT_LOCAL_ENDPOINT: &str = "http://localhost:8000";

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ENV` - `local`, `aws` or `memory` (default: local)
    /// - `AWS_REGION` - Region for `aws` mode (default: "us-east-1")
    /// - `DYNAMO_TABLE` - Table name (default: "Users")
    /// - `DYNAMODB_ENDPOINT` - Endpoint for `local` mode (default: "http://localhost:8000")
    /// - `REQUEST_TIMEOUT_SECONDS` - Request deadline (default: 10)
    /// - `SHUTDOWN_GRACE_SECONDS` - Shutdown grace period (default: 10)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let store_mode = match lookup("ENV") {
            None => StoreMode::Local,
            Some(value) => StoreMode::parse(&value).unwrap_or_else(|| {
                tracing::warn!(env = %value, "Unknown ENV value, falling back to local");
                StoreMode::Local
            }),
        };

        Self {
            store_mode,
            region: lookup("AWS_REGION")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_REGION.to_string()),
            table_name: lookup("DYNAMO_TABLE")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            local_endpoint: lookup("DYNAMODB_ENDPOINT")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_LOCAL_ENDPOINT.to_string()),
            request_timeout_seconds: lookup("REQUEST_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            shutdown_grace_seconds: lookup("SHUTDOWN_GRACE_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the request deadline as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Get the shutdown grace period as a Duration.
    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
