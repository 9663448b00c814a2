//! AWS SDK client setup.

use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::config::Credentials;
use aws_sdk_dynamodb::Client;

use crate::config::{Config, StoreMode, DEFAULT_REGION};

/// Returns a display string for the target environment.
pub fn target_display(config: &Config) -> String {
    match config.store_mode {
        StoreMode::Local => format!("Local DynamoDB ({})", config.local_endpoint),
        StoreMode::Aws => format!("AWS DynamoDB (region: {})", config.region),
        StoreMode::Memory => "in-memory store".to_string(),
    }
}

/// Creates a DynamoDB client for the configured mode.
///
/// Local mode points at DynamoDB Local, which accepts any credentials, so a
/// static pair is used. AWS mode relies on the default credential chain
/// (environment, profile, or the task/instance role).
pub async fn create_client(config: &Config) -> Client {
    let loader = aws_config::defaults(BehaviorVersion::latest());

    let loader = match config.store_mode {
        StoreMode::Local => loader
            .region(Region::new(DEFAULT_REGION))
            .endpoint_url(&config.local_endpoint)
            .credentials_provider(Credentials::new(
                "local",
                "local",
                None,
                None,
                "userstore-local",
            )),
        StoreMode::Aws | StoreMode::Memory => loader.region(Region::new(config.region.clone())),
    };

    let sdk_config = loader.load().await;
    Client::new(&sdk_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_display() {
        let mut config = Config::default();
        assert_eq!(
            target_display(&config),
            "Local DynamoDB (http://localhost:8000)"
        );

        config.store_mode = StoreMode::Aws;
        config.region = "eu-west-1".to_string();
        assert_eq!(target_display(&config), "AWS DynamoDB (region: eu-west-1)");
    }
}
