use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_dynamodb::config::Region;
use lambda_runtime::{service_fn, tracing, Error};
use model::env::DEFAULT_TABLE_REGION;
use relay::{handle_firehose_event, RecordRelay, RelayConfig};
use std::sync::Arc;
use table_dynamodb::DynamoDbTable;

async fn load_aws_config(config: &RelayConfig) -> SdkConfig {
    // Explicit region first, then the environment, then the default table region
    let region_provider = RegionProviderChain::first_try(config.table_region.clone().map(Region::new))
        .or_default_provider()
        .or_else(DEFAULT_TABLE_REGION);

    aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await
}

fn create_relay(dynamodb_client: aws_sdk_dynamodb::Client, config: &RelayConfig) -> RecordRelay {
    RecordRelay::new(Arc::new(DynamoDbTable::new(
        dynamodb_client,
        config.table_name.clone(),
    )))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let config: RelayConfig = RelayConfig::from_env();
    let aws_config: SdkConfig = load_aws_config(&config).await;

    tracing::info!(
        table = config.table_name.as_str(),
        region = ?aws_config.region(),
        "Starting Firehose relay"
    );

    let relay: RecordRelay = create_relay(aws_sdk_dynamodb::Client::new(&aws_config), &config);

    lambda_runtime::run(service_fn(|event| handle_firehose_event(&relay, event))).await
}
