pub use crate::config::RelayConfig;
pub use crate::error::{DecodeError, RelayError};
pub use crate::relay::RecordRelay;
use lambda_runtime::{tracing, LambdaEvent};
use model::{Error, FirehoseEvent, FirehoseResponse};

pub mod config;
pub mod error;
mod record;
pub mod relay;

pub type RelayLambdaEvent = LambdaEvent<FirehoseEvent>;

/// Lambda handler for a Firehose data transformation trigger, for use with
/// `lambda_runtime::run()`.
///
/// Any failure fails the whole invocation so Firehose retries the batch.
///
/// ```ignore
/// use lambda_runtime::service_fn;
/// use relay::{handle_firehose_event, RecordRelay};
///
/// let relay = RecordRelay::new(Arc::new(DynamoDbTable::new(client, "Likes_Tab")));
///
/// lambda_runtime::run(service_fn(|event| handle_firehose_event(&relay, event))).await?;
/// ```
pub async fn handle_firehose_event(
    relay: &RecordRelay,
    event: RelayLambdaEvent,
) -> Result<FirehoseResponse, Error> {
    let payload: FirehoseEvent = event.payload;

    tracing::info!(
        request_id = %event.context.request_id,
        invocation_id = ?payload.invocation_id,
        delivery_stream = ?payload.delivery_stream_arn,
        "Handling batch of [{}] from Firehose",
        payload.records.len()
    );
    tracing::debug!(
        source_stream = ?payload.source_kinesis_stream_arn,
        region = ?payload.region,
        "Record ids {:?}",
        payload.records.iter().map(|r| r.record_id.as_str()).collect::<Vec<_>>()
    );

    let response: FirehoseResponse = relay.process(payload).await.inspect_err(|err| {
        tracing::error!("Failed to process Firehose batch, {err}");
    })?;

    tracing::info!("Processing finished, returning [{}] records to Firehose", response.records.len());

    Ok(response)
}
