use aws_sdk_dynamodb::operation::put_item::{PutItemError, PutItemOutput};
use aws_sdk_dynamodb::types::error::ResourceNotFoundException;
use aws_smithy_mocks::{mock, mock_client, Rule};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use model::{FirehoseEvent, FirehoseRecord};
use serde_json::Value;

/// Table name the mock clients expect requests for
pub const TEST_TABLE: &str = "test_table";

/// Create a Firehose record carrying `payload` as base64 encoded JSON
pub fn firehose_record(record_id: &str, payload: &Value) -> FirehoseRecord {
    firehose_record_with_data(record_id, STANDARD.encode(payload.to_string()))
}

/// Create a Firehose record with raw `data`, whatever it contains
pub fn firehose_record_with_data(record_id: &str, data: impl Into<String>) -> FirehoseRecord {
    FirehoseRecord {
        record_id: record_id.to_string(),
        data: data.into(),
        approximate_arrival_timestamp: None,
    }
}

/// Wrap records in an event without the platform envelope
pub fn firehose_event(records: Vec<FirehoseRecord>) -> FirehoseEvent {
    FirehoseEvent {
        records,
        ..Default::default()
    }
}

/// A mock DynamoDB client accepting every put to `TEST_TABLE`.
/// The returned rule counts the calls made.
pub fn create_mock_dynamodb_client() -> (aws_sdk_dynamodb::Client, Rule) {
    let put_item_rule: Rule = mock!(aws_sdk_dynamodb::Client::put_item)
        .match_requests(|req| req.table_name() == Some(TEST_TABLE))
        .sequence()
        .output(|| PutItemOutput::builder().build())
        .repeatedly()
        .build();

    let client = mock_client!(aws_sdk_dynamodb, [&put_item_rule]);

    (client, put_item_rule)
}

/// A mock DynamoDB client whose table does not exist.
pub fn create_failing_dynamodb_client() -> (aws_sdk_dynamodb::Client, Rule) {
    let put_item_rule: Rule = mock!(aws_sdk_dynamodb::Client::put_item)
        .match_requests(|_| true)
        .sequence()
        .error(|| {
            PutItemError::ResourceNotFoundException(
                ResourceNotFoundException::builder()
                    .message("Requested resource not found")
                    .build(),
            )
        })
        .repeatedly()
        .build();

    let client = mock_client!(aws_sdk_dynamodb, [&put_item_rule]);

    (client, put_item_rule)
}
