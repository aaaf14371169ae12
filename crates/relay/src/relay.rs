use crate::error::RelayError;
use crate::record::{encode_data, DecodedRecord};
use lambda_runtime::tracing;
use lambda_runtime::tracing::{Instrument, Span};
use model::{FirehoseEvent, FirehoseRecord, FirehoseResponse, FirehoseResponseRecord};
use std::sync::Arc;
use table::TableWriter;

/// Decodes each record of a batch, writes it to a table and acknowledges it.
pub struct RecordRelay {
    table: Arc<dyn TableWriter>,
}

impl RecordRelay {
    pub fn new(table: Arc<dyn TableWriter>) -> Self {
        RecordRelay { table }
    }

    /// Relay every record of the batch in order.
    ///
    /// Records are written one at a time. The first record that fails to
    /// decode or write aborts the batch and no acknowledgements are returned,
    /// leaving redelivery to the trigger.
    pub async fn process(&self, event: FirehoseEvent) -> Result<FirehoseResponse, RelayError> {
        let records: Vec<FirehoseRecord> = event.records;

        let mut acknowledged: Vec<FirehoseResponseRecord> = Vec::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            let record_span: Span = tracing::span!(
                tracing::Level::INFO,
                "Firehose record",
                record_id = record.record_id.as_str()
            );

            let response_record: FirehoseResponseRecord = self
                .relay_record(index + 1, record)
                .instrument(record_span)
                .await?;

            acknowledged.push(response_record);
        }

        tracing::info!("Relayed [{}] records", acknowledged.len());

        Ok(FirehoseResponse {
            records: acknowledged,
        })
    }

    async fn relay_record(
        &self,
        row: usize,
        record: FirehoseRecord,
    ) -> Result<FirehoseResponseRecord, RelayError> {
        let decoded: DecodedRecord = DecodedRecord::decode(&record).inspect_err(|err| {
            tracing::error!("{err}");
        })?;

        tracing::debug!("Data is {}", decoded.text());

        let DecodedRecord { bytes, item } = decoded;

        self.table
            .put_item(item)
            .await
            .map_err(|source| {
                tracing::error!("Row-{row} failed: {source}");

                RelayError::Write {
                    record_id: record.record_id.clone(),
                    source,
                }
            })?;

        tracing::info!(
            "Row-{row} written to {} successfully",
            self.table.table_name()
        );

        Ok(FirehoseResponseRecord::ok(
            record.record_id,
            encode_data(&bytes),
        ))
    }
}
