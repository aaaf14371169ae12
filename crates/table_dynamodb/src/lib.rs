use crate::attribute::to_attributes;
use async_trait::async_trait;
use aws_sdk_dynamodb::config::http::HttpResponse;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::put_item::{PutItemError, PutItemOutput};
use aws_sdk_dynamodb::types::AttributeValue;
use lambda_runtime::tracing;
use std::collections::HashMap;
use table::TableErrorReason::BackendFailure;
use table::{Item, TableError, TableWriter};

mod attribute;

/// Writes items to a DynamoDB table with `PutItem`.
pub struct DynamoDbTable {
    table_name: String,
    dynamodb_client: aws_sdk_dynamodb::Client,
}

impl DynamoDbTable {
    pub fn new(dynamodb_client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        DynamoDbTable {
            table_name: table_name.into(),
            dynamodb_client,
        }
    }

    async fn send_put_item(
        &self,
        item: HashMap<String, AttributeValue>,
    ) -> Result<PutItemOutput, SdkError<PutItemError, HttpResponse>> {
        self.dynamodb_client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
    }
}

#[async_trait]
impl TableWriter for DynamoDbTable {
    fn table_name(&self) -> &str {
        &self.table_name
    }

    async fn put_item(&self, item: Item) -> Result<(), TableError> {
        let output: PutItemOutput = self
            .send_put_item(to_attributes(item))
            .await
            .map_err(|err| TableError::new(&self.table_name, BackendFailure(err.into())))?;

        tracing::debug!(table = %self.table_name, "PutItem response {:?}", output);

        Ok(())
    }
}
