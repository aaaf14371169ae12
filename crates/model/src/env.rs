/// Environment variable naming the table every record is written to
pub const RELAY_TABLE_NAME: &str = "RELAY_TABLE_NAME";
/// Environment variable naming the region the table lives in
pub const RELAY_TABLE_REGION: &str = "RELAY_TABLE_REGION";

/// Table used when `RELAY_TABLE_NAME` is unset
pub const DEFAULT_TABLE_NAME: &str = "Likes_Tab";
/// Region used when neither `RELAY_TABLE_REGION` nor the AWS provider chain supply one
pub const DEFAULT_TABLE_REGION: &str = "ap-south-1";
