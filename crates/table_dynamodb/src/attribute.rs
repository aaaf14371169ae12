use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::Value;
use std::collections::HashMap;
use table::Item;

/// Convert an item into DynamoDB attributes.
///
/// Numbers are written from their source text, so no precision is lost
/// between the payload and the table.
pub(crate) fn to_attributes(item: Item) -> HashMap<String, AttributeValue> {
    item.into_iter()
        .map(|(name, value)| (name, to_attribute(value)))
        .collect()
}

fn to_attribute(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s),
        Value::Array(values) => AttributeValue::L(values.into_iter().map(to_attribute).collect()),
        Value::Object(map) => AttributeValue::M(to_attributes(map)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(value: Value) -> Item {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn scalars_convert_to_attributes() {
        let attributes = to_attributes(item(json!({
            "user": "alice",
            "likes": 3,
            "active": true,
            "deleted": null
        })));

        assert_eq!(Some(&AttributeValue::S("alice".to_string())), attributes.get("user"));
        assert_eq!(Some(&AttributeValue::N("3".to_string())), attributes.get("likes"));
        assert_eq!(Some(&AttributeValue::Bool(true)), attributes.get("active"));
        assert_eq!(Some(&AttributeValue::Null(true)), attributes.get("deleted"));
    }

    #[test]
    fn nested_values_convert_to_lists_and_maps() {
        let attributes = to_attributes(item(json!({
            "tags": ["a", 1],
            "address": { "city": "Pune" }
        })));

        assert_eq!(
            Some(&AttributeValue::L(vec![
                AttributeValue::S("a".to_string()),
                AttributeValue::N("1".to_string()),
            ])),
            attributes.get("tags")
        );
        assert_eq!(
            Some(&AttributeValue::M(HashMap::from([(
                "city".to_string(),
                AttributeValue::S("Pune".to_string())
            )]))),
            attributes.get("address")
        );
    }

    #[test]
    fn wide_numbers_keep_every_digit() {
        let item: Item = serde_json::from_str(
            r#"{"id":18446744073709551616,"price":12345678901234567890.123,"nested":[-99999999999999999999]}"#,
        )
        .unwrap();

        let attributes = to_attributes(item);

        assert_eq!(
            Some(&AttributeValue::N("18446744073709551616".to_string())),
            attributes.get("id")
        );
        assert_eq!(
            Some(&AttributeValue::N("12345678901234567890.123".to_string())),
            attributes.get("price")
        );
        assert_eq!(
            Some(&AttributeValue::L(vec![AttributeValue::N(
                "-99999999999999999999".to_string()
            )])),
            attributes.get("nested")
        );
    }
}
