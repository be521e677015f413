//! DynamoDB アイテムの属性読み出し

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

use crate::InfraError;

pub(crate) type Item = HashMap<String, AttributeValue>;

/// 文字列属性（`S`）を取得する
pub(crate) fn get_s(item: &Item, key: &str) -> Result<String, InfraError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .cloned()
        .ok_or_else(|| InfraError::malformed_item(format!("文字列属性 '{key}' が見つかりません")))
}

/// 真偽値属性（`BOOL`）を取得する
pub(crate) fn get_bool(item: &Item, key: &str) -> Result<bool, InfraError> {
    item.get(key)
        .and_then(|v| v.as_bool().ok())
        .copied()
        .ok_or_else(|| InfraError::malformed_item(format!("真偽値属性 '{key}' が見つかりません")))
}

/// 文字列のキー属性 1 つだけを持つキーを作る
pub(crate) fn string_key(name: &str, value: &str) -> Item {
    HashMap::from([(name.to_string(), AttributeValue::S(value.to_string()))])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::InfraErrorKind;

    #[test]
    fn test_数値属性を文字列として読むとmalformed_itemになる() {
        let item = HashMap::from([("orderId".to_string(), AttributeValue::N("123".to_string()))]);

        let err = get_s(&item, "orderId").unwrap_err();

        assert!(matches!(err.kind(), InfraErrorKind::MalformedItem(msg) if msg.contains("orderId")));
    }

    #[test]
    fn test_string_keyは属性1つのキーを作る() {
        assert_eq!(
            string_key("customerId", "456"),
            HashMap::from([("customerId".to_string(), AttributeValue::S("456".to_string()))])
        );
    }
}
