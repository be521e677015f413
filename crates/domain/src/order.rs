//! # 注文
//!
//! 注文確認メールの送信に必要な注文と顧客を定義する。どちらも外部ストアが所有し、
//! 本システムはキーで 1 件ずつ読むだけ。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`Order`] | 注文 | `orderId` をキーに保存され、購入者の `customerId` を持つ |
//! | [`Customer`] | 顧客 | `customerId` をキーに保存され、宛先と挨拶に使う名前を持つ |

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// 注文確認メールの件名
pub const ORDER_CONFIRMATION_SUBJECT: &str = "Order Confirmation";

/// 注文 ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 顧客 ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 注文
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id:    OrderId,
    pub customer_id: CustomerId,
}

/// 顧客
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub customer_id: CustomerId,
    /// 挨拶に使う名前
    pub name:        String,
    /// 送信先メールアドレス
    pub email:       String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_注文はストアの属性名でシリアライズされる() {
        let order = Order {
            order_id:    OrderId::new("123"),
            customer_id: CustomerId::new("456"),
        };

        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            serde_json::json!({ "orderId": "123", "customerId": "456" })
        );
    }

    #[test]
    fn test_idは文字列のまま表示される() {
        assert_eq!(OrderId::new("123").to_string(), "123");
        assert_eq!(CustomerId::from("456".to_string()).as_str(), "456");
    }
}
