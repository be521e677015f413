//! # OrderRepository
//!
//! 注文と顧客を主キーで 1 件ずつ読むリポジトリ。
//!
//! 注文（`orderId`）と顧客（`customerId`）は同じテーブルに保存されている前提で、
//! どちらも `GetItem` で取得する。該当なしはエラーではなく `None` を返す。

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use subnotify_domain::order::{Customer, CustomerId, Order, OrderId};

use super::attribute::{Item, get_s, string_key};
use crate::InfraError;

/// 注文のキー属性名
const ORDER_KEY: &str = "orderId";

/// 顧客のキー属性名
const CUSTOMER_KEY: &str = "customerId";

/// 注文・顧客リポジトリトレイト
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// 注文 ID で注文を取得する
    async fn find_order(&self, order_id: &OrderId) -> Result<Option<Order>, InfraError>;

    /// 顧客 ID で顧客を取得する
    async fn find_customer(&self, customer_id: &CustomerId)
    -> Result<Option<Customer>, InfraError>;
}

/// DynamoDB 実装の OrderRepository
pub struct DynamoDbOrderRepository {
    client:     Client,
    table_name: String,
}

impl DynamoDbOrderRepository {
    pub fn new(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }

    async fn get_item(&self, key: Item, what: &str) -> Result<Option<Item>, InfraError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(key))
            .send()
            .await
            .map_err(|e| InfraError::dynamo_db(format!("{what}の取得に失敗: {e}")))?;

        Ok(output.item)
    }
}

#[async_trait]
impl OrderRepository for DynamoDbOrderRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(%order_id))]
    async fn find_order(&self, order_id: &OrderId) -> Result<Option<Order>, InfraError> {
        self.get_item(string_key(ORDER_KEY, order_id.as_str()), "注文")
            .await?
            .map(|item| convert_item_to_order(&item))
            .transpose()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%customer_id))]
    async fn find_customer(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Option<Customer>, InfraError> {
        self.get_item(string_key(CUSTOMER_KEY, customer_id.as_str()), "顧客")
            .await?
            .map(|item| convert_item_to_customer(&item))
            .transpose()
    }
}

fn convert_item_to_order(item: &Item) -> Result<Order, InfraError> {
    Ok(Order {
        order_id:    OrderId::new(get_s(item, ORDER_KEY)?),
        customer_id: CustomerId::new(get_s(item, CUSTOMER_KEY)?),
    })
}

fn convert_item_to_customer(item: &Item) -> Result<Customer, InfraError> {
    Ok(Customer {
        customer_id: CustomerId::new(get_s(item, CUSTOMER_KEY)?),
        name:        get_s(item, "name")?,
        email:       get_s(item, "email")?,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use aws_sdk_dynamodb::types::AttributeValue;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::InfraErrorKind;

    fn s(value: &str) -> AttributeValue {
        AttributeValue::S(value.to_string())
    }

    fn customer_item() -> Item {
        HashMap::from([
            ("customerId".to_string(), s("456")),
            ("name".to_string(), s("John Doe")),
            ("email".to_string(), s("john@example.com")),
        ])
    }

    #[test]
    fn test_アイテムをorderに変換できる() {
        let item = HashMap::from([
            ("orderId".to_string(), s("123")),
            ("customerId".to_string(), s("456")),
            ("total".to_string(), AttributeValue::N("1200".to_string())),
        ]);

        assert_eq!(
            convert_item_to_order(&item).unwrap(),
            Order {
                order_id:    OrderId::new("123"),
                customer_id: CustomerId::new("456"),
            }
        );
    }

    #[test]
    fn test_アイテムをcustomerに変換できる() {
        assert_eq!(
            convert_item_to_customer(&customer_item()).unwrap(),
            Customer {
                customer_id: CustomerId::new("456"),
                name:        "John Doe".to_string(),
                email:       "john@example.com".to_string(),
            }
        );
    }

    #[rstest]
    #[case("customerId")]
    #[case("name")]
    #[case("email")]
    fn test_顧客の必須属性が欠けたらmalformed_itemになる(#[case] missing: &str) {
        let mut item = customer_item();
        item.remove(missing);

        let err = convert_item_to_customer(&item).unwrap_err();

        assert!(matches!(err.kind(), InfraErrorKind::MalformedItem(msg) if msg.contains(missing)));
    }

    #[test]
    fn トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DynamoDbOrderRepository>();
    }
}
