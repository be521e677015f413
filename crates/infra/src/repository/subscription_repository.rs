//! # SubscriptionRepository
//!
//! 期限が近い有効なサブスクリプションを DynamoDB から読み出すリポジトリ。
//!
//! ## 設計方針
//!
//! - **フィルタ付きフルスキャン**: `expirationDate = :date AND active = :active`
//! - **完全一致**: 期限日時は範囲ではなく文字列の一致で比較する
//! - **ページング**: `LastEvaluatedKey` がなくなるまでスキャンを続け、返却順を保つ
//! - **形式不正は失敗扱い**: 必須属性が欠けたアイテムはエラーとして呼び出し元へ返す

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::{Client, types::AttributeValue};
use subnotify_domain::subscription::{ExpirationDate, Subscription};

use super::attribute::{Item, get_bool, get_s};
use crate::InfraError;

/// スキャンのフィルタ式
const FILTER_EXPRESSION: &str = "expirationDate = :date AND active = :active";

/// 期限日時プレースホルダ
const DATE_PLACEHOLDER: &str = ":date";

/// 有効フラグプレースホルダ
const ACTIVE_PLACEHOLDER: &str = ":active";

/// 期限日時でのスキャン条件
///
/// フィルタ式とプレースホルダのバインドを 1 か所で組み立てる。
#[derive(Debug, Clone, PartialEq)]
pub struct ExpirationScan {
    expression_attribute_values: HashMap<String, AttributeValue>,
}

impl ExpirationScan {
    pub fn new(expiration_date: &ExpirationDate) -> Self {
        let expression_attribute_values = HashMap::from([
            (
                DATE_PLACEHOLDER.to_string(),
                AttributeValue::S(expiration_date.as_str().to_string()),
            ),
            (ACTIVE_PLACEHOLDER.to_string(), AttributeValue::Bool(true)),
        ]);

        Self {
            expression_attribute_values,
        }
    }

    pub fn filter_expression(&self) -> &'static str {
        FILTER_EXPRESSION
    }

    pub fn expression_attribute_values(&self) -> &HashMap<String, AttributeValue> {
        &self.expression_attribute_values
    }
}

/// サブスクリプションリポジトリトレイト
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// 期限日時が一致し、かつ有効なサブスクリプションを全件返す
    ///
    /// 該当がなければ空の Vec を返す（エラーではない）。
    async fn find_active_by_expiration_date(
        &self,
        expiration_date: &ExpirationDate,
    ) -> Result<Vec<Subscription>, InfraError>;
}

/// DynamoDB 実装の SubscriptionRepository
pub struct DynamoDbSubscriptionRepository {
    client:     Client,
    table_name: String,
}

impl DynamoDbSubscriptionRepository {
    pub fn new(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }
}

#[async_trait]
impl SubscriptionRepository for DynamoDbSubscriptionRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(%expiration_date))]
    async fn find_active_by_expiration_date(
        &self,
        expiration_date: &ExpirationDate,
    ) -> Result<Vec<Subscription>, InfraError> {
        let scan = ExpirationScan::new(expiration_date);
        let mut subscriptions = Vec::new();
        let mut exclusive_start_key = None;

        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .filter_expression(scan.filter_expression())
                .set_expression_attribute_values(Some(scan.expression_attribute_values().clone()))
                .set_exclusive_start_key(exclusive_start_key.take())
                .send()
                .await
                .map_err(|e| {
                    InfraError::dynamo_db(format!("サブスクリプションのスキャンに失敗: {e}"))
                })?;

            for item in output.items() {
                subscriptions.push(convert_item_to_subscription(item)?);
            }

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key),
                _ => break,
            }
        }

        tracing::debug!(
            table = %self.table_name,
            count = subscriptions.len(),
            "スキャン完了"
        );

        Ok(subscriptions)
    }
}

/// DynamoDB アイテムを Subscription に変換する
fn convert_item_to_subscription(item: &Item) -> Result<Subscription, InfraError> {
    Ok(Subscription {
        email:           get_s(item, "email")?,
        customer_name:   get_s(item, "customerName")?,
        product_name:    get_s(item, "productName")?,
        expiration_date: ExpirationDate::new(get_s(item, "expirationDate")?),
        active:          get_bool(item, "active")?,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::error::InfraErrorKind;

    fn make_item() -> HashMap<String, AttributeValue> {
        HashMap::from([
            ("email".to_string(), AttributeValue::S("a@x.com".to_string())),
            (
                "customerName".to_string(),
                AttributeValue::S("Ana".to_string()),
            ),
            (
                "productName".to_string(),
                AttributeValue::S("Plan A".to_string()),
            ),
            (
                "expirationDate".to_string(),
                AttributeValue::S("2025-01-08T00:00:00".to_string()),
            ),
            ("active".to_string(), AttributeValue::Bool(true)),
        ])
    }

    #[test]
    fn test_expiration_scanのフィルタ式はプレースホルダを2つ参照する() {
        let scan = ExpirationScan::new(&ExpirationDate::new("2025-01-08T00:00:00"));

        assert_eq!(
            scan.filter_expression(),
            "expirationDate = :date AND active = :active"
        );
    }

    #[test]
    fn test_expiration_scanはフィルタ式のプレースホルダをすべてバインドする() {
        let scan = ExpirationScan::new(&ExpirationDate::new("2025-01-08T00:00:00"));
        let values = scan.expression_attribute_values();

        assert_eq!(values.len(), 2);
        assert_eq!(
            values.get(":date"),
            Some(&AttributeValue::S("2025-01-08T00:00:00".to_string()))
        );
        assert_eq!(values.get(":active"), Some(&AttributeValue::Bool(true)));
        for placeholder in values.keys() {
            assert!(
                scan.filter_expression().contains(placeholder.as_str()),
                "{placeholder} がフィルタ式に現れること"
            );
        }
    }

    #[test]
    fn test_アイテムをsubscriptionに変換できる() {
        let subscription = convert_item_to_subscription(&make_item()).unwrap();

        assert_eq!(
            subscription,
            Subscription {
                email:           "a@x.com".to_string(),
                customer_name:   "Ana".to_string(),
                product_name:    "Plan A".to_string(),
                expiration_date: ExpirationDate::new("2025-01-08T00:00:00"),
                active:          true,
            }
        );
    }

    #[rstest]
    #[case("email")]
    #[case("customerName")]
    #[case("productName")]
    #[case("expirationDate")]
    #[case("active")]
    fn test_必須属性が欠けたアイテムはmalformed_itemになる(#[case] missing: &str) {
        let mut item = make_item();
        item.remove(missing);

        let err = convert_item_to_subscription(&item).unwrap_err();

        assert!(
            matches!(err.kind(), InfraErrorKind::MalformedItem(msg) if msg.contains(missing)),
            "{err}"
        );
    }

    #[test]
    fn test_型が異なる属性はmalformed_itemになる() {
        let mut item = make_item();
        item.insert("active".to_string(), AttributeValue::S("true".to_string()));

        let err = convert_item_to_subscription(&item).unwrap_err();

        assert!(matches!(err.kind(), InfraErrorKind::MalformedItem(_)));
    }

    #[test]
    fn トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DynamoDbSubscriptionRepository>();
    }
}
