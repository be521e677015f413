//! # 呼び出しコンテキスト
//!
//! スケジューラやゲートウェイから渡される実行単位の識別子。ログの相関にだけ使い、
//! ジョブのロジックは参照しない。

use uuid::Uuid;

/// 呼び出しコンテキスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    pub request_id: String,
}

impl InvocationContext {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }
}

/// 呼び出し元が ID を持たない場合は UUID v7 を採番する
impl Default for InvocationContext {
    fn default() -> Self {
        Self::new(Uuid::now_v7().to_string())
    }
}
