//! エンベロープ `data` 射影用の DTO (Data Transfer Object)
//!
//! # 責務
//!
//! このモジュールは、エンベロープの `data` フィールドから各操作の戻り値を
//! 取り出すためのワイヤー形式密結合の構造体を提供します。
//!
//! ## 設計思想
//!
//! - **単一責務**: `data` のデシリアライズのみを担当
//! - **ワイヤー形式への密結合**: サーバーのフィールド名（camelCase）をそのまま表現
//! - **カプセル化**: client モジュール内部のみで使用（外部非公開）
//!
//! ## 変換フロー
//!
//! ```text
//! エンベロープの data (serde_json::Value)
//!   ↓ (Envelope::project でデシリアライズ)
//! 射影 DTO
//!   ↓ (フィールド取り出し)
//! ドメインモデル (Workflow / WorkflowInstance / InstanceStatus / InstanceResult)
//! ```

use serde::Deserialize;

use super::workflow::{InstanceResult, InstanceStatus, WorkflowInstance};

/// `data.workflowInstance` の射影（execute_workflow 用）
#[derive(Debug, Deserialize)]
pub(super) struct WorkflowInstanceData {
    /// 生成されたワークフローインスタンス
    #[serde(rename = "workflowInstance")]
    pub(super) workflow_instance: WorkflowInstance,
}

/// `data.workflowInstance.status` の射影（get_instance_status 用）
///
/// `fields=status` で絞り込んだレスポンスは status 以外のフィールドを
/// 含まないため、専用の DTO で受けます。
#[derive(Debug, Deserialize)]
pub(super) struct InstanceStatusData {
    /// ステータスのみを持つインスタンス射影
    #[serde(rename = "workflowInstance")]
    pub(super) workflow_instance: InstanceStatusOnly,
}

/// status フィールドのみのインスタンス射影
#[derive(Debug, Deserialize)]
pub(super) struct InstanceStatusOnly {
    /// 実行ステータス
    pub(super) status: InstanceStatus,
}

/// `data.workflowInstanceResult` の射影（get_instance_result 用）
#[derive(Debug, Deserialize)]
pub(super) struct InstanceResultData {
    /// インスタンスの結果ペイロード
    #[serde(rename = "workflowInstanceResult")]
    pub(super) workflow_instance_result: InstanceResult,
}
