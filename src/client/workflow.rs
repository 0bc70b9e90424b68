//! ワークフロードメインモデル
//!
//! # 責務
//!
//! Flowifier API が扱うエンティティのドメインモデルを提供するモジュール。
//!
//! # 主要な型
//!
//! - [`Workflow`][]: 再利用可能なプロセス定義（読み取り専用）
//! - [`WorkflowInstance`][]: ワークフローの 1 回の実行
//! - [`InstanceStatus`][]: インスタンスの実行ステータス（オープンな集合）
//! - [`TriggerContext`][]: 実行開始時に渡す初期変数
//! - [`InstanceResult`][]: 完了したインスタンスの結果ペイロード
//!
//! # ライフサイクル
//!
//! [`Workflow`] はサーバー状態の読み取り専用の射影です。
//! [`WorkflowInstance`] は `execute_workflow` で生成され、以後はサーバー側で
//! のみ状態が変化します。クライアントは観測するだけで、書き込みも破棄も
//! 行いません。

use std::fmt;

use serde::{Deserialize, Serialize};

/// ワークフロー定義
///
/// サーバーから取得する読み取り専用のプロセス定義です。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    /// ワークフロー識別子
    pub id: String,

    /// ワークフロー名
    pub name: String,
}

/// ワークフローインスタンス
///
/// `execute_workflow` で生成される、ワークフローの 1 回の実行です。
/// `status` はサーバーが返したフィールドに応じて欠落し得ます
/// （例: 生成直後のレスポンスには id のみが含まれることがあります）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowInstance {
    /// インスタンス識別子
    pub id: String,

    /// 実行ステータス（レスポンスに含まれる場合のみ）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<InstanceStatus>,
}

/// インスタンスの実行ステータス
///
/// サーバーが定義するオープンな集合です。クライアントは `finished` と
/// `failed` のみを終端として扱い、それ以外のすべての値（未知の値を含む）を
/// 非終端として扱います。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InstanceStatus {
    /// 生成直後
    Initial,
    /// 実行中
    Running,
    /// 正常終了（終端）
    Finished,
    /// 異常終了（終端）
    Failed,
    /// サーバーが定義するその他のステータス
    Other(String),
}

impl InstanceStatus {
    /// 終端ステータスかどうか
    ///
    /// # 戻り値
    ///
    /// - `true`: [`InstanceStatus::Finished`] または [`InstanceStatus::Failed`]
    /// - `false`: それ以外（未知のステータスを含む）
    pub fn is_terminal(&self) -> bool {
        matches!(self, InstanceStatus::Finished | InstanceStatus::Failed)
    }

    /// ワイヤー上の表現を返す
    pub fn as_str(&self) -> &str {
        match self {
            InstanceStatus::Initial => "initial",
            InstanceStatus::Running => "running",
            InstanceStatus::Finished => "finished",
            InstanceStatus::Failed => "failed",
            InstanceStatus::Other(value) => value,
        }
    }
}

impl From<String> for InstanceStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "initial" => InstanceStatus::Initial,
            "running" => InstanceStatus::Running,
            "finished" => InstanceStatus::Finished,
            "failed" => InstanceStatus::Failed,
            _ => InstanceStatus::Other(value),
        }
    }
}

impl From<InstanceStatus> for String {
    fn from(status: InstanceStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 実行開始時に渡す初期変数（変数名 → 値）
///
/// クライアントは中身を解釈せず、そのまま新しいインスタンスの
/// トリガー変数としてサーバーへ転送します。
pub type TriggerContext = serde_json::Map<String, serde_json::Value>;

/// 完了したインスタンスの結果ペイロード
///
/// 構造はワークフローごとに異なるため、任意の構造化値として扱います。
/// ステータスが `finished` になった後にのみ意味を持ちます。
pub type InstanceResult = serde_json::Value;
