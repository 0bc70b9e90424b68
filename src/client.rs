//! Flowifier API クライアント層
//!
//! # 責務
//!
//! - ドメインモデル（ワークフロー、インスタンス、ステータス等）の提供
//! - 5 つのドメイン操作を持つ [`FlowifierClient`] の提供
//!
//! # モジュール構成
//!
//! - [`workflow`][]: ドメインモデル
//! - [`flowifier`][]: API クライアント本体
//! - `dto`: エンベロープ `data` 射影用の内部 DTO（外部非公開）
//!
//! # 使用例
//!
//! ```rust,no_run
//! use flowifier_client::client::FlowifierClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FlowifierClient::new("my-access-token")?;
//!     let workflows = client.list_workflows().await?;
//!     println!("{} 件のワークフロー", workflows.len());
//!     Ok(())
//! }
//! ```

mod dto;
pub mod flowifier;
pub mod workflow;

// 公開APIの再エクスポート
pub use flowifier::FlowifierClient;
pub use workflow::{InstanceResult, InstanceStatus, TriggerContext, Workflow, WorkflowInstance};
