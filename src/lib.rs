//! Flowifier API の Rust クライアントライブラリ
//!
//! # 概要
//!
//! リモートのワークフロー実行サービス（Flowifier）に対して、ワークフロー定義の
//! 取得、インスタンスの実行、完了までのポーリング、結果の取得を行うための
//! クライアントライブラリです。
//!
//! # モジュール構成
//!
//! - [`client`][]: ドメインモデルと API クライアント本体
//! - [`envelope`][]: レスポンスエンベロープのデコードと検証（JSON / BSON）
//! - [`transport`][]: HTTP トランスポートの抽象化と reqwest 実装
//! - [`poller`][]: 終端ステータスまでのポーリングループ
//! - [`config`][]: クライアント構築オプションと CLI 用設定ファイル
//! - [`error`][]: エラー型
//!
//! # 使用例
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use flowifier_client::{FlowifierClient, InstancePoller, InstanceStatus, TriggerContext};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. クライアントを生成
//!     let client = FlowifierClient::new("my-access-token")?;
//!
//!     // 2. ワークフローを選んで実行
//!     let workflows = client.list_workflows().await?;
//!     let workflow = &workflows[0];
//!
//!     let mut trigger = TriggerContext::new();
//!     trigger.insert("firstname".to_string(), "Taro".into());
//!     let instance = client.execute_workflow(&workflow.id, &trigger).await?;
//!
//!     // 3. 完了までポーリング
//!     let poller = InstancePoller::new(&client, Duration::from_millis(500));
//!     let status = poller.wait_for_completion(&instance.id).await?;
//!
//!     // 4. 成功していれば結果を取得
//!     if status == InstanceStatus::Finished {
//!         let result = client.get_instance_result(&instance.id).await?;
//!         println!("結果: {}", result);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod poller;
pub mod transport;

// 公開APIの再エクスポート
pub use client::{
    FlowifierClient, InstanceResult, InstanceStatus, TriggerContext, Workflow, WorkflowInstance,
};
pub use config::{ClientOptions, DEFAULT_APP_URL};
pub use error::{ClientError, ConfigError};
pub use poller::InstancePoller;
pub use transport::{HttpTransport, Method, Transport, TransportRequest, TransportResponse};
