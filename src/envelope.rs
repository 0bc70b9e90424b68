//! レスポンスエンベロープのプロトコル層
//!
//! # 責務
//!
//! - content-type ヘッダーからのワイヤーフォーマット判定（JSON / BSON）
//! - 生レスポンスのエンベロープへのデコードとプロトコルレベルの検証
//!
//! # モジュール構成
//!
//! - [`format`][]: ワイヤーフォーマットの判定
//! - [`decoder`][]: エンベロープのデコードと検証
//!
//! # 使用例
//!
//! ```rust,no_run
//! use flowifier_client::envelope::decode;
//! use flowifier_client::transport::TransportResponse;
//!
//! fn extract(response: &TransportResponse) {
//!     match decode(response) {
//!         Ok(envelope) => println!("status: {}", envelope.status),
//!         Err(err) => eprintln!("{}", err),
//!     }
//! }
//! ```

pub mod decoder;
pub mod format;

// 公開APIの再エクスポート
pub use decoder::{decode, Envelope};
pub use format::WireFormat;
