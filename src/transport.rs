//! HTTP トランスポート抽象化レイヤー
//!
//! # 責務
//!
//! - クライアント本体が通信に使う最小限のインターフェース [`Transport`] を提供
//! - 既定の実装として reqwest ベースの [`HttpTransport`] を提供
//!
//! # モジュール構成
//!
//! - [`traits`][]: 共通インターフェース（[`Transport`] トレイト、リクエスト/レスポンス型）
//! - [`http`][]: reqwest ベースの実装
//!
//! # 設計
//!
//! トランスポートは「メソッド・URL・ヘッダー・クエリ・ボディを渡すと、
//! ステータスコード・ヘッダー・生ボディが返る」以上のことを保証しません。
//! リトライ・認証トークンの更新・キャッシュはこの層の責務外です。

pub mod http;
pub mod traits;

// 公開APIの再エクスポート
pub use http::HttpTransport;
pub use traits::{Method, Transport, TransportRequest, TransportResponse};
