//! トランスポートの共通インターフェース定義
//!
//! # 責務
//!
//! - HTTP トランスポートの共通トレイト [`Transport`] を定義
//! - トランスポート非依存のリクエスト型 [`TransportRequest`] とレスポンス型
//!   [`TransportResponse`] を提供
//!
//! クライアント本体はこの最小限の抽象だけを通じて通信するため、
//! コネクション管理・TLS・DNS 等の詳細は実装側（[`HttpTransport`] 等）に
//! 閉じています。テストではこのトレイトを実装したフェイクに差し替えます。
//!
//! [`HttpTransport`]: super::http::HttpTransport

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::ClientError;

/// HTTP メソッド
///
/// クライアントが使用するメソッドのみを表します。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET リクエスト
    Get,
    /// POST リクエスト
    Post,
}

/// トランスポートへ渡すリクエスト
///
/// メソッド、URL、ヘッダー、クエリパラメータ、およびオプションのボディを
/// 持つ平坦な構造体です。
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP メソッド
    pub method: Method,

    /// リクエスト先の完全な URL（クエリ文字列を除く）
    pub url: String,

    /// リクエストヘッダー（名前と値のペア）
    pub headers: Vec<(String, String)>,

    /// クエリパラメータ（名前と値のペア）
    pub query: Vec<(String, String)>,

    /// リクエストボディ（POST 時のみ）
    pub body: Option<Vec<u8>>,
}

/// トランスポートから返される生レスポンス
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP ステータスコード
    pub status: u16,

    /// レスポンスヘッダー（キーは小文字に正規化）
    pub headers: HashMap<String, String>,

    /// 生のレスポンスボディ
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// content-type ヘッダーの値を返す
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get("content-type").map(String::as_str)
    }
}

/// HTTP トランスポートの共通インターフェース
///
/// 1 回のリクエストを実行し、ステータスコード・ヘッダー・生ボディを返します。
/// リトライやリダイレクト等のポリシーはこの層では扱いません。
///
/// # 実装要件
///
/// - `Send + Sync`: マルチスレッド環境で安全に使用可能
/// - 非同期実行対応（`async_trait` を使用）
#[async_trait]
pub trait Transport: Send + Sync {
    /// リクエストを 1 回実行して生レスポンスを返す
    ///
    /// # エラー
    ///
    /// - [`ClientError::Http`] - 接続エラー、タイムアウト等の送信失敗
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, ClientError>;
}
