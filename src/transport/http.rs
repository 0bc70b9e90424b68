//! reqwest ベースの HTTP トランスポート
//!
//! # 責務
//!
//! - [`Transport`] トレイトを `reqwest::Client` で実装
//! - リクエストの組み立て（ヘッダー、クエリ、ボディ）と送信
//! - レスポンスの生データ（ステータス・ヘッダー・バイト列）への変換
//!
//! タイムアウト等の通信ポリシーはこの実装に閉じており、
//! クライアント本体はトレイト越しにしか触れません。

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::ClientError;
use super::traits::{Method, Transport, TransportRequest, TransportResponse};

/// リクエスト全体のタイムアウト（秒）
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// reqwest ベースのトランスポート実装
///
/// # 例
///
/// ```rust,no_run
/// use flowifier_client::transport::HttpTransport;
///
/// let transport = HttpTransport::new().unwrap();
/// ```
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// デフォルト設定でトランスポートを生成
    ///
    /// # エラー
    ///
    /// - [`ClientError::Http`] - HTTP クライアントの構築に失敗した場合
    pub fn new() -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self { http })
    }

    /// 構築済みの `reqwest::Client` からトランスポートを生成
    ///
    /// タイムアウトやプロキシ等をカスタマイズしたい場合に使用します。
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, ClientError> {
        debug!(url = %request.url, method = ?request.method, "HTTP リクエストを送信");

        let mut builder = self.http.request(request.method.into(), &request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;

        let status = response.status().as_u16();
        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                headers.insert(name.as_str().to_ascii_lowercase(), value.to_string());
            }
        }
        let body = response.bytes().await?.to_vec();

        debug!(status, bytes = body.len(), "HTTP レスポンスを受信");

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}
