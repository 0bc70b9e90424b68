//! クライアント構築オプション
//!
//! # 責務
//!
//! [`FlowifierClient`](crate::client::FlowifierClient) の構築時に注入する
//! 設定値を提供するモジュール。デフォルトのベース URL は暗黙のグローバル
//! 状態からではなく、ここで明示的な設定値として定義し、構築時に注入します。

/// 本番環境のデフォルトベース URL
pub const DEFAULT_APP_URL: &str = "https://app.flowifier.com";

/// クライアント構築オプション
///
/// 認識されるオプションは `app_url` のみです。
///
/// # 例
///
/// ```rust
/// use flowifier_client::config::{ClientOptions, DEFAULT_APP_URL};
///
/// // デフォルト（本番 URL）
/// let options = ClientOptions::default();
/// assert_eq!(options.app_url, DEFAULT_APP_URL);
///
/// // ローカル開発環境向けの上書き
/// let options = ClientOptions::with_app_url("http://127.0.0.1:8080");
/// assert_eq!(options.app_url, "http://127.0.0.1:8080");
/// ```
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// サービスのベース URL
    pub app_url: String,
}

impl ClientOptions {
    /// ベース URL を指定してオプションを生成
    ///
    /// # 引数
    ///
    /// - `app_url`: サービスのベース URL
    pub fn with_app_url(app_url: impl Into<String>) -> Self {
        Self {
            app_url: app_url.into(),
        }
    }
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            app_url: DEFAULT_APP_URL.to_string(),
        }
    }
}
