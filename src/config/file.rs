//! CLI 設定ファイルの読み込みと管理を行うモジュール
//!
//! # 責務
//!
//! デモ CLI が使う TOML 設定ファイルを読み込み、バリデーション済みの
//! [`CliConfig`] として提供します。コアのクライアントは
//! [`ClientOptions`](super::options::ClientOptions) だけを受け取るため、
//! この設定はあくまで CLI 側の利便機能です。
//!
//! ## 使用例
//!
//! ```toml
//! [client]
//! app_url = "http://127.0.0.1:8080"
//! poll_interval_ms = 500
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;
use super::dto::CliConfigDto;

/// デフォルトのポーリング間隔（ミリ秒）
const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// CLI 設定（ドメインモデル）
///
/// バリデーション済みの状態を保証します。
///
/// ## DTO との違い
///
/// - `CliConfigDto`: TOML デシリアライズ専用、バリデーション前の生データ
/// - [`CliConfig`]: バリデーション済み
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// ベース URL の上書き（未指定なら `None`）
    app_url: Option<String>,

    /// ポーリング間隔
    poll_interval: Duration,
}

impl CliConfig {
    /// TOML ファイルから設定を読み込む
    ///
    /// # 処理フロー
    ///
    /// 1. ファイル読み込み
    /// 2. TOML デシリアライズ → `CliConfigDto`
    /// 3. バリデーション & 変換 → [`CliConfig`]
    ///
    /// # 引数
    ///
    /// * `path` - TOML ファイルのパス
    ///
    /// # 戻り値
    ///
    /// * `Ok(CliConfig)` - 読み込みに成功した場合
    /// * `Err(ConfigError)` - ファイルの読み込みまたはパースに失敗した場合
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// TOML 文字列から設定を読み込む
    ///
    /// # 引数
    ///
    /// * `toml_text` - TOML 形式の文字列
    pub fn from_toml(toml_text: &str) -> Result<Self, ConfigError> {
        let dto: CliConfigDto = toml::from_str(toml_text)?;
        dto.try_into()
    }

    /// ベース URL の上書き値
    pub fn app_url(&self) -> Option<&str> {
        self.app_url.as_deref()
    }

    /// ポーリング間隔
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            app_url: None,
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }
}

/// DTO からドメインモデルへの変換（読み込み方向）
///
/// バリデーションを実施し、不正なデータの場合は [`ConfigError::Validation`]
/// を返します。
impl TryFrom<CliConfigDto> for CliConfig {
    type Error = ConfigError;

    fn try_from(dto: CliConfigDto) -> Result<Self, Self::Error> {
        if let Some(app_url) = &dto.client.app_url {
            if app_url.is_empty() {
                return Err(ConfigError::Validation("app_url が空です".to_string()));
            }
            if !app_url.starts_with("http://") && !app_url.starts_with("https://") {
                return Err(ConfigError::Validation(format!(
                    "app_url は http:// または https:// で始まる必要があります: {}",
                    app_url
                )));
            }
        }

        if dto.client.poll_interval_ms == Some(0) {
            return Err(ConfigError::Validation(
                "poll_interval_ms は 1 以上である必要があります".to_string(),
            ));
        }

        Ok(Self {
            app_url: dto.client.app_url,
            poll_interval: Duration::from_millis(
                dto.client.poll_interval_ms.unwrap_or(DEFAULT_POLL_INTERVAL_MS),
            ),
        })
    }
}
