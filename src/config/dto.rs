//! TOML デシリアライズ用の DTO (Data Transfer Object)
//!
//! # 責務
//!
//! このモジュールは、TOML 設定ファイルからのデータ読み込み専用の構造体を
//! 提供します。DTO はバリデーション前の「生データ」を表現し、ドメインモデル
//! とは分離されています。
//!
//! ## 設計思想
//!
//! - **単一責務**: TOML のデシリアライズのみを担当
//! - **バリデーション前の状態**: 不正なデータも一旦受け入れる
//! - **カプセル化**: config モジュール内部のみで使用（外部非公開）
//!
//! ## 変換フロー
//!
//! ```text
//! TOML ファイル
//!   ↓ (デシリアライズ)
//! CliConfigDto
//!   ↓ (TryFrom でバリデーション)
//! CliConfig (ドメインモデル)
//! ```

use serde::Deserialize;

/// CLI 設定ファイルの DTO
///
/// TOML の `[client]` セクションをデシリアライズします。
///
/// **注**: この構造体は config モジュール内部の実装詳細です。
/// 外部からは [`CliConfig`](super::file::CliConfig) を使用してください。
#[derive(Debug, Default, Deserialize)]
pub(super) struct CliConfigDto {
    /// クライアント設定セクション
    #[serde(default)]
    pub(super) client: ClientSectionDto,
}

/// `[client]` セクションの DTO
#[derive(Debug, Default, Deserialize)]
pub(super) struct ClientSectionDto {
    /// ベース URL（省略時は本番デフォルト）
    #[serde(default)]
    pub(super) app_url: Option<String>,

    /// ポーリング間隔（ミリ秒、省略時はデフォルト）
    #[serde(default)]
    pub(super) poll_interval_ms: Option<u64>,
}
