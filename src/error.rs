//! エラー型の定義
//!
//! このモジュールは、Flowifier クライアント全体で使用されるエラー型を定義します。
//!
//! # 責務
//!
//! - API 通信・レスポンス処理のエラー [`ClientError`] の型定義
//! - 設定読み込みのエラー [`ConfigError`] の型定義
//!
//! エラーは種類ごとにバリアントで区別できるため、呼び出し側はメッセージ文字列を
//! パースせずにハンドリングを分岐できます。

use thiserror::Error;

/// API 通信・レスポンス処理のエラー
///
/// クライアント操作（ワークフロー取得、インスタンス実行、ポーリング等）が
/// 検出した時点で同期的に返されます。リトライやエラーの握りつぶしは行いません。
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP ステータスコードが 200/201 以外
    ///
    /// レスポンスボディは検査されません。
    #[error("リクエストがステータスコード {code} で失敗しました")]
    Transport { code: u16 },

    /// 未対応の content-type を受信
    ///
    /// `application/json`（前方一致）と `application/bson`（完全一致）のみ対応。
    #[error("未対応の content-type '{content_type}' を受信しました")]
    UnsupportedContentType { content_type: String },

    /// レスポンスボディのデコードに失敗
    #[error("レスポンスボディのデコードに失敗しました: {0}")]
    Decode(String),

    /// エンベロープの status が success 以外
    ///
    /// サーバーが返した `status` と `message` をそのまま保持します。
    /// HTTP ステータスコードとは独立です（200 応答でも発生し得ます）。
    #[error("リクエストが '{status} - {message}' で失敗しました")]
    Api { status: String, message: String },

    /// リクエストボディのエンコードに失敗
    #[error("リクエストボディのエンコードに失敗しました: {0}")]
    Encode(String),

    /// HTTP リクエストの送信に失敗（接続エラー、タイムアウト等）
    #[error("HTTP リクエストの送信に失敗しました: {0}")]
    Http(#[from] reqwest::Error),
}

/// 設定関連のエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    /// ファイルの読み込みに失敗
    #[error("設定ファイルの読み込みに失敗しました: {0}")]
    FileRead(#[from] std::io::Error),

    /// TOML のデシリアライズに失敗
    #[error("TOML のデシリアライズに失敗しました: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    /// バリデーションエラー
    #[error("設定のバリデーションに失敗しました: {0}")]
    Validation(String),
}
