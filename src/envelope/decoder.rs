//! レスポンスエンベロープのデコードと検証
//!
//! # 責務
//!
//! トランスポート層の生レスポンスを、検証済みのエンベロープ [`Envelope`] または
//! 型付きエラーに変換するモジュール。
//!
//! # 処理フロー
//!
//! 1. HTTP ステータスコードの検証（200/201 のみ許可、それ以外はボディを見ない）
//! 2. content-type から [`WireFormat`] を解決
//! 3. フォーマットに応じてボディを [`Envelope`] にデシリアライズ
//! 4. `envelope.status == "success"` の検証（HTTP ステータスとは独立）
//!
//! # 使用例
//!
//! ```rust,no_run
//! use flowifier_client::envelope::decode;
//! use flowifier_client::transport::TransportResponse;
//!
//! fn handle(response: TransportResponse) {
//!     match decode(&response) {
//!         Ok(envelope) => println!("data: {:?}", envelope.data),
//!         Err(err) => eprintln!("デコード失敗: {}", err),
//!     }
//! }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::transport::TransportResponse;
use super::format::WireFormat;

/// エンベロープが成功を表す status 値
const STATUS_SUCCESS: &str = "success";

/// API レスポンスの標準エンベロープ
///
/// すべての API 呼び出しは、ワイヤーフォーマットに依らず
/// `{status, data, message}` の形でレスポンスを包みます。
///
/// - `status == "success"` の場合のみ `data` が利用可能
/// - それ以外の値（`"fail"`、`"error"` 等）はプロトコルレベルの失敗で、
///   `message` に詳細が入ります
///
/// `status` はサーバーの値をそのまま保持するため文字列型です。
/// 閉じた列挙型にすると、未知の status を持つエンベロープが
/// デコードエラーに化けてしまいます。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    /// プロトコルレベルの結果（`"success"` / `"fail"` / `"error"` 等）
    pub status: String,

    /// レスポンスデータ（成功時のみ意味を持つ）
    #[serde(default)]
    pub data: Option<serde_json::Value>,

    /// 失敗時の詳細メッセージ
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Envelope {
    /// `data` を指定の型へ射影する
    ///
    /// # 戻り値
    ///
    /// - `Ok(T)`: 変換に成功した場合
    /// - `Err(ClientError::Decode)`: `data` が欠落、または形が合わない場合
    pub fn project<T: DeserializeOwned>(self) -> Result<T, ClientError> {
        let data = self
            .data
            .ok_or_else(|| ClientError::Decode("エンベロープに data がありません".to_string()))?;
        serde_json::from_value(data)
            .map_err(|e| ClientError::Decode(format!("data の射影に失敗しました: {}", e)))
    }
}

/// 生レスポンスを検証済みエンベロープにデコードする
///
/// # 引数
///
/// - `response`: トランスポート層から返された生レスポンス
///
/// # 戻り値
///
/// - `Ok(Envelope)`: 検証済みエンベロープ（`status == "success"` を保証）
///
/// # エラー
///
/// - [`ClientError::Transport`] - HTTP ステータスコードが 200/201 以外
/// - [`ClientError::UnsupportedContentType`] - 未対応の content-type
/// - [`ClientError::Decode`] - ボディが宣言された形式としてパースできない
/// - [`ClientError::Api`] - エンベロープの status が success 以外
pub fn decode(response: &TransportResponse) -> Result<Envelope, ClientError> {
    // HTTP ステータスの検証。失敗時はボディを検査しない
    if response.status != 200 && response.status != 201 {
        return Err(ClientError::Transport {
            code: response.status,
        });
    }

    // content-type ヘッダー欠落は空文字列として未対応扱い
    let content_type = response.content_type().unwrap_or("");
    let format = WireFormat::from_content_type(content_type)?;

    let envelope: Envelope = match format {
        WireFormat::Json => serde_json::from_slice(&response.body)
            .map_err(|e| ClientError::Decode(format!("JSON のパースに失敗しました: {}", e)))?,
        WireFormat::Bson => bson::from_slice(&response.body)
            .map_err(|e| ClientError::Decode(format!("BSON のパースに失敗しました: {}", e)))?,
    };

    // エンベロープ自身の status 検証。HTTP ステータスとは独立
    if envelope.status != STATUS_SUCCESS {
        return Err(ClientError::Api {
            status: envelope.status,
            message: envelope.message.unwrap_or_default(),
        });
    }

    Ok(envelope)
}
