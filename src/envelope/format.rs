//! ワイヤーフォーマットの判定
//!
//! # 責務
//!
//! レスポンスの content-type ヘッダーから、ボディのシリアライズ形式
//! [`WireFormat`] を解決するモジュール。判定はレスポンスごとに一度だけ行い、
//! 未知の値は暗黙のフォールバックではなく [`ClientError::UnsupportedContentType`]
//! として明示的に弾きます。

use crate::error::ClientError;

/// JSON の content-type（前方一致で判定）
///
/// サーバーは `application/json; charset=utf-8` のようにパラメータを
/// 付けて返すことがあるため、前方一致で判定します。
const CONTENT_TYPE_JSON: &str = "application/json";

/// BSON の content-type（完全一致で判定）
const CONTENT_TYPE_BSON: &str = "application/bson";

/// レスポンスボディのワイヤーフォーマット
///
/// サーバーはネゴシエーションに応じて、デバッグしやすいテキスト形式（JSON）
/// またはコンパクトなバイナリ形式（BSON）のどちらでも応答します。
/// どちらの形式も同じエンベロープ構造を運ぶため、この層より先に
/// フォーマット固有の挙動は現れません。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireFormat {
    /// テキスト形式（`application/json`）
    Json,
    /// バイナリ形式（`application/bson`）
    Bson,
}

impl WireFormat {
    /// content-type ヘッダーの値からワイヤーフォーマットを解決
    ///
    /// # 引数
    ///
    /// - `content_type`: レスポンスの content-type ヘッダーの値
    ///
    /// # 戻り値
    ///
    /// - `Ok(WireFormat)`: 対応しているフォーマット
    /// - `Err(ClientError::UnsupportedContentType)`: 未対応の値
    pub fn from_content_type(content_type: &str) -> Result<Self, ClientError> {
        if content_type.starts_with(CONTENT_TYPE_JSON) {
            Ok(WireFormat::Json)
        } else if content_type == CONTENT_TYPE_BSON {
            Ok(WireFormat::Bson)
        } else {
            Err(ClientError::UnsupportedContentType {
                content_type: content_type.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_exact() {
        let format = WireFormat::from_content_type("application/json").unwrap();
        assert_eq!(format, WireFormat::Json);
    }

    #[test]
    fn test_json_with_charset_parameter() {
        let format = WireFormat::from_content_type("application/json; charset=utf-8").unwrap();
        assert_eq!(format, WireFormat::Json);
    }

    #[test]
    fn test_bson_exact() {
        let format = WireFormat::from_content_type("application/bson").unwrap();
        assert_eq!(format, WireFormat::Bson);
    }

    #[test]
    fn test_bson_with_parameter_is_unsupported() {
        // BSON は完全一致のみ対応
        let result = WireFormat::from_content_type("application/bson; charset=utf-8");
        assert!(matches!(
            result,
            Err(ClientError::UnsupportedContentType { .. })
        ));
    }

    #[test]
    fn test_unknown_content_type() {
        let result = WireFormat::from_content_type("text/plain");
        match result {
            Err(ClientError::UnsupportedContentType { content_type }) => {
                assert_eq!(content_type, "text/plain");
            }
            _ => panic!("Expected UnsupportedContentType error"),
        }
    }

    #[test]
    fn test_empty_content_type() {
        let result = WireFormat::from_content_type("");
        assert!(matches!(
            result,
            Err(ClientError::UnsupportedContentType { .. })
        ));
    }
}
