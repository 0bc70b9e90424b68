//! Flowifier API クライアント
//!
//! # 責務
//!
//! - 5 つのドメイン操作（一覧取得・個別取得・実行・ステータス取得・結果取得）を
//!   「リクエスト組み立て → 送信 → エンベロープデコード → 射影」の 1 サイクルに対応付ける
//! - 共通のリクエスト組み立て（認証ヘッダー、accept ヘッダー、fields クエリ）を一元化
//!
//! # 設計
//!
//! 各操作はちょうど 1 回のネットワーク往復を行います。キャッシュ・リトライ・
//! 呼び出し間のバッファリングは行いません。クライアントは資格情報とベース URL
//! 以外の状態を持たないため、複数インスタンスを調整なしに並行利用できます。
//!
//! # 使用例
//!
//! ```rust,no_run
//! use flowifier_client::client::FlowifierClient;
//! use flowifier_client::config::ClientOptions;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FlowifierClient::with_options(
//!         "my-access-token",
//!         ClientOptions::with_app_url("http://127.0.0.1:8080"),
//!     )?;
//!
//!     for workflow in client.list_workflows().await? {
//!         println!("{}: {}", workflow.id, workflow.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

use serde::Serialize;
use tracing::{debug, info};

use crate::config::ClientOptions;
use crate::envelope;
use crate::error::ClientError;
use crate::transport::{HttpTransport, Method, Transport, TransportRequest};
use super::dto::{InstanceResultData, InstanceStatusData, WorkflowInstanceData};
use super::workflow::{
    InstanceResult, InstanceStatus, TriggerContext, Workflow, WorkflowInstance,
};

/// API パスのプレフィックス
const API_BASE_PATH: &str = "/api/v1";

/// 実行リクエストに記録されるクライアント識別文字列
const CREATED_BY: &str = "Rust Client Library";

/// fields クエリパラメータ名
///
/// 返却属性を絞り込むサーバー側の最適化ヒントで、正しさには影響しません。
const PARAM_FIELDS: &str = "fields";

/// 実行リクエストのボディ
///
/// BSON でエンコードして送信します。フィールド名はワイヤー形式（camelCase）。
#[derive(Debug, Serialize)]
struct ExecuteWorkflowBody<'a> {
    /// クライアント識別文字列
    #[serde(rename = "createdBy")]
    created_by: &'a str,

    /// 新しいインスタンスの初期変数（そのまま転送）
    #[serde(rename = "triggerVariables")]
    trigger_variables: &'a TriggerContext,
}

/// Flowifier API クライアント
///
/// アクセストークンとベース URL を保持し、トランスポート越しに API を呼び出します。
/// 資格情報とベース URL は構築時に確定し、以後変化しません。
pub struct FlowifierClient {
    /// Bearer 認証に使うアクセストークン
    access_token: String,

    /// サービスのベース URL（末尾スラッシュなしに正規化済み）
    app_url: String,

    /// HTTP トランスポート
    transport: Box<dyn Transport>,
}

impl FlowifierClient {
    /// デフォルト設定でクライアントを生成
    ///
    /// ベース URL には本番環境のデフォルト
    /// ([`DEFAULT_APP_URL`](crate::config::DEFAULT_APP_URL)) が使われます。
    ///
    /// # 引数
    ///
    /// - `access_token`: API のアクセストークン
    ///
    /// # エラー
    ///
    /// - [`ClientError::Http`] - HTTP クライアントの構築に失敗した場合
    pub fn new(access_token: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_options(access_token, ClientOptions::default())
    }

    /// オプションを指定してクライアントを生成
    ///
    /// # 引数
    ///
    /// - `access_token`: API のアクセストークン
    /// - `options`: クライアント設定（ベース URL の上書き等）
    ///
    /// # エラー
    ///
    /// - [`ClientError::Http`] - HTTP クライアントの構築に失敗した場合
    pub fn with_options(
        access_token: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        let transport = Box::new(HttpTransport::new()?);
        Ok(Self::with_transport(access_token, options, transport))
    }

    /// トランスポートを差し替えてクライアントを生成
    ///
    /// テストや独自のトランスポート実装で使用します。
    pub fn with_transport(
        access_token: impl Into<String>,
        options: ClientOptions,
        transport: Box<dyn Transport>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            app_url: options.app_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// ワークフローの一覧を取得
    ///
    /// # 戻り値
    ///
    /// - `Ok(Vec<Workflow>)`: ワークフローの配列
    ///
    /// # エラー
    ///
    /// [`ClientError`] の各バリアント（トランスポート・デコード・API エラー）
    pub async fn list_workflows(&self) -> Result<Vec<Workflow>, ClientError> {
        let request = self.build_request(
            Method::Get,
            &format!("{}/workflows", API_BASE_PATH),
            vec![(PARAM_FIELDS.to_string(), "name".to_string())],
            None,
        );

        let envelope = self.send(request).await?;
        let workflows: Vec<Workflow> = envelope.project()?;

        info!(count = workflows.len(), "ワークフロー一覧を取得");
        Ok(workflows)
    }

    /// ワークフローを 1 件取得
    ///
    /// # 引数
    ///
    /// - `workflow_id`: ワークフロー識別子
    ///
    /// # エラー
    ///
    /// 存在しない id はサーバーの失敗エンベロープとして返り、
    /// [`ClientError::Api`] になります（not-found の特別扱いはしません）。
    pub async fn get_workflow(&self, workflow_id: &str) -> Result<Workflow, ClientError> {
        let request = self.build_request(
            Method::Get,
            &format!("{}/workflows/{}", API_BASE_PATH, workflow_id),
            vec![(PARAM_FIELDS.to_string(), "name".to_string())],
            None,
        );

        let envelope = self.send(request).await?;
        envelope.project()
    }

    /// ワークフローを実行し、新しいインスタンスを生成
    ///
    /// 唯一の変更系操作です。呼び出しごとに新しいインスタンスが作られ、
    /// クライアント側での重複排除は行いません。
    ///
    /// # 引数
    ///
    /// - `workflow_id`: 実行するワークフローの識別子
    /// - `trigger`: 新しいインスタンスの初期変数（そのまま転送）
    ///
    /// # 戻り値
    ///
    /// - `Ok(WorkflowInstance)`: 生成されたインスタンス
    pub async fn execute_workflow(
        &self,
        workflow_id: &str,
        trigger: &TriggerContext,
    ) -> Result<WorkflowInstance, ClientError> {
        let body = ExecuteWorkflowBody {
            created_by: CREATED_BY,
            trigger_variables: trigger,
        };
        let bytes = bson::to_vec(&body)
            .map_err(|e| ClientError::Encode(format!("BSON のエンコードに失敗しました: {}", e)))?;

        let request = self.build_request(
            Method::Post,
            &format!("{}/workflows/{}/instances", API_BASE_PATH, workflow_id),
            vec![],
            Some(bytes),
        );

        let envelope = self.send(request).await?;
        let data: WorkflowInstanceData = envelope.project()?;

        info!(
            workflow_id,
            instance_id = %data.workflow_instance.id,
            "ワークフローインスタンスを生成"
        );
        Ok(data.workflow_instance)
    }

    /// インスタンスの実行ステータスを取得
    ///
    /// # 引数
    ///
    /// - `instance_id`: インスタンス識別子
    pub async fn get_instance_status(
        &self,
        instance_id: &str,
    ) -> Result<InstanceStatus, ClientError> {
        let request = self.build_request(
            Method::Get,
            &format!("{}/instances/{}", API_BASE_PATH, instance_id),
            vec![(PARAM_FIELDS.to_string(), "status".to_string())],
            None,
        );

        let envelope = self.send(request).await?;
        let data: InstanceStatusData = envelope.project()?;
        Ok(data.workflow_instance.status)
    }

    /// インスタンスの実行結果を取得
    ///
    /// ステータスが `finished` になってから呼び出してください。
    /// それより前に呼び出した場合の応答はサーバー側の契約に委ねられます。
    ///
    /// # 引数
    ///
    /// - `instance_id`: インスタンス識別子
    pub async fn get_instance_result(
        &self,
        instance_id: &str,
    ) -> Result<InstanceResult, ClientError> {
        let request = self.build_request(
            Method::Get,
            &format!("{}/instances/{}/result", API_BASE_PATH, instance_id),
            vec![(PARAM_FIELDS.to_string(), "status".to_string())],
            None,
        );

        let envelope = self.send(request).await?;
        let data: InstanceResultData = envelope.project()?;
        Ok(data.workflow_instance_result)
    }

    /// 共通のリクエスト組み立て
    ///
    /// すべての操作はここを通るため、ヘッダーとクエリの組み立てが
    /// 操作ごとに重複しません。POST ボディは BSON 固定です。
    fn build_request(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<Vec<u8>>,
    ) -> TransportRequest {
        let url = format!("{}{}", self.app_url, path);
        debug!(%url, "リクエストを組み立て");

        let mut headers = vec![
            ("accept".to_string(), "application/json".to_string()),
            (
                "authorization".to_string(),
                format!("Bearer {}", self.access_token),
            ),
        ];
        if body.is_some() {
            headers.push((
                "content-type".to_string(),
                "application/bson".to_string(),
            ));
        }

        TransportRequest {
            method,
            url,
            headers,
            query,
            body,
        }
    }

    /// リクエストを送信し、検証済みエンベロープを返す
    async fn send(&self, request: TransportRequest) -> Result<envelope::Envelope, ClientError> {
        let response = self.transport.send(request).await?;
        envelope::decode(&response)
    }
}
