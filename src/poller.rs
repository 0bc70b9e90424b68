//! インスタンス実行のポーリングループ
//!
//! # 責務
//!
//! - インスタンスが終端ステータスに到達するまで、固定間隔でステータス取得を繰り返す
//! - 終端ステータス（`finished` / `failed`）を観測した反復でループを終了し、
//!   その値を呼び出し元へ返す
//!
//! # 状態遷移
//!
//! ```text
//! initial → {running, finished, failed}
//! running → {running, finished, failed}
//! finished / failed : 終端（以後の遷移は観測されない）
//! ```
//!
//! サーバーは非同期にワークフローを実行し、プッシュ通知の経路がないため、
//! 固定間隔のポーリングが唯一の完了検知手段です。間隔はプロトコル定数ではなく
//! ポリシーとして呼び出し元が注入します。
//!
//! 結果の取得はこのループの責務外です。`finished` を受け取った呼び出し元が
//! [`FlowifierClient::get_instance_result`] を呼びます。`failed` は結果を
//! 持たないため、結果を要求してはいけません。
//!
//! # 使用例
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use flowifier_client::client::{FlowifierClient, InstanceStatus};
//! use flowifier_client::poller::InstancePoller;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FlowifierClient::new("my-access-token")?;
//!     let poller = InstancePoller::new(&client, Duration::from_millis(500));
//!
//!     let status = poller.wait_for_completion("inst-1").await?;
//!     if status == InstanceStatus::Finished {
//!         let result = client.get_instance_result("inst-1").await?;
//!         println!("結果: {}", result);
//!     }
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use tracing::{debug, info};

use crate::client::{FlowifierClient, InstanceStatus};
use crate::error::ClientError;

/// インスタンス実行のポーラー
///
/// 1 つのポーリング列は単一の論理制御フローで進みます。中断はポーリング間隔の
/// 待機点でのみ発生し、リクエスト処理中には発生しません。同一インスタンスに
/// 対して同時に複数のリクエストを発行することはありません。
pub struct InstancePoller<'a> {
    /// ステータス取得に使うクライアント
    client: &'a FlowifierClient,

    /// ポーリング間隔
    poll_interval: Duration,
}

impl<'a> InstancePoller<'a> {
    /// 新しいポーラーを生成
    ///
    /// # 引数
    ///
    /// - `client`: ステータス取得に使うクライアント
    /// - `poll_interval`: ステータス取得の間隔
    pub fn new(client: &'a FlowifierClient, poll_interval: Duration) -> Self {
        Self {
            client,
            poll_interval,
        }
    }

    /// 終端ステータスに到達するまでポーリング
    ///
    /// ステータスが `finished` / `failed` 以外の間、`poll_interval` の待機を
    /// 挟みながら取得を繰り返します。終端を観測した反復でその値を返します。
    ///
    /// ステータス取得のエラーはこの層では捕捉しません。この層では一時的な
    /// 失敗と恒久的な失敗を区別できないため、ループを中断してそのまま
    /// 呼び出し元へ伝播します。
    ///
    /// # 引数
    ///
    /// - `instance_id`: 監視するインスタンスの識別子
    ///
    /// # 戻り値
    ///
    /// - `Ok(InstanceStatus)`: 終端ステータス（`Finished` または `Failed`）
    ///
    /// # エラー
    ///
    /// ステータス取得が返した [`ClientError`] をそのまま返します。
    pub async fn wait_for_completion(
        &self,
        instance_id: &str,
    ) -> Result<InstanceStatus, ClientError> {
        loop {
            let status = self.client.get_instance_status(instance_id).await?;

            if status.is_terminal() {
                info!(instance_id, %status, "インスタンスが終端ステータスに到達");
                return Ok(status);
            }

            debug!(instance_id, %status, interval = ?self.poll_interval, "非終端ステータスを観測、待機");
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use serde_json::json;

    use crate::config::ClientOptions;
    use crate::transport::{Transport, TransportRequest, TransportResponse};
    use super::*;

    /// ステータス列を順に返し、リクエスト URL を記録するフェイク
    struct SequenceTransport {
        statuses: Mutex<Vec<&'static str>>,
        urls: Mutex<Vec<String>>,
    }

    impl SequenceTransport {
        fn new(statuses: Vec<&'static str>) -> Arc<Self> {
            Arc::new(Self {
                statuses: Mutex::new(statuses),
                urls: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl Transport for SequenceTransport {
        async fn send(
            &self,
            request: TransportRequest,
        ) -> Result<TransportResponse, ClientError> {
            self.urls.lock().unwrap().push(request.url);
            let status = self.statuses.lock().unwrap().remove(0);

            let envelope = json!({
                "status": "success",
                "data": { "workflowInstance": { "status": status } }
            });
            let mut headers = HashMap::new();
            headers.insert(
                "content-type".to_string(),
                "application/json".to_string(),
            );
            Ok(TransportResponse {
                status: 200,
                headers,
                body: serde_json::to_vec(&envelope).unwrap(),
            })
        }
    }

    /// Arc で包んだフェイクへ委譲するラッパー
    struct SharedTransport(Arc<SequenceTransport>);

    #[async_trait]
    impl Transport for SharedTransport {
        async fn send(
            &self,
            request: TransportRequest,
        ) -> Result<TransportResponse, ClientError> {
            self.0.send(request).await
        }
    }

    fn client_with(transport: Arc<SequenceTransport>) -> FlowifierClient {
        FlowifierClient::with_transport(
            "test-token",
            ClientOptions::with_app_url("http://127.0.0.1:8080"),
            Box::new(SharedTransport(transport)),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_polls_until_finished() {
        let transport = SequenceTransport::new(vec!["initial", "running", "running", "finished"]);
        let client = client_with(transport.clone());
        let poller = InstancePoller::new(&client, Duration::from_millis(500));

        let start = tokio::time::Instant::now();
        let status = poller.wait_for_completion("inst-1").await.unwrap();

        assert_eq!(status, InstanceStatus::Finished);

        // ステータス取得はちょうど 4 回、待機は取得の間の 3 回のみ
        let urls = transport.urls.lock().unwrap();
        assert_eq!(urls.len(), 4);
        assert_eq!(start.elapsed(), Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_terminates_without_result_call() {
        let transport = SequenceTransport::new(vec!["initial", "failed"]);
        let client = client_with(transport.clone());
        let poller = InstancePoller::new(&client, Duration::from_millis(500));

        let status = poller.wait_for_completion("inst-1").await.unwrap();

        assert_eq!(status, InstanceStatus::Failed);

        let urls = transport.urls.lock().unwrap();
        assert_eq!(urls.len(), 2);
        // ポーラーは結果エンドポイントに触れない
        assert!(urls.iter().all(|url| !url.contains("/result")));
        assert!(urls
            .iter()
            .all(|url| url.ends_with("/api/v1/instances/inst-1")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_status_is_non_terminal() {
        // サーバー定義の未知のステータスでもループは継続する
        let transport = SequenceTransport::new(vec!["suspended", "finished"]);
        let client = client_with(transport.clone());
        let poller = InstancePoller::new(&client, Duration::from_millis(200));

        let status = poller.wait_for_completion("inst-1").await.unwrap();
        assert_eq!(status, InstanceStatus::Finished);
        assert_eq!(transport.urls.lock().unwrap().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_status_error_aborts_loop() {
        /// 1 回目は running、2 回目は 500 エラーを返すフェイク
        struct FailingTransport {
            calls: Mutex<u32>,
        }

        #[async_trait]
        impl Transport for FailingTransport {
            async fn send(
                &self,
                _request: TransportRequest,
            ) -> Result<TransportResponse, ClientError> {
                let mut calls = self.calls.lock().unwrap();
                *calls += 1;
                if *calls == 1 {
                    let envelope = json!({
                        "status": "success",
                        "data": { "workflowInstance": { "status": "running" } }
                    });
                    let mut headers = HashMap::new();
                    headers.insert(
                        "content-type".to_string(),
                        "application/json".to_string(),
                    );
                    Ok(TransportResponse {
                        status: 200,
                        headers,
                        body: serde_json::to_vec(&envelope).unwrap(),
                    })
                } else {
                    Ok(TransportResponse {
                        status: 500,
                        headers: HashMap::new(),
                        body: vec![],
                    })
                }
            }
        }

        let client = FlowifierClient::with_transport(
            "test-token",
            ClientOptions::with_app_url("http://127.0.0.1:8080"),
            Box::new(FailingTransport {
                calls: Mutex::new(0),
            }),
        );
        let poller = InstancePoller::new(&client, Duration::from_millis(100));

        // エラーはリトライされずそのまま伝播する
        match poller.wait_for_completion("inst-1").await {
            Err(ClientError::Transport { code }) => assert_eq!(code, 500),
            other => panic!("Expected Transport error, got {:?}", other),
        }
    }
}
