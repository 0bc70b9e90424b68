//! Flowifier デモ CLI
//!
//! # 責務
//!
//! クライアントライブラリの利用例を示すデモプログラム。
//! ワークフローの一覧表示・個別表示・実行（完了までのポーリングと結果表示）を
//! サブコマンドとして提供します。
//!
//! アクセストークンは環境変数 `ACCESS_TOKEN` から取得します。
//! ベース URL とポーリング間隔は、コマンドラインフラグ > TOML 設定ファイル >
//! デフォルト の優先順位で解決されます。

use std::env;
use std::path::{Path, PathBuf};
use std::process;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use tracing_appender::non_blocking::WorkerGuard;

use flowifier_client::client::{FlowifierClient, InstanceStatus, TriggerContext};
use flowifier_client::config::{CliConfig, ClientOptions};
use flowifier_client::poller::InstancePoller;

/// アクセストークンを保持する環境変数名
const ACCESS_TOKEN_ENV: &str = "ACCESS_TOKEN";

/// Flowifier API デモクライアント
#[derive(Debug, Parser)]
#[command(name = "flowifier-client", version, about = "Flowifier API デモクライアント")]
struct Cli {
    /// TOML 設定ファイルのパス
    #[arg(long)]
    config: Option<PathBuf>,

    /// ベース URL の上書き（設定ファイルより優先）
    #[arg(long)]
    app_url: Option<String>,

    /// JSON 形式のログを出力するファイル
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// デバッグログを有効化
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// ワークフローの一覧を表示
    List,

    /// ワークフローを 1 件表示
    Get {
        /// ワークフロー識別子
        workflow_id: String,
    },

    /// ワークフローを実行し、完了までポーリングして結果を表示
    Run {
        /// ワークフロー識別子
        workflow_id: String,

        /// トリガー変数（key=value 形式、複数指定可）
        #[arg(long = "var", value_parser = parse_var)]
        vars: Vec<(String, String)>,

        /// ポーリング間隔（ミリ秒、設定ファイルより優先）
        #[arg(long)]
        interval_ms: Option<u64>,
    },
}

/// `key=value` 形式の引数をパース
fn parse_var(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("'{}' は key=value 形式で指定してください", s)),
    }
}

/// ロギングの初期化
///
/// ログファイルが指定された場合は JSON 形式でファイルへ、
/// それ以外は標準出力へテキスト形式で出力します。
/// 返り値のガードは main の終了までドロップしてはいけません
/// （ドロップ時点でバッファがフラッシュされます）。
fn init_logging(
    verbose: bool,
    log_file: Option<&Path>,
) -> Result<Option<WorkerGuard>, Box<dyn std::error::Error>> {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path.file_name().ok_or("ログファイル名が不正です")?;
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .json()
                .with_writer(writer)
                .with_max_level(level)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt().with_max_level(level).init();
            Ok(None)
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    let Ok(access_token) = env::var(ACCESS_TOKEN_ENV) else {
        eprintln!("環境変数 {} が設定されていません", ACCESS_TOKEN_ENV);
        process::exit(1);
    };

    let file_config = match &cli.config {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    // 優先順位: コマンドラインフラグ > 設定ファイル > デフォルト
    let options = match cli.app_url.as_deref().or(file_config.app_url()) {
        Some(app_url) => ClientOptions::with_app_url(app_url),
        None => ClientOptions::default(),
    };

    let client = FlowifierClient::with_options(access_token, options)?;

    match cli.command {
        Commands::List => {
            for workflow in client.list_workflows().await? {
                println!("{}: {}", workflow.id, workflow.name);
            }
        }
        Commands::Get { workflow_id } => {
            let workflow = client.get_workflow(&workflow_id).await?;
            println!("{}: {}", workflow.id, workflow.name);
        }
        Commands::Run {
            workflow_id,
            vars,
            interval_ms,
        } => {
            let interval = interval_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| file_config.poll_interval());
            run_workflow(&client, &workflow_id, vars, interval).await?;
        }
    }

    Ok(())
}

/// 実行 → 完了までポーリング → 結果表示
async fn run_workflow(
    client: &FlowifierClient,
    workflow_id: &str,
    vars: Vec<(String, String)>,
    interval: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut trigger = TriggerContext::new();
    for (name, value) in vars {
        trigger.insert(name, serde_json::Value::String(value));
    }

    let begin = Instant::now();

    let instance = client.execute_workflow(workflow_id, &trigger).await?;
    println!("新しいワークフローインスタンス: {}", instance.id);

    let poller = InstancePoller::new(client, interval);
    let status = poller.wait_for_completion(&instance.id).await?;
    println!(
        "実行ステータス: {} [{:.1} 秒]",
        status,
        begin.elapsed().as_secs_f64()
    );

    // failed は結果を持たないため、finished の場合のみ取得する
    if status == InstanceStatus::Finished {
        let result = client.get_instance_result(&instance.id).await?;
        println!("実行結果:\n{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(())
}
