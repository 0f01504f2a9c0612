use anyhow::Context;
use clap::Parser;
use medic_assist::utils::{logger, validation::Validate};
use medic_assist::{web, AppConfig, AppState, CliArgs, TomlConfig};
use tokio::net::TcpListener;

fn load_config(args: &CliArgs) -> medic_assist::Result<AppConfig> {
    let file_config = args.config.as_deref().map(TomlConfig::from_file).transpose()?;

    // CLI > 設定檔 > 環境變數
    let config = AppConfig::from_lookup(|key| {
        args.lookup(key)
            .or_else(|| file_config.as_ref().and_then(|c| c.lookup(key)))
            .or_else(|| std::env::var(key).ok())
    })?;
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = CliArgs::parse();

    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_server_logger(args.verbose);
    }

    tracing::info!("Starting medic-assist");

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e);
            // 1: 配置錯誤, 2: 其他啟動錯誤 (例如設定檔無法讀取)
            let exit_code = if e.is_config_error() { 1 } else { 2 };
            std::process::exit(exit_code);
        }
    };
    tracing::debug!("Config: {:?}", config);

    let state = AppState::from_config(&config);
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(
        backend = %config.backend,
        model = %config.model,
        "listening on http://{}",
        addr
    );
    web::serve(listener, state).await?;
    Ok(())
}
