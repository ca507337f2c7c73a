use clap::Parser;
use modules_portfolio::app;
use modules_portfolio::utils::error::ErrorSeverity;
use modules_portfolio::utils::{logger, validation::Validate};
use modules_portfolio::{CliConfig, PortfolioError};

fn exit_code(e: &PortfolioError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: PortfolioError) -> ! {
    tracing::error!(
        "❌ Startup failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(exit_code(&e).max(1));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 設定檔讀取失敗時日誌尚未初始化，直接輸出到 stderr
    let config = match cli.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e).max(1));
        }
    };

    logger::init_logger(cli.verbose, config.log_level(), config.log_format());

    tracing::info!("Starting modules-portfolio");
    tracing::debug!("Effective config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(e);
    }

    // 資料庫無法開啟或 seed 失敗時不啟動 HTTP listener
    let service = match app::prepare_catalog(&config).await {
        Ok(service) => service,
        Err(e) => fail(e),
    };

    app::serve(&config, service).await
}
