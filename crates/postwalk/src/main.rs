use std::{process::ExitCode, sync::Arc};

use postwalk_core::{api::ApiClient, config::Config};

#[tokio::main]
async fn main() -> ExitCode {
    postwalk_core::logging::init("postwalk");

    let cfg = match Config::load() {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            // No credentials yet, so no alert channel either.
            tracing::error!(error = %e, "startup failed");
            return ExitCode::FAILURE;
        }
    };

    let api = ApiClient::new(cfg.api_url.clone(), cfg.api_token.clone());

    if let Err(e) = postwalk_telegram::router::run_polling(cfg.clone(), api).await {
        tracing::error!(error = %e, "bot failed");
        postwalk_telegram::send_startup_alert(&cfg, &format!("postwalk failed: {e}")).await;
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
