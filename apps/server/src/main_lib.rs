use std::sync::Arc;

use crate::config::Config;
use compound_core::{FieldConstraints, InvestmentService, InvestmentServiceTrait};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub investment_service: Arc<dyn InvestmentServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("CALC_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let investment_service = Arc::new(InvestmentService::new(
        FieldConstraints::default(),
        config.annual_rate_percent,
    ));
    tracing::info!(
        "Calculator ready, default annual rate {}%",
        investment_service.default_annual_rate()
    );

    Ok(Arc::new(AppState { investment_service }))
}
