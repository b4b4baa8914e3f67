use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::core::{
    PlanSummary, StrategyName, StrategyTier, Tariff, plan, strategies, tariffs_for, tier,
};

const INDEX_HTML: &str = include_str!("../../web/index.html");
const STYLES_CSS: &str = include_str!("../../web/styles.css");
const APP_JS: &str = include_str!("../../web/app.js");

/// Initial UI state of the calculator: FOUNDATION preselected, 20 years.
const DEFAULT_STRATEGY: StrategyName = StrategyName::Foundation;
const DEFAULT_YEARS: u32 = 20;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliStrategy {
    Start,
    Balance,
    Foundation,
    Optimal,
    Prestige,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
enum ApiStrategy {
    #[serde(alias = "start", alias = "Start")]
    Start,
    #[serde(alias = "balance", alias = "Balance")]
    Balance,
    #[serde(alias = "foundation", alias = "Foundation")]
    Foundation,
    #[serde(alias = "optimal", alias = "Optimal")]
    Optimal,
    #[serde(alias = "prestige", alias = "Prestige")]
    Prestige,
}

impl From<CliStrategy> for ApiStrategy {
    fn from(value: CliStrategy) -> Self {
        match value {
            CliStrategy::Start => ApiStrategy::Start,
            CliStrategy::Balance => ApiStrategy::Balance,
            CliStrategy::Foundation => ApiStrategy::Foundation,
            CliStrategy::Optimal => ApiStrategy::Optimal,
            CliStrategy::Prestige => ApiStrategy::Prestige,
        }
    }
}

impl From<ApiStrategy> for StrategyName {
    fn from(value: ApiStrategy) -> Self {
        match value {
            ApiStrategy::Start => StrategyName::Start,
            ApiStrategy::Balance => StrategyName::Balance,
            ApiStrategy::Foundation => StrategyName::Foundation,
            ApiStrategy::Optimal => StrategyName::Optimal,
            ApiStrategy::Prestige => StrategyName::Prestige,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PlanPayload {
    strategy: Option<ApiStrategy>,
    amount: Option<f64>,
    purchase: Option<f64>,
    years: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TariffsQuery {
    strategy: Option<ApiStrategy>,
}

#[derive(Debug, Clone, Copy)]
struct PlanRequest {
    strategy: StrategyName,
    amount: f64,
    purchase: f64,
    years: u32,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StrategiesResponse {
    strategies: &'static [StrategyTier],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TariffsResponse {
    strategy: StrategyName,
    tariffs: &'static [Tariff],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanResponse<'a> {
    tier: &'static StrategyTier,
    years_display: String,
    #[serde(flatten)]
    summary: &'a PlanSummary,
}

/// Slider midpoint the UI jumps to when a strategy is selected.
fn midpoint(lo: f64, hi: f64) -> f64 {
    ((lo + hi) / 2.0).ceil()
}

/// Fills in the UI defaults for any input the caller left out: the tier's
/// amount and purchase midpoints, and a horizon of 20 years raised to the
/// tier's minimum where needed.
fn resolve_plan_request(payload: PlanPayload) -> PlanRequest {
    let strategy = payload.strategy.map_or(DEFAULT_STRATEGY, StrategyName::from);
    let tier = tier(strategy);
    let amount = payload
        .amount
        .unwrap_or_else(|| midpoint(tier.min_value, tier.max_value));
    let purchase = payload
        .purchase
        .unwrap_or_else(|| midpoint(tier.min_purchase, tier.max_purchase));
    let years = payload.years.unwrap_or(DEFAULT_YEARS).max(tier.min_years);
    PlanRequest {
        strategy,
        amount,
        purchase,
        years,
    }
}

/// The horizon label the UI shows: capped horizons read "30+".
fn years_display(years: u32) -> String {
    if years >= 30 {
        "30+".to_string()
    } else {
        years.to_string()
    }
}

/// Locale-free EUR display format: thousands separated by spaces, no
/// decimals, e.g. `3 220 000 €`.
pub fn format_eur(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{grouped} €")
    } else {
        format!("{grouped} €")
    }
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/styles.css", get(styles_handler))
        .route("/app.js", get(app_js_handler))
        .route("/api/strategies", get(strategies_handler))
        .route("/api/tariffs", get(tariffs_handler))
        .route("/api/plan", get(plan_get_handler).post(plan_post_handler))
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("strategy calculator listening on http://{addr}");
    tracing::info!("local access: http://127.0.0.1:{port}/");

    axum::serve(listener, app).await
}

async fn index_handler() -> impl IntoResponse {
    with_cache_control(Html(INDEX_HTML))
}

async fn styles_handler() -> impl IntoResponse {
    with_cache_control((
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLES_CSS,
    ))
}

async fn app_js_handler() -> impl IntoResponse {
    with_cache_control((
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        APP_JS,
    ))
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn strategies_handler() -> Response {
    json_response(
        StatusCode::OK,
        StrategiesResponse {
            strategies: strategies(),
        },
    )
}

async fn tariffs_handler(Query(query): Query<TariffsQuery>) -> Response {
    let Some(strategy) = query.strategy else {
        return error_response(StatusCode::BAD_REQUEST, "missing strategy parameter");
    };
    let strategy = StrategyName::from(strategy);
    json_response(
        StatusCode::OK,
        TariffsResponse {
            strategy,
            tariffs: tariffs_for(strategy),
        },
    )
}

async fn plan_get_handler(Query(payload): Query<PlanPayload>) -> Response {
    plan_handler_impl(payload).await
}

async fn plan_post_handler(Json(payload): Json<PlanPayload>) -> Response {
    plan_handler_impl(payload).await
}

async fn plan_handler_impl(payload: PlanPayload) -> Response {
    let request = resolve_plan_request(payload);
    let summary = match plan(
        request.strategy,
        request.amount,
        request.purchase,
        request.years,
    ) {
        Ok(summary) => summary,
        // `plan` reports a missing tariff as `None`, so the only failures
        // left here are invalid arguments.
        Err(err) => {
            tracing::warn!("rejected plan request: {err}");
            return error_response(StatusCode::BAD_REQUEST, &err.to_string());
        }
    };

    let response = PlanResponse {
        tier: tier(request.strategy),
        years_display: years_display(request.years),
        summary: &summary,
    };
    json_response(StatusCode::OK, response)
}

#[derive(Parser, Debug)]
#[command(
    name = "ffcalc",
    about = "Fifty/Fifty strategy calculator (metal allocation, AGIO fees, tariff lookup)"
)]
pub struct Cli {
    #[arg(long, value_enum, default_value_t = CliStrategy::Foundation)]
    strategy: CliStrategy,
    #[arg(long, help = "Allocation amount in EUR; defaults to the tier midpoint")]
    amount: Option<f64>,
    #[arg(long, help = "Weekly purchase in EUR; defaults to the tier midpoint")]
    purchase: Option<f64>,
    #[arg(
        long,
        help = "Build-up horizon in years; raised to the tier minimum, capped at 30 in the projection"
    )]
    years: Option<u32>,
}

pub fn run_cli(cli: Cli) -> Result<(), String> {
    let request = resolve_plan_request(PlanPayload {
        strategy: Some(cli.strategy.into()),
        amount: cli.amount,
        purchase: cli.purchase,
        years: cli.years,
    });
    let summary = plan(
        request.strategy,
        request.amount,
        request.purchase,
        request.years,
    )
    .map_err(|e| e.to_string())?;
    print!("{}", render_report(&summary));
    Ok(())
}

fn render_report(summary: &PlanSummary) -> String {
    use std::fmt::Write;

    let tier = tier(summary.strategy);
    let mut out = String::new();
    let _ = writeln!(out, "Strategy {}", summary.strategy);
    let _ = writeln!(out, "  {}", tier.description);
    let _ = writeln!(out);
    let _ = writeln!(out, "Allocation amount: {}", format_eur(summary.amount));
    let _ = writeln!(out, "Metal allocation:");
    for metal in &summary.metals {
        let _ = writeln!(
            out,
            "  {:<18} {:>5.1}%  {}",
            metal.label,
            metal.percent,
            format_eur(metal.amount)
        );
    }
    let _ = writeln!(out, "Component structure:");
    for component in &summary.components {
        let _ = writeln!(
            out,
            "  {:<18} {:>5.1}%  {}",
            component.label,
            component.percent,
            format_eur(component.amount)
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Initial AGIO:   {:.2}% ({})",
        summary.fee.initial_percent,
        format_eur(summary.fee.initial_fee)
    );
    let _ = writeln!(
        out,
        "Effective AGIO: {:.2}% ({})",
        summary.fee.effective_percent,
        format_eur(summary.fee.effective_fee)
    );
    if summary.fee.bonus > 0.0 {
        let _ = writeln!(
            out,
            "Bonus: {} refunded as additional metal",
            format_eur(summary.fee.bonus)
        );
    }
    let _ = writeln!(
        out,
        "Activation total: {}",
        format_eur(summary.activation_total)
    );
    let _ = writeln!(out);
    match summary.tariff {
        Some(tariff) => {
            let _ = writeln!(out, "Recommended deposit: {}", tariff.name);
            let _ = writeln!(out, "  AGIO:    {}", tariff.agio);
            let _ = writeln!(out, "  Storage: {}", tariff.storage);
        }
        None => {
            let _ = writeln!(out, "Recommended deposit: no matching plan");
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Weekly purchase: {} ({}/year)",
        format_eur(summary.purchase),
        format_eur(summary.annual_purchase)
    );
    let _ = writeln!(
        out,
        "Estimated total after {} years: {}",
        years_display(summary.years),
        format_eur(summary.projected_total)
    );
    out
}
