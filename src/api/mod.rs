use axum::{
    Router,
    extract::{Json, Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

use crate::core::{
    DEFAULT_MONTHS, DEFAULT_SEED, HistoryConfig, HistoryInsights, MonthlyRecord, STARTING_BALANCE, ScenarioInput,
    ScenarioResult, SliderSpec, SpecialOutcome, SpecialSituation, compute_scenario, evaluate_special, generate,
    glossary, grade_quiz, insights, quiz_questions, sliders, tail_window,
};

const INDEX_HTML: &str = include_str!("../../web/index.html");
const STYLES_CSS: &str = include_str!("../../web/styles.css");
const APP_JS: &str = include_str!("../../web/app.js");

/// Service-wide settings, fixed at startup and shared with every handler.
#[derive(Debug, Clone, Copy)]
pub struct AppConfig {
    pub seed: u64,
    pub months: u32,
    pub starting_balance: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            months: DEFAULT_MONTHS,
            starting_balance: STARTING_BALANCE,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct HistoryQuery {
    months: Option<u32>,
    seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ForecastPayload {
    allowance: Option<i64>,
    birthday: Option<i64>,
    chores: Option<i64>,
    other_in: Option<i64>,
    toys: Option<i64>,
    snacks: Option<i64>,
    savings: Option<i64>,
    other_out: Option<i64>,
    starting_balance: Option<i64>,
    seed: Option<u64>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiScenarioKind {
    #[serde(alias = "birthdayWindfall", alias = "birthday_windfall")]
    BirthdayWindfall,
    #[serde(alias = "saveForToy", alias = "save_for_toy")]
    SaveForToy,
    #[serde(alias = "saveForBicycle", alias = "save_for_bicycle", alias = "save-for-bike")]
    SaveForBicycle,
    #[serde(alias = "buyVideoGame", alias = "buy_video_game")]
    BuyVideoGame,
}

impl From<ApiScenarioKind> for SpecialSituation {
    fn from(value: ApiScenarioKind) -> Self {
        match value {
            ApiScenarioKind::BirthdayWindfall => SpecialSituation::BirthdayWindfall,
            ApiScenarioKind::SaveForToy => SpecialSituation::SaveForToy,
            ApiScenarioKind::SaveForBicycle => SpecialSituation::SaveForBicycle,
            ApiScenarioKind::BuyVideoGame => SpecialSituation::BuyVideoGame,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ScenarioQuery {
    kind: ApiScenarioKind,
    #[serde(default)]
    allowance: Option<i64>,
    #[serde(default)]
    seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct QuizPayload {
    answers: Vec<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HistoryResponse {
    starting_balance: i64,
    records: Vec<MonthlyRecord>,
    insights: HistoryInsights,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ForecastResponse {
    starting_balance: i64,
    #[serde(flatten)]
    scenario: ScenarioResult,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScenarioResponse {
    starting_balance: i64,
    allowance: i64,
    #[serde(flatten)]
    outcome: SpecialOutcome,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn history_config(config: AppConfig, seed: Option<u64>) -> HistoryConfig {
    let mut history = HistoryConfig::new(config.months, seed.unwrap_or(config.seed));
    history.starting_balance = config.starting_balance;
    history
}

/// The forecaster starts from where the generated history leaves off.
fn last_generated_balance(config: AppConfig, seed: Option<u64>) -> i64 {
    generate(&history_config(config, seed))
        .last()
        .map_or(config.starting_balance, |record| record.balance)
}

fn slider_value(name: &str, spec: SliderSpec, value: Option<i64>) -> Result<i64, String> {
    let value = value.unwrap_or(spec.default);
    if spec.accepts(value) {
        Ok(value)
    } else {
        Err(format!(
            "{name} must be between {} and {} in steps of {}",
            spec.min, spec.max, spec.step
        ))
    }
}

fn build_scenario_input(payload: &ForecastPayload) -> Result<ScenarioInput, String> {
    Ok(ScenarioInput {
        allowance: slider_value("allowance", sliders::ALLOWANCE, payload.allowance)?,
        birthday: slider_value("birthday", sliders::BIRTHDAY, payload.birthday)?,
        chores: slider_value("chores", sliders::CHORES, payload.chores)?,
        other_in: slider_value("otherIn", sliders::OTHER_IN, payload.other_in)?,
        toys: slider_value("toys", sliders::TOYS, payload.toys)?,
        snacks: slider_value("snacks", sliders::SNACKS, payload.snacks)?,
        savings: slider_value("savings", sliders::SAVINGS, payload.savings)?,
        other_out: slider_value("otherOut", sliders::OTHER_OUT, payload.other_out)?,
    })
}

fn build_history_response(config: AppConfig, query: &HistoryQuery) -> HistoryResponse {
    let records = generate(&history_config(config, query.seed));
    let window = tail_window(&records, query.months.unwrap_or(config.months));
    HistoryResponse {
        starting_balance: config.starting_balance,
        insights: insights(window),
        records: window.to_vec(),
    }
}

fn build_forecast_response(config: AppConfig, payload: &ForecastPayload) -> Result<ForecastResponse, String> {
    let input = build_scenario_input(payload)?;
    let starting_balance = match payload.starting_balance {
        Some(balance) => balance,
        None => last_generated_balance(config, payload.seed),
    };
    Ok(ForecastResponse {
        starting_balance,
        scenario: compute_scenario(&input, starting_balance),
    })
}

fn build_scenario_response(config: AppConfig, query: &ScenarioQuery) -> Result<ScenarioResponse, String> {
    let allowance = slider_value("allowance", sliders::ALLOWANCE, query.allowance)?;
    let starting_balance = last_generated_balance(config, query.seed);
    let outcome =
        evaluate_special(query.kind.into(), starting_balance, allowance).map_err(|err| err.to_string())?;
    Ok(ScenarioResponse {
        starting_balance,
        allowance,
        outcome,
    })
}

pub async fn run_http_server(port: u16, config: AppConfig) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/styles.css", get(styles_handler))
        .route("/app.js", get(app_js_handler))
        .route("/api/history", get(history_handler))
        .route(
            "/api/forecast",
            get(forecast_get_handler).post(forecast_post_handler),
        )
        .route("/api/scenario", get(scenario_handler))
        .route("/api/learning/glossary", get(glossary_handler))
        .route(
            "/api/learning/quiz",
            get(quiz_questions_handler).post(quiz_grade_handler),
        )
        .fallback(not_found_handler)
        .with_state(config);

    let listener = TcpListener::bind(addr).await?;
    info!("cash flow dashboard listening on http://{addr}");
    info!("local access: http://127.0.0.1:{port}/");

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

async fn history_handler(State(config): State<AppConfig>, Query(query): Query<HistoryQuery>) -> Response {
    json_response(StatusCode::OK, build_history_response(config, &query))
}

async fn forecast_get_handler(
    State(config): State<AppConfig>,
    Query(payload): Query<ForecastPayload>,
) -> Response {
    forecast_handler_impl(config, payload)
}

async fn forecast_post_handler(
    State(config): State<AppConfig>,
    Json(payload): Json<ForecastPayload>,
) -> Response {
    forecast_handler_impl(config, payload)
}

fn forecast_handler_impl(config: AppConfig, payload: ForecastPayload) -> Response {
    match build_forecast_response(config, &payload) {
        Ok(response) => json_response(StatusCode::OK, response),
        Err(msg) => error_response(StatusCode::BAD_REQUEST, &msg),
    }
}

async fn scenario_handler(State(config): State<AppConfig>, Query(query): Query<ScenarioQuery>) -> Response {
    match build_scenario_response(config, &query) {
        Ok(response) => json_response(StatusCode::OK, response),
        Err(msg) => error_response(StatusCode::BAD_REQUEST, &msg),
    }
}

async fn glossary_handler() -> Response {
    json_response(StatusCode::OK, glossary())
}

async fn quiz_questions_handler() -> Response {
    json_response(StatusCode::OK, quiz_questions())
}

async fn quiz_grade_handler(Json(payload): Json<QuizPayload>) -> Response {
    json_response(StatusCode::OK, grade_quiz(&payload.answers))
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
