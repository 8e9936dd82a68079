use axum::{
    extract::State,
    http::{HeaderValue, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::{debug, info};

use crate::api::{
    CompetitorRequest, ContentScoreRequest, EngagementRequest, MultilingualRequest,
    RewriteRequest, SentimentRequest, StatusResponse, StoredPostResponse,
};
use crate::catalog::{
    analyze_competitors, detect_trends, extract_insights, generate_multilingual, sample_posts,
    segment_audience, AudienceReport, CompetitorReport, MultilingualReport, PostingInsights,
    TrendReport,
};
use crate::config::{AppConfig, CorsConfig};
use crate::error::AppError;
use crate::random::request_rng;
use crate::scoring::{
    analyze_sentiment, predict_engagement, rewrite_caption, score_content, CaptionRewrite,
    ContentScore, EngagementPrediction, SentimentReport,
};
use crate::store::PostStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PostStore>,
    pub seed: Option<u64>,
}

impl AppState {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            store: Arc::new(PostStore::new()),
            seed,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/posts", get(list_posts).post(create_post))
        .route("/schedule", get(list_schedule).post(schedule_post))
        .route("/insights", get(insights))
        .route("/ai/predict-engagement", post(predict_engagement_handler))
        .route("/ai/score-content", post(score_content_handler))
        .route("/ai/trends", get(trends_handler))
        .route("/ai/audience-segments", get(audience_handler))
        .route("/ai/analyze-sentiment", post(sentiment_handler))
        .route("/ai/sentiment-demo", get(sentiment_demo_handler))
        .route("/ai/competitors", post(competitors_handler))
        .route("/ai/competitors-demo", get(competitors_demo_handler))
        .route("/ai/rewrite-caption", post(rewrite_handler))
        .route("/ai/translate", post(translate_handler))
        .with_state(state)
}

pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer, AppError> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|err| {
                AppError::Config(format!("invalid CORS origin '{}': {}", origin, err))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    // Credentials forbid wildcard methods/headers, so mirror the request.
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

pub async fn serve(config: AppConfig) -> Result<(), AppError> {
    let state = AppState::new(config.engine.seed);
    let app = router(state).layer(cors_layer(&config.cors)?);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        %addr,
        seeded = config.engine.seed.is_some(),
        "social pulse listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

async fn root() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "Backend running",
    })
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn list_posts(State(state): State<AppState>) -> Json<Vec<Value>> {
    Json(state.store.list_posts().await)
}

async fn create_post(
    State(state): State<AppState>,
    Json(post): Json<Value>,
) -> Result<Json<StoredPostResponse>, AppError> {
    ensure_object(&post)?;
    let data = state.store.create_post(post).await;
    Ok(Json(StoredPostResponse {
        message: "Post created",
        data,
    }))
}

async fn list_schedule(State(state): State<AppState>) -> Json<Vec<Value>> {
    Json(state.store.list_scheduled().await)
}

async fn schedule_post(
    State(state): State<AppState>,
    Json(post): Json<Value>,
) -> Result<Json<StoredPostResponse>, AppError> {
    ensure_object(&post)?;
    let data = state.store.schedule(post).await;
    let queued = state.store.scheduled_count().await;
    debug!(queued, "post scheduled");
    Ok(Json(StoredPostResponse {
        message: "Post scheduled",
        data,
    }))
}

async fn insights() -> Result<Json<PostingInsights>, AppError> {
    extract_insights(&sample_posts())
        .map(Json)
        .ok_or_else(|| AppError::InvalidInput("no posting history to analyse".to_string()))
}

async fn predict_engagement_handler(
    State(state): State<AppState>,
    Json(request): Json<EngagementRequest>,
) -> Result<Json<EngagementPrediction>, AppError> {
    let input = request.into_input()?;
    let mut rng = request_rng(state.seed);
    let prediction = predict_engagement(&input, &mut rng);
    debug!(
        platform = input.platform.label(),
        content_type = input.content_type.label(),
        score = prediction.engagement_score,
        "engagement predicted"
    );
    Ok(Json(prediction))
}

async fn score_content_handler(Json(request): Json<ContentScoreRequest>) -> Json<ContentScore> {
    let platform = request.platform();
    let score = score_content(&request.content, platform);
    debug!(
        platform = platform.label(),
        overall = score.overall_score,
        grade = score.grade.label(),
        "content scored"
    );
    Json(score)
}

async fn trends_handler() -> Json<TrendReport> {
    Json(detect_trends(Utc::now()))
}

async fn audience_handler(State(state): State<AppState>) -> Json<AudienceReport> {
    let mut rng = request_rng(state.seed);
    Json(segment_audience(&mut rng))
}

async fn sentiment_handler(
    State(state): State<AppState>,
    Json(request): Json<SentimentRequest>,
) -> Json<SentimentReport> {
    Json(run_sentiment(&state, &request.comments))
}

async fn sentiment_demo_handler(State(state): State<AppState>) -> Json<SentimentReport> {
    Json(run_sentiment(&state, &[]))
}

fn run_sentiment(state: &AppState, comments: &[String]) -> SentimentReport {
    let mut rng = request_rng(state.seed);
    let report = analyze_sentiment(comments, &mut rng);
    debug!(
        comments = report.analyzed_comments.len(),
        overall = report.overall_sentiment.label(),
        score = report.sentiment_score,
        "sentiment analysed"
    );
    report
}

async fn competitors_handler(Json(request): Json<CompetitorRequest>) -> Json<CompetitorReport> {
    Json(analyze_competitors(request.handles.as_deref()))
}

async fn competitors_demo_handler() -> Json<CompetitorReport> {
    Json(analyze_competitors(None))
}

async fn rewrite_handler(
    State(state): State<AppState>,
    Json(request): Json<RewriteRequest>,
) -> Json<CaptionRewrite> {
    let style = request.style();
    let mut rng = request_rng(state.seed);
    let rewrite = rewrite_caption(&request.content, style, request.platform(), &mut rng);
    debug!(
        style = style.label(),
        top = rewrite.variations.first().map(|v| v.predicted_engagement),
        "caption rewritten"
    );
    Json(rewrite)
}

async fn translate_handler(Json(request): Json<MultilingualRequest>) -> Json<MultilingualReport> {
    Json(generate_multilingual(
        &request.content,
        request.languages.as_deref(),
    ))
}

fn ensure_object(post: &Value) -> Result<(), AppError> {
    if post.is_object() {
        Ok(())
    } else {
        Err(AppError::InvalidInput("post body must be a JSON object".to_string()))
    }
}
