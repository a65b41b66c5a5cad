use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use replyguy::config::AppConfig;
use replyguy::{FilterCriteria, ReplyRequest};

use crate::agent::{ReplyGeneratorAgent, TweetFinderAgent};
use crate::api::{
    ReplyGenerateRequest, ReplyGenerateResponse, TweetSearchRequest, TweetSearchResponse,
};
use crate::llm::LlmClient;

#[derive(Clone)]
struct AppState {
    finder: TweetFinderAgent,
    replies: ReplyGeneratorAgent,
}

pub async fn serve(args: crate::ServeArgs, config: AppConfig) -> Result<(), String> {
    let llm = LlmClient::from_env(None).ok_or_else(|| "OPENAI_API_KEY is not set".to_string())?;
    let state = AppState {
        finder: TweetFinderAgent::new(llm.clone(), config.clone()),
        replies: ReplyGeneratorAgent::new(llm, config),
    };

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/tweets/search", post(search_tweets))
        .route("/api/tweets/test", get(test_tweets))
        .route("/api/replies/generate", post(generate_replies))
        .route("/api/replies/test/:tweet_id", get(test_replies))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;
    info!(%addr, "listening");

    axum::serve(
        tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|err| format!("failed to bind server: {}", err))?,
        app,
    )
    .await
    .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn search_tweets(
    State(state): State<AppState>,
    Json(request): Json<TweetSearchRequest>,
) -> Result<Json<TweetSearchResponse>, (StatusCode, String)> {
    let criteria = request
        .into_criteria()
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;
    let tweets = state.finder.find_tweets(&criteria).await.map_err(|err| {
        warn!(error = %err, "tweet search failed");
        (StatusCode::BAD_GATEWAY, err)
    })?;
    Ok(Json(TweetSearchResponse { tweets }))
}

async fn test_tweets(
    State(state): State<AppState>,
) -> Result<Json<TweetSearchResponse>, (StatusCode, String)> {
    let criteria = FilterCriteria {
        topics: vec!["AI".to_string(), "technology".to_string()],
        exclude_replies: true,
        ..FilterCriteria::default()
    };
    let tweets = state.finder.find_tweets(&criteria).await.map_err(|err| {
        warn!(error = %err, "test tweet search failed");
        (StatusCode::BAD_GATEWAY, err)
    })?;
    Ok(Json(TweetSearchResponse { tweets }))
}

async fn generate_replies(
    State(state): State<AppState>,
    Json(request): Json<ReplyGenerateRequest>,
) -> Result<Json<ReplyGenerateResponse>, (StatusCode, String)> {
    let request = request
        .into_request()
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;
    let replies = state
        .replies
        .generate_replies(&request)
        .await
        .map_err(|err| {
            warn!(error = %err, "reply generation failed");
            (StatusCode::BAD_GATEWAY, err)
        })?;
    Ok(Json(ReplyGenerateResponse {
        replies,
        tweet_id: request.tweet_id,
    }))
}

async fn test_replies(
    State(state): State<AppState>,
    Path(tweet_id): Path<String>,
) -> Result<Json<ReplyGenerateResponse>, (StatusCode, String)> {
    let request = ReplyRequest {
        tweet_id,
        tweet_content: "This is a test tweet about AI and technology. What do you think about \
                        the future of machine learning?"
            .to_string(),
        tweet_author: "tech_user".to_string(),
        custom_instructions: None,
        num_replies: 3,
    };
    let replies = state
        .replies
        .generate_replies(&request)
        .await
        .map_err(|err| {
            warn!(error = %err, "test reply generation failed");
            (StatusCode::BAD_GATEWAY, err)
        })?;
    Ok(Json(ReplyGenerateResponse {
        replies,
        tweet_id: request.tweet_id,
    }))
}
