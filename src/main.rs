mod config;
mod error;
mod models;
mod services;
mod utils;

use axum::{
    Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::{Html, Json},
    routing::{get, post},
};
use config::AppConfig;
use error::GenerateError;
use models::{GenerationInput, GenerationReport, GeneratorKind, InfoType};
use serde_json::json;
use services::catalog::{self, NAVER_PROFIT_STRUCTURES};
use services::facts::DuckDuckGoSearch;
use services::images::{PhotoProvider, UnsplashClient};
use services::llm::GeminiClient;
use services::pipeline::Pipeline;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Clone)]
struct AppState {
    pipeline: Arc<Pipeline>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Missing generation credentials stop the service here
    let config = AppConfig::from_env()?;

    let llm = Arc::new(GeminiClient::new(&config));
    let search = Arc::new(DuckDuckGoSearch::new(config.search_region.as_str()));
    let photos = config
        .unsplash_access_key
        .as_deref()
        .map(|key| Arc::new(UnsplashClient::new(key)) as Arc<dyn PhotoProvider>);
    if photos.is_none() {
        tracing::warn!("UNSPLASH_ACCESS_KEY is not set; posts will be generated without images");
    }

    let pipeline = Pipeline::new(llm, search, photos)
        .with_limits(config.image_count, config.search_max_results);

    let app_state = AppState {
        pipeline: Arc::new(pipeline),
    };

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(model = %config.gemini_model, "Listening on {}", listener.local_addr()?);
    axum::serve(listener, router(app_state)).await?;

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/api/catalog", get(catalog_listing))
        .route("/api/generate/:kind", post(generate))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::AllowMethods::any())
                .allow_headers(tower_http::cors::AllowHeaders::any()),
        )
}

async fn index() -> Html<String> {
    let html_content = r#"
    <!DOCTYPE html>
    <html>
    <head>
        <title>GHOST HUB</title>
        <meta charset="utf-8">
        <style>
            body { font-family: Arial, sans-serif; margin: 40px; }
            .info-box { background-color: #f0f8ff; padding: 20px; border-radius: 8px; margin: 20px 0; }
            .endpoint { background-color: #f5f5f5; padding: 10px; margin: 10px 0; border-radius: 4px; font-family: monospace; }
        </style>
    </head>
    <body>
        <h1>GHOST HUB</h1>

        <div class="info-box">
            <h2>Service Information</h2>
            <p>Generates blog posts for Naver and Tistory from a keyword, with styled headings, call-to-action blocks and affiliate disclosures.</p>
        </div>

        <h2>Available Endpoints:</h2>
        <div class="endpoint">GET / - This information page</div>
        <div class="endpoint">GET /health - Health check</div>
        <div class="endpoint">GET /api/catalog - Personas, structures and info types</div>
        <div class="endpoint">POST /api/generate/naver-profit - keyword, product, url</div>
        <div class="endpoint">POST /api/generate/naver-info - keyword</div>
        <div class="endpoint">POST /api/generate/tistory-info - keyword</div>
        <div class="endpoint">POST /api/generate/tistory-profit - keyword, product, url, banner (optional)</div>

        <h2>How to Use:</h2>
        <p>Send a JSON body such as {"keyword": "무선 청소기", "product": "다이슨 V15", "url": "https://..."}.
        The response carries the HTML document, a plain-text preview and, for Naver posts, a clipboard-ready copy.</p>
    </body>
    </html>
    "#.to_string();

    Html(html_content)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn catalog_listing() -> Json<serde_json::Value> {
    let personas: serde_json::Map<String, serde_json::Value> = GeneratorKind::ALL
        .iter()
        .map(|kind| (kind.slug().to_string(), json!(catalog::personas(*kind))))
        .collect();
    let info_types: Vec<_> = InfoType::ALL
        .iter()
        .map(|t| json!({ "name": t.label(), "instruction": t.instruction() }))
        .collect();

    Json(json!({
        "personas": personas,
        "structures": &NAVER_PROFIT_STRUCTURES,
        "info_types": info_types,
    }))
}

async fn generate(
    State(state): State<AppState>,
    kind: Result<Path<GeneratorKind>, PathRejection>,
    input: Result<Json<GenerationInput>, JsonRejection>,
) -> Result<Json<GenerationReport>, GenerateError> {
    let Path(kind) = kind?;
    let Json(input) = input?;
    let mut rng = fastrand::Rng::new();
    let report = state.pipeline.run(kind, &input, &mut rng).await?;
    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SearchSnippet;
    use crate::services::facts::fakes::FakeSearch;
    use crate::services::llm::fakes::FakeLlm;
    use axum::body::{Body, to_bytes};
    use http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app(reply: FakeLlm) -> Router {
        let search = FakeSearch::with_news(vec![SearchSnippet {
            title: "뉴스".into(),
            body: "요약".into(),
        }]);
        let pipeline = Pipeline::new(Arc::new(reply), Arc::new(search), None);
        router(AppState {
            pipeline: Arc::new(pipeline),
        })
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_is_ok() {
        let response = app(FakeLlm::replying("{}"))
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn generate_returns_ready_post() {
        let reply = r##"{"title": "무선 청소기 이거 모르면 손해", "content": "[H3]시작[/H3]본문 [[CTA_1]] 끝 [[CTA_2]]", "hashtags": "#청소기"}"##;
        let response = app(FakeLlm::replying(reply))
            .oneshot(post_json(
                "/api/generate/naver-profit",
                json!({"keyword": "무선 청소기", "product": "다이슨 V15", "url": "https://coupang.com/x"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "ready");
        assert_eq!(body["kind"], "naver-profit");
        assert_eq!(body["layout"]["type"], "structure");
        assert_eq!(body["title"], "무선 청소기 이거 모르면 손해");
        assert!(body["html"].as_str().unwrap().contains("쿠팡 파트너스"));
        assert!(body["clipboard_html"].is_string());
        assert!(body["notices"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_input_is_bad_request() {
        let response = app(FakeLlm::replying("{}"))
            .oneshot(post_json(
                "/api/generate/tistory-profit",
                json!({"keyword": "아이패드"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
    }

    #[tokio::test]
    async fn unrecognized_reply_is_bad_gateway() {
        let response = app(FakeLlm::replying("형식을 지킬 수 없습니다"))
            .oneshot(post_json("/api/generate/naver-info", json!({"keyword": "건강보험"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("format not recognized"));
    }

    #[tokio::test]
    async fn unknown_generator_is_rejected() {
        let response = app(FakeLlm::replying("{}"))
            .oneshot(post_json("/api/generate/wordpress", json!({"keyword": "k"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
        assert!(body["error"].as_str().unwrap().contains("wordpress"));
    }

    #[tokio::test]
    async fn missing_keyword_is_bad_request() {
        let response = app(FakeLlm::replying("{}"))
            .oneshot(post_json("/api/generate/naver-info", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
        assert!(body["error"].as_str().unwrap().contains("키워드"));
    }

    #[tokio::test]
    async fn unreadable_body_is_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/generate/naver-info")
            .header("content-type", "application/json")
            .body(Body::from("{\"keyword\": "))
            .unwrap();
        let response = app(FakeLlm::replying("{}")).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
    }

    #[tokio::test]
    async fn catalog_lists_every_generator() {
        let response = app(FakeLlm::replying("{}"))
            .oneshot(Request::get("/api/catalog").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = body_json(response).await;
        for kind in GeneratorKind::ALL {
            assert!(body["personas"][kind.slug()].is_array());
        }
        assert_eq!(body["structures"].as_array().unwrap().len(), 5);
        assert_eq!(body["info_types"][1]["name"], "표_위주");
    }
}
