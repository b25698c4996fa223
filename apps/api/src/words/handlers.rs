//! Axum route handlers for the Crossword API.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use serde::Deserialize;

use crate::crossword::ScoringPolicy;
use crate::errors::AppError;
use crate::state::AppState;
use crate::words::generator::{
    generate_crossword, layout_crossword, CrosswordRequest, CrosswordResponse, LayoutRequest,
};
use crate::words::normalize::UserWord;

/// Query string of the frontend's `GET /api` call.
///
/// `words` is a URL-encoded JSON array of `{word, description?}`; `noNewWords`
/// is a bare presence flag.
#[derive(Debug, Deserialize)]
pub struct CrosswordQuery {
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub words: Option<String>,
    #[serde(default, rename = "noNewWords")]
    pub no_new_words: Option<String>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub scoring: Option<ScoringPolicy>,
}

impl CrosswordQuery {
    fn into_request(self) -> Result<CrosswordRequest, AppError> {
        let words = match self.words.as_deref().map(str::trim) {
            None | Some("") => Vec::new(),
            Some(raw) => serde_json::from_str::<Vec<UserWord>>(raw).map_err(|e| {
                AppError::Validation(format!(
                    "words must be a JSON array of {{word, description}} objects: {e}"
                ))
            })?,
        };

        Ok(CrosswordRequest {
            theme: self.theme,
            words,
            allow_new_words: self.no_new_words.is_none(),
            seed: self.seed,
            scoring: self.scoring,
        })
    }
}

/// GET /api?theme=..&words=..&noNewWords
///
/// Endpoint used by the web frontend. Same pipeline as `POST /api/v1/crosswords`.
pub async fn handle_generate_query(
    State(state): State<AppState>,
    query: Result<Query<CrosswordQuery>, QueryRejection>,
) -> Result<Json<CrosswordResponse>, AppError> {
    let Query(query) = query?;
    let request = query.into_request()?;
    let response = generate_crossword(state.supplier.as_ref(), &state.config, request).await?;
    Ok(Json(response))
}

/// POST /api/v1/crosswords
///
/// Supplier → merge → layout. Returns the placed words with their clues.
pub async fn handle_generate(
    State(state): State<AppState>,
    request: Result<Json<CrosswordRequest>, JsonRejection>,
) -> Result<Json<CrosswordResponse>, AppError> {
    let Json(request) = request?;
    let response = generate_crossword(state.supplier.as_ref(), &state.config, request).await?;
    Ok(Json(response))
}

/// POST /api/v1/crosswords/layout
///
/// Lays out the given words only; never calls the supplier.
pub async fn handle_layout(
    State(state): State<AppState>,
    request: Result<Json<LayoutRequest>, JsonRejection>,
) -> Result<Json<CrosswordResponse>, AppError> {
    let Json(request) = request?;
    let response = layout_crossword(&state.config, request).await?;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::crossword::WordClue;
    use crate::routes::build_router;
    use crate::words::test_support::{test_state, CannedSupplier, FailingSupplier};

    fn app(words: Vec<WordClue>) -> Router {
        build_router(test_state(Arc::new(CannedSupplier::new(words))))
    }

    fn pets() -> Vec<WordClue> {
        vec![
            WordClue::new("CAT", "Feline pet"),
            WordClue::new("TAR", "Road surface"),
            WordClue::new("ART", "Gallery contents"),
        ]
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_get_api_returns_crossword() {
        let response = app(pets())
            .oneshot(Request::get("/api?theme=Pets").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["name"], "Pets");
        let words = body["words"].as_array().unwrap();
        assert_eq!(words.len(), 3);
        assert_eq!(words[0]["word"], "CAT");
        assert_eq!(words[0]["direction"], "X");
        assert_eq!(words[0]["start"], json!([0, 0, 0]));
        assert_eq!(words[0]["description"], "Feline pet");
        assert!(body["id"].is_string());
        assert!(body["generated_at"].is_string());
    }

    #[tokio::test]
    async fn test_get_api_missing_theme_is_400() {
        let response = app(pets())
            .oneshot(Request::get("/api").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "The theme must be nonempty.");
    }

    #[tokio::test]
    async fn test_get_api_bad_words_json_is_400() {
        let response = app(pets())
            .oneshot(
                Request::get("/api?theme=Pets&words=%5Bnot-json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_api_no_new_words_keeps_user_words_only() {
        // words=[{"word":"dog"},{"word":"god","description":"Deity"}]
        let uri = "/api?theme=Animals&noNewWords&words=%5B%7B%22word%22%3A%22dog%22%7D%2C%7B%22word%22%3A%22god%22%2C%22description%22%3A%22Deity%22%7D%5D";
        let supplier = vec![
            WordClue::new("DOG", "Loyal companion"),
            WordClue::new("CAT", "Should be ignored"),
        ];
        let response = app(supplier)
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let words = body["words"].as_array().unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0]["word"], "DOG");
        assert_eq!(words[0]["description"], "Loyal companion");
        assert_eq!(words[1]["word"], "GOD");
        assert_eq!(words[1]["description"], "Deity");
    }

    #[tokio::test]
    async fn test_get_api_user_word_with_digits_is_400() {
        // words=[{"word":"r2d2"}]
        let uri = "/api?theme=Robots&words=%5B%7B%22word%22%3A%22r2d2%22%7D%5D";
        let response = app(pets())
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_supplier_failure_is_502() {
        let app = build_router(test_state(Arc::new(FailingSupplier)));
        let response = app
            .oneshot(Request::get("/api?theme=Pets").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "LLM_ERROR");
    }

    #[tokio::test]
    async fn test_post_crosswords_with_seed_is_reproducible() {
        let request = json!({"theme": "Pets", "seed": 5});
        let first = body_json(
            app(pets())
                .oneshot(post_json("/api/v1/crosswords", request.clone()))
                .await
                .unwrap(),
        )
        .await;
        let second = body_json(
            app(pets())
                .oneshot(post_json("/api/v1/crosswords", request))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(first["words"], second["words"]);
        assert_ne!(first["id"], second["id"]);
    }

    #[tokio::test]
    async fn test_post_layout_fallback_scenario() {
        let request = json!({
            "name": "Disjoint",
            "words": [
                {"word": "ABC", "description": "Letters"},
                {"word": "XYZ", "description": "More letters"}
            ]
        });
        let response = app(vec![])
            .oneshot(post_json("/api/v1/crosswords/layout", request))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(
            body["words"],
            json!([
                {"word": "ABC", "direction": "X", "start": [0, 0, 0], "description": "Letters"},
                {"word": "XYZ", "direction": "X", "start": [4, 0, 0], "description": "More letters"}
            ])
        );
    }

    #[tokio::test]
    async fn test_post_layout_empty_words_is_422() {
        let response = app(vec![])
            .oneshot(post_json("/api/v1/crosswords/layout", json!({"words": []})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "PLACEMENT_ERROR");
    }

    #[tokio::test]
    async fn test_bad_query_value_uses_error_envelope() {
        let response = app(pets())
            .oneshot(
                Request::get("/api?theme=Pets&seed=abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_malformed_json_body_uses_error_envelope() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/crosswords/layout")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"words\": [oops"))
            .unwrap();
        let response = app(vec![]).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_post_crosswords_missing_theme_field_uses_error_envelope() {
        let response = app(pets())
            .oneshot(post_json("/api/v1/crosswords", json!({"words": []})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_post_layout_overlong_word_is_400() {
        let request = json!({"words": [{"word": "A".repeat(2000)}, {"word": "AB"}]});
        let response = app(vec![])
            .oneshot(post_json("/api/v1/crosswords/layout", request))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(vec![])
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }
}
