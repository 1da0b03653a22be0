pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::hierarchy::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Hierarchy API
        .route(
            "/api/v1/hierarchy/superior",
            get(handlers::handle_get_superior),
        )
        .route(
            "/api/v1/hierarchy/superior/batch",
            post(handlers::handle_batch_superior),
        )
        .route("/api/v1/hierarchy/classify", get(handlers::handle_classify))
        .route("/api/v1/hierarchy/load", post(handlers::handle_load))
        .route("/api/v1/hierarchy/stats", get(handlers::handle_stats))
        .route("/api/v1/hierarchy", delete(handlers::handle_clear))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::hierarchy::fuzzy::SimilarityKind;
    use crate::hierarchy::loader::ColumnLayout;
    use crate::hierarchy::registry::HierarchyRegistry;

    fn test_config() -> Config {
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            hierarchy_csv_path: None,
            title_column: 0,
            division_column: 1,
            delimiter: b';',
            seed_path: None,
            similarity: SimilarityKind::Levenshtein,
        }
    }

    fn test_state() -> AppState {
        let config = test_config();
        AppState {
            registry: Arc::new(HierarchyRegistry::new(config.similarity.build().into())),
            config,
        }
    }

    async fn loaded_state() -> AppState {
        let state = test_state();
        let rows = vec![
            vec!["Analyst", "Sales"],
            vec!["Manager", "Sales"],
            vec!["Director", "Sales North"],
        ];
        let layout = ColumnLayout {
            title_column: 0,
            division_column: 1,
            ..ColumnLayout::default()
        };
        state.registry.load(&rows, &layout).await;
        state
    }

    async fn send(state: AppState, request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(state).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(test_state(), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "hierarchy-api");
    }

    #[tokio::test]
    async fn test_get_superior() {
        let state = loaded_state().await;
        let (status, body) = send(
            state,
            get("/api/v1/hierarchy/superior?title=analyst&division=sales"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "MANAGER");
        assert_eq!(body["division"], "SALES");
        assert_eq!(body["source"], "staged");
        assert_eq!(body["stage"], "same_division");
    }

    #[tokio::test]
    async fn test_get_superior_requires_title() {
        let (status, body) = send(test_state(), get("/api/v1/hierarchy/superior?title=%20")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unloaded_superior_is_unknown() {
        let (status, body) =
            send(test_state(), get("/api/v1/hierarchy/superior?title=Analista")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], Value::Null);
        assert_eq!(body["source"], "unknown");
    }

    #[tokio::test]
    async fn test_batch_superior() {
        let state = loaded_state().await;
        let request = post_json(
            "/api/v1/hierarchy/superior/batch",
            json!({ "queries": [
                { "title": "Analyst", "division": "Sales" },
                { "title": "" }
            ]}),
        );
        let (status, body) = send(state, request).await;
        assert_eq!(status, StatusCode::OK);
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["title"], "Analyst");
        assert_eq!(results[0]["superior"]["title"], "MANAGER");
        assert_eq!(results[1]["superior"]["source"], "unknown");
    }

    #[tokio::test]
    async fn test_classify() {
        let (status, body) = send(
            test_state(),
            get("/api/v1/hierarchy/classify?title=Senior%20Software%20Engineer"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["normalized_title"], "SENIOR SOFTWARE ENGINEER");
        assert_eq!(body["category"], "tech_role");
        assert_eq!(body["rank"], 36);
        assert_eq!(body["seniority"], "senior");
        assert_eq!(body["next_higher_label"], "LEAD/TECH LEAD");
    }

    #[tokio::test]
    async fn test_load_stats_and_clear() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cargo;division").unwrap();
        writeln!(file, "Analista;Ventas").unwrap();
        writeln!(file, "Jefe;Ventas").unwrap();
        let path = file.path().to_string_lossy().to_string();
        let state = test_state();

        let (status, body) = send(state.clone(), get("/api/v1/hierarchy/stats")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");

        let (status, body) = send(
            state.clone(),
            post_json("/api/v1/hierarchy/load", json!({ "path": path })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["built"], true);
        assert_eq!(body["stats"]["records"], 2);

        let (status, body) = send(state.clone(), get("/api/v1/hierarchy/stats")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["titles"], 2);
        assert_eq!(body["divisions"], 1);
        assert_eq!(body["similarity"], "levenshtein");

        let (status, body) = send(
            state.clone(),
            post_json("/api/v1/hierarchy/load", json!({ "path": path })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["built"], false);

        let request = Request::builder()
            .method("DELETE")
            .uri("/api/v1/hierarchy")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(state.clone(), request).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(!state.registry.is_loaded().await);
    }

    #[tokio::test]
    async fn test_load_missing_source() {
        let (status, body) = send(
            test_state(),
            post_json(
                "/api/v1/hierarchy/load",
                json!({ "path": "/nonexistent/export.csv" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "SOURCE_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_load_without_path_or_config() {
        let (status, body) =
            send(test_state(), post_json("/api/v1/hierarchy/load", json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
