//! API Routes Module
//!
//! 모든 HTTP 엔드포인트 정의
//!
//! # Routes
//! - `/movies/*` - 영화 CRUD + 감독/장르별 목록
//! - `/directors/*` - 감독 CRUD
//! - `/genres/*` - 장르 CRUD
//!
//! 경로 파라미터는 문자열 그대로 핸들러에 전달됨 (숫자 변환 없음)

pub mod directors;
pub mod extract;
pub mod genres;
pub mod movies;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::{config::Config, error::handle_panic, AppState};

/// 라우터 생성
///
/// # Route Structure
///
/// ```text
/// GET    /movies                        - 영화 목록
/// GET    /movies/:id                    - 영화 조회
/// POST   /movies                        - 영화 생성
/// PUT    /movies/:id                    - 영화 수정 (전체 교체)
/// DELETE /movies/:id                    - 영화 삭제
/// GET    /movies/director/:director_id  - 감독별 영화
/// GET    /movies/genre/:genre_id        - 장르별 영화
///
/// GET|POST            /directors
/// GET|PUT|DELETE      /directors/:id
///
/// GET|POST            /genres
/// GET|PUT|DELETE      /genres/:id
/// ```
pub fn create_router(state: AppState) -> Router {
    let router = with_middleware(api_routes(), &state.config);
    router.with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        // Movies
        .route("/movies", get(movies::list_movies).post(movies::create_movie))
        .route(
            "/movies/:id",
            get(movies::get_movie)
                .put(movies::update_movie)
                .delete(movies::delete_movie),
        )
        .route(
            "/movies/director/:director_id",
            get(movies::list_movies_by_director),
        )
        .route("/movies/genre/:genre_id", get(movies::list_movies_by_genre))

        // Directors
        .route(
            "/directors",
            get(directors::list_directors).post(directors::create_director),
        )
        .route(
            "/directors/:id",
            get(directors::get_director)
                .put(directors::update_director)
                .delete(directors::delete_director),
        )

        // Genres
        .route("/genres", get(genres::list_genres).post(genres::create_genre))
        .route(
            "/genres/:id",
            get(genres::get_genre)
                .put(genres::update_genre)
                .delete(genres::delete_genre),
        )
}

/// 미들웨어 적용
///
/// CatchPanicLayer가 가장 안쪽: panic 응답(500)도 TraceLayer에 기록됨
fn with_middleware(router: Router<AppState>, config: &Config) -> Router<AppState> {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
}

/// CORS 설정
///
/// - 프로덕션: ALLOWED_ORIGINS에 지정된 도메인만 허용
/// - 개발: localhost 허용
fn cors_layer(config: &Config) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::PUT, Method::DELETE];

    let origins: Vec<HeaderValue> = if config.is_production() {
        config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect()
    } else {
        vec![
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("http://localhost:5173"), // Vite dev server
            HeaderValue::from_static("http://127.0.0.1:5173"),
        ]
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers([header::CONTENT_TYPE])
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::{config::Environment, error::INTERNAL_ERROR_MESSAGE, Database};

    fn test_config() -> Config {
        Config {
            port: 0,
            database_path: ":memory:".into(),
            database_max_connections: 1,
            allowed_origins: vec![],
            environment: Environment::Development,
        }
    }

    async fn test_state() -> AppState {
        let db = Database::in_memory().await.unwrap();
        db.init_schema().await.unwrap();

        AppState {
            db: Arc::new(db),
            config: Arc::new(test_config()),
        }
    }

    async fn test_app() -> Router {
        create_router(test_state().await)
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }

    async fn fetch(app: &Router, uri: &str) -> (StatusCode, Value) {
        send(app, Method::GET, uri, None).await
    }

    async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
        send(app, Method::POST, uri, Some(body)).await
    }

    fn inception(director_id: Value) -> Value {
        json!({
            "title": "Inception",
            "director_id": director_id,
            "genre_id": null,
            "score": 8.8,
            "rating": "PG-13",
            "release_year": 2010
        })
    }

    // ============ Listing ============

    #[tokio::test]
    async fn test_lists_are_empty_arrays_on_empty_store() {
        let app = test_app().await;
        for uri in ["/movies", "/directors", "/genres"] {
            let (status, body) = fetch(&app, uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body, json!([]), "{uri}");
        }
    }

    // ============ Movies ============

    #[tokio::test]
    async fn test_movie_round_trip() {
        let app = test_app().await;
        let payload = inception(json!(1));

        let (status, body) = post(&app, "/movies", payload.clone()).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({ "id": 1 }));

        let (status, body) = fetch(&app, "/movies/1").await;
        assert_eq!(status, StatusCode::OK);

        let mut expected = payload;
        expected["id"] = json!(1);
        assert_eq!(body, expected);
    }

    #[tokio::test]
    async fn test_whole_number_score_reads_back_as_real() {
        let app = test_app().await;
        post(&app, "/movies", json!({ "title": "Heat", "score": 9 })).await;

        // score는 REAL 컬럼: 9 → 9.0
        let (_, body) = fetch(&app, "/movies/1").await;
        assert_eq!(body["score"], json!(9.0));
        assert!(body["score"].is_f64());
    }

    #[tokio::test]
    async fn test_nolan_scenario() {
        let app = test_app().await;

        let (status, body) = post(&app, "/directors", json!({ "name": "Nolan" })).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({ "id": 1 }));

        let (status, body) = post(&app, "/movies", inception(json!(1))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({ "id": 1 }));

        let (status, body) = fetch(&app, "/movies/director/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{
                "id": 1,
                "title": "Inception",
                "director_id": 1,
                "genre_id": null,
                "score": 8.8,
                "rating": "PG-13",
                "release_year": 2010,
                "director_name": "Nolan"
            }])
        );
    }

    #[tokio::test]
    async fn test_movies_by_director_names_every_row() {
        let app = test_app().await;
        post(&app, "/directors", json!({ "name": "Nolan" })).await;
        post(&app, "/directors", json!({ "name": "Villeneuve" })).await;

        post(&app, "/movies", json!({ "title": "Inception", "director_id": 1 })).await;
        post(&app, "/movies", json!({ "title": "Arrival", "director_id": 2 })).await;
        post(&app, "/movies", json!({ "title": "Memento", "director_id": 1 })).await;
        post(&app, "/movies", json!({ "title": "Tenet", "director_id": 1 })).await;

        let (status, body) = fetch(&app, "/movies/director/1").await;
        assert_eq!(status, StatusCode::OK);

        let rows = body.as_array().unwrap();
        let mut titles: Vec<&str> = rows.iter().map(|r| r["title"].as_str().unwrap()).collect();
        titles.sort();
        assert_eq!(titles, vec!["Inception", "Memento", "Tenet"]);
        for row in rows {
            assert_eq!(row["director_name"], "Nolan");
            assert_eq!(row["director_id"], 1);
        }
    }

    #[tokio::test]
    async fn test_movies_by_director_not_found() {
        let app = test_app().await;
        post(&app, "/directors", json!({ "name": "Nolan" })).await;

        let (status, body) = fetch(&app, "/movies/director/1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({ "error": "No se encontraron películas para este director" })
        );
    }

    #[tokio::test]
    async fn test_movies_by_genre() {
        let app = test_app().await;
        post(&app, "/genres", json!({ "name": "Sci-Fi" })).await;

        let (status, body) = fetch(&app, "/movies/genre/1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({ "error": "No se encontraron películas para este género" })
        );

        post(&app, "/movies", json!({ "title": "Interstellar", "genre_id": 1 })).await;
        post(&app, "/movies", json!({ "title": "Dunkirk" })).await;

        let (status, body) = fetch(&app, "/movies/genre/1").await;
        assert_eq!(status, StatusCode::OK);
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["title"], "Interstellar");
        assert_eq!(rows[0]["genre_name"], "Sci-Fi");
    }

    #[tokio::test]
    async fn test_delete_then_get_movie_is_not_found() {
        let app = test_app().await;
        post(&app, "/movies", inception(Value::Null)).await;

        let (status, body) = send(&app, Method::DELETE, "/movies/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Película eliminada correctamente" }));

        let (status, body) = fetch(&app, "/movies/1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Película no encontrada" }));
    }

    #[tokio::test]
    async fn test_put_replaces_movie() {
        let app = test_app().await;
        post(&app, "/movies", inception(json!(1))).await;

        let (status, body) = send(
            &app,
            Method::PUT,
            "/movies/1",
            Some(json!({ "title": "Memento", "release_year": 2000 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "message": "Datos de la película actualizados correctamente" })
        );

        let (_, body) = fetch(&app, "/movies/1").await;
        assert_eq!(body["title"], "Memento");
        assert_eq!(body["release_year"], 2000);
        assert_eq!(body["director_id"], Value::Null);
        assert_eq!(body["score"], Value::Null);
    }

    #[tokio::test]
    async fn test_missing_title_is_store_failure() {
        let app = test_app().await;
        let (status, body) = post(&app, "/movies", json!({ "score": 5.0 })).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = body["error"].as_str().unwrap();
        assert!(message.contains("NOT NULL constraint failed: movies.title"), "{message}");
    }

    #[tokio::test]
    async fn test_dangling_director_reference_is_accepted() {
        let app = test_app().await;
        let (status, _) = post(&app, "/movies", inception(json!(99))).await;
        assert_eq!(status, StatusCode::CREATED);

        // 조인 경로는 매칭되지 않는 행을 건너뜀
        let (status, _) = fetch(&app, "/movies/director/99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    // ============ Not-found / asymmetric mutation ============

    #[tokio::test]
    async fn test_get_missing_ids_return_404() {
        let app = test_app().await;

        let (status, _) = fetch(&app, "/movies/999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = fetch(&app, "/directors/999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Director no encontrado" }));

        let (status, body) = fetch(&app, "/genres/999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Genero no encontrado" }));
    }

    #[tokio::test]
    async fn test_put_and_delete_missing_ids_return_200() {
        let app = test_app().await;

        let cases = [
            ("/movies/999", "Datos de la película actualizados correctamente", "Película eliminada correctamente"),
            ("/directors/999", "Datos del director actualizados correctamente", "Director eliminado correctamente"),
            ("/genres/999", "Datos del genero actualizados correctamente", "Genero eliminado correctamente"),
        ];

        for (uri, updated, deleted) in cases {
            let payload = json!({ "title": "X", "name": "X" });
            let (status, body) = send(&app, Method::PUT, uri, Some(payload)).await;
            assert_eq!(status, StatusCode::OK, "PUT {uri}");
            assert_eq!(body, json!({ "message": updated }));

            let (status, body) = send(&app, Method::DELETE, uri, None).await;
            assert_eq!(status, StatusCode::OK, "DELETE {uri}");
            assert_eq!(body, json!({ "message": deleted }));
        }

        // 아무 행도 생성되지 않음
        let (_, body) = fetch(&app, "/movies").await;
        assert_eq!(body, json!([]));
    }

    // ============ Directors / Genres ============

    #[tokio::test]
    async fn test_director_crud() {
        let app = test_app().await;
        post(&app, "/directors", json!({ "name": "Nolan" })).await;

        let (status, _) = send(
            &app,
            Method::PUT,
            "/directors/1",
            Some(json!({ "name": "Christopher Nolan" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = fetch(&app, "/directors/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "id": 1, "name": "Christopher Nolan" }));

        let (_, body) = fetch(&app, "/directors").await;
        assert_eq!(body, json!([{ "id": 1, "name": "Christopher Nolan" }]));
    }

    #[tokio::test]
    async fn test_deleting_director_leaves_movie_reference() {
        let app = test_app().await;
        post(&app, "/directors", json!({ "name": "Nolan" })).await;
        post(&app, "/movies", inception(json!(1))).await;

        let (status, _) = send(&app, Method::DELETE, "/directors/1", None).await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = fetch(&app, "/movies/1").await;
        assert_eq!(body["director_id"], 1);
    }

    #[tokio::test]
    async fn test_genre_without_name_is_store_failure() {
        let app = test_app().await;
        let (status, body) = post(&app, "/genres", json!({})).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("genres.name"));
    }

    // ============ Request bodies ============

    #[tokio::test]
    async fn test_body_without_json_content_type_is_treated_as_empty() {
        let app = test_app().await;
        let request = Request::builder()
            .method(Method::POST)
            .uri("/directors")
            .body(Body::from(r#"{"name":"Nolan"}"#))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();

        // name 없음 → NOT NULL 위반
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let (_, body) = fetch(&app, "/directors").await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_empty_json_body_is_treated_as_empty_object() {
        let app = test_app().await;
        let request = Request::builder()
            .method(Method::POST)
            .uri("/directors")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::empty())
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        // 고정 메시지가 아니라 저장소 메시지
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            json!({ "error": "NOT NULL constraint failed: directors.name" })
        );
    }

    #[tokio::test]
    async fn test_malformed_json_goes_through_error_boundary() {
        let app = test_app().await;
        let request = Request::builder()
            .method(Method::POST)
            .uri("/movies")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": INTERNAL_ERROR_MESSAGE }));
    }

    // ============ Error boundary ============

    #[tokio::test]
    async fn test_panic_is_caught_by_error_boundary() {
        async fn explode() -> &'static str {
            panic!("handler exploded")
        }

        let state = test_state().await;
        let router = api_routes().route("/explode", get(explode));
        let app = with_middleware(router, &state.config).with_state(state);

        let (status, body) = fetch(&app, "/explode").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": INTERNAL_ERROR_MESSAGE }));
    }

    #[tokio::test]
    async fn test_unknown_route_uses_framework_default() {
        let app = test_app().await;
        let (status, _) = fetch(&app, "/actors").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::PATCH, "/movies/1", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}
