use std::sync::Arc;

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use gmclog_parser::{parse_log, ChartPayload, ParserConfig};
use serde::Serialize;
use tracing::{info, warn};

use crate::pages;
use crate::store::{LogStore, StoreError};

pub struct AppState {
    store: LogStore,
    config: ParserConfig,
}

impl AppState {
    pub fn new(store: LogStore, config: ParserConfig) -> Self {
        Self { store, config }
    }
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub id: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/logs", post(upload))
        .route("/logs/{id}", get(payload))
        .route("/logs/{id}/view", get(view))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(pages::INDEX)
}

async fn view() -> Html<&'static str> {
    Html(pages::VIEW)
}

async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), (StatusCode, String)> {
    let mut data: Option<String> = None;
    let mut flags: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let text = field
            .text()
            .await
            .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()))?;
        match name.as_str() {
            "data" => data = Some(text),
            "flags" if !text.trim().is_empty() => flags = Some(text),
            _ => {}
        }
    }

    let Some(data) = data else {
        return Err((
            StatusCode::BAD_REQUEST,
            "Please select data file.".to_string(),
        ));
    };

    // Invalid files are rejected before anything touches the store.
    if let Err(err) = parse_log(&data, flags.as_deref(), &state.config) {
        warn!("rejected upload: {err}");
        return Err((StatusCode::UNPROCESSABLE_ENTITY, err.to_string()));
    }

    let id = state
        .store
        .store(&data, flags.as_deref())
        .map_err(internal)?;
    info!("stored log {id}");

    Ok((StatusCode::CREATED, Json(UploadResponse { id })))
}

async fn payload(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ChartPayload>, (StatusCode, String)> {
    let (data, flags) = state.store.load(&id).map_err(|err| match err {
        StoreError::BadToken => (StatusCode::BAD_REQUEST, err.to_string()),
        StoreError::NotFound => (StatusCode::NOT_FOUND, err.to_string()),
        StoreError::Io(_) => internal(err),
    })?;

    parse_log(&data, flags.as_deref(), &state.config)
        .map(Json)
        .map_err(|err| (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()))
}

fn internal(err: impl std::fmt::Display) -> (StatusCode, String) {
    tracing::error!("{err}");
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal error.".to_string())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;

    const BOUNDARY: &str = "gmclog-test-boundary";

    fn test_router(dir: &Path) -> Router {
        let state = Arc::new(AppState::new(
            LogStore::new(dir),
            ParserConfig::default(),
        ));
        router(state)
    }

    fn multipart_body(fields: &[(&str, &str)]) -> Body {
        let mut body = String::new();
        for (name, value) in fields {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{name}.csv\"\r\nContent-Type: text/csv\r\n\r\n{value}\r\n"
            ));
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));
        Body::from(body)
    }

    fn upload_request(fields: &[(&str, &str)]) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/logs")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(multipart_body(fields))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn upload_then_fetch_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let data = "GQ Geiger Muller Counter Data Logger, GMC-300\n\
                    2023-05-01 10:00, Every Minute, 25\n\
                    2023-05-01 10:01, Every Minute, 31\n";
        let flags = "2023-05-01 10:01, source placed\n";

        let response = test_router(dir.path())
            .oneshot(upload_request(&[("data", data), ("flags", flags)]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let id = body_json(response).await["id"].as_str().unwrap().to_string();

        let request = Request::builder()
            .uri(format!("/logs/{id}"))
            .body(Body::empty())
            .unwrap();
        let response = test_router(dir.path()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let payload = body_json(response).await;
        assert_eq!(payload["cpmSeries"].as_array().unwrap().len(), 2);
        assert_eq!(payload["flags"][0]["title"], "source placed");
        assert_eq!(payload["flags"][0]["value"], 31);
    }

    #[tokio::test]
    async fn upload_without_signature_is_rejected_and_not_stored() {
        let dir = tempfile::tempdir().unwrap();
        let data = "2023-05-01 10:00, Every Minute, 25\n";

        let response = test_router(dir.path())
            .oneshot(upload_request(&[("data", data)]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_text(response).await, "Bad file type or format.");

        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn upload_without_data_field_is_a_bad_request() {
        let dir = tempfile::tempdir().unwrap();

        let response = test_router(dir.path())
            .oneshot(upload_request(&[("flags", "2023-05-01 10:00, note\n")]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Please select data file.");
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();

        let request = Request::builder()
            .uri("/logs/deadbeef")
            .body(Body::empty())
            .unwrap();
        let response = test_router(dir.path()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "File not found.");
    }

    #[tokio::test]
    async fn shells_are_served() {
        let dir = tempfile::tempdir().unwrap();

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = test_router(dir.path()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let request = Request::builder()
            .uri("/logs/deadbeef/view")
            .body(Body::empty())
            .unwrap();
        let response = test_router(dir.path()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
