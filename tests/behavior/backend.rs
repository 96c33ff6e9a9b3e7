use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use gallerist::media::MediaItem;
use serde::Deserialize;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Canned answer replacing the next regular response.
#[derive(Debug, Clone)]
struct Scripted {
    status: u16,
    body: String,
}

#[derive(Default)]
struct Inner {
    directories: HashMap<String, Vec<MediaItem>>,
    next_list: Option<Scripted>,
    next_delete: Option<Scripted>,
    delete_message: Option<String>,
    list_calls: usize,
    delete_requests: Vec<Vec<String>>,
}

#[derive(Clone, Default)]
struct BackendState {
    inner: Arc<Mutex<Inner>>,
}

/// In-process gallery backend serving `GET /images` and `DELETE /images`.
pub struct FakeBackend {
    pub base_url: String,
    state: BackendState,
    server: JoinHandle<()>,
}

impl FakeBackend {
    pub async fn start() -> io::Result<Self> {
        let state = BackendState::default();
        let app = Router::new()
            .route("/images", get(list_images).delete(delete_images))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            base_url: format!("http://{addr}"),
            state,
            server,
        })
    }

    fn inner(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.state.inner.lock().unwrap()
    }

    pub fn seed(&self, directory: &str, items: Vec<MediaItem>) {
        self.inner()
            .directories
            .insert(directory.to_string(), items);
    }

    pub fn fail_next_list(&self, status: u16, body: &str) {
        self.inner().next_list = Some(Scripted {
            status,
            body: body.to_string(),
        });
    }

    pub fn fail_next_delete(&self, status: u16, body: &str) {
        self.inner().next_delete = Some(Scripted {
            status,
            body: body.to_string(),
        });
    }

    pub fn set_delete_message(&self, message: &str) {
        self.inner().delete_message = Some(message.to_string());
    }

    pub fn ids(&self, directory: &str) -> Vec<String> {
        self.inner()
            .directories
            .get(directory)
            .map(|items| items.iter().map(|item| item.id.clone()).collect())
            .unwrap_or_default()
    }

    pub fn list_calls(&self) -> usize {
        self.inner().list_calls
    }

    pub fn delete_requests(&self) -> Vec<Vec<String>> {
        self.inner().delete_requests.clone()
    }
}

impl Drop for FakeBackend {
    fn drop(&mut self) {
        self.server.abort();
    }
}

#[derive(Deserialize)]
struct ListQuery {
    directory: String,
}

#[derive(Deserialize)]
struct DeleteBody {
    #[serde(rename = "imageIds")]
    image_ids: Vec<String>,
}

fn scripted_response(scripted: Scripted) -> Response {
    let status = StatusCode::from_u16(scripted.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, scripted.body).into_response()
}

async fn list_images(
    State(state): State<BackendState>,
    Query(query): Query<ListQuery>,
) -> Response {
    let mut inner = state.inner.lock().unwrap();
    inner.list_calls += 1;
    if let Some(scripted) = inner.next_list.take() {
        return scripted_response(scripted);
    }
    let items = inner
        .directories
        .get(&query.directory)
        .cloned()
        .unwrap_or_default();
    Json(items).into_response()
}

async fn delete_images(
    State(state): State<BackendState>,
    Json(body): Json<DeleteBody>,
) -> Response {
    let mut inner = state.inner.lock().unwrap();
    inner.delete_requests.push(body.image_ids.clone());
    if let Some(scripted) = inner.next_delete.take() {
        return scripted_response(scripted);
    }

    for items in inner.directories.values_mut() {
        items.retain(|item| !body.image_ids.contains(&item.id));
    }
    let message = inner
        .delete_message
        .clone()
        .unwrap_or_else(|| format!("Deleted {} images", body.image_ids.len()));
    Json(serde_json::json!({ "success": true, "message": message })).into_response()
}
