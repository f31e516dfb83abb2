/// Common test utilities and fixtures
use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use roster_core::UserStore;
use roster_server::{config::StorageSettings, create_router, AppState};
use roster_storage::SqliteUserStore;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

/// Test app backed by a real SQLite file that is removed on drop
pub struct TestApp {
    pub router: Router,
    pub store: Arc<SqliteUserStore>,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let storage = StorageSettings {
            database_url: format!("sqlite://{}", temp_dir.path().join("users.db").display()),
            max_connections: 5,
        };

        let store = SqliteUserStore::connect(&storage.database_url, storage.max_connections)
            .await
            .unwrap();
        store.initialize().await.unwrap();
        let store = Arc::new(store);

        let router = create_router(AppState::new(store.clone()));

        Self {
            router,
            store,
            _temp_dir: temp_dir,
        }
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut request = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        self.router
            .clone()
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn post_form(&self, uri: &str, form: &str) -> Response<Body> {
        let request = Request::builder()
            .uri(uri)
            .method("POST")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Follow a redirect the way a browser would, sending back the notice cookie
    pub async fn follow(&self, response: Response<Body>) -> Page {
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response.headers()[header::LOCATION]
            .to_str()
            .unwrap()
            .to_string();
        let cookie = notice_cookie(&response);

        let response = self.get(&location, cookie.as_deref()).await;
        Page::read(response, location).await
    }
}

/// A rendered response after following a redirect
pub struct Page {
    pub location: String,
    pub status: StatusCode,
    pub set_cookie: Option<String>,
    pub body: String,
}

impl Page {
    pub async fn read(response: Response<Body>, location: String) -> Self {
        let status = response.status();
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        Self {
            location,
            status,
            set_cookie,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }
}

/// `name=value` part of the notice cookie set by a response
pub fn notice_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
