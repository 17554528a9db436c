use std::sync::{Arc, Mutex};

use aula_client::AdminClient;
use aula_config::ApiConfig;
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, Uri};
use axum::response::Response;
use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};

/// A request as seen by the fake backend.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: String,
}

#[allow(dead_code)]
impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

type Responder = dyn Fn(&RecordedRequest) -> Response + Send + Sync;

#[derive(Clone)]
pub struct Backend {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responder: Arc<Responder>,
}

#[allow(dead_code)]
impl Backend {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn single_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

async fn handle(
    State(backend): State<Backend>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let recorded = RecordedRequest {
        method,
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers,
        body,
    };
    let response = (backend.responder)(&recorded);
    backend.requests.lock().unwrap().push(recorded);
    response
}

/// Start a fake backend answering every request with `responder`.
///
/// Returns the backend handle and a client pointed at it.
pub async fn spawn_backend<F>(responder: F) -> (Backend, AdminClient)
where
    F: Fn(&RecordedRequest) -> Response + Send + Sync + 'static,
{
    let backend = Backend {
        requests: Arc::new(Mutex::new(Vec::new())),
        responder: Arc::new(responder),
    };

    let app = Router::new().fallback(handle).with_state(backend.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = AdminClient::new(ApiConfig::new(format!("http://{}", addr))).unwrap();
    (backend, client)
}

#[allow(dead_code)]
pub fn fake_first_name() -> String {
    FirstName().fake()
}

#[allow(dead_code)]
pub fn fake_last_name() -> String {
    LastName().fake()
}
