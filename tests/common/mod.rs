//! In-process origin server used as a warm-up target.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::convert::Infallible;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{Method, StatusCode},
    response::{Redirect, Response},
    routing::any,
    Router,
};
use futures::stream::{self, StreamExt};

/// Counts every request the origin receives.
#[derive(Clone, Default)]
pub struct OriginLog {
    hits: Arc<AtomicUsize>,
    seen: Arc<Mutex<Vec<(Method, String)>>>,
}

impl OriginLog {
    fn record(&self, method: Method, path: &str) {
        self.hits.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push((method, path.to_string()));
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<(Method, String)> {
        self.seen.lock().unwrap().clone()
    }
}

pub struct Origin {
    pub addr: SocketAddr,
    pub log: OriginLog,
}

impl Origin {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

async fn page(State(log): State<OriginLog>, method: Method) -> &'static str {
    log.record(method, "/page");
    "<html>fresh</html>"
}

async fn hang(State(log): State<OriginLog>, method: Method) -> &'static str {
    log.record(method, "/hang");
    tokio::time::sleep(Duration::from_secs(30)).await;
    "too late"
}

async fn missing(State(log): State<OriginLog>, method: Method) -> StatusCode {
    log.record(method, "/missing");
    StatusCode::NOT_FOUND
}

async fn moved(State(log): State<OriginLog>, method: Method) -> Redirect {
    log.record(method, "/moved");
    Redirect::permanent("/page")
}

async fn slow_body(State(log): State<OriginLog>, method: Method) -> Response {
    log.record(method, "/slow-body");
    let first = stream::once(async { Ok::<_, Infallible>(Bytes::from_static(b"<html>")) });
    let body = first.chain(stream::pending());
    Response::new(Body::from_stream(body))
}

/// Starts an origin on an ephemeral localhost port.
///
/// - `/page` answers 200
/// - `/hang` never answers in time
/// - `/missing` answers 404
/// - `/moved` redirects to `/page`
/// - `/slow-body` sends headers and one chunk, then stalls
pub async fn spawn_origin() -> Origin {
    let log = OriginLog::default();
    let app = Router::new()
        .route("/page", any(page))
        .route("/hang", any(hang))
        .route("/missing", any(missing))
        .route("/moved", any(moved))
        .route("/slow-body", any(slow_body))
        .with_state(log.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Origin { addr, log }
}

/// Polls `check` until it holds or about two seconds pass.
pub async fn eventually<F: Fn() -> bool>(check: F) -> bool {
    for _ in 0..200 {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    check()
}
