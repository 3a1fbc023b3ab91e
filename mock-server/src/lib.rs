use std::collections::HashMap;

use axum::{
    extract::Query,
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Echo of a received request, httpbin-style.
///
/// `args` holds the decoded query pairs, `headers` the received headers
/// (names lowercased by the HTTP layer), `form` the body parsed as
/// `application/x-www-form-urlencoded`, and `data` the raw UTF-8 body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Echo {
    pub args: HashMap<String, String>,
    pub headers: HashMap<String, String>,
    pub form: HashMap<String, String>,
    pub data: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/get", get(get_echo))
        .route("/post", post(post_echo))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn header_map(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect()
}

async fn get_echo(
    Query(args): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Json<Echo> {
    Json(Echo {
        args,
        headers: header_map(&headers),
        form: HashMap::new(),
        data: String::new(),
    })
}

async fn post_echo(headers: HeaderMap, body: String) -> Json<Echo> {
    let form = serde_urlencoded::from_str(&body).unwrap_or_default();
    Json(Echo {
        args: HashMap::new(),
        headers: header_map(&headers),
        form,
        data: body,
    })
}
