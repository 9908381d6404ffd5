//! HTTP front end (`with-api` feature): `POST /verify`.
//!
//! Requests are checked (JSON shape, presence, length) before the shared
//! [`Verifier`] runs; the result is returned as-is with `200 OK`.

mod error;

pub use error::ApiError;

use std::future::Future;
use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{Method, header};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info};

use crate::mx::LookupMx;
use crate::probe::Dial;
use crate::verify::{VerificationResult, Verifier};

/// Longest accepted address, in bytes (RFC 5321 path limit).
pub const MAX_EMAIL_LEN: usize = 254;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyRequest {
    #[serde(default)]
    pub email: String,
}

impl VerifyRequest {
    fn validate(&self) -> Result<(), ApiError> {
        if self.email.is_empty() {
            return Err(ApiError::MissingEmail);
        }
        if self.email.len() > MAX_EMAIL_LEN {
            return Err(ApiError::EmailTooLong {
                len: self.email.len(),
            });
        }
        Ok(())
    }
}

pub fn router<R, D>(verifier: Arc<Verifier<R, D>>) -> Router
where
    R: LookupMx + 'static,
    D: Dial + 'static,
{
    Router::new()
        .route("/verify", post(verify_handler::<R, D>))
        .with_state(verifier)
        .layer(cors_layer())
}

/// Any origin may call the API from a browser.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}

/// Serves the API on `listener` until `shutdown` resolves.
pub async fn serve<R, D, F>(
    listener: TcpListener,
    verifier: Arc<Verifier<R, D>>,
    shutdown: F,
) -> std::io::Result<()>
where
    R: LookupMx + 'static,
    D: Dial + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "verification API listening");
    }
    axum::serve(listener, router(verifier))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn verify_handler<R, D>(
    State(verifier): State<Arc<Verifier<R, D>>>,
    payload: Result<Json<VerifyRequest>, JsonRejection>,
) -> Result<Json<VerificationResult>, ApiError>
where
    R: LookupMx + 'static,
    D: Dial + 'static,
{
    let Json(request) = payload.map_err(ApiError::InvalidJson)?;
    request.validate()?;

    let result = verifier.verify(&request.email).await;
    debug!(status = %result.status, "request served");
    Ok(Json(result))
}
