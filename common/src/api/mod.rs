//! Backend contract of the console.
//!
//! - `ApiConfig` fixes where the backend lives and builds endpoint URLs.
//! - `ApiError` is the failure taxonomy every call reports.
//! - `responses` turns a raw `(status, body)` pair into typed results, so the
//!   transport only has to move bytes.
//! - `BookingApi` is the seam the workflow calls through; the browser build
//!   implements it with `gloo-net`, tests implement it in memory.

mod error;
pub mod responses;

use std::future::Future;

pub use error::{ApiError, extract_backend_message};

use crate::model::collection::Collection;
use crate::model::user::User;
use crate::requests::CreateRequest;
use crate::store::Snapshot;

/// Host every request targets. There is no other configuration surface.
pub const DEFAULT_BASE_URL: &str = "http://localhost";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn collection_url(&self, collection: Collection) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), collection.path())
    }

    /// `GET /api/usuarios/{cpf}`.
    pub fn user_by_cpf_url(&self, cpf: &str) -> String {
        format!("{}/{}", self.collection_url(Collection::Users), cpf.trim())
    }
}

/// Transport used by the workflow to reach the backend.
pub trait BookingApi {
    /// Reads a whole collection.
    fn fetch(&self, collection: Collection) -> impl Future<Output = Result<Snapshot, ApiError>>;

    /// Posts a create request to the collection endpoint of `request`.
    fn create(&self, request: &CreateRequest) -> impl Future<Output = Result<(), ApiError>>;

    /// Looks a user up by national ID. `Ok(None)` means no such user.
    fn find_user_by_cpf(&self, cpf: &str) -> impl Future<Output = Result<Option<User>, ApiError>>;
}
