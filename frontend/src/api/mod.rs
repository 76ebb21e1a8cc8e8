//! Browser transport for the booking backend.
//!
//! `HttpBookingApi` moves requests and response bodies with `gloo-net`;
//! deciding what a status code or body means is left to
//! `common::api::responses`.

use common::api::responses::{interpret_body, interpret_create, interpret_listing, interpret_lookup};
use common::api::{ApiConfig, ApiError, BookingApi};
use common::model::collection::Collection;
use common::model::user::User;
use common::requests::CreateRequest;
use common::store::Snapshot;
use gloo_net::http::{Request, Response};
use log::warn;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HttpBookingApi {
    config: ApiConfig,
}

impl HttpBookingApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

fn transport(error: gloo_net::Error) -> ApiError {
    ApiError::Transport(error.to_string())
}

/// Status and body text of a response.
async fn read(response: Response) -> (u16, Result<String, ApiError>) {
    let status = response.status();
    let body = response.text().await.map_err(transport);
    (status, body)
}

impl BookingApi for HttpBookingApi {
    async fn fetch(&self, collection: Collection) -> Result<Snapshot, ApiError> {
        let response = Request::get(&self.config.collection_url(collection))
            .send()
            .await
            .map_err(transport)?;
        let (status, body) = read(response).await;
        interpret_body(status, body, |status, body| {
            interpret_listing(collection, status, body)
        })
    }

    async fn create(&self, request: &CreateRequest) -> Result<(), ApiError> {
        let payload = request
            .to_json()
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = Request::post(&self.config.collection_url(request.collection()))
            .json(&payload)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        // The created entity is refetched, so only a rejection needs the body.
        let (status, body) = read(response).await;
        let body = body.unwrap_or_else(|e| {
            warn!("unreadable create response ({status}): {e}");
            String::new()
        });
        interpret_create(status, &body)
    }

    async fn find_user_by_cpf(&self, cpf: &str) -> Result<Option<User>, ApiError> {
        let response = Request::get(&self.config.user_by_cpf_url(cpf))
            .send()
            .await
            .map_err(transport)?;
        let (status, body) = read(response).await;
        interpret_body(status, body, interpret_lookup)
    }
}
