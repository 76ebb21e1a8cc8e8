//! Side effects requested by `update` and their execution.

use std::time::Duration;

use log::{debug, warn};

use crate::api::BookingApi;
use crate::model::collection::Collection;
use crate::model::notification::NotificationId;
use crate::requests::CreateRequest;
use crate::workflow::messages::Action;
use crate::workflow::pending::OpId;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Fetch {
        op: OpId,
        collection: Collection,
    },
    Create {
        op: OpId,
        request: CreateRequest,
    },
    Lookup {
        op: OpId,
        cpf: String,
    },
    /// Hide notification `id` after `delay`. The runtime owns the timer.
    DismissLater {
        id: NotificationId,
        delay: Duration,
    },
}

/// Runs one command against the backend and returns the completion action.
///
/// `DismissLater` completes immediately; waiting is left to the caller's
/// timer.
pub async fn execute<A: BookingApi>(api: &A, command: Command) -> Action {
    match command {
        Command::Fetch { op, collection } => {
            let result = api.fetch(collection).await;
            match &result {
                Ok(snapshot) => debug!("fetched {} {}", snapshot.len(), collection),
                Err(e) => warn!("fetching {collection} failed: {e}"),
            }
            Action::Fetched {
                op,
                collection,
                result,
            }
        }
        Command::Create { op, request } => {
            let collection = request.collection();
            let result = api.create(&request).await;
            if let Err(e) = &result {
                warn!("creating {} failed: {e}", collection.entity());
            }
            Action::Created {
                op,
                collection,
                result,
            }
        }
        Command::Lookup { op, cpf } => {
            let result = api.find_user_by_cpf(&cpf).await;
            if let Err(e) = &result {
                warn!("looking up cpf {cpf} failed: {e}");
            }
            Action::LookedUp { op, cpf, result }
        }
        Command::DismissLater { id, .. } => Action::DismissNotification(id),
    }
}
