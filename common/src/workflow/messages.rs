use crate::api::ApiError;
use crate::forms::{Form, ReservationField, RoomField, UserField};
use crate::model::collection::Collection;
use crate::model::notification::NotificationId;
use crate::model::user::User;
use crate::store::Snapshot;
use crate::workflow::pending::{OpId, Operation};

/// Modal dialogs of the console. Each entity form and the CPF lookup live
/// in their own dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialog {
    UserForm,
    RoomForm,
    ReservationForm,
    Lookup,
}

/// Everything that can happen to the console: user intents and the
/// completions of backend calls.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Refresh(Collection),
    RefreshAll,
    Fetched {
        op: OpId,
        collection: Collection,
        result: Result<Snapshot, ApiError>,
    },

    EditUser(UserField, String),
    EditRoom(RoomField, String),
    EditReservation(ReservationField, String),
    EditLookup(String),

    OpenDialog(Dialog),
    CloseDialog(Dialog),

    Submit(Form),
    Created {
        op: OpId,
        collection: Collection,
        result: Result<(), ApiError>,
    },

    Lookup,
    LookedUp {
        op: OpId,
        cpf: String,
        result: Result<Option<User>, ApiError>,
    },

    DismissNotification(NotificationId),
}

impl Dialog {
    /// Whether `operation` was started from this dialog. Closing the dialog
    /// detaches those operations.
    pub fn hosts(self, operation: Operation) -> bool {
        matches!(
            (self, operation),
            (Dialog::UserForm, Operation::Create(Collection::Users))
                | (Dialog::RoomForm, Operation::Create(Collection::Rooms))
                | (Dialog::ReservationForm, Operation::Create(Collection::Reservations))
                | (Dialog::Lookup, Operation::Lookup)
        )
    }

    pub fn for_collection(collection: Collection) -> Self {
        match collection {
            Collection::Users => Dialog::UserForm,
            Collection::Rooms => Dialog::RoomForm,
            Collection::Reservations => Dialog::ReservationForm,
        }
    }
}
