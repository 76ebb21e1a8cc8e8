use crate::forms::{Form, ReservationDraft, RoomDraft, UserDraft};
use crate::model::collection::Collection;
use crate::model::notification::{NOTIFICATION_TIMEOUT, Notification, NotificationId, Severity};
use crate::store::CollectionStore;
use crate::workflow::effects::Command;
use crate::workflow::messages::{Action, Dialog};
use crate::workflow::pending::{Operation, PendingOps};
use crate::workflow::update;

/// Whole client-side state of the console.
///
/// Fields are `pub` so the view can read them directly; mutation goes
/// through `update`.
#[derive(Debug, Clone, Default)]
pub struct ConsoleState {
    /// Last snapshot of each backend collection.
    pub store: CollectionStore,

    pub user_form: UserDraft,
    pub room_form: RoomDraft,
    pub reservation_form: ReservationDraft,

    /// Text of the CPF lookup field.
    pub lookup_cpf: String,

    pub pending: PendingOps,

    /// The single active notification, if any.
    pub notification: Option<Notification>,

    /// The dialog currently shown, if any.
    pub dialog: Option<Dialog>,

    last_notification: u64,
}

impl ConsoleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, action: Action) -> Vec<Command> {
        update::update(self, action)
    }

    pub fn is_submitting(&self, form: Form) -> bool {
        self.pending.is_busy(Operation::Create(form.collection()))
    }

    pub fn is_refreshing(&self, collection: Collection) -> bool {
        self.pending.is_busy(Operation::Refresh(collection))
    }

    pub fn is_looking_up(&self) -> bool {
        self.pending.is_busy(Operation::Lookup)
    }

    /// Any attached operation in flight.
    pub fn is_busy(&self) -> bool {
        !self.pending.is_idle()
    }

    pub fn is_open(&self, dialog: Dialog) -> bool {
        self.dialog == Some(dialog)
    }

    /// Replaces the active notification and returns the timer that will
    /// hide it.
    pub(crate) fn notify(&mut self, severity: Severity, message: impl Into<String>) -> Command {
        self.last_notification += 1;
        let id = NotificationId(self.last_notification);
        self.notification = Some(Notification {
            id,
            message: message.into(),
            severity,
            visible: true,
        });
        Command::DismissLater {
            id,
            delay: NOTIFICATION_TIMEOUT,
        }
    }
}
