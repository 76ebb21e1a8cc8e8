//! State transitions of the console.

use log::debug;

use crate::api::ApiError;
use crate::forms::{Form, validation};
use crate::model::collection::Collection;
use crate::model::notification::{NotificationId, Severity};
use crate::model::user::User;
use crate::requests::CreateRequest;
use crate::store::Snapshot;
use crate::workflow::effects::Command;
use crate::workflow::messages::{Action, Dialog};
use crate::workflow::pending::{OpId, Operation};
use crate::workflow::state::ConsoleState;
use crate::workflow::texts;

/// Applies `action` to `state` and returns the commands the runtime must run.
pub fn update(state: &mut ConsoleState, action: Action) -> Vec<Command> {
    match action {
        Action::Refresh(collection) => vec![refresh(state, collection)],
        Action::RefreshAll => Collection::ALL
            .into_iter()
            .map(|collection| refresh(state, collection))
            .collect(),
        Action::Fetched {
            op,
            collection,
            result,
        } => fetched(state, op, collection, result),

        Action::EditUser(field, value) => {
            state.user_form.set_field(field, value);
            Vec::new()
        }
        Action::EditRoom(field, value) => {
            state.room_form.set_field(field, value);
            Vec::new()
        }
        Action::EditReservation(field, value) => {
            state.reservation_form.set_field(field, value);
            Vec::new()
        }
        Action::EditLookup(value) => {
            state.lookup_cpf = value;
            Vec::new()
        }

        Action::OpenDialog(dialog) => {
            if let Some(current) = state.dialog.filter(|current| *current != dialog) {
                close_dialog(state, current);
            }
            state.dialog = Some(dialog);
            Vec::new()
        }
        Action::CloseDialog(dialog) => {
            close_dialog(state, dialog);
            Vec::new()
        }

        Action::Submit(form) => submit(state, form),
        Action::Created {
            op,
            collection,
            result,
        } => created(state, op, collection, result),

        Action::Lookup => lookup(state),
        Action::LookedUp { op, cpf, result } => looked_up(state, op, &cpf, result),

        Action::DismissNotification(id) => {
            dismiss(state, id);
            Vec::new()
        }
    }
}

fn refresh(state: &mut ConsoleState, collection: Collection) -> Command {
    let op = state.pending.begin(Operation::Refresh(collection));
    Command::Fetch { op, collection }
}

fn fetched(
    state: &mut ConsoleState,
    op: OpId,
    collection: Collection,
    result: Result<Snapshot, ApiError>,
) -> Vec<Command> {
    if state.pending.finish(op).is_none() {
        debug!("ignoring completion of unknown refresh {op:?}");
        return Vec::new();
    }

    match result {
        Ok(snapshot) => {
            if !state.store.apply(op, snapshot) {
                debug!("discarding stale {collection} snapshot from {op:?}");
            }
            Vec::new()
        }
        Err(_) if state.store.has_newer(collection, op) => {
            debug!("ignoring failure of superseded {collection} refresh {op:?}");
            Vec::new()
        }
        Err(_) => vec![state.notify(Severity::Error, texts::fetch_failed(collection))],
    }
}

fn close_dialog(state: &mut ConsoleState, dialog: Dialog) {
    if state.dialog != Some(dialog) {
        return;
    }
    state.dialog = None;

    let detached = state.pending.detach_where(|operation| dialog.hosts(operation));
    if !detached.is_empty() {
        debug!("detached {detached:?} on closing {dialog:?}");
    }
}

fn submit(state: &mut ConsoleState, form: Form) -> Vec<Command> {
    let collection = form.collection();
    if state.pending.is_busy(Operation::Create(collection)) {
        debug!("{} submission already in flight", collection.entity());
        return Vec::new();
    }

    let request = match form {
        Form::User => state.user_form.to_request().map(CreateRequest::User),
        Form::Room => state.room_form.to_request().map(CreateRequest::Room),
        Form::Reservation => state
            .reservation_form
            .to_request()
            .map(CreateRequest::Reservation),
    };

    match request {
        Ok(request) => {
            if let Ok(body) = request.to_json() {
                debug!("sending {} payload: {body}", collection.entity());
            }
            let op = state.pending.begin(Operation::Create(collection));
            vec![Command::Create { op, request }]
        }
        Err(e) => vec![state.notify(Severity::Warning, e.to_string())],
    }
}

fn created(
    state: &mut ConsoleState,
    op: OpId,
    collection: Collection,
    result: Result<(), ApiError>,
) -> Vec<Command> {
    let Some(entry) = state.pending.finish(op) else {
        debug!("ignoring completion of unknown create {op:?}");
        return Vec::new();
    };

    match (result, entry.detached) {
        (Ok(()), false) => {
            let notice = state.notify(Severity::Success, texts::created(collection));
            let refresh = refresh(state, collection);
            reset_form(state, collection);
            let dialog = Dialog::for_collection(collection);
            if state.dialog == Some(dialog) {
                state.dialog = None;
            }
            vec![notice, refresh]
        }
        (Ok(()), true) => {
            debug!("detached {} create succeeded, refreshing", collection.entity());
            vec![refresh(state, collection)]
        }
        (Err(e), false) => vec![state.notify(Severity::Error, texts::create_failed(collection, &e))],
        (Err(e), true) => {
            debug!("dropping failure of detached {} create: {e}", collection.entity());
            Vec::new()
        }
    }
}

fn reset_form(state: &mut ConsoleState, collection: Collection) {
    match collection {
        Collection::Users => state.user_form.reset(),
        Collection::Rooms => state.room_form.reset(),
        Collection::Reservations => state.reservation_form.reset(),
    }
}

fn lookup(state: &mut ConsoleState) -> Vec<Command> {
    if state.pending.is_busy(Operation::Lookup) {
        return Vec::new();
    }
    if let Err(e) = validation::cpf(&state.lookup_cpf) {
        return vec![state.notify(Severity::Warning, e.to_string())];
    }

    let cpf = state.lookup_cpf.trim().to_string();
    let op = state.pending.begin(Operation::Lookup);
    vec![Command::Lookup { op, cpf }]
}

fn looked_up(
    state: &mut ConsoleState,
    op: OpId,
    cpf: &str,
    result: Result<Option<User>, ApiError>,
) -> Vec<Command> {
    let Some(entry) = state.pending.finish(op) else {
        return Vec::new();
    };
    if entry.detached {
        debug!("dropping result of detached lookup for {cpf}");
        return Vec::new();
    }

    let notice = match result {
        Ok(Some(user)) => state.notify(Severity::Success, texts::user_found(&user.name)),
        Ok(None) => state.notify(Severity::Warning, texts::user_not_found(cpf)),
        Err(e) => state.notify(Severity::Error, texts::lookup_failed(&e)),
    };

    state.lookup_cpf.clear();
    if state.dialog == Some(Dialog::Lookup) {
        state.dialog = None;
    }
    vec![notice]
}

fn dismiss(state: &mut ConsoleState, id: NotificationId) {
    if let Some(notification) = state.notification.as_mut() {
        if notification.id == id {
            notification.visible = false;
        }
    }
}
