//! Dialogs of the booking console, one per entity form plus the CPF lookup.
//!
//! Every dialog is a `YwMaterialTopSheet` whose `open` prop follows the
//! workflow's open dialog. Closing one (✕ or backdrop) emits
//! `Action::CloseDialog`, which also detaches whatever it had in flight.

mod lookup;
mod reservation;
mod room;
mod user;

pub use lookup::lookup_dialog;
pub use reservation::reservation_dialog;
pub use room::room_dialog;
pub use user::user_dialog;

use common::forms::Form;
use common::workflow::{Action, Dialog};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ConsoleComponent;
use super::view::spinner;

fn close_callback(link: &Scope<ConsoleComponent>, dialog: Dialog) -> Callback<()> {
    link.callback(move |_| Msg::Console(Action::CloseDialog(dialog)))
}

fn submit_callback(link: &Scope<ConsoleComponent>, form: Form) -> Callback<SubmitEvent> {
    link.callback(move |e: SubmitEvent| {
        e.prevent_default();
        Msg::Console(Action::Submit(form))
    })
}

/// Labelled `<input>` whose `name` is the wire name of the field it edits.
fn text_field(
    label: &'static str,
    name: &'static str,
    input_type: &'static str,
    value: &str,
    oninput: Callback<InputEvent>,
) -> Html {
    html! {
        <label class="form-field">
            <span class="form-label">{ label }</span>
            <input type={input_type} {name} value={value.to_string()} {oninput} />
        </label>
    }
}

/// Submit button, disabled with a spinner while `busy`.
fn submit_button(label: &'static str, busy: bool) -> Html {
    html! {
        <div class="form-actions">
            <button type="submit" class="primary-btn" disabled={busy}>
                { if busy { spinner() } else { html! { <span>{ label }</span> } } }
            </button>
        </div>
    }
}
