//! Update function for the booking console component.
//!
//! Input messages are translated into workflow actions, the workflow
//! mutates `ConsoleState`, and every command it returns is spawned as a
//! local task whose completion comes back as `Msg::Console`.

use std::str::FromStr;

use common::forms::UnknownField;
use common::workflow::Action;
use log::warn;
use yew::prelude::*;

use super::helpers::run_command;
use super::messages::Msg;
use super::state::ConsoleComponent;

/// Central update function for the component.
///
/// Always re-renders unless the message was discarded.
pub fn update(component: &mut ConsoleComponent, ctx: &Context<ConsoleComponent>, msg: Msg) -> bool {
    let action = match msg {
        Msg::Console(action) => action,
        Msg::UserInput { name, value } => match parse_field(&name) {
            Some(field) => Action::EditUser(field, value),
            None => return false,
        },
        Msg::RoomInput { name, value } => match parse_field(&name) {
            Some(field) => Action::EditRoom(field, value),
            None => return false,
        },
        Msg::ReservationInput { name, value } => match parse_field(&name) {
            Some(field) => Action::EditReservation(field, value),
            None => return false,
        },
    };

    for command in component.console.update(action) {
        run_command(ctx.link().clone(), component.api.clone(), command);
    }
    true
}

fn parse_field<F: FromStr<Err = UnknownField>>(name: &str) -> Option<F> {
    name.parse()
        .map_err(|e: UnknownField| warn!("ignoring input: {e}"))
        .ok()
}
