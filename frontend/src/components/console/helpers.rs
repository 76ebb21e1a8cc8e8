//! Utility functions for the booking console component.
//!
//! - **Command execution**: spawning backend calls and notification timers
//!   and routing their completions back to the component.
//! - **Input routing**: reading the `name`/`value` pair of the input or
//!   select that fired an event.

use common::workflow::{execute, Action, Command};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::api::HttpBookingApi;

use super::messages::Msg;
use super::state::ConsoleComponent;

/// Runs `command` in the background.
///
/// Backend calls complete with the workflow action `execute` returns;
/// `DismissLater` waits for its delay first. If the component is gone by
/// then, Yew drops the message.
pub fn run_command(link: Scope<ConsoleComponent>, api: HttpBookingApi, command: Command) {
    match command {
        Command::DismissLater { id, delay } => {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            spawn_local(async move {
                TimeoutFuture::new(millis).await;
                link.send_message(Msg::Console(Action::DismissNotification(id)));
            });
        }
        command => spawn_local(async move {
            let completion = execute(&api, command).await;
            link.send_message(Msg::Console(completion));
        }),
    }
}

/// `(name, value)` of the `<input>` or `<select>` targeted by `event`.
pub fn named_value<E: TargetCast>(event: &E) -> Option<(String, String)> {
    if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    event
        .target_dyn_into::<HtmlSelectElement>()
        .map(|select| (select.name(), select.value()))
}
