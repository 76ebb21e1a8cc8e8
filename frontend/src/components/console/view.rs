//! View rendering for the booking console.
//!
//! Layout: an app bar with the global actions, the active notification,
//! then one section per collection (users, rooms, reservations), each with
//! its own "new" button and table. Dialogs are rendered last so they stack
//! above the page.

use common::model::collection::Collection;
use common::model::notification::Notification;
use common::workflow::{Action, Dialog};
use yew::html::Scope;
use yew::prelude::*;

use super::dialogs::{lookup_dialog, reservation_dialog, room_dialog, user_dialog};
use super::messages::Msg;
use super::state::ConsoleComponent;
use super::tables::{reservations_table, rooms_table, users_table};

pub fn view(component: &ConsoleComponent, ctx: &Context<ConsoleComponent>) -> Html {
    let link = ctx.link();
    let console = &component.console;

    html! {
        <div class="console-root">
            { build_app_bar(component, link) }
            {
                match &console.notification {
                    Some(notification) if notification.visible => build_notification(notification, link),
                    _ => html! {},
                }
            }
            <main class="console-sections">
                { build_section(component, link, Collection::Users, "Novo Usuário", users_table(console)) }
                { build_section(component, link, Collection::Rooms, "Nova Sala", rooms_table(console)) }
                { build_section(component, link, Collection::Reservations, "Nova Reserva", reservations_table(console)) }
            </main>

            { user_dialog(component, link) }
            { room_dialog(component, link) }
            { reservation_dialog(component, link) }
            { lookup_dialog(component, link) }
        </div>
    }
}

fn build_app_bar(component: &ConsoleComponent, link: &Scope<ConsoleComponent>) -> Html {
    let refreshing = Collection::ALL
        .iter()
        .any(|collection| component.console.is_refreshing(*collection));

    html! {
        <header class="app-bar">
            <span class="app-bar-title">{ "Sistema de Gerenciamento de Salas" }</span>
            <div class="app-bar-actions">
                { icon_button("search", "Buscar por CPF", link.callback(|_| Msg::Console(Action::OpenDialog(Dialog::Lookup))), false) }
                { icon_button("refresh", "Atualizar", link.callback(|_| Msg::Console(Action::RefreshAll)), refreshing) }
            </div>
        </header>
    }
}

fn build_notification(notification: &Notification, link: &Scope<ConsoleComponent>) -> Html {
    let id = notification.id;
    html! {
        <div class={classes!("notification", notification.severity.as_str())} role="alert">
            <span class="notification-message">{ notification.message.clone() }</span>
            <button
                type="button"
                class="notification-close"
                onclick={link.callback(move |_| Msg::Console(Action::DismissNotification(id)))}
            >
                { "✕" }
            </button>
        </div>
    }
}

fn build_section(
    component: &ConsoleComponent,
    link: &Scope<ConsoleComponent>,
    collection: Collection,
    new_label: &'static str,
    table: Html,
) -> Html {
    let dialog = Dialog::for_collection(collection);
    let body = if component.console.is_refreshing(collection) {
        spinner()
    } else {
        table
    };

    html! {
        <section class="console-section">
            <div class="section-header">
                <h2>{ collection.title() }</h2>
                { icon_button("add", new_label, link.callback(move |_| Msg::Console(Action::OpenDialog(dialog))), false) }
            </div>
            { body }
        </section>
    }
}

fn icon_button(icon: &'static str, label: &'static str, onclick: Callback<MouseEvent>, disabled: bool) -> Html {
    html! {
        <button type="button" class="icon-btn" title={label} {onclick} {disabled}>
            <span class="material-icons">{ icon }</span>
            <span class="icon-btn-label">{ label }</span>
        </button>
    }
}

pub(super) fn spinner() -> Html {
    html! { <div class="spinner" aria-busy="true" /> }
}
