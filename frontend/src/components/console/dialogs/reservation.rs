use common::forms::Form;
use common::resolver::{room_options, user_options, SelectOption};
use common::workflow::Dialog;
use yew::html::Scope;
use yew::prelude::*;

use super::{close_callback, submit_button, submit_callback, text_field};
use crate::components::console::helpers::named_value;
use crate::components::console::{ConsoleComponent, Msg};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

pub fn reservation_dialog(component: &ConsoleComponent, link: &Scope<ConsoleComponent>) -> Html {
    let console = &component.console;
    let draft = &console.reservation_form;
    let oninput = link.batch_callback(|e: InputEvent| {
        named_value(&e).map(|(name, value)| Msg::ReservationInput { name, value })
    });
    let onchange = link.batch_callback(|e: Event| {
        named_value(&e).map(|(name, value)| Msg::ReservationInput { name, value })
    });

    html! {
        <YwMaterialTopSheet
            title="Nova Reserva"
            open={console.is_open(Dialog::ReservationForm)}
            on_close={close_callback(link, Dialog::ReservationForm)}
        >
            <form class="entity-form" onsubmit={submit_callback(link, Form::Reservation)}>
                { select_field(
                    "Usuário",
                    "usuarioId",
                    &draft.user_id,
                    user_options(&console.store),
                    "Nenhum usuário cadastrado",
                    onchange.clone(),
                ) }
                { select_field(
                    "Sala",
                    "salaId",
                    &draft.room_id,
                    room_options(&console.store),
                    "Nenhuma sala cadastrada",
                    onchange,
                ) }
                { text_field("Data e Hora", "dataHora", "datetime-local", &draft.date_time, oninput) }
                { submit_button("Salvar", console.is_submitting(Form::Reservation)) }
            </form>
        </YwMaterialTopSheet>
    }
}

/// `<select>` over `options`, with a leading "Selecione" entry, or a single
/// disabled `empty_label` entry when there is nothing to choose.
fn select_field(
    label: &'static str,
    name: &'static str,
    selected: &str,
    options: Vec<SelectOption>,
    empty_label: &'static str,
    onchange: Callback<Event>,
) -> Html {
    let entries = if options.is_empty() {
        html! { <option value="" disabled=true selected=true>{ empty_label }</option> }
    } else {
        html! {
            <>
                <option value="" selected={selected.is_empty()}>{ "Selecione" }</option>
                { for options.into_iter().map(|option| {
                    let is_selected = option.value == selected;
                    html! {
                        <option value={option.value} selected={is_selected}>{ option.label }</option>
                    }
                }) }
            </>
        }
    };

    html! {
        <label class="form-field">
            <span class="form-label">{ label }</span>
            <select {name} {onchange}>{ entries }</select>
        </label>
    }
}
