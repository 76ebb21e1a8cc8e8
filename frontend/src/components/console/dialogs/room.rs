use common::forms::Form;
use common::workflow::Dialog;
use yew::html::Scope;
use yew::prelude::*;

use super::{close_callback, submit_button, submit_callback, text_field};
use crate::components::console::helpers::named_value;
use crate::components::console::{ConsoleComponent, Msg};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

pub fn room_dialog(component: &ConsoleComponent, link: &Scope<ConsoleComponent>) -> Html {
    let console = &component.console;
    let draft = &console.room_form;
    let oninput = link.batch_callback(|e: InputEvent| {
        named_value(&e).map(|(name, value)| Msg::RoomInput { name, value })
    });

    html! {
        <YwMaterialTopSheet
            title="Nova Sala"
            open={console.is_open(Dialog::RoomForm)}
            on_close={close_callback(link, Dialog::RoomForm)}
        >
            <form class="entity-form" onsubmit={submit_callback(link, Form::Room)}>
                { text_field("Nome", "nome", "text", &draft.name, oninput.clone()) }
                { text_field("Capacidade", "capacidade", "number", &draft.capacity, oninput) }
                { submit_button("Salvar", console.is_submitting(Form::Room)) }
            </form>
        </YwMaterialTopSheet>
    }
}
