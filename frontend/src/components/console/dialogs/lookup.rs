use common::workflow::{Action, Dialog};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::{close_callback, submit_button, text_field};
use crate::components::console::{ConsoleComponent, Msg};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

pub fn lookup_dialog(component: &ConsoleComponent, link: &Scope<ConsoleComponent>) -> Html {
    let console = &component.console;
    let oninput = link.callback(|e: InputEvent| {
        let value = e.target_unchecked_into::<HtmlInputElement>().value();
        Msg::Console(Action::EditLookup(value))
    });
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Console(Action::Lookup)
    });

    html! {
        <YwMaterialTopSheet
            title="Buscar Usuário por CPF"
            open={console.is_open(Dialog::Lookup)}
            on_close={close_callback(link, Dialog::Lookup)}
        >
            <form class="entity-form" {onsubmit}>
                { text_field("CPF", "cpf", "text", &console.lookup_cpf, oninput) }
                { submit_button("Buscar", console.is_looking_up()) }
            </form>
        </YwMaterialTopSheet>
    }
}
