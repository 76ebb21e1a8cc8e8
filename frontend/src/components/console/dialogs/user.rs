use common::forms::Form;
use common::workflow::Dialog;
use yew::html::Scope;
use yew::prelude::*;

use super::{close_callback, submit_button, submit_callback, text_field};
use crate::components::console::helpers::named_value;
use crate::components::console::{ConsoleComponent, Msg};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

pub fn user_dialog(component: &ConsoleComponent, link: &Scope<ConsoleComponent>) -> Html {
    let console = &component.console;
    let draft = &console.user_form;
    let oninput = link.batch_callback(|e: InputEvent| {
        named_value(&e).map(|(name, value)| Msg::UserInput { name, value })
    });

    html! {
        <YwMaterialTopSheet
            title="Novo Usuário"
            open={console.is_open(Dialog::UserForm)}
            on_close={close_callback(link, Dialog::UserForm)}
        >
            <form class="entity-form" onsubmit={submit_callback(link, Form::User)}>
                { text_field("Nome", "nome", "text", &draft.name, oninput.clone()) }
                { text_field("Email", "email", "email", &draft.email, oninput.clone()) }
                { text_field("CPF", "cpf", "text", &draft.cpf, oninput.clone()) }
                { text_field("Data de Nascimento", "dataNascimento", "date", &draft.birth_date, oninput.clone()) }
                <fieldset class="form-group">
                    <legend>{ "Endereço" }</legend>
                    { text_field("Rua", "rua", "text", &draft.address.street, oninput.clone()) }
                    { text_field("Cidade", "cidade", "text", &draft.address.city, oninput.clone()) }
                    { text_field("Estado", "estado", "text", &draft.address.state, oninput.clone()) }
                    { text_field("CEP", "cep", "text", &draft.address.postal_code, oninput) }
                </fieldset>
                { submit_button("Salvar", console.is_submitting(Form::User)) }
            </form>
        </YwMaterialTopSheet>
    }
}
