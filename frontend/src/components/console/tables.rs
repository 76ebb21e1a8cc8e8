//! Tables of the three collections, built from the resolver rows.

use common::resolver::{reservation_rows, room_rows, user_rows};
use common::workflow::ConsoleState;
use yew::prelude::*;

pub fn users_table(console: &ConsoleState) -> Html {
    let rows = user_rows(&console.store);
    if rows.is_empty() {
        return empty("Nenhum usuário cadastrado.");
    }

    html! {
        <table class="data-table">
            { header(&["ID", "Nome", "Email", "CPF", "Data de Nascimento", "Endereço"]) }
            <tbody>
                { for rows.into_iter().map(|row| html! {
                    <tr>
                        <td>{ row.id }</td>
                        <td>{ row.name }</td>
                        <td>{ row.email }</td>
                        <td>{ row.cpf }</td>
                        <td>{ row.birth_date }</td>
                        <td>{ row.address }</td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}

pub fn rooms_table(console: &ConsoleState) -> Html {
    let rows = room_rows(&console.store);
    if rows.is_empty() {
        return empty("Nenhuma sala cadastrada.");
    }

    html! {
        <table class="data-table">
            { header(&["ID", "Nome", "Capacidade"]) }
            <tbody>
                { for rows.into_iter().map(|row| html! {
                    <tr>
                        <td>{ row.id }</td>
                        <td>{ row.name }</td>
                        <td>{ row.capacity }</td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}

pub fn reservations_table(console: &ConsoleState) -> Html {
    let rows = reservation_rows(&console.store);
    if rows.is_empty() {
        return empty("Nenhuma reserva cadastrada.");
    }

    html! {
        <table class="data-table">
            { header(&["ID", "Usuário", "Sala", "Data e Hora"]) }
            <tbody>
                { for rows.into_iter().map(|row| html! {
                    <tr>
                        <td>{ row.id }</td>
                        <td>{ row.user }</td>
                        <td>{ row.room }</td>
                        <td>{ row.date_time }</td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}

fn header(columns: &[&'static str]) -> Html {
    html! {
        <thead>
            <tr>{ for columns.iter().map(|column| html! { <th>{ *column }</th> }) }</tr>
        </thead>
    }
}

fn empty(message: &'static str) -> Html {
    html! { <p class="empty-table">{ message }</p> }
}
