//! User-facing notification texts.

use crate::api::ApiError;
use crate::model::collection::Collection;

pub fn fetch_failed(collection: Collection) -> String {
    format!("Erro ao buscar {}", collection.label())
}

pub fn created(collection: Collection) -> &'static str {
    match collection {
        Collection::Users => "Usuário cadastrado com sucesso!",
        Collection::Rooms => "Sala cadastrada com sucesso!",
        Collection::Reservations => "Reserva criada com sucesso!",
    }
}

pub fn create_failed(collection: Collection, error: &ApiError) -> String {
    format!("Erro ao criar {}: {}", collection.entity(), error.detail())
}

pub fn user_found(name: &str) -> String {
    format!("Usuário encontrado: {name}")
}

pub fn user_not_found(cpf: &str) -> String {
    format!("Nenhum usuário encontrado com o CPF {cpf}")
}

pub fn lookup_failed(error: &ApiError) -> String {
    format!("Erro ao buscar usuário: {}", error.detail())
}
