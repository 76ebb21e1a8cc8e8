use std::str::FromStr;

use crate::forms::validation::{self, ValidationError};
use crate::forms::UnknownField;
use crate::requests::{AddressPayload, CreateUserRequest};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub birth_date: String,
    pub address: AddressDraft,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressDraft {
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub street: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Name,
    Email,
    Cpf,
    BirthDate,
    Address(AddressField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    City,
    State,
    PostalCode,
    Street,
}

impl FromStr for UserField {
    type Err = UnknownField;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ok(match name {
            "nome" => UserField::Name,
            "email" => UserField::Email,
            "cpf" => UserField::Cpf,
            "dataNascimento" => UserField::BirthDate,
            "cidade" => UserField::Address(AddressField::City),
            "estado" => UserField::Address(AddressField::State),
            "cep" => UserField::Address(AddressField::PostalCode),
            "rua" => UserField::Address(AddressField::Street),
            other => return Err(UnknownField(other.to_string())),
        })
    }
}

impl UserDraft {
    /// Replaces one field. Address fields are merged into the nested
    /// address, leaving its siblings untouched.
    pub fn set_field(&mut self, field: UserField, value: String) {
        match field {
            UserField::Name => self.name = value,
            UserField::Email => self.email = value,
            UserField::Cpf => self.cpf = value,
            UserField::BirthDate => self.birth_date = value,
            UserField::Address(field) => self.address.set_field(field, value),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validates the draft and builds the `POST /api/usuarios` body.
    pub fn to_request(&self) -> Result<CreateUserRequest, ValidationError> {
        validation::required("Nome", &self.name)?;
        validation::email(&self.email)?;
        validation::optional_date(&self.birth_date)?;

        Ok(CreateUserRequest {
            name: self.name.clone(),
            email: self.email.trim().to_string(),
            cpf: self.cpf.clone(),
            birth_date: self.birth_date.clone(),
            address: AddressPayload {
                city: self.address.city.clone(),
                state: self.address.state.clone(),
                postal_code: self.address.postal_code.clone(),
                street: self.address.street.clone(),
            },
        })
    }
}

impl AddressDraft {
    pub fn set_field(&mut self, field: AddressField, value: String) {
        match field {
            AddressField::City => self.city = value,
            AddressField::State => self.state = value,
            AddressField::PostalCode => self.postal_code = value,
            AddressField::Street => self.street = value,
        }
    }
}
