use std::fmt;

/// The three backend-owned entity sets the console mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    Users,
    Rooms,
    Reservations,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::Users,
        Collection::Rooms,
        Collection::Reservations,
    ];

    /// Endpoint path of the collection, relative to the backend host.
    pub fn path(self) -> &'static str {
        match self {
            Collection::Users => "/api/usuarios",
            Collection::Rooms => "/api/salas",
            Collection::Reservations => "/api/reservas",
        }
    }

    /// Plural label used in user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            Collection::Users => "usuários",
            Collection::Rooms => "salas",
            Collection::Reservations => "reservas",
        }
    }

    /// Section heading of the collection's table.
    pub fn title(self) -> &'static str {
        match self {
            Collection::Users => "Usuários",
            Collection::Rooms => "Salas",
            Collection::Reservations => "Reservas",
        }
    }

    /// Singular noun used in user-facing messages.
    pub fn entity(self) -> &'static str {
        match self {
            Collection::Users => "usuário",
            Collection::Rooms => "sala",
            Collection::Reservations => "reserva",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
