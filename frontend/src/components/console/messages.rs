use common::workflow::Action;

pub enum Msg {
    /// Forwarded as is to the console workflow.
    Console(Action),
    /// An input of the user form changed; `name` is the input's name attribute.
    UserInput { name: String, value: String },
    RoomInput { name: String, value: String },
    ReservationInput { name: String, value: String },
}
