pub mod collection;
pub mod id;
mod nullable;
pub mod notification;
pub mod reservation;
pub mod room;
pub mod user;
