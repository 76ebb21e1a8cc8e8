//! Shared data layer of the booking console.
//!
//! Everything the console knows about users, rooms and reservations lives
//! here, independent of the browser: the wire models, the request payloads,
//! the drafts behind each form, the collection store, the reservation join
//! used by the tables and the workflow that ties them together. The
//! `frontend` crate renders this state and supplies the HTTP transport.

pub mod api;
pub mod forms;
pub mod model;
pub mod requests;
pub mod resolver;
pub mod store;
pub mod workflow;
