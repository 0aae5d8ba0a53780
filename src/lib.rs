#![deny(clippy::unwrap_used)]
#![allow(
    clippy::cognitive_complexity,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::cast_possible_truncation
)]

pub mod api_state;
pub mod ingest;
pub mod models;
pub mod routes;
mod server;
pub mod settings;
pub mod store;

pub use server::serve;
