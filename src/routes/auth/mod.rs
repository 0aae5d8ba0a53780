pub mod error;
pub mod interfaces;
pub mod middleware;
pub mod token;
