pub mod common;
pub mod database;
pub mod errors;
pub mod graphql;
pub mod model;
pub mod server;
pub mod services;
pub mod store;
