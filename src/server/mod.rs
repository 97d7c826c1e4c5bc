pub mod app;
mod deserializers;
pub mod error;
pub mod extractors;
pub mod routes;
