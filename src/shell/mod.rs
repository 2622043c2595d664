// Composition root: configuration, concrete adapters, handler wiring,
// HTTP and GraphQL surfaces, background workers.

pub mod config;
pub mod graphql;
pub mod http;
pub mod seed;
pub mod state;
pub mod workers;
