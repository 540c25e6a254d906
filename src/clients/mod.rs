pub mod blocking;
pub mod endpoints;
pub mod hevy;
pub mod http;
pub mod models;
