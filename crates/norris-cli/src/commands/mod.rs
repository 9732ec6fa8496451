pub mod api;
pub mod auth;
pub mod facts;
pub mod utils;
