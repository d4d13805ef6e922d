pub mod admin;
pub mod backend;
pub mod models;
pub mod sequencing;
pub mod session;
