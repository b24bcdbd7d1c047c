pub mod emails;
pub mod models;
pub mod ports;
pub mod services;
