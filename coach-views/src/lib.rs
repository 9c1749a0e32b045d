pub mod adapters;
pub mod format;
pub mod hooks;
pub mod ports;
pub mod services;
pub mod view_models;
