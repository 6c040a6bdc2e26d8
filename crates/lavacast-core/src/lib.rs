pub mod logging;
pub mod settings;

pub mod action;
pub mod api;
pub mod display;
pub mod hash;
pub mod host;
pub mod vault;
