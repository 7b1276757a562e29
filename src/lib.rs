pub mod args;
pub mod data_model;
pub mod notif;
pub mod server;
pub mod state;
pub mod util;
