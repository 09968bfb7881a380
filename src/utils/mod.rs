pub mod config;
pub mod logging;
pub mod path;
pub mod slug;
