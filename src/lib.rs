pub mod client;
pub mod error;
pub mod models;
pub mod store;
pub mod utils;

pub use client::ImageSourceClient;
pub use error::{Error, Result};
