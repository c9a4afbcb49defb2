pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod menu;
pub mod record;
pub mod store;
pub mod week;

pub use error::{Result, StoreError};
pub use record::Record;
pub use store::RecordStore;
