pub mod encode;
pub mod error;
pub mod report;
pub mod types;


pub use error::{Error, Result};
