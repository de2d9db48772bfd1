mod error;
pub use error::Error;

pub mod driver;
pub use driver::{Command, Connection};

pub mod json;
pub use json::DocumentSerializer;

pub mod resolve;
pub use resolve::{DefaultTypeResolver, InstanceTypeResolver, PropertyHandler, TypeKey};

pub mod schema;

pub mod stmt;

/// A Result type alias that uses tabula's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
