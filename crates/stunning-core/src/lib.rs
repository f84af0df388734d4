pub mod config;
pub mod error;
pub mod query;
pub mod session;

pub use error::CoreError;
pub use session::{ActiveClient, Session, StyleSurface, StyleVariables, Theme};
