//! Screens and application wiring for the Stunning studio client.

pub mod app;
pub mod error;
pub mod screen;

#[cfg(test)]
mod test_support;
