mod analyzer;
mod error;

#[cfg(test)]
mod tests;

pub use analyzer::*;
pub use error::ConfigError;
