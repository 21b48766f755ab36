mod analyze;
mod check;
pub mod conf;
mod render;

#[cfg(test)]
mod tests;

pub use analyze::*;
pub use check::*;
pub use render::*;
