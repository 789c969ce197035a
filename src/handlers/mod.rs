pub mod health;
pub mod statistics;

pub use health::*;
pub use statistics::*;
