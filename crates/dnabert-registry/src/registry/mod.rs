//! Registry core: ordered alias mappings, built-in data, TOML persistence.

pub mod default;
pub mod load;
pub mod locator;
pub mod types;

pub use default::*;
pub use load::*;
pub use locator::*;
pub use types::*;
