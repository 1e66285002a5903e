//! Configuration providers

pub mod default;
pub mod disabled;

pub use default::DefaultConfigProvider;
pub use disabled::DisabledConfigProvider;
