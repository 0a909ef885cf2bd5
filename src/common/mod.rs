pub mod config;
pub mod device;
pub mod error;

pub use config::{Config, ModelConfiguration};
pub use device::Placement;
