pub mod config;
pub mod file_discovery;
pub mod processor;
pub mod reporter;
pub mod transformer;

pub use config::Config;
pub use file_discovery::FileDiscovery;
pub use processor::Processor;
pub use reporter::Reporter;
pub use transformer::Transformer;

pub type Result<T> = anyhow::Result<T>;
