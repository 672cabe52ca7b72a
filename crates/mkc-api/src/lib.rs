// mkc-api: Async Rust client for the Mario Kart Central registry API

pub mod error;
pub mod registry;
pub mod transport;

pub use error::Error;
pub use registry::RegistryClient;
pub use registry::client::DEFAULT_BASE_URL;
pub use transport::TransportConfig;
