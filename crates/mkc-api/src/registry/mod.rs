// Registry API client modules
//
// Hand-written client for the registry's read-only JSON endpoints:
// by-id lookups under `api/registry/{players,teams}/{id}` and filtered
// listings under `api/registry/{players,teams}/category/{category}`.

pub mod client;
pub mod models;
pub mod players;
pub mod teams;

pub use client::RegistryClient;
