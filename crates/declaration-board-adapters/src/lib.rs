pub mod clock;
pub mod config;
pub mod eip1193;
pub mod store;

pub use clock::SystemClockAdapter;
pub use config::AdapterConfig;
pub use eip1193::Eip1193Adapter;
pub use store::SignatureStoreAdapter;
