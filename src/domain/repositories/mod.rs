//! Storage interfaces for the domain layer.
//!
//! The service persists everything through [`KvStore`], a minimal
//! eventually consistent key-value capability. Concrete backends live in
//! `crate::infrastructure::store`; a `mockall` mock is generated for unit
//! tests.

pub mod kv_store;

pub use kv_store::{KvStore, StoreError, StoreResult};

#[cfg(test)]
pub use kv_store::MockKvStore;
