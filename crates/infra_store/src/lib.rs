//! # infra_store: Key-Value Store Capability
//!
//! The store capability the cache-aside layer consumes: string keys, string
//! values, per-write TTL. Two backends:
//! - [`RedisStore`]: production backend over a multiplexed async connection
//! - [`MemoryStore`]: in-process backend for tests and as a fallback when
//!   Redis is unreachable at startup
//!
//! The store is a performance optimisation, never a source of record. Both
//! backends honour the TTL passed to `set`; expired entries read as absent.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod error;
mod kv;
mod memory;
mod redis;

pub use error::StoreError;
pub use kv::KvStore;
pub use memory::MemoryStore;
pub use self::redis::RedisStore;
