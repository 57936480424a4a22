//! Storage layer for sensor-gateway
//!
//! `ReadingStore` is the seam between the service layer and the database.
//! `PgReadingStore` opens one PostgreSQL connection per operation and closes it
//! on every exit path. With the `test-support` feature, `MemoryReadingStore`
//! keeps readings in process for tests of the layers above.

mod error;
#[cfg(any(test, feature = "test-support"))]
pub mod memory;
mod pg_migrations;
mod pg_storage;
pub mod traits;

pub use error::StorageError;
#[cfg(any(test, feature = "test-support"))]
pub use memory::MemoryReadingStore;
pub use pg_storage::PgReadingStore;
pub use traits::ReadingStore;
