//! # Chaintable
//!
//! A separate-chaining hash table mapping `String` keys to `String` values.
//!
//! Every key is placed by the fixed djb2 string hash reduced modulo the
//! bucket count. Colliding keys share a bucket, linked into a singly-chained
//! list, so a full table keeps accepting entries. Growth is never automatic:
//! [`ChainedHashTable::resize`] is an explicit operation that consumes the
//! table and rehashes every entry into a fresh one with twice the buckets.
//!
//! The table is single-threaded by design; callers wanting shared access
//! must serialize operations with an external lock.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chaintable::{ChainedHashTable, InsertOutcome};
//!
//! # fn main() -> Result<(), chaintable::TableError> {
//! // Two buckets on purpose: the third insert is forced to chain.
//! let mut table = ChainedHashTable::with_capacity(2)?;
//!
//! table.insert("line_1".to_owned(), "Tiny hash table".to_owned());
//! table.insert("line_2".to_owned(), "Filled beyond capacity".to_owned());
//! table.insert("line_3".to_owned(), "Linked list saves the day!".to_owned());
//!
//! assert_eq!(table.retrieve("line_2"), Some("Filled beyond capacity"));
//!
//! // Inserting an existing key overwrites its value in place.
//! let outcome = table.insert("line_1".to_owned(), "Tinier hash table".to_owned());
//! assert_eq!(outcome, InsertOutcome::Overwrote);
//! assert_eq!(table.retrieve("line_1"), Some("Tinier hash table"));
//!
//! // Resize consumes the old table and doubles the bucket count.
//! let table = table.resize();
//! assert_eq!(table.capacity(), 4);
//! assert_eq!(table.retrieve("line_3"), Some("Linked list saves the day!"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Removal
//!
//! ```rust
//! use chaintable::{ChainedHashTable, RemoveOutcome};
//!
//! # fn main() -> Result<(), chaintable::TableError> {
//! let mut table = ChainedHashTable::with_capacity(4)?;
//! table.insert("crab".to_owned(), "ferris".to_owned());
//!
//! assert_eq!(table.remove("crab"), RemoveOutcome::Removed);
//! assert_eq!(table.remove("crab"), RemoveOutcome::NotFound);
//! assert_eq!(table.retrieve("crab"), None);
//! # Ok(())
//! # }
//! ```

/// Module implementing the separate-chaining hash table
mod chained_table;
/// Error types for table construction
mod error;
/// The fixed djb2 hash function and its bucket-index reduction
mod hash;
/// Utility functions and traits for the table
mod utils;

pub use chained_table::{ChainedHashTable, InsertOutcome, Iter, RemoveOutcome};
pub use error::{Result, TableError};
pub use utils::TableExtensions;
