//! Utility functions and traits for [`ChainedHashTable`]

use crate::chained_table::ChainedHashTable;
use crate::error::Result;

/// Extension trait providing convenience queries over the table
pub trait TableExtensions {
    /// Returns the keys of the table as a Vec, in no guaranteed order
    fn keys(&self) -> Vec<String>;

    /// Returns the values of the table as a Vec, in no guaranteed order
    fn values(&self) -> Vec<String>;

    /// Returns true if the table contains the given key
    fn contains_key(&self, key: &str) -> bool;
}

impl TableExtensions for ChainedHashTable {
    fn keys(&self) -> Vec<String> {
        self.iter().map(|(key, _)| key.to_owned()).collect()
    }

    fn values(&self) -> Vec<String> {
        self.iter().map(|(_, value)| value.to_owned()).collect()
    }

    fn contains_key(&self, key: &str) -> bool {
        self.retrieve(key).is_some()
    }
}

/// Creates a [`ChainedHashTable`] with the given capacity from an iterator
/// of key-value pairs. Later pairs overwrite earlier ones with equal keys.
///
/// # Errors
///
/// Returns [`crate::TableError::InvalidCapacity`] when `capacity` is zero.
#[allow(dead_code)]
pub fn from_iter<I>(capacity: usize, iter: I) -> Result<ChainedHashTable>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut table = ChainedHashTable::with_capacity(capacity)?;
    table.extend(iter);
    Ok(table)
}
