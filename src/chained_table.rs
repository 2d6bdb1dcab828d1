use crate::error::{Result, TableError};
use crate::hash;
use tracing::{debug, trace};

/// One stored key/value pair plus the link to the next entry in its bucket.
///
/// An `Entry` is also a node in a singly-linked chain: each bucket slot owns
/// its chain head and each entry owns its successor, so unlinking during
/// removal and resize is explicit ownership transfer rather than pointer
/// bookkeeping.
#[derive(Debug)]
struct Entry {
    /// The key in the key-value pair
    key: String,
    /// The value associated with the key
    value: String,
    /// The next entry in this bucket's chain, if any
    next: Option<Box<Entry>>,
}

impl Entry {
    /// Creates a chain-terminal entry owning `key` and `value`.
    fn new(key: String, value: String) -> Self {
        Self { key, value, next: None }
    }
}

/// Outcome of [`ChainedHashTable::insert`].
///
/// The return value is the authoritative signal of an overwrite; any log
/// output is diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The key was not present; a new entry was appended to its chain.
    Inserted,
    /// The key was already present; its value was replaced in place.
    Overwrote,
}

/// Outcome of [`ChainedHashTable::remove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The key was present; its entry was unlinked and dropped.
    Removed,
    /// No entry with that key exists; the table is untouched.
    NotFound,
}

/// A hash table mapping `String` keys to `String` values with
/// separate-chaining collision resolution.
///
/// Keys are placed by the fixed djb2 hash reduced modulo the bucket count.
/// Colliding keys share a bucket, linked into a chain; new keys are appended
/// at the tail, though chain order is an implementation detail, not a
/// contract. The bucket count is fixed for the lifetime of a table and only
/// changes through the explicit, consuming [`resize`](Self::resize).
///
/// Note: this implementation is not thread-safe. Callers wanting shared
/// access must serialize operations with an external lock.
#[derive(Debug)]
pub struct ChainedHashTable {
    /// The bucket slots; each owns the head of its collision chain.
    buckets: Vec<Option<Box<Entry>>>,
    /// Current number of entries across all buckets.
    size: usize,
}

impl Extend<(String, String)> for ChainedHashTable {
    fn extend<T: IntoIterator<Item = (String, String)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl ChainedHashTable {
    /// Creates a table with exactly `capacity` empty buckets.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidCapacity`] when `capacity` is zero; the
    /// modulo reduction needs at least one bucket.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(TableError::InvalidCapacity(capacity));
        }

        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, || None);
        Ok(Self { buckets, size: 0 })
    }

    /// Inserts `key` with `value`, overwriting the value in place when the
    /// key is already present.
    ///
    /// The whole chain is scanned and keys are compared by content, never by
    /// identity, so an occupant early in the chain cannot mask a duplicate
    /// further down, and a colliding new key is always linked at the tail.
    #[allow(clippy::indexing_slicing)] // index is reduced modulo the bucket count
    pub fn insert(&mut self, key: String, value: String) -> InsertOutcome {
        let index = hash::bucket_index(&key, self.buckets.len());

        let mut cursor = &mut self.buckets[index];
        while let Some(entry) = cursor {
            if entry.key == key {
                trace!(key = %entry.key, "overwriting existing value");
                entry.value = value;
                return InsertOutcome::Overwrote;
            }
            cursor = &mut entry.next;
        }

        *cursor = Some(Box::new(Entry::new(key, value)));
        self.size = self.size.saturating_add(1);
        InsertOutcome::Inserted
    }

    /// Returns the value stored for `key`, or `None` when absent.
    ///
    /// Absence is an expected outcome, not an error. The scan covers the
    /// whole chain, including the final entry.
    #[must_use]
    pub fn retrieve(&self, key: &str) -> Option<&str> {
        let index = hash::bucket_index(key, self.buckets.len());

        let mut cursor = self.buckets.get(index)?.as_deref();
        while let Some(entry) = cursor {
            if entry.key == key {
                return Some(entry.value.as_str());
            }
            cursor = entry.next.as_deref();
        }
        None
    }

    /// Removes the entry for `key`, dropping its owned key and value.
    ///
    /// A match at the chain head relinks the bucket to the second entry; a
    /// match further in splices the predecessor to the successor. Not-found
    /// is only reported once the full chain has been scanned.
    #[allow(clippy::indexing_slicing)] // index is reduced modulo the bucket count
    pub fn remove(&mut self, key: &str) -> RemoveOutcome {
        let index = hash::bucket_index(key, self.buckets.len());
        let slot = &mut self.buckets[index];

        // Head match: the bucket takes ownership of the second entry.
        if slot.as_ref().is_some_and(|head| head.key == key) {
            if let Some(mut head) = slot.take() {
                *slot = head.next.take();
                self.size = self.size.saturating_sub(1);
            }
            return RemoveOutcome::Removed;
        }

        // Interior match: walk predecessors, comparing each successor's key.
        let Some(mut entry) = slot.as_deref_mut() else {
            return RemoveOutcome::NotFound;
        };
        loop {
            if entry.next.as_ref().is_some_and(|next| next.key == key) {
                if let Some(mut matched) = entry.next.take() {
                    entry.next = matched.next.take();
                    self.size = self.size.saturating_sub(1);
                }
                return RemoveOutcome::Removed;
            }
            match entry.next.as_deref_mut() {
                Some(next) => entry = next,
                None => return RemoveOutcome::NotFound,
            }
        }
    }

    /// Consumes the table and rebuilds it with twice the bucket count.
    ///
    /// Bucket placement depends on capacity, so every entry is rehashed
    /// into the new table, moving its key and value. Nothing is copied,
    /// dropped, or duplicated, and the old handle is gone once this
    /// returns — ownership makes stale references impossible.
    #[must_use]
    pub fn resize(mut self) -> Self {
        let doubled = self.buckets.len().saturating_mul(2);
        debug!(old_capacity = self.buckets.len(), new_capacity = doubled, "resizing table");

        let mut buckets = Vec::with_capacity(doubled);
        buckets.resize_with(doubled, || None);
        let mut grown = Self { buckets, size: 0 };

        for slot in &mut self.buckets {
            let mut chain = slot.take();
            while let Some(entry) = chain {
                let Entry { key, value, next } = *entry;
                chain = next;
                grown.insert(key, value);
            }
        }
        grown
    }

    /// Returns the number of entries in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the table holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of buckets in the table
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the current load factor (entries per bucket)
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Returns the length of each bucket's chain, in bucket order.
    ///
    /// Chain lengths expose collision behavior without touching entries,
    /// which also makes it possible to assert that an operation left
    /// unrelated buckets alone.
    #[must_use]
    pub fn chain_lengths(&self) -> Vec<usize> {
        self.buckets
            .iter()
            .map(|slot| {
                let mut length = 0_usize;
                let mut cursor = slot.as_deref();
                while let Some(entry) = cursor {
                    length = length.saturating_add(1);
                    cursor = entry.next.as_deref();
                }
                length
            })
            .collect()
    }

    /// Returns an iterator over the key/value pairs, in no guaranteed order.
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_> {
        Iter { buckets: &self.buckets, index: 0, cursor: None }
    }
}

impl Drop for ChainedHashTable {
    /// Tears the table down without chain-deep recursion.
    ///
    /// Dropping a `Box` chain through its own glue recurses once per entry,
    /// which overflows the stack on long chains; unlinking front-to-back
    /// instead drops every entry with an empty `next`.
    fn drop(&mut self) {
        for slot in &mut self.buckets {
            let mut chain = slot.take();
            while let Some(mut entry) = chain {
                chain = entry.next.take();
            }
        }
    }
}

/// Iterator over the key/value pairs of the table
#[derive(Debug)]
pub struct Iter<'a> {
    /// The bucket slots being walked
    buckets: &'a [Option<Box<Entry>>],
    /// Index of the next bucket to visit
    index: usize,
    /// Position within the current bucket's chain
    cursor: Option<&'a Entry>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.cursor {
                self.cursor = entry.next.as_deref();
                return Some((entry.key.as_str(), entry.value.as_str()));
            }
            let slot = self.buckets.get(self.index)?;
            self.index = self.index.saturating_add(1);
            self.cursor = slot.as_deref();
        }
    }
}
