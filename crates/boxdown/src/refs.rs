//! Link reference table: document-level state mapping reference names to
//! link/title pairs.
//!
//! The scanned token set defines no reference-definition syntax, so the table
//! is populated only by renderers and extensions. It is cleared at the start
//! and end of every render pass.

use crate::buffer::ByteBuffer;

const BUCKETS: usize = 8;

/// One named link reference.
#[derive(Debug, Clone)]
pub struct LinkRef {
    id: u8,
    name: Vec<u8>,
    /// Link target text.
    pub link: ByteBuffer,
    /// Title text.
    pub title: ByteBuffer,
}

impl LinkRef {
    /// The reference name this entry was inserted under.
    #[must_use]
    pub fn name(&self) -> &[u8] {
        &self.name
    }
}

/// A small fixed-bucket hash table of [`LinkRef`] entries.
///
/// Bucket placement uses an 8-bit case-insensitive hash; the hash is a coarse
/// grouping key, so lookups additionally compare names under ASCII case
/// folding rather than trusting hash equality alone.
#[derive(Debug, Clone, Default)]
pub struct LinkRefTable {
    buckets: [Vec<LinkRef>; BUCKETS],
}

impl LinkRefTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new entry for `name` at the head of its bucket and returns
    /// it for filling in `link` and `title`.
    ///
    /// Inserting the same name twice shadows the older entry: lookups scan
    /// head-first and return the newest match.
    pub fn insert(&mut self, name: &[u8]) -> &mut LinkRef {
        let id = hash(name);
        let bucket = &mut self.buckets[usize::from(id) % BUCKETS];
        bucket.insert(
            0,
            LinkRef {
                id,
                name: name.to_vec(),
                link: ByteBuffer::new(),
                title: ByteBuffer::new(),
            },
        );
        &mut bucket[0]
    }

    /// Finds the newest entry whose name matches `name` under ASCII case
    /// folding.
    #[must_use]
    pub fn lookup(&self, name: &[u8]) -> Option<&LinkRef> {
        let id = hash(name);
        self.buckets[usize::from(id) % BUCKETS]
            .iter()
            .find(|r| r.id == id && r.name.eq_ignore_ascii_case(name))
    }

    /// Drops every entry in every bucket.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
    }

    /// The total number of entries across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Whether the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}

/// Case-insensitive polynomial hash folding each byte into an 8-bit
/// accumulator: `h = lower(b) + (h << 6) + (h << 16) - h`, truncated to
/// 8 bits after every byte.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn hash(name: &[u8]) -> u8 {
    let mut hash: u8 = 0;
    for &b in name {
        let h = u32::from(hash);
        hash = (u32::from(b.to_ascii_lowercase()) + (h << 6) + (h << 16) - h) as u8;
    }
    hash
}
