use core::borrow::Borrow;
use core::ops::Index;

use super::OrderedSymbolTable;
use crate::{Error, Rank};

impl<K: Ord, V> OrderedSymbolTable<K, V> {
    /// Returns the number of stored keys strictly less than `key`.
    ///
    /// `key` itself need not be present: the rank of an absent key is the
    /// rank it would have after insertion. The descent uses the cached
    /// subtree sizes, so no subtree is ever enumerated.
    ///
    /// # Complexity
    ///
    /// O(height)
    ///
    /// # Examples
    ///
    /// ```
    /// use ost_tree::OrderedSymbolTable;
    ///
    /// let table = OrderedSymbolTable::from([(10, "a"), (20, "b"), (30, "c")]);
    /// assert_eq!(table.rank(&10), 0);
    /// assert_eq!(table.rank(&30), 2);
    /// // 15 is absent; one stored key is smaller.
    /// assert_eq!(table.rank(&15), 1);
    /// ```
    #[must_use]
    pub fn rank<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.rank(key)
    }

    /// Returns the key with exactly `rank` smaller keys, i.e. the key at
    /// position `rank` in sorted order.
    ///
    /// This operation and [`rank`](OrderedSymbolTable::rank) are mutual
    /// inverses:
    /// `table.rank(table.select(r)?) == r` for every valid rank, and
    /// `table.select(table.rank(&key)) == Ok(&key)` for every present key.
    ///
    /// # Complexity
    ///
    /// O(height)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `rank >= len()`. (Negative
    /// ranks are unrepresentable.)
    ///
    /// # Examples
    ///
    /// ```
    /// use ost_tree::{Error, OrderedSymbolTable};
    ///
    /// let table = OrderedSymbolTable::from([(10, "a"), (20, "b")]);
    /// assert_eq!(table.select(0), Ok(&10));
    /// assert_eq!(table.select(1), Ok(&20));
    /// assert_eq!(table.select(2), Err(Error::InvalidArgument { rank: 2, len: 2 }));
    /// ```
    pub fn select(&self, rank: usize) -> Result<&K, Error> {
        self.raw
            .select(rank)
            .map(|(key, _)| key)
            .ok_or(Error::InvalidArgument {
                rank,
                len: self.len(),
            })
    }
}

/// Indexes into the table by rank, yielding the value stored under the key
/// at that sorted position.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use ost_tree::{OrderedSymbolTable, Rank};
///
/// let table = OrderedSymbolTable::from([("a", 1), ("b", 2)]);
/// assert_eq!(table[Rank(0)], 1);
/// ```
impl<K: Ord, V> Index<Rank> for OrderedSymbolTable<K, V> {
    type Output = V;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.raw
            .select(rank.0)
            .map(|(_, value)| value)
            .expect("rank out of bounds")
    }
}
