/// A zero-based rank into the sorted order of a symbol table.
///
/// This is an order-statistic extension and is not part of the standard
/// ordered-map APIs.
///
/// # Examples
///
/// ```
/// use ost_tree::{OrderedSymbolTable, Rank};
///
/// let mut table = OrderedSymbolTable::new();
/// table.put("a", Some(10));
/// table.put("b", Some(20));
///
/// assert_eq!(table[Rank(0)], 10);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
