//! Key-based comparison predicates and extreme selection.
//!
//! Every predicate compares a single key extracted from both operands with
//! `PartialOrd`. Unordered keys (NaN) make all five predicates return `false`;
//! `le_by`/`ge_by` are built from `lt_by || eq_by` rather than `!gt_by` so that
//! stays true for them as well.

/// `key(a) == key(b)`.
#[inline]
pub fn eq_by<T, K, F>(a: &T, b: &T, key: F) -> bool
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    key(a) == key(b)
}

/// `key(a) < key(b)`.
#[inline]
pub fn lt_by<T, K, F>(a: &T, b: &T, key: F) -> bool
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    key(a) < key(b)
}

/// `key(a) > key(b)`.
#[inline]
pub fn gt_by<T, K, F>(a: &T, b: &T, key: F) -> bool
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    key(a) > key(b)
}

/// `key(a) < key(b) || key(a) == key(b)`.
#[inline]
pub fn le_by<T, K, F>(a: &T, b: &T, key: F) -> bool
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    lt_by(a, b, &key) || eq_by(a, b, &key)
}

/// `key(a) > key(b) || key(a) == key(b)`.
#[inline]
pub fn ge_by<T, K, F>(a: &T, b: &T, key: F) -> bool
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    gt_by(a, b, &key) || eq_by(a, b, &key)
}

/// Scan `items` in order and keep the element for which `compare(candidate, winner)`
/// last returned true, starting from the first element.
///
/// With a strict comparator (`lt_*`/`gt_*`) ties keep the earliest element.
/// Returns `None` for an empty slice.
pub fn compare_and_select_by<T, F>(items: &[T], compare: F) -> Option<&T>
where
    F: Fn(&T, &T) -> bool,
{
    let (first, rest) = items.split_first()?;
    let mut winner = first;
    for item in rest {
        if compare(item, winner) {
            winner = item;
        }
    }
    Some(winner)
}
