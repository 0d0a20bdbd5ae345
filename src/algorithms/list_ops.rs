//! Algorithms over [`LinkedList`] through its public contract
//!
//! Everything here works with cursors and the list API only; node links
//! are never touched directly, so these functions compose with any node
//! pool. Operations that move elements between lists move values, not
//! nodes, and therefore never trip the pool-identity check.

use crate::error::Result;
use crate::memory::NodePool;
use crate::{FlexVec, LinkedList};

/// Number of elements equal to `value`
pub fn count<T: PartialEq, P: NodePool<T>>(list: &LinkedList<T, P>, value: &T) -> usize {
    list.iter().filter(|item| *item == value).count()
}

/// True when some element equals `value`
pub fn contains<T: PartialEq, P: NodePool<T>>(list: &LinkedList<T, P>, value: &T) -> bool {
    list.contains(value)
}

/// Position of the first element equal to `value`
pub fn find_first<T: PartialEq, P: NodePool<T>>(
    list: &LinkedList<T, P>,
    value: &T,
) -> Option<usize> {
    list.find(value)
}

/// Append clones of `other`'s elements to `list`.
pub fn append<T, P, P2>(list: &mut LinkedList<T, P>, other: &LinkedList<T, P2>) -> Result<()>
where
    T: Clone,
    P: NodePool<T>,
    P2: NodePool<T>,
{
    for item in other.iter() {
        list.push_back(item.clone())?;
    }
    Ok(())
}

/// Prepend clones of `other`'s elements to `list`, preserving their
/// order.
pub fn prepend<T, P, P2>(list: &mut LinkedList<T, P>, other: &LinkedList<T, P2>) -> Result<()>
where
    T: Clone,
    P: NodePool<T>,
    P2: NodePool<T>,
{
    let mut cursor = list.cursor_front_mut();
    for item in other.iter() {
        cursor.insert_before(item.clone())?;
    }
    Ok(())
}

/// Remove the first element equal to `value`. Returns whether one was
/// removed.
pub fn remove_first<T: PartialEq, P: NodePool<T>>(
    list: &mut LinkedList<T, P>,
    value: &T,
) -> bool {
    match list.find(value) {
        Some(index) => list.erase(index).is_ok(),
        None => false,
    }
}

/// Remove every element equal to `value`, returning the count removed.
pub fn remove_all<T: PartialEq, P: NodePool<T>>(
    list: &mut LinkedList<T, P>,
    value: &T,
) -> usize {
    let mut removed = 0;
    let mut cursor = list.cursor_front_mut();
    while let Some(current) = cursor.current() {
        if *current == *value {
            cursor.remove_current();
            removed += 1;
        } else {
            cursor.move_next();
        }
    }
    removed
}

/// Split `list` at `index`: the elements from `index` on move (by value)
/// into a new heap-pooled list, leaving the first `index` behind.
pub fn split_at<T, P: NodePool<T>>(
    list: &mut LinkedList<T, P>,
    index: usize,
) -> Result<LinkedList<T>> {
    let mut tail = LinkedList::new();
    let mut cursor = list.cursor_at_mut(index)?;
    while let Some(value) = cursor.remove_current() {
        tail.push_back(value)?;
    }
    Ok(tail)
}

/// Clones of `list[start, end)` as a new heap-pooled list.
pub fn slice<T: Clone, P: NodePool<T>>(
    list: &LinkedList<T, P>,
    start: usize,
    end: usize,
) -> Result<LinkedList<T>> {
    crate::error::check_range(start, end, list.len())?;
    let mut result = LinkedList::new();
    for item in list.iter().skip(start).take(end - start) {
        result.push_back(item.clone())?;
    }
    Ok(result)
}

/// The list's elements cloned into a contiguous array.
pub fn to_flex_vec<T: Clone, P: NodePool<T>>(list: &LinkedList<T, P>) -> Result<FlexVec<T>> {
    let mut vec = FlexVec::with_capacity(list.len().max(1))?;
    for item in list.iter() {
        vec.push_back(item.clone())?;
    }
    Ok(vec)
}
