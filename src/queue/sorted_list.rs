//! Singly linked list kept in non-decreasing key order.
//!
//! Insertion walks past every element whose key is less than or equal to the
//! new key, so equal keys leave in insertion order. Removal always detaches
//! the head.
//!
//! # Complexity
//! O(n) insert, O(1) `remove_min` / `peek_min`.

struct Node<K, V> {
    key: K,
    value: V,
    next: Option<Box<Node<K, V>>>,
}

/// Stable priority queue backed by a singly linked list.
///
/// # Example
///
/// ```
/// use sched_sim::queue::SortedList;
///
/// let mut list = SortedList::new();
/// list.insert(5, "a");
/// list.insert(1, "b");
/// list.insert(5, "c");
///
/// assert_eq!(list.remove_min(), Some((1, "b")));
/// assert_eq!(list.remove_min(), Some((5, "a")));
/// assert_eq!(list.remove_min(), Some((5, "c")));
/// assert_eq!(list.remove_min(), None);
/// ```
pub struct SortedList<K, V> {
    head: Option<Box<Node<K, V>>>,
    len: usize,
}

impl<K: Ord, V> SortedList<K, V> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Inserts `value` before the first element with a strictly greater key.
    pub fn insert(&mut self, key: K, value: V) {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.key <= key) {
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
        }
        let next = cursor.take();
        *cursor = Some(Box::new(Node { key, value, next }));
        self.len += 1;
    }

    /// Detaches the head (smallest key, earliest among ties).
    pub fn remove_min(&mut self) -> Option<(K, V)> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.next;
            self.len -= 1;
            (node.key, node.value)
        })
    }

    /// Borrows the head without removing it.
    pub fn peek_min(&self) -> Option<(&K, &V)> {
        self.head.as_ref().map(|node| (&node.key, &node.value))
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Iterates from smallest to largest key.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<K: Ord, V> Default for SortedList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlink iteratively; the default recursive drop can overflow the stack on
// long lists.
impl<K, V> Drop for SortedList<K, V> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<K: std::fmt::Debug, V: std::fmt::Debug> std::fmt::Debug for SortedList<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut entries = f.debug_list();
        let mut link = self.head.as_deref();
        while let Some(node) = link {
            entries.entry(&(&node.key, &node.value));
            link = node.next.as_deref();
        }
        entries.finish()
    }
}

/// Borrowing iterator over a [`SortedList`].
pub struct Iter<'a, K, V> {
    next: Option<&'a Node<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            (&node.key, &node.value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_tie_order() {
        let mut list = SortedList::new();
        for (i, p) in [5, 1, 5, 3].into_iter().enumerate() {
            list.insert(p, i);
        }

        let mut drained = Vec::new();
        while let Some(entry) = list.remove_min() {
            drained.push(entry);
        }
        // The two 5s come out in insertion order (indices 0 then 2).
        assert_eq!(drained, vec![(1, 1), (3, 3), (5, 0), (5, 2)]);
    }

    #[test]
    fn test_insert_at_head_and_tail() {
        let mut list = SortedList::new();
        list.insert(3, 'b');
        list.insert(1, 'a');
        list.insert(9, 'c');
        let keys: Vec<i32> = list.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![1, 3, 9]);
        assert_eq!(list.peek_min(), Some((&1, &'a')));
    }

    #[test]
    fn test_len_tracking() {
        let mut list = SortedList::new();
        assert!(list.is_empty());
        list.insert(2, ());
        list.insert(2, ());
        assert_eq!(list.len(), 2);
        list.remove_min();
        assert_eq!(list.len(), 1);
        list.remove_min();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_remove_from_empty() {
        let mut list: SortedList<i32, &str> = SortedList::new();
        assert_eq!(list.remove_min(), None);
        assert_eq!(list.peek_min(), None);
    }

    #[test]
    fn test_long_list_drop() {
        let mut list = SortedList::new();
        // Descending keys land at the head, so each insert is O(1).
        for i in 0..100_000i64 {
            list.insert(-i, i);
        }
        assert_eq!(list.len(), 100_000);
        assert_eq!(list.peek_min(), Some((&-99_999, &99_999)));
        drop(list);
    }

    #[test]
    fn test_debug_format() {
        let mut list = SortedList::new();
        list.insert(2, "x");
        list.insert(1, "y");
        assert_eq!(format!("{list:?}"), r#"[(1, "y"), (2, "x")]"#);
    }
}
