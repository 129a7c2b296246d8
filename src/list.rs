use core::fmt::{Debug, Formatter, Write};

use alloc::string::String;
use alloc::vec::Vec;

/// Slot index used as the null link.
const NONE: usize = usize::MAX;

struct Node<T> {
    value: T,
    /// Arena slot of the successor, or [`NONE`].
    next: usize,
}

/// A minimal singly linked list: O(1) push at either end, O(1) length,
/// clear, and a debug rendering. Nothing else — no search, no removal,
/// no indexed access.
///
/// Nodes live in an index-addressed arena rather than behind raw owning
/// pointers, so the crate stays free of unsafe code and every node is
/// dropped exactly once, either by [`Self::clear`] or when the list itself
/// is dropped.
///
/// Example:
/// ```
/// use dskit::LinkedList;
/// let mut l = LinkedList::new();
/// assert!(l.is_empty());
/// l.push_back(10);
/// l.push_back(20);
/// l.push_front(5);
/// assert_eq!(l.len(), 3);
/// assert_eq!(l.render(""), "[5 -> 10 -> 20]");
/// ```
///
pub struct LinkedList<T> {
    slots: Vec<Node<T>>,
    /// Arena slot of the first node, or [`NONE`] when empty.
    head: usize,
    /// Arena slot of the last node, or [`NONE`] when empty.
    tail: usize,
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: NONE,
            tail: NONE,
        }
    }

    /// Returns the number of nodes. O(1).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns whether the list holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Appends `value` after the current tail. O(1).
    pub fn push_back(&mut self, value: T) {
        let idx = self.slots.len();
        self.slots.push(Node { value, next: NONE });
        if self.head == NONE {
            self.head = idx;
        } else {
            self.slots[self.tail].next = idx;
        }
        self.tail = idx;
    }

    /// Prepends `value` before the current head. O(1).
    pub fn push_front(&mut self, value: T) {
        let idx = self.slots.len();
        self.slots.push(Node { value, next: self.head });
        if self.tail == NONE {
            self.tail = idx;
        }
        self.head = idx;
    }

    /// Drops every node and resets the list to empty. O(len).
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = NONE;
        self.tail = NONE;
    }

    /// Renders the list as `label: [a -> b -> c]`, or just `[a -> b -> c]`
    /// when `label` is empty. A debugging aid, not a serialization format.
    pub fn render(&self, label: &str) -> String
    where
        T: Debug,
    {
        let mut out = String::new();
        if !label.is_empty() {
            // Writing to a String cannot fail.
            let _ = write!(out, "{}: ", label);
        }
        let _ = write!(out, "{:?}", self);
        out
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "[")?;
        let mut cur = self.head;
        while cur != NONE {
            let node = &self.slots[cur];
            write!(f, "{:?}", node.value)?;
            if node.next != NONE {
                write!(f, " -> ")?;
            }
            cur = node.next;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec;
    use std::vec::Vec;

    use super::*;

    /// Walks `next` links from the head and collects values in list order.
    fn walk<T: Copy>(list: &LinkedList<T>) -> Vec<T> {
        let mut out = Vec::new();
        let mut cur = list.head;
        while cur != NONE {
            out.push(list.slots[cur].value);
            cur = list.slots[cur].next;
        }
        out
    }

    #[test]
    fn new_is_empty() {
        let l: LinkedList<i32> = LinkedList::new();
        assert!(l.is_empty());
        assert_eq!(l.len(), 0);
        assert_eq!(l.head, NONE);
        assert_eq!(l.tail, NONE);
    }

    #[test]
    fn push_back_then_front() {
        let mut l = LinkedList::new();
        l.push_back(10);
        l.push_back(20);
        l.push_front(5);

        assert!(!l.is_empty());
        assert_eq!(l.len(), 3);
        assert_eq!(walk(&l), vec![5, 10, 20]);
    }

    #[test]
    fn push_front_into_empty_sets_tail() {
        let mut l = LinkedList::new();
        l.push_front(1);

        assert_eq!(l.len(), 1);
        assert_eq!(l.head, l.tail);
        assert_eq!(walk(&l), vec![1]);
    }

    #[test]
    fn push_back_into_empty_sets_head() {
        let mut l = LinkedList::new();
        l.push_back(1);
        l.push_back(2);

        assert_eq!(walk(&l), vec![1, 2]);
        assert_eq!(l.slots[l.tail].next, NONE);
    }

    #[test]
    fn link_walk_matches_len() {
        let mut l = LinkedList::new();
        for i in 0..10 {
            if i % 2 == 0 {
                l.push_back(i);
            } else {
                l.push_front(i);
            }
        }

        // Following next from head exactly len() times reaches null.
        let mut cur = l.head;
        for _ in 0..l.len() {
            assert_ne!(cur, NONE);
            cur = l.slots[cur].next;
        }
        assert_eq!(cur, NONE);
    }

    #[test]
    fn clear_resets_everything() {
        let mut l = LinkedList::new();
        l.push_back(1);
        l.push_back(2);
        l.push_front(0);

        l.clear();
        assert!(l.is_empty());
        assert_eq!(l.len(), 0);
        assert_eq!(l.head, NONE);
        assert_eq!(l.tail, NONE);

        // Still usable after clear.
        l.push_back(7);
        assert_eq!(walk(&l), vec![7]);
    }

    #[test]
    fn render_and_debug() {
        let mut l = LinkedList::new();
        l.push_back(10);
        l.push_back(20);
        l.push_front(5);

        assert_eq!(std::format!("{:?}", l), "[5 -> 10 -> 20]");
        assert_eq!(l.render(""), "[5 -> 10 -> 20]");
        assert_eq!(l.render("list"), "list: [5 -> 10 -> 20]");

        let empty: LinkedList<i32> = LinkedList::new();
        assert_eq!(empty.render(""), "[]");
    }
}
