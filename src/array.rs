use core::fmt::{Debug, Formatter, Write};
use core::ops::{Index, IndexMut};

use alloc::string::String;
use alloc::vec::Vec;

use crate::OutOfRange;

/// A growable array of `T` with both _unchecked_ and _checked_ access,
/// plus the small utilities that keep showing up in array exercises.
///
/// ## Summary of supported operations
///
/// - Get or set element at index, via `a[i]` (unchecked contract) or
///   [`Self::at`] / [`Self::at_mut`] (checked, total).
///
/// - Push/pop at the back; insert/erase at an arbitrary index.
///
/// - Resize, clear, fill, reverse, sort.
///
/// - Linear [`Self::find`] and [`Self::count`].
///
/// ## The two access contracts
///
/// `a[i]` requires `i < a.len()`; violating that is a caller bug and traps.
/// [`Self::at`] is total: any out-of-range index comes back as
/// `Err(`[`OutOfRange`]`)` and the array is left untouched. The same split
/// applies to [`Self::front`]/[`Self::back`] (non-empty precondition)
/// versus the checked mutators [`Self::insert`] and [`Self::remove`].
///
/// ## Iterator support
///
/// - Implements [`FromIterator`] and can therefore be
///   [`Iterator::collect`]ed into.
/// - `&Array<T>`, `&mut Array<T>` and `Array<T>` all implement
///   [`IntoIterator`], so `for x in &a` works as expected.
///
/// Example:
/// ```
/// use dskit::Array;
/// let mut a = Array::from([5, 2, 8, 1, 9]);
/// a.sort();
/// assert_eq!(a.as_slice(), &[1, 2, 5, 8, 9]);
/// a.reverse();
/// assert_eq!(a[0], 9);
/// assert_eq!(a.find(&8), Some(1));
/// assert!(a.at(5).is_err());
/// ```
///
#[derive(Clone, Default, Eq, PartialEq)]
pub struct Array<T> {
    data: Vec<T>,
}

impl<T> Array<T> {
    /// Creates an empty array.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty array with room for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { data: Vec::with_capacity(capacity) }
    }

    /// Creates an array of `len` default-valued elements.
    ///
    /// ```
    /// use dskit::Array;
    /// let a: Array<i32> = Array::with_len(3);
    /// assert_eq!(a.as_slice(), &[0, 0, 0]);
    /// ```
    pub fn with_len(len: usize) -> Self
    where
        T: Default + Clone,
    {
        Self { data: alloc::vec![T::default(); len] }
    }

    /// Creates an array of `len` copies of `value`.
    pub fn filled(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self { data: alloc::vec![value; len] }
    }

    /// Creates an array by cloning an existing slice.
    pub fn from_slice(slice: &[T]) -> Self
    where
        T: Clone,
    {
        Self { data: slice.to_vec() }
    }

    /// Returns the number of elements currently in the array.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns how many elements fit in the current backing storage.
    /// Always `>= self.len()`.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns a reference to the element at `index`, or
    /// `Err(OutOfRange)` when `index >= self.len()`.
    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        self.data.get(index).ok_or(OutOfRange { index, len: self.data.len() })
    }

    /// Returns a mutable reference to the element at `index`, or
    /// `Err(OutOfRange)` when `index >= self.len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        let len = self.data.len();
        self.data.get_mut(index).ok_or(OutOfRange { index, len })
    }

    /// Returns a reference to the first element.
    /// The array must be non-empty.
    pub fn front(&self) -> &T {
        &self.data[0]
    }

    /// Returns a mutable reference to the first element.
    /// The array must be non-empty.
    pub fn front_mut(&mut self) -> &mut T {
        &mut self.data[0]
    }

    /// Returns a reference to the last element.
    /// The array must be non-empty.
    pub fn back(&self) -> &T {
        &self.data[self.data.len() - 1]
    }

    /// Returns a mutable reference to the last element.
    /// The array must be non-empty.
    pub fn back_mut(&mut self) -> &mut T {
        let last = self.data.len() - 1;
        &mut self.data[last]
    }

    /// Appends `value` at the back, growing storage as needed
    /// (amortized O(1)).
    pub fn push(&mut self, value: T) {
        self.data.push(value);
    }

    /// Removes and returns the last element, or `None` if the array is
    /// empty. Popping an empty array is a no-op, not an error.
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    /// Inserts `value` at `index`, shifting everything at and after it one
    /// position towards the back. `index == self.len()` appends.
    ///
    /// Returns `Err(OutOfRange)` when `index > self.len()`; the array is
    /// left untouched in that case.
    ///
    /// ```
    /// use dskit::Array;
    /// let mut a = Array::from([1, 2, 4, 5]);
    /// a.insert(2, 3).unwrap();
    /// assert_eq!(a.as_slice(), &[1, 2, 3, 4, 5]);
    /// assert!(a.insert(99, 0).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), OutOfRange> {
        if index > self.data.len() {
            return Err(OutOfRange { index, len: self.data.len() });
        }
        self.data.insert(index, value);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting everything
    /// after it one position towards the front.
    ///
    /// Returns `Err(OutOfRange)` when `index >= self.len()`; the array is
    /// left untouched in that case.
    pub fn remove(&mut self, index: usize) -> Result<T, OutOfRange> {
        if index >= self.data.len() {
            return Err(OutOfRange { index, len: self.data.len() });
        }
        Ok(self.data.remove(index))
    }

    /// Grows or shrinks to `new_len`, filling newly exposed slots with the
    /// type's default value. Shrinking truncates without releasing storage.
    pub fn resize_default(&mut self, new_len: usize)
    where
        T: Default + Clone,
    {
        self.data.resize(new_len, T::default());
    }

    /// Grows or shrinks to `new_len`, filling newly exposed slots with
    /// clones of `value`. Shrinking truncates without releasing storage.
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        self.data.resize(new_len, value);
    }

    /// Sets the length to zero. Backing storage is retained.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Overwrites every existing element with a clone of `value`.
    /// The length does not change.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }

    /// Reverses the element order in place.
    pub fn reverse(&mut self) {
        self.data.reverse();
    }

    /// Sorts ascending in place, by the element type's natural ordering.
    /// Stability is not part of the contract.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.data.sort_unstable();
    }

    /// Returns the index of the first element equal to `value`, or `None`
    /// if there is no match. Linear scan.
    pub fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.data.iter().position(|x| x == value)
    }

    /// Returns the number of elements equal to `value`. Linear scan.
    pub fn count(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.data.iter().filter(|x| *x == value).count()
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the array and returns the backing vector.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns an iterator over references to the elements, front to back.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns an iterator over mutable references to the elements,
    /// front to back.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Renders the array as `label: [a, b, c]`, or just `[a, b, c]` when
    /// `label` is empty. A debugging aid, not a serialization format.
    ///
    /// ```
    /// use dskit::Array;
    /// let a = Array::from([1, 2, 3]);
    /// assert_eq!(a.render(""), "[1, 2, 3]");
    /// assert_eq!(a.render("nums"), "nums: [1, 2, 3]");
    /// ```
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

impl<T> Index<usize> for Array<T> {
    type Output = T;

    /// Unchecked-contract access: the caller must guarantee
    /// `index < self.len()`.
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Array<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    fn from(values: [T; N]) -> Self {
        Self { data: values.into() }
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        Self { data: iter.into_iter().collect() }
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Array<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "[")?;
        for (i, elem) in self.data.iter().enumerate() {
            if i == 0 {
                write!(f, "{:?}", elem)?;
            } else {
                write!(f, ", {:?}", elem)?;
            }
        }
        write!(f, "]")
    }
}
