use alloc::vec::Vec;
use core::{
    borrow::{Borrow, BorrowMut},
    cmp, fmt, hash,
    iter::FusedIterator,
    marker::PhantomData,
    ops::{Deref, DerefMut, Range},
    ptr::{self, NonNull},
    slice,
};

use crate::{
    ArrayPtr, OutOfRange,
    array_ptr::deallocate,
    utils::{capacity_overflow, cold_path},
};

/// A growable array over a single [`ArrayPtr`].
///
/// `len` elements are live. The remaining `capacity - len` slots are spare:
/// they still hold constructed values (defaults, or elements that were popped,
/// erased or cleared) which are dropped when overwritten or when the vector
/// is dropped.
///
/// Every reallocation builds a complete new block first, moves the live
/// elements across and only then releases the old block.
///
/// # Examples
///
/// ```
/// use simplevec::{SimpleVector, simplevec};
///
/// let mut vec: SimpleVector<i32> = SimpleVector::new();
/// assert_eq!((vec.len(), vec.capacity()), (0, 0));
///
/// vec.push_back(1);
/// vec.push_back(2);
/// vec.push_back(3);
/// assert_eq!((vec.len(), vec.capacity()), (3, 4));
///
/// vec.insert(1, 9);
/// assert_eq!(vec, [1, 9, 2, 3]);
///
/// vec.erase(1);
/// assert_eq!(vec, simplevec![1, 2, 3]);
/// ```
///
/// # Element bounds
///
/// Operations that allocate new slots construct them with [`Default`],
/// so `push_back`, `insert`, `resize` and `reserve` need `T: Default`.
/// Copy paths need `T: Clone`.
pub struct SimpleVector<T> {
    items: ArrayPtr<T>,
    size: usize,
}

/// Creates a [`SimpleVector`] containing the arguments.
///
/// The syntax is similar to [`vec!`](https://doc.rust-lang.org/std/macro.vec.html).
///
/// Non-params macro is equal to [`SimpleVector::new`].
///
/// # Examples
///
/// ```
/// # use simplevec::{simplevec, SimpleVector};
/// let vec: SimpleVector<String> = simplevec![];
/// let vec = simplevec![1; 5]; // Need to support Clone.
/// let vec = simplevec![1, 2, 3, 4];
/// assert_eq!(vec.capacity(), 4);
/// ```
#[macro_export]
macro_rules! simplevec {
    [] => { $crate::SimpleVector::new() };
    [$elem:expr; $n:expr] => { $crate::SimpleVector::from_elem($elem, $n) };
    [$($item:expr),+ $(,)?] => { $crate::SimpleVector::from([ $($item),+ ]) };
}

impl<T> SimpleVector<T> {
    /// Constructs a new, empty `SimpleVector` with capacity 0.
    ///
    /// Does not allocate.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simplevec::SimpleVector;
    /// let vec: SimpleVector<i32> = SimpleVector::new();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.capacity(), 0);
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            items: ArrayPtr::new(),
            size: 0,
        }
    }

    /// Returns the number of live elements.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns the number of allocated slots.
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the vector contains no elements.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Extracts a slice of the live elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items[..self.size]
    }

    /// Extracts a mutable slice of the live elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let size = self.size;
        &mut self.items[..size]
    }

    /// Returns a raw pointer to the first element.
    ///
    /// The pointer is dangling when nothing is allocated. Any operation that
    /// reallocates (`push_back` or `insert` on a full vector, `reserve`,
    /// growing `resize`) invalidates it.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.items.as_ptr()
    }

    /// Returns a raw mutable pointer to the first element.
    ///
    /// Same invalidation rules as [`as_ptr`](SimpleVector::as_ptr).
    #[inline]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.items.as_mut_ptr()
    }

    /// Returns the half-open pointer range over the live elements,
    /// the equivalent of a `begin`/`end` pair.
    ///
    /// Both pointers are invalidated by any reallocation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simplevec::simplevec;
    /// let vec = simplevec![1, 2, 3];
    /// let range = vec.as_ptr_range();
    /// assert_eq!(unsafe { range.end.offset_from(range.start) }, 3);
    /// ```
    #[inline]
    pub fn as_ptr_range(&self) -> Range<*const T> {
        self.as_slice().as_ptr_range()
    }

    /// Returns the half-open mutable pointer range over the live elements.
    ///
    /// Both pointers are invalidated by any reallocation.
    #[inline]
    pub fn as_mut_ptr_range(&mut self) -> Range<*mut T> {
        self.as_mut_slice().as_mut_ptr_range()
    }

    /// Returns a reference to the element at `index`, or [`OutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simplevec::{simplevec, OutOfRange};
    /// let vec = simplevec![10, 20];
    /// assert_eq!(vec.at(1), Ok(&20));
    /// assert_eq!(vec.at(2), Err(OutOfRange { index: 2, len: 2 }));
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        if index >= self.size {
            cold_path();
            return Err(OutOfRange {
                index,
                len: self.size,
            });
        }
        // SAFETY: index < size <= capacity
        Ok(unsafe { self.items.get_unchecked(index) })
    }

    /// Returns a mutable reference to the element at `index`, or [`OutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simplevec::simplevec;
    /// let mut vec = simplevec![10, 20];
    /// *vec.at_mut(0).unwrap() += 1;
    /// assert_eq!(vec, [11, 20]);
    /// assert!(vec.at_mut(5).is_err());
    /// ```
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        if index >= self.size {
            cold_path();
            return Err(OutOfRange {
                index,
                len: self.size,
            });
        }
        // SAFETY: index < size <= capacity
        Ok(unsafe { self.items.get_unchecked_mut(index) })
    }

    /// Returns a reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    /// `index < len`. Spare slots are constructed, but reading them is still
    /// outside the contract.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.size, "unchecked index should be < len");
        unsafe { self.items.get_unchecked(index) }
    }

    /// Returns a mutable reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    /// `index < len`.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.size, "unchecked index should be < len");
        unsafe { self.items.get_unchecked_mut(index) }
    }

    /// Sets the length to zero.
    ///
    /// Capacity is kept and no element is dropped; the old elements become
    /// spare slots that the following pushes overwrite.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simplevec::simplevec;
    /// let mut vec = simplevec![1, 2, 3];
    /// vec.clear();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.capacity(), 3);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Removes the last element from the live range. Does nothing when empty.
    ///
    /// The element stays in its slot as a spare value.
    ///
    /// # Time complexity
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// # use simplevec::simplevec;
    /// let mut vec = simplevec![1, 2];
    /// vec.pop_back();
    /// assert_eq!(vec, [1]);
    /// vec.pop_back();
    /// vec.pop_back();
    /// assert!(vec.is_empty());
    /// ```
    #[inline]
    pub fn pop_back(&mut self) {
        if self.size == 0 {
            cold_path();
            return;
        }
        self.size -= 1;
    }

    /// Removes the element at `index`, shifting all elements after it to the left.
    ///
    /// Returns `index`, which now holds the element that followed the erased one
    /// (or equals `len` if the last element was erased).
    ///
    /// Because this shifts over the remaining elements, it has a worst-case performance of O(n).
    ///
    /// # Panics
    /// Panics if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simplevec::simplevec;
    /// let mut vec = simplevec![1, 2, 3];
    /// let at = vec.erase(1);
    /// assert_eq!(at, 1);
    /// assert_eq!(vec, [1, 3]);
    /// ```
    #[inline]
    pub fn erase(&mut self, index: usize) -> usize {
        assert!(index < self.size, "erase index should be < len");

        // The erased element rotates into the first spare slot.
        self.items[index..self.size].rotate_left(1);
        self.size -= 1;
        index
    }

    /// Exchanges the contents of two vectors, including capacity. O(1).
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.items.swap(&mut other.items);
        core::mem::swap(&mut self.size, &mut other.size);
    }

    /// Returns an iterator over the live elements.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator that allows modifying each live element.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Capacity for one more element: doubled, at least 1.
    #[inline]
    fn doubled_capacity(&self) -> usize {
        match self.capacity().checked_add(1) {
            Some(needed) => grown_capacity(self.capacity(), needed),
            None => capacity_overflow(),
        }
    }
}

/// Growth target for a block of `capacity` slots that must hold `needed`.
///
/// Doubling saturates to `needed` when it would overflow.
#[inline]
fn grown_capacity(capacity: usize, needed: usize) -> usize {
    let doubled = capacity.checked_mul(2).unwrap_or(needed);
    cmp::max(needed, doubled)
}

impl<T: Default> SimpleVector<T> {
    /// Constructs a vector of `len` default values, `capacity == len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simplevec::SimpleVector;
    /// let vec: SimpleVector<i32> = SimpleVector::with_len(3);
    /// assert_eq!(vec, [0, 0, 0]);
    /// assert_eq!(vec.capacity(), 3);
    /// ```
    #[inline]
    pub fn with_len(len: usize) -> Self {
        Self {
            items: ArrayPtr::with_len(len),
            size: len,
        }
    }

    /// Constructs an empty vector with exactly `capacity` slots.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simplevec::SimpleVector;
    /// let vec: SimpleVector<i32> = SimpleVector::with_capacity(10);
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.capacity(), 10);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: ArrayPtr::with_len(capacity),
            size: 0,
        }
    }

    /// Replaces the block with one of `new_capacity` slots, moving the live elements over.
    ///
    /// The old block is untouched until the new one is fully constructed.
    #[inline(never)]
    fn grow(&mut self, new_capacity: usize) {
        debug_assert!(
            new_capacity > self.capacity(),
            "grow's new_capacity should be > old_capacity"
        );

        let size = self.size;
        let mut new_items = ArrayPtr::with_len(new_capacity);
        new_items[..size].swap_with_slice(&mut self.items[..size]);
        self.items.swap(&mut new_items);
    }

    /// Makes room for `additional` more elements, growing to
    /// `max(len + additional, 2 * capacity)` if needed.
    #[inline]
    pub(crate) fn reserve_for(&mut self, additional: usize) {
        let Some(needed) = self.size.checked_add(additional) else {
            capacity_overflow()
        };
        if needed > self.capacity() {
            self.grow(grown_capacity(self.capacity(), needed));
        }
    }

    /// Grows the capacity to exactly `new_capacity` if it is larger than the current one.
    ///
    /// Existing elements and their order are preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simplevec::simplevec;
    /// let mut vec = simplevec![1, 2];
    /// vec.reserve(10);
    /// assert_eq!(vec.capacity(), 10);
    ///
    /// vec.reserve(3);
    /// assert_eq!(vec.capacity(), 10);
    /// assert_eq!(vec, [1, 2]);
    /// ```
    #[inline]
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity() {
            self.grow(new_capacity);
        }
    }

    /// Resizes the vector so that `len == new_len`.
    ///
    /// - Shrinking only moves the length, the cut elements stay as spare slots.
    /// - Growing fills `[len, new_len)` with default values, reallocating to
    ///   `max(new_len, 2 * capacity)` when the capacity is insufficient.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simplevec::simplevec;
    /// let mut vec = simplevec![1, 2, 3];
    /// vec.resize(1);
    /// assert_eq!(vec, [1]);
    ///
    /// vec.resize(4);
    /// assert_eq!(vec, [1, 0, 0, 0]);
    /// assert_eq!(vec.capacity(), 6);
    /// ```
    pub fn resize(&mut self, new_len: usize) {
        if new_len <= self.size {
            self.size = new_len;
            return;
        }

        self.reserve_for(new_len - self.size);
        self.items[self.size..new_len].fill_with(T::default);
        self.size = new_len;
    }

    /// Appends an element to the back.
    ///
    /// A full vector grows to `max(1, 2 * capacity)` first.
    ///
    /// # Time complexity
    /// Amortized O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// # use simplevec::SimpleVector;
    /// let mut vec = SimpleVector::new();
    /// vec.push_back("a".to_string());
    /// vec.push_back("b".to_string());
    /// assert_eq!(vec, ["a", "b"]);
    /// assert_eq!(vec.capacity(), 2);
    /// ```
    #[inline]
    pub fn push_back(&mut self, value: T) {
        if self.size == self.capacity() {
            self.grow(self.doubled_capacity());
        }
        // SAFETY: size < capacity
        unsafe { *self.items.get_unchecked_mut(self.size) = value };
        self.size += 1;
    }

    /// Inserts an element at position `index`, shifting all elements after it to the right.
    ///
    /// Returns `index`, the position of the inserted element.
    ///
    /// A full vector builds a new block of `max(1, 2 * capacity)` slots and
    /// moves the prefix, the value and the suffix into it. Otherwise the
    /// suffix is shifted in place.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simplevec::simplevec;
    /// let mut vec = simplevec![1, 2, 3];
    /// let at = vec.insert(1, 9);
    /// assert_eq!(at, 1);
    /// assert_eq!(vec, [1, 9, 2, 3]);
    ///
    /// vec.insert(4, 7);
    /// assert_eq!(vec, [1, 9, 2, 3, 7]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        assert!(index <= self.size, "insertion index should be <= len");

        let size = self.size;
        if size == self.capacity() {
            let mut new_items = ArrayPtr::with_len(self.doubled_capacity());
            new_items[..index].swap_with_slice(&mut self.items[..index]);
            new_items[index] = value;
            new_items[index + 1..=size].swap_with_slice(&mut self.items[index..size]);
            self.items.swap(&mut new_items);
        } else {
            // The first spare slot rotates into `index` and is overwritten.
            self.items[index..=size].rotate_right(1);
            self.items[index] = value;
        }

        self.size += 1;
        index
    }
}

impl<T: Clone> SimpleVector<T> {
    /// Constructs a vector of `len` clones of `value`, `capacity == len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simplevec::SimpleVector;
    /// let vec = SimpleVector::from_elem("x", 3);
    /// assert_eq!(vec, ["x", "x", "x"]);
    /// ```
    #[inline]
    pub fn from_elem(value: T, len: usize) -> Self {
        Self {
            items: ArrayPtr::from_fn(len, |_| value.clone()),
            size: len,
        }
    }
}

impl<T: Clone + Default> SimpleVector<T> {
    /// Clones and appends all elements of `other`.
    ///
    /// Grows to `max(len + other.len(), 2 * capacity)` when needed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simplevec::simplevec;
    /// let mut vec = simplevec![1];
    /// vec.extend_from_slice(&[2, 3, 4]);
    /// assert_eq!(vec, [1, 2, 3, 4]);
    /// ```
    pub fn extend_from_slice(&mut self, other: &[T]) {
        self.reserve_for(other.len());
        let end = self.size + other.len();
        self.items[self.size..end].clone_from_slice(other);
        self.size = end;
    }
}

impl<T> Default for SimpleVector<T> {
    /// It's eq to [`SimpleVector::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SimpleVector<T> {
    /// Deep copy of the live elements, `capacity == len` on the copy.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simplevec::{SimpleVector, simplevec};
    /// let mut vec = SimpleVector::with_capacity(8);
    /// vec.push_back(1);
    ///
    /// let copy = vec.clone();
    /// assert_eq!(copy, vec);
    /// assert_eq!(copy.capacity(), 1);
    /// ```
    fn clone(&self) -> Self {
        Self {
            items: ArrayPtr::from_iter_exact(self.size, self.iter().cloned()),
            size: self.size,
        }
    }

    /// Builds the copy first and swaps it in, so a panicking `clone`
    /// leaves `self` untouched.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T> Deref for SimpleVector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_slice(), f)
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVector<T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for SimpleVector<T> {
    #[inline]
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for SimpleVector<T> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: hash::Hash> hash::Hash for SimpleVector<T> {
    #[inline]
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        hash::Hash::hash(self.as_slice(), state);
    }
}

impl<T, U> PartialEq<SimpleVector<U>> for SimpleVector<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &SimpleVector<U>) -> bool {
        PartialEq::eq(self.as_slice(), other.as_slice())
    }
}

impl<T: Eq> Eq for SimpleVector<T> {}

impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
    /// Lexicographic comparison of the live elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simplevec::simplevec;
    /// assert!(simplevec![1, 2, 3] < simplevec![1, 2, 4]);
    /// assert!(simplevec![1, 2] < simplevec![1, 2, 3]);
    /// assert!(simplevec![2] > simplevec![1, 9, 9]);
    /// ```
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        PartialOrd::partial_cmp(self.as_slice(), other.as_slice())
    }
}

impl<T: Ord> Ord for SimpleVector<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        Ord::cmp(self.as_slice(), other.as_slice())
    }
}

impl<T, U> PartialEq<[U]> for SimpleVector<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        PartialEq::eq(self.as_slice(), other)
    }
}

impl<T, U> PartialEq<&[U]> for SimpleVector<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &&[U]) -> bool {
        PartialEq::eq(self.as_slice(), *other)
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for SimpleVector<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool {
        PartialEq::eq(self.as_slice(), other.as_slice())
    }
}

impl<T, U, const N: usize> PartialEq<&[U; N]> for SimpleVector<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &&[U; N]) -> bool {
        PartialEq::eq(self.as_slice(), other.as_slice())
    }
}

impl<T, U> PartialEq<Vec<U>> for SimpleVector<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &Vec<U>) -> bool {
        PartialEq::eq(self.as_slice(), other.as_slice())
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    /// Moves the elements of the array in order, `capacity == N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simplevec::SimpleVector;
    /// let vec = SimpleVector::from(["a".to_string(), "b".to_string()]);
    /// assert_eq!(vec, ["a", "b"]);
    /// assert_eq!(vec.capacity(), 2);
    /// ```
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self {
            items: ArrayPtr::from_iter_exact(N, value),
            size: N,
        }
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
    /// # Examples
    ///
    /// ```
    /// # use simplevec::SimpleVector;
    /// let vec = SimpleVector::from([1, 2, 3].as_slice());
    /// assert_eq!(vec, [1, 2, 3]);
    /// ```
    #[inline]
    fn from(value: &[T]) -> Self {
        Self {
            items: ArrayPtr::from_iter_exact(value.len(), value.iter().cloned()),
            size: value.len(),
        }
    }
}

impl<T> From<Vec<T>> for SimpleVector<T> {
    /// Moves the elements out of the `Vec`, `capacity == len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simplevec::SimpleVector;
    /// let vec = SimpleVector::from(vec![1, 2, 3]);
    /// assert_eq!(vec, [1, 2, 3]);
    /// ```
    #[inline]
    fn from(value: Vec<T>) -> Self {
        let len = value.len();
        Self {
            items: ArrayPtr::from_iter_exact(len, value),
            size: len,
        }
    }
}

impl<T: Default> Extend<T> for SimpleVector<T> {
    /// # Examples
    ///
    /// ```
    /// # use simplevec::simplevec;
    /// let mut vec = simplevec![1];
    /// vec.extend([2, 3]);
    /// assert_eq!(vec, [1, 2, 3]);
    /// ```
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve_for(lower);
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: 'a + Clone + Default> Extend<&'a T> for SimpleVector<T> {
    /// Clone values from iterators.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simplevec::simplevec;
    /// let mut vec = simplevec![1];
    /// vec.extend(&[2, 3]);
    /// assert_eq!(vec, [1, 2, 3]);
    /// ```
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T: Default> FromIterator<T> for SimpleVector<T> {
    /// # Examples
    ///
    /// ```
    /// # use simplevec::SimpleVector;
    /// let vec: SimpleVector<i32> = (1..=3).collect();
    /// assert_eq!(vec, [1, 2, 3]);
    /// ```
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<'a, T> IntoIterator for &'a SimpleVector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An iterator that consumes a [`SimpleVector`] and yields its live items by value.
///
/// Unread items and spare slots are dropped with the iterator.
///
/// # Examples
///
/// ```
/// # use simplevec::simplevec;
/// let vec = simplevec!["1", "2", "3"];
/// let mut iter = vec.into_iter();
///
/// assert_eq!(iter.next(), Some("1"));
/// assert_eq!(iter.next_back(), Some("3"));
///
/// let rest: Vec<&str> = iter.collect();
/// assert_eq!(rest, ["2"]);
/// ```
pub struct IntoIter<T> {
    ptr: NonNull<T>,
    cap: usize,
    /// End of the live range when the iterator was created; `[size, cap)` are spare.
    size: usize,
    head: usize,
    tail: usize,
    _marker: PhantomData<T>,
}

unsafe impl<T> Send for IntoIter<T> where T: Send {}
unsafe impl<T> Sync for IntoIter<T> where T: Sync {}

impl<T> IntoIterator for SimpleVector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        let Self { items, size } = self;
        let (ptr, cap) = items.into_raw_parts();
        IntoIter {
            ptr,
            cap,
            size,
            head: 0,
            tail: size,
            _marker: PhantomData,
        }
    }
}

impl<T> IntoIter<T> {
    /// Returns the remaining items as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[head, tail)` are unread and constructed.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr().add(self.head), self.tail - self.head) }
    }

    /// Returns the remaining items as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: see `as_slice`.
        unsafe {
            slice::from_raw_parts_mut(self.ptr.as_ptr().add(self.head), self.tail - self.head)
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.head < self.tail {
            self.head += 1;
            // SAFETY: the slot is unread and is never read again.
            unsafe { Some(ptr::read(self.ptr.as_ptr().add(self.head - 1))) }
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let v = self.tail - self.head;
        (v, Some(v))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.head < self.tail {
            self.tail -= 1;
            // SAFETY: the slot is unread and is never read again.
            unsafe { Some(ptr::read(self.ptr.as_ptr().add(self.tail))) }
        } else {
            None
        }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.tail - self.head
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let base = self.ptr.as_ptr();
        // SAFETY: `[head, tail)` and `[size, cap)` are the only constructed slots left.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                base.add(self.head),
                self.tail - self.head,
            ));
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                base.add(self.size),
                self.cap - self.size,
            ));
            deallocate(self.ptr, self.cap);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
