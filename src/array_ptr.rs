use alloc::alloc::{Layout, alloc, dealloc, handle_alloc_error};
use core::{
    fmt, iter,
    marker::PhantomData,
    mem,
    ops::{Deref, DerefMut},
    ptr::{self, NonNull},
    slice,
};

use crate::utils::{IsZST, capacity_overflow};

/// The exclusive owner of one contiguous heap block of `T`.
///
/// Every slot of the block is constructed for as long as the buffer owns it,
/// so the whole block can be viewed as `[T]`.
///
/// The buffer does not track a logical length. The block length is carried
/// only because the allocator needs it to free the block.
///
/// Ownership can be moved (a Rust move, [`swap`](ArrayPtr::swap) or
/// [`release`](ArrayPtr::release)) but never duplicated, there is no `Clone`.
///
/// # Examples
///
/// ```
/// use simplevec::ArrayPtr;
///
/// let mut a: ArrayPtr<i32> = ArrayPtr::with_len(3);
/// let mut b: ArrayPtr<i32> = ArrayPtr::new();
/// assert!(!a.is_null());
/// assert!(b.is_null());
///
/// a[1] = 7;
/// a.swap(&mut b);
///
/// assert!(a.is_null());
/// assert_eq!(b.as_slice(), [0, 7, 0]);
/// ```
///
/// # ZST support
///
/// Zero sized types never allocate, the handle is a dangling pointer
/// that still carries the requested length.
pub struct ArrayPtr<T> {
    raw: Option<NonNull<[T]>>,
    _marker: PhantomData<T>,
}

unsafe impl<T> Send for ArrayPtr<T> where T: Send {}
unsafe impl<T> Sync for ArrayPtr<T> where T: Sync {}

impl<T> Drop for ArrayPtr<T> {
    fn drop(&mut self) {
        if let Some(raw) = self.raw.take() {
            // SAFETY: the block is owned and every slot is constructed.
            unsafe {
                ptr::drop_in_place(raw.as_ptr());
                deallocate(raw.cast::<T>(), raw.len());
            }
        }
    }
}

/// Allocates an uninitialized block for `len` elements.
///
/// Returns a dangling pointer for zero sized types or `len == 0`.
///
/// # Panics
/// Panics if the block would exceed `isize::MAX` bytes.
pub(crate) fn allocate<T>(len: usize) -> NonNull<T> {
    if T::IS_ZST || len == 0 {
        return NonNull::dangling();
    }

    let Ok(layout) = Layout::array::<T>(len) else {
        capacity_overflow()
    };

    // SAFETY: `layout` has a non-zero size.
    let ptr = unsafe { alloc(layout) } as *mut T;
    match NonNull::new(ptr) {
        Some(ptr) => ptr,
        None => handle_alloc_error(layout),
    }
}

/// Frees a block obtained from [`allocate`].
///
/// # Safety
/// - `ptr` was returned by `allocate::<T>(len)` with the same `len`.
/// - Elements inside the block have already been dropped or moved out.
pub(crate) unsafe fn deallocate<T>(ptr: NonNull<T>, len: usize) {
    if T::IS_ZST || len == 0 {
        return;
    }

    // SAFETY: the layout was valid when the block was allocated.
    unsafe {
        dealloc(
            ptr.as_ptr() as *mut u8,
            Layout::from_size_align_unchecked(mem::size_of::<T>() * len, mem::align_of::<T>()),
        );
    }
}

/// A block under construction.
///
/// If construction unwinds, the written prefix is dropped and the block freed.
struct PartialBlock<T> {
    ptr: NonNull<T>,
    len: usize,
    init: usize,
}

impl<T> Drop for PartialBlock<T> {
    fn drop(&mut self) {
        // SAFETY: exactly `init` slots were written.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.init));
            deallocate(self.ptr, self.len);
        }
    }
}

impl<T> ArrayPtr<T> {
    /// Constructs an empty buffer that owns nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simplevec::ArrayPtr;
    /// let buf: ArrayPtr<String> = ArrayPtr::new();
    /// assert!(buf.is_null());
    /// assert_eq!(buf.len(), 0);
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            raw: None,
            _marker: PhantomData,
        }
    }

    /// # Safety
    /// `ptr` points to `len > 0` constructed elements in a block from [`allocate`].
    #[inline]
    unsafe fn from_parts(ptr: NonNull<T>, len: usize) -> Self {
        Self {
            raw: Some(NonNull::slice_from_raw_parts(ptr, len)),
            _marker: PhantomData,
        }
    }

    /// Allocates a block of `len` slots and constructs them from `iter`, in order.
    ///
    /// `len == 0` yields the empty buffer without touching the allocator.
    /// Surplus items of `iter` are not consumed.
    ///
    /// # Panics
    /// Panics if `iter` yields fewer than `len` items. The slots written so
    /// far are dropped and the block is freed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simplevec::ArrayPtr;
    /// let buf = ArrayPtr::from_iter_exact(3, "abcdef".chars());
    /// assert_eq!(buf.as_slice(), ['a', 'b', 'c']);
    /// ```
    pub fn from_iter_exact<I: IntoIterator<Item = T>>(len: usize, iter: I) -> Self {
        if len == 0 {
            return Self::new();
        }

        let mut block = PartialBlock {
            ptr: allocate::<T>(len),
            len,
            init: 0,
        };

        let mut iter = iter.into_iter();
        while block.init < len {
            let Some(value) = iter.next() else {
                panic!("iterator yielded {} of {} elements", block.init, len);
            };
            // SAFETY: `init < len`, the slot is inside the block and unwritten.
            unsafe { ptr::write(block.ptr.as_ptr().add(block.init), value) };
            block.init += 1;
        }

        let ptr = block.ptr;
        mem::forget(block);
        // SAFETY: all `len` slots are written.
        unsafe { Self::from_parts(ptr, len) }
    }

    /// Allocates a block of `len` slots, slot `i` constructed by `f(i)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simplevec::ArrayPtr;
    /// let buf = ArrayPtr::from_fn(4, |i| i * i);
    /// assert_eq!(buf.as_slice(), [0, 1, 4, 9]);
    /// ```
    #[inline]
    pub fn from_fn<F: FnMut(usize) -> T>(len: usize, f: F) -> Self {
        Self::from_iter_exact(len, (0..len).map(f))
    }

    /// Adopts a block previously handed out by [`release`](ArrayPtr::release).
    ///
    /// A null or zero-length pointer yields the empty buffer.
    ///
    /// # Safety
    /// - `raw` is null, zero-length, or was returned by `release` on an `ArrayPtr<T>`.
    /// - No other owner frees or adopts the same block.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simplevec::ArrayPtr;
    /// let mut a = ArrayPtr::from_fn(2, |i| i + 1);
    /// let raw = a.release();
    /// assert!(a.is_null());
    ///
    /// let b = unsafe { ArrayPtr::from_raw(raw) };
    /// assert_eq!(b.as_slice(), [1, 2]);
    /// ```
    #[inline]
    pub unsafe fn from_raw(raw: *mut [T]) -> Self {
        match NonNull::new(raw) {
            Some(raw) if raw.len() > 0 => Self {
                raw: Some(raw),
                _marker: PhantomData,
            },
            _ => Self::new(),
        }
    }

    /// Gives up ownership of the block without freeing it.
    ///
    /// The buffer is empty afterwards. The caller becomes responsible for the
    /// block and must pass it back through [`from_raw`](ArrayPtr::from_raw),
    /// otherwise it leaks. An empty buffer returns a null slice pointer.
    #[must_use = "losing the pointer leaks the block"]
    #[inline]
    pub fn release(&mut self) -> *mut [T] {
        match self.raw.take() {
            Some(raw) => raw.as_ptr(),
            None => ptr::slice_from_raw_parts_mut(ptr::null_mut(), 0),
        }
    }

    /// Consumes the buffer, returning the block pointer and its length.
    ///
    /// The elements are still constructed; the caller drops them and frees
    /// the block with [`deallocate`].
    #[inline]
    pub(crate) fn into_raw_parts(mut self) -> (NonNull<T>, usize) {
        match self.raw.take() {
            Some(raw) => (raw.cast::<T>(), raw.len()),
            None => (NonNull::dangling(), 0),
        }
    }

    /// Returns `true` if the buffer owns no block.
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.raw.is_none()
    }

    /// Returns the length of the owned block, `0` if empty.
    #[inline]
    pub const fn len(&self) -> usize {
        match self.raw {
            Some(raw) => raw.len(),
            None => 0,
        }
    }

    /// Returns `true` if the block holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a pointer to the first element.
    ///
    /// The pointer is dangling when the buffer is empty and must not be dereferenced.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        match self.raw {
            Some(raw) => raw.cast::<T>().as_ptr(),
            None => NonNull::<T>::dangling().as_ptr(),
        }
    }

    /// Returns a mutable pointer to the first element.
    ///
    /// The pointer is dangling when the buffer is empty and must not be dereferenced.
    #[inline]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        match self.raw {
            Some(raw) => raw.cast::<T>().as_ptr(),
            None => NonNull::<T>::dangling().as_ptr(),
        }
    }

    /// Returns the whole block as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        // SAFETY: all slots are constructed; an empty buffer yields a dangling, zero-length slice.
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len()) }
    }

    /// Returns the whole block as a mutable slice.
    #[inline]
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: see `as_slice`, and `&mut self` guarantees uniqueness.
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len()) }
    }

    /// Returns a reference to slot `index` without bounds checking.
    ///
    /// # Safety
    /// `index` is less than the block length.
    #[inline(always)]
    pub const unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len());
        unsafe { &*self.as_ptr().add(index) }
    }

    /// Returns a mutable reference to slot `index` without bounds checking.
    ///
    /// # Safety
    /// `index` is less than the block length.
    #[inline(always)]
    pub const unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len());
        unsafe { &mut *self.as_mut_ptr().add(index) }
    }

    /// Exchanges the blocks of two buffers. No element moves.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.raw, &mut other.raw);
    }
}

impl<T: Default> ArrayPtr<T> {
    /// Allocates a block of `len` default-constructed slots.
    ///
    /// `len == 0` yields the empty buffer without touching the allocator.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simplevec::ArrayPtr;
    /// let buf: ArrayPtr<String> = ArrayPtr::with_len(2);
    /// assert_eq!(buf.as_slice(), ["", ""]);
    ///
    /// let empty: ArrayPtr<String> = ArrayPtr::with_len(0);
    /// assert!(empty.is_null());
    /// ```
    #[inline]
    pub fn with_len(len: usize) -> Self {
        Self::from_iter_exact(len, iter::repeat_with(T::default))
    }
}

impl<T> Default for ArrayPtr<T> {
    /// It's eq to [`ArrayPtr::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for ArrayPtr<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for ArrayPtr<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ArrayPtr").field(&self.as_slice()).finish()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use alloc::{rc::Rc, string::String};
    use core::cell::Cell;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    /// Counts drops through a shared cell.
    #[derive(Clone, Default)]
    struct DropCounter(Rc<Cell<usize>>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn zero_len_is_empty_sentinel() {
        let buf: ArrayPtr<u64> = ArrayPtr::with_len(0);
        assert!(buf.is_null());
        assert_eq!(buf.len(), 0);
        assert!(buf.as_slice().is_empty());
    }

    #[test]
    fn with_len_default_constructs() {
        let buf: ArrayPtr<String> = ArrayPtr::with_len(3);
        assert!(!buf.is_null());
        assert_eq!(buf.len(), 3);
        assert!(buf.iter().all(String::is_empty));
    }

    #[test]
    fn drop_releases_every_slot() {
        let drops = Rc::new(Cell::new(0));
        let buf = ArrayPtr::from_fn(4, |_| DropCounter(drops.clone()));
        assert_eq!(drops.get(), 0);
        drop(buf);
        assert_eq!(drops.get(), 4);
    }

    #[test]
    fn release_then_adopt() {
        let drops = Rc::new(Cell::new(0));
        let mut a = ArrayPtr::from_fn(2, |_| DropCounter(drops.clone()));

        let raw = a.release();
        assert!(a.is_null());
        drop(a);
        assert_eq!(drops.get(), 0);

        let b = unsafe { ArrayPtr::from_raw(raw) };
        assert_eq!(b.len(), 2);
        drop(b);
        assert_eq!(drops.get(), 2);
    }

    #[test]
    fn release_empty_is_null() {
        let mut buf: ArrayPtr<u8> = ArrayPtr::new();
        let raw = buf.release();
        assert!(raw.is_null());

        let adopted = unsafe { ArrayPtr::from_raw(raw) };
        assert!(adopted.is_null());
    }

    #[test]
    fn swap_exchanges_blocks() {
        let mut a = ArrayPtr::from_fn(2, |i| i);
        let mut b = ArrayPtr::from_fn(3, |i| i + 10);
        let (pa, pb) = (a.as_ptr(), b.as_ptr());

        a.swap(&mut b);

        assert_eq!(a.as_ptr(), pb);
        assert_eq!(b.as_ptr(), pa);
        assert_eq!(a.as_slice(), [10, 11, 12]);
        assert_eq!(b.as_slice(), [0, 1]);
    }

    #[test]
    fn move_leaves_source_empty() {
        let mut a = ArrayPtr::from_fn(2, |i| i);
        let b = mem::take(&mut a);
        assert!(a.is_null());
        assert_eq!(b.as_slice(), [0, 1]);
    }

    #[test]
    fn unchecked_access() {
        let mut buf = ArrayPtr::from_fn(3, |i| i as i32);
        unsafe {
            *buf.get_unchecked_mut(2) = 42;
            assert_eq!(*buf.get_unchecked(2), 42);
            assert_eq!(*buf.get_unchecked(0), 0);
        }
    }

    #[test]
    fn short_iterator_cleans_up() {
        let drops = Rc::new(Cell::new(0));
        let counter = DropCounter(drops.clone());

        let result = catch_unwind(AssertUnwindSafe(|| {
            ArrayPtr::from_iter_exact(5, iter::repeat_n(counter, 3))
        }));

        assert!(result.is_err());
        // three written slots dropped by the guard
        assert_eq!(drops.get(), 3);
    }

    #[test]
    fn zst_block() {
        let buf: ArrayPtr<()> = ArrayPtr::with_len(1000);
        assert!(!buf.is_null());
        assert_eq!(buf.len(), 1000);
    }

    #[test]
    fn debug_format() {
        let buf = ArrayPtr::from_fn(2, |i| i);
        assert_eq!(alloc::format!("{buf:?}"), "ArrayPtr([0, 1])");
    }
}
