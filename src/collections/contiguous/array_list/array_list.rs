use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr;
use std::slice;

#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds, InvalidSize};
use crate::util::result::ResultExtension;

/// A growable contiguous collection which manages its own capacity, growing by a fixed increment
/// rather than a factor.
///
/// The backing buffer always has exactly [`cap`](ArrayList::cap) slots and always keeps at least
/// one of them free: whenever the length reaches the capacity, the buffer is immediately
/// reallocated with [`GROWTH_INCREMENT`](ArrayList::GROWTH_INCREMENT) additional slots.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ArrayList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `add` | `O(1)`*, `O(n)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `clear` | `O(n)` |
/// | `trim` | `O(n)` |
/// | `to_array` | `O(n)` |
///
/// \* When the ArrayList fills its buffer, `add` reallocates, copying every slot.
pub struct ArrayList<T> {
    pub(crate) buf: Box<[MaybeUninit<T>]>,
    pub(crate) len: usize,
}

impl<T> ArrayList<T> {
    /// The capacity of a newly created or cleared ArrayList.
    pub const DEFAULT_CAP: usize = 8;

    /// The number of slots added to the buffer each time it fills up.
    pub const GROWTH_INCREMENT: usize = 8;

    /// Creates a new, empty ArrayList with a capacity of [`DEFAULT_CAP`](ArrayList::DEFAULT_CAP).
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::contiguous::ArrayList;
    /// let list: ArrayList<u8> = ArrayList::new();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.cap(), 8);
    /// ```
    pub fn new() -> ArrayList<T> {
        ArrayList {
            buf: Box::new_uninit_slice(Self::DEFAULT_CAP),
            len: 0,
        }
    }

    /// Returns the number of elements in the ArrayList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the ArrayList contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::new();
    /// assert!(list.is_empty());
    /// list.add(1);
    /// assert!(!list.is_empty());
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots currently allocated, which is always greater than the length.
    pub const fn cap(&self) -> usize {
        self.buf.len()
    }

    /// Appends the provided value to the end of the ArrayList, growing the buffer if it becomes
    /// full.
    ///
    /// # Panics
    /// Panics if the grown capacity would overflow [`usize`] or the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::new();
    /// for i in 0..9 {
    ///     list.add(i);
    /// }
    /// assert_eq!(&*list, &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
    /// assert_eq!(list.cap(), 16);
    /// ```
    pub fn add(&mut self, value: T) {
        // The buffer always has a free slot at len.
        self.buf[self.len].write(value);
        self.len += 1;

        self.grow_if_full();
    }

    /// Inserts the provided value at `index`, shifting every following element one slot to the
    /// right. Inserting at `index == len` is the same as [`add`](ArrayList::add).
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index > len`, leaving the ArrayList unchanged.
    ///
    /// # Panics
    /// Panics if the grown capacity would overflow [`usize`] or the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::contiguous::ArrayList;
    /// let mut list: ArrayList<_> = (0..3).collect();
    /// list.insert(1, 100).unwrap();
    /// list.insert(4, 200).unwrap();
    /// assert_eq!(&*list, &[0, 100, 1, 2, 200]);
    /// assert!(list.insert(6, 300).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        // Walk the free slot at len backwards to index, moving each element right by one.
        for i in (index..self.len).rev() {
            self.buf.swap(i, i + 1);
        }
        self.buf[index] = MaybeUninit::new(value);
        self.len += 1;

        self.grow_if_full();
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting every following element one slot to
    /// the left.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`, leaving the ArrayList unchanged.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::contiguous::ArrayList;
    /// let mut list: ArrayList<_> = "Hello".chars().collect();
    /// assert_eq!(list.remove(1), Ok('e'));
    /// assert_eq!(list.to_string(), "[ H l l o ]");
    /// assert!(list.remove(4).is_err());
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        let removed = mem::replace(&mut self.buf[index], MaybeUninit::uninit());
        for i in index..(self.len - 1) {
            self.buf.swap(i, i + 1);
        }
        self.len -= 1;

        // SAFETY: index < len (before decrementing) and all values < len are initialized.
        Ok(unsafe { removed.assume_init() })
    }

    /// Drops every element and replaces the buffer with a fresh one of
    /// [`DEFAULT_CAP`](ArrayList::DEFAULT_CAP) slots.
    pub fn clear(&mut self) {
        self.drop_elements();
        self.buf = Box::new_uninit_slice(Self::DEFAULT_CAP);
    }

    /// Reallocates the buffer to `len + 1` slots, releasing unused capacity while keeping every
    /// element. The extra slot keeps the buffer's free slot for the next [`add`](ArrayList::add).
    ///
    /// # Panics
    /// Panics if the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::contiguous::ArrayList;
    /// let mut list: ArrayList<_> = (0..10).collect();
    /// assert_eq!(list.cap(), 16);
    /// list.trim();
    /// assert_eq!(list.cap(), 11);
    /// ```
    pub fn trim(&mut self) {
        self.realloc(self.len + 1).throw();
    }

    /// Returns a reference to the element at `index`.
    ///
    /// The same functionality is available, panicking on failure, via the [`Index`] operator.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&self.deref()[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// The same functionality is available, panicking on failure, via the [`IndexMut`] operator.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&mut self.deref_mut()[index])
    }

    /// Checks that the provided index refers to an initialized element.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }

    pub(crate) fn grow_if_full(&mut self) {
        if self.len == self.cap() {
            let new_cap = self.cap()
                .checked_add(Self::GROWTH_INCREMENT)
                .ok_or(CapacityOverflow)
                .throw();
            self.realloc(new_cap).throw();
        }
    }

    /// Replaces the buffer with one of `new_cap` slots, copying across as many of the old slots as
    /// fit, initialized or not.
    pub(crate) fn realloc(&mut self, new_cap: usize) -> Result<(), InvalidSize> {
        if new_cap < self.len {
            return Err(InvalidSize {
                requested: new_cap,
                len: self.len,
            });
        }

        let mut new_buf = Box::new_uninit_slice(new_cap);
        let copied = cmp::min(self.cap(), new_cap);

        // SAFETY: Both buffers are valid for at least `copied` slots and are separate allocations.
        // Copying MaybeUninit<T> bitwise is valid regardless of initialization, and the old buffer
        // never drops its contents, so each initialized value is now owned by new_buf alone.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_mut_ptr(), copied);
        }

        self.buf = new_buf;
        Ok(())
    }

    /// Drops all initialized values in place, leaving the ArrayList with length 0.
    pub(crate) fn drop_elements(&mut self) {
        // Set len first, so that a panicking drop leaks rather than double drops.
        let len = mem::replace(&mut self.len, 0);
        for slot in &mut self.buf[..len] {
            // SAFETY: All values less than the old len are initialized and are dropped once here.
            unsafe { slot.assume_init_drop(); }
        }
    }
}

impl<T: Clone> ArrayList<T> {
    /// Returns a new boxed slice holding a copy of exactly the first `len` elements.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::contiguous::ArrayList;
    /// let list: ArrayList<_> = (0..9).collect();
    /// let arr = list.to_array();
    /// assert_eq!(&*arr, &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
    /// ```
    pub fn to_array(&self) -> Box<[T]> {
        let mut arr = Box::new_uninit_slice(self.len);
        for (slot, value) in arr.iter_mut().zip(self.iter()) {
            slot.write(value.clone());
        }

        // SAFETY: arr has exactly len slots, each of which was written above.
        unsafe { arr.assume_init() }
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ArrayList<T> {
    fn drop(&mut self) {
        self.drop_elements();

        // Implicitly drop self.buf, containing only MaybeUninit values with a no-op drop. Doing so
        // deallocates the buffer.
    }
}

impl<T> Deref for ArrayList<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The first len slots of the buffer are initialized, properly aligned and
        // contiguous. MaybeUninit<T> has the same layout as T.
        unsafe { slice::from_raw_parts(self.buf.as_ptr().cast(), self.len) }
    }
}

impl<T> DerefMut for ArrayList<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: The first len slots of the buffer are initialized, properly aligned and
        // contiguous. MaybeUninit<T> has the same layout as T. The borrow is unique through
        // &mut self.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr().cast(), self.len) }
    }
}

impl<T> Index<usize> for ArrayList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).throw()
    }
}

impl<T> IndexMut<usize> for ArrayList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).throw()
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ArrayList::new();
        for item in iter {
            list.add(item);
        }
        list
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        let mut list = ArrayList {
            buf: Box::new_uninit_slice(self.cap()),
            len: 0,
        };

        // Track len as we go, so a panicking clone leaves a droppable ArrayList.
        for value in self.iter() {
            list.buf[list.len].write(value.clone());
            list.len += 1;
        }

        list
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: Debug> Debug for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayList")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Display> Display for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for value in self.iter() {
            write!(f, "{value} ")?;
        }
        write!(f, "]")
    }
}
