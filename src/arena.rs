//! Chunked, append-only allocator for tree nodes.

use std::collections::TryReserveError;
use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// A struct representing a reference to an object in `TypedArena<T>`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Handle {
    chunk_index: usize,
    block_index: usize,
}

/// A fast, but limited allocator that only allocates a single type of object.
///
/// Objects are never freed individually: all objects inside the arena are dropped together when
/// the arena is cleared or destroyed. The underlying storage is a list of `Vec` chunks that are
/// allocated with a fixed capacity, so objects are never moved once allocated and growing the
/// arena never copies existing objects. Allocation is fallible and reports the allocator's failure
/// instead of aborting.
///
/// # Examples
///
/// ```
/// use red_black_collections::arena::TypedArena;
///
/// let mut arena = TypedArena::new(1024);
///
/// let x = arena.allocate(1).unwrap();
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
/// assert_eq!(arena.len(), 1);
/// ```
pub struct TypedArena<T> {
    chunks: Vec<Vec<T>>,
    chunk_size: usize,
    len: usize,
}

impl<T> TypedArena<T> {
    fn is_valid_handle(&self, handle: &Handle) -> bool {
        handle.chunk_index < self.chunks.len()
            && handle.block_index < self.chunks[handle.chunk_index].len()
    }

    /// Constructs a new, empty `TypedArena<T>` with a specific number of objects per chunk. No
    /// memory is allocated until the first object is allocated.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::arena::TypedArena;
    ///
    /// // creates a new TypedArena<T> that contains a maximum of 1024 u32's per chunk
    /// let arena: TypedArena<u32> = TypedArena::new(1024);
    /// ```
    pub fn new(chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "Error: chunk size must be positive.");
        TypedArena {
            chunks: Vec::new(),
            chunk_size,
            len: 0,
        }
    }

    /// Allocates an object in the typed arena and returns a `Handle`. The handle can later be used
    /// to retrieve mutable and immutable references to the object. Returns an error if a new chunk
    /// was needed and could not be allocated; the arena is left unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0).unwrap();
    /// assert_eq!(arena.get(&x), Some(&0));
    /// ```
    pub fn allocate(&mut self, value: T) -> Result<Handle, TryReserveError> {
        let needs_chunk = match self.chunks.last() {
            Some(chunk) => chunk.len() == self.chunk_size,
            None => true,
        };

        if needs_chunk {
            let mut chunk = Vec::new();
            chunk.try_reserve_exact(self.chunk_size)?;
            self.chunks.try_reserve(1)?;
            self.chunks.push(chunk);
        }

        let chunk_index = self.chunks.len() - 1;
        let last_chunk = &mut self.chunks[chunk_index];
        last_chunk.push(value);
        self.len += 1;
        Ok(Handle {
            chunk_index,
            block_index: last_chunk.len() - 1,
        })
    }

    /// Returns an immutable reference to an object in the typed arena. Returns `None` if the
    /// handle does not correspond to a valid object.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0).unwrap();
    /// assert_eq!(arena.get(&x), Some(&0));
    /// ```
    pub fn get(&self, handle: &Handle) -> Option<&T> {
        if !self.is_valid_handle(handle) {
            return None;
        }
        Some(&self.chunks[handle.chunk_index][handle.block_index])
    }

    /// Returns a mutable reference to an object in the typed arena. Returns `None` if the handle
    /// does not correspond to a valid object.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0).unwrap();
    /// assert_eq!(arena.get_mut(&x), Some(&mut 0));
    /// ```
    pub fn get_mut(&mut self, handle: &Handle) -> Option<&mut T> {
        if !self.is_valid_handle(handle) {
            return None;
        }
        Some(&mut self.chunks[handle.chunk_index][handle.block_index])
    }

    /// Returns the number of objects allocated per chunk.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Returns the number of objects in the typed arena.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the typed arena holds no objects.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every object and releases every chunk. All previously returned handles become
    /// invalid.
    pub fn clear(&mut self) {
        self.chunks.clear();
        self.len = 0;
    }

    /// Returns the position of a handle in allocation order. Positions index into the vector
    /// returned by `into_vec`.
    pub fn position(&self, handle: &Handle) -> usize {
        handle.chunk_index * self.chunk_size + handle.block_index
    }

    /// Consumes the typed arena and returns every object in allocation order.
    pub fn into_vec(self) -> Vec<T> {
        let mut ret = Vec::with_capacity(self.len);
        for chunk in self.chunks {
            ret.extend(chunk);
        }
        ret
    }
}

impl<T> Index<Handle> for TypedArena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &Self::Output {
        self.get(&handle).expect("Error: handle out of bounds.")
    }
}

impl<T> IndexMut<Handle> for TypedArena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        self.get_mut(&handle).expect("Error: handle out of bounds.")
    }
}

#[cfg(test)]
mod tests {
    use super::Handle;
    use super::TypedArena;

    #[test]
    #[should_panic]
    fn test_zero_chunk_size() {
        let _: TypedArena<u32> = TypedArena::new(0);
    }

    #[test]
    #[should_panic]
    fn test_index_invalid_block() {
        let arena: TypedArena<u32> = TypedArena::new(1024);
        let _value: u32 = arena[Handle {
            chunk_index: 0,
            block_index: 0,
        }];
    }

    #[test]
    fn test_allocate() {
        let mut pool = TypedArena::new(1024);
        assert_eq!(
            pool.allocate(0).unwrap(),
            Handle {
                chunk_index: 0,
                block_index: 0
            },
        );
        assert_eq!(
            pool.allocate(0).unwrap(),
            Handle {
                chunk_index: 0,
                block_index: 1
            },
        );
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_allocate_multiple_chunks() {
        let mut pool = TypedArena::new(2);
        pool.allocate(0).unwrap();
        pool.allocate(0).unwrap();
        assert_eq!(
            pool.allocate(0).unwrap(),
            Handle {
                chunk_index: 1,
                block_index: 0
            },
        );
    }

    #[test]
    fn test_get_invalid_block() {
        let pool: TypedArena<u32> = TypedArena::new(1024);
        assert_eq!(
            pool.get(&Handle {
                chunk_index: 0,
                block_index: 0
            }),
            None,
        );
    }

    #[test]
    fn test_get_mut() {
        let mut pool = TypedArena::new(1024);
        let handle = pool.allocate(0).unwrap();
        *pool.get_mut(&handle).unwrap() = 1;
        assert_eq!(pool.get(&handle), Some(&1));
    }

    #[test]
    fn test_clear() {
        let mut pool = TypedArena::new(4);
        let handle = pool.allocate(0).unwrap();
        pool.clear();
        assert!(pool.is_empty());
        assert_eq!(pool.get(&handle), None);
        assert_eq!(pool.allocate(1).unwrap(), handle);
    }

    #[test]
    fn test_into_vec_positions() {
        let mut pool = TypedArena::new(2);
        let handles: Vec<Handle> = (0..5).map(|i| pool.allocate(i * 10).unwrap()).collect();
        let positions: Vec<usize> = handles.iter().map(|h| pool.position(h)).collect();
        assert_eq!(positions, vec![0, 1, 2, 3, 4]);
        assert_eq!(pool.into_vec(), vec![0, 10, 20, 30, 40]);
    }
}
