/// A key-value pair stored in a node. Ordering of entries is decided by the owning collection's
/// comparator, so `Entry` carries no ordering of its own.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry<T, U> {
    pub key: T,
    pub value: U,
}

impl<T, U> Entry<T, U> {
    pub fn into_pair(self) -> (T, U) {
        (self.key, self.value)
    }
}
