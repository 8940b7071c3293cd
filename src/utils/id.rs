//! Typed identifiers for stored assets

use std::{
    fmt::Debug,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

/// Identifier of an asset of type `T`
pub struct Id<T> {
    value: uuid::Uuid,
    phantom: PhantomData<T>,
}

impl<T> Id<T> {
    /// Constructs new random id
    pub fn new() -> Self {
        Self::from(uuid::Uuid::new_v4())
    }

    /// Construct new null id
    pub fn null() -> Self {
        Self::from(uuid::Uuid::nil())
    }

    /// Checks if id is null
    pub fn is_null(&self) -> bool {
        self.value.is_nil()
    }

    /// Returns reference to internal Uuid instance
    pub fn uuid(&self) -> &uuid::Uuid {
        &self.value
    }
}

impl<T> From<uuid::Uuid> for Id<T> {
    fn from(value: uuid::Uuid) -> Self {
        Self {
            value,
            phantom: PhantomData,
        }
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Debug for Id<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let of_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("?");
        write!(f, "Id<{}>({})", of_type, self.value.hyphenated())
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::null()
    }
}

#[cfg(test)]
mod tests {
    use super::Id;

    struct Marker;

    #[test]
    fn null_id_is_default() {
        let id: Id<Marker> = Id::default();
        assert!(id.is_null());
        assert_eq!(id, Id::null());
    }

    #[test]
    fn random_ids_differ() {
        let a: Id<Marker> = Id::new();
        let b: Id<Marker> = Id::new();
        assert!(!a.is_null());
        assert_ne!(a, b);
        assert!(format!("{:?}", a).starts_with("Id<Marker>("));
    }
}
