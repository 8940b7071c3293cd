use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::utils::Id;

/// Asset control abstraction trait
pub trait Asset: Send + Sync + 'static {
    /// Returns name of the asset
    fn name(&self) -> &str;
}

/// Assets library
///
/// Assets are stored behind `Arc`, every [`Assets::get`] hands out a new shared
/// handle. [`Assets::remove`] releases only the library handle, so data stays
/// alive until the last avatar or prop referencing it is dropped.
#[derive(Default)]
pub struct Assets {
    /// Index of IDs assigned by asset type and name
    registry: HashMap<(TypeId, String), Uuid>,
    /// Id indexed assets map
    map: HashMap<Uuid, Arc<dyn Any + Send + Sync>>,
}

impl Assets {
    /// Constructs new [`Assets`] instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an asset and returns [`Id`] of it
    pub fn set<T: Asset>(&mut self, asset: T) -> Id<T> {
        self.share(Arc::new(asset))
    }

    /// Stores an already shared asset, replacing one of the same name
    pub fn share<T: Asset>(&mut self, asset: Arc<T>) -> Id<T> {
        let uuid = *self
            .registry
            .entry((TypeId::of::<T>(), String::from(asset.name())))
            .or_insert_with(Uuid::new_v4);

        self.map.insert(uuid, asset);
        Id::from(uuid)
    }

    /// Returns a shared handle of the asset if it exists
    pub fn get<T: Asset>(&self, id: Id<T>) -> Option<Arc<T>> {
        self.map
            .get(id.uuid())
            .cloned()
            .and_then(|asset| asset.downcast::<T>().ok())
    }

    /// Removes an asset from the library and returns the library handle
    pub fn remove<T: Asset>(&mut self, id: Id<T>) -> Option<Arc<T>> {
        let asset = self.get(id)?;
        self.map.remove(id.uuid());
        self.registry.retain(|_, uuid| *uuid != *id.uuid());
        Some(asset)
    }

    /// Searches for an asset by the name and return [`Id`] of it if the asset exists
    pub fn find<T: Asset>(&self, name: &str) -> Option<Id<T>> {
        self.registry
            .get(&(TypeId::of::<T>(), String::from(name)))
            .map(|uuid| Id::from(*uuid))
    }

    /// Returns number of stored assets
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Image, Mesh};

    #[test]
    fn assets_are_found_by_type_and_name() {
        let mut assets = Assets::new();
        let mesh_id = assets.set(Mesh::new("tumbling_floor"));
        let image_id = assets.set(Image::placeholder("tumbling_floor"));

        assert_eq!(assets.find::<Mesh>("tumbling_floor"), Some(mesh_id));
        assert_eq!(assets.find::<Image>("tumbling_floor"), Some(image_id));
        assert_eq!(assets.find::<Mesh>("vault"), None);
        assert_eq!(assets.len(), 2);
    }

    #[test]
    fn removing_keeps_shared_handles_alive() {
        let mut assets = Assets::new();
        let id = assets.set(Mesh::cube("cube", 1.0));

        let avatar_handle = assets.get(id).expect("mesh is stored");
        let prop_handle = assets.get(id).expect("mesh is stored");
        assert_eq!(Arc::strong_count(&avatar_handle), 3);

        let library_handle = assets.remove(id).expect("mesh is stored");
        drop(library_handle);
        assert!(assets.get(id).is_none());
        assert!(assets.is_empty());

        assert_eq!(Arc::strong_count(&avatar_handle), 2);
        drop(prop_handle);
        assert_eq!(avatar_handle.count_vertices(), 24);
        assert_eq!(Arc::strong_count(&avatar_handle), 1);
    }
}
