use crate::prelude::*;
use std::{
    collections::BTreeMap,
    sync::{Arc, LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

///
/// Category
///
/// Metadata category a registry slot belongs to. Each (category, class)
/// pair holds at most one value.
///

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
#[remain::sorted]
pub enum Category {
    Model,
    Properties,
    Relations,
}

///
/// MetadataValue
///
/// One registry slot. The variant always matches the slot's category;
/// the typed stores are the only writers.
///

#[derive(Clone, Debug)]
pub enum MetadataValue {
    Model(ModelMetadata),
    Properties(Arc<PropertyMetadataMap>),
    Relations(Arc<RelationMetadataMap>),
}

///
/// Registry
///
/// Associative store mapping (category, class path) to a metadata value.
/// Lookups are own-metadata only; nothing is consulted or merged from a
/// base class.
///

#[derive(Debug, Default)]
pub struct Registry {
    slots: BTreeMap<(Category, String), MetadataValue>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, replacing any prior value for this exact slot.
    pub fn define(&mut self, category: Category, class: &ClassDef, value: MetadataValue) {
        self.slots.insert((category, class.path()), value);
    }

    /// Read a class's own value for a category, if one was defined.
    #[must_use]
    pub fn get_own(&self, category: Category, class: &ClassDef) -> Option<&MetadataValue> {
        self.slots.get(&(category, class.path()))
    }
}

///
/// REGISTRY
/// the process-wide store populated at class-declaration time
///

static REGISTRY: LazyLock<RwLock<Registry>> = LazyLock::new(|| RwLock::new(Registry::new()));

/// Acquire a write guard to the global registry during class declaration.
pub fn registry_write() -> RwLockWriteGuard<'static, Registry> {
    REGISTRY
        .write()
        .expect("registry RwLock poisoned while acquiring write lock")
}

/// Read the global registry.
pub fn registry_read() -> RwLockReadGuard<'static, Registry> {
    REGISTRY
        .read()
        .expect("registry RwLock poisoned while acquiring read lock")
}
