//! In-memory catalog lists for the supplier and product screens.
//!
//! These screens edit a local copy only; nothing is sent to the backend.

use thiserror::Error;

/// Record that lives under a parent (supplier → store, product → supplier)
pub trait CatalogEntry: Clone {
    type ParentId: Copy + PartialEq + std::fmt::Debug;

    fn key(&self) -> Option<i64>;
    fn name(&self) -> &str;
    fn parent(&self) -> Self::ParentId;
    fn renamed(&self, name: String) -> Self;
    fn create(key: i64, name: String, parent: Self::ParentId) -> Self;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("El nombre no puede estar vacío")]
    BlankName,
    #[error("Seleccione primero el elemento padre")]
    MissingParent,
    #[error("Registro {0} no encontrado")]
    NotFound(i64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocalCatalog<T: CatalogEntry> {
    items: Vec<T>,
}

impl<T: CatalogEntry> LocalCatalog<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, key: i64) -> Option<&T> {
        self.items.iter().find(|i| i.key() == Some(key))
    }

    /// Entries of one parent, or all when no parent is selected
    pub fn filtered(&self, parent: Option<T::ParentId>) -> Vec<T> {
        self.items
            .iter()
            .filter(|i| parent.map_or(true, |p| i.parent() == p))
            .cloned()
            .collect()
    }

    /// Adds an entry keyed `max + 1`, returns the new key
    pub fn create(&mut self, name: &str, parent: Option<T::ParentId>) -> Result<i64, CatalogError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::BlankName);
        }
        let parent = parent.ok_or(CatalogError::MissingParent)?;
        let key = self.items.iter().filter_map(T::key).max().unwrap_or(0) + 1;
        self.items.push(T::create(key, name.to_string(), parent));
        Ok(key)
    }

    pub fn rename(&mut self, key: i64, name: &str) -> Result<(), CatalogError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::BlankName);
        }
        let item = self
            .items
            .iter_mut()
            .find(|i| i.key() == Some(key))
            .ok_or(CatalogError::NotFound(key))?;
        *item = item.renamed(name.to_string());
        Ok(())
    }

    pub fn delete(&mut self, key: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.key() != Some(key));
        self.items.len() != before
    }
}
