use thiserror::Error;

use crate::{find_module, CatalogModule};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error("no module named '{0}' exists in the catalog")]
    UnknownModule(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAddOutcome {
    Added,
    AlreadyPresent,
}

/// Catalog modules the student has set aside for planning.
#[derive(Debug, Clone, Default)]
pub struct ModuleCart {
    modules: Vec<&'static CatalogModule>,
}

impl ModuleCart {
    pub fn add(&mut self, name: &str) -> Result<CartAddOutcome, CartError> {
        let module =
            find_module(name).ok_or_else(|| CartError::UnknownModule(name.trim().to_string()))?;
        if self.modules.iter().any(|held| held.name == module.name) {
            return Ok(CartAddOutcome::AlreadyPresent);
        }
        self.modules.push(module);
        Ok(CartAddOutcome::Added)
    }

    /// Returns `true` when a module was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.modules.len();
        self.modules
            .retain(|module| !module.name.eq_ignore_ascii_case(name.trim()));
        self.modules.len() != before
    }

    pub fn modules(&self) -> &[&'static CatalogModule] {
        &self.modules
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn total_credits(&self) -> u32 {
        self.modules.iter().map(|module| module.credits).sum()
    }
}
