//! Static, read-only component catalog

pub mod data;

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::{
    CatalogStats, ComponentCatalog, ComponentCategory, ComponentDescriptor, GeneratorResult,
};

/// In-process catalog built from the static component records.
///
/// The catalog is immutable after construction; lookups are plain map reads
/// and never fail.
pub struct StaticCatalog {
    components: Vec<ComponentDescriptor>,
    index: HashMap<String, usize>,
}

impl StaticCatalog {
    /// Builds the catalog from the built-in component records.
    pub fn new() -> Self {
        Self::with_components(data::all_components())
    }

    /// Builds a catalog from explicit records (used by tests).
    pub fn with_components(components: Vec<ComponentDescriptor>) -> Self {
        let index = components
            .iter()
            .enumerate()
            .map(|(i, c)| (c.component_id.clone(), i))
            .collect();
        Self { components, index }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ComponentCatalog for StaticCatalog {
    async fn get_component(
        &self,
        component_id: &str,
    ) -> GeneratorResult<Option<ComponentDescriptor>> {
        Ok(self
            .index
            .get(component_id)
            .map(|i| self.components[*i].clone()))
    }

    async fn list_by_category(
        &self,
        category: ComponentCategory,
    ) -> GeneratorResult<Vec<ComponentDescriptor>> {
        Ok(self
            .components
            .iter()
            .filter(|c| c.category == category)
            .cloned()
            .collect())
    }

    async fn search(
        &self,
        query: &str,
        category: Option<ComponentCategory>,
    ) -> GeneratorResult<Vec<ComponentDescriptor>> {
        let query = query.to_lowercase();
        Ok(self
            .components
            .iter()
            .filter(|c| category.map_or(true, |cat| c.category == cat))
            .filter(|c| {
                c.name.to_lowercase().contains(&query)
                    || c.description.to_lowercase().contains(&query)
                    || c.capabilities
                        .iter()
                        .any(|cap| cap.to_lowercase().contains(&query))
            })
            .cloned()
            .collect())
    }

    async fn stats(&self) -> GeneratorResult<CatalogStats> {
        let mut by_category: HashMap<String, usize> = HashMap::new();
        let mut by_kind: HashMap<String, usize> = HashMap::new();
        let mut capabilities: Vec<&str> = Vec::new();

        for c in &self.components {
            *by_category.entry(c.category.to_string()).or_default() += 1;
            *by_kind.entry(c.kind.to_string()).or_default() += 1;
            capabilities.extend(c.capabilities.iter().map(String::as_str));
        }
        capabilities.sort_unstable();
        capabilities.dedup();

        let mut by_category: Vec<(String, usize)> = by_category.into_iter().collect();
        by_category.sort();
        let mut by_kind: Vec<(String, usize)> = by_kind.into_iter().collect();
        by_kind.sort();

        Ok(CatalogStats {
            total_components: self.components.len(),
            by_category,
            by_kind,
            total_capabilities: capabilities.len(),
        })
    }
}
