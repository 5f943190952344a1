//! IndexingContext: loaded configuration and schema shared by item builders

use crate::config::{Configuration, ItemDefaults};
use crate::error::IndexingResult;
use crate::schema::{Schema, StructuredData};
use std::sync::Arc;

/// Holds the item defaults and structured data schema for a connector.
///
/// Both are loaded once and then only read. Builders take `Arc` clones, so
/// resetting the context does not affect builders created earlier.
#[derive(Debug, Clone, Default)]
pub struct IndexingContext {
    defaults: Option<Arc<ItemDefaults>>,
    structured_data: Option<Arc<StructuredData>>,
}

impl IndexingContext {
    /// Create an uninitialized context
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse item defaults from `config`, replacing any previously loaded.
    ///
    /// Malformed literal values fail here, before any item is built.
    pub fn init_config(&mut self, config: &Configuration) -> IndexingResult<()> {
        let defaults = ItemDefaults::from_configuration(config)?;
        tracing::debug!(keys = config.len(), "item defaults loaded");
        self.defaults = Some(Arc::new(defaults));
        Ok(())
    }

    /// Load a structured data schema, replacing any previously loaded
    pub fn init_schema(&mut self, schema: Schema) -> IndexingResult<()> {
        let structured_data = StructuredData::new(schema)?;
        tracing::debug!(
            object_types = structured_data.object_types().count(),
            "structured data schema loaded"
        );
        self.structured_data = Some(Arc::new(structured_data));
        Ok(())
    }

    /// Drop all loaded state
    pub fn reset(&mut self) {
        self.defaults = None;
        self.structured_data = None;
    }

    pub fn is_config_initialized(&self) -> bool {
        self.defaults.is_some()
    }

    pub fn is_schema_initialized(&self) -> bool {
        self.structured_data.is_some()
    }

    pub fn defaults(&self) -> Option<Arc<ItemDefaults>> {
        self.defaults.clone()
    }

    pub fn structured_data(&self) -> Option<Arc<StructuredData>> {
        self.structured_data.clone()
    }
}
