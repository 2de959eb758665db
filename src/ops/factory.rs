//! Operation factory system with self-registration and rich metadata

use std::collections::{BTreeMap, HashMap};

use log::{debug, warn};
use once_cell::sync::Lazy;

use crate::ops::error::{MathError, Result};
use crate::ops::value::{DataType, Value};

/// Hierarchical category system for organizing operations
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperationCategory {
    path: Vec<String>,
}

impl OperationCategory {
    /// Create a new category from path components
    pub fn new(path: &[&str]) -> Self {
        Self {
            path: path.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Get the full path as a slice
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Get the category name (last component)
    pub fn name(&self) -> &str {
        self.path.last().map(|s| s.as_str()).unwrap_or("")
    }

    /// Get display string for log output
    pub fn display_string(&self) -> String {
        self.path.join(" > ")
    }

    /// Get standard math category
    pub fn math() -> Self {
        Self::new(&["Math"])
    }
}

/// Port definition for operation metadata
#[derive(Debug, Clone)]
pub struct PortDefinition {
    pub name: String,
    pub data_type: DataType,
    pub optional: bool,
    pub description: Option<String>,
}

impl PortDefinition {
    /// Create a required port
    pub fn required(name: &str, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            optional: false,
            description: None,
        }
    }

    /// Create an optional port
    pub fn optional(name: &str, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            optional: true,
            description: None,
        }
    }

    /// Add description to port
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// Rich metadata for operations - the single source of truth for operation behavior
#[derive(Debug, Clone)]
pub struct OperationMetadata {
    // Core identity
    pub op_type: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub version: &'static str,

    // Organization & categorization
    pub category: OperationCategory,
    pub tags: Vec<&'static str>,

    // Connectivity
    pub inputs: Vec<PortDefinition>,
    pub outputs: Vec<PortDefinition>,
}

impl OperationMetadata {
    /// Create operation metadata with sensible defaults
    pub fn new(
        op_type: &'static str,
        display_name: &'static str,
        category: OperationCategory,
        description: &'static str,
    ) -> Self {
        Self {
            op_type,
            display_name,
            description,
            version: "1.0",
            category,
            tags: vec![],
            inputs: vec![],
            outputs: vec![],
        }
    }

    /// Builder pattern methods for fluent configuration
    pub fn with_inputs(mut self, inputs: Vec<PortDefinition>) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn with_outputs(mut self, outputs: Vec<PortDefinition>) -> Self {
        self.outputs = outputs;
        self
    }

    pub fn with_tags(mut self, tags: Vec<&'static str>) -> Self {
        self.tags = tags;
        self
    }
}

/// Factory trait tying an operation's metadata to its evaluator
pub trait OperationFactory: Send + Sync {
    /// Get comprehensive operation metadata
    fn metadata() -> OperationMetadata
    where
        Self: Sized;

    /// Evaluate the operation over the given operands
    fn evaluate(inputs: &[Value]) -> Result<Vec<Value>>
    where
        Self: Sized;
}

/// Function pointer type for evaluating operations
type Evaluator = fn(&[Value]) -> Result<Vec<Value>>;
type MetadataProvider = fn() -> OperationMetadata;

/// Registry for managing operation factories
pub struct OperationRegistry {
    evaluators: BTreeMap<String, Evaluator>,
    metadata_providers: BTreeMap<String, MetadataProvider>,
    categories: HashMap<OperationCategory, Vec<String>>,
}

impl OperationRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            evaluators: BTreeMap::new(),
            metadata_providers: BTreeMap::new(),
            categories: HashMap::new(),
        }
    }

    /// Register an operation factory
    pub fn register<T: OperationFactory + 'static>(&mut self) {
        let metadata = T::metadata();
        let op_type = metadata.op_type.to_string();

        if self.evaluators.contains_key(&op_type) {
            warn!("Operation '{}' already registered, replacing", op_type);
        }
        debug!(
            "Registering operation '{}' in category '{}'",
            op_type,
            metadata.category.display_string()
        );

        let listed = self.categories.entry(metadata.category.clone()).or_default();
        if !listed.contains(&op_type) {
            listed.push(op_type.clone());
        }

        self.metadata_providers.insert(op_type.clone(), T::metadata);
        self.evaluators.insert(op_type, T::evaluate);
    }

    /// Evaluate a registered operation by type name
    pub fn evaluate(&self, op_type: &str, inputs: &[Value]) -> Result<Vec<Value>> {
        let evaluator = self
            .evaluators
            .get(op_type)
            .ok_or_else(|| MathError::UnknownOperation(op_type.to_string()))?;
        evaluator(inputs)
    }

    /// Get metadata for a registered operation
    pub fn metadata(&self, op_type: &str) -> Option<OperationMetadata> {
        self.metadata_providers.get(op_type).map(|provider| provider())
    }

    /// Get all registered operation type names, sorted
    pub fn op_types(&self) -> Vec<&str> {
        self.evaluators.keys().map(String::as_str).collect()
    }

    /// Get the operation type names registered under a category
    pub fn operations_in_category(&self, category: &OperationCategory) -> &[String] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Default for OperationRegistry {
    /// Create a registry with all built-in operations registered
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register::<crate::ops::math::add::AddFactory>();
        registry.register::<crate::ops::math::subtract::SubtractFactory>();
        registry
    }
}

static DEFAULT_REGISTRY: Lazy<OperationRegistry> = Lazy::new(OperationRegistry::default);

/// Shared registry with the built-in operations registered
pub fn default_registry() -> &'static OperationRegistry {
    &DEFAULT_REGISTRY
}
