//! Resource Metadata - resource type declarations and relationship descriptors

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{SerializeError, SerializeResult};

/// Declares one relationship property on a resource class.
///
/// Descriptors are immutable once registered; their declaration order on
/// [`ResourceMetadata`] is the order relationships appear in output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipDescriptor {
    /// Property name on the source object, as read through the accessor
    /// abstraction (before wire-key translation).
    pub property_name: String,

    /// Whether targets of this relationship are eagerly side-loaded into
    /// the document's `included` section.
    pub included_by_default: bool,
}

impl RelationshipDescriptor {
    /// Create a descriptor that references its targets without side-loading
    pub fn new(property_name: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            included_by_default: false,
        }
    }

    /// Enable or disable default inclusion for this relationship
    pub fn with_included_by_default(mut self, included: bool) -> Self {
        self.included_by_default = included;
        self
    }

    /// Validate the descriptor for consistency
    pub fn validate(&self) -> SerializeResult<()> {
        if self.property_name.is_empty() {
            return Err(SerializeError::metadata(
                "Relationship property name cannot be empty",
            ));
        }
        Ok(())
    }
}

/// Metadata for one resource class: its wire type name and its ordered
/// relationship descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceMetadata {
    /// The resource type name emitted as `type` on the wire
    pub resource_type: String,

    /// Relationship descriptors, in declaration order
    pub relationships: Vec<RelationshipDescriptor>,
}

impl ResourceMetadata {
    /// Create metadata for a resource with no relationships
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            relationships: Vec::new(),
        }
    }

    /// Append a relationship descriptor
    pub fn with_relationship(mut self, descriptor: RelationshipDescriptor) -> Self {
        self.relationships.push(descriptor);
        self
    }

    /// Validate the metadata for consistency
    pub fn validate(&self) -> SerializeResult<()> {
        if self.resource_type.is_empty() {
            return Err(SerializeError::metadata("Resource type cannot be empty"));
        }

        let mut seen = HashSet::new();
        for descriptor in &self.relationships {
            descriptor.validate()?;
            if !seen.insert(descriptor.property_name.as_str()) {
                return Err(SerializeError::metadata(format!(
                    "Duplicate relationship '{}' on resource type '{}'",
                    descriptor.property_name, self.resource_type
                )));
            }
        }

        Ok(())
    }
}

/// Registry mapping object-type names to resource metadata.
///
/// Loaded once at serializer construction; lookups during document assembly
/// are read-only. An unregistered object type resolves to `None` and callers
/// skip the object silently rather than erroring, which keeps serialization
/// resilient to partially-configured metadata.
#[derive(Debug, Clone, Default)]
pub struct MetadataRegistry {
    resources: HashMap<String, ResourceMetadata>,
}

impl MetadataRegistry {
    /// Create a new empty metadata registry
    pub fn new() -> Self {
        Self {
            resources: HashMap::new(),
        }
    }

    /// Register resource metadata under an object type name
    pub fn register(
        &mut self,
        object_type: impl Into<String>,
        metadata: ResourceMetadata,
    ) -> SerializeResult<()> {
        metadata.validate()?;
        self.resources.insert(object_type.into(), metadata);
        Ok(())
    }

    /// Resolve metadata for an object type, if registered
    pub fn resolve(&self, object_type: &str) -> Option<&ResourceMetadata> {
        self.resources.get(object_type)
    }

    /// Check whether an object type has registered metadata
    pub fn has_resource(&self, object_type: &str) -> bool {
        self.resources.contains_key(object_type)
    }

    /// Number of registered resource classes
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Check whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
