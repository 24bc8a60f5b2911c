//! Document Assembly - orchestrates one full JSON:API document
//!
//! The serializer owns the traversal explicitly: each object's attributes
//! are merged into an owned, ordered output builder, relationships are
//! encoded in declaration order, and only the top-level call attaches the
//! document's `included` section.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::debug;

use crate::encoder::RelationshipEncoder;
use crate::error::{SerializeError, SerializeResult};
use crate::metadata::MetadataRegistry;
use crate::naming::{IdentityNaming, NamingStrategy};
use crate::registry::IncludedRegistry;
use crate::resource::ResourceObject;
use crate::walker::classify;

/// Tunables for document assembly.
#[derive(Debug, Clone)]
pub struct SerializerConfig {
    /// Upper bound on traversal depth. The identifier cycle guard terminates
    /// cycles between stably-identified resources; this cap is the safety
    /// net for graphs whose objects lack stable ids.
    pub max_include_depth: usize,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            max_include_depth: 32,
        }
    }
}

impl SerializerConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum traversal depth
    pub fn with_max_include_depth(mut self, depth: usize) -> Self {
        self.max_include_depth = depth;
        self
    }
}

/// Per-document traversal state: the included registry and current depth.
///
/// Created fresh for every top-level serialize call and threaded through the
/// traversal by argument, never stored beyond it.
pub(crate) struct DocumentContext {
    pub(crate) included: IncludedRegistry,
    depth: usize,
}

impl DocumentContext {
    fn new() -> Self {
        Self {
            included: IncludedRegistry::new(),
            depth: 0,
        }
    }
}

/// Ordered output builder for one resource object.
///
/// Owning the output map makes "`type` comes first" an insertion-order fact:
/// `prepend` is part of the public contract instead of a reflective poke at
/// a foreign serializer's internals.
#[derive(Debug, Default)]
pub struct ResourceBuilder {
    fields: IndexMap<String, Value>,
}

impl ResourceBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Append a key at the back of the output
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    /// Insert a key at the front of the output, shifting existing keys back
    pub fn prepend(&mut self, key: impl Into<String>, value: Value) {
        self.fields.shift_insert(0, key.into(), value);
    }

    /// Check whether any field has been written
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Finish the builder into an object map, preserving key order
    pub fn into_map(self) -> Map<String, Value> {
        let mut map = Map::new();
        for (key, value) in self.fields {
            map.insert(key, value);
        }
        map
    }
}

/// Assembles JSON:API-shaped documents from an in-memory object graph.
///
/// Holds long-lived collaborators only (metadata, naming, config); all
/// per-document state lives in a context scoped to one
/// [`serialize_document`](Serializer::serialize_document) call.
pub struct Serializer {
    metadata: MetadataRegistry,
    naming: Box<dyn NamingStrategy>,
    config: SerializerConfig,
}

impl Serializer {
    /// Create a serializer with identity naming and default config
    pub fn new(metadata: MetadataRegistry) -> Self {
        Self {
            metadata,
            naming: Box::new(IdentityNaming),
            config: SerializerConfig::default(),
        }
    }

    /// Replace the wire-key naming strategy
    pub fn with_naming(mut self, naming: impl NamingStrategy + 'static) -> Self {
        self.naming = Box::new(naming);
        self
    }

    /// Replace the assembly config
    pub fn with_config(mut self, config: SerializerConfig) -> Self {
        self.config = config;
        self
    }

    /// The metadata registry backing this serializer
    pub fn metadata(&self) -> &MetadataRegistry {
        &self.metadata
    }

    /// Assemble a complete document rooted at `root`.
    ///
    /// The included registry lives exactly as long as this call; `included`
    /// is attached here and never on nested resources, and only when at
    /// least one resource was side-loaded.
    pub fn serialize_document(&self, root: &dyn ResourceObject) -> SerializeResult<Value> {
        let mut ctx = DocumentContext::new();
        let mut output = self.serialize_resource(root, &mut ctx)?;

        let included_count = ctx.included.len();
        if !ctx.included.is_empty() {
            output.insert(
                "included".to_string(),
                Value::Array(ctx.included.into_entries()),
            );
        }
        debug!(
            object_type = root.object_type(),
            included = included_count,
            "assembled document"
        );

        Ok(Value::Object(output))
    }

    /// Serialize one resource object: its own attributes, then non-empty
    /// relationships in declaration order, then `type` and `id` prepended in
    /// front of everything.
    pub(crate) fn serialize_resource(
        &self,
        object: &dyn ResourceObject,
        ctx: &mut DocumentContext,
    ) -> SerializeResult<Map<String, Value>> {
        if ctx.depth >= self.config.max_include_depth {
            return Err(SerializeError::IncludeDepthExceeded {
                max: self.config.max_include_depth,
            });
        }
        ctx.depth += 1;
        let result = self.serialize_resource_fields(object, ctx);
        ctx.depth -= 1;
        result
    }

    fn serialize_resource_fields(
        &self,
        object: &dyn ResourceObject,
        ctx: &mut DocumentContext,
    ) -> SerializeResult<Map<String, Value>> {
        let metadata = self
            .metadata
            .resolve(object.object_type())
            .ok_or_else(|| SerializeError::UnknownObjectType {
                object_type: object.object_type().to_string(),
            })?;

        let mut builder = ResourceBuilder::new();
        for (key, value) in object.attributes() {
            builder.insert(key, value);
        }

        let encoder = RelationshipEncoder::new(self);
        let mut relationships = Map::new();
        for descriptor in &metadata.relationships {
            let relationship = classify(object, descriptor);
            if relationship.is_empty() {
                continue;
            }
            if let Some(data) = encoder.encode(relationship, descriptor, ctx)? {
                let wire_key = self.naming.translate(&descriptor.property_name);
                let mut block = Map::new();
                block.insert("data".to_string(), data);
                relationships.insert(wire_key, Value::Object(block));
            }
        }
        if !relationships.is_empty() {
            builder.insert("relationships", Value::Object(relationships));
        }

        // Resource objects are identified by type and id; id can be absent
        // only on primary data that was never persisted.
        if let Some(id) = object.id() {
            builder.prepend("id", Value::String(id.as_str().to_string()));
        }
        builder.prepend("type", Value::String(metadata.resource_type.clone()));
        Ok(builder.into_map())
    }
}
