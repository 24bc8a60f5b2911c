//! # jsonapi-document: JSON:API Document Serialization
//!
//! Assembles a JSON:API-shaped response document from an in-memory object
//! graph: attaches a resource type to each serialized object, encodes its
//! relationships as type/id references, and side-loads related resources
//! exactly once each, deduplicated across the whole document.
//!
//! Traversal is synchronous and depth-first. Side-loaded resources are
//! deduplicated by (type, id) in an insertion-ordered registry scoped to a
//! single document, and placeholder-then-promote registration makes cyclic
//! graphs converge instead of recursing forever.
//!
//! Attribute serialization, metadata declaration, and transport are
//! collaborator contracts: implement [`ResourceObject`] for your graph
//! nodes, declare types and relationships in a [`MetadataRegistry`], and
//! call [`Serializer::serialize_document`].

pub mod document;
pub mod error;
pub mod metadata;
pub mod naming;
pub mod registry;
pub mod resource;
pub mod walker;

mod encoder;

// Re-export core traits and types
pub use document::{ResourceBuilder, Serializer, SerializerConfig};
pub use error::{SerializeError, SerializeResult};
pub use metadata::{MetadataRegistry, RelationshipDescriptor, ResourceMetadata};
pub use naming::{IdentityNaming, KebabCaseNaming, NamingStrategy, SnakeCaseNaming};
pub use registry::{IncludedEntry, IncludedRegistry};
pub use resource::{ObjectRef, RelationshipValue, ResourceId, ResourceIdentifier, ResourceObject};
pub use walker::{classify, Relationship};
