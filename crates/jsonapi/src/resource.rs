//! Resource Access - accessor abstraction over the serialized object graph

use std::fmt;
use std::rc::Rc;

use serde_json::{Map, Value};

/// Scalar identifier of a resource.
///
/// Stored in canonical string form; numeric ids convert through the `From`
/// impls and serialize as JSON strings. Deduplication compares these
/// canonical forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(String);

impl ResourceId {
    /// Create an id from anything string-like
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The canonical string form
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<i64> for ResourceId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for ResourceId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// The (type, id) pair that uniquely names a resource within a document.
///
/// Equality and hashing cover both fields; this is the unit of deduplication
/// for the `included` section.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceIdentifier {
    /// Wire resource type name
    pub resource_type: String,

    /// Resource id
    pub id: ResourceId,
}

impl ResourceIdentifier {
    /// Create an identifier from a resource type and id
    pub fn new(resource_type: impl Into<String>, id: impl Into<ResourceId>) -> Self {
        Self {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }

    /// Render as JSON:API relationship data: `{"type": .., "id": ..}`
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert(
            "type".to_string(),
            Value::String(self.resource_type.clone()),
        );
        map.insert(
            "id".to_string(),
            Value::String(self.id.as_str().to_string()),
        );
        Value::Object(map)
    }
}

impl fmt::Display for ResourceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.resource_type, self.id)
    }
}

/// Shared handle to one node of the object graph.
///
/// `Rc` so that graphs with shared or cyclic references are representable;
/// traversal is single-threaded by contract.
pub type ObjectRef = Rc<dyn ResourceObject>;

/// Raw value of a relationship property, before classification.
#[derive(Clone)]
pub enum RelationshipValue {
    /// No related object
    Null,
    /// A single related object (to-one)
    One(ObjectRef),
    /// An ordered collection of related objects (to-many)
    Many(Vec<ObjectRef>),
}

impl fmt::Debug for RelationshipValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::One(object) => write!(f, "One({})", object.object_type()),
            Self::Many(objects) => write!(f, "Many(len={})", objects.len()),
        }
    }
}

/// Accessor abstraction over one node of the object graph.
///
/// Decouples traversal from concrete object shape: implementations may read
/// plain fields, computed accessors, or interior-mutable cells, and the
/// attribute map is the external attribute-serializer contract (ordered
/// wire-key to value, independent of this core).
pub trait ResourceObject {
    /// Type name used to look up resource metadata for this object
    fn object_type(&self) -> &str;

    /// The object's identifier, if it has one
    fn id(&self) -> Option<ResourceId>;

    /// Ordered mapping of wire keys to serialized attribute values
    fn attributes(&self) -> Map<String, Value>;

    /// Read the named relationship property
    fn relationship(&self, property: &str) -> RelationshipValue;
}
