//! Object Graph Walker - relationship property classification

use crate::metadata::RelationshipDescriptor;
use crate::resource::{ObjectRef, RelationshipValue, ResourceObject};

/// A relationship property after classification.
///
/// An empty relationship is wholly omitted from output (no key at all, not
/// even `{"data": null}`); a zero-element collection counts as empty.
#[derive(Clone)]
pub enum Relationship {
    /// Null, absent, or a collection with zero elements
    Empty,
    /// A single related object (to-one)
    Singular(ObjectRef),
    /// An ordered, non-empty collection of related objects (to-many)
    Collection(Vec<ObjectRef>),
}

impl std::fmt::Debug for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::Singular(object) => write!(f, "Singular({})", object.object_type()),
            Self::Collection(objects) => write!(f, "Collection(len={})", objects.len()),
        }
    }
}

impl Relationship {
    /// Check whether this relationship carries no data
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Read one declared relationship off an object and classify it.
pub fn classify(object: &dyn ResourceObject, descriptor: &RelationshipDescriptor) -> Relationship {
    match object.relationship(&descriptor.property_name) {
        RelationshipValue::Null => Relationship::Empty,
        RelationshipValue::Many(objects) if objects.is_empty() => Relationship::Empty,
        RelationshipValue::Many(objects) => Relationship::Collection(objects),
        RelationshipValue::One(object) => Relationship::Singular(object),
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use serde_json::Map;

    use super::*;
    use crate::resource::ResourceId;

    struct StubObject {
        related: Vec<(&'static str, RelationshipValue)>,
    }

    impl ResourceObject for StubObject {
        fn object_type(&self) -> &str {
            "Stub"
        }

        fn id(&self) -> Option<ResourceId> {
            Some(ResourceId::from("1"))
        }

        fn attributes(&self) -> Map<String, serde_json::Value> {
            Map::new()
        }

        fn relationship(&self, property: &str) -> RelationshipValue {
            self.related
                .iter()
                .find(|(name, _)| *name == property)
                .map(|(_, value)| value.clone())
                .unwrap_or(RelationshipValue::Null)
        }
    }

    fn create_test_target() -> ObjectRef {
        Rc::new(StubObject {
            related: Vec::new(),
        })
    }

    #[test]
    fn test_classify_null_as_empty() {
        let object = StubObject {
            related: vec![("author", RelationshipValue::Null)],
        };
        let descriptor = RelationshipDescriptor::new("author");
        assert!(classify(&object, &descriptor).is_empty());
    }

    #[test]
    fn test_classify_absent_property_as_empty() {
        let object = StubObject {
            related: Vec::new(),
        };
        let descriptor = RelationshipDescriptor::new("author");
        assert!(classify(&object, &descriptor).is_empty());
    }

    #[test]
    fn test_classify_empty_collection_as_empty() {
        let object = StubObject {
            related: vec![("comments", RelationshipValue::Many(Vec::new()))],
        };
        let descriptor = RelationshipDescriptor::new("comments");
        assert!(classify(&object, &descriptor).is_empty());
    }

    #[test]
    fn test_classify_singular() {
        let object = StubObject {
            related: vec![("author", RelationshipValue::One(create_test_target()))],
        };
        let descriptor = RelationshipDescriptor::new("author");
        assert!(matches!(
            classify(&object, &descriptor),
            Relationship::Singular(_)
        ));
    }

    #[test]
    fn test_classify_collection_keeps_order_and_size() {
        let object = StubObject {
            related: vec![(
                "comments",
                RelationshipValue::Many(vec![create_test_target(), create_test_target()]),
            )],
        };
        let descriptor = RelationshipDescriptor::new("comments");
        match classify(&object, &descriptor) {
            Relationship::Collection(objects) => assert_eq!(objects.len(), 2),
            other => panic!("expected collection, got {:?}", other),
        }
    }
}
