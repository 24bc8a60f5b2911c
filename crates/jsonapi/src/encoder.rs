//! Relationship Encoder - type/id reference encoding and side-loading

use serde_json::Value;
use tracing::debug;

use crate::document::{DocumentContext, Serializer};
use crate::error::{SerializeError, SerializeResult};
use crate::metadata::RelationshipDescriptor;
use crate::resource::{ObjectRef, ResourceIdentifier};
use crate::walker::Relationship;

/// Encodes one classified relationship into its `data` payload, registering
/// default-included targets in the document's registry along the way.
pub(crate) struct RelationshipEncoder<'s> {
    serializer: &'s Serializer,
}

impl<'s> RelationshipEncoder<'s> {
    pub(crate) fn new(serializer: &'s Serializer) -> Self {
        Self { serializer }
    }

    /// Encode a relationship's `data` value.
    ///
    /// Returns `None` for an empty relationship, and for a to-one whose
    /// target type has no registered metadata; in both cases the
    /// relationship key is omitted entirely. A to-many always yields an
    /// array, with unresolvable elements dropped from it.
    pub(crate) fn encode(
        &self,
        relationship: Relationship,
        descriptor: &RelationshipDescriptor,
        ctx: &mut DocumentContext,
    ) -> SerializeResult<Option<Value>> {
        match relationship {
            Relationship::Empty => Ok(None),
            Relationship::Singular(object) => Ok(self
                .encode_one(&object, descriptor, ctx)?
                .map(|identifier| identifier.to_value())),
            Relationship::Collection(objects) => {
                let mut data = Vec::with_capacity(objects.len());
                for object in &objects {
                    if let Some(identifier) = self.encode_one(object, descriptor, ctx)? {
                        data.push(identifier.to_value());
                    }
                }
                Ok(Some(Value::Array(data)))
            }
        }
    }

    /// Encode a single related object as a resource identifier.
    ///
    /// The placeholder goes into the registry before the recursive
    /// serialization of the same object, so re-entering an identifier mid
    /// cycle short-circuits at the `insert_placeholder` call instead of
    /// recursing forever.
    fn encode_one(
        &self,
        object: &ObjectRef,
        descriptor: &RelationshipDescriptor,
        ctx: &mut DocumentContext,
    ) -> SerializeResult<Option<ResourceIdentifier>> {
        let Some(metadata) = self.serializer.metadata().resolve(object.object_type()) else {
            debug!(
                object_type = object.object_type(),
                property = descriptor.property_name.as_str(),
                "skipping relationship target without registered metadata"
            );
            return Ok(None);
        };

        let id = object.id().ok_or_else(|| SerializeError::MissingId {
            object_type: object.object_type().to_string(),
        })?;
        let identifier = ResourceIdentifier::new(metadata.resource_type.clone(), id);

        if descriptor.included_by_default && ctx.included.insert_placeholder(identifier.clone()) {
            let content = self.serializer.serialize_resource(object.as_ref(), ctx)?;
            ctx.included.promote(&identifier, Value::Object(content));
        }

        // Relationship data is always just the identifier, whatever the
        // inclusion outcome.
        Ok(Some(identifier))
    }
}
