use crate::foundation::error::{PathElem, ValidationError};
use crate::scene::object::{ContentObject, ObjectKind};
use crate::schema::base::validate_base;
use crate::schema::fields::{FieldBag, as_str};
use crate::schema::vocab::ObjectType;
use crate::schema::{music, variants};
use serde_json::Value;

type VariantValidator = fn(&FieldBag<'_>) -> Result<ObjectKind, ValidationError>;

/// Variant rules keyed by type tag.
fn variant_validator(ty: ObjectType) -> VariantValidator {
    match ty {
        ObjectType::Paragraph => variants::paragraph,
        ObjectType::Text => variants::text,
        ObjectType::Link => variants::link,
        ObjectType::Image => variants::image,
        ObjectType::Graphic => variants::graphic,
        ObjectType::AnimatedImage => variants::animated_image,
        ObjectType::Video => variants::video,
        ObjectType::Music => music::music,
    }
}

/// Base fields first, then the variant's own rules.
pub(crate) fn validate(ty: ObjectType, fields: &Value) -> Result<ContentObject, ValidationError> {
    let bag = FieldBag::new(fields, Vec::new())?;
    let base = validate_base(&bag)?;
    let kind = variant_validator(ty)(&bag)?;
    debug_assert_eq!(kind.object_type(), ty);
    Ok(ContentObject::new(base, kind))
}

#[tracing::instrument(skip(value))]
pub(crate) fn validate_tagged(value: &Value) -> Result<ContentObject, ValidationError> {
    let bag = FieldBag::new(value, Vec::new())?;
    let tag = as_str(bag.require("type")?, &[PathElem::Field("type")])?;
    let ty: ObjectType = tag.parse()?;
    tracing::trace!(object_type = %ty, "validating scene object");
    validate(ty, value)
}

#[cfg(test)]
#[path = "../../tests/unit/schema/dispatch.rs"]
mod tests;
