use crate::foundation::core::{Frame, Transform, is_unit};
use crate::foundation::error::{PathElem, ValidationError};
use crate::scene::object::BaseFields;
use crate::schema::fields::{FieldBag, as_array, as_numbers, as_vocab};
use crate::schema::vocab::Effect;

/// Validate the fields every variant shares.
pub(crate) fn validate_base(bag: &FieldBag<'_>) -> Result<BaseFields, ValidationError> {
    let frame = bag.opt_numbers::<4>("frame")?.map(Frame::from);

    let transform = match bag.get("transform") {
        Some(v) => {
            let path = bag.child("transform");
            let rows = as_array(v, &path)?;
            if rows.len() != 3 {
                return Err(ValidationError::at(
                    &path,
                    format!("expected 3 coordinate pairs (got {})", rows.len()),
                ));
            }
            let mut pairs = [[0.0; 2]; 3];
            for (i, row) in rows.iter().enumerate() {
                let row_path = [path.as_slice(), &[PathElem::Index(i)]].concat();
                pairs[i] = as_numbers::<2>(row, &row_path)?;
            }
            Some(Transform::from(pairs))
        }
        None => None,
    };

    let opacity = bag.opt_f64("opacity")?;
    if let Some(o) = opacity
        && !is_unit(o)
    {
        return Err(bag.err("opacity", format!("opacity must be in [0, 1] (got {o})")));
    }

    let mut effects = Vec::new();
    if let Some(items) = bag.opt_array("effects")? {
        let path = bag.child("effects");
        for (i, item) in items.iter().enumerate() {
            effects.push(as_vocab::<Effect>(
                item,
                &[path.as_slice(), &[PathElem::Index(i)]].concat(),
            )?);
        }
    }

    Ok(BaseFields {
        frame,
        name: bag.opt_str("name")?.map(str::to_owned),
        transform,
        opacity,
        effects,
        original_src: bag.opt_str("originalSrc")?.map(str::to_owned),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/schema/base.rs"]
mod tests;
