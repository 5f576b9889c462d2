//! Field rules for the non-music variants.

use crate::foundation::core::Rgba;
use crate::foundation::error::{PathElem, ValidationError};
use crate::scene::object::{
    AnimatedImage, Graphic, Image, Link, ObjectKind, Paragraph, Text, TextAttribute, Video,
};
use crate::schema::fields::{FieldBag, as_numbers, as_vocab};
use crate::schema::vocab::{AttributeKind, FontStyle, ScaleMode, TextStyle, WordWrap};

pub(crate) fn paragraph(bag: &FieldBag<'_>) -> Result<ObjectKind, ValidationError> {
    let size = bag.opt_f64("size")?;
    if let Some(s) = size
        && s <= 0.0
    {
        return Err(bag.err("size", format!("size must be > 0 (got {s})")));
    }

    Ok(ObjectKind::Paragraph(Paragraph {
        text: visible_text(bag)?,
        color: opt_color(bag)?,
        style: bag.opt_vocab::<FontStyle>("style")?,
        size,
        alignment: bag.opt_vocab("alignment")?,
        attributes: text_attributes(bag)?,
    }))
}

pub(crate) fn text(bag: &FieldBag<'_>) -> Result<ObjectKind, ValidationError> {
    let padding = bag.opt_f64("padding")?;
    if let Some(p) = padding
        && p < 0.0
    {
        return Err(bag.err("padding", format!("padding must be >= 0 (got {p})")));
    }

    Ok(ObjectKind::Text(Text {
        text: visible_text(bag)?,
        color: opt_color(bag)?,
        style: bag.opt_vocab::<TextStyle>("style")?,
        word_wrap: bag.opt_vocab::<WordWrap>("word-wrap")?,
        padding,
    }))
}

pub(crate) fn link(bag: &FieldBag<'_>) -> Result<ObjectKind, ValidationError> {
    Ok(ObjectKind::Link(Link {
        url: bag.req_str("url")?.to_owned(),
        title: bag.opt_str("title")?.map(str::to_owned),
        description: bag.opt_str("description")?.map(str::to_owned),
        color: opt_color(bag)?,
        style: bag.opt_vocab::<FontStyle>("style")?,
    }))
}

pub(crate) fn image(bag: &FieldBag<'_>) -> Result<ObjectKind, ValidationError> {
    Ok(ObjectKind::Image(Image {
        src: bag.req_str("src")?.to_owned(),
        scale_mode: bag
            .opt_vocab::<ScaleMode>("scaleMode")?
            .unwrap_or(Image::DEFAULT_SCALE_MODE),
    }))
}

pub(crate) fn animated_image(bag: &FieldBag<'_>) -> Result<ObjectKind, ValidationError> {
    Ok(ObjectKind::AnimatedImage(AnimatedImage {
        src: bag.req_str("src")?.to_owned(),
        scale_mode: bag
            .opt_vocab::<ScaleMode>("scaleMode")?
            .unwrap_or(AnimatedImage::DEFAULT_SCALE_MODE),
    }))
}

pub(crate) fn graphic(bag: &FieldBag<'_>) -> Result<ObjectKind, ValidationError> {
    Ok(ObjectKind::Graphic(Graphic {
        src: bag.req_str("src")?.to_owned(),
        color: opt_color(bag)?,
    }))
}

pub(crate) fn video(bag: &FieldBag<'_>) -> Result<ObjectKind, ValidationError> {
    Ok(ObjectKind::Video(Video {
        src: bag.req_str("src")?.to_owned(),
        muted: bag.opt_bool("muted")?,
    }))
}

/// Required `text`, rejected when only whitespace. Stored untrimmed.
fn visible_text(bag: &FieldBag<'_>) -> Result<String, ValidationError> {
    let text = bag.req_str("text")?;
    if text.trim().is_empty() {
        return Err(bag.err("text", "text must be non-empty after trimming whitespace"));
    }
    Ok(text.to_owned())
}

fn opt_color(bag: &FieldBag<'_>) -> Result<Option<Rgba>, ValidationError> {
    bag.opt_numbers::<4>("color")?
        .map(|ch| Rgba::from_channels(ch, &bag.child("color")))
        .transpose()
}

fn text_attributes(bag: &FieldBag<'_>) -> Result<Option<Vec<TextAttribute>>, ValidationError> {
    let Some(items) = bag.opt_array("attributes")? else {
        return Ok(None);
    };
    let base = bag.child("attributes");
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let span = FieldBag::new(item, [base.as_slice(), &[PathElem::Index(i)]].concat())?;
        out.push(TextAttribute {
            kind: as_vocab::<AttributeKind>(span.require("type")?, &span.child("type"))?,
            range: as_numbers::<2>(span.require("range")?, &span.child("range"))?,
        });
    }
    Ok(Some(out))
}

#[cfg(test)]
#[path = "../../tests/unit/schema/variants.rs"]
mod tests;
