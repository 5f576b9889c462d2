use crate::foundation::core::{Frame, Rgba, Transform};
use crate::foundation::error::{SceneError, SceneResult, ValidationError};
use crate::scene::music::Music;
use crate::schema::dispatch;
use crate::schema::vocab::{
    Alignment, AttributeKind, Effect, FontStyle, ObjectType, ScaleMode, TextStyle, WordWrap,
};
use serde::Serialize;
use serde_json::Value;

/// A validated, immutable scene element.
///
/// The only way to obtain one is through [`ContentObject::from_fields`] or
/// [`ContentObject::from_value`], so holding a `ContentObject` means every constraint of its
/// variant has been checked. Serializing it reproduces the wire shape it was validated from
/// (with defaults such as `effects: []` or an image's `scaleMode` materialized).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContentObject {
    #[serde(flatten)]
    base: BaseFields,
    #[serde(flatten)]
    kind: ObjectKind,
}

impl ContentObject {
    /// Validate `fields` as an object of variant `tag`.
    ///
    /// The tag is checked before any field is inspected; the `type` key inside `fields`, if
    /// any, is ignored.
    #[tracing::instrument(skip(fields))]
    pub fn from_fields(tag: &str, fields: &Value) -> Result<Self, ValidationError> {
        let ty: ObjectType = tag.parse()?;
        dispatch::validate(ty, fields)
    }

    /// Validate a self-describing object whose variant is named by its `type` key.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        dispatch::validate_tagged(value)
    }

    pub(crate) fn new(base: BaseFields, kind: ObjectKind) -> Self {
        Self { base, kind }
    }

    pub fn object_type(&self) -> ObjectType {
        self.kind.object_type()
    }

    pub fn base(&self) -> &BaseFields {
        &self.base
    }

    pub fn kind(&self) -> &ObjectKind {
        &self.kind
    }

    /// Normalized wire form of this object.
    pub fn to_value(&self) -> SceneResult<Value> {
        serde_json::to_value(self).map_err(|e| {
            SceneError::serde(format!("serialize {} object: {e}", self.object_type()))
        })
    }
}

/// Fields shared by every variant.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) frame: Option<Frame>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) transform: Option<Transform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) opacity: Option<f64>,
    pub(crate) effects: Vec<Effect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) original_src: Option<String>,
}

impl BaseFields {
    pub fn frame(&self) -> Option<Frame> {
        self.frame
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn transform(&self) -> Option<Transform> {
        self.transform
    }

    /// Opacity in `[0, 1]`; `Some(0.0)` is a real, fully transparent value.
    pub fn opacity(&self) -> Option<f64> {
        self.opacity
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn original_src(&self) -> Option<&str> {
        self.original_src.as_deref()
    }
}

/// Per-variant payload. The serde tag reproduces the wire `type` key.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ObjectKind {
    Paragraph(Paragraph),
    Text(Text),
    Link(Link),
    Image(Image),
    Graphic(Graphic),
    #[serde(rename = "gif")]
    AnimatedImage(AnimatedImage),
    Video(Video),
    Music(Music),
}

impl ObjectKind {
    pub fn object_type(&self) -> ObjectType {
        match self {
            Self::Paragraph(_) => ObjectType::Paragraph,
            Self::Text(_) => ObjectType::Text,
            Self::Link(_) => ObjectType::Link,
            Self::Image(_) => ObjectType::Image,
            Self::Graphic(_) => ObjectType::Graphic,
            Self::AnimatedImage(_) => ObjectType::AnimatedImage,
            Self::Video(_) => ObjectType::Video,
            Self::Music(_) => ObjectType::Music,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Paragraph {
    pub(crate) text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) color: Option<Rgba>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) alignment: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) attributes: Option<Vec<TextAttribute>>,
}

impl Paragraph {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> Option<Rgba> {
        self.color
    }

    pub fn style(&self) -> Option<FontStyle> {
        self.style
    }

    pub fn size(&self) -> Option<f64> {
        self.size
    }

    pub fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    /// Emphasis spans in declaration order; empty when none were given.
    pub fn attributes(&self) -> &[TextAttribute] {
        self.attributes.as_deref().unwrap_or_default()
    }
}

/// Emphasis over a span of paragraph text. `range` is `[start, length]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TextAttribute {
    #[serde(rename = "type")]
    pub(crate) kind: AttributeKind,
    pub(crate) range: [f64; 2],
}

impl TextAttribute {
    pub fn kind(&self) -> AttributeKind {
        self.kind
    }

    pub fn start(&self) -> f64 {
        self.range[0]
    }

    pub fn length(&self) -> f64 {
        self.range[1]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Text {
    pub(crate) text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) color: Option<Rgba>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) style: Option<TextStyle>,
    #[serde(rename = "word-wrap", skip_serializing_if = "Option::is_none")]
    pub(crate) word_wrap: Option<WordWrap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) padding: Option<f64>,
}

impl Text {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> Option<Rgba> {
        self.color
    }

    pub fn style(&self) -> Option<TextStyle> {
        self.style
    }

    pub fn word_wrap(&self) -> Option<WordWrap> {
        self.word_wrap
    }

    pub fn padding(&self) -> Option<f64> {
        self.padding
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Link {
    pub(crate) url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) color: Option<Rgba>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) style: Option<FontStyle>,
}

impl Link {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn color(&self) -> Option<Rgba> {
        self.color
    }

    pub fn style(&self) -> Option<FontStyle> {
        self.style
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub(crate) src: String,
    pub(crate) scale_mode: ScaleMode,
}

impl Image {
    pub const DEFAULT_SCALE_MODE: ScaleMode = ScaleMode::Fill;

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn scale_mode(&self) -> ScaleMode {
        self.scale_mode
    }
}

/// Animated bitmap (`gif` on the wire).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimatedImage {
    pub(crate) src: String,
    pub(crate) scale_mode: ScaleMode,
}

impl AnimatedImage {
    pub const DEFAULT_SCALE_MODE: ScaleMode = ScaleMode::Fit;

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn scale_mode(&self) -> ScaleMode {
        self.scale_mode
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Graphic {
    pub(crate) src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) color: Option<Rgba>,
}

impl Graphic {
    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn color(&self) -> Option<Rgba> {
        self.color
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Video {
    pub(crate) src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) muted: Option<bool>,
}

impl Video {
    pub fn src(&self) -> &str {
        &self.src
    }

    /// `Some(false)` means explicitly unmuted, `None` leaves it to the renderer.
    pub fn muted(&self) -> Option<bool> {
        self.muted
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/object.rs"]
mod tests;
