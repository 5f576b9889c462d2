//! Sceneschema defines and enforces the schema for scene objects of a generative audio/visual
//! composition.
//!
//! Every object is validated once, at construction, from an untyped JSON field bag. Construction
//! either yields a fully-valid immutable [`ContentObject`] or a [`ValidationError`] naming the
//! offending field; there is no partially valid state.
//!
//! # Overview
//!
//! 1. **Dispatch**: the `type` tag selects one of eight variant validators
//!    (`paragraph`, `text`, `link`, `image`, `graphic`, `gif`, `video`, `music`).
//! 2. **Base fields**: shared fields (`frame`, `transform`, `opacity`, `effects`, `originalSrc`,
//!    `name`) are checked first for every variant.
//! 3. **Variant fields**: per-variant rules, including the beat-grid check for `music`.
//! 4. **Compose**: validated objects are appended to a [`Composition`] in render order.
//!
//! ```
//! use sceneschema::{Composition, ContentObject};
//!
//! let obj = ContentObject::from_value(&serde_json::json!({
//!     "type": "text",
//!     "text": "hello",
//!     "opacity": 0.5,
//! }))?;
//! let mut comp = Composition::new();
//! comp.append(obj);
//! assert_eq!(comp.len(), 1);
//! # Ok::<(), sceneschema::ValidationError>(())
//! ```
#![forbid(unsafe_code)]

mod foundation;
mod scene;
mod schema;

pub use foundation::core::{Frame, Rgba, Transform};
pub use foundation::error::{PathElem, SceneError, SceneResult, ValidationError};
pub use scene::composition::{Composition, ValidateOpts};
pub use scene::music::{BeatSlot, Hit, HitKind, Music, Pitch, Voice};
pub use scene::object::{
    AnimatedImage, BaseFields, ContentObject, Graphic, Image, Link, ObjectKind, Paragraph, Text,
    TextAttribute, Video,
};
pub use scene::params::{ParamKind, ParameterDescriptor, ParameterSet};
pub use schema::vocab::{
    Alignment, AttributeKind, DRUM_BANK, DrumName, Effect, FontStyle, Instrument, ObjectType,
    ScaleMode, TextStyle, Vocabulary, WordWrap,
};
