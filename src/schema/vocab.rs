//! Closed string vocabularies of the wire format.

use crate::foundation::error::{PathElem, ValidationError};
use std::fmt;

/// A closed set of string values accepted for one field.
pub trait Vocabulary: Sized + Copy + 'static {
    /// Human-readable name of the vocabulary, used in rejection messages.
    const KIND: &'static str;
    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// Wire spelling of this member.
    fn as_str(self) -> &'static str;

    /// Exact (case-sensitive) lookup of a wire spelling.
    fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == s)
    }
}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl Vocabulary for $name {
            const KIND: &'static str = $kind;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

vocabulary! {
    /// Variant tag of a scene object.
    ObjectType("object type") {
        Paragraph => "paragraph",
        Text => "text",
        Link => "link",
        Image => "image",
        Graphic => "graphic",
        AnimatedImage => "gif",
        Video => "video",
        Music => "music",
    }
}

vocabulary! {
    /// Effect applied by the renderer to any object.
    Effect("effect") {
        Sin => "sin",
        Cos => "cos",
        Wave => "wave",
        Rotate => "rotate",
        Soon => "soon",
        Fireworks => "fireworks",
    }
}

vocabulary! {
    /// Font style for paragraphs and links.
    FontStyle("font style") {
        Sans => "sans",
        Serif => "serif",
    }
}

vocabulary! {
    /// Extended font style for free-standing text.
    TextStyle("text style") {
        Sans => "sans",
        Mono => "mono",
        Punchout => "punchout",
        Eightbit => "eightbit",
        Cursive => "cursive",
        Poster => "poster",
        Tape => "tape",
        Book => "book",
        Serif => "serif",
    }
}

vocabulary! {
    Alignment("alignment") {
        Left => "left",
        Center => "center",
        Right => "right",
    }
}

vocabulary! {
    /// Emphasis applied to a span of paragraph text.
    AttributeKind("attribute type") {
        Bold => "bold",
        Italic => "italic",
        BoldItalic => "bold-italic",
    }
}

vocabulary! {
    WordWrap("word wrap") {
        Auto => "auto",
        Manual => "manual",
    }
}

vocabulary! {
    /// How bitmap content is fitted into the object frame.
    ScaleMode("scale mode") {
        Fit => "fit",
        Fill => "fill",
    }
}

vocabulary! {
    /// Instrument banks available to melodic hits.
    Instrument("instrument") {
        Bleep => "bleep",
        Meow => "meow",
        Bass => "bass",
        Ping => "ping",
        String => "string",
        Reso => "reso",
        Arp => "arp",
        Bark => "bark",
        Mono1 => "mono1",
        Mono2 => "mono2",
        Mono3 => "mono3",
        Funk => "funk",
        Sax => "sax",
        Bell => "bell",
        Roboto => "roboto",
        Do => "do",
    }
}

vocabulary! {
    /// Drum sounds available to percussive hits.
    DrumName("drum") {
        Kick => "Kick",
        Snare => "Snare",
        Clap => "Clap",
        Hat => "Hat",
        Thump => "Thump",
        Glitch => "Glitch",
        Tambourine => "Tambourine",
        Whistle => "Whistle",
        Block => "Block",
        Stick => "Stick",
        Shaker => "Shaker",
        Crash => "Crash",
        Tom => "Tom",
        Conga => "Conga",
        Cowbell => "Cowbell",
        Yeah => "Yeah",
    }
}

/// The only bank a percussive hit may name.
pub const DRUM_BANK: &str = "drums";

/// Melodic note grammar: letter, optional sharp, slash, octave `-1..=8`.
pub(crate) const PITCH_GRAMMAR: &str = r"^([A-G])(#?)/(-1|[0-8])$";

impl std::str::FromStr for ObjectType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            ValidationError::at(&[PathElem::Field("type")], unknown_member::<Self>(s))
        })
    }
}

/// Rejection message for a value outside vocabulary `V`.
pub(crate) fn unknown_member<V: Vocabulary>(got: &str) -> String {
    let allowed = V::ALL
        .iter()
        .map(|v| v.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("unknown {} \"{got}\" (expected one of: {allowed})", V::KIND)
}

#[cfg(test)]
#[path = "../../tests/unit/schema/vocab.rs"]
mod tests;
