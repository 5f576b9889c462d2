use crate::schema::vocab::{DRUM_BANK, DrumName, Instrument, PITCH_GRAMMAR, Vocabulary};
use regex::Regex;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

static PITCH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PITCH_GRAMMAR).expect("pitch grammar compiles"));

/// A quantized music track: `length` bars of [`Music::SLOTS_PER_BAR`] beat slots each.
///
/// Slot order and the order of hits within a slot are preserved exactly as authored; the
/// synthesizer derives timing from both.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Music {
    pub(crate) bpm: f64,
    pub(crate) length: u8,
    pub(crate) instructions: Vec<BeatSlot>,
}

impl Music {
    pub const SLOTS_PER_BAR: usize = 4;
    pub const MIN_BARS: u8 = 2;
    pub const MAX_BARS: u8 = 16;

    pub fn bpm(&self) -> f64 {
        self.bpm
    }

    /// Number of bars (always even, in `[2, 16]`).
    pub fn bars(&self) -> u8 {
        self.length
    }

    /// All beat slots; `slots().len() == bars() * 4`.
    pub fn slots(&self) -> &[BeatSlot] {
        &self.instructions
    }

    /// Every hit tagged with the index of its slot, in playback order.
    pub fn hits(&self) -> impl Iterator<Item = (usize, &Hit)> {
        self.instructions
            .iter()
            .enumerate()
            .flat_map(|(i, slot)| slot.hits.iter().map(move |h| (i, h)))
    }

    /// Wall-clock duration of one beat slot.
    pub fn seconds_per_slot(&self) -> f64 {
        60.0 / self.bpm
    }
}

/// One quantized time unit of the grid. An empty slot is silence.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BeatSlot {
    pub(crate) hits: Vec<Hit>,
}

impl BeatSlot {
    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    pub fn is_silent(&self) -> bool {
        self.hits.is_empty()
    }
}

/// Wire discriminator of a hit (`type: 0 | 1`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HitKind {
    Melodic = 0,
    Percussive = 1,
}

impl HitKind {
    pub fn from_wire(v: i64) -> Option<Self> {
        match v {
            0 => Some(Self::Melodic),
            1 => Some(Self::Percussive),
            _ => None,
        }
    }

    pub fn wire(self) -> u8 {
        self as u8
    }
}

/// What a hit plays. The bank/note vocabulary is fixed by the kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Voice {
    Melodic { instrument: Instrument, pitch: Pitch },
    Percussive { drum: DrumName },
}

impl Voice {
    pub fn kind(&self) -> HitKind {
        match self {
            Self::Melodic { .. } => HitKind::Melodic,
            Self::Percussive { .. } => HitKind::Percussive,
        }
    }

    /// Wire `bank` value.
    pub fn bank(&self) -> &'static str {
        match self {
            Self::Melodic { instrument, .. } => instrument.as_str(),
            Self::Percussive { .. } => DRUM_BANK,
        }
    }

    /// Wire `note` value.
    pub fn note(&self) -> String {
        match self {
            Self::Melodic { pitch, .. } => pitch.to_string(),
            Self::Percussive { drum } => drum.as_str().to_owned(),
        }
    }
}

/// A single note or percussion event within a beat slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub(crate) time: f64,
    pub(crate) voice: Voice,
    pub(crate) velocity: u8,
    pub(crate) duration: f64,
}

impl Hit {
    pub const MAX_VELOCITY: u8 = 127;

    /// Offset inside the slot, for microtiming.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn voice(&self) -> &Voice {
        &self.voice
    }

    pub fn kind(&self) -> HitKind {
        self.voice.kind()
    }

    pub fn velocity(&self) -> u8 {
        self.velocity
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }
}

impl Serialize for Hit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Hit", 6)?;
        s.serialize_field("time", &self.time)?;
        s.serialize_field("type", &self.kind().wire())?;
        s.serialize_field("bank", self.voice.bank())?;
        s.serialize_field("note", &self.voice.note())?;
        s.serialize_field("velo", &self.velocity)?;
        s.serialize_field("duration", &self.duration)?;
        s.end()
    }
}

/// Melodic pitch in `letter[#]/octave` form, e.g. `C#/4`. Octaves run from -1 to 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pitch {
    letter: char,
    sharp: bool,
    octave: i8,
}

impl Pitch {
    pub fn parse(s: &str) -> Option<Self> {
        let caps = PITCH_RE.captures(s)?;
        let letter = caps.get(1)?.as_str().chars().next()?;
        let sharp = !caps.get(2)?.as_str().is_empty();
        let octave = caps.get(3)?.as_str().parse().ok()?;
        Some(Self {
            letter,
            sharp,
            octave,
        })
    }

    pub fn letter(self) -> char {
        self.letter
    }

    pub fn is_sharp(self) -> bool {
        self.sharp
    }

    pub fn octave(self) -> i8 {
        self.octave
    }

    /// MIDI note number, with `C/-1` at 0 and `C/4` at 60.
    ///
    /// `B#` and `E#` are accepted by the grammar and map one semitone up (`B#/3 == C/4`).
    pub fn midi_number(self) -> i32 {
        let semitone = match self.letter {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            _ => 11,
        };
        (i32::from(self.octave) + 1) * 12 + semitone + i32::from(self.sharp)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sharp = if self.sharp { "#" } else { "" };
        write!(f, "{}{sharp}/{}", self.letter, self.octave)
    }
}

impl Serialize for Pitch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/music.rs"]
mod tests;
