//! Beat-grid validation for music objects.
//!
//! The grid is `length` bars of four slots, each slot an ordered list of hits. A hit's
//! `bank`/`note` pair is checked against the vocabulary selected by its `type`:
//!
//! | `type` | `bank`                 | `note`                     |
//! |--------|------------------------|----------------------------|
//! | 0      | one of 16 instruments  | `^[A-G]#?/(-1\|[0-8])$`     |
//! | 1      | exactly `drums`        | one of 16 drum names       |
//!
//! The first invalid hit anywhere rejects the whole track.

use crate::foundation::error::{PathElem, ValidationError};
use crate::scene::music::{BeatSlot, Hit, HitKind, Music, Pitch, Voice};
use crate::scene::object::ObjectKind;
use crate::schema::fields::{FieldBag, as_array, as_integer};
use crate::schema::vocab::{DRUM_BANK, DrumName, Instrument, Vocabulary, unknown_member};

pub(crate) fn music(bag: &FieldBag<'_>) -> Result<ObjectKind, ValidationError> {
    let bpm = bag.req_f64("bpm")?;
    if bpm <= 0.0 {
        return Err(bag.err("bpm", format!("bpm must be > 0 (got {bpm})")));
    }

    let length = bar_count(bag)?;
    let slots = bag.req_array("instructions")?;
    let expected = usize::from(length) * Music::SLOTS_PER_BAR;
    if slots.len() != expected {
        return Err(bag.err(
            "instructions",
            format!(
                "expected exactly {expected} beat slots for {length} bars (got {})",
                slots.len()
            ),
        ));
    }

    let grid_path = bag.child("instructions");
    let mut instructions = Vec::with_capacity(expected);
    for (i, slot) in slots.iter().enumerate() {
        let slot_path = [grid_path.as_slice(), &[PathElem::Index(i)]].concat();
        instructions.push(beat_slot(slot, &slot_path)?);
    }

    Ok(ObjectKind::Music(Music {
        bpm,
        length,
        instructions,
    }))
}

fn bar_count(bag: &FieldBag<'_>) -> Result<u8, ValidationError> {
    let length = as_integer(bag.require("length")?, &bag.child("length"))?;
    let in_range = (i64::from(Music::MIN_BARS)..=i64::from(Music::MAX_BARS)).contains(&length);
    if !in_range || length % 2 != 0 {
        return Err(bag.err(
            "length",
            format!(
                "length must be an even number of bars in [{}, {}] (got {length})",
                Music::MIN_BARS,
                Music::MAX_BARS
            ),
        ));
    }
    // In range, so the narrowing is lossless.
    Ok(length as u8)
}

fn beat_slot(slot: &serde_json::Value, path: &[PathElem]) -> Result<BeatSlot, ValidationError> {
    let items = as_array(slot, path)?;
    let mut hits = Vec::with_capacity(items.len());
    for (j, item) in items.iter().enumerate() {
        let hit_path = [path, &[PathElem::Index(j)]].concat();
        hits.push(hit(&FieldBag::new(item, hit_path)?)?);
    }
    Ok(BeatSlot { hits })
}

fn hit(bag: &FieldBag<'_>) -> Result<Hit, ValidationError> {
    let time = bag.req_f64("time")?;
    if time < 0.0 {
        return Err(bag.err("time", format!("time must be >= 0 (got {time})")));
    }

    let raw_kind = as_integer(bag.require("type")?, &bag.child("type"))?;
    let kind = HitKind::from_wire(raw_kind).ok_or_else(|| {
        bag.err(
            "type",
            format!("hit type must be 0 (melodic) or 1 (percussive) (got {raw_kind})"),
        )
    })?;

    let bank = bag.req_str("bank")?;
    let note = bag.req_str("note")?;
    let voice = match kind {
        HitKind::Melodic => {
            let instrument = Instrument::parse(bank)
                .ok_or_else(|| bag.err("bank", unknown_member::<Instrument>(bank)))?;
            let pitch = Pitch::parse(note).ok_or_else(|| {
                bag.err(
                    "note",
                    format!("melodic note must match \"C#/4\", octave -1..8 (got \"{note}\")"),
                )
            })?;
            Voice::Melodic { instrument, pitch }
        }
        HitKind::Percussive => {
            if bank != DRUM_BANK {
                return Err(bag.err(
                    "bank",
                    format!("percussive hits must use bank \"{DRUM_BANK}\" (got \"{bank}\")"),
                ));
            }
            let drum = DrumName::parse(note)
                .ok_or_else(|| bag.err("note", unknown_member::<DrumName>(note)))?;
            Voice::Percussive { drum }
        }
    };

    let velo = as_integer(bag.require("velo")?, &bag.child("velo"))?;
    if !(0..=i64::from(Hit::MAX_VELOCITY)).contains(&velo) {
        return Err(bag.err(
            "velo",
            format!("velo must be in [0, {}] (got {velo})", Hit::MAX_VELOCITY),
        ));
    }

    let duration = bag.req_f64("duration")?;
    if duration <= 0.0 {
        return Err(bag.err(
            "duration",
            format!("duration must be > 0 (got {duration})"),
        ));
    }

    Ok(Hit {
        time,
        voice,
        velocity: velo as u8,
        duration,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/schema/music.rs"]
mod tests;
