use super::*;

#[test]
fn pitch_parses_grammar_parts() {
    let p = Pitch::parse("C#/4").unwrap();
    assert_eq!((p.letter(), p.is_sharp(), p.octave()), ('C', true, 4));
    let p = Pitch::parse("G/-1").unwrap();
    assert_eq!((p.letter(), p.is_sharp(), p.octave()), ('G', false, -1));
    assert!(Pitch::parse("C#/4 ").is_none());
    assert!(Pitch::parse("xC/4").is_none());
}

#[test]
fn pitch_display_round_trips_spelling() {
    for s in ["C#/4", "C/-1", "B/8", "F#/0"] {
        assert_eq!(Pitch::parse(s).unwrap().to_string(), s);
    }
}

#[test]
fn midi_numbers() {
    assert_eq!(Pitch::parse("C/-1").unwrap().midi_number(), 0);
    assert_eq!(Pitch::parse("C/4").unwrap().midi_number(), 60);
    assert_eq!(Pitch::parse("A/4").unwrap().midi_number(), 69);
    assert_eq!(Pitch::parse("C#/4").unwrap().midi_number(), 61);
    assert_eq!(Pitch::parse("B#/3").unwrap().midi_number(), 60);
}

#[test]
fn hit_serializes_wire_fields() {
    let hit = Hit {
        time: 0.25,
        voice: Voice::Melodic {
            instrument: Instrument::Mono3,
            pitch: Pitch::parse("D#/5").unwrap(),
        },
        velocity: 99,
        duration: 2.0,
    };
    assert_eq!(
        serde_json::to_value(hit).unwrap(),
        serde_json::json!({
            "time": 0.25, "type": 0, "bank": "mono3", "note": "D#/5", "velo": 99, "duration": 2.0
        })
    );

    let drum = Voice::Percussive {
        drum: DrumName::Whistle,
    };
    assert_eq!(drum.kind(), HitKind::Percussive);
    assert_eq!(drum.bank(), "drums");
    assert_eq!(drum.note(), "Whistle");
}

#[test]
fn hit_kind_wire_values() {
    assert_eq!(HitKind::from_wire(0), Some(HitKind::Melodic));
    assert_eq!(HitKind::from_wire(1), Some(HitKind::Percussive));
    assert_eq!(HitKind::from_wire(2), None);
    assert_eq!(HitKind::Percussive.wire(), 1);
}

#[test]
fn slot_timing() {
    let m = Music {
        bpm: 120.0,
        length: 2,
        instructions: vec![BeatSlot::default(); 8],
    };
    assert_eq!(m.seconds_per_slot(), 0.5);
    assert_eq!(m.hits().count(), 0);
}
