use sceneschema::{Composition, ContentObject, ObjectKind, ParameterSet, ValidateOpts};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = ParameterSet::single("mood", "What should it feel like?")?;
    println!("{}", serde_json::to_string_pretty(&config)?);

    let kick = json!({
        "time": 0, "type": 1, "bank": "drums", "note": "Kick", "velo": 110, "duration": 0.25
    });
    let lead = json!({
        "time": 0.5, "type": 0, "bank": "sax", "note": "C#/4", "velo": 90, "duration": 1
    });
    let mut instructions = vec![json!([]); 8];
    instructions[0] = json!([kick.clone(), lead]);
    instructions[4] = json!([kick]);

    let values = vec![
        json!({
            "type": "paragraph",
            "text": "Night drive",
            "alignment": "center",
            "effects": ["wave"],
        }),
        json!({ "type": "gif", "src": "loop.gif", "opacity": 0 }),
        json!({ "type": "music", "bpm": 96, "length": 2, "instructions": instructions }),
    ];
    let opts = ValidateOpts {
        parallel: true,
        threads: Some(2),
    };
    let mut comp = Composition::from_values(&values, &opts)?;
    comp.append(ContentObject::from_fields(
        "video",
        &json!({ "src": "clip.mp4", "muted": false }),
    )?);

    println!("{}", serde_json::to_string_pretty(&comp.to_value()?)?);

    for obj in &comp {
        if let ObjectKind::Music(track) = obj.kind() {
            let seconds = track.seconds_per_slot() * track.slots().len() as f64;
            println!(
                "music: {} bars, {} hits, {seconds:.2}s",
                track.bars(),
                track.hits().count()
            );
        }
    }

    let odd_bars = json!({ "type": "music", "bpm": 96, "length": 3, "instructions": [] });
    if let Err(e) = ContentObject::from_value(&odd_bars) {
        println!("rejected: {e}");
    }
    Ok(())
}
