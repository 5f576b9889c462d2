use super::*;
use serde_json::json;

fn text(label: &str) -> Value {
    json!({ "type": "text", "text": label })
}

fn labels(comp: &Composition) -> Vec<String> {
    comp.iter()
        .map(|o| match o.kind() {
            crate::scene::object::ObjectKind::Text(t) => t.text().to_owned(),
            other => panic!("unexpected {other:?}"),
        })
        .collect()
}

#[test]
fn append_preserves_call_order() {
    let mut comp = Composition::new();
    assert!(comp.is_empty());
    for label in ["c", "a", "b", "a"] {
        comp.append(ContentObject::from_value(&text(label)).unwrap());
    }
    assert_eq!(comp.len(), 4);
    assert_eq!(labels(&comp), ["c", "a", "b", "a"]);
}

#[test]
fn parallel_batch_keeps_submission_order() {
    let values: Vec<Value> = (0..200).map(|i| text(&format!("obj-{i}"))).collect();
    let seq = Composition::from_values(&values, &ValidateOpts::default()).unwrap();
    let par = Composition::from_values(
        &values,
        &ValidateOpts {
            parallel: true,
            threads: Some(4),
        },
    )
    .unwrap();
    assert_eq!(seq, par);
    assert_eq!(labels(&par)[137], "obj-137");
}

#[test]
fn batch_reports_first_failure_by_index() {
    let mut values: Vec<Value> = (0..50).map(|i| text(&format!("{i}"))).collect();
    values[31] = json!({ "type": "text", "text": " " });
    values[40] = json!({ "type": "bogus" });
    for parallel in [false, true] {
        let err = Composition::from_values(
            &values,
            &ValidateOpts {
                parallel,
                threads: None,
            },
        )
        .unwrap_err();
        let SceneError::Validation(v) = err else {
            panic!("expected validation error");
        };
        assert_eq!(v.path_string(), "$[31].text");
    }
}

#[test]
fn zero_threads_is_rejected() {
    let err = Composition::from_values(
        &[text("a")],
        &ValidateOpts {
            parallel: true,
            threads: Some(0),
        },
    )
    .unwrap_err();
    assert!(err.to_string().contains("'threads' must be >= 1"));
}

#[test]
fn reader_accepts_three_document_shapes() {
    let opts = ValidateOpts::default();
    let doc = r#"{"objects": [{"type": "text", "text": "a"}, {"type": "image", "src": "b"}]}"#;
    assert_eq!(Composition::from_reader(doc.as_bytes(), &opts).unwrap().len(), 2);

    let arr = r#"[{"type": "video", "src": "v"}]"#;
    assert_eq!(Composition::from_reader(arr.as_bytes(), &opts).unwrap().len(), 1);

    let single = r#"{"type": "graphic", "src": "g"}"#;
    assert_eq!(Composition::from_reader(single.as_bytes(), &opts).unwrap().len(), 1);
}

#[test]
fn reader_errors() {
    let opts = ValidateOpts::default();
    let err = Composition::from_reader("{not json".as_bytes(), &opts).unwrap_err();
    assert!(matches!(err, SceneError::Serde(_)));

    let err = Composition::from_reader(r#"{"items": []}"#.as_bytes(), &opts).unwrap_err();
    assert!(matches!(err, SceneError::Validation(_)));

    let doc = r#"{"objects": [{"type": "text", "text": "ok"}, {"type": "gif"}]}"#;
    let SceneError::Validation(v) = Composition::from_reader(doc.as_bytes(), &opts).unwrap_err()
    else {
        panic!("expected validation error");
    };
    assert_eq!(v.path_string(), "$.objects[1].src");
}

#[test]
fn serializes_as_objects_document() {
    let comp = Composition::from_values(&[text("x")], &ValidateOpts::default()).unwrap();
    assert_eq!(
        comp.to_value().unwrap(),
        json!({ "objects": [{ "type": "text", "text": "x", "effects": [] }] })
    );
}
