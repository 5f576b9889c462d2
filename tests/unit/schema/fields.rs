use super::*;
use serde_json::json;

fn bag(v: &Value) -> FieldBag<'_> {
    FieldBag::new(v, Vec::new()).unwrap()
}

#[test]
fn rejects_non_object_bag() {
    let err = FieldBag::new(&json!([1, 2]), vec![PathElem::Index(4)])
        .err()
        .unwrap();
    assert_eq!(err.to_string(), "$[4]: expected an object (got array of 2)");
}

#[test]
fn null_counts_as_absent() {
    let v = json!({ "opacity": null });
    assert_eq!(bag(&v).opt_f64("opacity").unwrap(), None);
    assert!(bag(&v).req_f64("opacity").is_err());
}

#[test]
fn zero_and_false_are_present() {
    let v = json!({ "padding": 0, "muted": false, "title": "" });
    let b = bag(&v);
    assert_eq!(b.opt_f64("padding").unwrap(), Some(0.0));
    assert_eq!(b.opt_bool("muted").unwrap(), Some(false));
    assert_eq!(b.opt_str("title").unwrap(), Some(""));
}

#[test]
fn type_mismatch_names_field_and_value() {
    let v = json!({ "opacity": "half" });
    let err = bag(&v).opt_f64("opacity").unwrap_err();
    assert_eq!(
        err.to_string(),
        "$.opacity: expected a number (got string \"half\")"
    );
}

#[test]
fn missing_required_field() {
    let v = json!({});
    let err = bag(&v).req_str("src").unwrap_err();
    assert_eq!(err.to_string(), "$.src: missing required field \"src\"");
}

#[test]
fn numbers_tuple_requires_exact_arity() {
    let v = json!({ "frame": [0, 0, 10], "color": [0, 0, 0, "x"] });
    let b = bag(&v);
    assert!(b.opt_numbers::<4>("frame").is_err());
    let err = b.opt_numbers::<4>("color").unwrap_err();
    assert_eq!(err.path_string(), "$.color[3]");
}

#[test]
fn integer_like_numbers() {
    assert_eq!(as_integer(&json!(64), &[]).unwrap(), 64);
    assert_eq!(as_integer(&json!(64.0), &[]).unwrap(), 64);
    assert_eq!(as_integer(&json!(-1), &[]).unwrap(), -1);
    assert!(as_integer(&json!(64.5), &[]).is_err());
    assert!(as_integer(&json!("64"), &[]).is_err());
}

#[test]
fn vocab_lookup() {
    let v = json!({ "alignment": "center", "style": "comic" });
    let b = bag(&v);
    assert_eq!(
        b.opt_vocab::<crate::schema::vocab::Alignment>("alignment")
            .unwrap(),
        Some(crate::schema::vocab::Alignment::Center)
    );
    assert!(
        b.opt_vocab::<crate::schema::vocab::FontStyle>("style")
            .is_err()
    );
}
