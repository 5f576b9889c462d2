use super::*;

#[test]
fn descriptor_has_fixed_text_kind() {
    let d = ParameterDescriptor::new("prompt", "Describe a scene").unwrap();
    assert_eq!(d.name(), "prompt");
    assert_eq!(d.placeholder(), "Describe a scene");
    assert_eq!(d.kind(), ParamKind::Text);
    assert_eq!(
        serde_json::to_value(&d).unwrap(),
        serde_json::json!({ "name": "prompt", "type": "text", "placeholder": "Describe a scene" })
    );
}

#[test]
fn rejects_empty_name_or_placeholder() {
    let err = ParameterDescriptor::new("", "p").unwrap_err();
    assert_eq!(err.path(), &[PathElem::Field("name")]);
    let err = ParameterDescriptor::new("n", "").unwrap_err();
    assert_eq!(err.path(), &[PathElem::Field("placeholder")]);
}

#[test]
fn whitespace_name_and_placeholder_are_kept() {
    let d = ParameterDescriptor::new(" ", "  ").unwrap();
    assert_eq!(d.name(), " ");
    assert_eq!(d.placeholder(), "  ");
}

#[test]
fn parameter_set_document_shape() {
    let mut set = ParameterSet::single("mood", "calm?").unwrap();
    set.push(ParameterDescriptor::new("tempo", "bpm").unwrap());
    assert_eq!(set.args().len(), 2);
    let v = serde_json::to_value(&set).unwrap();
    assert_eq!(v["args"][1]["name"], "tempo");
    assert!(ParameterSet::single("", "x").is_err());
    assert!(ParameterSet::new().args().is_empty());
}
