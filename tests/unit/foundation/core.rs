use super::*;

#[test]
fn frame_maps_to_rect() {
    let r = Frame::new(10.0, 20.0, 30.0, 40.0).to_rect();
    assert_eq!(r, Rect::new(10.0, 20.0, 40.0, 60.0));
}

#[test]
fn transform_maps_to_affine_columns() {
    let t = Transform::from([[2.0, 0.0], [0.0, 3.0], [5.0, 7.0]]);
    let p = t.to_affine() * kurbo::Point::new(1.0, 1.0);
    assert_eq!(p, kurbo::Point::new(7.0, 10.0));
    assert_eq!(Transform::IDENTITY.to_affine(), Affine::IDENTITY);
}

#[test]
fn rgba_accepts_unit_channels() {
    let c = Rgba::new(0.0, 0.5, 1.0, 1.0).unwrap();
    assert_eq!(c.to_rgba8(), [0, 128, 255, 255]);
}

#[test]
fn rgba_new_names_the_rejected_channel() {
    let err = Rgba::new(2.0, 0.0, 0.0, 1.0).unwrap_err();
    assert!(err.path().is_empty());
    assert_eq!(err.to_string(), "color channel r must be in [0, 1] (got 2)");

    let err = Rgba::new(0.0, 0.0, 0.0, -0.5).unwrap_err();
    assert_eq!(err.to_string(), "color channel a must be in [0, 1] (got -0.5)");
    assert!(Rgba::new(f64::NAN, 0.0, 0.0, 0.0).is_err());
}

#[test]
fn rgba_rejects_each_channel_out_of_range() {
    for i in 0..4 {
        let mut ch = [0.5; 4];
        ch[i] = 1.01;
        let err = Rgba::from_channels(ch, &[PathElem::Field("color")]).unwrap_err();
        assert_eq!(err.path(), &[PathElem::Field("color"), PathElem::Index(i)]);

        ch[i] = -0.01;
        assert!(Rgba::from_channels(ch, &[]).is_err());
    }
}

#[test]
fn serializes_as_wire_arrays() {
    let f = serde_json::to_value(Frame::new(1.0, 2.0, 3.0, 4.0)).unwrap();
    assert_eq!(f, serde_json::json!([1.0, 2.0, 3.0, 4.0]));

    let t = serde_json::to_value(Transform::IDENTITY).unwrap();
    assert_eq!(t, serde_json::json!([[1.0, 0.0], [0.0, 1.0], [0.0, 0.0]]));
}
