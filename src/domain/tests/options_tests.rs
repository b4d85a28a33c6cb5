use super::*;

#[test]
fn from_json_reads_camel_case_keys() {
    let opts = BodyOptions::from_json(
        r#"{"position":{"x":1,"y":2},"mass":3,"hasPhysics":true,"isStatic":false,"color":"red"}"#,
    )
    .unwrap();

    assert_eq!(opts.position, Some(Vec2::new(1.0, 2.0)));
    assert_eq!(opts.mass, Some(3.0));
    assert_eq!(opts.has_physics, Some(true));
    assert_eq!(opts.is_static, Some(false));
    assert_eq!(opts.color.as_deref(), Some("red"));
    assert_eq!(opts.velocity, None);
    assert_eq!(opts.elasticity, None);
}

#[test]
fn from_json_ignores_unknown_keys() {
    let opts = BodyOptions::from_json(r#"{"friction":0.2,"mass":-4}"#).unwrap();
    assert_eq!(opts.mass, Some(-4.0));
}

#[test]
fn empty_and_null_mean_no_options() {
    assert_eq!(BodyOptions::from_json("").unwrap(), BodyOptions::default());
    assert_eq!(BodyOptions::from_json("  null ").unwrap(), BodyOptions::default());
    assert_eq!(CircleBodyOptions::from_json("").unwrap(), CircleBodyOptions::default());
}

#[test]
fn malformed_json_is_an_error() {
    let err = BodyOptions::from_json("{mass: 1").unwrap_err();
    assert!(err.starts_with("invalid body options"));

    // Wrong type for a known key
    assert!(CircleBodyOptions::from_json(r#"{"radius":"big"}"#).is_err());
}

#[test]
fn polygon_options_flatten_base_fields() {
    let opts = PolygonBodyOptions::from_json(
        r#"{"elasticity":0.9,"vertices":[{"x":0,"y":0},{"x":1,"y":0},{"x":0,"y":1}],"width":1}"#,
    )
    .unwrap();

    assert_eq!(opts.body.elasticity, Some(0.9));
    assert_eq!(opts.vertices.as_ref().map(Vec::len), Some(3));
    assert_eq!(opts.width, Some(1.0));
    assert_eq!(opts.height, None);
}

#[test]
fn circle_options_flatten_base_fields() {
    let opts = CircleBodyOptions::from_json(r#"{"radius":-2,"velocity":{"x":5}}"#).unwrap();
    assert_eq!(opts.radius, Some(-2.0));
    assert_eq!(opts.body.velocity, Some(Vec2::new(5.0, 0.0)));
}

#[test]
fn builders_set_only_what_they_name() {
    let opts = BodyOptions::new()
        .with_mass(0.0)
        .with_color("teal")
        .with_physics(true);

    assert_eq!(opts.mass, Some(0.0));
    assert_eq!(opts.color.as_deref(), Some("teal"));
    assert_eq!(opts.has_physics, Some(true));
    assert_eq!(opts.is_static, None);
    assert_eq!(opts.position, None);
}

#[test]
fn unset_fields_are_not_serialized() {
    let json = serde_json::to_string(&BodyOptions::new().with_mass(2.0)).unwrap();
    assert_eq!(json, r#"{"mass":2.0}"#);
}
