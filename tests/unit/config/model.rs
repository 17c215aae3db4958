use super::*;
use serde_json::json;

#[test]
fn missing_fields_take_editor_defaults() {
    let cfg = BannerConfig::from_json_str(r#"{ "name": "Jane" }"#).unwrap();
    assert_eq!(cfg.name, "Jane");
    assert_eq!(cfg.width, 1584);
    assert_eq!(cfg.height, 396);
    assert_eq!(cfg.font_size, 32);
    assert_eq!(cfg.name_position, Position::Center);
    assert_eq!(cfg.info_position, Position::BottomLeft);
    assert_eq!(cfg.contact_position, Position::BottomRight);
    assert_eq!(cfg.background_color, Rgb8::new(0xf3, 0xf6, 0xf8));
}

#[test]
fn uses_editor_field_and_enum_spellings() {
    let cfg: BannerConfig = serde_json::from_value(json!({
        "showDesignation": false,
        "namePosition": "top-right",
        "shapesStyle": "waves",
        "fontFamily": "Courier New",
        "primaryColor": "#FF0000"
    }))
    .unwrap();
    assert!(!cfg.show_designation);
    assert_eq!(cfg.name_position, Position::TopRight);
    assert_eq!(cfg.shapes_style, ShapesStyle::Waves);
    assert_eq!(cfg.font_family, FontFamily::CourierNew);
    assert_eq!(cfg.primary_color, Rgb8::new(255, 0, 0));

    let v = serde_json::to_value(&cfg).unwrap();
    assert_eq!(v["namePosition"], json!("top-right"));
    assert_eq!(v["fontFamily"], json!("Courier New"));
    assert_eq!(v["primaryColor"], json!("#ff0000"));
}

#[test]
fn rejects_unknown_enum_values() {
    assert!(BannerConfig::from_json_str(r#"{ "namePosition": "middle" }"#).is_err());
    assert!(BannerConfig::from_json_str(r#"{ "shapesStyle": "stars" }"#).is_err());
    assert!(BannerConfig::from_json_str(r#"{ "fontFamily": "Comic Sans" }"#).is_err());
}

#[test]
fn validate_checks_editor_domains_only() {
    let mut cfg = BannerConfig::default();
    assert!(cfg.validate().is_ok());

    cfg.width = 799;
    assert!(matches!(cfg.validate(), Err(BannerError::Validation(_))));
    cfg.width = 2000;
    cfg.height = 601;
    assert!(cfg.validate().is_err());
    cfg.height = 200;
    cfg.font_size = 15;
    assert!(cfg.validate().is_err());
    cfg.font_size = 72;
    cfg.name = "   ".to_owned();
    assert!(cfg.validate().is_err());
}

#[test]
fn merge_overrides_exactly_present_fields() {
    let base = BannerConfig::default();
    let patch = BannerConfigPatch {
        name: Some("Jane".to_owned()),
        font_size: Some(48),
        show_company: Some(false),
        ..BannerConfigPatch::default()
    };
    let merged = base.merge(&patch);

    let expected = BannerConfig {
        name: "Jane".to_owned(),
        font_size: 48,
        show_company: false,
        ..base.clone()
    };
    assert_eq!(merged, expected);
    assert_eq!(base.merge(&BannerConfigPatch::default()), base);
}

#[test]
fn patch_rejects_unknown_keys() {
    assert!(BannerConfigPatch::from_json_value(json!({ "colour": "#fff" })).is_err());
}

#[test]
fn assignments_parse_json_or_fall_back_to_strings() {
    let p = BannerConfigPatch::from_assignment("name=Jane Doe").unwrap();
    assert_eq!(p.name.as_deref(), Some("Jane Doe"));

    let p = BannerConfigPatch::from_assignment("fontSize=48").unwrap();
    assert_eq!(p.font_size, Some(48));

    let p = BannerConfigPatch::from_assignment("showShapes=false").unwrap();
    assert_eq!(p.show_shapes, Some(false));

    let p = BannerConfigPatch::from_assignment("contactPhone=5551234").unwrap();
    assert_eq!(p.contact_phone.as_deref(), Some("5551234"));

    let p = BannerConfigPatch::from_assignment("accentColor=#00ff00").unwrap();
    assert_eq!(p.accent_color, Some(Rgb8::new(0, 255, 0)));

    let p = BannerConfigPatch::from_assignment("namePosition=bottom-left").unwrap();
    assert_eq!(p.name_position, Some(Position::BottomLeft));

    assert!(BannerConfigPatch::from_assignment("fontSize").is_err());
    assert!(BannerConfigPatch::from_assignment("=1").is_err());
    assert!(BannerConfigPatch::from_assignment("bogus=1").is_err());
}

#[test]
fn font_family_lookup_is_case_insensitive() {
    assert_eq!(
        FontFamily::from_name("trebuchet ms"),
        Some(FontFamily::TrebuchetMs)
    );
    assert_eq!(FontFamily::from_name("Papyrus"), None);
    assert_eq!(FontFamily::Georgia.generic(), GenericFamily::Serif);
    assert_eq!(FontFamily::CourierNew.generic(), GenericFamily::Monospace);
}

#[test]
fn font_family_deserializes_ignoring_case() {
    let cfg = BannerConfig::from_json_str(r#"{ "fontFamily": "courier new" }"#).unwrap();
    assert_eq!(cfg.font_family, FontFamily::CourierNew);

    let patch = BannerConfigPatch::from_assignment("fontFamily=  GEORGIA ").unwrap();
    assert_eq!(patch.font_family, Some(FontFamily::Georgia));

    // Serialization keeps the canonical display name.
    let v = serde_json::to_value(cfg).unwrap();
    assert_eq!(v["fontFamily"], json!("Courier New"));
}

#[test]
fn only_circles_is_nondeterministic() {
    for s in ShapesStyle::ALL {
        assert_eq!(s.is_deterministic(), s != ShapesStyle::Circles);
    }
}

#[test]
fn position_names_match_serialized_form() {
    for p in Position::ALL {
        assert_eq!(serde_json::to_value(p).unwrap(), json!(p.as_str()));
    }
}
