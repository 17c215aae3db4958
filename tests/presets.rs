use bannerforge::{
    BannerConfig, BannerError, FontFamily, PALETTES, Position, Rgb8, ShapesStyle, TEMPLATES,
    apply_palette, apply_template, find_template,
};

fn customized() -> BannerConfig {
    BannerConfig {
        name: "Ada Lovelace".into(),
        skills: "Analysis, Engines".into(),
        show_company: false,
        width: 1200,
        height: 300,
        show_shapes: false,
        shapes_style: ShapesStyle::Waves,
        primary_color: Rgb8::new(1, 2, 3),
        ..BannerConfig::default()
    }
}

#[test]
fn modern_overwrites_exactly_its_fields() {
    let base = customized();
    let out = apply_template(&base, "modern").unwrap();

    assert_eq!(out.primary_color, Rgb8::parse_hex("#2d3748").unwrap());
    assert_eq!(out.secondary_color, Rgb8::WHITE);
    assert_eq!(out.accent_color, Rgb8::parse_hex("#4299e1").unwrap());
    assert_eq!(out.background_color, Rgb8::parse_hex("#edf2f7").unwrap());
    assert_eq!(out.name_position, Position::TopLeft);
    assert_eq!(out.info_position, Position::Center);
    assert_eq!(out.contact_position, Position::BottomRight);
    assert_eq!(out.font_size, 36);
    assert_eq!(out.font_family, FontFamily::Helvetica);
    assert_eq!(out.selected_template, "modern");

    // Everything else is carried over.
    let restored = BannerConfig {
        primary_color: base.primary_color,
        secondary_color: base.secondary_color,
        accent_color: base.accent_color,
        background_color: base.background_color,
        name_position: base.name_position,
        info_position: base.info_position,
        contact_position: base.contact_position,
        font_size: base.font_size,
        font_family: base.font_family,
        selected_template: base.selected_template.clone(),
        ..out
    };
    assert_eq!(restored, base);
}

#[test]
fn every_palette_overwrites_only_colors() {
    let base = apply_template(&customized(), "tech").unwrap();
    for palette in &PALETTES {
        let out = apply_palette(&base, palette.id).unwrap();
        assert_eq!(out.primary_color, palette.primary_color);
        assert_eq!(out.secondary_color, palette.secondary_color);
        assert_eq!(out.accent_color, palette.accent_color);
        assert_eq!(out.background_color, palette.background_color);

        let restored = BannerConfig {
            primary_color: base.primary_color,
            secondary_color: base.secondary_color,
            accent_color: base.accent_color,
            background_color: base.background_color,
            ..out
        };
        assert_eq!(restored, base, "palette {}", palette.id);
    }
}

#[test]
fn applying_a_template_twice_is_idempotent() {
    for t in &TEMPLATES {
        let once = t.apply(&customized());
        assert_eq!(t.apply(&once), once, "template {}", t.id);
    }
}

#[test]
fn professional_template_matches_editor_defaults() {
    let base = BannerConfig::default();
    let t = find_template("professional").unwrap();
    assert_eq!(t.apply(&base), base);
}

#[test]
fn unknown_ids_are_rejected_and_listed() {
    let base = BannerConfig::default();
    let err = apply_template(&base, "retro").unwrap_err();
    assert!(matches!(err, BannerError::Validation(_)));
    assert!(err.to_string().contains("professional"));

    let err = apply_palette(&base, "neon").unwrap_err();
    assert!(err.to_string().contains("midnight"));
}

#[test]
fn templates_survive_a_json_round_trip_of_the_config() {
    let out = apply_template(&BannerConfig::default(), "bold").unwrap();
    let json = out.to_json_string_pretty().unwrap();
    assert!(json.contains("\"fontFamily\": \"Trebuchet MS\""));
    assert!(json.contains("\"contactPosition\": \"top-right\""));
    assert_eq!(BannerConfig::from_json_str(&json).unwrap(), out);
}
