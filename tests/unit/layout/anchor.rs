use super::*;

fn metrics(font_size: u32) -> LayoutMetrics {
    LayoutMetrics::new(1584, 396, font_size)
}

#[test]
fn padding_has_a_floor_of_30() {
    assert_eq!(padding_for(16.0), 30.0);
    assert_eq!(padding_for(32.0), 30.0);
    assert!((padding_for(40.0) - 32.0).abs() < 1e-9);
    assert!((padding_for(72.0) - 57.6).abs() < 1e-9);
}

#[test]
fn name_anchors() {
    let m = metrics(32);
    let a = resolve_anchor(Position::Center, TextRole::Name, &m);
    assert_eq!((a.x, a.y, a.align), (792.0, 198.0, TextAlign::Center));

    let a = resolve_anchor(Position::TopLeft, TextRole::Name, &m);
    assert_eq!((a.x, a.y, a.align), (30.0, 62.0, TextAlign::Left));

    let a = resolve_anchor(Position::TopRight, TextRole::Name, &m);
    assert_eq!((a.x, a.y, a.align), (1554.0, 62.0, TextAlign::Right));

    let a = resolve_anchor(Position::BottomLeft, TextRole::Name, &m);
    assert_eq!((a.x, a.y, a.align), (30.0, 334.0, TextAlign::Left));

    let a = resolve_anchor(Position::BottomRight, TextRole::Name, &m);
    assert_eq!((a.x, a.y, a.align), (1554.0, 334.0, TextAlign::Right));
}

#[test]
fn info_anchors() {
    let m = metrics(40);
    let a = resolve_anchor(Position::TopLeft, TextRole::Info, &m);
    assert!((a.x - 32.0).abs() < 1e-9);
    assert!((a.y - (32.0 + 80.0)).abs() < 1e-9);

    let a = resolve_anchor(Position::Center, TextRole::Info, &m);
    assert_eq!(a.align, TextAlign::Center);
    assert!((a.y - (198.0 + 48.0)).abs() < 1e-9);

    let a = resolve_anchor(Position::BottomRight, TextRole::Info, &m);
    assert_eq!(a.align, TextAlign::Right);
    assert!((a.y - (396.0 - 32.0 - 120.0)).abs() < 1e-9);
}

#[test]
fn contact_center_sits_on_the_bottom_inset() {
    let m = metrics(32);
    let center = resolve_anchor(Position::Center, TextRole::Contact, &m);
    let bottom = resolve_anchor(Position::BottomLeft, TextRole::Contact, &m);
    assert_eq!(center.y, 366.0);
    assert_eq!(bottom.y, 366.0);
    assert_eq!(center.x, 792.0);

    let top = resolve_anchor(Position::TopRight, TextRole::Contact, &m);
    assert_eq!(top.y, 30.0 + 128.0);
}

#[test]
fn center_is_role_dependent() {
    let m = metrics(32);
    let ys: Vec<f64> = [TextRole::Name, TextRole::Info, TextRole::Contact]
        .into_iter()
        .map(|r| resolve_anchor(Position::Center, r, &m).y)
        .collect();
    assert_eq!(ys[0], 198.0);
    assert!((ys[1] - (198.0 + 38.4)).abs() < 1e-9);
    assert_eq!(ys[2], 366.0);
}

#[test]
fn extreme_font_sizes_stay_on_the_surface() {
    for fs in [16, 72] {
        let m = metrics(fs);
        for pos in Position::ALL {
            for role in [TextRole::Name, TextRole::Info, TextRole::Contact] {
                let a = resolve_anchor(pos, role, &m);
                assert!(a.x.is_finite() && a.y.is_finite());
                assert!(a.x >= 0.0 && a.x <= m.width, "{pos:?} {role:?} {fs}");
                assert!(a.y >= 0.0 && a.y <= m.height, "{pos:?} {role:?} {fs}");
            }
        }
    }
}

#[test]
fn resolution_is_pure() {
    let m = metrics(28);
    for pos in Position::ALL {
        assert_eq!(
            resolve_anchor(pos, TextRole::Info, &m),
            resolve_anchor(pos, TextRole::Info, &m)
        );
    }
}
