use super::*;

fn surface(w: u32, h: u32) -> CpuSurface {
    CpuSurface::new(Canvas::new(w, h).unwrap(), FontBook::empty()).unwrap()
}

#[test]
fn rejects_dimensions_beyond_u16() {
    let canvas = Canvas::new(70_000, 10).unwrap();
    let err = CpuSurface::new(canvas, FontBook::empty()).err().unwrap();
    assert!(matches!(err, BannerError::Render(_)));
}

#[test]
fn untouched_surface_is_transparent() {
    let mut s = surface(8, 8);
    let f = s.frame();
    assert_eq!(f.data.len(), 8 * 8 * 4);
    assert!(f.premultiplied);
    assert!(f.data.iter().all(|&b| b == 0));
}

#[test]
fn fill_rect_paints_opaque_color() {
    let mut s = surface(8, 8);
    s.set_fill_color(Rgb8::new(10, 200, 30));
    s.fill_rect(Rect::new(0.0, 0.0, 8.0, 8.0));
    let f = s.frame();
    assert_eq!(f.pixel(3, 4), Some([10, 200, 30, 255]));
}

#[test]
fn opacity_scales_fill_alpha() {
    let mut s = surface(4, 4);
    s.set_fill_color(Rgb8::WHITE);
    s.set_opacity(0.5);
    s.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0));
    let px = s.frame().pixel(1, 1).unwrap();
    assert!((i32::from(px[3]) - 128).abs() <= 2, "alpha {}", px[3]);
}

#[test]
fn clear_discards_previous_draws_and_state() {
    let mut s = surface(4, 4);
    s.set_fill_color(Rgb8::WHITE);
    s.set_opacity(0.1);
    s.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0));
    s.clear();

    assert!(s.frame().data.iter().all(|&b| b == 0));

    s.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0));
    assert_eq!(s.frame().pixel(2, 2), Some([0, 0, 0, 255]));
}

#[test]
fn circle_covers_its_center_only() {
    let mut s = surface(40, 40);
    s.set_fill_color(Rgb8::new(255, 0, 0));
    s.fill_circle(Point::new(20.0, 20.0), 5.0);
    let f = s.frame();
    assert_eq!(f.pixel(20, 20), Some([255, 0, 0, 255]));
    assert_eq!(f.pixel(2, 2), Some([0, 0, 0, 0]));
}

#[test]
fn thick_horizontal_stroke_covers_its_band() {
    let mut s = surface(20, 20);
    s.set_stroke_color(Rgb8::new(0, 0, 255));
    s.set_line_width(4.0);
    s.stroke_line(Point::new(0.0, 10.0), Point::new(20.0, 10.0));
    let f = s.frame();
    assert_eq!(f.pixel(5, 9), Some([0, 0, 255, 255]));
    assert_eq!(f.pixel(5, 10), Some([0, 0, 255, 255]));
    assert_eq!(f.pixel(5, 2), Some([0, 0, 0, 0]));
}

#[test]
fn degenerate_shapes_draw_nothing() {
    let mut s = surface(10, 10);
    s.fill_polygon(&[]);
    s.stroke_polyline(&[Point::new(1.0, 1.0)]);
    s.fill_circle(Point::new(5.0, 5.0), 0.0);
    assert!(s.frame().data.iter().all(|&b| b == 0));
}

#[test]
fn text_without_fonts_is_skipped() {
    let mut s = surface(50, 20);
    s.set_fill_color(Rgb8::WHITE);
    s.set_shadow(Some(TextShadow {
        offset_x: 2.0,
        offset_y: 2.0,
        blur: 4.0,
        color: Rgb8::BLACK,
        alpha: 0.2,
    }));
    s.draw_text("Hello", Point::new(10.0, 15.0), TextAlign::Left);
    assert!(s.frame().data.iter().all(|&b| b == 0));
}
