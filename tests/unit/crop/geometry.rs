use super::*;

fn loaded(cw: f64, ch: f64, iw: f64, ih: f64) -> CropTool {
    let mut tool = CropTool::new();
    tool.load_image(Size::new(cw, ch), Size::new(iw, ih)).unwrap();
    tool
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn starts_without_image() {
    let tool = CropTool::new();
    assert_eq!(tool.state(), CropState::NoImage);
    assert_eq!(tool.zoom(), DEFAULT_ZOOM);
    assert!(matches!(tool.source_rect(), Err(ForgeError::Crop(_))));
}

#[test]
fn load_centers_a_two_thirds_selection() {
    let tool = loaded(800.0, 600.0, 1600.0, 900.0);
    let r = tool.rect();
    assert!(approx(r.height(), 360.0));
    assert!(approx(r.width(), 240.0));
    assert!(approx(r.x0, 280.0));
    assert!(approx(r.y0, 120.0));
    assert_eq!(tool.state(), CropState::Idle);
}

#[test]
fn load_rejects_empty_sizes() {
    let mut tool = CropTool::new();
    let err = tool.load_image(Size::new(0.0, 600.0), Size::new(10.0, 10.0));
    assert!(matches!(err, Err(ForgeError::Crop(_))));
    assert_eq!(tool.state(), CropState::NoImage);
}

#[test]
fn load_resets_zoom_without_resizing() {
    let mut tool = loaded(800.0, 600.0, 800.0, 600.0);
    tool.set_zoom(100.0);
    tool.load_image(Size::new(800.0, 600.0), Size::new(400.0, 400.0)).unwrap();
    assert_eq!(tool.zoom(), DEFAULT_ZOOM);
    assert!(approx(tool.rect().height(), 360.0));
}

#[test]
fn drag_moves_and_clamps() {
    let mut tool = loaded(800.0, 600.0, 800.0, 600.0);
    assert!(tool.pointer_down(Point::new(300.0, 200.0)));
    let resp = tool.pointer_move(Point::new(350.0, 210.0), PointerKind::Mouse);
    assert!(resp.moved && !resp.suppress_scroll);
    assert!(approx(tool.rect().x0, 330.0));
    assert!(approx(tool.rect().y0, 130.0));

    // Far past every edge.
    tool.pointer_move(Point::new(-5000.0, 9000.0), PointerKind::Mouse);
    let r = tool.rect();
    assert!(approx(r.x0, 0.0));
    assert!(approx(r.y0, 600.0 - r.height()));
    tool.pointer_move(Point::new(9000.0, -9000.0), PointerKind::Mouse);
    let r = tool.rect();
    assert!(approx(r.x0, 800.0 - r.width()));
    assert!(approx(r.y0, 0.0));
}

#[test]
fn drag_stays_in_bounds_for_any_sequence() {
    let mut tool = loaded(500.0, 700.0, 300.0, 900.0);
    let c = tool.rect().center();
    assert!(tool.pointer_down(c));
    let mut p = c;
    for i in 0..200 {
        let step = ((i * 37) % 23) as f64 * 13.0 - 140.0;
        let step_y = ((i * 53) % 19) as f64 * 17.0 - 150.0;
        p = Point::new(p.x + step, p.y + step_y);
        tool.pointer_move(p, PointerKind::Touch);
        let r = tool.rect();
        assert!(r.x0 >= 0.0 && r.x0 <= 500.0 - r.width() + 1e-9);
        assert!(r.y0 >= 0.0 && r.y0 <= 700.0 - r.height() + 1e-9);
    }
}

#[test]
fn touch_moves_suppress_scroll_only_while_dragging() {
    let mut tool = loaded(800.0, 600.0, 800.0, 600.0);
    let idle = tool.pointer_move(Point::new(10.0, 10.0), PointerKind::Touch);
    assert_eq!(idle, PointerResponse::default());

    tool.pointer_down(tool.rect().center());
    let resp = tool.pointer_move(Point::new(400.0, 310.0), PointerKind::Touch);
    assert!(resp.suppress_scroll);
}

#[test]
fn pointer_down_outside_does_nothing() {
    let mut tool = loaded(800.0, 600.0, 800.0, 600.0);
    assert!(!tool.pointer_down(Point::new(5.0, 5.0)));
    assert_eq!(tool.state(), CropState::Idle);
}

#[test]
fn up_and_leave_end_the_drag() {
    let mut tool = loaded(800.0, 600.0, 800.0, 600.0);
    tool.pointer_down(tool.rect().center());
    assert!(matches!(tool.state(), CropState::Dragging(_)));
    tool.pointer_up();
    assert_eq!(tool.state(), CropState::Idle);

    tool.pointer_down(tool.rect().center());
    tool.pointer_leave();
    assert!(!tool.is_dragging());
    let before = tool.rect();
    tool.pointer_move(Point::new(0.0, 0.0), PointerKind::Mouse);
    assert_eq!(tool.rect(), before);
}

#[test]
fn zoom_extremes() {
    let mut tool = loaded(800.0, 600.0, 800.0, 600.0);
    tool.set_zoom(0.0);
    assert!(approx(tool.rect().height(), 0.98 * 600.0));
    assert!(approx(tool.rect().width(), tool.rect().height() * 2.0 / 3.0));
    tool.set_zoom(100.0);
    assert!(approx(tool.rect().height(), 50.0));
    assert!(approx(tool.rect().width(), 50.0 * 2.0 / 3.0));
}

#[test]
fn zoom_keeps_center_and_bounds() {
    let mut tool = loaded(800.0, 600.0, 800.0, 600.0);
    let before = tool.rect().center();
    tool.set_zoom(80.0);
    let after = tool.rect().center();
    assert!(approx(before.x, after.x) && approx(before.y, after.y));

    // Drag into the corner, then zoom out: the larger rect is pushed back inside.
    tool.pointer_down(tool.rect().center());
    tool.pointer_move(Point::new(-1000.0, -1000.0), PointerKind::Mouse);
    tool.pointer_up();
    tool.set_zoom(0.0);
    let r = tool.rect();
    assert!(r.x0 >= 0.0 && r.y0 >= 0.0);
    assert!(r.y1 <= 600.0 + 1e-9);
}

#[test]
fn zoom_without_image_only_stores_value() {
    let mut tool = CropTool::new();
    tool.set_zoom(70.0);
    assert_eq!(tool.zoom(), 70.0);
    assert_eq!(tool.rect(), Rect::ZERO);
    tool.set_zoom(250.0);
    assert_eq!(tool.zoom(), 100.0);
}

#[test]
fn maps_selection_into_source_pixels() {
    let fit = ContainFit::new(Size::new(800.0, 600.0), Size::new(1600.0, 900.0));
    assert!(approx(fit.scale, 0.5));
    assert!(approx(fit.offset.x, 0.0));
    assert!(approx(fit.offset.y, 75.0));

    let src = fit.to_source(Rect::from_origin_size((100.0, 100.0), (200.0, 300.0)));
    assert!(approx(src.x0, 200.0));
    assert!(approx(src.y0, 50.0));
    assert!(approx(src.width(), 400.0));
    assert!(approx(src.height(), 600.0));
}
