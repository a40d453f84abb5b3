use super::*;

#[test]
fn num_is_compact() {
    assert_eq!(num(2.0), "2");
    assert_eq!(num(1.5), "1.5");
    assert_eq!(num(-0.001), "0");
    assert_eq!(num(f64::NAN), "0");
    assert_eq!(num(380.0), "380");
}

#[test]
fn text_and_attributes_are_escaped() {
    let el = El::new("text").attr("data-x", "a\"b").text("<Fire & Ice>");
    let s = el.to_string();
    assert_eq!(s, "<text data-x=\"a&quot;b\">&lt;Fire &amp; Ice&gt;</text>");
}

#[test]
fn translucent_paint_emits_opacity() {
    let s = El::rect(Rect::new(0.0, 0.0, 10.0, 5.0))
        .fill(Rgba8::BLACK.with_alpha(51))
        .to_string();
    assert!(s.contains("fill=\"#000000\""));
    assert!(s.contains("fill-opacity=\"0.2\""));
    assert!(s.contains("width=\"10\""));
}

#[test]
fn definitions_get_unique_ids() {
    let mut scene = Scene::card();
    let a = scene.linear((0.0, 0.0, 0.0, 1.0), &[(0.0, Rgba8::WHITE)]);
    let b = scene.radial(0.5, 0.5, 0.5, &[(0.0, Rgba8::WHITE)]);
    let clip = scene.clip_rounded(scene.bounds(), 4.0);
    assert_ne!(a, b);
    assert!(clip.starts_with("url(#clip"));

    let svg = scene.to_svg();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.contains("xmlns:xlink"));
    assert!(svg.contains("viewBox=\"0 0 380 600\""));
    assert!(svg.contains("<defs>"));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn empty_scene_has_no_defs() {
    let svg = Scene::new(10.0, 20.0).to_svg();
    assert!(!svg.contains("<defs>"));
    assert!(svg.contains("width=\"10\" height=\"20\""));
}

#[test]
fn theme_gradient_follows_css_angle() {
    let g = Gradient {
        angle_deg: 180.0,
        stops: &[],
    };
    let (x1, y1, x2, y2) = g.vector();
    assert!((x1 - 0.5).abs() < 1e-9 && (x2 - 0.5).abs() < 1e-9);
    assert!(y1 < y2, "180deg runs top to bottom");
}
