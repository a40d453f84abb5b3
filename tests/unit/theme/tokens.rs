use super::*;

#[test]
fn every_element_has_a_complete_theme() {
    for &e in ElementType::ALL {
        let t = element_theme(e);
        assert!(t.border.stops.len() >= 2, "{e} border needs stops");
        assert!(t.bg.is_opaque());
        assert!(t.glow.a > 0);
        let first = t.border.stops.first().unwrap().offset;
        let last = t.border.stops.last().unwrap().offset;
        assert_eq!((first, last), (0.0, 1.0));
    }
}

#[test]
fn element_accents_are_distinct() {
    let accents = ElementType::ALL
        .iter()
        .map(|&e| element_theme(e).accent)
        .collect::<std::collections::HashSet<_>>();
    assert_eq!(accents.len(), ElementType::ALL.len());
}

#[test]
fn gradient_vector_follows_css_angles() {
    let g = Gradient {
        angle_deg: 180.0,
        stops: &[],
    };
    let (x1, y1, x2, y2) = g.vector();
    assert!((x1 - 0.5).abs() < 1e-9 && (x2 - 0.5).abs() < 1e-9);
    assert!(y1.abs() < 1e-9 && (y2 - 1.0).abs() < 1e-9);

    let g = Gradient {
        angle_deg: 90.0,
        stops: &[],
    };
    let (x1, _, x2, _) = g.vector();
    assert!(x1.abs() < 1e-9 && (x2 - 1.0).abs() < 1e-9);
}
