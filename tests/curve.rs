use brent_event_dashboard::domain::chart::{monotone_x, to_svg_path, PathCommand, Point};
use quickcheck_macros::quickcheck;

#[test]
fn short_inputs_degrade_to_lines() {
    assert!(monotone_x(&[]).is_empty());
    assert_eq!(monotone_x(&[Point::new(1.0, 2.0)]), [PathCommand::MoveTo(Point::new(1.0, 2.0))]);
    assert_eq!(to_svg_path(&monotone_x(&[Point::new(0.0, 0.0), Point::new(10.0, 5.0)])), "M0.00,0.00L10.00,5.00");
}

#[test]
fn curve_segments_end_on_each_point() {
    let pts = [Point::new(0.0, 4.0), Point::new(1.0, 1.0), Point::new(2.0, 3.0), Point::new(3.0, 3.0)];
    let path = monotone_x(&pts);
    assert_eq!(path.len(), pts.len());
    assert!(matches!(path[0], PathCommand::MoveTo(p) if p == pts[0]));
    for (command, point) in path.iter().zip(pts.iter()) {
        assert_eq!(command.end(), *point);
    }
    assert!(to_svg_path(&path).starts_with("M0.00,4.00C"));
}

#[test]
fn flat_run_stays_flat() {
    let pts = [Point::new(0.0, 5.0), Point::new(1.0, 5.0), Point::new(2.0, 5.0)];
    for command in monotone_x(&pts) {
        if let PathCommand::CurveTo { c1, c2, .. } = command {
            assert_eq!(c1.y, 5.0);
            assert_eq!(c2.y, 5.0);
        }
    }
}

#[quickcheck]
fn monotone_input_never_overshoots(mut ys: Vec<u8>) -> bool {
    ys.sort_unstable();
    let pts: Vec<Point> =
        ys.iter().enumerate().map(|(i, y)| Point::new(i as f64, f64::from(*y))).collect();
    let path = monotone_x(&pts);

    path.iter().skip(1).zip(pts.windows(2)).all(|(command, pair)| {
        let PathCommand::CurveTo { c1, c2, .. } = command else {
            return true;
        };
        let (lo, hi) = (pair[0].y - 1e-9, pair[1].y + 1e-9);
        (lo..=hi).contains(&c1.y) && (lo..=hi).contains(&c2.y)
    })
}
