// src/layout/routing.rs

//! Edge anchors and curved connector paths.

use std::fmt::Write as _;

use crate::types::Orientation;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned node box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Point where edges leave this node.
    pub fn out_anchor(&self, orientation: Orientation) -> Point {
        match orientation {
            Orientation::LeftToRight => Point::new(self.x + self.width, self.y + self.height / 2.0),
            Orientation::TopToBottom => Point::new(self.x + self.width / 2.0, self.y + self.height),
        }
    }

    /// Point where edges enter this node.
    pub fn in_anchor(&self, orientation: Orientation) -> Point {
        match orientation {
            Orientation::LeftToRight => Point::new(self.x, self.y + self.height / 2.0),
            Orientation::TopToBottom => Point::new(self.x + self.width / 2.0, self.y),
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// SVG path data for a smooth connector through `points`.
///
/// Each hop is a cubic Bézier whose control points sit halfway along the main
/// axis, so the curve leaves and enters every point parallel to the rank
/// direction. Returns an empty string for fewer than two points.
pub fn curve_path(orientation: Orientation, points: &[Point]) -> String {
    let mut path = String::new();
    let Some(first) = points.first() else {
        return path;
    };
    if points.len() < 2 {
        return path;
    }

    let _ = write!(path, "M {:.1} {:.1}", first.x, first.y);
    for hop in points.windows(2) {
        let (a, b) = (hop[0], hop[1]);
        let _ = match orientation {
            Orientation::LeftToRight => {
                let mid = (a.x + b.x) / 2.0;
                write!(
                    path,
                    " C {:.1} {:.1}, {:.1} {:.1}, {:.1} {:.1}",
                    mid, a.y, mid, b.y, b.x, b.y
                )
            }
            Orientation::TopToBottom => {
                let mid = (a.y + b.y) / 2.0;
                write!(
                    path,
                    " C {:.1} {:.1}, {:.1} {:.1}, {:.1} {:.1}",
                    a.x, mid, b.x, mid, b.x, b.y
                )
            }
        };
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_to_right_anchors_on_vertical_sides() {
        let rect = Rect { x: 10.0, y: 20.0, width: 100.0, height: 40.0 };
        assert_eq!(rect.out_anchor(Orientation::LeftToRight), Point::new(110.0, 40.0));
        assert_eq!(rect.in_anchor(Orientation::LeftToRight), Point::new(10.0, 40.0));
        assert_eq!(rect.out_anchor(Orientation::TopToBottom), Point::new(60.0, 60.0));
    }

    #[test]
    fn curve_uses_midpoint_controls() {
        let path = curve_path(
            Orientation::LeftToRight,
            &[Point::new(0.0, 0.0), Point::new(100.0, 50.0)],
        );
        assert_eq!(path, "M 0.0 0.0 C 50.0 0.0, 50.0 50.0, 100.0 50.0");
    }

    #[test]
    fn single_point_has_no_path() {
        assert!(curve_path(Orientation::TopToBottom, &[Point::new(1.0, 1.0)]).is_empty());
    }
}
