//! Corner pockets and ball identity
//!
//! A pocket is the open rectangle beyond both thresholds in one corner of
//! the table. With positive thresholds the four corners cannot overlap.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Opaque ball identity (a colour name). Carries no physical weight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The four corner pockets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    /// x > +tx, y > +ty
    TopRight,
    /// x > +tx, y < -ty
    BottomRight,
    /// x < -tx, y < -ty
    BottomLeft,
    /// x < -tx, y > +ty
    TopLeft,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
        Corner::TopLeft,
    ];

    /// Unit signs of the corner's quadrant
    #[inline]
    pub fn signs(self) -> Vec2 {
        match self {
            Corner::TopRight => Vec2::new(1.0, 1.0),
            Corner::BottomRight => Vec2::new(1.0, -1.0),
            Corner::BottomLeft => Vec2::new(-1.0, -1.0),
            Corner::TopLeft => Vec2::new(-1.0, 1.0),
        }
    }

    /// Is `pos` strictly inside this pocket?
    #[inline]
    pub fn contains(self, pos: Vec2, threshold: Vec2) -> bool {
        (pos * self.signs()).cmpgt(threshold).all()
    }

    /// The pocket `pos` lies in, if any
    pub fn locate(pos: Vec2, threshold: Vec2) -> Option<Corner> {
        Self::ALL.into_iter().find(|c| c.contains(pos, threshold))
    }
}

/// Score change for a ball dropping into a pocket that wants `wanted`
#[inline]
pub fn score_delta(tag: &Tag, wanted: &Tag) -> i32 {
    if tag == wanted { 1 } else { -1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: Vec2 = Vec2::new(0.06, 0.09);

    #[test]
    fn test_locate_each_corner() {
        assert_eq!(Corner::locate(Vec2::new(0.07, 0.1), T), Some(Corner::TopRight));
        assert_eq!(Corner::locate(Vec2::new(0.07, -0.1), T), Some(Corner::BottomRight));
        assert_eq!(Corner::locate(Vec2::new(-0.07, -0.1), T), Some(Corner::BottomLeft));
        assert_eq!(Corner::locate(Vec2::new(-0.07, 0.1), T), Some(Corner::TopLeft));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(Corner::locate(Vec2::new(0.06, 0.1), T), None);
        assert_eq!(Corner::locate(Vec2::new(0.07, 0.09), T), None);
        assert_eq!(Corner::locate(Vec2::new(0.07, 0.0), T), None);
        assert_eq!(Corner::locate(Vec2::ZERO, T), None);
    }

    #[test]
    fn test_corners_are_exclusive() {
        for &pos in &[
            Vec2::new(0.08, 0.12),
            Vec2::new(0.08, -0.12),
            Vec2::new(-0.08, -0.12),
            Vec2::new(-0.08, 0.12),
        ] {
            let hits = Corner::ALL.iter().filter(|c| c.contains(pos, T)).count();
            assert_eq!(hits, 1);
        }
    }

    #[test]
    fn test_score_delta() {
        let red = Tag::new("red");
        assert_eq!(score_delta(&red, &Tag::from("red")), 1);
        assert_eq!(score_delta(&Tag::from("blue"), &red), -1);
    }
}
