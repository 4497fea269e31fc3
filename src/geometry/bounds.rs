//! Axis-aligned bounding box

use glam::{Vec2, Vec3};

use super::math::map_value;

/// Axis-aligned 2D rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rectangle {
    /// Degenerate rectangle at a single point
    pub fn at(point: Vec2) -> Self {
        Self { min: point, max: point }
    }

    /// Bounding box of every point in every ring, or `None` when there are
    /// no points
    pub fn from_rings(rings: &[Vec<Vec3>]) -> Option<Self> {
        let first = rings.iter().flat_map(|ring| ring.first()).next()?;
        let mut rect = Self::at(first.truncate());
        for ring in rings {
            rect.grow_to_include(ring);
        }
        Some(rect)
    }

    pub fn grow_to_include(&mut self, points: &[Vec3]) {
        for p in points {
            self.min = self.min.min(p.truncate());
            self.max = self.max.max(p.truncate());
        }
    }

    /// Position of `point` inside the rectangle, mapped to `[0, 1]²`
    pub fn map_to_unit(&self, point: Vec3) -> Vec2 {
        Vec2::new(
            map_value(point.x, self.min.x, self.max.x, 0.0, 1.0),
            map_value(point.y, self.min.y, self.max.y, 0.0, 1.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_cover_all_rings() {
        let rings = vec![
            vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 0.0)],
            vec![Vec3::new(-1.0, 3.0, 0.0)],
        ];
        let rect = Rectangle::from_rings(&rings).unwrap();
        assert_eq!(rect.min, Vec2::new(-1.0, 0.0));
        assert_eq!(rect.max, Vec2::new(2.0, 3.0));
        assert_eq!(rect.map_to_unit(Vec3::new(2.0, 0.0, 0.0)), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_empty_rings_have_no_bounds() {
        assert!(Rectangle::from_rings(&[]).is_none());
        assert!(Rectangle::from_rings(&[vec![]]).is_none());
    }
}
