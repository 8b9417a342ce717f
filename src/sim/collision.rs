//! Spider-insect overlap and escape tests
//!
//! Both shapes are treated as circles whose radius is half their size.

use super::state::{Avatar, Insect};

/// True when the insect touches the spider
#[inline]
pub fn avatar_overlaps(avatar: &Avatar, insect: &Insect) -> bool {
    avatar.pos.distance(insect.pos) < avatar.size / 2.0 + insect.size / 2.0
}

/// True once the insect has fallen past the bottom of the field
#[inline]
pub fn has_escaped(insect: &Insect, field_height: f32) -> bool {
    insect.pos.y > field_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::InsectKind;
    use glam::Vec2;

    fn insect_at(x: f32, y: f32) -> Insect {
        Insect {
            id: 1,
            pos: Vec2::new(x, y),
            size: 30.0,
            speed: 3.0,
            kind: InsectKind::Normal,
            glyph: Some("🐝"),
        }
    }

    #[test]
    fn test_overlap_threshold() {
        let avatar = Avatar::new(Vec2::new(100.0, 100.0));
        // Combined half sizes: 25 + 15 = 40
        assert!(avatar_overlaps(&avatar, &insect_at(139.0, 100.0)));
        assert!(!avatar_overlaps(&avatar, &insect_at(140.0, 100.0)));
        assert!(avatar_overlaps(&avatar, &insect_at(120.0, 120.0)));
        assert!(!avatar_overlaps(&avatar, &insect_at(130.0, 130.0)));
    }

    #[test]
    fn test_escape_is_strictly_below_field() {
        assert!(!has_escaped(&insect_at(0.0, 600.0), 600.0));
        assert!(has_escaped(&insect_at(0.0, 600.5), 600.0));
    }
}
