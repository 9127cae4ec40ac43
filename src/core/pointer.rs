use glam::Vec2;

/// Last known pointer position relative to the canvas origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerTracker {
    position: Vec2,
}

impl PointerTracker {
    /// Record a pointer event given in client coordinates, with `origin` being
    /// the canvas's top-left corner in the same space. Last event wins.
    #[inline]
    pub fn track(&mut self, client: Vec2, origin: Vec2) {
        self.position = client - origin;
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_origin() {
        assert_eq!(PointerTracker::default().position(), Vec2::ZERO);
    }

    #[test]
    fn subtracts_canvas_offset_and_keeps_latest() {
        let mut p = PointerTracker::default();
        p.track(Vec2::new(150.0, 90.0), Vec2::new(50.0, 40.0));
        assert_eq!(p.position(), Vec2::new(100.0, 50.0));
        p.track(Vec2::new(10.0, 10.0), Vec2::new(50.0, 40.0));
        assert_eq!(p.position(), Vec2::new(-40.0, -30.0));
    }
}
