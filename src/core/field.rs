use glam::Vec2;
use rand::Rng;

use super::geometry::{Bounds, Viewport};
use super::wave::Wave;

/// Every wave alive for the current canvas size.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    viewport: Viewport,
    waves: Vec<Wave>,
    next_id: u64,
}

impl ParticleField {
    pub fn initialize<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Self {
        let mut field = Self::default();
        field.resize(viewport, rng);
        field
    }

    /// Drop the current batch and spawn a fresh one sized for `viewport`.
    pub fn resize<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        let count = viewport.wave_count();
        let mut waves = Vec::with_capacity(count);
        for _ in 0..count {
            let position = Vec2::new(
                rng.gen::<f32>() * viewport.width,
                rng.gen::<f32>() * viewport.height,
            );
            waves.push(Wave::spawn(self.next_id, position, rng));
            self.next_id += 1;
        }
        self.viewport = viewport;
        self.waves = waves;
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.viewport.bounds()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.waves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }

    pub fn waves(&self) -> &[Wave] {
        &self.waves
    }

    pub fn waves_mut(&mut self) -> &mut [Wave] {
        &mut self.waves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spawns_inside_viewport() {
        let mut rng = StdRng::seed_from_u64(3);
        let field = ParticleField::initialize(Viewport::new(1920.0, 1080.0), &mut rng);
        assert_eq!(field.len(), 41);
        for w in field.waves() {
            assert!((0.0..=1920.0).contains(&w.position.x));
            assert!((0.0..=1080.0).contains(&w.position.y));
        }
    }

    #[test]
    fn tiny_viewport_is_empty() {
        let mut rng = StdRng::seed_from_u64(3);
        let field = ParticleField::initialize(Viewport::new(200.0, 200.0), &mut rng);
        assert!(field.is_empty());
    }

    #[test]
    fn ids_are_never_reused_across_resizes() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut field = ParticleField::initialize(Viewport::new(1000.0, 1000.0), &mut rng);
        let mut seen: HashSet<u64> = field.waves().iter().map(Wave::id).collect();
        for _ in 0..5 {
            field.resize(Viewport::new(1000.0, 1000.0), &mut rng);
            for w in field.waves() {
                assert!(seen.insert(w.id()), "id {} reused", w.id());
            }
        }
        assert_eq!(seen.len(), 120);
    }

    #[test]
    fn ids_are_unique_within_a_batch() {
        let mut rng = StdRng::seed_from_u64(9);
        let field = ParticleField::initialize(Viewport::new(1000.0, 1000.0), &mut rng);
        let ids: HashSet<u64> = field.waves().iter().map(Wave::id).collect();
        assert_eq!(field.len(), 20);
        assert_eq!(ids.len(), field.len());
    }
}
