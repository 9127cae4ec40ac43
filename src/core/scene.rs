use rand::Rng;

use super::constants::{BACKDROP_ACCENT, BACKDROP_ACCENT_OFFSET};
use super::field::ParticleField;
use super::geometry::Viewport;
use super::pointer::PointerTracker;
use super::surface::{GradientStop, Surface};
use super::theme::ThemeProvider;

/// Whether the rendering surface has been confirmed available.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Readiness {
    #[default]
    Uninitialized,
    Ready,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    NotReady,
    SkippedNoSurface,
    Drawn { waves: usize },
}

/// Everything one mounted background owns: the field, the pointer, the theme
/// source and the randomness used to respawn waves.
pub struct Scene<T, R> {
    readiness: Readiness,
    field: ParticleField,
    pointer: PointerTracker,
    theme: T,
    rng: R,
}

impl<T: ThemeProvider, R: Rng> Scene<T, R> {
    pub fn new(theme: T, rng: R) -> Self {
        Self {
            readiness: Readiness::Uninitialized,
            field: ParticleField::default(),
            pointer: PointerTracker::default(),
            theme,
            rng,
        }
    }

    #[inline]
    pub fn readiness(&self) -> Readiness {
        self.readiness
    }

    /// Mark the surface available and build the first field.
    pub fn attach(&mut self, viewport: Viewport) {
        self.field = ParticleField::initialize(viewport, &mut self.rng);
        self.pointer = PointerTracker::default();
        self.readiness = Readiness::Ready;
        log::debug!(
            "[scene] ready {}x{} waves={}",
            viewport.width,
            viewport.height,
            self.field.len()
        );
    }

    /// Replace the whole field for a new canvas size. Ignored before `attach`.
    pub fn resize(&mut self, viewport: Viewport) {
        if self.readiness != Readiness::Ready {
            return;
        }
        self.field.resize(viewport, &mut self.rng);
        log::debug!(
            "[scene] resize {}x{} waves={}",
            viewport.width,
            viewport.height,
            self.field.len()
        );
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    pub fn pointer_mut(&mut self) -> &mut PointerTracker {
        &mut self.pointer
    }

    pub fn theme_mut(&mut self) -> &mut T {
        &mut self.theme
    }

    /// Paint the backdrop, then update and draw every wave in order.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: Option<&mut S>) -> FrameOutcome {
        if self.readiness != Readiness::Ready {
            return FrameOutcome::NotReady;
        }
        let Some(surface) = surface else {
            return FrameOutcome::SkippedNoSurface;
        };

        let palette = self.theme.palette();
        surface.fill_backdrop(&[
            GradientStop {
                offset: 0.0,
                color: &palette.background,
            },
            GradientStop {
                offset: BACKDROP_ACCENT_OFFSET,
                color: BACKDROP_ACCENT,
            },
            GradientStop {
                offset: 1.0,
                color: &palette.background,
            },
        ]);

        let bounds = surface.viewport().bounds();
        let pointer = self.pointer.position();
        for wave in self.field.waves_mut() {
            wave.update(pointer, &bounds);
            wave.draw(surface);
        }
        FrameOutcome::Drawn {
            waves: self.field.len(),
        }
    }
}
