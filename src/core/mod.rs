//! Platform-independent simulation and scheduling for the wave background.

pub mod color;
pub mod constants;
pub mod field;
pub mod frame_loop;
pub mod geometry;
pub mod pointer;
pub mod scene;
pub mod surface;
pub mod theme;
pub mod wave;

pub use color::Hsl;
pub use field::ParticleField;
pub use frame_loop::{FrameId, FrameScheduler, RenderLoop};
pub use geometry::{Bounds, Viewport};
pub use pointer::PointerTracker;
pub use scene::{FrameOutcome, Readiness, Scene};
pub use surface::{GradientStop, Surface};
pub use theme::{CachedTheme, FallbackTheme, Palette, ThemeProvider};
pub use wave::Wave;
