//! Interactive wave-particle background for the auth screens.
//!
//! The simulation in [`core`] is platform-independent and runs on the host for
//! tests; the browser bindings (canvas surface, listeners, RAF loop, mount
//! handle) only build for `wasm32`.

pub mod config;
pub mod core;
pub mod error;

pub use config::BackgroundConfig;
pub use error::BackgroundError;

#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod mount;
#[cfg(target_arch = "wasm32")]
mod render;
#[cfg(target_arch = "wasm32")]
mod style;

#[cfg(target_arch = "wasm32")]
pub use mount::{mount_background, mount_background_with, BackgroundHandle};
