//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` advances exactly one logical step
//! - No RNG, no wall clock
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;
pub mod wave;

pub use collision::{Aabb, Bounded, overlaps};
pub use state::{
    Bullet, Enemy, EntityView, Explosion, GameEvent, GamePhase, GameState, Hud, Player,
};
pub use tick::{TickInput, tick};
pub use wave::{build_wave, wave_dimensions, wave_speed};
