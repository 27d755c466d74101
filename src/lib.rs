//! Wave Defender - a four-level wave shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, waves, game phases)
//! - `platform`: Browser input abstraction (key map and bindings)
//! - `renderer`: WebGPU rendering pipeline
//! - `settings`: Host preferences

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{QualityPreset, Settings};

/// Game configuration constants
pub mod consts {
    /// Default playfield size (canvas pixels)
    pub const DEFAULT_CANVAS_WIDTH: f32 = 800.0;
    pub const DEFAULT_CANVAS_HEIGHT: f32 = 600.0;

    /// Number of levels; clearing the last one wins the game
    pub const FINAL_LEVEL: u32 = 4;
    pub const STARTING_LIVES: i32 = 3;
    pub const SCORE_PER_KILL: u64 = 100;

    /// Player ship
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 30.0;
    pub const PLAYER_SPEED: f32 = 8.0;
    /// Spawn distance above the bottom edge
    pub const PLAYER_SPAWN_OFFSET: f32 = 50.0;

    /// Bullets
    pub const BULLET_WIDTH: f32 = 5.0;
    pub const BULLET_HEIGHT: f32 = 15.0;
    pub const BULLET_SPEED: f32 = 10.0;
    /// Ticks between shots (300 ms at 60 Hz)
    pub const SHOT_COOLDOWN_TICKS: u32 = 18;

    /// Enemy grid
    pub const ENEMY_WIDTH: f32 = 30.0;
    pub const ENEMY_HEIGHT: f32 = 30.0;
    pub const ENEMY_SPACING: f32 = 60.0;
    pub const WAVE_ORIGIN_X: f32 = 100.0;
    pub const WAVE_ORIGIN_Y: f32 = 50.0;
    pub const MAX_WAVE_ROWS: u32 = 6;
    pub const MAX_WAVE_COLS: u32 = 8;
    pub const ENEMY_BASE_SPEED: f32 = 0.5;
    pub const ENEMY_SPEED_PER_LEVEL: f32 = 0.2;
    /// Descent applied to the whole wave on each bounce
    pub const WAVE_DROP: f32 = 20.0;
    /// Enemies whose bottom edge reaches `height - INVASION_MARGIN` end the run
    pub const INVASION_MARGIN: f32 = 50.0;

    /// Explosions
    pub const EXPLOSION_START_RADIUS: f32 = 5.0;
    pub const EXPLOSION_MAX_RADIUS: f32 = 30.0;
    pub const EXPLOSION_GROWTH: f32 = 1.0;
    pub const EXPLOSION_FADE: f32 = 0.05;
}
