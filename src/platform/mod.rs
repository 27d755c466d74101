//! Platform abstraction layer
//!
//! Handles browser/native differences for input. The DOM listeners in the
//! wasm host write into `InputState`; the simulation only ever sees the
//! `TickInput` snapshot taken at the start of each frame.

pub mod input;

pub use input::{Action, InputState, KeyBindings};
