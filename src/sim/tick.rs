//! Simulation tick
//!
//! Core game loop step. The host calls `tick` once per display frame; the
//! simulation never schedules itself.

use super::collision::{Bounded, overlaps};
use super::state::{Bullet, Explosion, GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Fire held (rate limited by the shot cooldown)
    pub fire: bool,
}

/// Advance the game state by one step.
///
/// Inert outside `GamePhase::Playing`: once a run is over or a level is
/// cleared nothing moves until the host issues an action.
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    // Player movement
    state.player.update(input, state.width, state.height);

    // Firing
    state.shot_cooldown = state.shot_cooldown.saturating_sub(1);
    if input.fire && state.shot_cooldown == 0 {
        state.bullets.push(Bullet::new(state.player.muzzle()));
        state.shot_cooldown = SHOT_COOLDOWN_TICKS;
        state.events.push(GameEvent::ShotFired);
    }

    // Bullets
    for bullet in &mut state.bullets {
        bullet.update();
    }
    state.bullets.retain(|b| !b.is_offscreen());

    // Enemies march; the wave bounces as one unit
    let mut edge_reached = false;
    for enemy in &mut state.enemies {
        enemy.update();
        if enemy.touches_side(state.width) {
            edge_reached = true;
        }
    }
    if edge_reached {
        for enemy in &mut state.enemies {
            enemy.bounce();
        }
    }

    // Any enemy reaching the player's baseline ends the run outright
    let baseline = state.height - INVASION_MARGIN;
    if state.enemies.iter().any(|e| e.bounds().bottom() >= baseline) {
        state.lives = 0;
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::Invaded);
    }

    // Explosions
    for explosion in &mut state.explosions {
        explosion.update();
    }
    state.explosions.retain(|e| !e.is_spent());

    resolve_collisions(state);
    evaluate_progression(state);
}

/// Bullet/enemy and player/enemy collisions.
///
/// Both scans walk newest-first. A bullet destroys at most one enemy; the
/// player loses a life for every enemy touching it, even within one tick.
pub fn resolve_collisions(state: &mut GameState) {
    let mut i = state.bullets.len();
    while i > 0 {
        i -= 1;
        let bullet = state.bullets[i].bounds();
        let hit = (0..state.enemies.len())
            .rev()
            .find(|&j| overlaps(bullet, state.enemies[j].bounds()));

        if let Some(j) = hit {
            let enemy = state.enemies.remove(j);
            state.bullets.remove(i);

            let at = enemy.center();
            state.explosions.push(Explosion::new(at));
            state.score += SCORE_PER_KILL;
            state.enemies_remaining = state.enemies_remaining.saturating_sub(1);
            state.events.push(GameEvent::EnemyDestroyed { at });
            log::debug!("Enemy destroyed at {:?}, score {}", at, state.score);
        }
    }

    let mut j = state.enemies.len();
    while j > 0 {
        j -= 1;
        if !state.player.overlaps(&state.enemies[j]) {
            continue;
        }

        let enemy = state.enemies.remove(j);
        let at = enemy.center();
        state.explosions.push(Explosion::new(at));
        state.lives -= 1;
        state.enemies_remaining = state.enemies_remaining.saturating_sub(1);
        state.events.push(GameEvent::EnemyDestroyed { at });
        state.events.push(GameEvent::PlayerHit { lives: state.lives });
        log::debug!("Player hit, {} lives left", state.lives);

        if state.lives <= 0 {
            state.phase = GamePhase::GameOver;
        }
    }
}

/// Decide whether this tick ended the run or cleared the wave.
/// Losing takes precedence over clearing.
fn evaluate_progression(state: &mut GameState) {
    if state.phase == GamePhase::GameOver {
        state.events.push(GameEvent::GameOver);
        log::info!(
            "Game over on level {} with score {}",
            state.level,
            state.score
        );
        return;
    }

    if state.enemies_remaining == 0 {
        if state.level >= FINAL_LEVEL {
            state.phase = GamePhase::AllLevelsComplete;
            state.events.push(GameEvent::AllLevelsComplete);
            log::info!("All levels complete! Final score {}", state.score);
        } else {
            state.phase = GamePhase::LevelComplete;
            state.events.push(GameEvent::LevelComplete { level: state.level });
            log::info!("Level {} complete, score {}", state.level, state.score);
        }
    }
}
