//! Wave generation
//!
//! Each level spawns a rectangular formation that grows with the level number
//! (capped at 6 rows × 8 columns). Every enemy in a wave starts with the same
//! speed and direction.

use super::state::Enemy;
use crate::consts::*;

/// Grid size `(rows, cols)` for a level
pub fn wave_dimensions(level: u32) -> (u32, u32) {
    let rows = (3 + level).min(MAX_WAVE_ROWS);
    let cols = (3 + level).min(MAX_WAVE_COLS);
    (rows, cols)
}

/// Horizontal speed shared by the whole wave
pub fn wave_speed(level: u32) -> f32 {
    ENEMY_BASE_SPEED + level as f32 * ENEMY_SPEED_PER_LEVEL
}

/// Build the enemy formation for `level`, row by row from the top-left
pub fn build_wave(level: u32) -> Vec<Enemy> {
    let (rows, cols) = wave_dimensions(level);
    let speed = wave_speed(level);

    let mut enemies = Vec::with_capacity((rows * cols) as usize);
    for row in 0..rows {
        for col in 0..cols {
            let x = WAVE_ORIGIN_X + col as f32 * ENEMY_SPACING;
            let y = WAVE_ORIGIN_Y + row as f32 * ENEMY_SPACING;
            enemies.push(Enemy::new(x, y, speed));
        }
    }

    log::debug!("Wave for level {}: {}x{} at speed {}", level, rows, cols, speed);
    enemies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wave_sizes_per_level() {
        assert_eq!(wave_dimensions(1), (4, 4));
        assert_eq!(wave_dimensions(2), (5, 5));
        assert_eq!(wave_dimensions(3), (6, 6));
        assert_eq!(wave_dimensions(4), (6, 7));

        for level in 1..=FINAL_LEVEL {
            let expected = (3 + level).min(6) * (3 + level).min(8);
            assert_eq!(build_wave(level).len() as u32, expected, "level {level}");
        }
    }

    #[test]
    fn test_wave_speed_uniform() {
        for level in 1..=FINAL_LEVEL {
            let expected = 0.5 + 0.2 * level as f32;
            for enemy in build_wave(level) {
                assert!((enemy.speed - expected).abs() < 1e-6);
                assert!(enemy.speed > 0.0);
            }
        }
    }

    #[test]
    fn test_wave_layout() {
        let wave = build_wave(1);
        assert_eq!(wave[0].pos.x, 100.0);
        assert_eq!(wave[0].pos.y, 50.0);
        // Second column of the first row
        assert_eq!(wave[1].pos.x, 160.0);
        // First column of the second row
        assert_eq!(wave[4].pos.y, 110.0);
        assert!(wave.iter().all(|e| e.origin_x == e.pos.x));
    }
}
