//! Game state and core simulation types
//!
//! `GameState` owns every entity collection. The host only ever reads it
//! between ticks, and changes it through the action methods below.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, Bounded};
use super::tick::TickInput;
use super::wave::build_wave;
use crate::consts::*;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the start action
    Ready,
    /// Active gameplay on `GameState::level`
    Playing,
    /// Wave cleared, waiting for the continue action
    LevelComplete,
    /// Final wave cleared
    AllLevelsComplete,
    /// Run ended
    GameOver,
}

impl GamePhase {
    /// Phases that end the tick loop until the host issues an action
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GamePhase::LevelComplete | GamePhase::AllLevelsComplete | GamePhase::GameOver
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Ready => "ready",
            GamePhase::Playing => "playing",
            GamePhase::LevelComplete => "level-complete",
            GamePhase::AllLevelsComplete => "all-levels-complete",
            GamePhase::GameOver => "game-over",
        }
    }
}

/// Things that happened during the last tick or action (cleared every tick)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    LevelStarted { level: u32 },
    ShotFired,
    EnemyDestroyed { at: Vec2 },
    PlayerHit { lives: i32 },
    /// An enemy reached the player's baseline
    Invaded,
    LevelComplete { level: u32 },
    AllLevelsComplete,
    GameOver,
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            speed: PLAYER_SPEED,
        }
    }

    /// Apply held direction inputs, keeping the ship fully on the canvas.
    /// Each axis moves independently, so diagonals are faster than straight lines.
    pub fn update(&mut self, input: &TickInput, width: f32, height: f32) {
        if input.left {
            self.pos.x = (self.pos.x - self.speed).max(0.0);
        }
        if input.right {
            self.pos.x = (self.pos.x + self.speed).min(width - self.size.x);
        }
        if input.up {
            self.pos.y = (self.pos.y - self.speed).max(0.0);
        }
        if input.down {
            self.pos.y = (self.pos.y + self.speed).min(height - self.size.y);
        }
    }

    /// Spawn point for a new bullet: centered on the nose of the ship
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0 - BULLET_WIDTH / 2.0, self.pos.y)
    }
}

impl Bounded for Player {
    fn bounds(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// A player shot travelling straight up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
}

impl Bullet {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::new(BULLET_WIDTH, BULLET_HEIGHT),
            speed: BULLET_SPEED,
        }
    }

    pub fn update(&mut self) {
        self.pos.y -= self.speed;
    }

    /// Past the top edge of the canvas
    pub fn is_offscreen(&self) -> bool {
        self.pos.y < 0.0
    }
}

impl Bounded for Bullet {
    fn bounds(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// A member of the invading wave
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal speed; the sign is the current direction
    pub speed: f32,
    /// Spawn column, kept for renderers that want formation offsets
    pub origin_x: f32,
}

impl Enemy {
    pub fn new(x: f32, y: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
            speed,
            origin_x: x,
        }
    }

    /// Horizontal step only; descent comes from the wave-wide bounce
    pub fn update(&mut self) {
        self.pos.x += self.speed;
    }

    pub fn touches_side(&self, width: f32) -> bool {
        self.pos.x <= 0.0 || self.pos.x + self.size.x >= width
    }

    /// Reverse direction and step down one row
    pub fn bounce(&mut self) {
        self.speed = -self.speed;
        self.pos.y += WAVE_DROP;
    }

    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }
}

impl Bounded for Enemy {
    fn bounds(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Expanding, fading burst left behind by a destroyed enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    /// Center point
    pub pos: Vec2,
    pub radius: f32,
    pub max_radius: f32,
    /// Opacity, 1.0 when spawned
    pub alpha: f32,
}

impl Explosion {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: EXPLOSION_START_RADIUS,
            max_radius: EXPLOSION_MAX_RADIUS,
            alpha: 1.0,
        }
    }

    pub fn update(&mut self) {
        self.radius += EXPLOSION_GROWTH;
        self.alpha -= EXPLOSION_FADE;
    }

    pub fn is_spent(&self) -> bool {
        self.alpha <= 0.0
    }
}

/// Borrowed view of any entity, in draw order
#[derive(Debug, Clone, Copy)]
pub enum EntityView<'a> {
    Player(&'a Player),
    Bullet(&'a Bullet),
    Enemy(&'a Enemy),
    Explosion(&'a Explosion),
}

impl EntityView<'_> {
    /// Hitbox of box-shaped entities; explosions have none
    pub fn bounds(&self) -> Option<Aabb> {
        match self {
            EntityView::Player(p) => Some(p.bounds()),
            EntityView::Bullet(b) => Some(b.bounds()),
            EntityView::Enemy(e) => Some(e.bounds()),
            EntityView::Explosion(_) => None,
        }
    }
}

/// Counters the HUD displays
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    pub level: u32,
    pub score: u64,
    pub lives: i32,
    pub enemies_remaining: u32,
    pub phase: GamePhase,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Playfield size in canvas pixels
    pub width: f32,
    pub height: f32,
    /// Current level (1-based)
    pub level: u32,
    pub score: u64,
    /// Signed so that several hits in one tick are all counted
    pub lives: i32,
    /// Mirrors `enemies.len()` while playing
    pub enemies_remaining: u32,
    pub phase: GamePhase,
    /// Simulation tick counter for the current level
    pub time_ticks: u64,
    /// Ticks until the next shot is allowed
    pub shot_cooldown: u32,
    pub player: Player,
    /// Active collections, in spawn order
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub explosions: Vec<Explosion>,
    /// Events from the last tick/action
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a state sitting on the title screen
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            level: 1,
            score: 0,
            lives: STARTING_LIVES,
            enemies_remaining: 0,
            phase: GamePhase::Ready,
            time_ticks: 0,
            shot_cooldown: 0,
            player: Player::new(width / 2.0, height - PLAYER_SPAWN_OFFSET),
            bullets: Vec::new(),
            enemies: Vec::new(),
            explosions: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Replace every entity and begin playing `level`.
    /// Score and lives carry over; use `reset_game` to clear them.
    pub fn start_level(&mut self, level: u32) {
        let level = level.clamp(1, FINAL_LEVEL);
        self.level = level;
        self.time_ticks = 0;
        self.shot_cooldown = 0;
        self.player = Player::new(self.width / 2.0, self.height - PLAYER_SPAWN_OFFSET);
        self.bullets.clear();
        self.explosions.clear();
        self.enemies = build_wave(level);
        self.enemies_remaining = self.enemies.len() as u32;
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::LevelStarted { level });

        log::info!(
            "Level {} started: {} enemies, score {}, lives {}",
            level,
            self.enemies_remaining,
            self.score,
            self.lives
        );
    }

    /// Restore the counters of a fresh run and leave terminal phases
    pub fn reset_game(&mut self) {
        self.level = 1;
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.phase = GamePhase::Ready;
    }

    /// Title screen → level 1
    pub fn start(&mut self) {
        if self.phase != GamePhase::Ready {
            log::debug!("Ignoring start in phase {:?}", self.phase);
            return;
        }
        self.reset_game();
        self.start_level(1);
    }

    /// Level complete → next level
    pub fn continue_to_next_level(&mut self) {
        if self.phase != GamePhase::LevelComplete {
            log::debug!("Ignoring continue in phase {:?}", self.phase);
            return;
        }
        self.start_level(self.level + 1);
    }

    /// Game over or victory → fresh run on level 1
    pub fn restart(&mut self) {
        if !matches!(
            self.phase,
            GamePhase::GameOver | GamePhase::AllLevelsComplete
        ) {
            log::debug!("Ignoring restart in phase {:?}", self.phase);
            return;
        }
        self.reset_game();
        self.start_level(1);
    }

    /// All entities in draw order: player, bullets, enemies, explosions
    pub fn entities(&self) -> impl Iterator<Item = EntityView<'_>> {
        std::iter::once(EntityView::Player(&self.player))
            .chain(self.bullets.iter().map(EntityView::Bullet))
            .chain(self.enemies.iter().map(EntityView::Enemy))
            .chain(self.explosions.iter().map(EntityView::Explosion))
    }

    pub fn hud(&self) -> Hud {
        Hud {
            level: self.level,
            score: self.score,
            lives: self.lives,
            enemies_remaining: self.enemies_remaining,
            phase: self.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_waits_on_title() {
        let state = GameState::new(800.0, 600.0);
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_start_builds_level_one() {
        let mut state = GameState::new(800.0, 600.0);
        state.start();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.level, 1);
        assert_eq!(state.enemies.len(), 16);
        assert_eq!(state.enemies_remaining, 16);
        assert_eq!(state.player.pos, Vec2::new(400.0, 550.0));
        assert!(state.events.contains(&GameEvent::LevelStarted { level: 1 }));
    }

    #[test]
    fn test_start_level_keeps_score_and_lives() {
        let mut state = GameState::new(800.0, 600.0);
        state.start();
        state.score = 1200;
        state.lives = 2;
        state.bullets.push(Bullet::new(Vec2::new(10.0, 10.0)));
        state.explosions.push(Explosion::new(Vec2::new(10.0, 10.0)));

        state.start_level(2);
        assert_eq!(state.level, 2);
        assert_eq!(state.score, 1200);
        assert_eq!(state.lives, 2);
        assert!(state.bullets.is_empty());
        assert!(state.explosions.is_empty());
        assert_eq!(state.enemies_remaining, 25);
    }

    #[test]
    fn test_actions_ignored_in_wrong_phase() {
        let mut state = GameState::new(800.0, 600.0);
        state.continue_to_next_level();
        assert_eq!(state.phase, GamePhase::Ready);
        state.restart();
        assert_eq!(state.phase, GamePhase::Ready);

        state.start();
        state.score = 500;
        state.start();
        assert_eq!(state.score, 500, "start while playing must not reset");
        state.continue_to_next_level();
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_continue_advances_level() {
        let mut state = GameState::new(800.0, 600.0);
        state.start();
        state.score = 1600;
        state.phase = GamePhase::LevelComplete;
        state.continue_to_next_level();
        assert_eq!(state.level, 2);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 1600);
    }

    #[test]
    fn test_restart_resets_counters() {
        let mut state = GameState::new(800.0, 600.0);
        state.start_level(3);
        state.score = 4000;
        state.lives = 0;
        state.phase = GamePhase::GameOver;

        state.restart();
        assert_eq!(state.level, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.enemies_remaining, 16);
    }

    #[test]
    fn test_restart_after_victory() {
        let mut state = GameState::new(800.0, 600.0);
        state.start_level(4);
        state.phase = GamePhase::AllLevelsComplete;
        state.restart();
        assert_eq!(state.level, 1);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_reset_game_clears_terminal_phase() {
        let mut state = GameState::new(800.0, 600.0);
        state.start_level(2);
        state.phase = GamePhase::GameOver;
        state.reset_game();
        assert!(!state.phase.is_terminal());
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_entities_in_draw_order() {
        let mut state = GameState::new(800.0, 600.0);
        state.start();
        state.bullets.push(Bullet::new(Vec2::new(10.0, 10.0)));
        state.explosions.push(Explosion::new(Vec2::new(10.0, 10.0)));

        let views: Vec<_> = state.entities().collect();
        assert_eq!(views.len(), 1 + 1 + 16 + 1);
        assert!(matches!(views[0], EntityView::Player(_)));
        assert!(matches!(views[1], EntityView::Bullet(_)));
        assert!(matches!(views[2], EntityView::Enemy(_)));
        assert!(matches!(views[18], EntityView::Explosion(_)));
        assert!(views[18].bounds().is_none());
    }

    #[test]
    fn test_explosion_fades_out() {
        let mut explosion = Explosion::new(Vec2::ZERO);
        let mut ticks = 0;
        while !explosion.is_spent() {
            explosion.update();
            ticks += 1;
            assert!(ticks <= 21, "explosion should fade within ~20 ticks");
        }
        assert!(ticks >= 20);
        assert!(explosion.radius > EXPLOSION_START_RADIUS);
    }

    #[test]
    fn test_enemy_bounce() {
        let mut enemy = Enemy::new(100.0, 50.0, 0.7);
        enemy.bounce();
        assert_eq!(enemy.speed, -0.7);
        assert_eq!(enemy.pos.y, 70.0);
        assert_eq!(enemy.origin_x, 100.0);
    }

    #[test]
    fn test_hud_serializes() {
        let mut state = GameState::new(800.0, 600.0);
        state.start();
        let json = serde_json::to_string(&state.hud()).unwrap();
        assert!(json.contains("\"enemies_remaining\":16"));
        assert!(json.contains("\"Playing\""));
    }
}
