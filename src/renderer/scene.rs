//! Scene assembly: read-only game state → triangle list

use glam::Vec2;

use super::shapes;
use super::starfield::Starfield;
use super::vertex::{Vertex, colors};
use crate::Settings;
use crate::sim::{Bullet, Enemy, EntityView, Explosion, GameState, Player};

/// Radius of the glowing core drawn on ships
const CORE_RADIUS: f32 = 5.0;

/// Build every vertex for one frame, back to front
pub fn build_scene(
    state: &GameState,
    stars: &Starfield,
    settings: &Settings,
    time_ms: f64,
) -> Vec<Vertex> {
    let segments = settings.quality.circle_segments();
    let mut vertices = Vec::new();

    if settings.starfield {
        vertices.extend(stars.vertices(
            state.width,
            state.height,
            time_ms,
            settings.effective_star_scroll(),
        ));
    }

    for entity in state.entities() {
        match entity {
            EntityView::Player(player) => vertices.extend(player_ship(player, segments)),
            EntityView::Bullet(bullet) => vertices.extend(bullet_quad(bullet)),
            EntityView::Enemy(enemy) => vertices.extend(enemy_ship(enemy, segments)),
            EntityView::Explosion(explosion) if settings.explosions => {
                vertices.extend(explosion_burst(explosion, segments))
            }
            EntityView::Explosion(_) => {}
        }
    }

    vertices
}

/// Upward-pointing triangle with a blue core
fn player_ship(player: &Player, segments: u32) -> Vec<Vertex> {
    let (p, s) = (player.pos, player.size);
    let mut verts = shapes::triangle(
        Vec2::new(p.x + s.x / 2.0, p.y),
        Vec2::new(p.x + s.x, p.y + s.y),
        Vec2::new(p.x, p.y + s.y),
        colors::PLAYER,
    );
    verts.extend(shapes::circle(
        p + s / 2.0,
        CORE_RADIUS,
        colors::PLAYER_CORE,
        segments,
    ));
    verts
}

/// Downward-pointing triangle with a dark red core
fn enemy_ship(enemy: &Enemy, segments: u32) -> Vec<Vertex> {
    let (p, s) = (enemy.pos, enemy.size);
    let mut verts = shapes::triangle(
        p,
        Vec2::new(p.x + s.x, p.y),
        Vec2::new(p.x + s.x / 2.0, p.y + s.y),
        colors::ENEMY,
    );
    verts.extend(shapes::circle(
        enemy.center(),
        CORE_RADIUS,
        colors::ENEMY_CORE,
        segments,
    ));
    verts
}

fn bullet_quad(bullet: &Bullet) -> Vec<Vertex> {
    shapes::rect(bullet.pos, bullet.size, colors::BULLET)
}

fn explosion_burst(explosion: &Explosion, segments: u32) -> Vec<Vertex> {
    shapes::circle(
        explosion.pos,
        explosion.radius.min(explosion.max_radius),
        colors::explosion(explosion.alpha),
        segments,
    )
}
