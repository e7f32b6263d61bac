//! Player interactions with dynamic entities
//!
//! Each check takes the player's rectangle and only the collection it
//! needs, and reports what happened.

use glam::Vec2;

use super::rect::Rect;
use super::state::{Coin, Enemy, QuestionBlock};

/// True if the player touches any enemy
pub fn touches_enemy(player: &Rect, enemies: &[Enemy]) -> bool {
    enemies.iter().any(|e| player.intersects(&e.rect))
}

/// Remove every coin the player overlaps and return how many were taken.
pub fn collect_coins(player: &Rect, coins: &mut Vec<Coin>) -> u32 {
    let before = coins.len();
    coins.retain(|c| !player.intersects(&c.rect));
    (before - coins.len()) as u32
}

/// Trigger question blocks the player overlaps.
///
/// A block fires when the player's bottom edge is within `band` of the
/// block's top and the player is moving down. Each block fires at most
/// once; a spent block stays in place. Returns the index of each block
/// that fired along with its reward coin position.
pub fn hit_blocks(
    player: &Rect,
    vel_y: f32,
    band: f32,
    blocks: &mut [QuestionBlock],
) -> Vec<(usize, Vec2)> {
    let mut hits = Vec::new();
    if vel_y <= 0.0 {
        return hits;
    }

    for (index, block) in blocks.iter_mut().enumerate() {
        if block.spent || !player.intersects(&block.rect) {
            continue;
        }
        if player.bottom() < block.rect.top() + band {
            block.spent = true;
            hits.push((index, block.coin_spawn_point()));
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at(x: f32, y: f32) -> Rect {
        Rect::new(x, y, 30.0, 40.0)
    }

    #[test]
    fn test_enemy_contact() {
        let enemies = vec![Enemy::new(Vec2::new(90.0, 300.0))];
        assert!(touches_enemy(&player_at(100.0, 270.0), &enemies));
        assert!(!touches_enemy(&player_at(120.0, 270.0), &enemies));
        assert!(!touches_enemy(&player_at(100.0, 260.0), &enemies));
        assert!(!touches_enemy(&player_at(100.0, 270.0), &[]));
    }

    #[test]
    fn test_collects_all_overlapping_coins() {
        let mut coins = vec![
            Coin::new(Vec2::new(110.0, 280.0)),
            Coin::new(Vec2::new(125.0, 300.0)),
            Coin::new(Vec2::new(400.0, 300.0)),
        ];
        let taken = collect_coins(&player_at(100.0, 270.0), &mut coins);
        assert_eq!(taken, 2);
        assert_eq!(coins.len(), 1);
        assert_eq!(coins[0].rect.center(), Vec2::new(400.0, 300.0));

        // Already collected coins are gone for good
        assert_eq!(collect_coins(&player_at(100.0, 270.0), &mut coins), 0);
    }

    #[test]
    fn test_block_fires_when_falling_onto_its_top() {
        let mut blocks = vec![QuestionBlock::new(Vec2::new(150.0, 210.0))];
        // bottom = 215, within 10 of the top (210)
        let hits = hit_blocks(&player_at(150.0, 175.0), 2.0, 10.0, &mut blocks);
        assert_eq!(hits, vec![(0, Vec2::new(150.0, 180.0))]);
        assert!(blocks[0].spent);
    }

    #[test]
    fn test_block_ignores_rising_player() {
        let mut blocks = vec![QuestionBlock::new(Vec2::new(150.0, 210.0))];
        let hits = hit_blocks(&player_at(150.0, 175.0), -4.0, 10.0, &mut blocks);
        assert!(hits.is_empty());
        assert!(!blocks[0].spent);

        // Overlapping from below: bottom edge far past the top band
        let hits = hit_blocks(&player_at(150.0, 225.0), 2.0, 10.0, &mut blocks);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_spent_block_never_fires_again() {
        let mut blocks = vec![QuestionBlock::new(Vec2::new(150.0, 210.0))];
        assert_eq!(hit_blocks(&player_at(150.0, 175.0), 2.0, 10.0, &mut blocks).len(), 1);
        assert!(hit_blocks(&player_at(150.0, 176.0), 2.5, 10.0, &mut blocks).is_empty());
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_only_overlapped_blocks_fire() {
        // The second block is within the height band but not touched, so it
        // stays unspent even though the player overlaps the first one.
        let mut blocks = vec![
            QuestionBlock::new(Vec2::new(150.0, 210.0)),
            QuestionBlock::new(Vec2::new(300.0, 210.0)),
        ];
        let hits = hit_blocks(&player_at(150.0, 175.0), 2.0, 10.0, &mut blocks);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, 0);
        assert!(!blocks[1].spent);
    }
}
