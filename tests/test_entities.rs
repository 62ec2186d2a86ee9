use space_invaders::entities::*;
use space_invaders::spawner::build_formation;

#[test]
fn entity_clone_and_eq() {
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);
    assert_eq!(BulletOwner::Player, BulletOwner::Player);
    assert_ne!(BulletOwner::Player, BulletOwner::Enemy);

    let enemy = Enemy::new(10.0, 20.0, 1.0);
    assert_eq!(enemy.clone(), enemy);
}

#[test]
fn bullet_owner_fixes_direction() {
    assert_eq!(BulletOwner::Player.direction(), -1.0);
    assert_eq!(BulletOwner::Enemy.direction(), 1.0);
}

#[test]
fn player_spawn_box() {
    let p = Player::new(800.0, 600.0);
    assert_eq!(p.rect, Rect::new(375.0, 550.0, 50.0, 40.0));
    assert_eq!(p.speed, 5.0);
    assert_eq!(p.health, 3);
}

#[test]
fn power_up_is_centred() {
    let p = PowerUp::new(100.0, 200.0);
    assert_eq!(p.rect, Rect::new(90.0, 190.0, 20.0, 20.0));
    assert_eq!(p.speed, 2.0);
}

#[test]
fn formation_has_no_overlapping_enemies() {
    let enemies = build_formation(1.0);
    assert_eq!(enemies.len(), 50);
    for (i, a) in enemies.iter().enumerate() {
        for b in enemies.iter().skip(i + 1) {
            assert!(!a.rect.intersects(&b.rect));
        }
    }
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        player: Player::new(800.0, 600.0),
        enemies: Vec::new(),
        player_bullets: Vec::new(),
        enemy_bullets: Vec::new(),
        particles: Vec::new(),
        power_ups: Vec::new(),
        score: 0,
        level: 1,
        status: GameStatus::Playing,
        wave_speed: 1.0,
        enemy_fire_timer: 0,
        frame: 0,
        width: 800.0,
        height: 600.0,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.rect.x = 99.0;
    cloned.score = 999;
    cloned.enemies.push(Enemy::new(5.0, 5.0, 1.0));

    assert_eq!(original.player.rect.x, 375.0);
    assert_eq!(original.score, 0);
    assert!(original.enemies.is_empty());
}
