//! Fixed timestep simulation tick
//!
//! One call advances the session by exactly one tick: spawn policy, scroll,
//! player kinematics and landing, coin pickup, pruning, game-over check.
//! All math is total; the only fallible step (config validation) already ran
//! at session construction.

use super::state::{GameEvent, Session, SessionPhase};

/// Input state for a single tick.
///
/// `left`/`right` are level-triggered (currently held); `jump` is
/// edge-triggered: the driver sets it on key-down and clears it after the
/// tick so holding the key does not re-fire.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Advance the session by one tick. Frozen while GameOver.
pub fn tick(session: &mut Session, input: &TickInput) {
    if session.phase == SessionPhase::GameOver {
        return;
    }
    session.time_ticks += 1;

    run_spawn_policy(session);
    scroll_entities(session);
    apply_kinematics(session, input);
    collect_coins(session);
    prune(session);
    check_game_over(session);
}

/// Spawn one platform (and maybe a coin) when the live set is thin or the
/// newest platform has risen past the trigger line. At most one platform
/// enters per tick; the live count is bounded below, never above.
fn run_spawn_policy(session: &mut Session) {
    let min = session.config.min_platforms;
    let trigger_y = session.config.screen_h - session.config.spawn_trigger_gap;
    let due = session.platforms.len() < min
        || session
            .platforms
            .last()
            .is_none_or(|p| p.rect.top() < trigger_y);
    if due {
        session.spawn_platform();
    }
}

/// Platforms and coins scroll upward only, at independent speeds.
fn scroll_entities(session: &mut Session) {
    let platform_speed = session.config.platform_speed;
    let coin_speed = session.config.coin_speed;
    for platform in &mut session.platforms {
        platform.rect.pos.y -= platform_speed;
    }
    for coin in &mut session.coins {
        coin.rect.pos.y -= coin_speed;
    }
}

fn apply_kinematics(session: &mut Session, input: &TickInput) {
    let cfg = session.config.clone();
    let player = &mut session.player;

    // Held direction keys displace directly; opposite keys cancel.
    let dx = match (input.left, input.right) {
        (true, false) => -cfg.move_speed,
        (false, true) => cfg.move_speed,
        _ => 0.0,
    };
    player.rect.pos.x = (player.rect.pos.x + dx).clamp(0.0, cfg.screen_w - cfg.player_w);

    // Gravity applies unconditionally; the fall clamp runs every tick,
    // right after the increment.
    player.vel = (player.vel + cfg.gravity).min(cfg.max_fall_speed);
    player.rect.pos.y += player.vel;

    // Landing: every platform overlapping the integrated position while the
    // player was falling triggers a snap; the last match in list order
    // determines the resting position. No nearest-platform tie-break.
    let falling = player.vel > 0.0;
    let integrated = player.rect;
    let mut landings: u64 = 0;
    let mut rest_y = None;
    for platform in &session.platforms {
        if falling && integrated.overlaps(&platform.rect) {
            rest_y = Some(platform.rect.top() - cfg.player_h);
            landings += 1;
        }
    }
    let player = &mut session.player;
    if let Some(y) = rest_y {
        player.rect.pos.y = y;
        player.vel = 0.0;
        player.grounded = true;
        session.score += landings;
    } else {
        player.grounded = false;
    }

    // Jump consumes the edge-triggered bit only while grounded.
    if input.jump && session.player.grounded {
        session.player.vel = cfg.jump_velocity;
        session.emit(GameEvent::Jump);
    }
}

fn collect_coins(session: &mut Session) {
    let player_rect = session.player.rect;
    let mut picked: u64 = 0;
    for coin in &mut session.coins {
        if !coin.collected && coin.rect.overlaps(&player_rect) {
            coin.collected = true;
            picked += 1;
        }
    }
    session.score += picked * session.config.coin_bonus;
    for _ in 0..picked {
        session.emit(GameEvent::CoinCollected);
    }
}

/// Drop entities fully above the top edge. Platforms only ever move up, so
/// the bottom edge is the only one checked.
fn prune(session: &mut Session) {
    session.platforms.retain(|p| p.rect.bottom() > 0.0);
    session.coins.retain(|c| !c.collected && c.rect.bottom() > 0.0);
}

fn check_game_over(session: &mut Session) {
    let player = &session.player.rect;
    if player.top() > session.config.screen_h || player.bottom() < 0.0 {
        session.phase = SessionPhase::GameOver;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClimberConfig;
    use crate::sim::rect::Rect;
    use crate::sim::state::{Coin, Platform, PLATFORM_PALETTE};

    fn new_session() -> Session {
        Session::new(1234, ClimberConfig::default()).unwrap()
    }

    /// Config whose spawned platforms enter far below the screen, so tests
    /// can let the player fall without a fresh platform catching it.
    fn far_spawn_config() -> ClimberConfig {
        ClimberConfig {
            spawn_margin: 400.0,
            p_coin: 0.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_gravity_clamp() {
        let mut session = new_session();
        session.platforms.clear();
        session.player.vel = 10.0;
        tick(&mut session, &TickInput::default());
        assert!(session.player.vel <= session.config.max_fall_speed);

        session.player.vel = 500.0;
        tick(&mut session, &TickInput::default());
        assert!(session.player.vel <= session.config.max_fall_speed);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut session = new_session();
        let x0 = session.player.rect.pos.x;
        let input = TickInput {
            left: true,
            right: true,
            jump: false,
        };
        tick(&mut session, &input);
        assert_eq!(session.player.rect.pos.x, x0);
    }

    #[test]
    fn test_horizontal_movement_and_clamp() {
        let mut session = new_session();
        let x0 = session.player.rect.pos.x;
        tick(&mut session, &TickInput { right: true, ..Default::default() });
        assert_eq!(session.player.rect.pos.x, x0 + session.config.move_speed);

        // Hold left long enough to hit the wall
        for _ in 0..200 {
            tick(&mut session, &TickInput { left: true, ..Default::default() });
            if session.phase == SessionPhase::GameOver {
                break;
            }
        }
        assert!(session.player.rect.left() >= 0.0);
    }

    #[test]
    fn test_landing_resets_velocity_and_scores() {
        let mut session = new_session();
        assert!(!session.player.grounded);
        // The seed platform sits directly under the player; one tick of
        // scroll plus gravity produces an overlap while falling.
        tick(&mut session, &TickInput::default());
        assert!(session.player.grounded);
        assert_eq!(session.player.vel, 0.0);
        assert_eq!(session.score, 1);
        // Snapped: player bottom rests on the platform top
        let platform_top = session
            .platforms
            .iter()
            .find(|p| (p.rect.top() - session.player.rect.bottom()).abs() < 1e-3);
        assert!(platform_top.is_some());
    }

    #[test]
    fn test_riding_a_platform_scores_each_tick() {
        let mut session = new_session();
        tick(&mut session, &TickInput::default());
        let after_landing = session.score;
        tick(&mut session, &TickInput::default());
        // Gravity makes velocity positive again, so the player re-lands on
        // the rising platform and scores each tick it rides.
        assert!(session.score > after_landing);
        assert!(session.player.grounded);
    }

    #[test]
    fn test_last_platform_wins_landing() {
        let mut session = new_session();
        session.platforms.clear();
        let y = session.player.rect.bottom();
        let x = session.player.rect.left();
        // Two near-coincident platforms both overlapping the fall path; the
        // later list entry decides the resting position.
        session.platforms.push(Platform {
            rect: Rect::new(x - 10.0, y - 2.0, 80.0, 20.0),
            color: PLATFORM_PALETTE[0],
        });
        session.platforms.push(Platform {
            rect: Rect::new(x - 10.0, y - 1.0, 80.0, 20.0),
            color: PLATFORM_PALETTE[1],
        });
        let second_top_before_scroll = y - 1.0;
        tick(&mut session, &TickInput::default());
        let expected = second_top_before_scroll - session.config.platform_speed
            - session.config.player_h;
        assert!((session.player.rect.pos.y - expected).abs() < 1e-3);
        // Both platforms triggered a snap: +1 each
        assert_eq!(session.score, 2);
    }

    #[test]
    fn test_jump_only_while_grounded() {
        // Airborne: the command is a no-op with no trigger.
        let mut session = Session::new(5, far_spawn_config()).unwrap();
        session.platforms.clear();
        let jump = TickInput { jump: true, ..Default::default() };
        tick(&mut session, &jump);
        assert!(!session.player.grounded);
        assert_eq!(session.player.vel, session.config.gravity);
        assert_eq!(session.score, 0);
        assert!(session.events().is_empty());

        // Grounded: jump launches upward and emits the trigger.
        let mut session = new_session();
        tick(&mut session, &TickInput::default());
        assert!(session.player.grounded);
        tick(&mut session, &jump);
        assert_eq!(session.player.vel, session.config.jump_velocity);
        assert!(session.drain_events().any(|e| e == GameEvent::Jump));
    }

    #[test]
    fn test_coin_pickup_scores_once() {
        let mut session = Session::new(5, far_spawn_config()).unwrap();
        session.platforms.clear();
        let player = session.player.rect;
        session.coins.push(Coin {
            rect: Rect::new(player.left(), player.top(), 20.0, 20.0),
            collected: false,
        });
        let score_before = session.score;
        tick(&mut session, &TickInput::default());
        assert_eq!(session.score, score_before + session.config.coin_bonus);
        assert!(session.drain_events().any(|e| e == GameEvent::CoinCollected));
        // Collected coins are pruned the same tick and never re-evaluated.
        assert!(session.coins.is_empty());
    }

    #[test]
    fn test_already_collected_coin_is_inert() {
        let mut session = Session::new(5, far_spawn_config()).unwrap();
        session.platforms.clear();
        let player = session.player.rect;
        session.coins.push(Coin {
            rect: Rect::new(player.left(), player.top(), 20.0, 20.0),
            collected: true,
        });
        tick(&mut session, &TickInput::default());
        assert_eq!(session.score, 0);
        assert!(session.events().is_empty());
        assert!(session.coins.is_empty());
    }

    #[test]
    fn test_offscreen_pruning_checks_top_edge_only() {
        let mut session = Session::new(5, far_spawn_config()).unwrap();
        session.platforms.clear();
        // bottom = 15 after creation: survives the pass
        session.platforms.push(Platform {
            rect: Rect::new(0.0, -5.0, 80.0, 20.0),
            color: PLATFORM_PALETTE[0],
        });
        // bottom = 0: pruned on the very next pass
        session.platforms.push(Platform {
            rect: Rect::new(100.0, -20.0, 80.0, 20.0),
            color: PLATFORM_PALETTE[1],
        });
        tick(&mut session, &TickInput::default());
        let above_top: Vec<f32> = session
            .platforms
            .iter()
            .filter(|p| p.rect.top() < 0.0)
            .map(|p| p.rect.top())
            .collect();
        assert_eq!(above_top.len(), 1);
        // Platforms below the bottom edge are never pruned.
        assert!(
            session
                .platforms
                .iter()
                .any(|p| p.rect.top() > session.config.screen_h)
        );
    }

    #[test]
    fn test_platforms_never_run_dry_while_active() {
        let mut session = new_session();
        for _ in 0..600 {
            tick(&mut session, &TickInput { jump: true, ..Default::default() });
            if session.phase != SessionPhase::Active {
                break;
            }
            assert!(!session.platforms.is_empty());
        }
    }

    #[test]
    fn test_score_is_monotonic() {
        let mut session = new_session();
        let mut last = session.score;
        for i in 0..400 {
            let input = TickInput {
                left: i % 3 == 0,
                right: i % 5 == 0,
                jump: i % 7 == 0,
            };
            tick(&mut session, &input);
            assert!(session.score >= last);
            last = session.score;
        }
    }

    #[test]
    fn test_game_over_freezes_updates() {
        let mut session = Session::new(5, far_spawn_config()).unwrap();
        session.platforms.clear();
        session.player.rect.pos.y = session.config.screen_h + 10.0;
        tick(&mut session, &TickInput::default());
        assert_eq!(session.phase, SessionPhase::GameOver);

        let ticks = session.time_ticks;
        let player_y = session.player.rect.pos.y;
        let platform_ys: Vec<f32> =
            session.platforms.iter().map(|p| p.rect.pos.y).collect();
        tick(&mut session, &TickInput { jump: true, ..Default::default() });
        assert_eq!(session.time_ticks, ticks);
        assert_eq!(session.player.rect.pos.y, player_y);
        let after: Vec<f32> = session.platforms.iter().map(|p| p.rect.pos.y).collect();
        assert_eq!(platform_ys, after);
    }

    #[test]
    fn test_full_session_scenario() {
        let mut session = Session::new(77, far_spawn_config()).unwrap();
        assert_eq!(session.phase, SessionPhase::Active);
        assert_eq!(session.platforms.len(), 1);
        assert_eq!(session.score, 0);

        // Falls onto the seed platform within a few ticks.
        let mut landed = false;
        for _ in 0..10 {
            tick(&mut session, &TickInput::default());
            if session.player.grounded {
                landed = true;
                break;
            }
        }
        assert!(landed);
        assert_eq!(session.player.vel, 0.0);
        assert!(session.score >= 1);

        // Remove every platform under the player; far-spawned replacements
        // cannot catch it, so it falls out the bottom.
        session.platforms.clear();
        let mut over = false;
        for _ in 0..200 {
            tick(&mut session, &TickInput::default());
            if session.phase == SessionPhase::GameOver {
                over = true;
                break;
            }
        }
        assert!(over);
        assert!(session.player.rect.top() > session.config.screen_h);

        // Restart restores the initial Active state.
        session.restart();
        assert_eq!(session.phase, SessionPhase::Active);
        assert_eq!(session.score, 0);
        assert_eq!(session.platforms.len(), 1);
        assert!(session.coins.is_empty());
    }

    #[test]
    fn test_rise_above_top_is_game_over() {
        let mut session = Session::new(5, far_spawn_config()).unwrap();
        session.platforms.clear();
        session.player.rect.pos.y = -(session.config.player_h + 20.0);
        session.player.vel = -20.0;
        tick(&mut session, &TickInput::default());
        assert_eq!(session.phase, SessionPhase::GameOver);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_velocity_never_exceeds_fall_clamp(start_vel in 10.0f32..1000.0) {
                let mut session = new_session();
                session.platforms.clear();
                session.player.vel = start_vel;
                tick(&mut session, &TickInput::default());
                prop_assert!(session.player.vel <= session.config.max_fall_speed);
            }

            #[test]
            fn prop_player_box_stays_on_screen_horizontally(
                moves in proptest::collection::vec((any::<bool>(), any::<bool>()), 1..120)
            ) {
                let mut session = new_session();
                for (left, right) in moves {
                    tick(&mut session, &TickInput { left, right, jump: false });
                    prop_assert!(session.player.rect.left() >= 0.0);
                    prop_assert!(session.player.rect.right() <= session.config.screen_w);
                    if session.phase != SessionPhase::Active {
                        break;
                    }
                }
            }
        }
    }
}
