//! Skyhop headless demo driver
//!
//! Runs the climber simulation at the fixed tick rate with a simple
//! autopilot, logging score and phase transitions. A renderer would sit
//! where the log statements are, reading the session between ticks.

use std::time::{Duration, Instant};

use skyhop::ClimberConfig;
use skyhop::audio::AudioManager;
use skyhop::consts::{MAX_SUBSTEPS, SIM_DT};
use skyhop::sim::{Session, SessionPhase, TickInput, tick};

/// Demo length in ticks (30 seconds at 60 Hz)
const DEMO_TICKS: u64 = 30 * 60;

/// Pick the input the autopilot would press this tick: drift toward the
/// platform it could land on next, jump whenever grounded.
fn autopilot(session: &Session) -> TickInput {
    let player = &session.player.rect;
    let target = session
        .platforms
        .iter()
        .filter(|p| p.rect.top() >= player.bottom())
        .min_by(|a, b| {
            a.rect
                .top()
                .partial_cmp(&b.rect.top())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let mut input = TickInput {
        jump: session.player.grounded,
        ..Default::default()
    };
    if let Some(platform) = target {
        let player_cx = (player.left() + player.right()) / 2.0;
        let platform_cx = (platform.rect.left() + platform.rect.right()) / 2.0;
        if platform_cx < player_cx - 2.0 {
            input.left = true;
        } else if platform_cx > player_cx + 2.0 {
            input.right = true;
        }
    }
    input
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);

    let mut session = match Session::new(seed, ClimberConfig::default()) {
        Ok(session) => session,
        Err(err) => {
            log::error!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };
    let mut audio = AudioManager::disabled();
    log::info!("demo session started (seed {seed})");

    let tick_duration = Duration::from_secs_f32(SIM_DT);
    let mut last = Instant::now();
    let mut accumulator = 0.0f32;
    let mut runs = 1u32;
    let mut total_ticks = 0u64;

    while total_ticks < DEMO_TICKS {
        accumulator += last.elapsed().as_secs_f32();
        last = Instant::now();

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = autopilot(&session);
            tick(&mut session, &input);
            accumulator -= SIM_DT;
            substeps += 1;
            total_ticks += 1;

            let events: Vec<_> = session.drain_events().collect();
            for event in events {
                audio.handle_event(event);
            }

            if session.phase == SessionPhase::GameOver {
                log::info!(
                    "run {runs} over at tick {}: score {}",
                    session.time_ticks,
                    session.score
                );
                session.restart();
                runs += 1;
            }
        }

        std::thread::sleep(tick_duration.saturating_sub(last.elapsed()));
    }

    log::info!(
        "demo finished: {runs} run(s), final score {}, {} live platforms",
        session.score,
        session.platforms.len()
    );
}
