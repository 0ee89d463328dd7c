//! Neon Drift entry point
//!
//! Native builds run a scripted headless session against the command
//! recorder and log a run summary.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use neon_drift::consts::{FIXED_TIMESTEP, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
    use neon_drift::platform::{EventSource, InputEvent, Key, ScriptedEvents};
    use neon_drift::renderer::CommandRecorder;
    use neon_drift::sim::{PcgSource, RandomSource};
    use neon_drift::{Game, Settings};

    env_logger::init();
    log::info!("{WINDOW_TITLE} (native) starting...");
    log::info!("Window backend not linked; running headless {WINDOW_WIDTH}x{WINDOW_HEIGHT}");

    let settings = Settings::load();
    let rng = match settings.seed {
        Some(seed) => PcgSource::new(seed),
        None => PcgSource::from_entropy(),
    };
    log::info!(
        "Game initialized with seed: {} ({} particles)",
        rng.seed(),
        settings.max_particles()
    );

    let rng: Box<dyn RandomSource> = Box::new(rng);
    let mut game = Game::new(&settings, rng);
    let mut recorder = CommandRecorder::default();

    // Start, accelerate, then hold a left-hand drift
    let mut drive = ScriptedEvents::new();
    drive
        .idle(5)
        .push_frame(vec![InputEvent::KeyPressed(Key::Enter)])
        .push_frame(vec![InputEvent::KeyPressed(Key::W)])
        .idle(60)
        .push_frame(vec![
            InputEvent::KeyPressed(Key::A),
            InputEvent::KeyPressed(Key::Space),
        ])
        .idle(90)
        .push_frame(vec![
            InputEvent::KeyReleased(Key::Space),
            InputEvent::KeyReleased(Key::A),
        ])
        .idle(30)
        .push_frame(vec![InputEvent::KeyPressed(Key::Escape)])
        .idle(10)
        .push_frame(vec![InputEvent::KeyPressed(Key::Escape)])
        .idle(30);

    while drive.remaining() > 0 {
        let events = drive.poll();
        game.frame(FIXED_TIMESTEP, events, &mut recorder);
    }

    let world = game.world();
    log::info!(
        "Drive finished: speed {:.0}, heading {:.0}, {} live particles",
        world.vehicle.speed(),
        world.vehicle.heading,
        world.particles.active_count()
    );

    game.end_run();

    // Game over, back to the menu, quit from the menu
    let mut exit = ScriptedEvents::new();
    exit.idle(1)
        .push_frame(vec![InputEvent::KeyPressed(Key::Escape)])
        .push_frame(vec![InputEvent::KeyPressed(Key::Escape)]);
    let frames = game.run(&mut exit, &mut || FIXED_TIMESTEP, &mut recorder);
    log::info!("Exited after {frames} more frames ({} presented in total)", recorder.frames());

    let summary = RunSummary {
        score: &game.world().score,
        vehicle: &game.world().vehicle,
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => log::info!("Run summary:\n{json}"),
        Err(e) => log::warn!("Failed to serialize run summary: {e}"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(serde::Serialize)]
struct RunSummary<'a> {
    score: &'a neon_drift::sim::ScoreEngine,
    vehicle: &'a neon_drift::sim::Vehicle,
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser entry point; the library is driven by the embedding page
}
