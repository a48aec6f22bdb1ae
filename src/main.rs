use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use skydash::audio::AudioEngine;
use skydash::build_info;
use skydash::game_logic::{advance_session, flap, start_session};
use skydash::input::{map_key, GameCommand};
use skydash::save_manager::HighScoreStore;
use skydash::ui;
use skydash::{GameEvent, GamePhase, GameSession, FRAME_INTERVAL_MS};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "skydash {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                return Ok(());
            }
            "--help" | "-h" => {
                println!("Skydash - Terminal Flappy-Bird Arcade Game\n");
                println!("Usage: skydash\n");
                println!("Keys:");
                println!("  Space/Up/Enter  Flap (and start a run)");
                println!("  M               Toggle sound");
                println!("  Q/Esc           Quit");
                return Ok(());
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'skydash --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let store = HighScoreStore::new()?;
    let mut persisted_best = store.load();
    let mut session = GameSession::new(persisted_best);
    let mut audio = AudioEngine::new();
    let mut rng = rand::thread_rng();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let clock = Instant::now();
    let frame_duration = Duration::from_millis(FRAME_INTERVAL_MS);

    'game: loop {
        let frame_start = Instant::now();
        let now_ms = clock.elapsed().as_millis() as u64;
        let mut events: Vec<GameEvent> = Vec::new();

        // Drain pending input before the tick.
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                match map_key(key.code) {
                    Some(GameCommand::Quit) => break 'game,
                    Some(GameCommand::ToggleMute) => {
                        let muted = audio.toggle_mute();
                        if !muted && session.is_running() {
                            audio.start_music();
                        }
                    }
                    Some(GameCommand::Primary) => match session.phase {
                        GamePhase::Running => flap(&mut session, &mut events),
                        GamePhase::Idle => start_session(&mut session, &mut events),
                        GamePhase::GameOver { .. } => {
                            // Restart only once the game-over view is up.
                            if session.game_over_view_ready(now_ms) {
                                start_session(&mut session, &mut events);
                            }
                        }
                    },
                    None => {}
                }
            }
        }

        let was_running = session.is_running();
        events.extend(advance_session(&mut session, now_ms, &mut rng));

        for game_event in events {
            audio.handle_event(game_event);
        }

        // Persist the high score once per run, and only when beaten. A
        // failed write is ignored; the in-memory best still stands.
        if was_running && !session.is_running() && session.high_score > persisted_best {
            let _ = store.save(session.high_score);
            persisted_best = session.high_score;
        }

        terminal.draw(|frame| {
            ui::draw(
                frame,
                &session,
                audio.init_error(),
                audio.is_muted(),
                now_ms,
            )
        })?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            std::thread::sleep(frame_duration - elapsed);
        }
    }

    // Terminal teardown
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
