//! Globe Quiz demo driver
//!
//! Plays one session in the terminal: decodes an optional share link from
//! the command line, presents questions over stdin/stdout, services the
//! scheduled advance, reacts to engine events the way the UI collaborators
//! would, and prints a share link for replaying the same question order.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use serde_json::json;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use globe_quiz::{
    game::catalog,
    leaderboard::Leaderboard,
    share, AudioCue, GeoPoint, QuizSession, SessionConfig, SessionEvent, VERSION,
};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    info!("Globe Quiz Engine v{}", VERSION);

    let config = match std::env::args().nth(1) {
        Some(link) => share::decode(&link),
        None => SessionConfig::default(),
    };
    let bank = catalog::bank(config.mode);
    info!(mode = %config.mode, questions = bank.len(), "bank loaded");

    let mut session = QuizSession::new();
    session.start(config, &bank)?;
    service_events(&mut session);

    run_loop(&mut session)?;
    service_events(&mut session);

    // Final results, plus the merge the storage collaborator would persist.
    let mut board = Leaderboard::new();
    board.submit(session.score());

    println!();
    println!("=== Results ===");
    println!(
        "score: {} | correct: {}/{}",
        session.score(),
        session.correct_count(),
        session.answered_count()
    );
    let summary = json!({
        "score": session.score(),
        "answered": session.answered_count(),
        "correct": session.correct_count(),
        "mode": session.config().mode,
        "seed": session.effective_seed(),
        "best": board.best(),
    });
    println!("summary: {}", summary);

    let mut share_config = session.config().clone();
    share_config.seed = session.effective_seed().map(str::to_string);
    println!("replay this order: ?{}", share::encode(&share_config));

    Ok(())
}

/// Present questions and feed guesses until the run ends.
fn run_loop(session: &mut QuizSession) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut last_prompt = Instant::now();

    while session.is_running() {
        let question = match session.current_question() {
            Some(q) => q.clone(),
            None => break,
        };

        println!();
        println!("Where is: {}", question.name);
        if !question.hint.is_empty() {
            println!("  hint: {}", question.hint);
        }
        println!(
            "  time left: {}s | score: {} | correct: {}/{}",
            session.time_left_secs(),
            session.score(),
            session.correct_count(),
            session.answered_count()
        );
        print!("lat,lon (or 'skip' / 'quit') > ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        // Count down for the seconds spent thinking.
        for _ in 0..last_prompt.elapsed().as_secs() {
            session.tick();
        }
        last_prompt = Instant::now();
        if !session.is_running() {
            println!("time's up!");
            break;
        }

        let input = line.trim();
        if input == "quit" {
            session.pause();
            break;
        }
        let guess = if input == "skip" {
            None
        } else {
            match parse_guess(input) {
                Some(point) => Some(point),
                None => {
                    println!("could not read '{}', expected 'lat,lon'", input);
                    continue;
                }
            }
        };

        if let Some(result) = session.submit_guess(guess) {
            if result.within_threshold {
                println!(
                    "correct! {:.0} km off, +{} points",
                    result.distance_km, result.points_awarded
                );
            } else {
                println!(
                    "missed: {:.0} km away, +{} points",
                    result.distance_km, result.points_awarded
                );
            }
            service_events(session);
        }
    }
    Ok(())
}

/// React to engine events the way the excluded collaborators would.
fn service_events(session: &mut QuizSession) {
    for event in session.take_events() {
        match event {
            SessionEvent::Started { seed, question_count } => {
                info!(%seed, question_count, "run started");
            }
            SessionEvent::Cue { cue } => match cue {
                AudioCue::Correct => info!("audio: correct cue"),
                AudioCue::Incorrect => info!("audio: incorrect cue"),
            },
            SessionEvent::MusicToggled { playing } => {
                info!(playing, "audio: background music");
            }
            SessionEvent::FocusCamera { target } => {
                info!(
                    lat = target.lat_deg,
                    lon = target.lon_deg,
                    "camera: focusing on the correct location"
                );
            }
            SessionEvent::AdvanceScheduled { token, delay_ms } => {
                // The timer collaborator: wait out the pause, then advance.
                // The token keeps a stale timer from touching a newer run.
                thread::sleep(Duration::from_millis(delay_ms));
                session.advance(token);
            }
            SessionEvent::Ended { final_score, answered, correct } => {
                info!(final_score, answered, correct, "run ended");
            }
        }
    }
}

/// Parse a `lat,lon` (or `lat lon`) pair into a globe point.
fn parse_guess(input: &str) -> Option<GeoPoint> {
    let (lat, lon) = input
        .split_once(',')
        .or_else(|| input.split_once(' '))?;
    Some(GeoPoint::new(
        lat.trim().parse().ok()?,
        lon.trim().parse().ok()?,
    ))
}
