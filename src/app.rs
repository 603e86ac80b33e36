// screen flow: pick a mode, pick a difficulty, then play until the player quits,
// plus the frame loop tying input, simulation and drawing together

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::game::{GameDifficulty, GameMode, Match, MatchStatus, PlayerId, RoundSummary};
use crate::grid::Direction;
use crate::highscore::HighScoreStore;
use crate::input::{Key, KeyDecoder};
use crate::render;
use crate::terminal::TerminalSession;

#[derive(Debug)]
pub enum Screen {
    SelectingMode { selected: usize },
    SelectingDifficulty { mode: GameMode, selected: usize },
    Playing(Box<Match>),
}

pub struct App {
    screen: Screen,
    high_score: u32,
    store: HighScoreStore,
    quit: bool,
}

impl App {
    pub fn new(store: HighScoreStore) -> Self {
        let high_score = store.load();
        App {
            screen: Screen::SelectingMode { selected: 0 },
            high_score,
            store,
            quit: false,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Best score known so far, including the round being played.
    pub fn high_score(&self) -> u32 {
        match &self.screen {
            Screen::Playing(game) => game.high_score(),
            _ => self.high_score,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn handle_key(&mut self, key: Key) {
        if key == Key::Quit {
            info!("Quit requested");
            self.quit = true;
            return;
        }
        let high_score = self.high_score;
        match &mut self.screen {
            Screen::SelectingMode { selected } => match key {
                Key::Arrow(Direction::Up) => *selected = selected.saturating_sub(1),
                Key::Arrow(Direction::Down) => {
                    *selected = (*selected + 1).min(GameMode::ALL.len() - 1)
                }
                Key::Enter => {
                    let mode = GameMode::ALL[*selected];
                    self.screen = Screen::SelectingDifficulty { mode, selected: 0 };
                }
                _ => {}
            },
            Screen::SelectingDifficulty { mode, selected } => match key {
                Key::Arrow(Direction::Up) => *selected = selected.saturating_sub(1),
                Key::Arrow(Direction::Down) => {
                    *selected = (*selected + 1).min(GameDifficulty::ALL.len() - 1)
                }
                Key::Enter => {
                    let game = Match::new(GameDifficulty::ALL[*selected], *mode, high_score);
                    self.screen = Screen::Playing(Box::new(game));
                }
                _ => {}
            },
            Screen::Playing(game) => match key {
                Key::Arrow(direction) => game.steer(PlayerId::One, direction),
                Key::Char(_) => {
                    if let Some(direction) = key.wasd_direction() {
                        game.steer(PlayerId::Two, direction);
                    }
                }
                Key::Space => game.toggle_pause(),
                Key::Enter => {
                    if game.status() != MatchStatus::Running {
                        game.restart();
                    }
                }
                Key::Quit => {}
            },
        }
    }

    /// Advances the running match by one frame. Returns the summary of a round
    /// that ended during this frame.
    pub fn frame(&mut self, frame_time: Duration) -> Option<RoundSummary> {
        let Screen::Playing(game) = &mut self.screen else {
            return None;
        };
        let summary = game.advance(frame_time)?;
        self.high_score = game.high_score();
        Some(summary)
    }

    fn on_round_over(&mut self, session: &mut TerminalSession, summary: RoundSummary) {
        debug!(outcome = ?summary.outcome, "Game over sound");
        session.ring_bell();
        if summary.new_high_score {
            if let Err(e) = self.store.save(summary.best_score) {
                warn!("Failed to save high score: {}", e);
            }
        }
    }

    /// Main loop: runs until the player quits.
    pub fn play(&mut self, session: &mut TerminalSession, frame_duration: Duration) {
        let mut decoder = KeyDecoder::new();
        let mut last_frame = Instant::now();
        session.clear_screen();
        while !self.should_quit() {
            // receive input from pipe
            for byte in session.pending_input() {
                decoder.push(byte);
            }
            for key in decoder.drain() {
                let was_playing = matches!(self.screen, Screen::Playing(_));
                self.handle_key(key);
                if was_playing != matches!(self.screen, Screen::Playing(_)) {
                    session.clear_screen();
                }
            }
            if self.should_quit() || session.input_closed() {
                break;
            }

            let frame_time = last_frame.elapsed();
            last_frame = Instant::now();
            if let Some(summary) = self.frame(frame_time) {
                self.on_round_over(session, summary);
            }

            session.draw(&render::render(self));
            let spent = last_frame.elapsed();
            if spent < frame_duration {
                // wait for next frame
                std::thread::sleep(frame_duration - spent);
            }
        }
    }
}
