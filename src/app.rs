//! Application state: screens, navigation, and the game command queue.
//!
//! The app is driven by the UI loop through three calls: [`App::handle_key`]
//! for key presses, [`App::handle_key_release`], and [`App::tick`] once per
//! frame. It never touches the terminal itself; renderers read it through
//! [`App::view`] and re-render when [`App::revision`] moves.
//!
//! While a card is showing the game screen holds the sensor subscription.
//! Tilt gestures and direct key presses are turned into [`GameCommand`]s and
//! applied in arrival order from a single queue.

use std::collections::VecDeque;

use crossterm::event::{KeyCode, KeyEvent};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::core::{categories, DeckRng, GameSession, SessionSnapshot, TiltRecognizer};
use crate::input::{handle_key_event, should_quit, InputAction, KeyTilt};
use crate::sensor::{SensorHub, SensorSubscription};
use crate::types::{Category, GameCommand, SENSOR_INTERVAL_MS};

/// The game screen: one session plus the gesture pipeline feeding it.
pub struct GameScreen {
    session: GameSession<DeckRng>,
    recognizer: TiltRecognizer,
    subscription: Option<SensorSubscription>,
    commands: VecDeque<GameCommand>,
    /// Picker entry to return to.
    picker_index: usize,
}

impl GameScreen {
    pub fn session(&self) -> &GameSession<DeckRng> {
        &self.session
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn pending_commands(&self) -> usize {
        self.commands.len()
    }
}

pub enum Screen {
    Categories { selected: usize },
    Game(Box<GameScreen>),
}

/// What the renderer should draw.
#[derive(Debug, Clone, Copy)]
pub enum ScreenView {
    Categories {
        categories: &'static [Category],
        selected: usize,
    },
    Game(SessionSnapshot),
}

pub struct App {
    screen: Screen,
    hub: SensorHub,
    key_tilt: KeyTilt,
    seed: Option<u32>,
    games_opened: u32,
    revision: u64,
    quit: bool,
}

impl App {
    pub fn new(config: &AppConfig, hub: SensorHub) -> Self {
        Self {
            screen: Screen::Categories { selected: 0 },
            hub,
            key_tilt: KeyTilt::with_config(config.key_tilt_hold_ms, SENSOR_INTERVAL_MS),
            seed: config.seed,
            games_opened: 0,
            revision: 0,
            quit: false,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn hub(&self) -> &SensorHub {
        &self.hub
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Monotonic counter bumped on every visible change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn game(&self) -> Option<&GameScreen> {
        match &self.screen {
            Screen::Game(game) => Some(game),
            Screen::Categories { .. } => None,
        }
    }

    pub fn view(&self) -> ScreenView {
        match &self.screen {
            Screen::Categories { selected } => ScreenView::Categories {
                categories: categories(),
                selected: *selected,
            },
            Screen::Game(game) => ScreenView::Game(game.session.snapshot()),
        }
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Handle a key press (or auto-repeat).
    pub fn handle_key(&mut self, key: KeyEvent) {
        if should_quit(key) {
            info!("quit requested");
            self.quit = true;
            return;
        }

        match &mut self.screen {
            Screen::Categories { selected } => {
                let count = categories().len();
                let before = *selected;
                match handle_key_event(key) {
                    Some(InputAction::Up) => *selected = selected.saturating_sub(1),
                    Some(InputAction::Down) => {
                        *selected = (*selected + 1).min(count.saturating_sub(1))
                    }
                    Some(InputAction::Confirm) => {
                        let index = *selected;
                        if let Some(category) = categories().get(index) {
                            self.open_game(category.id, index);
                        }
                        return;
                    }
                    _ => {}
                }
                if *selected != before {
                    self.touch();
                }
            }
            Screen::Game(game) => {
                let playing = game.session.is_playing();
                if playing && self.key_tilt.handle_key_press(key.code) {
                    return;
                }

                let command = match handle_key_event(key) {
                    Some(InputAction::Correct) => Some(GameCommand::MarkCorrect),
                    Some(InputAction::Skip) => Some(GameCommand::MarkSkip),
                    Some(InputAction::PlayAgain) => Some(GameCommand::PlayAgain),
                    Some(InputAction::Back) => Some(GameCommand::Exit),
                    Some(InputAction::Confirm) if playing => Some(GameCommand::MarkCorrect),
                    Some(InputAction::Confirm) => Some(GameCommand::PlayAgain),
                    _ => None,
                };
                if let Some(command) = command {
                    game.commands.push_back(command);
                    self.drain_commands();
                }
            }
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        self.key_tilt.handle_key_release(code);
    }

    /// Advance time: run the keyboard tilt simulator, collect sensor samples,
    /// and apply queued commands.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if !matches!(self.screen, Screen::Game(_)) {
            return;
        }

        for sample in self.key_tilt.update(elapsed_ms) {
            self.hub.publish(sample);
        }

        if let Screen::Game(game) = &mut self.screen {
            if let Some(subscription) = game.subscription.as_mut() {
                while let Some(sample) = subscription.try_recv() {
                    if let Some(event) = game.recognizer.feed(sample) {
                        debug!(event = event.as_str(), z = sample.z, "tilt");
                        game.commands.push_back(GameCommand::from(event));
                    }
                }
            }
        }

        self.drain_commands();
    }

    /// Push a command as if it came from a gesture or a tap.
    pub fn enqueue(&mut self, command: GameCommand) {
        if let Screen::Game(game) = &mut self.screen {
            game.commands.push_back(command);
            self.drain_commands();
        }
    }

    fn open_game(&mut self, category_id: &str, picker_index: usize) {
        // Each opening gets its own stream so a fixed seed still varies decks.
        let opening = self.games_opened;
        self.games_opened = self.games_opened.wrapping_add(1);
        let rng = DeckRng::from_seed(self.seed.map(|s| s.wrapping_add(opening)));

        let mut session = GameSession::new(rng);
        session.start(category_id);
        info!(
            category = category_id,
            cards = session.deck().len(),
            "game screen opened"
        );

        self.key_tilt.level();
        self.screen = Screen::Game(Box::new(GameScreen {
            session,
            recognizer: TiltRecognizer::default(),
            subscription: None,
            commands: VecDeque::new(),
            picker_index,
        }));
        self.sync_subscription();
        self.touch();
    }

    fn close_game(&mut self) {
        let selected = match &self.screen {
            Screen::Game(game) => game.picker_index,
            Screen::Categories { .. } => return,
        };
        info!("game screen closed");
        self.key_tilt.level();
        // Dropping the game screen drops its subscription.
        self.screen = Screen::Categories { selected };
        self.touch();
    }

    fn drain_commands(&mut self) {
        loop {
            let Screen::Game(game) = &mut self.screen else {
                return;
            };
            let Some(command) = game.commands.pop_front() else {
                break;
            };

            if command == GameCommand::Exit {
                self.close_game();
                return;
            }

            if game.session.apply(command) {
                debug!(
                    command = command.as_str(),
                    position = game.session.position(),
                    score = game.session.score(),
                    "command applied"
                );
                self.sync_subscription();
                self.touch();
            }
        }
    }

    /// Hold the sensor subscription exactly while a card is showing.
    fn sync_subscription(&mut self) {
        let Screen::Game(game) = &mut self.screen else {
            return;
        };
        let playing = game.session.is_playing();
        match (playing, game.subscription.is_some()) {
            (true, false) => game.subscription = Some(self.hub.subscribe()),
            (false, true) => {
                game.subscription = None;
                self.key_tilt.level();
            }
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default(), SensorHub::default())
    }
}
