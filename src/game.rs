use std::collections::HashMap;
use std::io;
use std::time::{Duration, Instant};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::{error, info};

use crate::constants::*;
use crate::input::Key;
use crate::rendering::{GameGrid, OutputTarget};
use crate::session::Session;
use crate::terminal_io::SimulatedInput;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostInput {
    Press(Key),
    Release(Key),
    Quit,
    Resize(u16, u16),
}

pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left => Some(Key::TurnLeft),
        KeyCode::Right => Some(Key::TurnRight),
        KeyCode::Up => Some(Key::ThrustForward),
        KeyCode::Down => Some(Key::ThrustBack),
        KeyCode::Char('f') | KeyCode::Char('F') => Some(Key::RapidFire),
        KeyCode::Char(' ') => Some(Key::SingleFire),
        KeyCode::Char('g') | KeyCode::Char('G') => Some(Key::SpreadFire),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Key::Restart),
        _ => None,
    }
}

pub fn translate_event(event: &Event) -> Option<HostInput> {
    match event {
        Event::Key(key_event) => match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc if key_event.kind != KeyEventKind::Release => {
                Some(HostInput::Quit)
            }
            code => {
                let key = map_key(code)?;
                match key_event.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => Some(HostInput::Press(key)),
                    KeyEventKind::Release => Some(HostInput::Release(key)),
                }
            }
        },
        Event::Resize(width, height) => Some(HostInput::Resize(*width, *height)),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug)]
struct KeyHold {
    seen: u64,
    repeating: bool, // auto-repeat has kicked in
}

pub struct Game {
    pub terminal_width: u16,
    pub terminal_height: u16,
    pub output: OutputTarget,
    simulated_input: Option<SimulatedInput>,
    max_frames: Option<u64>,
    reports_releases: bool,
    held_since: HashMap<Key, KeyHold>,
}

impl Game {
    pub fn new(
        terminal_width: u16,
        terminal_height: u16,
        output: OutputTarget,
        simulated_input: Option<SimulatedInput>,
        max_frames: Option<u64>,
        reports_releases: bool,
    ) -> Self {
        Game {
            terminal_width,
            terminal_height,
            output,
            simulated_input,
            max_frames,
            reports_releases,
            held_since: HashMap::new(),
        }
    }

    pub fn run(&mut self, session: &mut Session) -> io::Result<u64> {
        let mut grid = GameGrid::new(self.terminal_width, self.terminal_height, session.width, session.height);
        self.output.wipe()?;

        let mut running = true;
        let mut frame_count = 0;
        while running && self.max_frames.is_none_or(|max| frame_count < max) {
            let frame_start = Instant::now();

            for input in self.collect_input(frame_count)? {
                match input {
                    HostInput::Press(key) => {
                        self.held_since
                            .entry(key)
                            .and_modify(|hold| {
                                hold.seen = frame_count;
                                hold.repeating = true;
                            })
                            .or_insert(KeyHold { seen: frame_count, repeating: false });
                        session.key_down(key);
                    }
                    HostInput::Release(key) => {
                        self.held_since.remove(&key);
                        session.key_up(key);
                    }
                    HostInput::Quit => {
                        info!("Quit requested at frame {}", frame_count);
                        running = false;
                    }
                    HostInput::Resize(width, height) => {
                        self.terminal_width = width;
                        self.terminal_height = height;
                        grid = GameGrid::new(width, height, session.width, session.height);
                        info!("Terminal resized to {}x{}", width, height);
                    }
                }
            }
            if !running {
                break;
            }
            self.expire_stale_keys(session, frame_count);

            let report = session.update();
            if report.ship_destroyed {
                info!("Game over at tick {}", session.tick);
            }

            grid.clear();
            session.draw(&mut grid);
            self.render(&grid, session, frame_count)?;

            frame_count += 1;
            if !self.output.is_headless() {
                if let Some(rest) = FRAME_DURATION.checked_sub(frame_start.elapsed()) {
                    std::thread::sleep(rest);
                }
            }
        }

        info!("Host loop ended after {} frames", frame_count);
        Ok(frame_count)
    }

    fn collect_input(&mut self, frame_count: u64) -> io::Result<Vec<HostInput>> {
        let mut inputs = Vec::new();
        if let Some(sim_input) = &mut self.simulated_input {
            while sim_input.poll(frame_count)? {
                if let Some(input) = translate_event(&sim_input.read()?) {
                    inputs.push(input);
                }
            }
        } else {
            while event::poll(Duration::ZERO).map_err(|e| { error!("Failed to poll event: {}", e); e })? {
                let event = event::read().map_err(|e| { error!("Failed to read event: {}", e); e })?;
                if let Some(input) = translate_event(&event) {
                    inputs.push(input);
                }
            }
        }
        Ok(inputs)
    }

    // Without release reporting, a key counts as held only while the
    // terminal keeps auto-repeating it. Fire and restart keys get the longer
    // window until the first repeat arrives, so the initial repeat delay
    // does not read as a second press.
    fn expire_stale_keys(&mut self, session: &mut Session, frame_count: u64) {
        if self.reports_releases {
            return;
        }
        let stale: Vec<Key> = self
            .held_since
            .iter()
            .filter(|(key, hold)| frame_count.saturating_sub(hold.seen) >= hold_window(**key, hold))
            .map(|(key, _)| *key)
            .collect();
        for key in stale {
            self.held_since.remove(&key);
            session.key_up(key);
        }
    }

    fn render(&mut self, grid: &GameGrid, session: &Session, frame: u64) -> io::Result<()> {
        grid.draw_to(&mut self.output).map_err(|e| { error!("Failed to draw game grid: {}", e); e })?;

        if session.is_game_over() {
            let message = "GAME OVER - press R to restart, Q to quit";
            let x = (self.terminal_width / 2).saturating_sub(message.len() as u16 / 2);
            self.output.print_at(x, self.terminal_height / 2, message)?;
        }

        self.output.present(frame).map_err(|e| { error!("Failed to flush frame {}: {}", frame, e); e })?;
        Ok(())
    }
}

fn hold_window(key: Key, hold: &KeyHold) -> u64 {
    if hold.repeating || !key.is_edge_triggered() {
        KEY_HOLD_TICKS
    } else {
        KEY_FIRST_REPEAT_TICKS
    }
}
