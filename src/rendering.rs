use std::io::{self, Write};
use log::info;
use crossterm::{
    Command,
    cursor::MoveTo,
    execute, queue,
    style::Print,
    terminal::{Clear, ClearType},
};

use crate::entities::Sprite;
use crate::types::Vector2D;

pub trait Canvas {
    fn draw_sprite(&mut self, sprite: Sprite, position: Vector2D, angle: f64);
}

// --- Headless frame capture ---
pub struct ScreenBuffer {
    pub rows: Vec<Vec<char>>,
}

impl ScreenBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        ScreenBuffer { rows: vec![vec![' '; width as usize]; height as usize] }
    }

    pub fn print_at(&mut self, x: u16, y: u16, text: &str) {
        let Some(row) = self.rows.get_mut(y as usize) else {
            return;
        };
        for (cell, c) in row.iter_mut().skip(x as usize).zip(text.chars()) {
            *cell = c;
        }
    }

    pub fn blank(&mut self) {
        for row in self.rows.iter_mut() {
            row.fill(' ');
        }
    }

    pub fn log_frame(&self, frame: u64) {
        info!("--- Frame {} ---", frame);
        for row in &self.rows {
            info!("|{}|", row.iter().collect::<String>());
        }
    }
}

// --- Where frames go: the live terminal or a headless buffer ---
pub enum OutputTarget {
    Terminal(io::Stdout),
    Headless(ScreenBuffer),
}

impl OutputTarget {
    pub fn is_headless(&self) -> bool {
        matches!(self, OutputTarget::Headless(_))
    }

    // Terminal mode switches (cursor, keyboard flags) take effect immediately.
    pub fn apply(&mut self, command: impl Command) -> io::Result<()> {
        match self {
            OutputTarget::Terminal(out) => execute!(out, command),
            OutputTarget::Headless(_) => Ok(()),
        }
    }

    pub fn print_at(&mut self, x: u16, y: u16, text: &str) -> io::Result<()> {
        match self {
            OutputTarget::Terminal(out) => queue!(out, MoveTo(x, y), Print(text)),
            OutputTarget::Headless(sb) => {
                sb.print_at(x, y, text);
                Ok(())
            }
        }
    }

    pub fn wipe(&mut self) -> io::Result<()> {
        match self {
            OutputTarget::Terminal(out) => queue!(out, Clear(ClearType::All)),
            OutputTarget::Headless(sb) => {
                sb.blank();
                Ok(())
            }
        }
    }

    pub fn present(&mut self, frame: u64) -> io::Result<()> {
        match self {
            OutputTarget::Terminal(out) => out.flush(),
            OutputTarget::Headless(sb) => {
                sb.log_frame(frame);
                Ok(())
            }
        }
    }
}

// --- GameGrid: the world squashed onto terminal cells ---
pub struct GameGrid {
    pub grid: Vec<Vec<char>>,
    pub width: u16,
    pub height: u16,
    world_width: f64,
    world_height: f64,
}

impl GameGrid {
    pub fn new(width: u16, height: u16, world_width: f64, world_height: f64) -> Self {
        GameGrid {
            grid: vec![vec![' '; width as usize]; height as usize],
            width,
            height,
            world_width,
            world_height,
        }
    }

    pub fn set_char(&mut self, x: u16, y: u16, c: char) {
        if y < self.height && x < self.width {
            self.grid[y as usize][x as usize] = c;
        }
    }

    pub fn clear(&mut self) {
        self.grid = vec![vec![' '; self.width as usize]; self.height as usize];
    }

    pub fn to_cell(&self, position: Vector2D) -> (u16, u16) {
        let max_col = self.width.saturating_sub(1) as f64;
        let max_row = self.height.saturating_sub(1) as f64;
        let col = (position.x / self.world_width * max_col).round().clamp(0.0, max_col);
        let row = ((self.world_height - position.y) / self.world_height * max_row)
            .round()
            .clamp(0.0, max_row);
        (col as u16, row as u16)
    }

    fn plot(&mut self, col: u16, row: u16, dx: i32, dy: i32, c: char) {
        let x = col as i32 + dx;
        let y = row as i32 + dy;
        if x >= 0 && y >= 0 {
            self.set_char(x as u16, y as u16, c);
        }
    }

    pub fn draw_to(&self, target: &mut OutputTarget) -> io::Result<()> {
        for (y, row) in self.grid.iter().enumerate() {
            let line: String = row.iter().collect();
            target.print_at(0, y as u16, &line)?;
        }
        Ok(())
    }
}

impl Canvas for GameGrid {
    fn draw_sprite(&mut self, sprite: Sprite, position: Vector2D, angle: f64) {
        let (col, row) = self.to_cell(position);
        match sprite {
            Sprite::Ship => self.plot(col, row, 0, 0, ship_glyph(angle)),
            Sprite::Laser => self.plot(col, row, 0, 0, '*'),
            Sprite::BigRock => {
                for (dx, dy) in [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)] {
                    self.plot(col, row, dx, dy, '@');
                }
            }
            Sprite::MediumRock => self.plot(col, row, 0, 0, 'O'),
            Sprite::SmallRock => self.plot(col, row, 0, 0, 'o'),
        }
    }
}

pub fn ship_glyph(angle: f64) -> char {
    let heading = (angle + 90.0).rem_euclid(360.0);
    let octant = ((heading + 22.5) / 45.0).floor() as u8 % 8;
    match octant {
        0 => '>',
        1 => '/',
        2 => '^',
        3 => '\u{005C}',
        4 => '<',
        5 => '/',
        6 => 'v',
        _ => '\u{005C}',
    }
}
