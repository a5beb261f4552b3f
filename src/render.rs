use crate::input::Simulation;
use crate::life::{Cell, LifeGrid};

pub const TITLE: &str = "Game of Life";
pub const PAUSE_HINT: &str = "PAUSED (press spacebar to unpause)";

const BACKGROUND: [u8; 4] = [0xff, 0xff, 0xff, 0xff];
const ALIVE: [u8; 4] = [0, 0, 0, 0xff];
const DEAD: [u8; 4] = [0xff, 0xff, 0xff, 0xff];
const STROKE: [u8; 4] = [200, 200, 200, 0xff];

/// Paints the grid into an RGBA `frame` that is `frame_width` pixels wide.
///
/// Each cell is a `cell_size` square at `(x * cell_size, y * cell_size)` with a
/// one pixel outline. Anything past the frame edge is clipped.
pub fn draw(grid: &LifeGrid, cell_size: u32, frame: &mut [u8], frame_width: u32) {
    let frame_width = frame_width as usize;
    if frame_width == 0 {
        return;
    }
    let frame_height = frame.len() / 4 / frame_width;
    let size = cell_size as usize;

    for pixel in frame.chunks_exact_mut(4) {
        pixel.copy_from_slice(&BACKGROUND);
    }

    for (x, y, cell) in grid.iter() {
        let fill = if cell == Cell::Alive { ALIVE } else { DEAD };
        let (left, top) = (x * size, y * size);
        for py in top..(top + size).min(frame_height) {
            for px in left..(left + size).min(frame_width) {
                let edge = px == left || py == top || px + 1 == left + size || py + 1 == top + size;
                let i = (py * frame_width + px) * 4;
                frame[i..i + 4].copy_from_slice(if edge { &STROKE } else { &fill });
            }
        }
    }
}

/// Text shown over the canvas: the pause banner and, in debug mode, the raw cursor position.
pub fn overlay(sim: &Simulation, cursor: Option<(f32, f32)>) -> String {
    let mut text = String::from(TITLE);
    if sim.is_debug() {
        let (x, y) = cursor.unwrap_or_default();
        text.push_str(&format!(" | x: {x:.0} y: {y:.0}"));
    }
    if sim.is_paused() {
        text.push_str(" | ");
        text.push_str(PAUSE_HINT);
    }
    text
}
