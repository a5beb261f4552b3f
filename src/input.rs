use log::{debug, info};

use crate::life::LifeGrid;

/// A discrete input event, already decoded from the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    TogglePause,
    Clear,
    ToggleDebug,
    /// Pointer press at canvas pixel coordinates.
    Pointer { x: f32, y: f32 },
}

impl Action {
    /// Maps a typed character to its action: `p` or space pauses, `c` clears, `d` toggles debug.
    pub fn from_char(key: char) -> Option<Self> {
        match key {
            'p' | ' ' => Some(Action::TogglePause),
            'c' => Some(Action::Clear),
            'd' => Some(Action::ToggleDebug),
            _ => None,
        }
    }
}

/// Grid plus mode flags, owned by one controller and mutated only through
/// [`Simulation::tick`] and [`Simulation::handle`].
pub struct Simulation {
    grid: LifeGrid,
    cell_size: u32,
    canvas_width: u32,
    canvas_height: u32,
    paused: bool,
    debug: bool,
}

impl Simulation {
    pub fn new(grid: LifeGrid, cell_size: u32, canvas_size: (u32, u32)) -> Self {
        Self {
            grid,
            cell_size,
            canvas_width: canvas_size.0,
            canvas_height: canvas_size.1,
            paused: false,
            debug: false,
        }
    }

    pub fn grid(&self) -> &LifeGrid {
        &self.grid
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn canvas_size(&self) -> (u32, u32) {
        (self.canvas_width, self.canvas_height)
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Per-frame update: advances one generation unless paused.
    pub fn tick(&mut self) {
        if !self.paused {
            self.grid.iterate();
        }
    }

    /// Applies one input action. Returns `true` when something visible changed.
    pub fn handle(&mut self, action: Action) -> bool {
        match action {
            Action::TogglePause => {
                self.paused = !self.paused;
                debug!("paused: {}", self.paused);
                true
            }
            Action::Clear => {
                self.grid.clear();
                debug!("grid cleared");
                true
            }
            Action::ToggleDebug => {
                self.debug = !self.debug;
                debug!("debug mode: {}", self.debug);
                true
            }
            Action::Pointer { x, y } => self.pointer(x, y),
        }
    }

    fn pointer(&mut self, x: f32, y: f32) -> bool {
        let inside = x > 0.
            && x < self.canvas_width as f32
            && y > 0.
            && y < self.canvas_height as f32;
        if !inside {
            return false;
        }

        if !self.paused {
            self.grid.randomize();
            info!("grid reset");
            return true;
        }

        let (cell_x, cell_y) = self.cell_at(x, y);
        // The canvas is wider than the grid by the leftover margin, and border cells stay dead.
        if cell_x >= self.grid.columns()
            || cell_y >= self.grid.rows()
            || self.grid.is_border(cell_x, cell_y)
        {
            debug!("ignoring toggle of cell ({cell_x}, {cell_y})");
            return false;
        }
        match self.grid.toggle(cell_x, cell_y) {
            Ok(cell) => {
                debug!("cell ({cell_x}, {cell_y}) is now {cell:?}");
                true
            }
            Err(err) => {
                debug!("{err}");
                false
            }
        }
    }

    /// Converts canvas coordinates to a cell coordinate.
    pub fn cell_at(&self, x: f32, y: f32) -> (usize, usize) {
        let size = self.cell_size.max(1) as f32;
        ((x / size).floor() as usize, (y / size).floor() as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::life::{Cell, GridError};

    fn simulation() -> Simulation {
        let grid = LifeGrid::with_rng(10, 8, (7_u64, 11_u64).into()).unwrap();
        Simulation::new(grid, 20, (220, 180))
    }

    #[test]
    fn key_mapping() {
        assert_eq!(Action::from_char('p'), Some(Action::TogglePause));
        assert_eq!(Action::from_char(' '), Some(Action::TogglePause));
        assert_eq!(Action::from_char('c'), Some(Action::Clear));
        assert_eq!(Action::from_char('d'), Some(Action::ToggleDebug));
        assert_eq!(Action::from_char('x'), None);
    }

    #[test]
    fn flags_toggle() {
        let mut sim = simulation();
        assert!(!sim.is_paused() && !sim.is_debug());
        sim.handle(Action::TogglePause);
        sim.handle(Action::ToggleDebug);
        assert!(sim.is_paused() && sim.is_debug());
        sim.handle(Action::TogglePause);
        assert!(!sim.is_paused());
    }

    #[test]
    fn click_while_running_resets() {
        let mut sim = simulation();
        assert!(sim.handle(Action::Pointer { x: 50., y: 50. }));
        assert!(sim.grid().cells().iter().any(|c| c.is_alive()));
        assert_eq!(sim.grid().generation(), 0);
    }

    #[test]
    fn click_while_paused_toggles_one_cell() {
        let mut sim = simulation();
        sim.handle(Action::TogglePause);
        assert!(sim.handle(Action::Pointer { x: 45., y: 61. }));
        assert_eq!(sim.grid().get(2, 3).unwrap(), Cell::Alive);
        assert!(matches!(
            sim.grid().get(500, 500),
            Err(GridError::InvalidCoordinate { x: 500, y: 500, .. })
        ));
        assert_eq!(sim.grid().cells().iter().filter(|c| c.is_alive()).count(), 1);
    }

    #[test]
    fn clicks_outside_canvas_are_ignored() {
        let mut sim = simulation();
        for (x, y) in [(0., 50.), (50., 0.), (220., 50.), (50., 180.), (-3., 400.)] {
            assert!(!sim.handle(Action::Pointer { x, y }));
        }
        assert!(sim.grid().cells().iter().all(|c| !c.is_alive()));
    }

    #[test]
    fn border_and_margin_cells_cannot_be_toggled() {
        let mut sim = simulation();
        sim.handle(Action::TogglePause);
        // column 0, last column, and the margin column past the grid
        for x in [5., 185., 205.] {
            assert!(!sim.handle(Action::Pointer { x, y: 50. }));
        }
        // last row
        assert!(!sim.handle(Action::Pointer { x: 50., y: 145. }));
        assert!(sim.grid().cells().iter().all(|c| !c.is_alive()));
    }

    #[test]
    fn paused_tick_is_a_no_op() {
        let mut sim = simulation();
        sim.handle(Action::Pointer { x: 50., y: 50. });
        sim.handle(Action::TogglePause);
        let before = sim.grid().cells().to_vec();
        for _ in 0..5 {
            sim.tick();
        }
        assert_eq!(sim.grid().cells(), &before[..]);
        assert_eq!(sim.grid().generation(), 0);
    }

    #[test]
    fn clear_empties_grid() {
        let mut sim = simulation();
        sim.handle(Action::Pointer { x: 50., y: 50. });
        sim.handle(Action::Clear);
        sim.handle(Action::Clear);
        assert!(sim.grid().cells().iter().all(|c| !c.is_alive()));
    }
}
