/// Startup settings. The grid size is derived once from these and never changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Size of the area the canvas is fitted into, in logical pixels.
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Proportion of the viewport the canvas takes up.
    pub fill_factor: f64,
    /// Edge length of one cell in canvas pixels.
    pub cell_size: u32,
    /// Target simulation ticks per second.
    pub frame_rate: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport_width: 1280.,
            viewport_height: 960.,
            fill_factor: 0.8,
            cell_size: 20,
            frame_rate: 24,
        }
    }
}

impl Config {
    /// Canvas width and height in pixels.
    pub fn canvas_size(&self) -> (u32, u32) {
        (
            (self.viewport_width * self.fill_factor).floor() as u32,
            (self.viewport_height * self.fill_factor).floor() as u32,
        )
    }

    /// Grid columns and rows. One cell is left over on each axis, as the sketch this
    /// came from always did.
    pub fn grid_size(&self) -> (usize, usize) {
        let (width, height) = self.canvas_size();
        let cell = self.cell_size.max(1);
        (
            (width / cell).saturating_sub(1) as usize,
            (height / cell).saturating_sub(1) as usize,
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::InvalidCellSize);
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::InvalidFrameRate);
        }
        if !(self.fill_factor > 0. && self.fill_factor <= 1.) {
            return Err(ConfigError::InvalidFillFactor(self.fill_factor));
        }
        let (columns, rows) = self.grid_size();
        if columns < 3 || rows < 3 {
            return Err(ConfigError::GridTooSmall { columns, rows });
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cell size must be non-zero")]
    InvalidCellSize,
    #[error("Frame rate must be non-zero")]
    InvalidFrameRate,
    #[error("Fill factor must be in (0, 1], got {0}")]
    InvalidFillFactor(f64),
    #[error("Grid must be at least 3x3 cells, got {columns}x{rows}")]
    GridTooSmall { columns: usize, rows: usize },
}
