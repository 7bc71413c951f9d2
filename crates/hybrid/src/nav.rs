//! Navigation benchmark (Fehnker & Ivančić, "Benchmarks for Hybrid Systems
//! Verification", HSCC 2004).
//!
//! Model
//! - A vehicle moves on a `width × height` grid of unit cells. Each cell is a
//!   mode named `"{prefix}{x}_{y}"`; cell `(x, y)` is entry `x + y·width` of
//!   the cell list.
//! - State is `(x, y, xvel, yvel)`. In a heading cell `i ∈ 0..=8` the velocity
//!   relaxes towards `v_d = (sin(iπ/4), cos(iπ/4))` via `v' = A (v − v_d)`.
//!   Target (`A`) and forbidden (`B`) cells freeze the state.
//! - Cells are joined to their grid neighbours by guarded transitions, emitted
//!   per cell in the order left, right, down, up.
//! - The initial region is the start point with any velocity in `[-1, 1]²`.
//!   Input noise is carried as metadata only.

use std::f64::consts::FRAC_PI_4;
use std::fmt;
use std::str::FromStr;

use nalgebra::{Matrix2, Vector2};
use thiserror::Error;

use crate::automaton::{AutomatonError, Derivative, Guard, HybridAutomaton, Invariant, ModeId};
use crate::hyperrect::{GeomError, HyperRectangle, State};

/// State variable names, in state-vector order.
pub const NAV_VARIABLES: [&str; 4] = ["x", "y", "xvel", "yvel"];
pub const DEFAULT_PREFIX: &str = "mode_";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NavError {
    #[error("noise should be nonnegative (got {0})")]
    NegativeNoise(f64),
    #[error("matrix A should have exactly four elements (got {0})")]
    MatrixSize(usize),
    #[error("invalid cell '{0}': expected 0-8, 'A' or 'B'")]
    BadCell(String),
    #[error("cell list is empty")]
    NoCells,
    #[error("width should be positive")]
    ZeroWidth,
    #[error("width ({width}) should evenly divide the number of cells ({cells})")]
    Ragged { width: usize, cells: usize },
    #[error(transparent)]
    Geom(#[from] GeomError),
    #[error(transparent)]
    Automaton(#[from] AutomatonError),
}

/// Content of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavCell {
    /// Desired heading `i` in eighths of a turn, clockwise from +y.
    Heading(u8),
    /// Target cell `A`.
    Target,
    /// Forbidden cell `B`.
    Forbidden,
}

impl FromStr for NavCell {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" | "a" => Ok(Self::Target),
            "B" | "b" => Ok(Self::Forbidden),
            _ => match s.parse::<u8>() {
                Ok(i) if i <= 8 => Ok(Self::Heading(i)),
                _ => Err(NavError::BadCell(s.to_string())),
            },
        }
    }
}

impl fmt::Display for NavCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heading(i) => write!(f, "{i}"),
            Self::Target => f.write_str("A"),
            Self::Forbidden => f.write_str("B"),
        }
    }
}

/// Parse a cell list such as `["2", "2", "A", "4", "B"]`.
pub fn parse_cells<S: AsRef<str>>(items: &[S]) -> Result<Vec<NavCell>, NavError> {
    items.iter().map(|s| s.as_ref().parse()).collect()
}

/// Benchmark parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct NavParams {
    /// Row-major `[a11, a12, a21, a22]`.
    pub matrix: Vec<f64>,
    pub prefix: String,
    pub cells: Vec<NavCell>,
    pub width: usize,
    pub start: (f64, f64),
    pub noise: f64,
}

impl NavParams {
    pub fn new(matrix: Vec<f64>, cells: Vec<NavCell>, width: usize, start: (f64, f64)) -> Self {
        Self {
            matrix,
            prefix: DEFAULT_PREFIX.to_string(),
            cells,
            width,
            start,
            noise: 0.0,
        }
    }

    /// Check parameters and return the velocity matrix `A`.
    fn validate(&self) -> Result<Matrix2<f64>, NavError> {
        if self.noise < 0.0 {
            return Err(NavError::NegativeNoise(self.noise));
        }
        if self.matrix.len() != 4 {
            return Err(NavError::MatrixSize(self.matrix.len()));
        }
        if self.width == 0 {
            return Err(NavError::ZeroWidth);
        }
        if self.cells.is_empty() {
            return Err(NavError::NoCells);
        }
        if self.cells.len() % self.width != 0 {
            return Err(NavError::Ragged {
                width: self.width,
                cells: self.cells.len(),
            });
        }
        Ok(Matrix2::from_row_slice(&self.matrix))
    }

    pub fn height(&self) -> usize {
        self.cells.len() / self.width.max(1)
    }
}

/// A generated benchmark instance.
#[derive(Debug)]
pub struct NavBenchmark {
    pub automaton: HybridAutomaton,
    /// `grid[y][x]` is the mode of cell `(x, y)`.
    pub grid: Vec<Vec<ModeId>>,
    pub start_mode: ModeId,
    pub init: HyperRectangle,
    /// Modes of `B` cells, in grid order.
    pub forbidden: Vec<ModeId>,
    /// Velocity-derivative disturbance bound: `[-noise, noise]`.
    pub noise: f64,
}

impl NavBenchmark {
    pub fn width(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }
    pub fn height(&self) -> usize {
        self.grid.len()
    }
    pub fn is_forbidden(&self, mode: ModeId) -> bool {
        self.forbidden.contains(&mode)
    }
}

/// Build the benchmark automaton, initial box and start mode.
pub fn build_nav(params: &NavParams) -> Result<NavBenchmark, NavError> {
    let a = params.validate()?;
    let width = params.width;
    let height = params.height();
    let (x0, y0) = params.start;
    let init = HyperRectangle::new([(x0, x0), (y0, y0), (-1.0, 1.0), (-1.0, 1.0)])?;

    let mut ha = HybridAutomaton::new();
    let mut grid = Vec::with_capacity(height);
    let mut forbidden = Vec::new();
    for y in 0..height {
        let mut row = Vec::with_capacity(width);
        for x in 0..width {
            let cell = params.cells[x + y * width];
            let mode = ha.new_mode(format!("{}{}_{}", params.prefix, x, y));
            mode.set_derivative(cell_flow(cell, a))
                .set_invariant(cell_invariant(x, y, width, height));
            if cell == NavCell::Forbidden {
                forbidden.push(mode.id());
            }
            row.push(mode.id());
        }
        grid.push(row);
    }

    for y in 0..height {
        for x in 0..width {
            let from = grid[y][x];
            let (xf, yf) = (x as f64, y as f64);
            if x != 0 {
                ha.new_transition(from, grid[y][x - 1], None)?
                    .set_guard(Guard::new(move |s| s[0] <= xf));
            }
            if x != width - 1 {
                ha.new_transition(from, grid[y][x + 1], None)?
                    .set_guard(Guard::new(move |s| s[0] >= xf + 1.0));
            }
            if y != 0 {
                ha.new_transition(from, grid[y - 1][x], None)?
                    .set_guard(Guard::new(move |s| s[1] <= yf));
            }
            if y != height - 1 {
                ha.new_transition(from, grid[y + 1][x], None)?
                    .set_guard(Guard::new(move |s| s[1] >= yf + 1.0));
            }
        }
    }

    let sx = clamp_cell(x0, width);
    let sy = clamp_cell(y0, height);
    let start_mode = grid[sy][sx];
    tracing::debug!(
        width,
        height,
        modes = ha.num_modes(),
        transitions = ha.transitions().len(),
        start = %start_mode,
        "nav benchmark built"
    );

    Ok(NavBenchmark {
        automaton: ha,
        grid,
        start_mode,
        init,
        forbidden,
        noise: params.noise,
    })
}

/// Cell index containing coordinate `v`, clamped to `[0, n)`.
fn clamp_cell(v: f64, n: usize) -> usize {
    let i = v.floor();
    if i <= 0.0 {
        0
    } else {
        (i as usize).min(n - 1)
    }
}

fn cell_flow(cell: NavCell, a: Matrix2<f64>) -> Derivative {
    match cell {
        NavCell::Heading(i) => {
            let th = f64::from(i) * FRAC_PI_4;
            let vd = Vector2::new(th.sin(), th.cos());
            Derivative::new(move |s| {
                let v = Vector2::new(s[2], s[3]);
                let dv = a * (v - vd);
                State::from_vec(vec![s[2], s[3], dv.x, dv.y])
            })
        }
        NavCell::Target | NavCell::Forbidden => Derivative::zero(),
    }
}

fn cell_invariant(x: usize, y: usize, width: usize, height: usize) -> Invariant {
    let (xf, yf) = (x as f64, y as f64);
    let left = x != 0;
    let right = x != width - 1;
    let bottom = y != 0;
    let top = y != height - 1;
    Invariant::new(move |s| {
        (!left || s[0] >= xf)
            && (!right || s[0] <= xf + 1.0)
            && (!bottom || s[1] >= yf)
            && (!top || s[1] <= yf + 1.0)
    })
}
