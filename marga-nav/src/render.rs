//! Render boundary: scene views and terminal renderers.
//!
//! The session calls [`RenderSink::draw`] after every search step and
//! whenever the grid changes. The frame data is a borrowed
//! [`SceneView`]; renderers decide presentation and pacing.

use crate::config::RenderConfig;
use marga_map::{Cell, MazeGrid, Path};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use tracing::warn;

/// One frame of session state, borrowed for the duration of a draw call.
pub struct SceneView<'a> {
    pub grid: &'a MazeGrid,
    pub start: Cell,
    pub goal: Cell,
    /// Final path, once a search has succeeded
    pub path: Option<&'a Path>,
    /// Frontier cells of an in-progress search, sorted row-major
    pub frontier: Option<&'a [Cell]>,
    /// Visited cells of a search, sorted row-major
    pub visited: Option<&'a [Cell]>,
}

/// Drawing callback consumed by the session controller
pub trait RenderSink {
    fn draw(&mut self, view: &SceneView<'_>);
}

/// Discards every frame; headless runs and tests
pub struct NullRenderer;

impl RenderSink for NullRenderer {
    fn draw(&mut self, _view: &SceneView<'_>) {}
}

/// Character-cell renderer for terminals.
///
/// Glyphs: `S` start, `G` goal, `*` path, `+` frontier, `o` visited,
/// `#` wall, `.` open. The optional per-step delay provides fixed-rate
/// pacing between search steps; pacing is a render-boundary policy,
/// never an engine one.
pub struct AsciiRenderer<W: Write> {
    out: W,
    step_delay: Duration,
    clear_screen: bool,
}

impl AsciiRenderer<io::Stdout> {
    /// Render to stdout with the configured pacing
    pub fn stdout(config: &RenderConfig) -> Self {
        Self::new(
            io::stdout(),
            Duration::from_millis(config.step_delay_ms),
            config.clear_screen,
        )
    }
}

impl<W: Write> AsciiRenderer<W> {
    pub fn new(out: W, step_delay: Duration, clear_screen: bool) -> Self {
        Self {
            out,
            step_delay,
            clear_screen,
        }
    }

    fn glyph(view: &SceneView<'_>, cell: Cell) -> char {
        if cell == view.start {
            return 'S';
        }
        if cell == view.goal {
            return 'G';
        }
        if view.path.is_some_and(|p| p.contains(cell)) {
            return '*';
        }
        if view.grid.is_wall(cell).unwrap_or(false) {
            return '#';
        }
        if contains_sorted(view.frontier, cell) {
            return '+';
        }
        if contains_sorted(view.visited, cell) {
            return 'o';
        }
        '.'
    }

    fn render_frame(&mut self, view: &SceneView<'_>) -> io::Result<()> {
        if self.clear_screen {
            write!(self.out, "\x1b[2J\x1b[H")?;
        }
        let size = view.grid.size() as i32;
        for row in 0..size {
            let mut line = String::with_capacity(2 * size as usize);
            for col in 0..size {
                line.push(Self::glyph(view, Cell::new(row, col)));
                line.push(' ');
            }
            writeln!(self.out, "{}", line.trim_end())?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl<W: Write> RenderSink for AsciiRenderer<W> {
    fn draw(&mut self, view: &SceneView<'_>) {
        if let Err(e) = self.render_frame(view) {
            warn!("frame dropped: {}", e);
        }
        if !self.step_delay.is_zero() {
            thread::sleep(self.step_delay);
        }
    }
}

/// Membership test on the sorted slices carried by search snapshots
fn contains_sorted(cells: Option<&[Cell]>, cell: Cell) -> bool {
    cells.is_some_and(|cells| cells.binary_search(&cell).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use marga_map::{StepResult, SteppedAStar};

    fn render_to_string(view: &SceneView<'_>) -> String {
        let mut buffer = Vec::new();
        let mut renderer = AsciiRenderer::new(&mut buffer, Duration::ZERO, false);
        renderer.draw(view);
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_plain_grid_frame() {
        let mut grid = MazeGrid::open(3).unwrap();
        grid.toggle_wall(Cell::new(1, 1)).unwrap();
        let frame = render_to_string(&SceneView {
            grid: &grid,
            start: grid.start(),
            goal: grid.goal(),
            path: None,
            frontier: None,
            visited: None,
        });
        assert_eq!(frame, "S . .\n. # .\n. . G\n\n");
    }

    #[test]
    fn test_search_overlay_frame() {
        let grid = MazeGrid::open(3).unwrap();
        let mut search = SteppedAStar::init(&grid, grid.start(), grid.goal()).unwrap();
        let snapshot = match search.step() {
            StepResult::InProgress(snapshot) => snapshot,
            other => panic!("expected InProgress, got {:?}", other),
        };

        let frame = render_to_string(&SceneView {
            grid: &grid,
            start: grid.start(),
            goal: grid.goal(),
            path: None,
            frontier: Some(&snapshot.frontier),
            visited: Some(&snapshot.visited),
        });
        // Start stays 'S' even though it is in visited; its two open
        // neighbors are frontier cells
        assert_eq!(frame, "S + .\n+ . .\n. . G\n\n");
    }

    #[test]
    fn test_path_overlay_wins_over_visited() {
        let grid = MazeGrid::open(2).unwrap();
        let mut search = SteppedAStar::init(&grid, grid.start(), grid.goal()).unwrap();
        let path = match search.run_to_completion() {
            StepResult::Found(path) => path,
            other => panic!("expected Found, got {:?}", other),
        };
        let visited = search.visited_cells();

        let frame = render_to_string(&SceneView {
            grid: &grid,
            start: grid.start(),
            goal: grid.goal(),
            path: Some(&path),
            frontier: None,
            visited: Some(&visited),
        });
        // 2x2: path covers start, one interior cell, goal
        let stars = frame.matches('*').count();
        assert_eq!(stars, 1);
        assert!(frame.contains('S') && frame.contains('G'));
    }
}
