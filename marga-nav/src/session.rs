//! Interactive session controller.
//!
//! A [`Session`] owns one [`MazeGrid`] and the last computed path, and
//! turns the discrete command stream into grid edits and stepped
//! searches. While a search runs, the controller forwards every engine
//! snapshot to the render sink; edits cannot interleave with a running
//! search because the step loop holds the controller until a terminal
//! result.

use crate::config::GridConfig;
use crate::error::Result;
use crate::input::{Command, InputSource};
use crate::render::{RenderSink, SceneView};
use marga_map::{Cell, MazeGrid, Path, StepResult, SteppedAStar};
use tracing::{debug, info, warn};

/// Session controller: one grid, one cached path, one command loop.
pub struct Session {
    grid: MazeGrid,
    /// Last successful search result; cleared by any grid mutation
    path: Option<Path>,
}

impl Session {
    /// Create a session around an existing grid
    pub fn new(grid: MazeGrid) -> Self {
        Self { grid, path: None }
    }

    /// Generate the session grid from configuration
    pub fn from_config(config: &GridConfig) -> Result<Self> {
        let grid = MazeGrid::generate(config.size, config.wall_probability, config.seed)?;
        Ok(Self::new(grid))
    }

    /// The session grid
    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    /// The cached path from the last successful search
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    /// Move the search start; invalidates the cached path
    pub fn set_start(&mut self, cell: Cell) -> Result<()> {
        self.grid.set_start(cell)?;
        self.path = None;
        Ok(())
    }

    /// Move the search goal; invalidates the cached path
    pub fn set_goal(&mut self, cell: Cell) -> Result<()> {
        self.grid.set_goal(cell)?;
        self.path = None;
        Ok(())
    }

    /// Flip a wall; invalidates the cached path (topology changed)
    pub fn toggle_wall(&mut self, cell: Cell) -> Result<()> {
        self.grid.toggle_wall(cell)?;
        self.path = None;
        Ok(())
    }

    /// Run a stepped search on the current grid, drawing after every
    /// expansion and once more with the terminal result.
    pub fn run_search(&mut self, sink: &mut dyn RenderSink) -> Result<()> {
        let start = self.grid.start();
        let goal = self.grid.goal();
        info!("search: {} -> {}", start, goal);

        let mut engine = SteppedAStar::init(&self.grid, start, goal)?;
        loop {
            match engine.step() {
                StepResult::InProgress(snapshot) => {
                    sink.draw(&SceneView {
                        grid: &self.grid,
                        start,
                        goal,
                        path: None,
                        frontier: Some(&snapshot.frontier),
                        visited: Some(&snapshot.visited),
                    });
                }
                StepResult::Found(path) => {
                    info!(
                        "path found: {} cells ({} moves), visited {}",
                        path.len_cells(),
                        path.moves(),
                        engine.visited_cells().len()
                    );
                    for entry in engine.cost_trace() {
                        debug!(
                            "  {}: h={} g={} f={}",
                            entry.cell, entry.h, entry.g, entry.f
                        );
                    }
                    let visited = engine.visited_cells();
                    self.path = Some(path);
                    sink.draw(&SceneView {
                        grid: &self.grid,
                        start,
                        goal,
                        path: self.path.as_ref(),
                        frontier: None,
                        visited: Some(&visited),
                    });
                    break;
                }
                StepResult::NoPath => {
                    info!(
                        "no path: frontier exhausted after visiting {} cells",
                        engine.visited_cells().len()
                    );
                    let visited = engine.visited_cells();
                    self.path = None;
                    sink.draw(&SceneView {
                        grid: &self.grid,
                        start,
                        goal,
                        path: None,
                        frontier: None,
                        visited: Some(&visited),
                    });
                    break;
                }
            }
        }
        Ok(())
    }

    /// Main session loop: draw the scene, pull a command, dispatch.
    ///
    /// Rejected edits (out of bounds, wall conflicts) are logged and
    /// the loop continues; the session ends on `Quit` or when the
    /// input source is exhausted.
    pub fn run(&mut self, input: &mut dyn InputSource, sink: &mut dyn RenderSink) -> Result<()> {
        loop {
            sink.draw(&SceneView {
                grid: &self.grid,
                start: self.grid.start(),
                goal: self.grid.goal(),
                path: self.path.as_ref(),
                frontier: None,
                visited: None,
            });

            let Some(command) = input.next_command() else {
                debug!("input exhausted, ending session");
                break;
            };
            debug!("command: {:?}", command);

            let outcome = match command {
                Command::Quit => break,
                Command::SetStart(cell) => self.set_start(cell),
                Command::SetGoal(cell) => self.set_goal(cell),
                Command::ToggleWall(cell) => self.toggle_wall(cell),
                Command::RunSearch => self.run_search(sink),
            };
            if let Err(e) = outcome {
                warn!("command rejected: {}", e);
            }
        }
        Ok(())
    }
}
