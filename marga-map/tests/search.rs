//! Search engine integration tests.
//!
//! Cross-checks A* results against a brute-force BFS on seeded random
//! grids, and exercises the determinism and invariant guarantees the
//! stepped engine documents.

use marga_map::{Cell, MazeGrid, SearchStatus, StepResult, SteppedAStar};
use std::collections::{HashSet, VecDeque};

/// Brute-force shortest 4-connected distance in moves, or None when
/// the goal is unreachable.
fn bfs_distance(grid: &MazeGrid, start: Cell, goal: Cell) -> Option<usize> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(start);
    queue.push_back((start, 0usize));

    while let Some((cell, dist)) = queue.pop_front() {
        if cell == goal {
            return Some(dist);
        }
        for neighbor in grid.open_neighbors4(cell) {
            if seen.insert(neighbor) {
                queue.push_back((neighbor, dist + 1));
            }
        }
    }
    None
}

/// All open cells reachable from `start`, sorted row-major.
fn reachable_component(grid: &MazeGrid, start: Cell) -> Vec<Cell> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(start);
    queue.push_back(start);

    while let Some(cell) = queue.pop_front() {
        for neighbor in grid.open_neighbors4(cell) {
            if seen.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    let mut cells: Vec<Cell> = seen.into_iter().collect();
    cells.sort();
    cells
}

fn run(grid: &MazeGrid) -> StepResult {
    let mut search = SteppedAStar::init(grid, grid.start(), grid.goal()).unwrap();
    search.run_to_completion()
}

#[test]
fn astar_matches_bfs_on_random_grids() {
    for seed in 1..=25u64 {
        for &(size, p) in &[(8usize, 0.2), (12, 0.3), (16, 0.4)] {
            let grid = MazeGrid::generate(size, p, seed).unwrap();
            let expected = bfs_distance(&grid, grid.start(), grid.goal());

            match (run(&grid), expected) {
                (StepResult::Found(path), Some(dist)) => {
                    assert_eq!(
                        path.moves(),
                        dist,
                        "suboptimal path on size={} p={} seed={}",
                        size,
                        p,
                        seed
                    );
                }
                (StepResult::NoPath, None) => {}
                (result, expected) => panic!(
                    "A*/BFS disagree on size={} p={} seed={}: {:?} vs {:?}",
                    size, p, seed, result, expected
                ),
            }
        }
    }
}

#[test]
fn exhausted_search_visits_exactly_the_reachable_component() {
    for seed in 1..=50u64 {
        let grid = MazeGrid::generate(10, 0.45, seed).unwrap();
        if bfs_distance(&grid, grid.start(), grid.goal()).is_some() {
            continue;
        }

        let mut search = SteppedAStar::init(&grid, grid.start(), grid.goal()).unwrap();
        assert_eq!(search.run_to_completion(), StepResult::NoPath);
        assert_eq!(
            search.visited_cells(),
            reachable_component(&grid, grid.start()),
            "visited set mismatch on seed={}",
            seed
        );
    }
}

#[test]
fn replayed_search_produces_identical_step_sequence() {
    let grid = MazeGrid::generate(15, 0.3, 99).unwrap();

    let collect_steps = |grid: &MazeGrid| {
        let mut search = SteppedAStar::init(grid, grid.start(), grid.goal()).unwrap();
        let mut steps = Vec::new();
        loop {
            let result = search.step();
            let terminal = result.is_terminal();
            steps.push(result);
            if terminal {
                break;
            }
        }
        steps
    };

    assert_eq!(collect_steps(&grid), collect_steps(&grid));
}

#[test]
fn start_leaves_frontier_after_first_step() {
    let grid = MazeGrid::generate(10, 0.2, 3).unwrap();
    let start = grid.start();
    let mut search = SteppedAStar::init(&grid, start, grid.goal()).unwrap();

    loop {
        match search.step() {
            StepResult::InProgress(snapshot) => {
                assert!(!snapshot.frontier.contains(&start));
                assert!(snapshot.visited.contains(&start));
            }
            _ => break,
        }
    }
}

#[test]
fn blocked_row_with_single_gap() {
    // Row 2 fully walled except (2, 4); goal lies below the wall, so
    // the whole region above it drains into the gap.
    let mut grid = MazeGrid::open(5).unwrap();
    for col in 0..4 {
        grid.toggle_wall(Cell::new(2, col)).unwrap();
    }

    let mut search = SteppedAStar::init(&grid, grid.start(), grid.goal()).unwrap();
    match search.run_to_completion() {
        StepResult::Found(path) => {
            assert!(path.contains(Cell::new(2, 4)));
            assert_eq!(
                path.moves(),
                bfs_distance(&grid, grid.start(), grid.goal()).unwrap()
            );
        }
        other => panic!("expected Found, got {:?}", other),
    }
    assert_eq!(search.status(), SearchStatus::Succeeded);

    // The whole upper region funnels through the gap, so every
    // reachable open cell in rows 0-2 is expanded before the goal
    let visited: HashSet<Cell> = search.visited_cells().into_iter().collect();
    for cell in reachable_component(&grid, grid.start()) {
        if cell.row <= 2 {
            assert!(
                visited.contains(&cell),
                "upper-region cell {} not visited",
                cell
            );
        }
    }
}

#[test]
fn search_after_wall_edits() {
    // Sealing the goal flips a solvable grid to NoPath; reopening
    // restores the path
    let mut grid = MazeGrid::open(6).unwrap();
    assert!(matches!(run(&grid), StepResult::Found(_)));

    grid.toggle_wall(Cell::new(4, 5)).unwrap();
    grid.toggle_wall(Cell::new(5, 4)).unwrap();
    assert_eq!(run(&grid), StepResult::NoPath);

    grid.toggle_wall(Cell::new(4, 5)).unwrap();
    match run(&grid) {
        StepResult::Found(path) => assert_eq!(path.moves(), 10),
        other => panic!("expected Found, got {:?}", other),
    }
}
