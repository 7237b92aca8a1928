//! Pathfinding module.
//!
//! This module contains the breadth-first solver that computes the shortest walk between two cells
//! of a maze, used for the solution overlay and to check that a freshly carved maze is solvable.

use std::collections::VecDeque;

use crate::grid::{Coord, Direction, Grid};

/// Ordered sequence of cells from a start to a goal.
///
/// Consecutive entries are adjacent and not separated by a wall. An empty path means the goal
/// could not be reached.
pub type Path = Vec<Coord>;

/// Computes the shortest path from `start` to `goal` through open passages.
///
/// Cells are marked as seen the moment they are enqueued, so the first time the goal is
/// discovered is along a shortest path. Neighbours are explored in [`Direction::ALL`] order, which
/// fixes the choice between equally short paths. Each discovered cell records the cell it was
/// reached from, and the path is rebuilt from those links once the goal is dequeued.
///
/// Returns an empty path when either endpoint lies outside the grid or the goal is unreachable.
#[must_use]
pub fn shortest_path(grid: &Grid, start: Coord, goal: Coord) -> Path {
    let (Some(start_idx), Some(goal_idx)) = (grid.index(start), grid.index(goal)) else {
        return Path::new();
    };

    let mut came_from: Vec<Option<Coord>> = vec![None; grid.dimensions().area()];
    let mut seen = vec![false; grid.dimensions().area()];
    let mut frontier = VecDeque::from([start]);
    if let Some(slot) = seen.get_mut(start_idx) {
        *slot = true;
    }

    while let Some(coord) = frontier.pop_front() {
        if coord == goal {
            return rebuild(&came_from, grid, start, goal);
        }

        for direction in Direction::ALL {
            if !grid.is_open(coord, direction) {
                continue;
            }
            let Some(next) = grid.neighbor(coord, direction) else {
                continue;
            };
            let Some(next_idx) = grid.index(next) else {
                continue;
            };
            match seen.get_mut(next_idx) {
                Some(slot) if !*slot => *slot = true,
                _ => continue,
            }
            if let Some(link) = came_from.get_mut(next_idx) {
                *link = Some(coord);
            }
            frontier.push_back(next);
        }
    }

    // Only reachable when the goal was never dequeued.
    debug_assert!(
        seen.get(goal_idx).is_some_and(|seen| !seen),
        "goal was discovered but never dequeued"
    );

    Path::new()
}

/// Walks predecessor links back from `goal` to `start` and returns them in forward order.
fn rebuild(came_from: &[Option<Coord>], grid: &Grid, start: Coord, goal: Coord) -> Path {
    let mut path = vec![goal];
    let mut current = goal;

    while current != start {
        let Some(previous) = grid
            .index(current)
            .and_then(|idx| came_from.get(idx).copied().flatten())
        else {
            return Path::new();
        };
        path.push(previous);
        current = previous;
    }

    path.reverse();
    path
}

/// Returns whether `path` is a valid walk through `grid`.
///
/// Every step must move to a grid-adjacent cell without crossing a wall. An empty path is never
/// valid.
#[must_use]
pub fn is_walkable(grid: &Grid, path: &[Coord]) -> bool {
    !path.is_empty()
        && path.iter().all(|coord| grid.contains(*coord))
        && path.windows(2).all(|pair| match pair {
            [from, to] => Direction::ALL.into_iter().any(|direction| {
                grid.is_open(*from, direction) && grid.neighbor(*from, direction) == Some(*to)
            }),
            _ => false,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        generator::{self, RngSource, SequenceSource},
        grid::Dimensions,
    };

    /// Carves a maze of the given size with a seeded source.
    fn seeded_maze(cols: usize, rows: usize, seed: u64) -> Grid {
        let mut grid = Grid::new(Dimensions::new(cols, rows).expect("test dimensions are in range"));
        let _ = generator::carve(&mut grid, &mut RngSource::from_seed(seed));
        grid
    }

    /// Computes the BFS distance between two cells without tracking paths.
    fn distance(grid: &Grid, start: Coord, goal: Coord) -> Option<usize> {
        let mut depth = vec![None; grid.dimensions().area()];
        let mut queue = VecDeque::from([start]);
        *depth.get_mut(grid.index(start)?)? = Some(0);

        while let Some(coord) = queue.pop_front() {
            let here = (*depth.get(grid.index(coord)?)?)?;
            for direction in Direction::ALL {
                let Some(next) = grid
                    .neighbor(coord, direction)
                    .filter(|_| grid.is_open(coord, direction))
                else {
                    continue;
                };
                let slot = depth.get_mut(grid.index(next)?)?;
                if slot.is_none() {
                    *slot = Some(here + 1);
                    queue.push_back(next);
                }
            }
        }

        *depth.get(grid.index(goal)?)?
    }

    #[test]
    fn test_shortest_path_matches_bfs_distance() {
        for seed in 0..8 {
            let grid = seeded_maze(13, 9, seed);
            let start = Coord::new(0, 0);
            let goal = Coord::new(12, 8);

            let path = shortest_path(&grid, start, goal);

            assert!(!path.is_empty(), "generated mazes are always solvable");
            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&goal));
            assert!(is_walkable(&grid, &path));
            assert_eq!(Some(path.len() - 1), distance(&grid, start, goal));
        }
    }

    #[test]
    fn test_shortest_path_between_inner_cells() {
        let grid = seeded_maze(20, 20, 42);
        let start = Coord::new(7, 3);
        let goal = Coord::new(2, 15);

        let path = shortest_path(&grid, start, goal);

        assert!(is_walkable(&grid, &path));
        assert_eq!(Some(path.len() - 1), distance(&grid, start, goal));
    }

    #[test]
    fn test_shortest_path_first_neighbor_maze() {
        let mut grid = Grid::new(Dimensions::new(5, 5).expect("5x5 is a valid size"));
        let _ = generator::carve(&mut grid, &mut SequenceSource::new(vec![0]));

        let path = shortest_path(&grid, Coord::new(0, 0), Coord::new(4, 4));

        assert_eq!(
            path,
            vec![
                Coord::new(0, 0),
                Coord::new(1, 0),
                Coord::new(2, 0),
                Coord::new(3, 0),
                Coord::new(4, 0),
                Coord::new(4, 1),
                Coord::new(4, 2),
                Coord::new(4, 3),
                Coord::new(4, 4),
            ]
        );
    }

    #[test]
    fn test_shortest_path_to_self() {
        let grid = seeded_maze(5, 5, 3);

        assert_eq!(
            shortest_path(&grid, Coord::new(2, 2), Coord::new(2, 2)),
            vec![Coord::new(2, 2)]
        );
    }

    #[test]
    fn test_shortest_path_unreachable_goal_is_empty() {
        let grid = Grid::new(Dimensions::new(5, 5).expect("5x5 is a valid size"));

        assert!(shortest_path(&grid, Coord::new(0, 0), Coord::new(4, 4)).is_empty());
    }

    #[test]
    fn test_shortest_path_out_of_bounds_is_empty() {
        let grid = seeded_maze(5, 5, 3);

        assert!(shortest_path(&grid, Coord::new(0, 0), Coord::new(5, 0)).is_empty());
        assert!(shortest_path(&grid, Coord::new(9, 9), Coord::new(0, 0)).is_empty());
    }

    #[test]
    fn test_is_walkable_rejects_jumps_and_walls() {
        let grid = seeded_maze(6, 6, 5);
        let path = shortest_path(&grid, Coord::new(0, 0), Coord::new(5, 5));

        assert!(is_walkable(&grid, &path));
        assert!(!is_walkable(&grid, &[]));
        assert!(!is_walkable(&grid, &[Coord::new(0, 0), Coord::new(2, 0)]));

        let fresh = Grid::new(Dimensions::new(6, 6).expect("6x6 is a valid size"));
        assert!(!is_walkable(&fresh, &[Coord::new(0, 0), Coord::new(1, 0)]));
    }
}
