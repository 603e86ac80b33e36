// what sits on the playfield besides the snakes: obstacles, plus the occupancy
// queries and random placement used to drop fruit and new obstacles on free cells
use rand::Rng;
use tracing::warn;

use crate::grid::{Coordinates, CELL_COUNT, GRID_HEIGHT, GRID_WIDTH};
use crate::snake::Snake;

pub const MAX_OBSTACLES: usize = 100;

// random draws before giving up and scanning the whole board
const MAX_RANDOM_ATTEMPTS: usize = 1_000;

/// Obstacles in the order they appeared, never more than `MAX_OBSTACLES`.
#[derive(Debug, Clone)]
pub struct Obstacles {
    cells: Vec<Coordinates>,
}

impl Obstacles {
    pub fn new() -> Self {
        Obstacles {
            cells: Vec::with_capacity(MAX_OBSTACLES),
        }
    }

    /// Appends `cell`; a no-op once the set is full.
    pub fn push(&mut self, cell: Coordinates) -> bool {
        if self.is_full() {
            return false;
        }
        self.cells.push(cell);
        true
    }

    pub fn contains(&self, cell: Coordinates) -> bool {
        self.cells.contains(&cell)
    }

    pub fn is_full(&self) -> bool {
        self.cells.len() >= MAX_OBSTACLES
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coordinates> {
        self.cells.iter()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

/// Read-only view of everything that can block a cell.
pub struct Occupancy<'a> {
    pub player1: &'a Snake,
    pub player2: Option<&'a Snake>,
    pub obstacles: &'a Obstacles,
}

impl Occupancy<'_> {
    pub fn is_on_obstacle(&self, position: Coordinates) -> bool {
        self.obstacles.contains(position)
    }

    pub fn is_on_any_snake(&self, position: Coordinates) -> bool {
        self.player1.occupies(position)
            || self.player2.is_some_and(|snake| snake.occupies(position))
    }

    pub fn is_occupied(&self, position: Coordinates) -> bool {
        self.is_on_obstacle(position) || self.is_on_any_snake(position)
    }

    fn occupied_cells(&self) -> usize {
        self.player1.len() + self.player2.map_or(0, Snake::len) + self.obstacles.len()
    }

    /// A free cell for the fruit: off every snake and every obstacle.
    pub fn place_fruit<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Coordinates> {
        let position = find_free_cell(rng, self.occupied_cells(), |cell| self.is_occupied(cell));
        if position.is_none() {
            warn!("No free cell left for the fruit");
        }
        position
    }

    /// A free cell for a new obstacle, also avoiding the fruit.
    /// None when the obstacle set is already full or the board has no room.
    pub fn place_obstacle<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        fruit: Coordinates,
    ) -> Option<Coordinates> {
        if self.obstacles.is_full() {
            return None;
        }
        let position = find_free_cell(rng, self.occupied_cells() + 1, |cell| {
            cell == fruit || self.is_occupied(cell)
        });
        if position.is_none() {
            warn!("No free cell left for a new obstacle");
        }
        position
    }
}

/// Picks a uniformly random cell for which `is_blocked` is false.
///
/// On a mostly free board random draws find a cell almost immediately. When
/// more than 80% of the board is taken, or the draws keep hitting blocked cells,
/// the free cells are collected and one of them is chosen instead, so this
/// always terminates and returns None only when nothing is free.
pub fn find_free_cell<R, F>(
    rng: &mut R,
    occupied_cells: usize,
    is_blocked: F,
) -> Option<Coordinates>
where
    R: Rng + ?Sized,
    F: Fn(Coordinates) -> bool,
{
    if occupied_cells <= (CELL_COUNT * 4) / 5 {
        for _ in 0..MAX_RANDOM_ATTEMPTS {
            let candidate = Coordinates::new(
                rng.random_range(0..GRID_WIDTH),
                rng.random_range(0..GRID_HEIGHT),
            );
            if !is_blocked(candidate) {
                return Some(candidate);
            }
        }
    }
    let empty_positions: Vec<Coordinates> =
        Coordinates::all_cells().filter(|cell| !is_blocked(*cell)).collect();
    if empty_positions.is_empty() {
        return None;
    }
    let random_index = rng.random_range(0..empty_positions.len());
    Some(empty_positions[random_index])
}
