// playfield geometry: the board is measured in "pixels" and split into square cells,
// the simulation only ever sees cell coordinates

pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;
pub const CELL_SIZE: i32 = 20;

pub const GRID_WIDTH: i32 = SCREEN_WIDTH / CELL_SIZE;
pub const GRID_HEIGHT: i32 = SCREEN_HEIGHT / CELL_SIZE;

/// Terminal columns used to draw one cell (glyph + spacer).
pub const CELL_COLUMNS: u16 = 2;
/// Thickness of the frame drawn around the playfield, in terminal characters.
pub const BORDER: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinates {
    pub x: i32,
    pub y: i32,
}

impl Coordinates {
    pub fn new(x: i32, y: i32) -> Coordinates {
        Coordinates { x, y }
    }

    pub fn move_left(&mut self) {
        self.x -= 1;
    }
    pub fn move_right(&mut self) {
        self.x += 1;
    }
    pub fn move_up(&mut self) {
        self.y -= 1;
    }
    pub fn move_down(&mut self) {
        self.y += 1;
    }

    /// The neighbouring cell one step towards `direction`.
    pub fn step(&self, direction: Direction) -> Coordinates {
        let mut res = *self;
        match direction {
            Direction::Up => res.move_up(),
            Direction::Down => res.move_down(),
            Direction::Left => res.move_left(),
            Direction::Right => res.move_right(),
        }
        res
    }

    pub fn is_in_bounds(&self) -> bool {
        self.x >= 0 && self.x < GRID_WIDTH && self.y >= 0 && self.y < GRID_HEIGHT
    }

    /// Every cell of the playfield, row by row.
    pub fn all_cells() -> impl Iterator<Item = Coordinates> {
        (0..GRID_HEIGHT).flat_map(|y| (0..GRID_WIDTH).map(move |x| Coordinates::new(x, y)))
    }
}

pub const CELL_COUNT: usize = (GRID_WIDTH * GRID_HEIGHT) as usize;

/// Terminal (column, row) of the first character of `cell`, both zero based.
/// Returns None for cells outside the playfield.
pub fn cell_to_screen(cell: Coordinates) -> Option<(u16, u16)> {
    if !cell.is_in_bounds() {
        return None;
    }
    let column = BORDER + cell.x as u16 * CELL_COLUMNS;
    let row = BORDER + cell.y as u16;
    Some((column, row))
}

/// Cell drawn at terminal (column, row), if that character belongs to the playfield.
pub fn screen_to_cell(column: u16, row: u16) -> Option<Coordinates> {
    if column < BORDER || row < BORDER {
        return None;
    }
    let cell = Coordinates::new(
        ((column - BORDER) / CELL_COLUMNS) as i32,
        (row - BORDER) as i32,
    );
    cell.is_in_bounds().then_some(cell)
}

/// Width of the whole drawn board, borders included.
pub fn screen_width() -> u16 {
    GRID_WIDTH as u16 * CELL_COLUMNS + 2 * BORDER
}
