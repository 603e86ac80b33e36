// snakes move head first: every segment takes the cell of the one in front of it,
// the head steps one cell towards the current direction and the old tail cell is freed
// (or kept, when the snake eats and grows)
use std::collections::VecDeque;

use colored::Color;

use crate::grid::{Coordinates, Direction};

pub const MAX_SNAKE_LENGTH: usize = 100;
pub const INIT_SNAKE_SIZE: usize = 2;

#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Coordinates>, // The head is the first element
    direction: Direction,
    color: Color,
    dead: bool,
}

impl Snake {
    /// Lays out `INIT_SNAKE_SIZE` segments behind `head`, opposite to `direction`.
    pub fn new(head: Coordinates, direction: Direction, color: Color) -> Self {
        let mut body = VecDeque::with_capacity(MAX_SNAKE_LENGTH);
        let mut current_position = head;
        for _i in 0..INIT_SNAKE_SIZE {
            body.push_back(current_position);
            current_position = current_position.step(direction.opposite());
        }
        Snake {
            body,
            direction,
            color,
            dead: false,
        }
    }

    #[cfg(test)]
    pub fn from_body(body: Vec<Coordinates>, direction: Direction) -> Self {
        assert!(!body.is_empty() && body.len() <= MAX_SNAKE_LENGTH);
        Snake {
            body: body.into(),
            direction,
            color: Color::Green,
            dead: false,
        }
    }

    pub fn head(&self) -> Coordinates {
        // a snake is never built without a head
        self.body[0]
    }

    pub fn body(&self) -> impl Iterator<Item = &Coordinates> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn kill(&mut self) {
        self.dead = true;
    }

    /// Changes the heading unless `direction` would reverse the snake onto itself.
    /// Returns whether the heading was accepted.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Moves the whole body one cell and returns the cell the tail left behind.
    /// The new head is kept even when it lands outside the playfield.
    pub fn advance(&mut self) -> Coordinates {
        let new_head = self.head().step(self.direction);
        // pop the tail first, so the head may legally enter the cell it frees
        let old_tail = match self.body.pop_back() {
            Some(tail) => tail,
            None => new_head,
        };
        self.body.push_front(new_head);
        old_tail
    }

    /// Re-attaches `old_tail`, up to `MAX_SNAKE_LENGTH`.
    pub fn grow(&mut self, old_tail: Coordinates) {
        if self.body.len() < MAX_SNAKE_LENGTH {
            self.body.push_back(old_tail);
        }
    }

    pub fn occupies(&self, position: Coordinates) -> bool {
        self.body.contains(&position)
    }

    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|part| *part == head)
    }
}
