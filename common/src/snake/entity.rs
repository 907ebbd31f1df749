use std::collections::VecDeque;

use super::types::{Direction, Position};
use super::world::WorldSettings;

#[derive(Clone, Debug)]
pub struct Snake {
    pub head: Position,
    pub direction: Direction,
    /// Tail end first; each step recycles the front segment to the back.
    pub body: VecDeque<Position>,
    direction_set: bool,
}

impl Default for Snake {
    fn default() -> Self {
        Self::new(Position::ORIGIN, Direction::Right)
    }
}

impl Snake {
    pub fn new(head: Position, direction: Direction) -> Self {
        Self {
            head,
            direction,
            body: VecDeque::new(),
            direction_set: false,
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction_locked(&self) -> bool {
        self.direction_set
    }

    /// Accepts a turn unless one was already taken this step, or it is a no-op or a reversal.
    pub fn try_turn(&mut self, direction: Direction) -> bool {
        if self.direction_set
            || direction == self.direction
            || direction.is_opposite(&self.direction)
        {
            return false;
        }
        self.direction = direction;
        self.direction_set = true;
        true
    }

    /// Moves the head one cell and returns where it was.
    pub fn advance(&mut self, world: &WorldSettings) -> Position {
        let previous = self.head;
        self.head = world.wrap(self.head.stepped(self.direction, world.cell_size));
        previous
    }

    pub fn occupies_body(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    pub fn head_hits_body(&self) -> bool {
        self.occupies_body(self.head)
    }

    /// The oldest segment jumps to where the head just was.
    pub fn shift_body(&mut self, previous_head: Position) {
        if self.body.pop_front().is_some() {
            self.body.push_back(previous_head);
        }
    }

    pub fn grow(&mut self) {
        self.body.push_front(self.head);
    }

    pub fn end_step(&mut self) {
        self.direction_set = false;
    }
}
