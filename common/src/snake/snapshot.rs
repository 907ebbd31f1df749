use std::collections::VecDeque;

use super::types::{Direction, GameState, Position};

/// Read-only view of one frame, handed to the renderer.
#[derive(Clone, Copy, Debug)]
pub struct SnakeSnapshot<'a> {
    pub head: Position,
    pub direction: Direction,
    pub body: &'a VecDeque<Position>,
    pub apple: Option<Position>,
    pub score: u32,
    pub state: GameState,
    pub world_width: i32,
    pub world_height: i32,
    pub cell_size: i32,
}

impl<'a> SnakeSnapshot<'a> {
    /// Body segments to draw, in insertion order. A segment sitting on the head
    /// (the one just grown from an apple) is left out for that frame.
    pub fn visible_body_segments(&self) -> impl Iterator<Item = Position> + 'a {
        let head = self.head;
        let body = self.body;
        body.iter()
            .copied()
            .filter(move |segment| *segment != head)
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::GameOver
    }
}
