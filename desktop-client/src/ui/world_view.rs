use common::snake::Position;

/// Letter-boxed mapping from y-up world units to screen points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldView {
    pub rect: egui::Rect,
    pub scale: f32,
    world_height: f32,
}

impl WorldView {
    pub fn fit(available: egui::Rect, world_width: i32, world_height: i32) -> Self {
        let world_size = egui::vec2(world_width as f32, world_height as f32);
        let scale = (available.width() / world_size.x).min(available.height() / world_size.y);
        let rect = egui::Rect::from_center_size(available.center(), world_size * scale);
        Self {
            rect,
            scale,
            world_height: world_size.y,
        }
    }

    pub fn to_screen(&self, x: f32, y: f32) -> egui::Pos2 {
        egui::pos2(
            self.rect.min.x + x * self.scale,
            self.rect.min.y + (self.world_height - y) * self.scale,
        )
    }

    pub fn cell_rect(&self, position: Position, cell_size: i32) -> egui::Rect {
        let bottom_left = self.to_screen(position.x as f32, position.y as f32);
        let top_right = self.to_screen(
            (position.x + cell_size) as f32,
            (position.y + cell_size) as f32,
        );
        egui::Rect::from_two_pos(bottom_left, top_right)
    }
}
