use common::SessionRng;
use common::snake::{
    Clock, GameState, Position, PressedKeys, SnakeSimulation, SnakeSnapshot, SystemClock,
};
use eframe::egui;

use super::WorldView;
use crate::config::DisplayConfig;
use crate::constants::{GAME_OVER_MESSAGE, HUD_FONT_SIZE};
use crate::frame_rate::FrameRate;
use crate::input::sample_keys;

const BACKGROUND_COLOR: egui::Color32 = egui::Color32::BLACK;
const HEAD_COLOR: egui::Color32 = egui::Color32::from_rgb(0x4C, 0xAF, 0x50);
const BODY_COLOR: egui::Color32 = egui::Color32::from_rgb(0x2E, 0x7D, 0x32);
const APPLE_COLOR: egui::Color32 = egui::Color32::from_rgb(0xE5, 0x39, 0x35);
const GRID_COLOR: egui::Color32 = egui::Color32::from_gray(0x30);
const TEXT_COLOR: egui::Color32 = egui::Color32::WHITE;

pub struct GameScreen {
    simulation: SnakeSimulation<SessionRng>,
    clock: SystemClock,
    keys: PressedKeys,
    frame_rate: FrameRate,
    display: DisplayConfig,
}

impl GameScreen {
    pub fn new(simulation: SnakeSimulation<SessionRng>, display: DisplayConfig) -> Self {
        Self {
            simulation,
            clock: SystemClock::new(),
            keys: PressedKeys::new(),
            frame_rate: FrameRate::new(),
            display,
        }
    }

    fn draw(&self, painter: &egui::Painter, view: &WorldView, snapshot: &SnakeSnapshot<'_>) {
        painter.rect_filled(view.rect, 0.0, BACKGROUND_COLOR);

        if self.display.show_grid {
            Self::draw_grid(painter, view, snapshot);
        }

        let cell_size = snapshot.cell_size;
        painter.rect_filled(view.cell_rect(snapshot.head, cell_size), 0.0, HEAD_COLOR);
        for segment in snapshot.visible_body_segments() {
            let rect = view.cell_rect(segment, cell_size).shrink(view.scale);
            painter.rect_filled(rect, 0.0, BODY_COLOR);
        }
        if let Some(apple) = snapshot.apple {
            let rect = view.cell_rect(apple, cell_size);
            painter.circle_filled(rect.center(), rect.width() * 0.4, APPLE_COLOR);
        }

        let font = egui::FontId::proportional(HUD_FONT_SIZE * view.scale);
        let world_width = snapshot.world_width as f32;
        let world_height = snapshot.world_height as f32;
        match snapshot.state {
            GameState::Playing => {
                painter.text(
                    view.to_screen(world_width / 2.0, 4.0 * world_height / 5.0),
                    egui::Align2::CENTER_CENTER,
                    snapshot.score.to_string(),
                    font,
                    TEXT_COLOR,
                );
            }
            GameState::GameOver => {
                painter.text(
                    view.to_screen(world_width / 2.0, world_height / 2.0),
                    egui::Align2::CENTER_CENTER,
                    GAME_OVER_MESSAGE,
                    font,
                    TEXT_COLOR,
                );
            }
        }

        if self.display.show_fps
            && let Some(fps) = self.frame_rate.fps()
        {
            painter.text(
                view.rect.left_top() + egui::vec2(4.0, 4.0),
                egui::Align2::LEFT_TOP,
                format!("{:.0} fps", fps),
                egui::FontId::monospace(12.0),
                TEXT_COLOR,
            );
        }
    }

    fn draw_grid(painter: &egui::Painter, view: &WorldView, snapshot: &SnakeSnapshot<'_>) {
        let stroke = egui::Stroke::new(1.0, GRID_COLOR);
        let cell_size = snapshot.cell_size;
        for x in (0..snapshot.world_width).step_by(cell_size as usize) {
            for y in (0..snapshot.world_height).step_by(cell_size as usize) {
                let rect = view.cell_rect(Position::new(x, y), cell_size);
                painter.rect_stroke(rect, 0.0, stroke, egui::StrokeKind::Inside);
            }
        }
    }
}

impl eframe::App for GameScreen {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let delta = self.clock.delta_time();
        sample_keys(ctx, &mut self.keys);
        self.simulation.tick(delta, &self.keys);
        self.frame_rate.update(delta);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::from_gray(0x10)))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                let snapshot = self.simulation.snapshot();
                let view = WorldView::fit(response.rect, snapshot.world_width, snapshot.world_height);
                self.draw(&painter, &view, &snapshot);
            });

        ctx.request_repaint();
    }
}
