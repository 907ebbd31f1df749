use common::snake::{Key, PressedKeys};
use eframe::egui;

const KEY_BINDINGS: [(egui::Key, Key); 5] = [
    (egui::Key::ArrowLeft, Key::Left),
    (egui::Key::ArrowRight, Key::Right),
    (egui::Key::ArrowUp, Key::Up),
    (egui::Key::ArrowDown, Key::Down),
    (egui::Key::Space, Key::Restart),
];

/// Refills `pressed` with the keys held this frame, polled rather than event driven.
pub fn sample_keys(ctx: &egui::Context, pressed: &mut PressedKeys) {
    pressed.clear();
    ctx.input(|i| {
        for (egui_key, key) in KEY_BINDINGS {
            if i.key_down(egui_key) {
                pressed.press(key);
            }
        }
    });
}
