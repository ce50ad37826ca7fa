/*
 * UI Module
 *
 * This module contains functions for creating and updating the user
 * interface using nannou_egui. It provides the rate sliders and light
 * toggles, and draws the debug overlay panel.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::Settings;

// Update the UI and return whether any parameter changed this frame
pub fn update_ui(egui: &mut Egui, settings: &mut Settings, debug_info: &DebugInfo) -> bool {
    // Take a snapshot of current parameter values for change detection
    settings.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Swarm Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Swarm Rotation", |ui| {
                ui.add(egui::Slider::new(&mut settings.swarm_spin_x, Settings::get_rate_range()).text("X Rate"));
                ui.add(egui::Slider::new(&mut settings.swarm_spin_y, Settings::get_rate_range()).text("Y Rate"));
                ui.add(egui::Slider::new(&mut settings.swarm_spin_z, Settings::get_rate_range()).text("Z Rate"));
            });

            ui.collapsing("Boid Spin", |ui| {
                ui.add(egui::Slider::new(&mut settings.boid_spin_x, Settings::get_rate_range()).text("X Rate"));
                ui.add(egui::Slider::new(&mut settings.boid_spin_y, Settings::get_rate_range()).text("Y Rate"));
                ui.add(egui::Slider::new(&mut settings.boid_spin_z, Settings::get_rate_range()).text("Z Rate"));
            });

            ui.collapsing("Lighting", |ui| {
                ui.checkbox(&mut settings.ambient_light, "Ambient Light");
                ui.checkbox(&mut settings.key_light, "Key Light");
                ui.checkbox(&mut settings.fill_light, "Fill Light");
            });

            ui.separator();

            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!(
                "Frame time: {:.2} ms",
                debug_info.frame_time.as_secs_f64() * 1000.0
            ));

            ui.checkbox(&mut settings.show_debug, "Show Debug Info");
        });

    settings.detect_changes()
}

// Draw debug information on the screen
pub fn draw_debug_info(draw: &nannou::Draw, debug_info: &DebugInfo, window_rect: nannou::geom::Rect) {
    // Create a background panel in the top-left corner
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 220.0;
    let panel_height = line_height * 6.0 + margin;
    let panel_x = window_rect.left() + panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    // Draw the background panel
    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    // Draw each line of text
    let rotation = debug_info.swarm_rotation;
    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!(
            "Frame time: {:.2} ms",
            debug_info.frame_time.as_secs_f64() * 1000.0
        ),
        format!("Boids: {}", debug_info.boid_count),
        format!("Rot X: {:.3}", rotation.x),
        format!("Rot Y: {:.3}", rotation.y),
        format!("Rot Z: {:.3}", rotation.z),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
