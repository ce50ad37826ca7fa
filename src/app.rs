/*
 * Application Module
 *
 * This module wires the frame driver, settings, camera, and renderer into
 * a nannou application. Each update advances the swarm by one step from a
 * settings snapshot; each view submits the scene to the renderer. Mouse
 * input orbits and dollies the camera.
 */

use nannou::prelude::*;
use nannou::winit::event::{MouseButton, MouseScrollDelta, TouchPhase};
use nannou_egui::Egui;
use rand::Rng;
use tracing::{debug, info};

use crate::boid::Boid;
use crate::camera::Camera;
use crate::debug::DebugInfo;
use crate::frame::{FrameDriver, RenderTarget};
use crate::params::Settings;
use crate::renderer::SceneRenderer;
use crate::rules::Flocking;
use crate::ui;
use crate::{SCENE_SIZE, SWARM_COUNT, WORLD_SIZE};

// Main model for the application
pub struct Model {
    pub driver: FrameDriver<Flocking>,
    pub settings: Settings,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub camera: Camera,
    pub mouse_position: Vec2,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Create the main window
    let window_id = app
        .new_window()
        .title("Boid Swarm")
        .size(SCENE_SIZE as u32, SCENE_SIZE as u32)
        .view(view)
        .mouse_moved(mouse_moved)
        .mouse_pressed(mouse_pressed)
        .mouse_released(mouse_released)
        .mouse_wheel(mouse_wheel)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    // Get the window
    let window = app.window(window_id).unwrap();

    // Create the UI
    let egui = Egui::from_window(&window);

    // Create the swarm, scattered through the world cube
    let mut rng = rand::thread_rng();
    let half_world = WORLD_SIZE / 2.0;
    let boids: Vec<Boid> = (0..SWARM_COUNT)
        .map(|_| {
            Boid::new(
                rng.gen_range(-half_world..half_world),
                rng.gen_range(-half_world..half_world),
                rng.gen_range(-half_world..half_world),
            )
        })
        .collect();

    info!(count = boids.len(), "swarm spawned");

    Model {
        driver: FrameDriver::new(boids, Flocking::default()),
        settings: Settings::default(),
        egui,
        debug_info: DebugInfo::default(),
        camera: Camera::new(),
        mouse_position: Vec2::ZERO,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;
    model.debug_info.boid_count = model.driver.boids().len();

    // Update UI
    let ui_changed = ui::update_ui(&mut model.egui, &mut model.settings, &model.debug_info);
    if ui_changed {
        debug!("settings changed");
    }

    // Advance the swarm by one frame from this frame's snapshot
    model.driver.advance(&model.settings.frame_snapshot());
    model.debug_info.swarm_rotation = model.driver.scene().rotation;
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();
    let window_rect = app.window_rect();

    // Submit the scene to the renderer
    let mut renderer = SceneRenderer::new(&draw, window_rect);
    renderer.submit(model.driver.scene(), model.driver.boids(), &model.camera);

    // Draw debug visualization if enabled
    if model.settings.show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, window_rect);
    }

    // Finish drawing
    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    let new_pos = Vec2::new(pos.x, pos.y);

    if model.camera.is_dragging {
        model.camera.drag(new_pos);
    }

    // Always update the stored mouse position
    model.mouse_position = new_pos;
}

// Mouse pressed event handler
pub fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        // Check if the click is on the UI before starting a camera orbit
        if !model.egui.ctx().is_pointer_over_area() {
            model.camera.start_drag(model.mouse_position);
        }
    }
}

// Mouse released event handler
pub fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.camera.end_drag();
    }
}

// Mouse wheel event handler for dollying the camera
pub fn mouse_wheel(_app: &App, model: &mut Model, delta: MouseScrollDelta, _phase: TouchPhase) {
    match delta {
        MouseScrollDelta::LineDelta(_x, y) => {
            model.camera.dolly(y);
        }
        MouseScrollDelta::PixelDelta(pos) => {
            model.camera.dolly(pos.y as f32 * 0.01);
        }
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
