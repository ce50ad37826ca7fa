/*
 * Renderer Module
 *
 * This module renders the scene with nannou: axis helpers, the world
 * bounds, and the boid visuals as depth-sorted, light-shaded circles.
 * Everything under the swarm parent (axes, bounds, boids) rotates with
 * the parent's cumulative rotation.
 */

use nannou::prelude::*;

use crate::boid::Boid;
use crate::camera::Camera;
use crate::frame::RenderTarget;
use crate::scene::Scene;
use crate::{SCENE_SIZE, WORLD_SIZE};

pub struct SceneRenderer<'a> {
    draw: &'a Draw,
    window_rect: Rect,
}

impl<'a> SceneRenderer<'a> {
    pub fn new(draw: &'a Draw, window_rect: Rect) -> Self {
        Self { draw, window_rect }
    }

    fn draw_line(&self, a: Vec3, b: Vec3, color: Rgb, weight: f32, camera: &Camera) {
        if let (Some((start, _)), Some((end, _))) = (
            camera.world_to_screen(a, self.window_rect),
            camera.world_to_screen(b, self.window_rect),
        ) {
            self.draw
                .line()
                .start(start)
                .end(end)
                .weight(weight)
                .color(color);
        }
    }

    // Approximate a dashed line with alternating world-space segments
    fn draw_dashed_line(&self, a: Vec3, b: Vec3, color: Rgb, weight: f32, camera: &Camera) {
        const SEGMENTS: usize = 24;

        for i in (0..SEGMENTS).step_by(2) {
            let t0 = i as f32 / SEGMENTS as f32;
            let t1 = (i + 1) as f32 / SEGMENTS as f32;
            self.draw_line(a.lerp(b, t0), a.lerp(b, t1), color, weight, camera);
        }
    }

    // Axis helpers: solid towards positive, dashed towards negative
    fn draw_axes(&self, rotation: Mat3, camera: &Camera) {
        let axes = [
            (vec3(SCENE_SIZE, 0.0, 0.0), rgb(1.0, 0.0, 0.0)),
            (vec3(0.0, SCENE_SIZE, 0.0), rgb(0.0, 1.0, 0.0)),
            (vec3(0.0, 0.0, SCENE_SIZE), rgb(0.0, 0.0, 1.0)),
        ];

        for (axis, color) in axes {
            self.draw_line(Vec3::ZERO, rotation * axis, color, 2.0, camera);
            self.draw_dashed_line(Vec3::ZERO, rotation * -axis, color, 2.0, camera);
        }
    }

    // World bounds wireframe around the swarm
    fn draw_bounds(&self, rotation: Mat3, camera: &Camera) {
        let h = WORLD_SIZE / 2.0;
        let color = rgb(0.3, 0.3, 0.3);

        for &a in &[-h, h] {
            for &b in &[-h, h] {
                self.draw_line(rotation * vec3(-h, a, b), rotation * vec3(h, a, b), color, 1.0, camera);
                self.draw_line(rotation * vec3(a, -h, b), rotation * vec3(a, h, b), color, 1.0, camera);
                self.draw_line(rotation * vec3(a, b, -h), rotation * vec3(a, b, h), color, 1.0, camera);
            }
        }
    }
}

impl RenderTarget for SceneRenderer<'_> {
    fn submit(&mut self, scene: &Scene, swarm: &[Boid], camera: &Camera) {
        self.draw.background().color(BLACK);

        let rotation = Mat3::from_rotation_z(scene.rotation.z)
            * Mat3::from_rotation_y(scene.rotation.y)
            * Mat3::from_rotation_x(scene.rotation.x);

        self.draw_axes(rotation, camera);
        self.draw_bounds(rotation, camera);

        let eye = camera.position();

        // Project all visuals, then paint back to front
        let mut projected: Vec<(f32, Vec2, f32, Hsla)> = swarm
            .iter()
            .filter_map(|boid| {
                let world = rotation * boid.visual.position;
                let (screen, scale) = camera.world_to_screen(world, self.window_rect)?;

                // Shade with the surface normal facing the camera
                let normal = (eye - world).normalize();
                let shade = scene.brightness(normal);
                let lit = Hsla::new(
                    boid.visual.color.hue,
                    boid.visual.color.saturation.clamp(0.0, 1.0),
                    (boid.visual.color.lightness * shade).clamp(0.0, 1.0),
                    0.8,
                );

                Some((scale, screen, boid.visual.radius * scale, lit))
            })
            .collect();

        // Smaller scale means farther away; paint those first
        projected.sort_by(|a, b| a.0.total_cmp(&b.0));

        for (_, screen, radius, color) in projected {
            self.draw
                .ellipse()
                .x_y(screen.x, screen.y)
                .radius(radius)
                .color(color);
        }
    }
}
