/*
 * Camera Module
 *
 * This module defines the perspective orbit camera used to look at the
 * swarm. It provides the world-to-screen projection the renderer needs,
 * plus drag-to-orbit and scroll-to-dolly handling.
 */

use nannou::prelude::*;

use crate::SCENE_SIZE;

pub struct Camera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub is_dragging: bool,
    last_cursor_pos: Vec2,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::looking_from(vec3(SCENE_SIZE, SCENE_SIZE / 2.0, 2000.0), Vec3::ZERO)
    }

    pub fn looking_from(position: Vec3, target: Vec3) -> Self {
        let offset = position - target;
        let distance = offset.length();

        Self {
            target,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).asin(),
            distance,
            fov_y: 80.0_f32.to_radians(),
            near: 1.0,
            far: 10_000.0,
            min_distance: 10.0,
            max_distance: 8_000.0,
            is_dragging: false,
            last_cursor_pos: Vec2::ZERO,
        }
    }

    pub fn position(&self) -> Vec3 {
        let direction = vec3(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        );
        self.target + direction * self.distance
    }

    // Project a world-space point into screen space. Returns the screen
    // position and the pixels-per-world-unit scale at that depth, or None
    // when the point falls outside the near/far range.
    pub fn world_to_screen(&self, point: Vec3, window_rect: Rect) -> Option<(Vec2, f32)> {
        let position = self.position();
        let forward = (self.target - position).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward);

        let rel = point - position;
        let depth = rel.dot(forward);
        if depth < self.near || depth > self.far {
            return None;
        }

        let focal = (window_rect.h() / 2.0) / (self.fov_y / 2.0).tan();
        let scale = focal / depth;
        let screen = vec2(rel.dot(right), rel.dot(up)) * scale;

        Some((screen + window_rect.xy(), scale))
    }

    // Start orbiting the camera
    pub fn start_drag(&mut self, position: Vec2) {
        self.last_cursor_pos = position;
        self.is_dragging = true;
    }

    // Update the orbit angles while dragging
    pub fn drag(&mut self, position: Vec2) {
        if self.is_dragging {
            let delta = position - self.last_cursor_pos;

            if delta.length_squared() > 0.0 {
                self.yaw -= delta.x * 0.005;
                // Keep the pitch away from the poles so the view basis stays valid
                self.pitch = (self.pitch + delta.y * 0.005).clamp(-1.5, 1.5);
                self.last_cursor_pos = position;
            }
        }
    }

    // End orbiting
    pub fn end_drag(&mut self) {
        self.is_dragging = false;
    }

    // Handle mouse wheel events for moving towards or away from the target
    pub fn dolly(&mut self, scroll_delta: f32) {
        let factor = 1.0 - scroll_delta * 0.1;
        self.distance = (self.distance * factor).clamp(self.min_distance, self.max_distance);
    }
}
