/*
 * Scene Module
 *
 * This module defines the scene graph the renderer consumes: the swarm
 * parent transform that groups every boid visual under one cumulative
 * rotation, and the light set. Lights are added and removed as whole
 * objects; the frame driver reconciles the set against the UI toggles
 * once per frame, so a toggle is visible on the very next frame.
 */

use nannou::prelude::*;
use tracing::debug;

use crate::params::FrameSettings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightKind {
    Ambient,
    Key,
    Fill,
}

#[derive(Clone, Copy, Debug)]
pub struct Light {
    pub kind: LightKind,
    pub intensity: f32,
    pub direction: Vec3,
}

impl Light {
    pub fn ambient() -> Self {
        Self {
            kind: LightKind::Ambient,
            intensity: 0x44 as f32 / 0xff as f32,
            direction: Vec3::ZERO,
        }
    }

    pub fn key() -> Self {
        Self {
            kind: LightKind::Key,
            intensity: 1.0,
            direction: vec3(10.0, 10.0, 10.0).normalize(),
        }
    }

    pub fn fill() -> Self {
        Self {
            kind: LightKind::Fill,
            intensity: 1.0,
            direction: vec3(-10.0, -10.0, -10.0).normalize(),
        }
    }
}

pub struct Scene {
    // Cumulative euler rotation of the swarm parent, unbounded
    pub rotation: Vec3,
    lights: Vec<Light>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    // A scene with all three lights on, matching the startup toggles
    pub fn new() -> Self {
        Self {
            rotation: Vec3::ZERO,
            lights: vec![Light::ambient(), Light::key(), Light::fill()],
        }
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn has_light(&self, kind: LightKind) -> bool {
        self.lights.iter().any(|light| light.kind == kind)
    }

    pub fn add_light(&mut self, light: Light) {
        if !self.has_light(light.kind) {
            debug!(kind = ?light.kind, "light added");
            self.lights.push(light);
        }
    }

    pub fn remove_light(&mut self, kind: LightKind) {
        if self.has_light(kind) {
            debug!(?kind, "light removed");
            self.lights.retain(|light| light.kind != kind);
        }
    }

    // Reconcile the light set against the frame's toggle values
    pub fn sync_lights(&mut self, settings: &FrameSettings) {
        let toggles = [
            (LightKind::Ambient, settings.ambient_light, Light::ambient()),
            (LightKind::Key, settings.key_light, Light::key()),
            (LightKind::Fill, settings.fill_light, Light::fill()),
        ];

        for (kind, on, light) in toggles {
            if on {
                self.add_light(light);
            } else {
                self.remove_light(kind);
            }
        }
    }

    // Diffuse shading factor for a surface facing `normal`
    pub fn brightness(&self, normal: Vec3) -> f32 {
        let mut total = 0.0;
        for light in &self.lights {
            match light.kind {
                LightKind::Ambient => total += light.intensity,
                _ => total += light.intensity * light.direction.dot(normal).max(0.0),
            }
        }
        total
    }
}
