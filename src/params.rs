/*
 * Settings Module
 *
 * This module defines the Settings struct that contains all the adjustable
 * parameters for the swarm visualization. The UI layer mutates Settings;
 * the frame driver only ever sees an immutable FrameSettings snapshot taken
 * once per frame. It also provides methods for parameter change detection.
 */

use nannou::prelude::*;

// Parameters that can be adjusted via UI
pub struct Settings {
    // Per-boid spin rates, added to each visual's own tumble rate
    pub boid_spin_x: f32,
    pub boid_spin_y: f32,
    pub boid_spin_z: f32,
    // Swarm parent rotation rates
    pub swarm_spin_x: f32,
    pub swarm_spin_y: f32,
    pub swarm_spin_z: f32,
    // Light toggles
    pub ambient_light: bool,
    pub key_light: bool,
    pub fill_light: bool,
    pub show_debug: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
struct ParamSnapshot {
    boid_spin_x: f32,
    boid_spin_y: f32,
    boid_spin_z: f32,
    swarm_spin_x: f32,
    swarm_spin_y: f32,
    swarm_spin_z: f32,
    ambient_light: bool,
    key_light: bool,
    fill_light: bool,
    show_debug: bool,
}

// The value set the frame driver reads once per frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSettings {
    pub boid_spin: Vec3,
    pub swarm_spin: Vec3,
    pub ambient_light: bool,
    pub key_light: bool,
    pub fill_light: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            boid_spin_x: 0.02,
            boid_spin_y: 0.02,
            boid_spin_z: 0.02,
            swarm_spin_x: 0.0,
            swarm_spin_y: 0.0,
            swarm_spin_z: 0.0,
            ambient_light: true,
            key_light: true,
            fill_light: true,
            show_debug: false,
            previous_values: None,
        }
    }
}

impl Settings {
    // Freeze the tunables for one frame step
    pub fn frame_snapshot(&self) -> FrameSettings {
        FrameSettings {
            boid_spin: vec3(self.boid_spin_x, self.boid_spin_y, self.boid_spin_z),
            swarm_spin: vec3(self.swarm_spin_x, self.swarm_spin_y, self.swarm_spin_z),
            ambient_light: self.ambient_light,
            key_light: self.key_light,
            fill_light: self.fill_light,
        }
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            boid_spin_x: self.boid_spin_x,
            boid_spin_y: self.boid_spin_y,
            boid_spin_z: self.boid_spin_z,
            swarm_spin_x: self.swarm_spin_x,
            swarm_spin_y: self.swarm_spin_y,
            swarm_spin_z: self.swarm_spin_z,
            ambient_light: self.ambient_light,
            key_light: self.key_light,
            fill_light: self.fill_light,
            show_debug: self.show_debug,
        });
    }

    // Check if any parameters have changed since the last snapshot
    pub fn detect_changes(&self) -> bool {
        // If we don't have previous values, nothing has changed
        if let Some(prev) = &self.previous_values {
            self.boid_spin_x != prev.boid_spin_x
                || self.boid_spin_y != prev.boid_spin_y
                || self.boid_spin_z != prev.boid_spin_z
                || self.swarm_spin_x != prev.swarm_spin_x
                || self.swarm_spin_y != prev.swarm_spin_y
                || self.swarm_spin_z != prev.swarm_spin_z
                || self.ambient_light != prev.ambient_light
                || self.key_light != prev.key_light
                || self.fill_light != prev.fill_light
                || self.show_debug != prev.show_debug
        } else {
            false
        }
    }

    // Get parameter ranges for UI sliders
    pub fn get_rate_range() -> std::ops::RangeInclusive<f32> {
        0.0..=0.5
    }
}
