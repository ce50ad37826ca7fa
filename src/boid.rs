/*
 * Boid Module
 *
 * This module defines the Boid struct and its owned visual representation.
 * The simulated state (position, velocity) is advanced by a movement rule;
 * the visual state mirrors it once per frame and accumulates a color drift
 * driven by the boid's momentum.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::{COLOR_DRIFT, MOMENTUM_SCALE};

#[derive(Clone)]
pub struct Boid {
    pub position: Point3,
    pub velocity: Vec3,
    pub radius: f32,
    pub visual: Visual,
}

// The render-side mirror of a boid. Created once per boid and updated in
// place for the lifetime of the run; nothing but the sync step mutates it.
#[derive(Clone)]
pub struct Visual {
    pub position: Point3,
    pub color: Hsl,
    pub radius: f32,
    pub rotation: Vec3,
    pub spin: Vec3,
}

impl Visual {
    pub fn new(position: Point3, color: Hsl, radius: f32, spin: Vec3) -> Self {
        Self {
            position,
            color,
            radius,
            rotation: Vec3::ZERO,
            spin,
        }
    }

    // Shift hue, saturation and lightness by the same amount. Hue lives in
    // the color model's native degrees; saturation and lightness are left
    // unclamped so the drift accumulates across the run.
    pub fn offset_hsl(&mut self, amount: f32) {
        self.color.hue = self.color.hue + amount;
        self.color.saturation += amount;
        self.color.lightness += amount;
    }
}

impl Boid {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        let mut rng = rand::thread_rng();

        // Random initial heading at a fixed cruise speed
        let vx = rng.gen_range(-1.0..1.0);
        let vy = rng.gen_range(-1.0..1.0);
        let vz = rng.gen_range(-1.0..1.0);
        let velocity = vec3(vx, vy, vz).normalize() * 2.0;

        let position = pt3(x, y, z);
        let radius = rng.gen_range(0.0..50.0);
        let color = hsl(rng.gen_range(0.0..1.0), 0.85, 0.5);
        let spin = vec3(
            rng.gen_range(0.0..0.1),
            rng.gen_range(0.0..0.1),
            rng.gen_range(0.0..0.1),
        );

        Self {
            position,
            velocity,
            radius,
            visual: Visual::new(position, color, radius, spin),
        }
    }

    // Momentum heuristic driving the color drift
    pub fn momentum(&self) -> f32 {
        self.velocity.length() * self.radius
    }

    // Mirror the simulated state into the visual representation. The
    // intensity override is one-sided on purpose: anything below the
    // reference momentum drifts the color negatively at full rate.
    pub fn sync_visual(&mut self, spin_rate: Vec3) {
        self.visual.position = self.position;

        let mut intensity = self.momentum() / MOMENTUM_SCALE;
        if intensity < 1.0 {
            intensity = -1.0;
        }
        if intensity > 1.0 {
            intensity = 1.0;
        }
        self.visual.offset_hsl(intensity * COLOR_DRIFT);

        self.visual.rotation += self.visual.spin + spin_rate;
    }
}
