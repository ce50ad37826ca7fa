/*
 * Debug Information Module
 *
 * This module defines the FrameStats bracket that surrounds each frame step
 * and the DebugInfo struct with the values the overlay panel displays.
 * Stats are purely observational; they never feed back into the simulation.
 */

use std::time::{Duration, Instant};

use nannou::prelude::*;

// Begin/end bracket recorded around each frame step
pub struct FrameStats {
    frame_start: Option<Instant>,
    frames: u64,
    last_frame: Duration,
    smoothed_fps: f32,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            frame_start: None,
            frames: 0,
            last_frame: Duration::ZERO,
            smoothed_fps: 0.0,
        }
    }
}

impl FrameStats {
    pub fn begin(&mut self) {
        self.frame_start = Some(Instant::now());
    }

    pub fn end(&mut self) {
        if let Some(start) = self.frame_start.take() {
            self.last_frame = start.elapsed();
            self.frames += 1;

            let secs = self.last_frame.as_secs_f32();
            if secs > 0.0 {
                let fps = 1.0 / secs;
                self.smoothed_fps = if self.frames == 1 {
                    fps
                } else {
                    self.smoothed_fps * 0.9 + fps * 0.1
                };
            }
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn frame_time(&self) -> Duration {
        self.last_frame
    }

    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

// Debug information to display
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub boid_count: usize,
    pub swarm_rotation: Vec3,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            boid_count: 0,
            swarm_rotation: Vec3::ZERO,
        }
    }
}
