/*
 * Frame Driver Module
 *
 * This module owns the per-frame update cycle: advance every boid through
 * the movement rule in index order, mirror each boid into its visual
 * representation, accumulate the swarm parent rotation from the frame's
 * settings snapshot, and submit the scene for rendering. The RunLoop wraps
 * the driver with a stop signal checked once per iteration boundary so the
 * cycle runs without a real display refresh source.
 */

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::boid::Boid;
use crate::camera::Camera;
use crate::debug::FrameStats;
use crate::params::FrameSettings;
use crate::rules::MovementRule;
use crate::scene::Scene;

// The rendering collaborator: consumes a scene graph plus camera and
// produces one raster frame per submission.
pub trait RenderTarget {
    fn submit(&mut self, scene: &Scene, swarm: &[Boid], camera: &Camera);
}

pub struct FrameDriver<R: MovementRule> {
    boids: Vec<Boid>,
    scene: Scene,
    rule: R,
    stats: FrameStats,
}

impl<R: MovementRule> FrameDriver<R> {
    pub fn new(boids: Vec<Boid>, rule: R) -> Self {
        Self {
            boids,
            scene: Scene::new(),
            rule,
            stats: FrameStats::default(),
        }
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    // Advance the whole swarm by exactly one time step: movement rule and
    // visual sync per boid in index order, then the swarm-wide rotation and
    // light reconciliation. Rendering is the caller's half of the frame.
    pub fn advance(&mut self, settings: &FrameSettings) {
        // The rule sees the pool as it stood at the start of the frame
        let peers = self.boids.clone();

        for (boid, prev) in self.boids.iter_mut().zip(peers.iter()) {
            let next = self.rule.advance(prev, &peers);
            boid.position = next.position;
            boid.velocity = next.velocity;
            boid.sync_visual(settings.boid_spin);
        }

        self.scene.rotation += settings.swarm_spin;
        self.scene.sync_lights(settings);
    }

    // One full frame: advance, then exactly one render submission, with the
    // stats bracket around the whole step.
    pub fn step(
        &mut self,
        settings: &FrameSettings,
        camera: &Camera,
        target: &mut dyn RenderTarget,
    ) {
        self.stats.begin();
        self.advance(settings);
        target.submit(&self.scene, &self.boids, camera);
        self.stats.end();
    }
}

// Cancellation signal for a RunLoop, checked at iteration boundaries only;
// a frame in flight always runs to completion.
#[derive(Clone)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

pub struct RunLoop<R: MovementRule> {
    pub driver: FrameDriver<R>,
    stop: Arc<AtomicBool>,
}

impl<R: MovementRule> RunLoop<R> {
    pub fn new(driver: FrameDriver<R>) -> Self {
        Self {
            driver,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn stop_handle(&self) -> StopHandle {
        StopHandle(Arc::clone(&self.stop))
    }

    // Drive frames until the stop signal is raised. The settings source is
    // polled once per frame, mirroring a UI layer the loop never sees.
    pub fn run(
        &mut self,
        camera: &Camera,
        target: &mut dyn RenderTarget,
        mut settings: impl FnMut() -> FrameSettings,
    ) {
        while !self.stop.load(Ordering::Relaxed) {
            let snapshot = settings();
            self.driver.step(&snapshot, camera, target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boid::Visual;
    use crate::params::Settings;
    use crate::rules::Kinematics;
    use crate::scene::LightKind;
    use nannou::prelude::*;

    // Movement stub: keeps every boid exactly where it is
    struct Hold;

    impl MovementRule for Hold {
        fn advance(&self, boid: &Boid, _peers: &[Boid]) -> Kinematics {
            Kinematics {
                position: boid.position,
                velocity: boid.velocity,
            }
        }
    }

    // Movement stub: drifts every boid by a fixed offset per frame
    struct Drift(Vec3);

    impl MovementRule for Drift {
        fn advance(&self, boid: &Boid, _peers: &[Boid]) -> Kinematics {
            Kinematics {
                position: boid.position + self.0,
                velocity: self.0,
            }
        }
    }

    struct CountingTarget {
        submissions: usize,
    }

    impl RenderTarget for CountingTarget {
        fn submit(&mut self, _scene: &Scene, _swarm: &[Boid], _camera: &Camera) {
            self.submissions += 1;
        }
    }

    fn swarm(count: usize) -> Vec<Boid> {
        (0..count)
            .map(|i| {
                let position = pt3(i as f32, 0.0, 0.0);
                Boid {
                    position,
                    velocity: vec3(1.0, 0.0, 0.0),
                    radius: 10.0,
                    visual: Visual::new(position, hsl(0.0, 0.85, 0.5), 10.0, Vec3::ZERO),
                }
            })
            .collect()
    }

    #[test]
    fn pool_size_never_changes() {
        let mut driver = FrameDriver::new(swarm(300), Drift(vec3(1.0, 2.0, 3.0)));
        let settings = Settings::default().frame_snapshot();
        for _ in 0..7 {
            driver.advance(&settings);
        }
        assert_eq!(driver.boids().len(), 300);
    }

    #[test]
    fn every_visual_mirrors_its_boid_after_a_step() {
        let mut driver = FrameDriver::new(swarm(10), Drift(vec3(0.5, -1.0, 2.0)));
        driver.advance(&Settings::default().frame_snapshot());
        for boid in driver.boids() {
            assert_eq!(boid.visual.position, boid.position);
        }
    }

    #[test]
    fn swarm_rotation_accumulates_per_frame() {
        let mut driver = FrameDriver::new(swarm(2), Hold);
        let mut settings = Settings::default();
        settings.swarm_spin_x = 0.02;
        settings.swarm_spin_y = 0.02;
        settings.swarm_spin_z = 0.02;
        let snapshot = settings.frame_snapshot();

        for _ in 0..10 {
            driver.advance(&snapshot);
        }

        let rotation = driver.scene().rotation;
        assert!((rotation.x - 0.2).abs() < 1e-5);
        assert!((rotation.y - 0.2).abs() < 1e-5);
        assert!((rotation.z - 0.2).abs() < 1e-5);
    }

    #[test]
    fn light_toggle_takes_effect_on_the_next_frame() {
        let mut driver = FrameDriver::new(swarm(1), Hold);
        let mut settings = Settings::default();
        settings.fill_light = false;

        assert!(driver.scene().has_light(LightKind::Fill));
        driver.advance(&settings.frame_snapshot());
        assert!(!driver.scene().has_light(LightKind::Fill));

        settings.fill_light = true;
        driver.advance(&settings.frame_snapshot());
        assert!(driver.scene().has_light(LightKind::Fill));
    }

    #[test]
    fn one_submission_per_completed_frame() {
        let mut run_loop = RunLoop::new(FrameDriver::new(swarm(3), Hold));
        let handle = run_loop.stop_handle();
        let mut target = CountingTarget { submissions: 0 };
        let camera = Camera::new();

        let mut frames = 0;
        run_loop.run(&camera, &mut target, || {
            frames += 1;
            if frames >= 4 {
                handle.stop();
            }
            Settings::default().frame_snapshot()
        });

        assert_eq!(target.submissions, 4);
        assert_eq!(run_loop.driver.stats().frames(), 4);
    }

    #[test]
    fn pre_stopped_loop_runs_no_frames() {
        let mut run_loop = RunLoop::new(FrameDriver::new(swarm(3), Hold));
        run_loop.stop_handle().stop();
        let mut target = CountingTarget { submissions: 0 };
        let camera = Camera::new();

        run_loop.run(&camera, &mut target, || Settings::default().frame_snapshot());

        assert_eq!(target.submissions, 0);
        assert!(run_loop.stop_handle().is_stopped());
    }
}
