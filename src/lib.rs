/*
 * 3D Boid Swarm Visualization - Module Definitions
 *
 * This file defines the module structure for the swarm visualization.
 * It organizes the code into logical components for better maintainability.
 */

// Re-export key components for easier access
pub use app::Model;
pub use boid::{Boid, Visual};
pub use camera::Camera;
pub use debug::{DebugInfo, FrameStats};
pub use frame::{FrameDriver, RenderTarget, RunLoop, StopHandle};
pub use params::{FrameSettings, Settings};
pub use renderer::SceneRenderer;
pub use rules::{Flocking, Kinematics, MovementRule};
pub use scene::{Light, LightKind, Scene};

// Define modules
pub mod app;
pub mod boid;
pub mod camera;
pub mod debug;
pub mod frame;
pub mod params;
pub mod renderer;
pub mod rules;
pub mod scene;
pub mod ui;

// Constants
pub const SCENE_SIZE: f32 = 720.0;
pub const WORLD_SIZE: f32 = 720.0;
pub const SWARM_COUNT: usize = 300;
pub const MOMENTUM_SCALE: f32 = 150.0;
pub const COLOR_DRIFT: f32 = 0.0001;
