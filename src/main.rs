/*
 * 3D Boid Swarm Visualization
 *
 * A fixed pool of boids steered by a flocking rule, rendered as a rotating
 * 3D swarm with momentum-driven color drift. An egui panel exposes the
 * rotation rates and light toggles; a debug overlay shows frame stats.
 */

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    nannou::app(swarm3d::app::model)
        .update(swarm3d::app::update)
        .run();
}
