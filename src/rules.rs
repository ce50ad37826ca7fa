/*
 * Movement Rules Module
 *
 * This module defines the movement-rule seam between the frame driver and
 * the steering logic, plus the flocking rule the swarm runs by default.
 * A rule reads the full pool as context and yields the boid's next kinematic
 * state; it never reorders or resizes the pool. Flocking follows the three
 * classic behaviors:
 * 1. Separation: Avoid crowding neighbors
 * 2. Alignment: Steer towards the average heading of neighbors
 * 3. Cohesion: Steer towards the average position of neighbors
 */

use nannou::prelude::*;

use crate::boid::Boid;
use crate::WORLD_SIZE;

// The next simulated state for one boid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Kinematics {
    pub position: Point3,
    pub velocity: Vec3,
}

pub trait MovementRule {
    // Advance one boid by a single time step. `peers` is the whole pool,
    // including the boid itself, read-only.
    fn advance(&self, boid: &Boid, peers: &[Boid]) -> Kinematics;
}

pub struct Flocking {
    pub separation_weight: f32,
    pub alignment_weight: f32,
    pub cohesion_weight: f32,
    pub separation_radius: f32,
    pub alignment_radius: f32,
    pub cohesion_radius: f32,
    pub max_speed: f32,
    pub max_force: f32,
    pub world_size: f32,
}

impl Default for Flocking {
    fn default() -> Self {
        Self {
            separation_weight: 1.5,
            alignment_weight: 1.0,
            cohesion_weight: 1.0,
            separation_radius: 25.0,
            alignment_radius: 50.0,
            cohesion_radius: 50.0,
            max_speed: 4.0,
            max_force: 0.1,
            world_size: WORLD_SIZE,
        }
    }
}

impl Flocking {
    // Calculate separation force (avoid crowding neighbors)
    fn separation(&self, boid: &Boid, peers: &[Boid]) -> Vec3 {
        let mut steering = Vec3::ZERO;
        let mut count = 0;

        for other in peers {
            let d = boid.position.distance(other.position);

            // If this is not the same boid and it's within perception radius
            if d > 0.0 && d < self.separation_radius {
                // Calculate vector pointing away from neighbor, weighted by distance
                let diff = (boid.position - other.position).normalize() / d;
                steering += diff;
                count += 1;
            }
        }

        if count > 0 {
            steering /= count as f32;

            if steering.length() > 0.0 {
                // Implement Reynolds: Steering = Desired - Velocity
                steering = steering.normalize() * self.max_speed - boid.velocity;
                steering = self.limit_force(steering);
            }
        }

        steering
    }

    // Calculate alignment force (steer towards average heading of neighbors)
    fn alignment(&self, boid: &Boid, peers: &[Boid]) -> Vec3 {
        let mut steering = Vec3::ZERO;
        let mut count = 0;

        for other in peers {
            let d = boid.position.distance(other.position);

            if d > 0.0 && d < self.alignment_radius {
                steering += other.velocity;
                count += 1;
            }
        }

        if count > 0 {
            steering /= count as f32;

            if steering.length() > 0.0 {
                // Implement Reynolds: Steering = Desired - Velocity
                steering = steering.normalize() * self.max_speed - boid.velocity;
                steering = self.limit_force(steering);
            }
        }

        steering
    }

    // Calculate cohesion force (steer towards average position of neighbors)
    fn cohesion(&self, boid: &Boid, peers: &[Boid]) -> Vec3 {
        let mut center = Vec3::ZERO;
        let mut count = 0;

        for other in peers {
            let d = boid.position.distance(other.position);

            if d > 0.0 && d < self.cohesion_radius {
                center += other.position;
                count += 1;
            }
        }

        if count > 0 {
            center /= count as f32;

            // Create desired velocity towards target
            let desired = center - boid.position;

            if desired.length() > 0.0 {
                let desired = desired.normalize() * self.max_speed;

                // Implement Reynolds: Steering = Desired - Velocity
                return self.limit_force(desired - boid.velocity);
            }
        }

        Vec3::ZERO
    }

    fn limit_force(&self, force: Vec3) -> Vec3 {
        if force.length() > self.max_force {
            force.normalize() * self.max_force
        } else {
            force
        }
    }

    // Wrap the position around the world cube edges
    fn wrap(&self, mut position: Point3) -> Point3 {
        let half_size = self.world_size / 2.0;

        if position.x > half_size {
            position.x = -half_size;
        } else if position.x < -half_size {
            position.x = half_size;
        }

        if position.y > half_size {
            position.y = -half_size;
        } else if position.y < -half_size {
            position.y = half_size;
        }

        if position.z > half_size {
            position.z = -half_size;
        } else if position.z < -half_size {
            position.z = half_size;
        }

        position
    }
}

impl MovementRule for Flocking {
    fn advance(&self, boid: &Boid, peers: &[Boid]) -> Kinematics {
        let separation = self.separation(boid, peers) * self.separation_weight;
        let alignment = self.alignment(boid, peers) * self.alignment_weight;
        let cohesion = self.cohesion(boid, peers) * self.cohesion_weight;

        let mut velocity = boid.velocity + separation + alignment + cohesion;

        // Limit speed
        if velocity.length() > self.max_speed {
            velocity = velocity.normalize() * self.max_speed;
        }

        let position = self.wrap(boid.position + velocity);

        Kinematics { position, velocity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boid::Visual;

    fn boid_at(position: Point3, velocity: Vec3) -> Boid {
        Boid {
            position,
            velocity,
            radius: 10.0,
            visual: Visual::new(position, hsl(0.0, 0.85, 0.5), 10.0, Vec3::ZERO),
        }
    }

    #[test]
    fn speed_is_capped_at_max_speed() {
        let rule = Flocking::default();
        let boid = boid_at(pt3(0.0, 0.0, 0.0), vec3(100.0, 0.0, 0.0));
        let peers = vec![boid.clone()];
        let next = rule.advance(&boid, &peers);
        assert!(next.velocity.length() <= rule.max_speed + 1e-4);
    }

    #[test]
    fn position_wraps_around_world_edges() {
        let rule = Flocking::default();
        let half = rule.world_size / 2.0;
        let boid = boid_at(pt3(half - 0.5, 0.0, 0.0), vec3(4.0, 0.0, 0.0));
        let peers = vec![boid.clone()];
        let next = rule.advance(&boid, &peers);
        assert!((next.position.x + half).abs() < 1e-4);
    }

    #[test]
    fn lone_boid_keeps_cruising() {
        // No neighbors in range: no steering force applies
        let rule = Flocking::default();
        let boid = boid_at(pt3(0.0, 0.0, 0.0), vec3(2.0, 0.0, 0.0));
        let peers = vec![boid.clone()];
        let next = rule.advance(&boid, &peers);
        assert_eq!(next.velocity, boid.velocity);
        assert_eq!(next.position, boid.position + boid.velocity);
    }

    #[test]
    fn cohesion_steers_towards_neighbors() {
        let rule = Flocking {
            separation_weight: 0.0,
            alignment_weight: 0.0,
            ..Flocking::default()
        };
        let boid = boid_at(pt3(0.0, 0.0, 0.0), Vec3::ZERO);
        let peers = vec![boid.clone(), boid_at(pt3(30.0, 0.0, 0.0), Vec3::ZERO)];
        let next = rule.advance(&boid, &peers);
        assert!(next.velocity.x > 0.0);
    }

    #[test]
    fn separation_steers_away_from_close_neighbors() {
        let rule = Flocking {
            alignment_weight: 0.0,
            cohesion_weight: 0.0,
            ..Flocking::default()
        };
        let boid = boid_at(pt3(0.0, 0.0, 0.0), Vec3::ZERO);
        let peers = vec![boid.clone(), boid_at(pt3(5.0, 0.0, 0.0), Vec3::ZERO)];
        let next = rule.advance(&boid, &peers);
        assert!(next.velocity.x < 0.0);
    }

    #[test]
    fn alignment_matches_neighbor_heading() {
        let rule = Flocking {
            separation_weight: 0.0,
            cohesion_weight: 0.0,
            ..Flocking::default()
        };
        let boid = boid_at(pt3(0.0, 0.0, 0.0), Vec3::ZERO);
        let peers = vec![
            boid.clone(),
            boid_at(pt3(20.0, 0.0, 0.0), vec3(0.0, 3.0, 0.0)),
        ];
        let next = rule.advance(&boid, &peers);
        assert!(next.velocity.y > 0.0);
    }
}
