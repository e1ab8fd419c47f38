use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::Rng;

use crate::error::OrreryError;
use crate::simulation::Simulation;

/// Index of a body inside the [`BodyRegistry`], also attached to the body's mesh entity.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyId(pub usize);

/// A body in uniform circular motion around the origin, in the XZ plane.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitingBody {
    radius: f32, // Distance from the origin.
    angle: f32,  // Current phase in radians, unbounded.
    speed: f32,  // Radians per tick.
}

impl OrbitingBody {
    pub fn new(radius: f32, angular_speed: f32, angle: f32) -> Result<Self, OrreryError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(OrreryError::InvalidRadius(radius));
        }
        if !angular_speed.is_finite() {
            return Err(OrreryError::InvalidAngularSpeed(angular_speed));
        }
        if !angle.is_finite() {
            return Err(OrreryError::InvalidPhase(angle));
        }

        Ok(Self {
            radius,
            angle,
            speed: angular_speed,
        })
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn angular_speed(&self) -> f32 {
        self.speed
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.radius * self.angle.cos(),
            0.0,
            self.radius * self.angle.sin(),
        )
    }

    pub fn advance(&mut self, dt_ticks: f32) {
        self.angle += self.speed * dt_ticks;
    }
}

/// Every orbiting body in the scene. Bodies are never removed.
#[derive(Debug, Clone, Default)]
pub struct BodyRegistry {
    bodies: Vec<OrbitingBody>,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a body whose initial phase is drawn uniformly from `[0, 2π)`.
    pub fn create_body<R: Rng + ?Sized>(
        &mut self,
        radius: f32,
        angular_speed: f32,
        rng: &mut R,
    ) -> Result<BodyId, OrreryError> {
        let angle = rng.gen_range(0.0..TAU);
        Ok(self.insert(OrbitingBody::new(radius, angular_speed, angle)?))
    }

    pub fn insert(&mut self, body: OrbitingBody) -> BodyId {
        self.bodies.push(body);
        BodyId(self.bodies.len() - 1)
    }

    pub fn get(&self, id: BodyId) -> Option<&OrbitingBody> {
        self.bodies.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &OrbitingBody)> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(index, body)| (BodyId(index), body))
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Bodies don't interact, so the update order is irrelevant.
    pub fn advance(&mut self, dt_ticks: f32) {
        for body in self.bodies.iter_mut() {
            body.advance(dt_ticks);
        }
    }
}

pub struct Plugin;

impl Plugin {
    fn tick_orbits(mut simulation: ResMut<Simulation>) {
        simulation.tick(1.0);
    }

    fn sync_transforms(
        simulation: Res<Simulation>,
        mut query: Query<(&BodyId, &mut Transform)>,
    ) {
        for (id, mut transform) in query.iter_mut() {
            if let Some(body) = simulation.bodies.get(*id) {
                transform.translation = body.position();
            }
        }
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (Self::tick_orbits, Self::sync_transforms).chain());
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn rejects_non_positive_radius() {
        assert_eq!(
            OrbitingBody::new(0.0, 0.1, 0.0),
            Err(OrreryError::InvalidRadius(0.0))
        );
        assert!(OrbitingBody::new(-3.0, 0.1, 0.0).is_err());
        assert!(OrbitingBody::new(f32::NAN, 0.1, 0.0).is_err());
    }

    #[test]
    fn rejects_non_finite_speed() {
        assert_eq!(
            OrbitingBody::new(1.0, f32::INFINITY, 0.0),
            Err(OrreryError::InvalidAngularSpeed(f32::INFINITY))
        );
    }

    #[test]
    fn created_phases_stay_in_one_turn() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut registry = BodyRegistry::new();
        for _ in 0..500 {
            registry.create_body(1.0, 0.0, &mut rng).unwrap();
        }
        assert!(registry
            .iter()
            .all(|(_, body)| (0.0..TAU).contains(&body.angle())));
    }

    #[test]
    fn ids_follow_insertion_order() {
        let mut registry = BodyRegistry::new();
        let a = registry.insert(OrbitingBody::new(5.0, 0.03, 0.0).unwrap());
        let b = registry.insert(OrbitingBody::new(7.0, 0.02, 0.0).unwrap());
        assert_eq!((a, b), (BodyId(0), BodyId(1)));
        assert_eq!(registry.get(b).map(OrbitingBody::radius), Some(7.0));
        assert!(registry.get(BodyId(2)).is_none());
    }

    #[test]
    fn advance_scales_with_ticks() {
        let mut body = OrbitingBody::new(10.0, 0.1, 0.0).unwrap();
        body.advance(3.0);
        assert!((body.angle() - 0.3).abs() < 1e-6);
    }
}
