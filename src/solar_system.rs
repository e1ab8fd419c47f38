use bevy::prelude::*;

use crate::camera_rig::MainCamera;
use crate::config::{OrreryConfig, PHASE_STREAM};
use crate::error::OrreryError;
use crate::simulation::Simulation;

pub const SUN_RADIUS: f32 = 2.0;
pub const SUN_COLOR: u32 = 0xffff00;
pub const SUN_LIGHT_RANGE: f32 = 100.0;
pub const SUN_LIGHT_INTENSITY: f32 = 10_000_000.0;
pub const AMBIENT_COLOR: u32 = 0x404040;
pub const AMBIENT_BRIGHTNESS: f32 = 200.0;

const SPHERE_SECTORS: u32 = 32;
const SPHERE_STACKS: u32 = 32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Planet {
    pub name: &'static str,
    pub size: f32,
    pub orbit_radius: f32,
    pub color: u32,
    /// Radians per tick.
    pub orbit_speed: f32,
}

impl Planet {
    const fn new(
        name: &'static str,
        size: f32,
        orbit_radius: f32,
        color: u32,
        orbit_speed: f32,
    ) -> Self {
        Self {
            name,
            size,
            orbit_radius,
            color,
            orbit_speed,
        }
    }
}

pub const PLANETS: [Planet; 8] = [
    Planet::new("Mercury", 0.5, 5.0, 0xff0000, 0.03),
    Planet::new("Venus", 0.8, 7.0, 0xff9900, 0.02),
    Planet::new("Earth", 1.0, 10.0, 0x0000ff, 0.01),
    Planet::new("Mars", 0.9, 15.0, 0xff3300, 0.008),
    Planet::new("Jupiter", 1.2, 20.0, 0xffcc00, 0.006),
    Planet::new("Saturn", 1.1, 25.0, 0xff6600, 0.004),
    Planet::new("Uranus", 0.9, 30.0, 0x33ccff, 0.003),
    Planet::new("Neptune", 0.8, 35.0, 0x3366ff, 0.002),
];

/// `0xRRGGBB` to an sRGB colour.
pub fn hex_color(hex: u32) -> Color {
    Color::srgb_u8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

fn sphere_mesh(radius: f32) -> Mesh {
    Sphere::new(radius)
        .mesh()
        .uv(SPHERE_SECTORS, SPHERE_STACKS)
}

/// Builds the simulation state for the planet catalogue.
pub fn build_simulation(config: &OrreryConfig) -> Result<Simulation, OrreryError> {
    let mut rng = config.rng(PHASE_STREAM);
    let mut simulation = Simulation::new(config.camera_rig()?);
    for planet in PLANETS.iter() {
        simulation
            .bodies
            .create_body(planet.orbit_radius, planet.orbit_speed, &mut rng)?;
    }
    Ok(simulation)
}

pub struct Plugin;

impl Plugin {
    fn setup(
        mut commands: Commands,
        mut meshes: ResMut<Assets<Mesh>>,
        mut materials: ResMut<Assets<StandardMaterial>>,
        config: Res<OrreryConfig>,
    ) -> Result {
        let simulation = build_simulation(&config)?;

        // Sun
        commands.spawn((
            Name::new("Sun"),
            Mesh3d(meshes.add(sphere_mesh(SUN_RADIUS))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: hex_color(SUN_COLOR),
                unlit: true,
                ..default()
            })),
            Transform::default(),
        ));

        commands.spawn((
            Name::new("Sunlight"),
            PointLight {
                color: Color::WHITE,
                intensity: SUN_LIGHT_INTENSITY,
                range: SUN_LIGHT_RANGE,
                ..default()
            },
            Transform::default(),
        ));

        commands.insert_resource(AmbientLight {
            color: hex_color(AMBIENT_COLOR),
            brightness: AMBIENT_BRIGHTNESS,
            ..default()
        });

        for ((id, body), planet) in simulation.bodies.iter().zip(PLANETS.iter()) {
            commands.spawn((
                Name::new(planet.name),
                id,
                Mesh3d(meshes.add(sphere_mesh(planet.size))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: hex_color(planet.color),
                    perceptual_roughness: 1.0,
                    ..default()
                })),
                Transform::from_translation(body.position()),
            ));
            debug!(
                planet = planet.name,
                radius = body.radius(),
                phase = body.angle(),
                "planet registered"
            );
        }

        commands.spawn((
            Name::new("Camera"),
            MainCamera,
            Camera3d::default(),
            Projection::from(PerspectiveProjection {
                fov: config.fov_degrees.to_radians(),
                near: config.near,
                far: config.far,
                ..default()
            }),
            simulation.camera.transform(),
        ));

        info!(
            "solar system ready: {} bodies, seed {:?}, camera at {}",
            simulation.bodies.len(),
            config.seed,
            simulation.camera.position()
        );
        commands.insert_resource(simulation);

        Ok(())
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, Self::setup);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_is_ordered_outwards() {
        assert!(PLANETS
            .windows(2)
            .all(|pair| pair[0].orbit_radius < pair[1].orbit_radius));
        assert!(PLANETS
            .windows(2)
            .all(|pair| pair[0].orbit_speed > pair[1].orbit_speed));
    }

    #[test]
    fn hex_color_splits_channels() {
        assert_eq!(hex_color(0xff9900), Color::srgb_u8(255, 153, 0));
        assert_eq!(hex_color(SUN_COLOR), Color::srgb_u8(255, 255, 0));
    }

    #[test]
    fn seeded_simulation_is_reproducible() {
        let config = OrreryConfig::with_seed(42);
        let a = build_simulation(&config).unwrap();
        let b = build_simulation(&config).unwrap();
        assert_eq!(a.bodies.len(), PLANETS.len());
        assert!(a
            .bodies
            .iter()
            .zip(b.bodies.iter())
            .all(|((_, x), (_, y))| x == y));
    }

    #[test]
    fn bodies_match_catalogue() {
        let simulation = build_simulation(&OrreryConfig::with_seed(1)).unwrap();
        for ((_, body), planet) in simulation.bodies.iter().zip(PLANETS.iter()) {
            assert_eq!(body.radius(), planet.orbit_radius);
            assert_eq!(body.angular_speed(), planet.orbit_speed);
        }
    }
}
