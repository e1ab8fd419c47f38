use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::PrimitiveTopology;
use itertools::Itertools;
use rand::Rng;

use crate::config::{OrreryConfig, STAR_STREAM};

/// Star positions drawn uniformly inside an axis-aligned cube of side
/// `extent` centered at the origin.
pub fn star_positions<R: Rng + ?Sized>(rng: &mut R, count: usize, extent: f32) -> Vec<[f32; 3]> {
    let half = extent / 2.0;
    (0..count)
        .map(|_| {
            [
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
            ]
        })
        .collect_vec()
}

/// One vertex per star, drawn as points.
pub fn starfield_mesh(positions: Vec<[f32; 3]>) -> Mesh {
    Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
}

pub struct Plugin;

impl Plugin {
    fn spawn_starfield(
        mut commands: Commands,
        mut meshes: ResMut<Assets<Mesh>>,
        mut materials: ResMut<Assets<StandardMaterial>>,
        config: Res<OrreryConfig>,
    ) {
        let mut rng = config.rng(STAR_STREAM);
        let positions = star_positions(&mut rng, config.star_count, config.starfield_extent);

        commands.spawn((
            Name::new("Starfield"),
            Mesh3d(meshes.add(starfield_mesh(positions))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::WHITE,
                unlit: true,
                ..default()
            })),
            Transform::default(),
        ));

        info!(
            "starfield: {} stars in a cube of side {}",
            config.star_count, config.starfield_extent
        );
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, Self::spawn_starfield);
    }
}
