use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::camera_rig::MainCamera;

/// Size of the drawable surface, in logical pixels.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width over height; 1.0 while the surface is collapsed.
    pub fn aspect_ratio(&self) -> f32 {
        if self.width > 0.0 && self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}

pub struct Plugin;

impl Plugin {
    fn query_viewport(
        mut viewport: ResMut<Viewport>,
        query: Query<&Window, With<PrimaryWindow>>,
    ) -> Result {
        let window = query.single()?;
        viewport.resize(window.width(), window.height());
        info!(
            "viewport {}x{} (aspect {:.3})",
            viewport.width,
            viewport.height,
            viewport.aspect_ratio()
        );
        Ok(())
    }

    fn track_resizes(
        mut viewport: ResMut<Viewport>,
        mut window_resized_reader: MessageReader<WindowResized>,
        query: Query<(), With<PrimaryWindow>>,
    ) {
        for resized in window_resized_reader.read() {
            if query.get(resized.window).is_err() {
                continue;
            }
            viewport.resize(resized.width, resized.height);
            debug!(
                "viewport resized to {}x{} (aspect {:.3})",
                resized.width,
                resized.height,
                viewport.aspect_ratio()
            );
        }
    }

    fn fit_projection(
        viewport: Res<Viewport>,
        mut query_cameras: Query<&mut Projection, With<MainCamera>>,
    ) {
        if !viewport.is_changed() {
            return;
        }

        for mut projection in query_cameras.iter_mut() {
            if let Projection::Perspective(perspective) = &mut *projection {
                perspective.aspect_ratio = viewport.aspect_ratio();
            }
        }
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Viewport>()
            .add_systems(Startup, Self::query_viewport)
            .add_systems(Update, (Self::track_resizes, Self::fit_projection).chain());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_follows_resize() {
        let mut viewport = Viewport::new(1280.0, 720.0);
        assert!((viewport.aspect_ratio() - 16.0 / 9.0).abs() < 1e-6);
        viewport.resize(600.0, 800.0);
        assert_eq!(viewport.aspect_ratio(), 0.75);
    }

    #[test]
    fn collapsed_surface_has_unit_aspect() {
        assert_eq!(Viewport::new(0.0, 0.0).aspect_ratio(), 1.0);
        assert_eq!(Viewport::new(800.0, 0.0).aspect_ratio(), 1.0);
    }
}
