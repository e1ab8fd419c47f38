use bevy::prelude::*;

use orrery::{camera_rig, config, controls, input, orbit, solar_system, starfield, viewport};

fn main() -> AppExit {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "orrery".to_string(),
            ..Default::default()
        }),
        ..Default::default()
    }))
    .insert_resource(ClearColor(Color::BLACK))
    .add_plugins(config::Plugin)
    .add_plugins(controls::Plugin)
    .add_plugins(input::Plugin)
    .add_plugins(camera_rig::Plugin)
    .add_plugins(orbit::Plugin)
    .add_plugins(solar_system::Plugin)
    .add_plugins(starfield::Plugin)
    .add_plugins(viewport::Plugin);

    app.run()
}
