use bevy::color::LinearRgba;
use bevy::math::primitives::{Cuboid, Sphere};
use bevy::prelude::*;

use crate::simulation::indicators::velocity_indicator;
use crate::simulation::scenario::{Axis, Scenario};
use crate::simulation::states::{Category, NVec3};

/// Component tagging each sphere with its body index into Scenario.world.bodies
#[derive(Component)]
struct BodyIndex(pub usize);

/// Distance of the camera from the origin along +Z
const CAMERA_DISTANCE: f32 = 400.0;

/// Offset of a focused camera from its target body
const FOCUS_OFFSET: Vec3 = Vec3::new(0.0, 0.0, 10.0);

/// Fixed repeat interval for held adjustment keys
const INPUT_REPEAT_SECONDS: f32 = 0.05;

const VELOCITY_STEP: f64 = 0.01;
const POSITION_STEP: f64 = 0.5;
const MASS_STEP_FACTOR: f64 = 1.05;

// Overlay colors, matching the body categories
const VECTOR_COLOR: Color = Color::srgb(0.059, 0.667, 0.439);
const CONTAINER_COLOR: Color = Color::srgb(0.067, 1.0, 0.686);

/// Viewer-local display toggles, flipped from the keyboard
#[derive(Resource)]
struct ViewerSettings {
    draw_vectors: bool,
    draw_containers: bool,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            draw_vectors: true,
            draw_containers: false,
        }
    }
}

/// Camera transform to fall back to when focus detaches
#[derive(Resource)]
struct DefaultViewpoint(Transform);

/// Launch the Bevy viewer around a built scenario
pub fn run_viewer(scenario: Scenario) {
    println!(
        "run_viewer: starting Bevy viewer with {} bodies",
        scenario.world.bodies.len()
    );
    println!("  space = play/pause, S = stop, 0-9 = focus body, F = detach");
    println!("  arrows = adjust velocity (shift: position), -/= = mass");
    println!("  V = velocity vectors, C = containers");

    App::new()
        .insert_resource(scenario)
        .init_resource::<ViewerSettings>()
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (
                keyboard_commands,
                drive_frame,
                sync_transforms,
                draw_overlays,
                follow_focus,
            )
                .chain(),
        )
        .run();
}

/// Startup system: spawn camera, light, axes, and one sphere per body
fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scenario: Res<Scenario>,
) {
    let camera_transform =
        Transform::from_xyz(60.0, 40.0, CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y);

    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.0, 0.0, 0.0)),
            ..Default::default()
        },
        transform: camera_transform,
        ..Default::default()
    });
    commands.insert_resource(DefaultViewpoint(camera_transform));

    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 1500.0,
            range: 2000.0,
            ..Default::default()
        },
        transform: Transform::from_xyz(0.0, 50.0, 0.0),
        ..Default::default()
    });

    spawn_axes(&mut commands, &mut meshes, &mut materials);

    // Spawn one sphere per body; stars glow, planets reflect
    for body in &scenario.world.bodies {
        let material = match body.category {
            Category::Star => StandardMaterial {
                base_color: Color::srgb(0.624, 0.373, 0.373),
                emissive: LinearRgba::rgb(5.0, 0.33, 1.87),
                ..Default::default()
            },
            Category::Planet => StandardMaterial {
                base_color: Color::srgb(0.6, 0.62, 0.7),
                ..Default::default()
            },
        };

        commands.spawn((
            PbrBundle {
                mesh: meshes.add(Sphere::new(body.scale as f32).mesh()),
                material: materials.add(material),
                transform: Transform::from_xyz(
                    body.position.x as f32,
                    body.position.y as f32,
                    body.position.z as f32,
                ),
                ..Default::default()
            },
            BodyIndex(body.index),
        ));
    }
}

/// Map keyboard input onto the scenario's command API.
///
/// One-shot keys fire on press; adjustment keys repeat on a fixed 50 ms
/// interval while held, mirroring slider-style continuous input.
fn keyboard_commands(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut scenario: ResMut<Scenario>,
    mut settings: ResMut<ViewerSettings>,
    mut repeat: Local<f32>,
) {
    if keys.just_pressed(KeyCode::Space) {
        if scenario.is_running() {
            scenario.pause();
        } else {
            scenario.play();
        }
    }
    if keys.just_pressed(KeyCode::KeyS) {
        scenario.stop();
    }
    if keys.just_pressed(KeyCode::KeyF) {
        scenario.detach_focus();
    }
    if keys.just_pressed(KeyCode::KeyV) {
        settings.draw_vectors = !settings.draw_vectors;
        scenario.scheduler.request();
    }
    if keys.just_pressed(KeyCode::KeyC) {
        settings.draw_containers = !settings.draw_containers;
        scenario.scheduler.request();
    }

    const DIGITS: [KeyCode; 10] = [
        KeyCode::Digit0,
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
        KeyCode::Digit5,
        KeyCode::Digit6,
        KeyCode::Digit7,
        KeyCode::Digit8,
        KeyCode::Digit9,
    ];
    for (index, key) in DIGITS.iter().enumerate() {
        if keys.just_pressed(*key) {
            scenario.attach_focus(index);
        }
    }

    // Held adjustments apply to the focused body only
    let Some(index) = scenario.focus else {
        *repeat = 0.0;
        return;
    };

    *repeat += time.delta_seconds();
    if *repeat < INPUT_REPEAT_SECONDS {
        return;
    }
    *repeat = 0.0;

    let Some(body) = scenario.world.body(index) else {
        return;
    };
    let position = body.position;
    let velocity = body.velocity;
    let mass = body.mass;

    let shift = keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight);

    if shift {
        // position nudges; each one leaves a trail marker
        if keys.pressed(KeyCode::ArrowLeft) {
            scenario.set_position_component(index, Axis::X, position.x - POSITION_STEP);
        }
        if keys.pressed(KeyCode::ArrowRight) {
            scenario.set_position_component(index, Axis::X, position.x + POSITION_STEP);
        }
        if keys.pressed(KeyCode::ArrowUp) {
            scenario.set_position_component(index, Axis::Z, position.z - POSITION_STEP);
        }
        if keys.pressed(KeyCode::ArrowDown) {
            scenario.set_position_component(index, Axis::Z, position.z + POSITION_STEP);
        }
    } else {
        if keys.pressed(KeyCode::ArrowLeft) {
            scenario.set_velocity_component(index, Axis::X, velocity.x - VELOCITY_STEP);
        }
        if keys.pressed(KeyCode::ArrowRight) {
            scenario.set_velocity_component(index, Axis::X, velocity.x + VELOCITY_STEP);
        }
        if keys.pressed(KeyCode::ArrowUp) {
            scenario.set_velocity_component(index, Axis::Z, velocity.z - VELOCITY_STEP);
        }
        if keys.pressed(KeyCode::ArrowDown) {
            scenario.set_velocity_component(index, Axis::Z, velocity.z + VELOCITY_STEP);
        }
    }

    if keys.pressed(KeyCode::Equal) {
        scenario.set_mass(index, mass * MASS_STEP_FACTOR);
    }
    if keys.pressed(KeyCode::Minus) {
        scenario.set_mass(index, mass / MASS_STEP_FACTOR);
    }
}

/// Per-frame driver: consume the pending frame request and advance the
/// scenario. Paused with nothing pending means nothing to do.
fn drive_frame(
    time: Res<Time>,
    mut scenario: ResMut<Scenario>,
    camera_query: Query<&Transform, With<Camera3d>>,
) {
    let viewer = match camera_query.get_single() {
        Ok(transform) => NVec3::new(
            transform.translation.x as f64,
            transform.translation.y as f64,
            transform.translation.z as f64,
        ),
        Err(_) => NVec3::zeros(),
    };

    let pending = scenario.scheduler.take();
    if scenario.is_running() || pending {
        scenario.frame(time.delta_seconds_f64(), &viewer);
    }
}

/// Copy body positions and accumulated spin into mesh transforms
fn sync_transforms(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(body) = scenario.world.body(*i) {
            transform.translation = Vec3::new(
                body.position.x as f32,
                body.position.y as f32,
                body.position.z as f32,
            );
            transform.rotation = Quat::from_euler(
                EulerRot::XYZ,
                body.rotation.x as f32,
                body.rotation.y as f32,
                body.rotation.z as f32,
            );
        }
    }
}

/// Immediate-mode overlays: trail markers, velocity arrows, proximity
/// containers. Gizmos redraw from scratch every frame, so expired markers
/// simply stop being drawn.
fn draw_overlays(mut gizmos: Gizmos, scenario: Res<Scenario>, settings: Res<ViewerSettings>) {
    let now = scenario.clock.now_ms();

    for marker in scenario.trails.markers() {
        let opacity = marker.opacity(now) as f32;
        let (color, radius) = match marker.category {
            Category::Star => (Color::srgba(1.0, 0.192, 0.247, opacity), 0.2),
            Category::Planet => (Color::srgba(0.0, 0.435, 0.667, opacity), 0.1),
        };
        let position = Vec3::new(
            marker.position.x as f32,
            marker.position.y as f32,
            marker.position.z as f32,
        );
        gizmos.sphere(position, Quat::IDENTITY, radius, color);
    }

    for body in &scenario.world.bodies {
        let position = Vec3::new(
            body.position.x as f32,
            body.position.y as f32,
            body.position.z as f32,
        );

        if settings.draw_vectors {
            let indicator = velocity_indicator(&body.velocity, &scenario.params);
            let tip = body.position + indicator.direction * indicator.length;
            gizmos.arrow(
                position,
                Vec3::new(tip.x as f32, tip.y as f32, tip.z as f32),
                VECTOR_COLOR,
            );
        }

        if settings.draw_containers {
            gizmos.sphere(
                position,
                Quat::IDENTITY,
                (body.scale * body.container_scale) as f32,
                CONTAINER_COLOR,
            );
        }
    }
}

/// Keep a focused camera glued to its body; restore the default viewpoint
/// once focus detaches
fn follow_focus(
    scenario: Res<Scenario>,
    default_viewpoint: Res<DefaultViewpoint>,
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut last_focus: Local<Option<usize>>,
) {
    let Ok(mut transform) = camera_query.get_single_mut() else {
        return;
    };

    match scenario.focus {
        Some(index) => {
            if let Some(body) = scenario.world.body(index) {
                let target = Vec3::new(
                    body.position.x as f32,
                    body.position.y as f32,
                    body.position.z as f32,
                );
                transform.translation = target + FOCUS_OFFSET;
                transform.look_at(target, Vec3::Y);
            }
            *last_focus = Some(index);
        }
        None => {
            if last_focus.is_some() {
                *transform = default_viewpoint.0;
                *last_focus = None;
            }
        }
    }
}

// =========================================================================
// 3D axes for visual reference
// =========================================================================

fn spawn_axes(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let axis_len = 500.0;
    let axis_thickness = 0.45;

    // X axis: red
    commands.spawn(PbrBundle {
        mesh: meshes.add(Cuboid::new(axis_len, axis_thickness, axis_thickness).mesh()),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 0.0, 0.0),
            unlit: true,
            ..Default::default()
        }),
        transform: Transform::from_xyz(0.0, 0.0, 0.0),
        ..Default::default()
    });

    // Y axis: green
    commands.spawn(PbrBundle {
        mesh: meshes.add(Cuboid::new(axis_thickness, axis_len, axis_thickness).mesh()),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(0.0, 1.0, 0.0),
            unlit: true,
            ..Default::default()
        }),
        transform: Transform::from_xyz(0.0, 0.0, 0.0),
        ..Default::default()
    });

    // Z axis: blue
    commands.spawn(PbrBundle {
        mesh: meshes.add(Cuboid::new(axis_thickness, axis_thickness, axis_len).mesh()),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(0.0, 0.0, 1.0),
            unlit: true,
            ..Default::default()
        }),
        transform: Transform::from_xyz(0.0, 0.0, 0.0),
        ..Default::default()
    });
}
