use anyhow::{ensure, Result};
use boule_physics::transform::to_transform_matrix;
use boule_physics::{BodyDesc, BodyHandle, PhysParams, Scene, Vec3};
use clap::Parser;
use tracing::{debug, info};

/// Speed below which a ball counts as resting.
const REST_SPEED: f32 = 0.05;

#[derive(Parser, Debug, Clone)]
#[command(name = "boule_runtime", about = "Step a demo scene of rolling balls")]
pub struct Args {
    /// Number of steps to simulate
    #[arg(long, default_value_t = 600)]
    pub steps: usize,

    /// Step length in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub dt: f32,

    /// Log positions every N steps (0 disables)
    #[arg(long, default_value_t = 60)]
    pub report_every: usize,

    /// Launch speed of the thrown ball
    #[arg(long, default_value_t = 6.0)]
    pub launch_speed: f32,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            steps: 600,
            dt: 1.0 / 60.0,
            report_every: 60,
            launch_speed: 6.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Summary {
    pub steps: usize,
    pub dynamic: usize,
    pub resting: usize,
    /// Distance from the thrown ball to the target ball at the end.
    pub distance_to_target: f32,
}

struct DemoScene {
    scene: Scene,
    target: BodyHandle,
    thrown: BodyHandle,
}

fn build_scene(launch_speed: f32) -> Result<DemoScene> {
    let mut scene = Scene::with_params(PhysParams::default())?;

    // ground: one very large immovable sphere whose top sits at z = 0
    scene.add_fixed_sphere(Vec3::new(0.0, 0.0, -1000.0), 1000.0, 0.5, 0.5);

    let target = scene.add_sphere(
        BodyDesc::ball(Vec3::new(6.0, 0.0, 0.4), 0.4)
            .with_mass(0.01)
            .with_material(0.1, 1.0),
    );
    let thrown = scene.add_sphere(
        BodyDesc::ball(Vec3::new(0.0, 0.0, 1.5), 0.5)
            .with_mass(1.0 / 3.0)
            .with_material(0.1, 0.5)
            .with_velocity(Vec3::new(launch_speed, 0.0, 2.0)),
    );

    Ok(DemoScene {
        scene,
        target,
        thrown,
    })
}

/// Model matrices for every body, in handle order, as a renderer would
/// upload them for one frame.
fn frame_matrices(scene: &Scene) -> Vec<[[f32; 4]; 4]> {
    scene.transforms().iter().map(to_transform_matrix).collect()
}

pub fn run(args: &Args) -> Result<Summary> {
    ensure!(args.dt.is_finite() && args.dt > 0.0, "dt must be positive, got {}", args.dt);

    let DemoScene {
        mut scene,
        target,
        thrown,
    } = build_scene(args.launch_speed)?;

    info!(
        "Starting simulation loop for {} steps with dt = {}...",
        args.steps, args.dt
    );
    for i in 0..args.steps {
        scene.step(args.dt);

        if args.report_every > 0 && (i + 1) % args.report_every == 0 {
            let ball = scene.try_body(thrown)?;
            info!(
                step = i + 1,
                contacts = scene.last_contact_count(),
                "thrown ball at {:?}, speed {:.3}",
                ball.position,
                ball.linear_velocity.length()
            );
            debug!(step = i + 1, matrices = ?frame_matrices(&scene), "frame");
        }
    }

    let dynamic: Vec<_> = scene
        .bodies()
        .iter()
        .filter(|body| !body.has_infinite_mass())
        .collect();
    let resting = dynamic.iter().filter(|body| body.is_resting(REST_SPEED)).count();
    let distance_to_target =
        (scene.try_body(thrown)?.position - scene.try_body(target)?.position).length();

    Ok(Summary {
        steps: args.steps,
        dynamic: dynamic.len(),
        resting,
        distance_to_target,
    })
}
