use boule_physics::{BodyDesc, BodyHandle, BodyTransform, PhysParams, PhysicsError, Scene, Vec3};

#[test]
fn add_and_lookup_bodies() {
    let mut scene = Scene::new();
    assert!(scene.is_empty());
    let idx = scene.add_sphere(BodyDesc::ball(Vec3::new(1.0, 2.0, 3.0), 0.5));
    assert_eq!(idx, BodyHandle(0));
    assert_eq!(scene.len(), 1);
    assert_eq!(scene.try_body(idx).unwrap().position, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(
        scene.try_body(BodyHandle(7)).unwrap_err(),
        PhysicsError::UnknownBody(BodyHandle(7))
    );
}

#[test]
fn free_fall_matches_impulse_integration() -> anyhow::Result<()> {
    let mut scene = Scene::with_params(PhysParams::default())?;
    let ball = scene.add_sphere(BodyDesc::ball(Vec3::new(0.0, 0.0, 100.0), 1.0));
    let dt = 0.01_f32;
    let steps = 100_usize;
    scene.run(dt, steps);

    // velocity is updated before position, so each step falls g*dt*dt*k
    let n = steps as f32;
    let expected = 100.0 - 10.0 * dt * dt * n * (n + 1.0) / 2.0;
    let z = scene.try_body(ball)?.position.z;
    assert!((z - expected).abs() < 1e-2, "z = {z}, expected {expected}");
    assert_eq!(scene.step_count(), 100);
    Ok(())
}

#[test]
fn invalid_params_are_rejected() {
    let params = PhysParams {
        gravity: Vec3::new(f32::INFINITY, 0.0, 0.0),
        ..PhysParams::default()
    };
    assert!(matches!(Scene::with_params(params), Err(PhysicsError::InvalidParams(_))));
}

#[test]
fn clear_and_reset_release_bodies() {
    let mut scene = Scene::new();
    scene.add_sphere(BodyDesc::ball(Vec3::ZERO, 1.0));
    scene.add_sphere(BodyDesc::ball(Vec3::new(0.0, 0.0, 5.0), 1.0));
    scene.step(0.1);
    scene.clear();
    assert!(scene.is_empty());
    assert_eq!(scene.step_count(), 0);

    scene.reset_with(|s| {
        s.add_fixed_sphere(Vec3::new(0.0, 0.0, -1000.0), 1000.0, 0.99, 0.5);
        s.add_sphere(BodyDesc::ball(Vec3::new(0.0, 0.0, 1.2), 1.0));
    });
    assert_eq!(scene.len(), 2);
    assert_eq!(scene.handles().collect::<Vec<_>>(), vec![BodyHandle(0), BodyHandle(1)]);
}

#[test]
fn transforms_are_plain_bytes_for_rendering() {
    let mut scene = Scene::new();
    scene.add_sphere(BodyDesc::ball(Vec3::new(1.0, 2.0, 3.0), 1.0));
    scene.add_sphere(BodyDesc::ball(Vec3::new(4.0, 5.0, 6.0), 1.0));
    let transforms = scene.transforms();
    let bytes: &[u8] = bytemuck::cast_slice(&transforms);
    assert_eq!(bytes.len(), 2 * std::mem::size_of::<BodyTransform>());
    assert_eq!(std::mem::size_of::<BodyTransform>(), 8 * 4);
    assert_eq!(transforms[1].position, Vec3::new(4.0, 5.0, 6.0));
    assert_eq!(transforms[1].radius, 1.0);
}

#[test]
fn empty_scene_steps_cleanly() {
    let mut scene = Scene::new();
    scene.run(0.016, 10);
    assert_eq!(scene.last_contact_count(), 0);
    assert_eq!(scene.step_count(), 10);
}
