#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::float_cmp,
    clippy::too_many_arguments
)]
//! # Boule Physics
//!
//! A small rigid-body step with continuous collision detection for sphere
//! bodies.
//!
//! Each call to [`Scene::step`] applies gravity as an impulse, predicts the
//! time of impact of every body pair within the frame, resolves contacts in
//! impact order (advancing every body to each impact first), and integrates
//! the remainder of the frame. Contacts respond with restitution and Coulomb
//! friction impulses that include angular effects through the inertia
//! tensor.
//!
//! ## Key Components
//!
//! -   **Math:** `glam`'s [`Vec3`], [`Quat`] and [`Mat3`], re-exported from
//!     the [`math`] module with the orientation update helpers.
//! -   **Bodies:** [`Body`] owns its [`Shape`]; [`BodyDesc`] is a convenient
//!     way to describe initial state.
//! -   **Collision:** [`collision::intersect`] predicts contacts and
//!     [`collision::resolve_contact`] applies impulses.
//! -   **Simulation:** [`Scene`] owns the bodies and runs the step;
//!     [`BodyTransform`] snapshots feed a renderer.
//!
//! ## Usage
//!
//! ```rust
//! use boule_physics::{BodyDesc, Scene, Vec3};
//!
//! let mut scene = Scene::new();
//! scene.add_fixed_sphere(Vec3::new(0.0, 0.0, -1000.0), 1000.0, 0.5, 0.5);
//! let ball = scene.add_sphere(BodyDesc::ball(Vec3::new(0.0, 0.0, 5.0), 0.5));
//!
//! scene.run(1.0 / 60.0, 120);
//! let z = scene.body(ball).unwrap().position.z;
//! assert!(z > 0.0);
//! ```

pub mod body;
pub mod builder;
pub mod collision;
pub mod error;
pub mod integrator;
pub mod math;
pub mod shapes;
pub mod simulation;
pub mod transform;
pub mod types;

pub use body::Body;
pub use builder::BodyDesc;
pub use collision::Contact;
pub use error::PhysicsError;
pub use math::{Mat3, Quat, Vec3};
pub use shapes::{Shape, ShapeType, Sphere};
pub use simulation::Scene;
pub use transform::BodyTransform;
pub use types::{BodyHandle, PhysParams, MAX_ANGULAR_SPEED};
