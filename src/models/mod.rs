/*
MIT License

Copyright (c) 2025 Ameyanagi

Model formulations adapted from published SasView marketplace kernels.
Copyright of the original models remains with their respective authors.
*/

//! Form-factor model kernels
//!
//! One file per geometry. Every model is a plain parameter struct with
//! scalar `iq` (1-D, orientation averaged) and, for the anisometric shapes,
//! `iqxy` (2-D, fixed orientation) evaluators. Intensities are in 1/cm for
//! SLD inputs in 1e-6/Å² and lengths in Å, except reflectivity which is a
//! dimensionless |r|².

pub mod bicelle;
pub mod core_double_shell_sphere_cylinders;
pub mod core_shell_cuboid;
pub mod core_shell_ellipsoid;
pub mod core_shell_sphere_cylinder;
pub mod errors;
pub mod magnetic_chains;
pub mod magnetic_langevin;
pub mod morp_ellipsoid;
pub mod nanodisc;
pub mod reflectivity;
pub mod star_polymer;

pub use bicelle::FiveLayerBicelle;
pub use core_double_shell_sphere_cylinders::CoreDoubleShellSphereCylinders;
pub use core_shell_cuboid::CoreShellCuboid;
pub use core_shell_ellipsoid::{solve_shell_thickness, CoreShellEllipsoidTied};
pub use core_shell_sphere_cylinder::CoreShellSphereCylinder;
pub use errors::{ModelError, Result};
pub use magnetic_chains::{MagneticOrientation, OrientedMagneticChains};
pub use magnetic_langevin::{MagneticLangevinSpheres, SpinChannelWeights};
pub use morp_ellipsoid::{MorpEllipsoid, MorpMoments};
pub use nanodisc::Nanodisc;
pub use reflectivity::{reflectivity, FourLayerStack, Slab, Substrate};
pub use star_polymer::StarPolymer;
