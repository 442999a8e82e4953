//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Integer positions and velocities only
//! - No rendering or platform dependencies beyond the framebuffer it draws to

pub mod body;
pub mod collision;
pub mod game;

pub use body::{approach, Body, Response};
pub use game::{Game, Phase};
