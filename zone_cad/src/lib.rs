//! Core library for editable zone boundaries.
//!
//! A zone is the footprint covered by circles added to and carved out of it.
//! [`editor::ZoneEditor`] keeps the working samples and rebuilds a closed
//! boundary from them with a convex hull, a concave refinement, and an
//! elevation recovery pass.

pub mod config;
pub mod editor;
pub mod elevation;
pub mod geometry;
pub mod hull;
pub mod io;

pub use config::{ConcavityParams, ZoneConfig};
pub use editor::{BoundarySink, EditorState, RenderHints, ZoneEditor};
pub use geometry::{Point, Point3};
