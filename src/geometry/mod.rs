//! Geometry module for vector tile features
//!
//! Points and vectors are `glam` types. This module adds the feature-level
//! aliases (lines, polygons), line styling options and the 2D helpers the
//! builders share.
//!
//! # Submodules
//! - `types` - Point, line and polygon aliases plus line styling options
//! - `math` - Perpendiculars, miter vectors and value remapping
//! - `bounds` - Axis-aligned bounding box used for texture mapping

mod types;
mod math;
mod bounds;

pub use glam::{Vec2, Vec3};

pub use types::{
    Point2,
    Point3,
    Line,
    Polygon,
    LineCap,
    LineJoin,
    PolyLineOptions,
};

pub use math::{
    perp2d,
    segment_normal,
    miter_vector,
    map_value,
};

pub use bounds::Rectangle;
