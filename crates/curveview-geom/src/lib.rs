//! Numeric core of **curveview**.
//!
//! Samples parametric cubic curves into polylines and maps a model-coordinate
//! region of interest onto logical device space (`[-1, 1]²`), optionally
//! preserving the viewport aspect ratio.
//!
//! This crate has no GPU or windowing dependencies so the math can be tested
//! on its own.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`sampler`] | `Cubic`, `ParamRange`, `sample` |
//! | [`mapper`] | `linear_map`, `match_aspect_ratio`, `compute_projection` |
//! | [`bounds`] | `Point`, `BoundingBox`, `Extent`, `Region` |
//! | [`curve`] | `CurveDef`, `Curve` |
//! | [`palette`] | `Rgb`, `PALETTE`, `ColorAssigner` |
//! | [`view`] | `ViewState` |
//!
//! # Quick start
//!
//! ```rust
//! use curveview_geom::{ColorAssigner, Cubic, Curve, CurveDef, ParamRange, Region, ViewState};
//!
//! let def = CurveDef::new(
//!     Cubic::new([0.0, 1.0, 0.0, 0.0]),
//!     Cubic::new([0.0, 0.0, 1.0, 0.0]),
//!     ParamRange::new(0.0, 1.0, 5).unwrap(),
//! );
//! let mut colors = ColorAssigner::new();
//! let curve = Curve::new(def, &mut colors).unwrap();
//!
//! let mut view = ViewState::default();
//! view.set_region(Region::framing(curve.bounding_box()).unwrap());
//! assert_eq!(view.projection(1.0).unwrap().to_uniform(), [2.0, -1.0, 2.0, -1.0]);
//! ```

pub mod bounds;
pub mod curve;
pub mod error;
pub mod mapper;
pub mod palette;
pub mod sampler;
pub mod view;

pub use bounds::{BoundingBox, Extent, Point, Region};
pub use curve::{Curve, CurveDef};
pub use error::GeomError;
pub use mapper::{compute_projection, linear_map, match_aspect_ratio, Projection, ScaleTrans};
pub use palette::{ColorAssigner, Rgb, PALETTE};
pub use sampler::{sample, Cubic, ParamRange, SampledCurve};
pub use view::ViewState;
