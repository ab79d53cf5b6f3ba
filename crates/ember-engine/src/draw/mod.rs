//! CPU-side draw list: batched vertex accumulation and tessellation.
//!
//! Everything in this module is GPU-agnostic so it can be exercised without
//! a device; the render module maps topologies to pipelines.

mod list;
mod tessellate;
mod topology;
mod vertex;
mod winding;

pub use list::{DrawList, MAX_VERTICES};
pub use tessellate::{CircleCache, MIN_CIRCLE_SEGMENTS};
pub use topology::{Batch, Topology};
pub use vertex::Vertex;
pub use winding::clockwise_order;
