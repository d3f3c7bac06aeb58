//! Camera pose and framing.
//!
//! A [`Camera`] is a plain value describing eye, target and projection. The
//! [`fit_camera`] function derives one that frames a point cloud.

mod fit;
mod pose;

pub use fit::fit_camera;
pub use pose::Camera;
