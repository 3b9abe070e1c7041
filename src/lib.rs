//! Marchyte is a CPU renderer for an animated Mandelbulb, encoded as Y4M video.
//!
//! The scene is a single hard-coded 8th-power Mandelbulb. Each frame is produced
//! by sphere tracing a signed-distance field per pixel and quantizing the shaded
//! color into three planar 8-bit YCbCr buffers.
//!
//! # Pipeline overview
//!
//! 1. **Sample**: [`DistanceField::sample`] estimates distance to the fractal
//!    surface and gathers an orbit trap for coloring.
//! 2. **March**: [`march`] advances a camera ray through the field until it hits
//!    the surface or exceeds its travel budget.
//! 3. **Shade**: [`shade`] builds the animated camera ray for one pixel, lights
//!    the hit point, and returns linear color in `[0, 1]`.
//! 4. **Encode**: [`to_ycbcr`] quantizes linear color into [`FrameYCbCr`] planes;
//!    a [`FrameSink`] such as [`Y4mSink`] consumes whole frames in timeline order.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: the same config and frame index produce
//!   byte-identical planes, sequentially or in parallel.
//! - **No shared mutable state**: every field evaluation returns its orbit-trap
//!   color explicitly, which is what makes scanline parallelism safe.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod encode;
mod foundation;
mod render;
mod scene;

pub use encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use encode::y4m::{Y4mSink, Y4mSinkOpts, ensure_parent_dir};
pub use encode::ycbcr::{FrameYCbCr, Ycbcr, to_ycbcr};
pub use foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Vec2, Vec3};
pub use foundation::error::{MarchyteError, MarchyteResult};
pub use render::march::{MarchOutcome, march};
pub use render::pipeline::{
    RenderStats, RenderThreading, RenderToY4mOpts, render_frame, render_frame_into,
    render_frame_rgb8, render_frames, render_to_sink, render_to_y4m,
};
pub use render::shade::shade;
pub use scene::config::{RenderConfig, SceneConfig};
pub use scene::distance::{DistanceField, DistanceSample};
pub use scene::surface::SurfaceSample;
