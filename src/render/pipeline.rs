use std::path::PathBuf;

use rayon::prelude::*;

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::encode::y4m::{Y4mSink, Y4mSinkOpts};
use crate::encode::ycbcr::{FrameYCbCr, to_ycbcr};
use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{MarchyteError, MarchyteResult};
use crate::render::shade::shade;
use crate::scene::config::RenderConfig;
use crate::scene::distance::DistanceField;

/// How often frame-progress events are emitted, in frames.
const PROGRESS_EVERY: u64 = 10;

/// Threading controls for frame rendering.
///
/// The default is sequential; parallelism is opt-in per call.
#[derive(Clone, Debug, Default)]
pub struct RenderThreading {
    /// Enable scanline-parallel rendering when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

/// Aggregated rendering counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames rendered and pushed to the sink.
    pub frames_rendered: u64,
}

/// Options for [`render_to_y4m`].
#[derive(Clone, Debug)]
pub struct RenderToY4mOpts {
    /// Output `.y4m` file path.
    pub out_path: PathBuf,
    /// Overwrite output file if it already exists.
    pub overwrite: bool,
    /// Threading controls.
    pub threading: RenderThreading,
}

impl RenderToY4mOpts {
    /// Create options for outputting a Y4M stream to `out_path`.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            threading: RenderThreading::default(),
        }
    }
}

/// Render a single frame into freshly allocated planes.
///
/// This is the primary one-shot API for producing pixels. Loops should
/// prefer [`render_frame_into`], which reuses caller-owned plane buffers.
pub fn render_frame(
    cfg: &RenderConfig,
    frame: FrameIndex,
    threading: &RenderThreading,
) -> MarchyteResult<FrameYCbCr> {
    cfg.validate()?;
    let field = DistanceField::new(&cfg.scene);
    let mut out = FrameYCbCr::new(cfg.canvas);
    let pool = build_pool(threading)?;
    fill_frame(cfg, &field, frame, pool.as_ref(), &mut out);
    Ok(out)
}

/// Render a single frame into caller-owned plane buffers.
///
/// The buffers are reused as-is; no per-frame allocation happens here.
pub fn render_frame_into(
    cfg: &RenderConfig,
    field: &DistanceField,
    frame: FrameIndex,
    threading: &RenderThreading,
    out: &mut FrameYCbCr,
) -> MarchyteResult<()> {
    cfg.validate()?;
    if out.width != cfg.canvas.width || out.height != cfg.canvas.height {
        return Err(MarchyteError::validation(format!(
            "frame buffer size mismatch: got {}x{}, expected {}x{}",
            out.width, out.height, cfg.canvas.width, cfg.canvas.height
        )));
    }
    let pool = build_pool(threading)?;
    fill_frame(cfg, field, frame, pool.as_ref(), out);
    Ok(())
}

/// Render a range of frames (inclusive start, exclusive end).
pub fn render_frames(
    cfg: &RenderConfig,
    range: FrameRange,
    threading: &RenderThreading,
) -> MarchyteResult<Vec<FrameYCbCr>> {
    cfg.validate()?;
    let field = DistanceField::new(&cfg.scene);
    let pool = build_pool(threading)?;

    let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);
    for f in range.start.0..range.end.0 {
        let mut frame = FrameYCbCr::new(cfg.canvas);
        fill_frame(cfg, &field, FrameIndex(f), pool.as_ref(), &mut frame);
        out.push(frame);
    }
    Ok(out)
}

/// Render one frame as tightly packed RGB8 bytes.
///
/// Preview path used by PNG output; the Y4M pipeline goes through
/// [`render_frame`] and friends instead.
pub fn render_frame_rgb8(cfg: &RenderConfig, frame: FrameIndex) -> MarchyteResult<Vec<u8>> {
    cfg.validate()?;
    let field = DistanceField::new(&cfg.scene);
    let canvas = cfg.canvas;
    let t = cfg.fps.frames_to_secs(frame.0) as f32;

    let mut data = vec![0u8; canvas.plane_len() * 3];
    for y in 0..canvas.height {
        for x in 0..canvas.width {
            let c = shade(&field, &cfg.scene, canvas, x, y, t);
            let i = ((y as usize) * (canvas.width as usize) + x as usize) * 3;
            data[i] = (c.x * 255.0) as u8;
            data[i + 1] = (c.y * 255.0) as u8;
            data[i + 2] = (c.z * 255.0) as u8;
        }
    }
    Ok(data)
}

/// Render the configured animation `[0, cfg.frames)` into `sink`.
///
/// Frames are pushed in strictly increasing timeline order; the sink's
/// `begin`/`end` lifecycle brackets the run. One set of plane buffers is
/// reused across all frames.
#[tracing::instrument(skip(cfg, sink, threading), fields(frames = cfg.frames))]
pub fn render_to_sink(
    cfg: &RenderConfig,
    sink: &mut dyn FrameSink,
    threading: &RenderThreading,
) -> MarchyteResult<RenderStats> {
    cfg.validate()?;
    let range = FrameRange::new(FrameIndex(0), FrameIndex(cfg.frames))?;

    sink.begin(SinkConfig {
        canvas: cfg.canvas,
        fps: cfg.fps,
    })?;

    let field = DistanceField::new(&cfg.scene);
    let pool = build_pool(threading)?;
    let mut frame = FrameYCbCr::new(cfg.canvas);
    let mut stats = RenderStats::default();

    for f in range.start.0..range.end.0 {
        fill_frame(cfg, &field, FrameIndex(f), pool.as_ref(), &mut frame);
        sink.push_frame(FrameIndex(f), &frame)?;
        stats.frames_rendered += 1;

        if stats.frames_rendered.is_multiple_of(PROGRESS_EVERY) {
            let percent = stats.frames_rendered * 100 / range.len_frames();
            tracing::info!(
                rendered = stats.frames_rendered,
                total = range.len_frames(),
                percent,
                "rendering"
            );
        }
    }

    sink.end()?;
    Ok(stats)
}

/// Render the configured animation into a `.y4m` file.
pub fn render_to_y4m(cfg: &RenderConfig, opts: &RenderToY4mOpts) -> MarchyteResult<RenderStats> {
    let mut sink = Y4mSink::new(Y4mSinkOpts {
        out_path: opts.out_path.clone(),
        overwrite: opts.overwrite,
    });
    render_to_sink(cfg, &mut sink, &opts.threading)
}

fn build_pool(threading: &RenderThreading) -> MarchyteResult<Option<rayon::ThreadPool>> {
    if !threading.parallel {
        return Ok(None);
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = threading.threads {
        if threads == 0 {
            return Err(MarchyteError::validation("threads must be > 0 when set"));
        }
        builder = builder.num_threads(threads);
    }
    builder
        .build()
        .map(Some)
        .map_err(|e| MarchyteError::render(format!("failed to build worker pool: {e}")))
}

fn fill_frame(
    cfg: &RenderConfig,
    field: &DistanceField,
    frame: FrameIndex,
    pool: Option<&rayon::ThreadPool>,
    out: &mut FrameYCbCr,
) {
    let t = cfg.fps.frames_to_secs(frame.0) as f32;
    match pool {
        Some(pool) => pool.install(|| fill_rows_parallel(cfg, field, t, out)),
        None => fill_rows_sequential(cfg, field, t, out),
    }
}

fn fill_rows_sequential(cfg: &RenderConfig, field: &DistanceField, t: f32, out: &mut FrameYCbCr) {
    let canvas = cfg.canvas;
    for y in 0..canvas.height {
        for x in 0..canvas.width {
            out.put(x, y, to_ycbcr(shade(field, &cfg.scene, canvas, x, y, t)));
        }
    }
}

/// Scanline-parallel variant of [`fill_rows_sequential`].
///
/// Rows are independent because every field evaluation returns its color
/// explicitly; the split into three plane row iterators keeps each worker on
/// disjoint bytes.
fn fill_rows_parallel(cfg: &RenderConfig, field: &DistanceField, t: f32, out: &mut FrameYCbCr) {
    let canvas = cfg.canvas;
    let width = canvas.width as usize;

    out.y
        .par_chunks_exact_mut(width)
        .zip_eq(out.cb.par_chunks_exact_mut(width))
        .zip_eq(out.cr.par_chunks_exact_mut(width))
        .enumerate()
        .for_each(|(row, ((row_y, row_cb), row_cr))| {
            for x in 0..canvas.width {
                let px = to_ycbcr(shade(field, &cfg.scene, canvas, x, row as u32, t));
                row_y[x as usize] = px.y;
                row_cb[x as usize] = px.cb;
                row_cr[x as usize] = px.cr;
            }
        });
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
