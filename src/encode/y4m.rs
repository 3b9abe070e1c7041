use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::encode::ycbcr::FrameYCbCr;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{MarchyteError, MarchyteResult};

/// Options for [`Y4mSink`] output.
#[derive(Clone, Debug)]
pub struct Y4mSinkOpts {
    /// Output `.y4m` file path.
    pub out_path: PathBuf,
    /// Overwrite output file if it already exists.
    pub overwrite: bool,
}

impl Y4mSinkOpts {
    /// Create options for outputting a Y4M stream to `out_path`.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
        }
    }
}

/// Sink that writes an uncompressed YUV4MPEG2 stream (4:4:4 planar) to a file.
///
/// The container is a single text header line followed by, per frame, a
/// `FRAME` marker line and three contiguous raw planes (luma, Cb, Cr).
/// There are no frame-level length fields; boundaries are implicit in the
/// fixed plane size.
pub struct Y4mSink {
    opts: Y4mSinkOpts,
    out: Option<BufWriter<File>>,
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
}

impl Y4mSink {
    /// Create a new sink that writes to the configured path on `begin`.
    pub fn new(opts: Y4mSinkOpts) -> Self {
        Self {
            opts,
            out: None,
            cfg: None,
            last_idx: None,
        }
    }
}

impl FrameSink for Y4mSink {
    fn begin(&mut self, cfg: SinkConfig) -> MarchyteResult<()> {
        if cfg.fps.num == 0 || cfg.fps.den == 0 {
            return Err(MarchyteError::validation("fps must be non-zero"));
        }
        if cfg.canvas.width == 0 || cfg.canvas.height == 0 {
            return Err(MarchyteError::validation(
                "y4m sink width/height must be non-zero",
            ));
        }

        ensure_parent_dir(&self.opts.out_path)?;
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(MarchyteError::validation(format!(
                "output file '{}' already exists",
                self.opts.out_path.display()
            )));
        }

        let file = File::create(&self.opts.out_path).map_err(|e| {
            MarchyteError::encode(format!(
                "failed to create output file '{}': {e}",
                self.opts.out_path.display()
            ))
        })?;
        let mut out = BufWriter::new(file);
        write_header(&mut out, cfg)
            .map_err(|e| MarchyteError::encode(format!("failed to write y4m header: {e}")))?;

        self.out = Some(out);
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameYCbCr) -> MarchyteResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| MarchyteError::encode("y4m sink not started"))?;
        if let Some(last) = self.last_idx
            && idx.0 <= last.0
        {
            return Err(MarchyteError::encode(
                "y4m sink received out-of-order frame index",
            ));
        }
        self.last_idx = Some(idx);

        if frame.width != cfg.canvas.width || frame.height != cfg.canvas.height {
            return Err(MarchyteError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, cfg.canvas.width, cfg.canvas.height
            )));
        }

        let Some(out) = self.out.as_mut() else {
            return Err(MarchyteError::encode("y4m sink is already finalized"));
        };
        write_frame(out, frame)
            .map_err(|e| MarchyteError::encode(format!("failed to write y4m frame: {e}")))
    }

    fn end(&mut self) -> MarchyteResult<()> {
        let mut out = self
            .out
            .take()
            .ok_or_else(|| MarchyteError::encode("y4m sink not started"))?;
        out.flush()
            .map_err(|e| MarchyteError::encode(format!("failed to flush y4m output: {e}")))?;
        self.cfg = None;
        Ok(())
    }
}

/// Write the stream header: frame geometry, rate, progressive scan, square
/// pixels, 4:4:4 chroma.
fn write_header<W: Write>(out: &mut W, cfg: SinkConfig) -> std::io::Result<()> {
    writeln!(
        out,
        "YUV4MPEG2 W{} H{} F{}:{} Ip A1:1 C444",
        cfg.canvas.width, cfg.canvas.height, cfg.fps.num, cfg.fps.den
    )
}

/// Write one frame: marker line, then the three planes back to back.
fn write_frame<W: Write>(out: &mut W, frame: &FrameYCbCr) -> std::io::Result<()> {
    out.write_all(b"FRAME\n")?;
    out.write_all(&frame.y)?;
    out.write_all(&frame.cb)?;
    out.write_all(&frame.cr)
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> MarchyteResult<()> {
    if let Some(parent) = path.parent() {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/y4m.rs"]
mod tests;
