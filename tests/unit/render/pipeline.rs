use super::*;

use crate::encode::sink::InMemorySink;
use crate::foundation::core::Canvas;

fn tiny_config() -> RenderConfig {
    RenderConfig {
        canvas: Canvas {
            width: 16,
            height: 9,
        },
        frames: 3,
        ..RenderConfig::default()
    }
}

#[test]
fn render_frame_into_rejects_mismatched_buffers() {
    let cfg = tiny_config();
    let field = DistanceField::new(&cfg.scene);
    let mut wrong = FrameYCbCr::new(Canvas {
        width: 8,
        height: 8,
    });
    let err = render_frame_into(
        &cfg,
        &field,
        FrameIndex(0),
        &RenderThreading::default(),
        &mut wrong,
    )
    .unwrap_err();
    assert!(matches!(err, MarchyteError::Validation(_)));
}

#[test]
fn render_frames_covers_the_requested_range() {
    let cfg = tiny_config();
    let range = FrameRange::new(FrameIndex(1), FrameIndex(3)).unwrap();
    let frames = render_frames(&cfg, range, &RenderThreading::default()).unwrap();
    assert_eq!(frames.len(), 2);
    for frame in &frames {
        assert_eq!(frame.plane_len(), cfg.canvas.plane_len());
    }
}

#[test]
fn render_to_sink_pushes_every_frame_in_order() {
    let cfg = tiny_config();
    let mut sink = InMemorySink::new();
    let stats = render_to_sink(&cfg, &mut sink, &RenderThreading::default()).unwrap();

    assert_eq!(stats.frames_rendered, cfg.frames);
    let frames = sink.frames();
    assert_eq!(frames.len(), cfg.frames as usize);
    for (i, (idx, frame)) in frames.iter().enumerate() {
        assert_eq!(idx.0, i as u64);
        assert_eq!(frame.width, cfg.canvas.width);
        assert_eq!(frame.height, cfg.canvas.height);
    }

    let captured = sink.config().expect("sink saw begin");
    assert_eq!(captured.canvas, cfg.canvas);
    assert_eq!(captured.fps, cfg.fps);
}

#[test]
fn render_frame_rgb8_is_tightly_packed() {
    let cfg = tiny_config();
    let rgb = render_frame_rgb8(&cfg, FrameIndex(0)).unwrap();
    assert_eq!(rgb.len(), cfg.canvas.plane_len() * 3);
}

#[test]
fn zero_worker_threads_is_rejected() {
    let cfg = tiny_config();
    let threading = RenderThreading {
        parallel: true,
        threads: Some(0),
    };
    assert!(render_frame(&cfg, FrameIndex(0), &threading).is_err());
}
