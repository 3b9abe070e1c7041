use super::*;

use crate::foundation::core::{Canvas, Fps};

fn cfg_16x9() -> SinkConfig {
    SinkConfig {
        canvas: Canvas {
            width: 16,
            height: 9,
        },
        fps: Fps { num: 30, den: 1 },
    }
}

#[test]
fn header_line_matches_the_container_grammar() {
    let mut out = Vec::new();
    write_header(&mut out, cfg_16x9()).unwrap();
    assert_eq!(out, b"YUV4MPEG2 W16 H9 F30:1 Ip A1:1 C444\n");
}

#[test]
fn header_carries_rational_frame_rates() {
    let mut out = Vec::new();
    let cfg = SinkConfig {
        canvas: Canvas {
            width: 640,
            height: 360,
        },
        fps: Fps {
            num: 30000,
            den: 1001,
        },
    };
    write_header(&mut out, cfg).unwrap();
    assert_eq!(out, b"YUV4MPEG2 W640 H360 F30000:1001 Ip A1:1 C444\n");
}

#[test]
fn frame_bytes_are_marker_then_three_contiguous_planes() {
    let canvas = Canvas {
        width: 2,
        height: 2,
    };
    let mut frame = FrameYCbCr::new(canvas);
    frame.y.copy_from_slice(&[1, 2, 3, 4]);
    frame.cb.copy_from_slice(&[5, 6, 7, 8]);
    frame.cr.copy_from_slice(&[9, 10, 11, 12]);

    let mut out = Vec::new();
    write_frame(&mut out, &frame).unwrap();

    let mut expected = b"FRAME\n".to_vec();
    expected.extend([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
    assert_eq!(out, expected);
}
