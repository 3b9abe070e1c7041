use super::*;

#[test]
fn default_config_is_valid() {
    let cfg = RenderConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.canvas.width, 640);
    assert_eq!(cfg.canvas.height, 360);
    assert_eq!(cfg.fps.num, 30);
    assert_eq!(cfg.frames, 180);
    assert_eq!(cfg.scene.iterations, 4);
}

#[test]
fn validate_rejects_degenerate_values() {
    let mut cfg = RenderConfig::default();
    cfg.canvas.width = 0;
    assert!(matches!(
        cfg.validate(),
        Err(MarchyteError::Validation(_))
    ));

    let mut cfg = RenderConfig::default();
    cfg.frames = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = RenderConfig::default();
    cfg.scene.iterations = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = RenderConfig::default();
    cfg.scene.hit_epsilon = f32::NAN;
    assert!(cfg.validate().is_err());

    let mut cfg = RenderConfig::default();
    cfg.scene.max_distance = f32::INFINITY;
    assert!(cfg.validate().is_err());
}

#[test]
fn json_roundtrip_preserves_config() {
    let cfg = RenderConfig::default();
    let text = serde_json::to_string(&cfg).unwrap();
    let back: RenderConfig = serde_json::from_str(&text).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let cfg: RenderConfig =
        serde_json::from_str(r#"{"canvas": {"width": 16, "height": 9}, "frames": 2}"#).unwrap();
    assert_eq!(cfg.canvas.width, 16);
    assert_eq!(cfg.canvas.height, 9);
    assert_eq!(cfg.frames, 2);
    assert_eq!(cfg.fps, Fps { num: 30, den: 1 });
    assert_eq!(cfg.scene, SceneConfig::default());
}
