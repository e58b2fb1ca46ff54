use celestial_core::{ConfigError, SceneConfig, SceneController, ShapeKind};

#[test]
fn rejects_bad_shapes_and_ranges() {
    let mut c = SceneConfig::heart();
    c.shape = ShapeKind::Heart { scale: 0.0 };
    assert!(matches!(c.validate(), Err(ConfigError::NotPositive { .. })));

    let mut c = SceneConfig::heart();
    c.scatter_band = (0.9, 0.2);
    assert!(matches!(
        c.validate(),
        Err(ConfigError::BadRange { name: "scatter band", .. })
    ));

    let mut c = SceneConfig::christmas();
    c.camera.fov_deg = 180.0;
    assert_eq!(c.validate(), Err(ConfigError::FieldOfView(180.0)));

    let mut c = SceneConfig::heart();
    c.camera.zoom_max = 4.0;
    assert!(matches!(c.validate(), Err(ConfigError::BadRange { name: "zoom", .. })));

    let mut c = SceneConfig::heart();
    c.converge_speed = f32::NAN;
    assert!(c.validate().is_err());
}

#[test]
fn errors_read_well() {
    let err = ConfigError::NotPositive {
        name: "camera radius",
        value: -1.0,
    };
    assert!(err.to_string().contains("camera radius"));
}

#[test]
fn controller_construction_validates() {
    let mut c = SceneConfig::heart();
    c.particle_count = 200;
    c.stars.count = 0;
    assert!(SceneController::headless(c.clone()).is_ok());
    c.disperse_speed = 0.0;
    assert!(SceneController::headless(c).is_err());
}

#[test]
fn christmas_preset_has_an_intro_and_heart_does_not() {
    assert!(SceneConfig::christmas().intro.is_some());
    assert!(SceneConfig::heart().intro.is_none());
    assert_eq!(SceneConfig::default().particle_count, 20_000);
}

#[test]
fn presets_validate() {
    assert_eq!(SceneConfig::heart().validate(), Ok(()));
    assert_eq!(SceneConfig::christmas().validate(), Ok(()));
    assert_eq!(SceneConfig::heart().mobile().validate(), Ok(()));
    assert_eq!(SceneConfig::christmas().mobile().validate(), Ok(()));
}

#[test]
fn mobile_reduces_particle_budget() {
    let desktop = SceneConfig::heart();
    let mobile = SceneConfig::heart().mobile();
    assert!(mobile.particle_count < desktop.particle_count);
    assert!(mobile.max_pixel_ratio <= 1.5);
}

#[test]
fn heart_colour_fades_over_three_units() {
    assert_eq!(SceneConfig::heart().palette.gradient_radius, 3.0);
    let mut c = SceneConfig::heart();
    c.palette.gradient_radius = 0.0;
    assert!(matches!(
        c.validate(),
        Err(ConfigError::NotPositive {
            name: "gradient radius",
            ..
        })
    ));
}
