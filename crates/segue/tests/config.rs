//! Integration tests for loading button configuration from disk.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use segue::render::{AdvanceMetrics, Color, FontFamily};
use segue::runtime::{MainLoop, ManualClock};
use segue::{ButtonConfig, ConfigError, PaletteRole, TransitionButton};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn load_full_file() {
    let file = write_config(
        r##"
        [colors]
        normal_background = "#336699"
        pressed_background = "#FFFFFF"
        failure_background = "#AA000080"

        [timing]
        transition_ms = 250
        revert_delay_ms = 1500

        [font]
        family = "Helvetica Neue"
        size = 15.0
        "##,
    );

    let config = ButtonConfig::load(file.path()).unwrap();
    let palette = config.palette().unwrap();
    let timings = config.timings().unwrap();
    let font = config.font().unwrap();

    assert_eq!(
        palette.entry(PaletteRole::Normal).background,
        Color::from_rgb8(0x33, 0x66, 0x99)
    );
    assert_eq!(
        palette.entry(PaletteRole::Failure).background,
        Color::from_rgba8(0xAA, 0x00, 0x00, 0x80)
    );
    assert_eq!(timings.transition, Duration::from_millis(250));
    assert_eq!(timings.revert_delay, Duration::from_millis(1500));
    assert_eq!(timings.fade, Duration::from_millis(300));
    assert_eq!(font.family(), &FontFamily::name("Helvetica Neue"));
    assert_eq!(font.size(), 15.0);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("button.toml");

    let err = ButtonConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("button.toml"));
}

#[test]
fn invalid_color_names_field() {
    let file = write_config("[colors]\nsuccess_background = \"#12345\"\n");

    let err = ButtonConfig::load(file.path()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidColor { field: "success_background", .. }
    ));
    assert!(err.to_string().contains("success_background"));
}

#[test]
fn signed_digits_are_not_a_color() {
    let file = write_config("[colors]\npressed_background = \"#+1+2+3\"\n");

    let err = ButtonConfig::load(file.path()).unwrap_err();
    match err {
        ConfigError::InvalidColor { field, value } => {
            assert_eq!(field, "pressed_background");
            assert_eq!(value, "#+1+2+3");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let file = write_config("[timing\ntransition_ms = 1\n");
    assert!(matches!(
        ButtonConfig::load(file.path()),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn config_drives_button() {
    let file = write_config(
        r##"
        [colors]
        disabled_background = "#101010"

        [font]
        size = 10.0
        "##,
    );
    let config = ButtonConfig::load(file.path()).unwrap();

    let clock = ManualClock::new();
    let main_loop = MainLoop::with_clock(Arc::new(clock.clone()));
    let mut button = TransitionButton::new(main_loop, Arc::new(AdvanceMetrics::new(0.5, 1.2)))
        .with_config(&config)
        .unwrap()
        .with_first_label_text("Send");

    // 4 graphemes * 5px plus half the height is under the height.
    assert_eq!(button.frame().size.width, 44.0);
    button.set_first_label_text("Send it now");
    clock.advance_ms(200);
    button.tick();
    assert_eq!(button.frame().size.width, 55.0 + 22.0);

    button.set_enabled(false);
    assert_eq!(button.frame().background, Color::from_rgb8(0x10, 0x10, 0x10));
}
