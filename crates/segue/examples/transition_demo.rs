//! Headless walkthrough of a transition button.
//!
//! A simulated tap starts a fake operation. Two seconds later it finishes
//! with success, or with failure when `--fail` is passed, and the button
//! reports every frame it would paint.
//!
//! Run with: cargo run -p segue --example transition_demo -- --fail
//!
//! Set `RUST_LOG=segue=trace` for more detail.

use std::sync::Arc;
use std::time::{Duration, Instant};

use segue::render::{AdvanceMetrics, Point};
use segue::runtime::{LoopEvent, MainLoop};
use segue::widget::events::{MousePressEvent, MouseReleaseEvent};
use segue::{ButtonConfig, ButtonFrame, ButtonState, TransitionButton};
use tracing_subscriber::EnvFilter;

const OPERATION_TIME: Duration = Duration::from_secs(2);

fn describe(frame: &ButtonFrame) -> String {
    let [r, g, b, _] = frame.background.to_rgba8();
    format!(
        "{:<8} offset {:>6.1}  size {:>6.1}x{:<4.1} scale {:.3}  bg #{r:02X}{g:02X}{b:02X}{}",
        format!("{:?}", frame.state),
        frame.content_offset_y,
        frame.size.width,
        frame.size.height,
        frame.scale,
        frame
            .fade
            .map(|fade| format!("  fading {:.2}", fade.opacity()))
            .unwrap_or_default(),
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("segue=debug")),
        )
        .init();

    let fail = std::env::args().any(|arg| arg == "--fail");
    let config = match std::env::args().skip_while(|arg| arg != "--config").nth(1) {
        Some(path) => ButtonConfig::load(path)?,
        None => ButtonConfig::default(),
    };

    let main_loop = MainLoop::new();
    let mut button = TransitionButton::new(main_loop.clone(), Arc::new(AdvanceMetrics::default()))
        .with_config(&config)?
        .with_first_label_text("Submit")
        .with_second_label_text("");

    let _finished = button.transition_finished.connect_scoped(|state: &ButtonState| {
        tracing::info!(?state, "transition finished");
    });

    let started = Instant::now();
    let mut operation: Option<segue::runtime::TimerId> = None;
    let mut tapped = false;
    let mut last_report = String::new();

    let deadline = started + Duration::from_secs(5);
    main_loop.run_until(deadline, Duration::from_millis(16), |event| {
        if button.handle_event(event) {
            return;
        }

        match event {
            LoopEvent::Timer { id } if operation == Some(*id) => {
                operation = None;
                if fail {
                    button.set_second_label_text("Something went wrong");
                    button.set_state(ButtonState::Failure);
                } else {
                    button.set_second_label_text("Success");
                    button.set_state(ButtonState::Success);
                }
            }
            LoopEvent::Frame => {
                if !tapped && started.elapsed() >= Duration::from_millis(300) {
                    tapped = true;
                    let center = Point::new(button.size().width / 2.0, button.height() / 2.0);
                    button.handle_mouse_press(&MousePressEvent::left(center));
                    if button.handle_mouse_release(&MouseReleaseEvent::left(center)) {
                        button.set_state(ButtonState::Loading);
                        operation = Some(main_loop.start_timer(OPERATION_TIME));
                    }
                }

                let report = describe(&button.frame());
                if report != last_report {
                    println!("{:>5}ms  {report}", started.elapsed().as_millis());
                    last_report = report;
                }
            }
            _ => {}
        }
    });

    Ok(())
}
