//! Puck Sandbox entry point
//!
//! There is no window here: the binary drives the core through a scripted,
//! headless session and logs the overlay readout once per simulated second.
//!
//! Usage: `puck-sandbox [--config <path>] [--scene <path>] [--seconds <n>] [--dump-config]`

use std::process::ExitCode;

use glam::Vec2;

use puck_sandbox::consts::FALLBACK_DT;
use puck_sandbox::sim::{GamepadAxes, JoystickEvent, SandboxState, Scene, TickInput, tick};
use puck_sandbox::{Readout, SandboxConfig};

/// Command line options
#[derive(Debug, Default)]
struct Options {
    config: Option<String>,
    scene: Option<String>,
    seconds: Option<f32>,
    dump_config: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut opts = Options::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => opts.config = Some(args.next().ok_or("--config needs a path")?),
            "--scene" => opts.scene = Some(args.next().ok_or("--scene needs a path")?),
            "--seconds" => {
                let raw = args.next().ok_or("--seconds needs a number")?;
                let secs = raw
                    .parse::<f32>()
                    .map_err(|e| format!("bad --seconds {raw:?}: {e}"))?;
                if !secs.is_finite() || secs < 0.0 {
                    return Err(format!("--seconds must be finite and non-negative, got {raw:?}"));
                }
                opts.seconds = Some(secs);
            }
            "--dump-config" => opts.dump_config = true,
            other => return Err(format!("unknown argument {other:?}")),
        }
    }
    Ok(opts)
}

/// Scripted input for frame time `t`: each phase exercises one input source
fn scripted_input(state: &SandboxState, t: f32, prev_t: f32) -> TickInput {
    let anchor = state.joystick.anchor;
    let mut input = TickInput::default();

    match t {
        // Steer toward a point with direct pointer control
        t if t < 2.0 => input.pointer_target = Some(Vec2::new(800.0, 500.0)),
        // Drag the on-screen joystick up and to the left
        t if t < 4.0 => {
            if prev_t < 2.0 {
                input.joystick_events.push(JoystickEvent::DragStart(anchor));
            }
            input
                .joystick_events
                .push(JoystickEvent::DragMove(anchor + Vec2::new(-30.0, -40.0)));
        }
        // Let go and push the gamepad stick down
        t if t < 6.0 => {
            if prev_t < 4.0 {
                input.joystick_events.push(JoystickEvent::DragEnd);
            }
            input.gamepad = Some(GamepadAxes::new(20.0, 90.0));
        }
        // Coast
        _ => input.gamepad = Some(GamepadAxes::new(5.0, -5.0)),
    }

    input
}

fn run(opts: Options) -> puck_sandbox::Result<()> {
    let config = match &opts.config {
        Some(path) => SandboxConfig::load(path)?,
        None => SandboxConfig::default(),
    };

    if opts.dump_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let scene = match &opts.scene {
        Some(path) => Scene::load(path)?,
        None => Scene::default(),
    };

    let mut state = SandboxState::new(config, scene)?;
    let seconds = opts.seconds.unwrap_or(8.0);
    let frames = (seconds / FALLBACK_DT).round() as u64;

    let mut t = 0.0_f32;
    let mut prev_t = -1.0_f32;
    let mut contacts = 0usize;
    for frame in 0..frames {
        let input = scripted_input(&state, t, prev_t);
        let report = tick(&mut state, &input, FALLBACK_DT);
        contacts += report.obstacles_hit.len() + usize::from(report.bounds.any());

        prev_t = t;
        t += report.dt;

        if (frame + 1) % 60 == 0 {
            log::info!(
                "t={:.1}s [{}] {}",
                t,
                report.source.map_or("idle", |s| s.as_str()),
                Readout::from_report(&report)
            );
        }
    }

    log::info!(
        "Session over after {} frames ({:.2}s simulated), {} contacts. {}",
        state.frame_count,
        state.elapsed,
        contacts,
        Readout::from_pose(&state.pose())
    );
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Puck Sandbox (headless) starting...");

    let opts = match parse_args(std::env::args().skip(1)) {
        Ok(opts) => opts,
        Err(msg) => {
            log::error!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    match run(opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() -> ExitCode {
    // No headless runner on the web; the host page drives `tick` directly
    ExitCode::SUCCESS
}
