use bevy::{app::ScheduleRunnerPlugin, log::LogPlugin, prelude::*};
use std::{env, time::Duration};

use arcade_flyer::{
    plugins::{add_flight_plugins, FlightSet},
    resources::{FlightTelemetry, FrameDelta, SimulationConfig},
    systems::input_sampling_system,
};

const DEFAULT_FRAMES: u64 = 600;
const REPORT_EVERY: u64 = 60;

/// How long the scripted flight runs.
#[derive(Resource)]
struct FlightScript {
    frames: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let config = match args.next() {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::load_or_default()?,
    };
    let frames = args
        .next()
        .map(|arg| arg.parse::<u64>())
        .transpose()?
        .unwrap_or(DEFAULT_FRAMES);

    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
            1.0 / 60.0,
        ))),
        LogPlugin::default(),
    ))
    .init_resource::<ButtonInput<KeyCode>>()
    .insert_resource(FlightScript { frames });

    add_flight_plugins(&mut app, &config);

    app.add_systems(
        Update,
        (
            scripted_pilot
                .in_set(FlightSet::Input)
                .before(input_sampling_system),
            report_telemetry.after(FlightSet::Sinks),
        ),
    );

    info!("Flying {} frames headless", frames);
    match app.run() {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => Err(format!("simulation exited with code {}", code).into()),
    }
}

/// Holds full throttle for the first half of the run, then idles.
fn scripted_pilot(
    mut keyboard: ResMut<ButtonInput<KeyCode>>,
    delta: Res<FrameDelta>,
    script: Res<FlightScript>,
) {
    if delta.frame < script.frames / 2 {
        keyboard.press(KeyCode::KeyW);
    } else {
        keyboard.release(KeyCode::KeyW);
    }
}

fn report_telemetry(
    telemetry: Res<FlightTelemetry>,
    delta: Res<FrameDelta>,
    script: Res<FlightScript>,
    mut exit: EventWriter<AppExit>,
) {
    if delta.frame % REPORT_EVERY == 0 {
        match serde_json::to_string(&*telemetry) {
            Ok(json) => info!("{} {}", *telemetry, json),
            Err(e) => warn!("Failed to serialize telemetry: {}", e),
        }
    }

    if delta.frame >= script.frames {
        info!("Finished after {} frames: {}", delta.frame, *telemetry);
        exit.send(AppExit::Success);
    }
}
