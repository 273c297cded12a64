use std::path::PathBuf;
use std::time::Duration;

use eyre::{Context, Result, ensure};
use rubik_core::{Cubelet, format_moves, parse_moves};
use rubik_prefs::Preferences;
use rubik_view::{CubeSimulation, CubeletPose, ScriptPlayer};
use rubikmath::{Float, Rotation};
use serde::Serialize;

/// Rubik's cube simulator command-line interface
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Preferences file to use instead of the default location.
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Apply a sequence of moves and print the resulting state as JSON.
    Moves {
        /// Moves to apply, such as `urFd`. Lowercase turns a face by -90°;
        /// uppercase turns it by +90°.
        sequence: String,

        /// Simulated frames per second, from 1 to 1000.
        #[arg(long, default_value_t = 60)]
        fps: u32,
        /// Seconds per quarter turn, overriding the preferences. Zero applies
        /// moves instantly.
        #[arg(long)]
        duration: Option<f32>,
        /// Mouse drag in pixels, applied to the view over one frame.
        #[arg(long, num_args = 2, value_names = ["DX", "DY"], allow_negative_numbers = true)]
        drag: Option<Vec<Float>>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Run scripted playback against a simulated frame clock and print the
    /// steps issued and the resulting state as JSON.
    Play {
        /// Script to play, overriding the preferences.
        #[arg(long)]
        script: Option<String>,
        /// Simulated seconds to run for.
        #[arg(long, default_value_t = 14.0)]
        seconds: f32,
        /// Simulated frames per second, from 1 to 1000.
        #[arg(long, default_value_t = 60)]
        fps: u32,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print the effective preferences as YAML.
    Prefs {
        /// Also write the preferences to the preferences file.
        #[arg(long)]
        save: bool,
    },
}

#[derive(clap::Args, Debug)]
pub(crate) struct OutputArgs {
    /// Include cubelet poses transformed by the view orientation.
    #[arg(long)]
    world: bool,
}

#[derive(Serialize, Debug)]
struct CubeReport {
    moves: String,
    solved: bool,
    view: Rotation,
    cubelets: Vec<Cubelet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    world: Option<Vec<CubeletPose>>,
}
impl CubeReport {
    fn new(sim: &CubeSimulation, output: &OutputArgs) -> Self {
        Self {
            moves: format_moves(sim.history().iter().copied()),
            solved: sim.is_solved(),
            view: sim.view_orientation(),
            cubelets: sim.cube().cubelets().to_vec(),
            world: output.world.then(|| sim.cubelets().collect()),
        }
    }
}

#[derive(Serialize, Debug)]
struct PlayReport {
    steps: Vec<StepReport>,
    #[serde(flatten)]
    cube: CubeReport,
}

#[derive(Serialize, Debug)]
struct StepReport {
    index: u64,
    time: f64,
    ch: char,
    applied: bool,
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let prefs_path = args.prefs.as_deref();

    match args.subcommand {
        Subcommand::Moves {
            sequence,
            fps,
            duration,
            drag,
            output,
        } => {
            let prefs = Preferences::load(prefs_path);
            let frame = frame_duration(fps)?;
            let moves = parse_moves(&sequence).wrap_err("error parsing move sequence")?;

            let mut sim = CubeSimulation::from_prefs(&prefs);
            if let Some(seconds) = duration {
                let d = Duration::try_from_secs_f32(seconds).wrap_err("invalid move duration")?;
                sim.set_move_duration(d);
            }
            if let Some([dx, dy]) = drag.as_deref() {
                sim.drag_view(*dx, *dy, frame);
            }

            let mut frames = 0_u64;
            for twist in moves {
                sim.do_move(twist);
                while sim.advance(frame) {
                    frames += 1;
                }
            }
            log::info!("applied {} moves in {frames} frames", sim.history().len());

            write_json_output(&CubeReport::new(&sim, &output))
        }

        Subcommand::Play {
            script,
            seconds,
            fps,
            output,
        } => {
            let prefs = Preferences::load(prefs_path);
            let frame = frame_duration(fps)?;
            let end = Duration::try_from_secs_f32(seconds).wrap_err("invalid playback length")?;

            let mut sim = CubeSimulation::from_prefs(&prefs);
            let mut player = ScriptPlayer::from_prefs(&prefs);
            if let Some(script) = &script {
                player.restart(script);
            }
            log::info!("playing {:?} for {seconds} seconds", player.moves());

            let mut steps = vec![];
            let mut elapsed = Duration::ZERO;
            while elapsed <= end {
                if let Some(step) = player.run_script(&mut sim, elapsed) {
                    steps.push(StepReport {
                        index: step.index,
                        time: elapsed.as_secs_f64(),
                        ch: step.ch,
                        applied: step.twist.is_some(),
                    });
                }
                sim.advance(frame);
                elapsed += frame;
            }
            sim.finish_animation();

            write_json_output(&PlayReport {
                steps,
                cube: CubeReport::new(&sim, &output),
            })
        }

        Subcommand::Prefs { save } => {
            let prefs = Preferences::try_load(prefs_path)?;
            print!("{}", prefs.to_yaml()?);
            if save {
                prefs.save(prefs_path)?;
            }
            Ok(())
        }
    }
}

/// Highest simulated frame rate accepted on the command line.
const MAX_FPS: u32 = 1000;

fn frame_duration(fps: u32) -> Result<Duration> {
    ensure!(
        (1..=MAX_FPS).contains(&fps),
        "frames per second must be between 1 and {MAX_FPS}",
    );
    Ok(Duration::from_secs(1) / fps)
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration() {
        assert_eq!(frame_duration(1).unwrap(), Duration::from_secs(1));
        assert_eq!(frame_duration(50).unwrap(), Duration::from_millis(20));
        assert_eq!(frame_duration(MAX_FPS).unwrap(), Duration::from_millis(1));

        assert!(frame_duration(0).is_err());
        assert!(frame_duration(MAX_FPS + 1).is_err());
        // Would truncate to a zero-length frame.
        assert!(frame_duration(2_000_000_000).is_err());
    }
}
