//! Command-line front end for baking and converting camera paths.
//!
//! ```text
//! vista bake <path.toml> <out.mov>
//! vista import <in.mov> <out.toml>
//! ```
//!
//! Set `RUST_LOG=info` to see playback progress.

use std::path::Path;
use std::process::ExitCode;

use vista::path::mov;
use vista::playback::LogHost;
use vista::state::SceneSet;
use vista::{Options, PathContainer, PlaybackController, VistaError};

/// Seconds per frame handed to the controller while baking.
const FRAME_DT: f64 = 1.0 / 60.0;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.as_slice() {
        [cmd, input, output] if cmd == "bake" => {
            bake(Path::new(input), Path::new(output))
        }
        [cmd, input, output] if cmd == "import" => {
            import(Path::new(input), Path::new(output))
        }
        _ => {
            log::error!(
                "usage: vista bake <path.toml> <out.mov> | \
                 vista import <in.mov> <out.toml>"
            );
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Play `input` in movie mode and write every published frame to `output`.
fn bake(input: &Path, output: &Path) -> Result<(), VistaError> {
    let mut controller =
        PlaybackController::new(LogHost::default(), Options::default());
    controller.path_mut().load(input)?;

    controller.play(true);
    let mut frames = Vec::new();
    while controller.is_playing() {
        frames.push(controller.here().clone());
        controller.tick(FRAME_DT);
    }
    frames.push(controller.here().clone());

    std::fs::write(output, mov::export_mov(&frames))?;
    log::info!("Baked {} frames to {}", frames.len(), output.display());
    Ok(())
}

/// Convert MOV samples in `input` into a path document at `output`.
fn import(input: &Path, output: &Path) -> Result<(), VistaError> {
    let text = std::fs::read_to_string(input)?;
    let steps = mov::import_mov(&text, &SceneSet::default())?;
    log::info!("Imported {} samples from {}", steps.len(), input.display());
    PathContainer::from_steps(steps).save(output)
}
