//! GIF animation and PNG snapshot drivers around the annealing loop.

use std::path::Path;

use anyhow::Context;
use plotters::prelude::*;

use crate::anneal::{AnnealConfig, AnnealResult, AnnealRunner};
use crate::tsp::{Instance, SwapTsp, Tour};

use super::frame::draw_frame;

/// Pixel size of rendered frames (width, height).
pub const FRAME_SIZE: (u32, u32) = (1280, 640);

/// Delay between GIF frames in milliseconds.
const FRAME_DELAY_MS: u32 = 50;

/// Anneals a tour over `instance`, writing one GIF frame every
/// `frame_every` steps (plus the final step).
///
/// Returns the annealing result; its `energy_history` is the full
/// per-step trace, independent of the frame stride.
pub fn animate_gif(
    path: &Path,
    instance: &Instance,
    config: &AnnealConfig,
    frame_every: usize,
) -> anyhow::Result<AnnealResult<Tour>> {
    let frame_every = frame_every.max(1);
    let root = BitMapBackend::gif(path, FRAME_SIZE, FRAME_DELAY_MS)
        .with_context(|| format!("create {}", path.display()))?
        .into_drawing_area();

    let problem = SwapTsp::new(instance);
    let mut energies: Vec<f64> = Vec::with_capacity(config.steps + 1);
    let mut draw_err: Option<anyhow::Error> = None;

    let result = AnnealRunner::run_with_observer(&problem, config, |tour, event| {
        energies.push(event.energy);
        if draw_err.is_some() {
            return;
        }
        let last = event.step + 1 == config.steps;
        if event.step % frame_every == 0 || last {
            let drawn = draw_frame(&root, instance, tour, &energies, event.temperature)
                .and_then(|()| root.present().map_err(Into::into));
            if let Err(e) = drawn {
                draw_err = Some(e);
            }
        }
    });

    if let Some(e) = draw_err {
        return Err(e).with_context(|| format!("render frame into {}", path.display()));
    }
    Ok(result)
}

/// Writes a single PNG snapshot of a tour and its energy trace.
pub fn render_png(
    path: &Path,
    instance: &Instance,
    tour: &Tour,
    energies: &[f64],
    temperature: f64,
) -> anyhow::Result<()> {
    let root = BitMapBackend::new(path, FRAME_SIZE).into_drawing_area();
    draw_frame(&root, instance, tour, energies, temperature)?;
    root.present()
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
