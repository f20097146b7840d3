//! Two-panel frame drawing: the tour on the left, the energy trace on
//! the right.

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::tsp::{Instance, Tour};

/// Pixel radius of a plotted point.
const POINT_RADIUS: i32 = 3;

/// Draws one animation frame onto `root`.
///
/// The left panel scatters the points and traces the closed tour,
/// captioned with the current temperature; the right panel plots the
/// energy after every step so far, with the y range padded by one
/// unit on each side.
pub fn draw_frame<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    instance: &Instance,
    tour: &Tour,
    energies: &[f64],
    temperature: f64,
) -> anyhow::Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 2));

    draw_tour_panel(&panels[0], instance, tour, temperature)?;
    draw_energy_panel(&panels[1], energies)?;
    Ok(())
}

fn draw_tour_panel<DB: DrawingBackend>(
    panel: &DrawingArea<DB, Shift>,
    instance: &Instance,
    tour: &Tour,
    temperature: f64,
) -> anyhow::Result<()>
where
    DB::ErrorType: 'static,
{
    let mut chart = ChartBuilder::on(panel)
        .caption(
            format!("Travelling Salesman (T={temperature:.2})"),
            ("sans-serif", 20),
        )
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(35)
        .build_cartesian_2d(0.0f64..1.0, 0.0f64..1.0)?;
    chart.configure_mesh().disable_mesh().draw()?;

    chart.draw_series(
        instance
            .points()
            .iter()
            .map(|p| Circle::new((p.x, p.y), POINT_RADIUS, BLACK.filled())),
    )?;

    // Closed path: repeat the first point at the end.
    let mut path: Vec<(f64, f64)> = tour
        .order()
        .iter()
        .map(|&i| {
            let p = instance.point(i);
            (p.x, p.y)
        })
        .collect();
    if let Some(&first) = tour.order().first() {
        let p = instance.point(first);
        path.push((p.x, p.y));
    }
    chart.draw_series(LineSeries::new(path, &BLACK))?;
    Ok(())
}

fn draw_energy_panel<DB: DrawingBackend>(
    panel: &DrawingArea<DB, Shift>,
    energies: &[f64],
) -> anyhow::Result<()>
where
    DB::ErrorType: 'static,
{
    let (mut lo, mut hi) = energies
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &e| {
            (lo.min(e), hi.max(e))
        });
    if !lo.is_finite() || !hi.is_finite() {
        lo = 0.0;
        hi = 1.0;
    }
    let x_max = energies.len().saturating_sub(1).max(1) as f64;

    let mut chart = ChartBuilder::on(panel)
        .caption("Energy", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d(0.0f64..x_max, (lo - 1.0)..(hi + 1.0))?;
    chart
        .configure_mesh()
        .x_desc("Steps")
        .y_desc("Distance")
        .draw()?;

    chart.draw_series(LineSeries::new(
        energies.iter().enumerate().map(|(k, &e)| (k as f64, e)),
        &GREEN,
    ))?;
    Ok(())
}
