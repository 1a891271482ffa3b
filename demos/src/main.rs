// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draws an AR line set for one fixed view and prints every stroke as SVG
//! path data.
//!
//! ```text
//! RUST_LOG=understory_ar_layer=trace ar_lines --azimuth 350 --fov-width 66 lines.json
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use kurbo::Size;
use peniko::Color;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use understory_ar_clip::ClipConfig;
use understory_ar_layer::{
    ArLine, LineLayer, LineSetConfig, LineStyle, RecordingRenderer, ThicknessUnits, grid,
    horizon_line,
};
use understory_ar_projection::{GeoPosition, ViewState};

#[derive(Debug, Parser)]
#[command(about = "Project and clip AR lines for a fixed view")]
struct Args {
    /// Compass bearing the view faces, in degrees.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    azimuth: f64,
    /// Tilt of the view above the horizon, in degrees.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    inclination: f64,
    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1080.0)]
    width: f64,
    /// Viewport height in pixels.
    #[arg(long, default_value_t = 1920.0)]
    height: f64,
    /// Horizontal field of view, in degrees.
    #[arg(long, default_value_t = 45.0)]
    fov_width: f64,
    /// Vertical field of view, in degrees.
    #[arg(long, default_value_t = 65.0)]
    fov_height: f64,
    /// Device pixels per density-independent pixel.
    #[arg(long, default_value_t = 1.0)]
    density: f64,
    /// Observer position as `latitude,longitude[,elevation]`.
    #[arg(long, value_parser = parse_position)]
    observer: Option<GeoPosition>,
    /// Margin of the wrap-around guard box, as a multiple of the viewport.
    /// Overrides the line set's `clip` settings.
    #[arg(long)]
    wrap_margin: Option<f64>,
    /// Join points that straddle the back of the view instead of splitting.
    #[arg(long)]
    no_seam_split: bool,
    /// JSON line set. Defaults to a 15° grid and a highlighted horizon.
    config: Option<PathBuf>,
}

fn parse_position(value: &str) -> Result<GeoPosition, String> {
    let parts = value
        .split(',')
        .map(|part| part.trim().parse::<f64>().map_err(|err| format!("{part:?}: {err}")))
        .collect::<Result<Vec<_>, _>>()?;
    match parts.as_slice() {
        [latitude, longitude] => Ok(GeoPosition::new(*latitude, *longitude, 0.0)),
        [latitude, longitude, elevation] => Ok(GeoPosition::new(*latitude, *longitude, *elevation)),
        _ => Err("expected latitude,longitude[,elevation]".into()),
    }
}

fn default_lines() -> Vec<ArLine> {
    let mut lines = grid(
        15.0,
        LineStyle::new(Color::from_rgba8(255, 255, 255, 64), 1.0, ThicknessUnits::Dp),
    );
    lines.push(horizon_line(LineStyle::new(
        Color::WHITE,
        0.5,
        ThicknessUnits::Angle,
    )));
    lines
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut view = ViewState::try_new(
        args.azimuth,
        args.inclination,
        Size::new(args.width, args.height),
        Size::new(args.fov_width, args.fov_height),
    )?;
    if let Some(observer) = args.observer {
        view = view.with_observer(observer);
    }

    let (mut clip, lines) = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let config = LineSetConfig::from_json(&json)
                .with_context(|| format!("parsing {}", path.display()))?;
            let clip = config
                .clip_config()
                .with_context(|| format!("loading {}", path.display()))?;
            let lines = config
                .into_lines()
                .with_context(|| format!("loading {}", path.display()))?;
            (clip, lines)
        }
        None => (ClipConfig::default(), default_lines()),
    };
    if lines.is_empty() {
        warn!("line set is empty, nothing to draw");
    }

    if let Some(wrap_margin) = args.wrap_margin {
        clip = ClipConfig { wrap_margin };
        anyhow::ensure!(
            clip.is_valid(),
            "--wrap-margin must be finite and non-negative, got {wrap_margin}"
        );
    }

    let layer = LineLayer::new()
        .with_clip_config(clip)
        .with_back_seam_split(!args.no_seam_split);
    layer.set_lines(lines);

    let mut renderer = RecordingRenderer::with_density(args.density);
    layer.draw(&mut renderer, &view);
    info!(
        lines = layer.lines().len(),
        strokes = renderer.events().len(),
        "drew AR lines"
    );

    for event in renderer.events() {
        let rgba = event.color.to_rgba8();
        println!(
            "width={:.2} color=#{:02x}{:02x}{:02x}{:02x} d=\"{}\"",
            event.stroke.width,
            rgba.r,
            rgba.g,
            rgba.b,
            rgba.a,
            event.path.to_svg()
        );
    }
    Ok(())
}
