use base64::Engine;
use tiny_skia::*;

use crate::components::ModeResponse;
use crate::resources::PlotSettings;
use crate::utils::errors::{Result, StabilityError};

/// Trace colours in state order.
const TRACE_COLOURS: [(&str, (u8, u8, u8)); 4] = [
    ("blue", (0, 0, 255)),
    ("red", (255, 0, 0)),
    ("orange", (255, 165, 0)),
    ("purple", (128, 0, 128)),
];

const KEY_SWATCH: f32 = 16.0;
const KEY_SPACING: f32 = 8.0;

const MARGIN: f32 = 30.0;

/// Maps response coordinates onto the canvas. Time runs left to right from
/// the left margin, the value axis is symmetric about the canvas centre line.
struct Frame {
    width: f32,
    height: f32,
    horizon: f32,
    amplitude: f32,
}

impl Frame {
    fn new(response: &ModeResponse, settings: &PlotSettings) -> Self {
        let horizon = response.horizon() as f32;
        let amplitude = response
            .series
            .iter()
            .flat_map(|s| s.values.iter())
            .fold(0.0_f64, |m, v| m.max(v.abs())) as f32;
        Self {
            width: settings.width as f32,
            height: settings.height as f32,
            horizon: if horizon > 0.0 { horizon } else { 1.0 },
            amplitude: if amplitude > 0.0 { 1.1 * amplitude } else { 1.0 },
        }
    }

    fn x(&self, t: f64) -> f32 {
        MARGIN + (t as f32 / self.horizon) * (self.width - 2.0 * MARGIN)
    }

    fn y(&self, value: f64) -> f32 {
        let half = self.height / 2.0;
        half - (value as f32 / self.amplitude) * (half - MARGIN)
    }
}

/// Draws the four state traces of a mode response with axes through the
/// origin and a light grid.
pub fn render_response(response: &ModeResponse, settings: &PlotSettings) -> Result<Pixmap> {
    if response
        .series
        .iter()
        .any(|s| s.values.iter().any(|v| !v.is_finite()))
    {
        return Err(StabilityError::Render(format!(
            "{} response contains non-finite values",
            response.mode
        )));
    }

    let mut canvas = Pixmap::new(settings.width, settings.height).ok_or_else(|| {
        StabilityError::Render(format!(
            "cannot allocate a {}x{} canvas",
            settings.width, settings.height
        ))
    })?;
    canvas.fill(Color::WHITE);

    let frame = Frame::new(response, settings);
    draw_grid(&mut canvas, &frame, settings.grid_divisions)?;
    draw_axes(&mut canvas, &frame)?;

    let mut stroke = Stroke::default();
    stroke.width = settings.line_width;
    stroke.line_cap = LineCap::Round;
    stroke.line_join = LineJoin::Round;

    for (series, &(_, (r, g, b))) in response.series.iter().zip(TRACE_COLOURS.iter()) {
        let mut pb = PathBuilder::new();
        for (k, (&t, &v)) in response.time.iter().zip(&series.values).enumerate() {
            if k == 0 {
                pb.move_to(frame.x(t), frame.y(v));
            } else {
                pb.line_to(frame.x(t), frame.y(v));
            }
        }
        // A single sample has no extent to stroke
        let Some(path) = pb.finish() else {
            continue;
        };

        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, 255);
        paint.anti_alias = true;
        canvas.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    draw_key(&mut canvas, &frame, response.series.len())?;
    Ok(canvas)
}

/// Colour name of each trace next to its state label, e.g. `("red", "Δw")`.
pub fn legend(response: &ModeResponse) -> Vec<(&'static str, &str)> {
    response
        .series
        .iter()
        .zip(TRACE_COLOURS.iter())
        .map(|(series, &(name, _))| (name, series.label.as_str()))
        .collect()
}

/// One swatch per trace stacked in the top right corner, in legend order.
fn draw_key(canvas: &mut Pixmap, frame: &Frame, traces: usize) -> Result<()> {
    let right = frame.width - MARGIN - KEY_SPACING;
    for (k, &(_, (r, g, b))) in TRACE_COLOURS.iter().take(traces).enumerate() {
        let top = MARGIN + KEY_SPACING + k as f32 * (KEY_SWATCH + KEY_SPACING) / 2.0;
        let rect = Rect::from_xywh(right - KEY_SWATCH, top, KEY_SWATCH, KEY_SWATCH / 2.0)
            .ok_or_else(|| StabilityError::Render("canvas too small for the colour key".into()))?;
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, 255);
        canvas.fill_rect(rect, &paint, Transform::identity(), None);
    }
    Ok(())
}

fn draw_grid(canvas: &mut Pixmap, frame: &Frame, divisions: u32) -> Result<()> {
    if divisions == 0 {
        return Ok(());
    }
    let mut pb = PathBuilder::new();
    let plot_w = frame.width - 2.0 * MARGIN;
    let plot_h = frame.height - 2.0 * MARGIN;
    for i in 0..=divisions {
        let f = i as f32 / divisions as f32;
        let x = MARGIN + f * plot_w;
        let y = MARGIN + f * plot_h;
        pb.move_to(x, MARGIN);
        pb.line_to(x, frame.height - MARGIN);
        pb.move_to(MARGIN, y);
        pb.line_to(frame.width - MARGIN, y);
    }
    let path = pb
        .finish()
        .ok_or_else(|| StabilityError::Render("empty grid path".to_string()))?;

    let mut paint = Paint::default();
    paint.set_color_rgba8(220, 220, 220, 255);
    let mut stroke = Stroke::default();
    stroke.width = 1.0;
    canvas.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    Ok(())
}

fn draw_axes(canvas: &mut Pixmap, frame: &Frame) -> Result<()> {
    let origin_x = frame.x(0.0);
    let origin_y = frame.y(0.0);
    let mut pb = PathBuilder::new();
    pb.move_to(origin_x, MARGIN);
    pb.line_to(origin_x, frame.height - MARGIN);
    pb.move_to(MARGIN, origin_y);
    pb.line_to(frame.width - MARGIN, origin_y);
    let path = pb
        .finish()
        .ok_or_else(|| StabilityError::Render("empty axis path".to_string()))?;

    let mut paint = Paint::default();
    paint.set_color_rgba8(0, 0, 0, 255);
    paint.anti_alias = true;
    let mut stroke = Stroke::default();
    stroke.width = 1.5;
    canvas.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    Ok(())
}

pub fn encode_png(canvas: &Pixmap) -> Result<Vec<u8>> {
    canvas
        .encode_png()
        .map_err(|e| StabilityError::Render(format!("PNG encoding failed: {}", e)))
}

/// Renders a response and returns the PNG as a base64 string.
pub fn render_base64(response: &ModeResponse, settings: &PlotSettings) -> Result<String> {
    let png = encode_png(&render_response(response, settings)?)?;
    Ok(base64::prelude::BASE64_STANDARD.encode(png))
}
