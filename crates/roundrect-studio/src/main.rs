use anyhow::{Context, Result};

use roundrect::coords::{Rect, Vec2};
use roundrect::logging::{init_logging, LoggingConfig};
use roundrect::paint::{Brush, Color, LinearGradient, Pen};
use roundrect::raster::{Canvas, CanvasOptions};
use roundrect::round_rect::RoundRectExt;

const SHEET_W: u32 = 520;
const SHEET_H: u32 = 300;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let out = std::env::args().nth(1).unwrap_or_else(|| "roundrect-sheet.png".to_owned());

    let mut canvas = Canvas::with_options(
        SHEET_W,
        SHEET_H,
        CanvasOptions { background: Color::WHITE, ..CanvasOptions::default() },
    )
    .context("failed to allocate sample sheet")?;

    draw_sheet(&mut canvas)?;
    canvas.save_png(&out)?;

    println!("  wrote {SHEET_W}x{SHEET_H} sample sheet to {out}");
    Ok(())
}

/// Two rows of samples: radii (including the corrected diameter-20 case) on
/// top, pen widths with filled interiors below.
fn draw_sheet(canvas: &mut Canvas) -> Result<()> {
    let ink = Color::from_srgb_u8(0x1f, 0x29, 0x37, 0xff);
    let accent = Color::from_srgb_u8(0x25, 0x63, 0xeb, 0xff);

    // ── radii ─────────────────────────────────────────────────────────────
    for (i, radius) in [0, 4, 8, 10, 16, 40].into_iter().enumerate() {
        let rect = Rect::new(20 + i as i32 * 82, 20, 70, 100);
        let mut pen = Pen::new(ink, 1);
        log::info!("sample: radius {radius} at {rect:?}");
        canvas
            .draw_round_rect(&mut pen, rect, radius)
            .with_context(|| format!("stroking radius {radius}"))?;
    }

    // ── pen widths + fills ────────────────────────────────────────────────
    for (i, width) in (1..=4u32).enumerate() {
        let rect = Rect::new(20 + i as i32 * 124, 150, 110, 120);
        let x0 = rect.x as f32;
        let brush = Brush::from(LinearGradient::two_stop(
            Vec2::new(x0, 0.0),
            Vec2::new(x0 + rect.width as f32, 0.0),
            Color::from_straight(0.9, 0.94, 1.0, 1.0),
            Color::from_straight(0.6, 0.75, 1.0, 1.0),
        ));
        let mut pen = Pen::new(accent, width);

        log::info!("sample: pen width {width} at {rect:?}");
        canvas
            .fill_round_rect(&brush, rect, 12)
            .with_context(|| format!("filling width-{width} sample"))?;
        canvas
            .draw_round_rect(&mut pen, rect, 12)
            .with_context(|| format!("stroking width-{width} sample"))?;
    }

    Ok(())
}
