//! Writes views to the terminal.
//!
//! Output is printed once, inline; there is no alternate screen or redraw loop.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};

use dropblox_core::Field;

use crate::fb::{FrameBuffer, Rgb};
use crate::view::{render_field_text, ColorMode, FieldView};

/// Encode a framebuffer as styled text into `out`, one line per row.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_frame_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current: Option<(Rgb, Rgb)> = None;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current != Some((cell.fg, cell.bg)) {
                out.queue(SetForegroundColor(rgb_to_color(cell.fg)))?;
                out.queue(SetBackgroundColor(rgb_to_color(cell.bg)))?;
                current = Some((cell.fg, cell.bg));
            }
            out.queue(Print(cell.ch))?;
        }
        out.queue(ResetColor)?;
        current = None;
        out.queue(Print("\n"))?;
    }
    Ok(())
}

/// Render a field in the given mode to a byte buffer
pub fn encode_field(field: &Field, mode: ColorMode) -> Result<Vec<u8>> {
    match mode {
        ColorMode::Ansi => {
            let mut out = Vec::with_capacity(4 * 1024);
            encode_frame_into(&FieldView.render(field)?, &mut out)?;
            Ok(out)
        }
        ColorMode::Emoji | ColorMode::Plain => {
            let mut text = render_field_text(field, mode);
            text.push('\n');
            Ok(text.into_bytes())
        }
    }
}

/// Print a field to stdout
pub fn print_field(field: &Field, mode: ColorMode) -> Result<()> {
    let bytes = encode_field(field, mode)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(&bytes)?;
    stdout.flush()?;
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
