//! Terminal rendering for fields and blocks.
//!
//! Presentation only: nothing here feeds back into the simulation.
//!
//! - [`view`]: emoji/plain text views and a framebuffer [`FieldView`]
//! - [`renderer`]: crossterm encoding and stdout printing
//! - [`glyph`]: per-color glyphs and RGB values

pub mod fb;
pub mod glyph;
pub mod renderer;
pub mod view;

pub use dropblox_core as core;
pub use dropblox_types as types;

pub use fb::{FrameBuffer, Rgb, StyledCell};
pub use glyph::{glyph, plain_char};
pub use renderer::{encode_field, encode_frame_into, print_field};
pub use view::{render_block_text, render_field_text, ColorMode, FieldView};
