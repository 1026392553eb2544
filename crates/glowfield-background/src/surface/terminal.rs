//! Presenting a framebuffer on a terminal.

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use super::Framebuffer;

/// Upper half block: foreground paints the top pixel, background the bottom.
const UPPER_HALF: char = '▀';

/// Widget drawing a [`Framebuffer`] at two pixel rows per terminal cell.
#[derive(Debug, Clone, Copy)]
pub struct HalfBlockView<'a> {
    framebuffer: &'a Framebuffer,
}

impl<'a> HalfBlockView<'a> {
    pub fn new(framebuffer: &'a Framebuffer) -> Self {
        Self { framebuffer }
    }
}

impl Widget for HalfBlockView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height {
            for col in 0..area.width {
                let x = col as u32;
                let y = row as u32 * 2;
                let top = self.framebuffer.pixel(x, y).map(Color::from);
                let bottom = self.framebuffer.pixel(x, y + 1).map(Color::from);

                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_char(UPPER_HALF)
                        .set_fg(top.unwrap_or(Color::Reset))
                        .set_bg(bottom.unwrap_or(Color::Reset));
                }
            }
        }
    }
}
