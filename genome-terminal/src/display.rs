use std::io::Write;

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use smart_leds::{RGB8, brightness};

/// Draws both strands as rows of colored blocks, with a status line underneath.
pub struct TerminalStrands {
    brightness: u8,
}

impl TerminalStrands {
    pub fn new(brightness: u8) -> Self {
        Self { brightness }
    }

    pub fn draw(
        &self,
        out: &mut impl Write,
        leds: &[RGB8],
        bases: &str,
        status: &str,
    ) -> anyhow::Result<()> {
        let (sense, complement) = leds.split_at(leds.len() / 2);

        queue!(out, MoveTo(0, 0), Clear(ClearType::CurrentLine))?;
        self.draw_strand(out, sense)?;

        queue!(out, MoveTo(0, 1), Clear(ClearType::CurrentLine))?;
        self.draw_strand(out, complement)?;

        queue!(
            out,
            MoveTo(0, 2),
            Clear(ClearType::CurrentLine),
            Print(bases),
            MoveTo(0, 3),
            Clear(ClearType::CurrentLine),
            Print(status),
        )?;

        out.flush()?;

        Ok(())
    }

    fn draw_strand(&self, out: &mut impl Write, strand: &[RGB8]) -> anyhow::Result<()> {
        for x in brightness(strand.iter().copied(), self.brightness) {
            queue!(
                out,
                SetForegroundColor(Color::Rgb {
                    r: x.r,
                    g: x.g,
                    b: x.b
                }),
                Print('█')
            )?;
        }

        queue!(out, ResetColor)?;

        Ok(())
    }
}
