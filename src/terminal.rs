use crate::graphics::{Canvas, BACKGROUND};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use std::io::{self, BufWriter, Stdout, Write};

/// Rows kept below the picture for the status line
pub const STATUS_ROWS: u16 = 1;

/// Upper half block: foreground paints the top pixel, background the bottom one
const HALF_BLOCK: char = '▀';

/// Pixel size of the drawing surface for a terminal of `cols` × `rows` cells
pub fn surface_size(cols: u16, rows: u16) -> (usize, usize) {
    (
        usize::from(cols),
        usize::from(rows.saturating_sub(STATUS_ROWS)) * 2,
    )
}

/// Current terminal size in cells as `(cols, rows)`
pub fn terminal_size() -> io::Result<(u16, u16)> {
    match termsize::get() {
        Some(size) => Ok((size.cols, size.rows)),
        None => crossterm::terminal::size(),
    }
}

/// Full-screen terminal session. Restores the terminal when dropped.
pub struct Terminal<W: Write = BufWriter<Stdout>> {
    out: W,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        Terminal::with_writer(BufWriter::new(io::stdout()))
    }
}

impl<W: Write> Terminal<W> {
    /// Enters raw mode and the alternate screen, drawing through `out`
    pub fn with_writer(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        // Built before the rest of the setup so a failure still restores raw mode on drop
        let mut terminal = Terminal { out };
        execute!(terminal.out, EnterAlternateScreen, EnableMouseCapture, Hide)?;
        Ok(terminal)
    }

    /// Draws the canvas two pixels per cell, then the status line under it
    pub fn present(&mut self, canvas: &Canvas, status: &str) -> io::Result<()> {
        let rows: Vec<&[_]> = canvas.rows().collect();
        let mut line = 0;
        for pair in rows.chunks(2) {
            queue!(self.out, MoveTo(0, line))?;
            let mut current = None;
            for (x, &top) in pair[0].iter().enumerate() {
                let bottom = pair.get(1).map_or(BACKGROUND, |row| row[x]);
                if current != Some((top, bottom)) {
                    queue!(self.out, SetForegroundColor(top), SetBackgroundColor(bottom))?;
                    current = Some((top, bottom));
                }
                queue!(self.out, Print(HALF_BLOCK))?;
            }
            line += 1;
        }

        let status: String = status.chars().take(canvas.width()).collect();
        queue!(
            self.out,
            MoveTo(0, line),
            ResetColor,
            Clear(ClearType::CurrentLine),
            Print(status)
        )?;
        self.out.flush()
    }
}

impl<W: Write> Drop for Terminal<W> {
    fn drop(&mut self) {
        // Nothing useful can be done if the terminal refuses to restore
        let _ = execute!(
            self.out,
            ResetColor,
            Show,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = disable_raw_mode();
    }
}
