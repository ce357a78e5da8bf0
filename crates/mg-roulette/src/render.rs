//! Frame rendering — focus window composition and single-line output

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::cursor::MoveToColumn;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::queue;
use crossterm::style::{Attribute, Stylize};
use crossterm::terminal::{self, Clear, ClearType};

use crate::config::SpinnerConfig;
use crate::palette::Palette;

/// Width assumed when the terminal cannot report one
pub const FALLBACK_WIDTH: usize = 40;

/// Marker appended when a frame is cut to fit the terminal
const TRUNCATION_MARKER: &str = "…";

/// Separator between ring positions
const SEPARATOR: &str = "  ";

/// Outcome of pacing a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    Continue,
    Interrupted,
}

/// Single-line frame output abstraction.
///
/// The spinner never prints a newline while animating: `draw` overwrites
/// the current line in place and `finish` terminates it. All pacing goes
/// through `wait`, which also reports user interrupts, so the engine can
/// run headless against captured frames.
pub trait FrameSink {
    /// Usable line width in columns
    fn width(&self) -> usize;

    /// Overwrite the animation line with `line`
    fn draw(&mut self, line: &str) -> io::Result<()>;

    /// Hold the current frame for `delay`
    fn wait(&mut self, delay: Duration) -> io::Result<Pace>;

    /// Terminate the animation line
    fn finish(&mut self) -> io::Result<()>;

    /// Emit a terminal bell, when the sink has one
    fn bell(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Crossterm-backed sink writing to stdout.
///
/// Expects raw mode while the animation plays so Ctrl-C arrives as a key
/// event instead of killing the process mid-line.
pub struct TerminalSink {
    out: io::Stdout,
    width: usize,
}

impl TerminalSink {
    pub fn new() -> Self {
        let width = match terminal::size() {
            Ok((w, _)) if w > 0 => w as usize,
            _ => FALLBACK_WIDTH,
        };
        Self {
            out: io::stdout(),
            width,
        }
    }
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSink for TerminalSink {
    fn width(&self) -> usize {
        self.width
    }

    fn draw(&mut self, line: &str) -> io::Result<()> {
        queue!(self.out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        self.out.write_all(line.as_bytes())?;
        self.out.flush()
    }

    fn wait(&mut self, delay: Duration) -> io::Result<Pace> {
        let deadline = Instant::now() + delay;
        loop {
            let left = deadline.saturating_duration_since(Instant::now());
            if !event::poll(left)? {
                return Ok(Pace::Continue);
            }
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let ctrl_c = key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL);
                    if ctrl_c || key.code == KeyCode::Esc {
                        return Ok(Pace::Interrupted);
                    }
                }
            }
            if deadline <= Instant::now() {
                return Ok(Pace::Continue);
            }
        }
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.write_all(b"\r\n")?;
        self.out.flush()
    }

    fn bell(&mut self) -> io::Result<()> {
        self.out.write_all(b"\x07")?;
        self.out.flush()
    }
}

/// Records frames in memory and never sleeps. Lets tests assert on the
/// exact frame sequence the engine produced.
#[derive(Debug, Default)]
pub struct CaptureSink {
    pub frames: Vec<String>,
    pub width: usize,
    pub finishes: usize,
    pub bells: usize,
}

impl CaptureSink {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }
}

impl FrameSink for CaptureSink {
    fn width(&self) -> usize {
        self.width
    }

    fn draw(&mut self, line: &str) -> io::Result<()> {
        self.frames.push(line.to_string());
        Ok(())
    }

    fn wait(&mut self, _delay: Duration) -> io::Result<Pace> {
        Ok(Pace::Continue)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.finishes += 1;
        Ok(())
    }

    fn bell(&mut self) -> io::Result<()> {
        self.bells += 1;
        Ok(())
    }
}

/// Compose one animation frame: the focus window around `position`, styled
/// by ring distance and truncated to the width minus one column.
pub fn compose_frame(
    names: &[String],
    position: usize,
    config: &SpinnerConfig,
    width: usize,
) -> String {
    compose_frame_styled(names, position, config, width, true)
}

/// Frame composition with an explicit focus emphasis toggle; the landing
/// blink alternates it while everything else stays styled.
pub fn compose_frame_styled(
    names: &[String],
    position: usize,
    config: &SpinnerConfig,
    width: usize,
    emphasize_focus: bool,
) -> String {
    let n = names.len();
    if n == 0 {
        return String::new();
    }
    let position = position % n;

    // Window wider than the ring clamps to the ring (kept odd so the focus
    // stays centered) instead of wrapping duplicates into view.
    let mut window = config.window.max(1).min(n);
    if window % 2 == 0 {
        window -= 1;
    }
    let half = (window / 2) as isize;

    let budget = width.saturating_sub(1);
    let mut line = String::new();
    let mut used = 0usize;

    for offset in -half..=half {
        let index = (position as isize + offset).rem_euclid(n as isize) as usize;
        let name = &names[index];
        let distance = offset.unsigned_abs();
        let visible = name.chars().count() + if distance == 0 { 2 } else { 0 };
        let sep_cost = if line.is_empty() { 0 } else { SEPARATOR.len() };

        if used + sep_cost + visible > budget {
            if used + sep_cost + 1 <= budget {
                if !line.is_empty() {
                    line.push_str(SEPARATOR);
                }
                line.push_str(TRUNCATION_MARKER);
            }
            return line;
        }

        if !line.is_empty() {
            line.push_str(SEPARATOR);
            used += SEPARATOR.len();
        }
        line.push_str(&style_cell(name, distance, config.palette, emphasize_focus));
        used += visible;
    }

    line
}

/// Style one window cell by its ring distance from the focus.
fn style_cell(name: &str, distance: usize, palette: Palette, emphasize_focus: bool) -> String {
    match distance {
        0 if emphasize_focus => format!("[{name}]")
            .with(palette.focus())
            .attribute(Attribute::Bold)
            .to_string(),
        0 => format!("[{name}]"),
        1 => name.with(palette.near()).to_string(),
        2 => name
            .with(palette.far())
            .attribute(Attribute::Dim)
            .to_string(),
        _ => name.to_string(),
    }
}
