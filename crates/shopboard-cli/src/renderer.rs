//! Terminal rendering of kiosk pages
//!
//! Rich mode clears the screen and draws one colored band per vehicle using
//! termimad's crossterm; plain mode prints the page's text form.

use std::io::{self, Write};

use anyhow::Result;
use shopboard_core::{
    display::{PageHeader, StageEmphasis, StageTone, VehicleRow, COLUMN_HEADINGS, LOADING_MESSAGE},
    PageView, Slot,
};
use termimad::{
    crossterm::{
        cursor::MoveTo,
        queue,
        style::{Color, Stylize},
        terminal::{Clear, ClearType},
    },
    MadSkin,
};

/// Column widths, in characters, matching `COLUMN_HEADINGS`.
const COLUMN_WIDTHS: [usize; 5] = [26, 16, 24, 14, 12];

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::White);
        skin.italic.set_fg(Color::DarkGrey);

        Self { rich_enabled, skin }
    }

    /// Render a page to stdout, or the loading line before the first page.
    pub fn render(&self, view: Option<&PageView>) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, view)?;
        out.flush()?;
        Ok(())
    }

    /// Render into any writer.
    pub fn render_to<W: Write>(&self, out: &mut W, view: Option<&PageView>) -> Result<()> {
        if !self.rich_enabled {
            match view {
                Some(view) => write!(out, "{view}")?,
                None => writeln!(out, "{LOADING_MESSAGE}")?,
            }
            return Ok(());
        }

        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        let Some(view) = view else {
            writeln!(out, "{}", self.skin.inline(&format!("*{LOADING_MESSAGE}*")))?;
            return Ok(());
        };

        writeln!(
            out,
            "{}",
            self.skin.inline(&format!("**{}**", PageHeader(view)))
        )?;
        writeln!(out)?;

        if view.is_status_only() {
            writeln!(out, "{}", view.board_name.as_str().bold().yellow())?;
            return Ok(());
        }

        let headings: Vec<String> = COLUMN_HEADINGS
            .iter()
            .zip(COLUMN_WIDTHS)
            .map(|(heading, width)| fit(heading, width))
            .collect();
        writeln!(out, " {}", headings.join(" ").dark_grey())?;

        for slot in &view.slots {
            match slot {
                Slot::Vehicle(vehicle) => write_row(out, &VehicleRow(vehicle))?,
                Slot::Empty => writeln!(out)?,
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

fn write_row<W: Write>(out: &mut W, row: &VehicleRow<'_>) -> Result<()> {
    let (fg, bg) = tone_colors(row.tone());
    let stage = if row.is_live() {
        format!("● {}", row.stage())
    } else {
        row.stage().to_string()
    };

    let cells = [
        format!("{} {}", row.model(), row.plate()),
        row.client().to_string(),
        stage,
        row.delivery_date().to_string(),
        row.mechanic().to_string(),
    ];
    let line: Vec<String> = cells
        .iter()
        .zip(COLUMN_WIDTHS)
        .map(|(cell, width)| fit(cell, width))
        .collect();
    let line = format!(" {} ", line.join(" "));

    let styled = line.with(fg).on(bg);
    match row.emphasis() {
        StageEmphasis::Large => writeln!(out, "{}", styled.bold())?,
        StageEmphasis::Compact => writeln!(out, "{styled}")?,
    }
    Ok(())
}

/// Foreground and background for a row tone.
pub fn tone_colors(tone: StageTone) -> (Color, Color) {
    match tone {
        StageTone::Alert => (Color::White, Color::DarkRed),
        StageTone::Idle => (Color::Grey, Color::AnsiValue(234)),
        StageTone::Pending => (Color::Black, Color::Yellow),
        StageTone::Active => (Color::White, Color::AnsiValue(208)),
        StageTone::Blocked => (Color::White, Color::DarkBlue),
        StageTone::Testing => (Color::Black, Color::Green),
        StageTone::Done => (Color::White, Color::DarkGreen),
        StageTone::Declined => (Color::White, Color::DarkMagenta),
        StageTone::Neutral => (Color::White, Color::AnsiValue(238)),
    }
}

/// Pad or truncate `text` to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        format!("{text:<width$}")
    } else {
        let mut truncated: String = text.chars().take(width.saturating_sub(1)).collect();
        truncated.push('…');
        truncated
    }
}
