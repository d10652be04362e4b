// src/render/table.rs

//! Plain-text status table for the terminal.

use console::{style, Term};
use tokio::time::Instant;

use crate::errors::Result;
use crate::pool::{RunEpoch, Snapshot};
use crate::render::Renderer;
use crate::types::Stage;

/// Shown in a time column that has not been stamped yet.
pub const TIME_PLACEHOLDER: &str = "--:--:--";

const HEADERS: [&str; 4] = ["Task", "Status", "Started", "Finished"];
const COLUMN_GAP: &str = "  ";

fn format_time(epoch: &RunEpoch, at: Option<Instant>) -> String {
    match at {
        Some(at) => epoch.wall_clock(at).format("%H:%M:%S").to_string(),
        None => TIME_PLACEHOLDER.to_string(),
    }
}

fn colorize(stage: Stage, padded: String) -> String {
    let styled = match stage {
        Stage::Pending => style(padded).red(),
        Stage::Running => style(padded).yellow(),
        Stage::Done => style(padded).green(),
    };
    let styled = styled.force_styling(true);
    styled.to_string()
}

/// Lay out `snapshot` as an aligned table: a header row, a dashed rule, and
/// one row per task in index order.
///
/// Widths are computed on the plain text, so color codes added when
/// `colored` is set never shift the columns.
pub fn format_table(snapshot: &Snapshot, colored: bool) -> String {
    let rows: Vec<(Stage, [String; 4])> = snapshot
        .rows
        .iter()
        .map(|row| {
            (
                row.stage,
                [
                    row.name.clone(),
                    row.stage.label().to_string(),
                    format_time(&snapshot.epoch, row.started_at),
                    format_time(&snapshot.epoch, row.finished_at),
                ],
            )
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for (_, cells) in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(join_padded(HEADERS.iter().copied(), &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP),
    );

    for (stage, cells) in &rows {
        let mut padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad(cell, *width))
            .collect();
        if colored {
            let status = std::mem::take(&mut padded[1]);
            padded[1] = colorize(*stage, status);
        }
        lines.push(padded.join(COLUMN_GAP).trim_end().to_string());
    }

    lines.join("\n")
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.chars().count());
    format!("{cell}{}", " ".repeat(fill))
}

fn join_padded<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| pad(cell, *width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
        .trim_end()
        .to_string()
}

/// Redraws the table on stdout, clearing the screen before every frame.
#[derive(Debug)]
pub struct TerminalRenderer {
    term: Term,
    colored: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
            colored: console::colors_enabled(),
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TerminalRenderer {
    // Blocking stdout writes on the runtime thread; one small frame per
    // interval is cheap enough not to need `spawn_blocking`.
    fn render(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.term.clear_screen()?;
        self.term.write_line(&format_table(snapshot, self.colored))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::StatusTable;
    use crate::types::Task;
    use std::time::Duration;

    fn sample() -> StatusTable {
        StatusTable::new(&[
            Task::new(0, "compile", 2),
            Task::new(1, "B", 1),
            Task::new(2, "C", 3),
        ])
    }

    #[test]
    fn pending_rows_show_placeholders() {
        let text = format_table(&sample().snapshot(), false);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Task     Status   Started   Finished");
        assert_eq!(lines[1], "-------  -------  --------  --------");
        assert_eq!(lines[2], "compile  Pending  --:--:--  --:--:--");
        assert_eq!(lines[3], "B        Pending  --:--:--  --:--:--");
    }

    #[test]
    fn stamped_rows_show_wall_clock_times() {
        let table = sample();
        let epoch = table.epoch();
        let start = epoch.started() + Duration::from_secs(5);
        let end = start + Duration::from_secs(2);
        assert!(table.set_running(0, start));
        assert!(table.set_done(0, end));
        assert!(table.set_running(1, start));

        let expected_start = epoch.wall_clock(start).format("%H:%M:%S").to_string();
        let expected_end = epoch.wall_clock(end).format("%H:%M:%S").to_string();

        let text = format_table(&table.snapshot(), false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[2],
            format!("compile  Done     {expected_start}  {expected_end}")
        );
        assert_eq!(
            lines[3],
            format!("B        Running  {expected_start}  --:--:--")
        );
    }

    #[test]
    fn colored_output_keeps_status_text() {
        let text = format_table(&sample().snapshot(), true);
        let stripped = console::strip_ansi_codes(&text);
        assert_eq!(stripped, format_table(&sample().snapshot(), false));
        assert!(text.contains("\u{1b}["));
    }

    #[test]
    fn empty_snapshot_renders_header_only() {
        let text = format_table(&StatusTable::new(&[]).snapshot(), false);
        assert_eq!(
            text,
            "Task  Status  Started  Finished\n----  ------  -------  --------"
        );
    }
}
