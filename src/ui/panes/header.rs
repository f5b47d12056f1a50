//! Header pane: the algorithm menu and the current step delay.

use crate::sort::Algorithm;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the header with the six algorithms and the speed readout.
pub fn render_header_pane(frame: &mut Frame, area: Rect, selected: Algorithm, speed_ms: u64) {
    let block = Block::default()
        .title(" Sortty ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(14)])
        .split(inner);

    // Menu entries: "1 Bubble Sort  2 Selection Sort ..." with the
    // active algorithm picked out.
    let mut spans = Vec::new();
    for (idx, algorithm) in Algorithm::ALL.iter().enumerate() {
        let label = format!(" {} {} ", idx + 1, algorithm.name());
        let style = if *algorithm == selected {
            Style::default()
                .fg(DEFAULT_THEME.selected)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.comment)
        };
        spans.push(Span::styled(label, style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), columns[0]);

    let speed = Paragraph::new(Line::from(Span::styled(
        format!("{} ms/step ", speed_ms),
        Style::default().fg(DEFAULT_THEME.secondary),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(speed, columns[1]);
}
