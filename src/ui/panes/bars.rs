//! Bar chart pane: one bar per element, colored by the last reported
//! step.

use crate::sort::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};
use rustc_hash::FxHashMap;

/// Render the bar pane.
///
/// `highlight` is the pair from the last step the sorter reported; the
/// second index wins if the pair is degenerate. `finished` recolors
/// every bar once the trace is exhausted.
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    data: &[u32],
    highlight: Option<Step>,
    finished: bool,
    max_value: u32,
) {
    let block = Block::default()
        .title(" Bars ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if data.is_empty() {
        frame.render_widget(block, area);
        return;
    }

    // Index -> color overrides for the highlighted pair.
    let mut colors: FxHashMap<usize, Color> = FxHashMap::default();
    if let Some(step) = highlight {
        colors.insert(step.0, DEFAULT_THEME.highlight_a);
        colors.insert(step.1, DEFAULT_THEME.highlight_b);
    }

    let base = if finished {
        DEFAULT_THEME.sorted
    } else {
        DEFAULT_THEME.bar
    };

    let bars: Vec<Bar> = data
        .iter()
        .enumerate()
        .map(|(idx, &value)| {
            let color = colors.get(&idx).copied().unwrap_or(base);
            Bar::default()
                .value(u64::from(value))
                .text_value(String::new())
                .style(Style::default().fg(color))
        })
        .collect();

    // Adjacent rectangles sized to fill the pane: width / count per
    // bar, no gap.
    let inner_width = area.width.saturating_sub(2).max(1);
    let count = u16::try_from(data.len()).unwrap_or(u16::MAX);
    let bar_width = (inner_width / count).max(1);

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(0)
        .max(u64::from(max_value))
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
