//! Bar chart pane rendering

use crate::chart::Chart;
use crate::run::SortRun;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Partial block glyphs, indexed by eighths filled
const EIGHTHS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// One terminal column of the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub height: u32,
    /// Covers a bar touched by the last exchange
    pub highlighted: bool,
}

/// Squeeze or stretch the chart's bars into `width` columns.
///
/// With more bars than columns each column shows the tallest bar it covers;
/// with fewer, each bar is repeated across `width / bars` columns.
pub fn bar_columns(chart: &Chart, width: usize) -> Vec<Column> {
    let bars = chart.bars();
    if bars.is_empty() || width == 0 {
        return Vec::new();
    }
    let highlighted = |index: usize| {
        chart
            .last_exchange()
            .is_some_and(|(left, right)| index == left || index == right)
    };

    if bars.len() <= width {
        let repeat = width / bars.len();
        return bars
            .iter()
            .enumerate()
            .flat_map(|(i, &height)| {
                std::iter::repeat(Column {
                    height,
                    highlighted: highlighted(i),
                })
                .take(repeat)
            })
            .collect();
    }

    (0..width)
        .map(|col| {
            let start = col * bars.len() / width;
            let end = ((col + 1) * bars.len() / width).max(start + 1);
            Column {
                height: bars[start..end].iter().copied().max().unwrap_or(0),
                highlighted: (start..end).any(highlighted),
            }
        })
        .collect()
}

/// Render one algorithm's chart
pub fn render_chart_pane(frame: &mut Frame, area: Rect, run: &SortRun) {
    let chart = run.chart();
    let finished = run.is_finished();

    let border_style = if finished {
        Style::default()
            .fg(DEFAULT_THEME.success)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let title = Line::from(vec![Span::styled(
        format!(" {} ", run.kind().description()),
        Style::default()
            .fg(DEFAULT_THEME.title)
            .add_modifier(Modifier::BOLD),
    )]);
    let counters = Line::from(vec![
        Span::styled(
            format!(" Moves: {} ", run.moves()),
            Style::default().fg(if finished {
                DEFAULT_THEME.success
            } else {
                DEFAULT_THEME.fg
            }),
        ),
        Span::styled(
            format!(" Exchanges: {} ", chart.exchanges()),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ]);

    let block = Block::default()
        .title(title)
        .title_bottom(counters.right_aligned())
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    let width = inner.width as usize;
    let height = inner.height as usize;

    let columns = bar_columns(chart, width);
    let max = chart.max_height().max(1) as usize;
    let bar_style = Style::default().fg(if finished {
        DEFAULT_THEME.success
    } else {
        DEFAULT_THEME.primary
    });
    let exchange_style = Style::default().fg(DEFAULT_THEME.secondary);

    // Heights in eighths of a row, so the top cell can be partially filled
    let eighths: Vec<usize> = columns
        .iter()
        .map(|c| c.height as usize * height * 8 / max)
        .collect();

    let lines: Vec<Line> = (0..height)
        .map(|row| {
            let floor = (height - 1 - row) * 8;
            let spans: Vec<Span> = columns
                .iter()
                .zip(&eighths)
                .map(|(column, &filled)| {
                    let glyph = EIGHTHS[filled.saturating_sub(floor).min(8)];
                    let style = if column.highlighted && !finished {
                        exchange_style
                    } else {
                        bar_style
                    };
                    Span::styled(glyph.to_string(), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::MoveSink;

    #[test]
    fn test_narrow_area_keeps_tallest_bar_per_column() {
        let chart = Chart::new(vec![1, 4, 2, 3]);
        let columns = bar_columns(&chart, 2);
        let heights: Vec<u32> = columns.iter().map(|c| c.height).collect();
        assert_eq!(heights, vec![4, 3]);
    }

    #[test]
    fn test_wide_area_repeats_bars() {
        let chart = Chart::new(vec![2, 1]);
        let heights: Vec<u32> = bar_columns(&chart, 5).iter().map(|c| c.height).collect();
        assert_eq!(heights, vec![2, 2, 1, 1]);
    }

    #[test]
    fn test_last_exchange_is_highlighted() {
        let mut chart = Chart::new(vec![3, 1, 2]);
        chart.notify_exchange(0, 1);
        let columns = bar_columns(&chart, 3);
        let marked: Vec<bool> = columns.iter().map(|c| c.highlighted).collect();
        assert_eq!(marked, vec![true, true, false]);
    }
}
