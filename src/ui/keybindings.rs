use crate::app::AppState;
use crate::domain::UiMode;
use crate::labels::Labels;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar for the current mode
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let hints = hints_for(app.ui_mode(), app.labels, app.ui.narrow);
    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}

fn hints_for(mode: UiMode, labels: &Labels, narrow: bool) -> Line<'static> {
    let spans = match mode {
        UiMode::Normal => vec![
            Span::raw(format!(" {}   ", labels.add_hint)),
            Span::raw("↑/↓ select   "),
            Span::raw("Tab ✓   "),
            Span::raw("F2 edit   "),
            Span::raw(format!("Del {}   ", labels.delete)),
            Span::raw(if narrow { "Ctrl+F filter   " } else { "F1/F3/F4 filter   " }),
            Span::raw("Ctrl+S search   "),
            Span::raw("Ctrl+Q quit"),
        ],
        UiMode::Editing => vec![
            Span::raw(format!(" Enter {}   ", labels.save)),
            Span::raw(format!("Esc {}", labels.cancel)),
        ],
        UiMode::FilterDropdown => vec![
            Span::raw(" ↑/↓ move   "),
            Span::raw("Enter select   "),
            Span::raw(format!("Esc {}", labels.cancel)),
        ],
        UiMode::Search => vec![
            Span::raw(" ↑/↓ select   "),
            Span::raw("Tab ✓   "),
            Span::raw("F2 edit   "),
            Span::raw(format!("Del {}   ", labels.delete)),
            Span::raw("Esc close"),
        ],
        UiMode::Alert => vec![Span::raw(format!(" {}", labels.dismiss_hint))],
    };
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::Language;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_hints_follow_mode() {
        let labels = Labels::for_language(Language::English);
        assert!(line_text(&hints_for(UiMode::Editing, labels, false)).contains("Enter Save"));
        assert!(line_text(&hints_for(UiMode::Normal, labels, true)).contains("Ctrl+F filter"));
        assert!(line_text(&hints_for(UiMode::Normal, labels, false)).contains("F1/F3/F4 filter"));
    }
}
