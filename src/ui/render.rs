use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::app::{App, Screen};
use crate::ui::faces::{face_lines, FACE_HEIGHT};
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{
    ACCENT, DIE_FACE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, HEADLINE, STATUS_ERROR,
    STATUS_OK,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(header_widget(app), header);
    frame.render_widget(Clear, body);
    match app.screen() {
        Screen::Home => draw_home(frame, body),
        Screen::Dice(_) => draw_dice(frame, body, app),
    }
    frame.render_widget(footer_widget(app, footer.width), footer);
}

fn header_widget(app: &App) -> Paragraph<'static> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let separator_style = Style::default().fg(HEADER_SEPARATOR);

    let mut spans = vec![
        Span::styled("  RollFive", Style::default().fg(ACCENT)),
        Span::styled("  │  ", separator_style),
        Span::styled(format!("rolls: {}", app.store().rolls()), text_style),
    ];
    if let Some((text, ok)) = app.status() {
        let color = if ok { STATUS_OK } else { STATUS_ERROR };
        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled(text.to_string(), Style::default().fg(color)));
    }

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn draw_home(frame: &mut Frame<'_>, body: ratatui::layout::Rect) {
    let lines = vec![
        Line::from(""),
        Line::styled(
            "Roll the dice",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled("Press Enter", Style::default().fg(HEADER_TEXT)),
        Line::from(""),
    ];
    let area = centered_rect_by_size(body, 27, lines.len() as u16 + 2);
    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, area);
}

fn draw_dice(frame: &mut Frame<'_>, body: ratatui::layout::Rect, app: &App) {
    let state = app.store().state();

    let mut lines = Vec::with_capacity(FACE_HEIGHT + 2);
    for row in 0..FACE_HEIGHT {
        let mut text = String::new();
        for (i, &value) in state.dice.values().iter().enumerate() {
            if i > 0 {
                text.push_str("  ");
            }
            text.push_str(face_lines(value)[row]);
        }
        lines.push(Line::styled(text, Style::default().fg(DIE_FACE)));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        state.headline.clone(),
        Style::default().fg(HEADLINE),
    ));

    let width = lines.iter().map(Line::width).max().unwrap_or(1) as u16;
    let height = lines.len() as u16;
    let area = centered_rect_by_size(body, width, height);
    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn footer_widget(app: &App, width: u16) -> Paragraph<'static> {
    let hints = if app.on_dice_screen() {
        " r/Space: Roll │ s: Share │ Esc: Back │ q: Quit"
    } else {
        " Enter: Roll the dice │ q: Quit"
    };
    let version = format!("v{} ", VERSION);

    // Pad by char count, not byte count (hints contain multi-byte separators).
    let hints_width = hints.chars().count();
    let version_width = version.chars().count();
    let content_width = width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(hints_width)
        .saturating_sub(version_width);

    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let line = Line::from(vec![
        Span::styled(hints, text_style),
        Span::styled(" ".repeat(padding), text_style),
        Span::styled(version, text_style),
    ]);

    Paragraph::new(line)
        .style(text_style)
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}
