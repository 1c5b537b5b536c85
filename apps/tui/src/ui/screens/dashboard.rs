use crate::app::App;
use crate::ui::widgets::popup::render_alert;
use crate::ui::widgets::render_chart;
use crate::ui::widgets::summary::render_summary;
use judge_stats_core::ChartTarget;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use tachyonfx::EffectRenderer;
use throbber_widgets_tui::{Throbber, BRAILLE_SIX};

pub fn render_dashboard(app: &App, f: &mut Frame<'_>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Username input
            Constraint::Min(8),    // Results
            Constraint::Length(3), // Status
            Constraint::Length(1), // Shortcuts
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    render_title(f, layout[0]);
    render_input(app, f, layout[1]);
    render_results(app, f, layout[2]);
    render_status(app, f, layout[3]);
    render_shortcuts(f, layout[4]);

    if let Some(message) = &app.alert {
        render_alert(f, message);
    }
}

fn render_title(f: &mut Frame<'_>, area: Rect) {
    let title = Paragraph::new(TextLine::from(vec![
        Span::styled(
            "Judge ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Stats",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title, area);
}

fn render_input(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Username ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if app.alert.is_some() {
            Color::DarkGray
        } else {
            Color::Yellow
        }));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(24)])
        .split(inner);

    let input = Paragraph::new(TextLine::from(vec![
        Span::styled("> ", Style::default().fg(Color::Yellow)),
        Span::raw(app.username_input.as_str()),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]));
    f.render_widget(input, columns[0]);

    if app.is_loading() {
        let throbber = Throbber::default()
            .label("Loading...")
            .style(Style::default().fg(Color::Gray))
            .throbber_style(Style::default().fg(Color::Cyan))
            .throbber_set(BRAILLE_SIX);
        let mut state = app.throbber.clone();
        f.render_stateful_widget(throbber, columns[1], &mut state);
    }
}

fn render_results(app: &App, f: &mut Frame<'_>, area: Rect) {
    if !app.results_visible {
        let hint = if app.is_loading() {
            "Fetching statistics..."
        } else {
            "Type a username and press Enter to load statistics."
        };
        let paragraph = Paragraph::new(Text::from(vec![
            TextLine::from(""),
            TextLine::from(Span::styled(hint, Style::default().fg(Color::Gray))),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(paragraph, area);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(6)])
        .split(area);
    render_summary(f, rows[0], &app.summary);

    let grid = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    let cells = grid
        .iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(*row)
                .to_vec()
        })
        .collect::<Vec<_>>();

    for (target, cell) in ChartTarget::ALL.into_iter().zip(cells) {
        render_chart(f, cell, target, app.charts.get(&target));
    }

    if let Ok(mut effect) = app.reveal_fx.lock() {
        if let Some(effect) = effect.as_mut() {
            f.buffer_mut().render_effect(effect, area, app.last_tick);
        }
    }
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let mut spans = Vec::new();
    if !app.status_message.is_empty() {
        let style = if app.status_message.starts_with("Could not") {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        spans.push(Span::styled(app.status_message.clone(), style));
        spans.push(Span::raw("  "));
    }
    if let Some(fetched) = app.last_fetch {
        spans.push(Span::styled(
            format!("last fetch {}  ", fetched.format("%H:%M:%S")),
            Style::default().fg(Color::Gray),
        ));
    }
    spans.push(Span::styled(
        format!("policy {}  {}", app.policy, app.endpoint),
        Style::default().fg(Color::DarkGray),
    ));

    let status = Paragraph::new(TextLine::from(spans))
        .block(status_block)
        .wrap(Wrap { trim: true });
    f.render_widget(status, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let key = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let shortcuts = TextLine::from(vec![
        Span::styled("Enter", key),
        Span::raw(" load  "),
        Span::styled("Backspace", key),
        Span::raw(" edit  "),
        Span::styled("Esc", key),
        Span::raw(" quit"),
    ]);
    f.render_widget(Paragraph::new(shortcuts).alignment(Alignment::Center), area);
}
