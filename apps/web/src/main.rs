// The dashboard only runs in the browser; native builds exist for the tests.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod animation;
mod charts;
mod port;
#[cfg(target_arch = "wasm32")]
mod source;

use judge_stats_core::{ChartTarget, EndpointTemplate, DEFAULT_ENDPOINT};
use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::port::WebState;

/// Endpoint from the page's `?endpoint=` parameter, else the default.
fn endpoint_from(param: Option<String>) -> EndpointTemplate {
    param
        .filter(|value| !value.trim().is_empty())
        .map_or_else(
            || EndpointTemplate::new(DEFAULT_ENDPOINT),
            |value| EndpointTemplate::new(&value),
        )
}

#[cfg(target_arch = "wasm32")]
fn main() -> std::io::Result<()> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use judge_stats_core::{RequestController, RequestPolicy, SubmitOutcome};
    use ratzilla::event::KeyCode;
    use ratzilla::{DomBackend, WebRenderer};
    use ratzilla::ratatui::Terminal;
    use wasm_bindgen_futures::spawn_local;

    use crate::animation::SpinnerMode;
    use crate::port::{BrowserNotifier, WebPort};
    use crate::source::BrowserStatsSource;

    let query = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get("endpoint"));
    let endpoint = endpoint_from(query);
    web_sys::console::info_1(&format!("statistics endpoint: {endpoint}").into());

    let state = Rc::new(RefCell::new(WebState::default()));
    let port = WebPort::new(Rc::clone(&state), BrowserNotifier);
    let controller = Rc::new(RequestController::new(
        BrowserStatsSource,
        endpoint,
        RequestPolicy::default(),
    ));

    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let state = Rc::clone(&state);
        move |event| match event.code {
            KeyCode::Enter => {
                let username = state.borrow().username_input.clone();
                let controller = Rc::clone(&controller);
                let port = port.clone();
                spawn_local(async move {
                    match controller.submit(&username, &port).await {
                        Ok(SubmitOutcome::Failed(error)) => {
                            web_sys::console::error_1(
                                &format!("error fetching stats: {error}").into(),
                            );
                        }
                        Ok(_) => {}
                        Err(error) => {
                            web_sys::console::debug_1(&format!("submit rejected: {error}").into());
                        }
                    }
                });
            }
            KeyCode::Backspace => {
                state.borrow_mut().username_input.pop();
            }
            KeyCode::Char(c) => {
                state.borrow_mut().username_input.push(c);
            }
            _ => {}
        }
    });

    terminal.draw_web(move |f| {
        let mut state = state.borrow_mut();
        let mode = if state.is_loading() {
            SpinnerMode::Running
        } else {
            SpinnerMode::Paused
        };
        state.spinner.advance(js_sys::Date::now() / 1000.0, mode);
        render_page(&state, f);
    });

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("judge_stats_web runs in the browser; build it for wasm32-unknown-unknown");
}

fn render_page(state: &WebState, f: &mut Frame<'_>) {
    let area = f.area();
    let block = Block::default()
        .title("Judge Stats")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area).inner(Margin::new(1, 1));
    f.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(1),
        ])
        .split(inner);

    render_input(state, f, layout[0]);
    render_results(state, f, layout[1]);
    render_footer(state, f, layout[2]);
}

fn render_input(state: &WebState, f: &mut Frame<'_>, area: Rect) {
    let mut spans = vec![
        Span::styled("> ", Style::default().fg(Color::Yellow)),
        Span::raw(state.username_input.clone()),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ];
    if state.is_loading() {
        spans.push(Span::styled(
            format!("   {} Loading...", state.spinner.frame()),
            Style::default().fg(Color::Cyan),
        ));
    }

    let paragraph = Paragraph::new(TextLine::from(spans)).block(
        Block::default()
            .title("Username")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(paragraph, area);
}

fn render_results(state: &WebState, f: &mut Frame<'_>, area: Rect) {
    if !state.results_visible {
        let paragraph = Paragraph::new(Text::from(TextLine::from(
            "Type a username and press Enter to load statistics.",
        )))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, area);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(8)])
        .split(area);
    charts::render_summary(f, rows[0], &state.summary);

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
        charts::render_chart(f, cell, target, state.charts.get(&target));
    }
}

fn render_footer(state: &WebState, f: &mut Frame<'_>, area: Rect) {
    let line = state.failure.as_ref().map_or_else(
        || {
            TextLine::from(Span::styled(
                "Enter load  Backspace edit",
                Style::default().fg(Color::Gray),
            ))
        },
        |failure| {
            TextLine::from(Span::styled(
                format!("Could not load statistics: {failure}"),
                Style::default().fg(Color::Red),
            ))
        },
    );
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
