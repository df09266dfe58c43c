//! Full-screen rendering of a [`Dashboard`].

use chrono::{DateTime, Local, Utc};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
};
use weather_core::{Dashboard, Headline, Screen, Tile, WeatherSnapshot, dashboard};

const ACCENT: Color = Color::Magenta;

pub fn draw(f: &mut Frame, state: &Dashboard) {
    let rows = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(f.area());

    render_title(f, rows[0]);
    render_search(f, rows[1], state);

    match state.screen() {
        Screen::Loading => render_loading(f, rows[2]),
        Screen::Blank => {}
        Screen::Weather(snapshot) => render_weather(f, rows[2], snapshot, state.received_at()),
    }

    render_keys(f, rows[3]);
}

fn render_title(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            dashboard::TITLE,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(dashboard::SUBTITLE, Style::default().fg(Color::Gray))),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_search(f: &mut Frame, area: Rect, state: &Dashboard) {
    let input = if state.search_input().is_empty() {
        Span::styled("Enter city name...", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(state.search_input().to_string())
    };

    let line = Line::from(vec![Span::styled("🔍 ", Style::default()), input, Span::raw("▏")]);
    let block = Block::bordered()
        .title(" Search ")
        .border_style(Style::default().fg(ACCENT));
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_loading(f: &mut Frame, area: Rect) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    f.render_widget(
        Paragraph::new("Loading weather...")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        middle,
    );
}

fn render_weather(
    f: &mut Frame,
    area: Rect,
    snapshot: &WeatherSnapshot,
    received_at: Option<DateTime<Utc>>,
) {
    let head = Headline::from_snapshot(snapshot);
    let [hero, details, footer] = Layout::vertical([
        Constraint::Length(6),
        Constraint::Min(8),
        Constraint::Length(1),
    ])
    .areas(area);

    render_hero(f, hero, &head);
    render_tiles(f, details, &dashboard::tiles(snapshot));

    let mut footer_text = head.last_updated.clone();
    if let Some(at) = received_at {
        let local: DateTime<Local> = at.into();
        footer_text.push_str(&format!(" | fetched {}", local.format("%H:%M:%S")));
    }
    f.render_widget(
        Paragraph::new(footer_text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray)),
        footer,
    );
}

fn render_hero(f: &mut Frame, area: Rect, head: &Headline) {
    let block = Block::bordered()
        .title(Span::styled(
            format!(" 📍 {} ", head.place),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(Color::Blue));

    let lines = vec![
        Line::from(vec![
            Span::raw(head.country.clone()),
            Span::raw("   "),
            Span::styled(head.localtime.clone(), Style::default().fg(Color::Gray)),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled(
                head.temp_c.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(head.temp_f.clone(), Style::default().fg(Color::Gray)),
            Span::raw("     "),
            Span::raw(head.emoji),
            Span::raw(" "),
            Span::styled(head.condition.clone(), Style::default().add_modifier(Modifier::BOLD)),
        ]),
    ];

    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}

fn render_tiles(f: &mut Frame, area: Rect, tiles: &[Tile]) {
    let outer = Block::bordered().title(" Weather Details ");
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let rows = Layout::vertical([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(inner);
    for (row, chunk) in rows.iter().zip(tiles.chunks(4)) {
        let cols = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(*row);
        for (col, tile) in cols.iter().zip(chunk) {
            render_tile(f, *col, tile);
        }
    }
}

fn render_tile(f: &mut Frame, area: Rect, tile: &Tile) {
    let mut lines = vec![Line::from(Span::styled(
        tile.value.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if let Some(detail) = &tile.detail {
        lines.push(Line::from(Span::styled(detail.clone(), Style::default().fg(Color::Gray))));
    }

    let block = Block::bordered()
        .title(format!(" {} ", tile.label))
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_keys(f: &mut Frame, area: Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let line = Line::from(vec![
        Span::styled("Enter", bold),
        Span::raw(" search  "),
        Span::styled("Backspace", bold),
        Span::raw(" delete  "),
        Span::styled("Esc", bold),
        Span::raw(" quit"),
    ]);
    f.render_widget(Paragraph::new(line).style(Style::default().fg(Color::DarkGray)), area);
}
