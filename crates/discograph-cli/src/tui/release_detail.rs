use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use discograph_core::Release;

use super::App;

/// Render the release detail view.
pub fn render(frame: &mut Frame, app: &App, release_id: &str) {
    let area = frame.area();

    let Some(release) = app.catalog.get(release_id) else {
        let msg = Paragraph::new("Release not found").style(Style::default().fg(Color::Red));
        frame.render_widget(msg, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(4), // Metadata
            Constraint::Min(5),    // Listening links
            Constraint::Length(3), // Help bar
        ])
        .split(area);

    render_title(frame, release, chunks[0]);
    render_meta(frame, release, chunks[1]);
    render_links(frame, release, chunks[2]);
    render_help(frame, chunks[3]);
}

fn render_title(frame: &mut Frame, release: &Release, area: Rect) {
    let title = Paragraph::new(release.name.clone())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_meta(frame: &mut Frame, release: &Release, area: Rect) {
    let track_word = if release.track_count > 1 {
        "tracks"
    } else {
        "track"
    };
    let meta = Paragraph::new(vec![
        Line::from(format!(
            "  {} \u{2022} {} {} \u{2022} {}",
            release.type_label(),
            release.track_count,
            track_word,
            release.release_date.format("%-d %b %Y"),
        )),
        Line::from(Span::styled(
            format!("  {}", release.artwork()),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(meta, area);
}

fn render_links(frame: &mut Frame, release: &Release, area: Rect) {
    // Only usable links are listed; placeholder entries stay hidden.
    let lines: Vec<Line<'_>> = if release.links.available().count() == 0 {
        vec![Line::from(Span::styled(
            "  No listening links available.",
            Style::default().fg(Color::Yellow),
        ))]
    } else {
        release
            .links
            .available()
            .map(|(platform, url)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<14}", platform.display_name()),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw(url.to_string()),
                ])
            })
            .collect()
    };

    let links = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Listen"),
    );
    frame.render_widget(links, area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new("  Esc/b Back to catalog  q Quit")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}
