use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use discograph_core::Origin;

use super::App;

/// Render the catalog grid view.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(5),    // Release table
            Constraint::Length(3), // Help bar
        ])
        .split(area);

    render_title(frame, app, chunks[0]);
    render_table(frame, app, chunks[1]);
    render_help(frame, chunks[2]);

    if app.state.menu_open() {
        super::render_menu(frame, area);
    }
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(format!(
        "Releases    {} shown    filter: {}",
        app.catalog.filtered().len(),
        app.catalog.filter().key()
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let releases = app.catalog.filtered();

    if releases.is_empty() {
        let empty = Paragraph::new("  No items found...")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("Releases"));
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("#").style(Style::default().fg(Color::DarkGray)),
        Cell::from("Title").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Type"),
        Cell::from("Tracks"),
        Cell::from("Released"),
        Cell::from("Source"),
    ])
    .height(1);

    // area.height - 2 for borders - 1 for header
    let viewport_height = (area.height.saturating_sub(3)) as usize;
    let visible_start = app.grid_offset;
    let visible_end = (visible_start + viewport_height).min(releases.len());

    let rows: Vec<Row> = releases
        .iter()
        .enumerate()
        .skip(visible_start)
        .take(viewport_height)
        .map(|(i, release)| {
            let style = if i == app.selected {
                Style::default().bg(Color::DarkGray).fg(Color::White)
            } else {
                Style::default()
            };
            let source = match release.origin {
                Origin::Primary => "catalog",
                Origin::Secondary => "uploads",
            };
            Row::new(vec![
                Cell::from(format!("{}", i + 1)),
                Cell::from(release.name.clone()),
                Cell::from(release.type_label()),
                Cell::from(format!("{}", release.track_count)),
                Cell::from(release.release_date.format("%-d %b %Y").to_string()),
                Cell::from(source),
            ])
            .style(style)
        })
        .collect();

    let title = if releases.len() > viewport_height {
        format!(
            "Releases [{}-{} of {}]",
            visible_start + 1,
            visible_end,
            releases.len()
        )
    } else {
        "Releases".to_string()
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Percentage(40),
            Constraint::Length(7),
            Constraint::Length(8),
            Constraint::Length(13),
            Constraint::Length(9),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(table, area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "  \u{2191}/k Up  \u{2193}/j Down  Enter Detail  1-5 Filter  Esc Home  q Quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}
