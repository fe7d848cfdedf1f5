use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::App;

/// Render the home view.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(5),    // Splash
            Constraint::Length(3), // Help bar
        ])
        .split(area);

    let title = Paragraph::new("Not the Singer")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let splash = Paragraph::new(vec![
        Line::from(""),
        Line::from("  Albums, singles, mixes and remixes,"),
        Line::from("  gathered from every platform in one place."),
        Line::from(""),
        Line::from(Span::styled(
            "  Press Enter to browse the catalog.",
            Style::default().fg(Color::Yellow),
        )),
    ])
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(splash, chunks[1]);

    let help = Paragraph::new("  Enter Catalog  m Menu  q Quit")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);

    if app.state.menu_open() {
        super::render_menu(frame, area);
    }
}
