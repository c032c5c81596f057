//! Game-over message and start button

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use simon_says::game::ViewModel;

pub fn render_footer(frame: &mut Frame, message_area: Rect, start_area: Rect, view: &ViewModel) {
    let message = Paragraph::new(view.game_over_message.unwrap_or(""))
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(message, message_area);

    let start = Paragraph::new(view.start_label)
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(start, start_area);
}
