//! Title bar: "Simon Says" or the running score

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use simon_says::game::ViewModel;

pub fn render_header(frame: &mut Frame, area: Rect, view: &ViewModel) {
    let block = Block::default().title(" simon ").borders(Borders::ALL);

    let title = Paragraph::new(view.title.as_str())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(title, area);
}
