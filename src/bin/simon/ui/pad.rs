//! Colored button pad

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color as TermColor, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use simon_says::game::ButtonView;

/// Unlit buttons are drawn at this fraction of their full color
const DIM: f32 = 0.35;

pub fn render_pad(frame: &mut Frame, area: Rect, button: &ButtonView) {
    let spec = button.color.spec();
    let rgb = if button.lit { spec.rgb } else { dim(spec.rgb) };
    let fill = TermColor::Rgb(rgb.0, rgb.1, rgb.2);

    let border = if button.enabled {
        Style::default().fg(TermColor::White)
    } else {
        Style::default().fg(TermColor::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if button.lit {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(border)
        .style(Style::default().bg(fill));

    let mut label = Style::default().fg(TermColor::Black);
    if button.lit {
        label = label.add_modifier(Modifier::BOLD);
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Label on the middle row of the button
    let middle = Rect {
        y: inner.y + inner.height / 2,
        height: inner.height.min(1),
        ..inner
    };
    frame.render_widget(
        Paragraph::new(spec.name)
            .style(label)
            .alignment(Alignment::Center),
        middle,
    );
}

fn dim((r, g, b): (u8, u8, u8)) -> (u8, u8, u8) {
    let scale = |c: u8| (c as f32 * DIM).round() as u8;
    (scale(r), scale(g), scale(b))
}
