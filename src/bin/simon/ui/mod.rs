//! TUI module for simon
//!
//! Draws the view model and turns keys and clicks into game actions. The UI
//! holds no game state of its own: it renders whatever snapshot arrived last.

mod footer;
mod header;
mod pad;

use std::time::{Duration, Instant};

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color as TermColor, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use rtrb::Consumer;
use tracing::debug;

use simon_says::{
    game::{Color, Game, Snapshot, ViewModel},
    tone::ToneEmitter,
};

use footer::render_footer;
use header::render_header;
use pad::render_pad;

/// Frame interval (~60fps)
const FRAME: Duration = Duration::from_millis(16);

/// Screen regions, recomputed from the terminal size on every draw
#[derive(Debug, Clone, Copy, Default)]
struct Areas {
    header: Rect,
    buttons: [Rect; 4],
    message: Rect,
    start: Rect,
    help: Rect,
}

impl Areas {
    fn split(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(8),    // Button pad
                Constraint::Length(3), // Message + start
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        let halves = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(rows[1]);
        let columns = |row: Rect| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
                .split(row)
        };
        let top = columns(halves[0]);
        let bottom = columns(halves[1]);

        let footer = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(18)])
            .split(rows[2]);

        Self {
            header: rows[0],
            buttons: [top[0], top[1], bottom[0], bottom[1]],
            message: footer[0],
            start: footer[1],
            help: rows[3],
        }
    }
}

/// UI application state
pub struct UiApp<E: ToneEmitter> {
    game: Game<E>,
    /// Ring buffer receiver for game snapshots
    state_rx: Consumer<Snapshot>,
    /// View of the latest snapshot
    view: ViewModel,
    areas: Areas,
    started: Instant,
    should_quit: bool,
}

impl<E: ToneEmitter> UiApp<E> {
    pub fn new(game: Game<E>, state_rx: Consumer<Snapshot>, initial: Snapshot) -> Self {
        Self {
            game,
            state_rx,
            view: ViewModel::from(&initial),
            areas: Areas::default(),
            started: Instant::now(),
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            // Fire playback cues that fell due since the last frame
            self.game.tick(self.started.elapsed());

            self.poll_state();

            terminal.draw(|frame| self.render(frame))?;

            if event::poll(FRAME)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key.code)
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }
        }

        self.game.teardown();
        Ok(())
    }

    /// Keep only the latest snapshot
    fn poll_state(&mut self) {
        let mut latest = None;
        while let Ok(snapshot) = self.state_rx.pop() {
            latest = Some(snapshot);
        }
        if let Some(snapshot) = latest {
            self.view = ViewModel::from(&snapshot);
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => self.game.start(),
            KeyCode::Char(c) => {
                if let Some(color) = color_for_key(c) {
                    self.pick(color);
                }
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let at = Position::new(mouse.column, mouse.row);

        if self.areas.start.contains(at) {
            self.game.start();
            return;
        }
        let clicked = self
            .areas
            .buttons
            .iter()
            .zip(self.view.buttons.iter())
            .find(|(area, _)| area.contains(at))
            .map(|(_, button)| button.color);
        if let Some(color) = clicked {
            self.pick(color);
        }
    }

    fn pick(&mut self, color: Color) {
        let judgement = self.game.pick_color(color);
        debug!(color = %color, ?judgement, "pick");
    }

    fn render(&mut self, frame: &mut Frame) {
        self.areas = Areas::split(frame.area());
        let areas = self.areas;

        render_header(frame, areas.header, &self.view);
        for (area, button) in areas.buttons.iter().zip(self.view.buttons.iter()) {
            render_pad(frame, *area, button);
        }
        render_footer(frame, areas.message, areas.start, &self.view);

        let help = Paragraph::new(" [1-4/R G B Y] Pick  [Enter/S] Start  [Q] Quit")
            .style(Style::default().fg(TermColor::DarkGray));
        frame.render_widget(help, areas.help);
    }
}

fn color_for_key(c: char) -> Option<Color> {
    match c.to_ascii_lowercase() {
        '1' | 'r' => Some(Color::Red),
        '2' | 'g' => Some(Color::Green),
        '3' | 'b' => Some(Color::Blue),
        '4' | 'y' => Some(Color::Yellow),
        _ => None,
    }
}
