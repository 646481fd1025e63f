use super::{BoardLayout, Notice, Theme};
use crate::game::{Board, Coord, GameState, Player, WinLine, BOARD_HEIGHT, BOARD_WIDTH};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Everything the game screen draws from.
pub struct View<'a> {
    pub game_state: &'a GameState,
    pub cursor: Option<Coord>,
    pub message: Option<&'a str>,
    pub notice: Option<&'a Notice>,
    pub theme: &'a Theme,
    pub tile_width: u16,
}

/// Draw the game screen and return where the board ended up.
pub fn render(frame: &mut Frame, view: &View) -> BoardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                    // Header
            Constraint::Min(BOARD_HEIGHT as u16 + 2), // Board
            Constraint::Length(3),                    // Message
            Constraint::Length(3),                    // Controls
        ])
        .split(frame.area());

    render_header(frame, view, chunks[0]);
    let layout = BoardLayout::centered(chunks[1], view.tile_width);

    // While a finished game is announced, its final position stays on screen
    match view.notice {
        Some(notice) => {
            render_board(frame, notice.board(), None, notice.line(), view.theme, &layout);
            render_notice(frame, notice, view.theme, layout.outer());
        }
        None => render_board(
            frame,
            view.game_state.board(),
            view.cursor,
            None,
            view.theme,
            &layout,
        ),
    }

    render_message(frame, view.message, chunks[2]);
    render_controls(frame, chunks[3]);
    layout
}

fn render_header(frame: &mut Frame, view: &View, area: Rect) {
    let player = view.game_state.current_player();
    let score = view.game_state.score();

    let status = Line::from(vec![
        Span::styled(player.name(), view.theme.mark(player)),
        Span::raw(" to move   |   "),
        Span::styled("P1", view.theme.mark(Player::One)),
        Span::raw(format!(" {} : {} ", score.one, score.two)),
        Span::styled("P2", view.theme.mark(Player::Two)),
        Span::raw(format!("   draws {}", score.draws)),
    ]);

    let header = Paragraph::new(status).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Piskvorky"),
    );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    cursor: Option<Coord>,
    win_line: Option<&WinLine>,
    theme: &Theme,
    layout: &BoardLayout,
) {
    let width = layout.tile_width() as usize;
    let left = (width - 1) / 2;
    let right = width - 1 - left;

    let mut lines = Vec::with_capacity(BOARD_HEIGHT);
    for row in 0..BOARD_HEIGHT as i32 {
        let mut spans = Vec::with_capacity(BOARD_WIDTH);
        for col in 0..BOARD_WIDTH as i32 {
            let coord = Coord::new(col, row);
            let (symbol, mut style) = match board.occupant(coord).player() {
                Some(player) if win_line.is_some_and(|line| line.contains(coord)) => {
                    ("X", theme.highlight(player))
                }
                Some(player) => ("X", theme.mark(player)),
                None => ("\u{b7}", theme.empty()),
            };
            if cursor == Some(coord) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(
                format!("{}{}{}", " ".repeat(left), symbol, " ".repeat(right)),
                style,
            ));
        }
        lines.push(Line::from(spans));
    }

    let widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, layout.outer());
}

fn render_notice(frame: &mut Frame, notice: &Notice, theme: &Theme, over: Rect) {
    let (title, style) = match notice {
        Notice::Won(win) => (
            format!("Winner: {}", win.winner()),
            theme.mark(win.winner()),
        ),
        Notice::Draw(_) => (
            "Draw: the board is full".to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    };

    let text = vec![
        Line::from(Span::styled(title, style)),
        Line::from(Span::styled(
            "Press any key or click to play again",
            Style::default().fg(Color::Gray),
        )),
    ];

    let area = centered_rect(40, 4, over);
    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Game over"));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let text = message.unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("Click/Enter: Place  |  \u{2190}\u{2191}\u{2193}\u{2192}: Move  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

/// A `width` x `height` rectangle centered in `area`, clipped to it.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
