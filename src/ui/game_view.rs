use crate::game::{winning_line, Board, Cell, Player, Round, RoundState, COLS, ROWS};
use crate::session::Scoreboard;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    round: &Round,
    selected_column: usize,
    message: &Option<String>,
    scoreboard: &Scoreboard,
    opponent: &str,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, round, scoreboard, opponent, chunks[0]);
    render_board(frame, round, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(
    frame: &mut Frame,
    round: &Round,
    scoreboard: &Scoreboard,
    opponent: &str,
    area: ratatui::layout::Rect,
) {
    let (status, color) = match round.state() {
        RoundState::InProgress => match round.to_move() {
            Player::Human => ("Your move", Color::Red),
            Player::Computer => ("Computer thinking", Color::Yellow),
        },
        RoundState::PlayerWon => ("You won", Color::Red),
        RoundState::ComputerWon => ("Computer won", Color::Yellow),
        RoundState::Draw => ("Tie", Color::Gray),
    };

    let header = Paragraph::new(format!(
        "{}  |  vs {}  |  {}",
        status, opponent, scoreboard
    ))
    .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    round: &Round,
    selected_column: usize,
    area: ratatui::layout::Rect,
) {
    let board: &Board = round.board();
    let highlight = match round.state() {
        RoundState::PlayerWon => winning_line(board, Player::Human),
        RoundState::ComputerWon => winning_line(board, Player::Computer),
        _ => None,
    };

    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔═════════════════════╗"));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let (symbol, color) = match board.slot_at(row, col) {
                Some(Cell::Occupied(Player::Human)) => (" ● ", Color::Red),
                Some(Cell::Occupied(Player::Computer)) => (" ● ", Color::Yellow),
                _ => (" . ", Color::DarkGray),
            };
            let mut style = Style::default().fg(color);
            if highlight.is_some_and(|line| line.contains(&(row, col))) {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚═════════════════════╝"));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→: Move  |  1-7 or Enter: Drop  |  R: New round  |  Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
