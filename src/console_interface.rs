use crate::core::{Direction, GRID_SIZE, Grid, UserAction};
use crate::models::GameRenderState;
use crate::swipe::{Point, SwipeTracker};
use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

pub type ConsoleTerminal = Terminal<CrosstermBackend<io::Stdout>>;

const TILE_WIDTH: u16 = 8;
const TILE_HEIGHT: u16 = 3;

// nominal pixel size of a terminal cell, so swipe thresholds read like screen distances
const CELL_WIDTH_UNITS: f64 = 8.0;
const CELL_HEIGHT_UNITS: f64 = 16.0;

/// Reads a grid written as four rows of whitespace separated numbers, `.` for empty.
/// Blank lines are skipped; anything unreadable becomes an empty cell.
pub fn parse_grid(s: &str) -> Grid {
    let mut grid = Grid::empty();
    let rows = s.lines().map(str::trim).filter(|line| !line.is_empty());
    for (i, line) in rows.take(GRID_SIZE).enumerate() {
        for (j, token) in line.split_whitespace().take(GRID_SIZE).enumerate() {
            grid.cells[i][j] = token.parse().unwrap_or(0);
        }
    }
    grid
}

pub fn render_grid_to_string(grid: &Grid) -> String {
    let mut result = String::new();
    for row in &grid.cells {
        let tokens: Vec<String> = row
            .iter()
            .map(|&v| if v == 0 { ".".to_string() } else { v.to_string() })
            .collect();
        result.push_str(&tokens.join(" "));
        result.push('\n');
    }
    result
}

pub fn setup_terminal() -> Result<ConsoleTerminal> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(
        io::stdout(),
        crossterm::terminal::EnterAlternateScreen,
        EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<()> {
    crossterm::execute!(
        io::stdout(),
        DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    crossterm::terminal::disable_raw_mode()?;
    Ok(())
}

/// Score panel, board area, instruction panel.
fn screen_chunks(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Where the bordered board lands on a screen of size `area`.
pub fn board_area(area: Rect) -> Rect {
    centered(
        screen_chunks(area)[1],
        TILE_WIDTH * GRID_SIZE as u16 + 2,
        TILE_HEIGHT * GRID_SIZE as u16 + 2,
    )
}

/// Draws the game and returns the board area, which is where swipes may start.
pub fn render_game<B: Backend>(terminal: &mut Terminal<B>, state: &GameRenderState) -> Result<Rect> {
    let mut board = Rect::default();
    terminal.draw(|f| {
        let chunks = screen_chunks(f.area());

        let score_text = format!(
            "Score: {}    Best: {}",
            state.session.score(),
            state.session.best_score()
        );
        let score_paragraph = Paragraph::new(score_text)
            .block(Block::default().borders(Borders::ALL).title("2048"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(score_paragraph, chunks[0]);

        let board_block = Block::default().borders(Borders::ALL);
        board = board_area(f.area());
        let inner = board_block.inner(board);
        f.render_widget(board_block, board);

        let rows = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Length(TILE_HEIGHT); GRID_SIZE])
            .split(inner);
        for (i, row_area) in rows.iter().enumerate() {
            let cols = Layout::default()
                .direction(LayoutDirection::Horizontal)
                .constraints([Constraint::Length(TILE_WIDTH); GRID_SIZE])
                .split(*row_area);
            for (j, tile_area) in cols.iter().enumerate() {
                f.render_widget(tile_widget(state.session.grid.cells[i][j]), *tile_area);
            }
        }

        let instructions = if state.game_over {
            "Game over! Press N for a new game, Q to quit."
        } else {
            "Controls: WASD, arrow keys or mouse drag to move, N new game, Q to quit"
        };

        let instructions = if let Some(err) = &state.error {
            format!("{} | Error: {}", instructions, err)
        } else {
            instructions.to_string()
        };

        let instructions = match state.last_change.as_ref().and_then(|c| c.direction.map(|d| (d, c))) {
            Some((direction, change)) => {
                format!("{} | Last: {:?} +{}", instructions, direction, change.score_gained)
            }
            None => instructions,
        };

        let instruction_style = if state.game_over {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(instruction_style)
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[2]);
    })?;
    Ok(board)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn tile_widget(value: u32) -> Paragraph<'static> {
    if value == 0 {
        return Paragraph::new("").style(Style::default().bg(Color::Rgb(0xcd, 0xc1, 0xb4)));
    }
    let fg = if value <= 4 {
        Color::Rgb(0x77, 0x6e, 0x65)
    } else {
        Color::Rgb(0xf9, 0xf6, 0xf2)
    };
    let label = Span::styled(value.to_string(), Style::default().add_modifier(Modifier::BOLD));
    Paragraph::new(vec![Line::from(""), Line::from(label)])
        .style(Style::default().bg(tile_color(value)).fg(fg))
        .alignment(Alignment::Center)
}

pub fn tile_color(value: u32) -> Color {
    match value {
        2 => Color::Rgb(0xee, 0xe4, 0xda),
        4 => Color::Rgb(0xed, 0xe0, 0xc8),
        8 => Color::Rgb(0xf2, 0xb1, 0x79),
        16 => Color::Rgb(0xf5, 0x95, 0x63),
        32 => Color::Rgb(0xf6, 0x7c, 0x5f),
        64 => Color::Rgb(0xf6, 0x5e, 0x3b),
        128 => Color::Rgb(0xed, 0xcf, 0x72),
        256 => Color::Rgb(0xed, 0xcc, 0x61),
        512 => Color::Rgb(0xed, 0xc8, 0x50),
        1024 => Color::Rgb(0xed, 0xc5, 0x3f),
        2048 => Color::Rgb(0xed, 0xc2, 0x2e),
        _ => Color::Rgb(0x3c, 0x3a, 0x32),
    }
}

#[derive(Debug, PartialEq)]
pub enum ConsoleInput {
    UserAction(UserAction),
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input(swipe: &mut SwipeTracker, board: Rect) -> Result<ConsoleInput> {
    if event::poll(std::time::Duration::from_millis(50))? {
        return Ok(translate_event(event::read()?, swipe, board));
    }
    Ok(ConsoleInput::Timeout)
}

/// Mouse presses only start a swipe on the board; the release may land anywhere.
/// Swipe bookkeeping reports `Timeout` since nothing on screen changes.
pub fn translate_event(event: Event, swipe: &mut SwipeTracker, board: Rect) -> ConsoleInput {
    match event {
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
            KeyCode::Char('n') | KeyCode::Char('N') => {
                ConsoleInput::UserAction(UserAction::NewGame)
            }
            KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                ConsoleInput::UserAction(UserAction::Move(Direction::Up))
            }
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                ConsoleInput::UserAction(UserAction::Move(Direction::Down))
            }
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                ConsoleInput::UserAction(UserAction::Move(Direction::Left))
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                ConsoleInput::UserAction(UserAction::Move(Direction::Right))
            }
            _ => ConsoleInput::Unknown,
        },
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            ..
        }) => {
            let point = Point {
                x: column as f64 * CELL_WIDTH_UNITS,
                y: row as f64 * CELL_HEIGHT_UNITS,
            };
            match kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    if board.contains(Position { x: column, y: row }) {
                        swipe.begin(point);
                    } else {
                        swipe.cancel();
                    }
                    ConsoleInput::Timeout
                }
                MouseEventKind::Up(MouseButton::Left) => match swipe.end(point) {
                    Some(direction) => ConsoleInput::UserAction(UserAction::Move(direction)),
                    None => ConsoleInput::Timeout,
                },
                _ => ConsoleInput::Timeout,
            }
        }
        _ => ConsoleInput::Unknown,
    }
}
