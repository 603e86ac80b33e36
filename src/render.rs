// turns the current screen into one frame of text: menus, the bordered playfield and the HUD
use colored::{Color, Colorize};

use crate::app::{App, Screen};
use crate::game::{GameDifficulty, GameMode, Match, MatchStatus, Outcome, PlayerId};
use crate::grid::{
    cell_to_screen, screen_to_cell, screen_width, Coordinates, Direction, BORDER, GRID_HEIGHT,
};
use crate::snake::Snake;

const TITLE: &str = "Snake Game";

pub fn render(app: &App) -> String {
    match app.screen() {
        Screen::SelectingMode { selected } => render_menu(
            "Choose the game mode:",
            GameMode::ALL.iter().map(GameMode::label),
            *selected,
        ),
        Screen::SelectingDifficulty { selected, .. } => render_menu(
            "Choose the difficulty:",
            GameDifficulty::ALL.iter().map(GameDifficulty::label),
            *selected,
        ),
        Screen::Playing(game) => render_match(game),
    }
}

fn centered(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let padding = width.saturating_sub(len) / 2;
    format!("{}{}", " ".repeat(padding), text)
}

fn render_menu<'a>(prompt: &str, items: impl Iterator<Item = &'a str>, selected: usize) -> String {
    let width = screen_width() as usize;
    let mut lines = vec![String::new(); 4];
    lines.push(centered(TITLE, width).green().bold().to_string());
    lines.push(String::new());
    lines.push(centered(prompt, width));
    lines.push(String::new());
    for (i, item) in items.enumerate() {
        let line = centered(item, width);
        if i == selected {
            lines.push(line.yellow().bold().to_string());
        } else {
            lines.push(line.bright_black().to_string());
        }
    }
    lines.push(String::new());
    lines.push(
        centered("Up/Down to move, Enter to select, q to quit", width)
            .bright_black()
            .to_string(),
    );
    lines.join("\n")
}

/// One terminal character of the board, already coloured.
type Canvas = Vec<Vec<String>>;

fn border_glyph(column: u16, row: u16, width: u16, height: u16) -> &'static str {
    let last_column = width - 1;
    let last_row = height - 1;
    match (column, row) {
        (0, 0) => "▗",
        (c, 0) if c == last_column => "▖",
        (0, r) if r == last_row => "▝",
        (c, r) if c == last_column && r == last_row => "▘",
        (_, 0) => "▄",
        (_, r) if r == last_row => "▀",
        (0, _) => "▐",
        _ => "▌",
    }
}

fn empty_canvas() -> Canvas {
    let width = screen_width();
    let height = GRID_HEIGHT as u16 + 2 * BORDER;
    (0..height)
        .map(|row| {
            (0..width)
                .map(|column| match screen_to_cell(column, row) {
                    Some(_) => " ".to_string(),
                    None => border_glyph(column, row, width, height).to_string(),
                })
                .collect()
        })
        .collect()
}

fn put(canvas: &mut Canvas, cell: Coordinates, glyph: String) {
    // dead heads may sit just outside the playfield
    if let Some((column, row)) = cell_to_screen(cell) {
        canvas[row as usize][column as usize] = glyph;
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "▲",
        Direction::Down => "▼",
        Direction::Left => "◀",
        Direction::Right => "▶",
    }
}

fn draw_snake(canvas: &mut Canvas, snake: &Snake) {
    // tail first so the head is drawn on top
    for part in snake.body().skip(1).collect::<Vec<_>>().into_iter().rev() {
        put(canvas, *part, "●".color(snake.color()).to_string());
    }
    let head = if snake.is_dead() {
        "✖".color(snake.color()).bold()
    } else {
        head_glyph(snake.direction()).color(snake.color()).bold()
    };
    put(canvas, snake.head(), head.to_string());
}

fn overlay(canvas: &mut Canvas, row: usize, text: &str, color: Color) {
    let width = canvas[row].len();
    let len = text.chars().count();
    let start = width.saturating_sub(len) / 2;
    for (i, ch) in text.chars().enumerate() {
        if let Some(slot) = canvas[row].get_mut(start + i) {
            *slot = ch.to_string().color(color).bold().to_string();
        }
    }
}

fn outcome_message(game: &Match) -> Option<(String, Color)> {
    let color_of = |id: PlayerId| {
        game.player(id)
            .map_or(Color::White, |player| player.snake().color())
    };
    match game.outcome()? {
        Outcome::Lost => Some(("You lost!".to_string(), Color::White)),
        Outcome::Winner(PlayerId::One) => {
            Some(("Player 1 wins!".to_string(), color_of(PlayerId::One)))
        }
        Outcome::Winner(PlayerId::Two) => {
            Some(("Player 2 wins!".to_string(), color_of(PlayerId::Two)))
        }
        Outcome::Tie => Some(("TIE!".to_string(), Color::White)),
    }
}

fn hud(game: &Match, width: usize) -> Vec<String> {
    let time = format!("Time: {:.1} sec", game.elapsed().as_secs_f32());
    let player1 = game.player(PlayerId::One);
    let player2 = game.player(PlayerId::Two);

    let left = match (player1, player2) {
        (Some(p1), None) => format!("Score: {}", p1.score()),
        (Some(p1), Some(_)) => format!("Score P1: {}", p1.score()),
        _ => String::new(),
    };
    let right = player2.map_or(String::new(), |p2| format!("Score P2: {}", p2.score()));

    let middle_start = width.saturating_sub(time.len()) / 2;
    let gap_left = middle_start.saturating_sub(left.len()).max(1);
    let gap_right = width
        .saturating_sub(middle_start + time.len() + right.len())
        .max(1);

    let left_color = player1.map_or(Color::White, |p| p.snake().color());
    let right_color = player2.map_or(Color::White, |p| p.snake().color());
    let first = format!(
        "{}{}{}{}{}",
        left.color(left_color),
        " ".repeat(gap_left),
        time.truecolor(255, 165, 0),
        " ".repeat(gap_right),
        right.color(right_color),
    );
    let second = format!(
        "{}   {}",
        format!("High Score: {}", game.high_score()).yellow(),
        format!("Speed: {} ({})", game.speed(), game.difficulty().label()).bright_black(),
    );
    vec![first, second]
}

pub fn render_match(game: &Match) -> String {
    let width = screen_width() as usize;
    let mut canvas = empty_canvas();

    for obstacle in game.obstacles().iter() {
        if let Some((column, row)) = cell_to_screen(*obstacle) {
            let block = "█".bright_black().to_string();
            canvas[row as usize][column as usize] = block.clone();
            canvas[row as usize][column as usize + 1] = block;
        }
    }
    put(&mut canvas, game.fruit(), "♦".red().to_string());
    for id in [PlayerId::One, PlayerId::Two] {
        if let Some(player) = game.player(id) {
            draw_snake(&mut canvas, player.snake());
        }
    }

    let middle = canvas.len() / 2;
    match game.status() {
        MatchStatus::Paused => {
            overlay(&mut canvas, middle - 2, "PAUSE", Color::TrueColor { r: 255, g: 165, b: 0 });
            overlay(&mut canvas, middle + 1, "Press ENTER to restart", Color::White);
        }
        MatchStatus::Over => {
            overlay(&mut canvas, middle - 3, "GAME OVER", Color::Red);
            if let Some((message, color)) = outcome_message(game) {
                overlay(&mut canvas, middle - 1, &message, color);
            }
            overlay(&mut canvas, middle + 1, "Press ENTER to restart", Color::White);
        }
        MatchStatus::Running => {}
    }

    let mut lines = hud(game, width);
    lines.extend(canvas.into_iter().map(|row| row.concat()));
    let controls = match game.mode() {
        GameMode::SinglePlayer => "Arrows: move   Space: pause   q: quit",
        GameMode::TwoPlayers => "P1: arrows   P2: W/A/S/D   Space: pause   q: quit",
    };
    lines.push(controls.bright_black().to_string());
    lines.join("\n")
}
