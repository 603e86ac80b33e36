// one round of play: the snakes, the fruit, the obstacles and the rules that move them
// forward one tick at a time. a match lives from the end of the menus until the player
// quits, restarting reuses it so the high score it carries survives between rounds

use std::time::Duration;

use colored::Color;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::board::{Obstacles, Occupancy};
use crate::grid::{Coordinates, Direction, GRID_HEIGHT, GRID_WIDTH};
use crate::snake::Snake;

/// Fastest tick rate the game accelerates to, in ticks per second.
pub const MAX_SPEED: u32 = 20;

/// A new obstacle is attempted every time a score reaches a multiple of this.
const OBSTACLE_EVERY: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameDifficulty {
    Easy,
    Normal,
    Hardcore,
}

impl GameDifficulty {
    pub const ALL: [GameDifficulty; 3] = [
        GameDifficulty::Easy,
        GameDifficulty::Normal,
        GameDifficulty::Hardcore,
    ];

    /// Initial speed in ticks per second.
    pub fn get_speed(&self) -> u32 {
        match self {
            GameDifficulty::Easy => 5,
            GameDifficulty::Normal => 6,
            GameDifficulty::Hardcore => 7,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GameDifficulty::Easy => "Easy",
            GameDifficulty::Normal => "Normal",
            GameDifficulty::Hardcore => "Hardcore",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    SinglePlayer,
    TwoPlayers,
}

impl GameMode {
    pub const ALL: [GameMode; 2] = [GameMode::SinglePlayer, GameMode::TwoPlayers];

    pub fn label(&self) -> &'static str {
        match self {
            GameMode::SinglePlayer => "1 Player",
            GameMode::TwoPlayers => "2 Players",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    One,
    Two,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Single player round: the snake died.
    Lost,
    Winner(PlayerId),
    Tie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    Running,
    Paused,
    Over,
}

/// Reported once, on the tick that ends a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub outcome: Outcome,
    pub best_score: u32,
    pub new_high_score: bool,
}

#[derive(Debug, Clone)]
pub struct Player {
    snake: Snake,
    score: u32,
}

impl Player {
    fn new(snake: Snake) -> Self {
        Player { snake, score: 0 }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

fn occupancy<'a>(
    player1: &'a Player,
    player2: &'a Option<Player>,
    obstacles: &'a Obstacles,
) -> Occupancy<'a> {
    Occupancy {
        player1: &player1.snake,
        player2: player2.as_ref().map(|p| &p.snake),
        obstacles,
    }
}

#[derive(Debug, Clone)]
pub struct Match {
    difficulty: GameDifficulty,
    mode: GameMode,
    player1: Player,
    player2: Option<Player>,
    fruit: Coordinates,
    obstacles: Obstacles,
    speed: u32,
    elapsed: Duration,
    tick_timer: Duration,
    status: MatchStatus,
    outcome: Option<Outcome>,
    high_score: u32,
    round_reported: bool,
    rng: StdRng,
}

impl Match {
    pub fn new(difficulty: GameDifficulty, mode: GameMode, high_score: u32) -> Self {
        Self::with_rng(difficulty, mode, high_score, StdRng::from_os_rng())
    }

    pub fn with_rng(
        difficulty: GameDifficulty,
        mode: GameMode,
        high_score: u32,
        rng: StdRng,
    ) -> Self {
        let mut game = Match {
            difficulty,
            mode,
            player1: Player::new(player1_snake()),
            player2: None,
            fruit: Coordinates::new(0, 0),
            obstacles: Obstacles::new(),
            speed: difficulty.get_speed(),
            elapsed: Duration::ZERO,
            tick_timer: Duration::ZERO,
            status: MatchStatus::Running,
            outcome: None,
            high_score,
            round_reported: false,
            rng,
        };
        game.reset();
        game
    }

    /// Starts a fresh round with the same difficulty and mode. The high score is kept.
    pub fn restart(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.player1 = Player::new(player1_snake());
        self.player2 = match self.mode {
            GameMode::SinglePlayer => None,
            GameMode::TwoPlayers => Some(Player::new(player2_snake())),
        };
        self.obstacles.clear();
        self.speed = self.difficulty.get_speed();
        self.elapsed = Duration::ZERO;
        self.tick_timer = Duration::ZERO;
        self.status = MatchStatus::Running;
        self.outcome = None;
        self.round_reported = false;
        self.relocate_fruit();
        info!(
            mode = self.mode.label(),
            difficulty = self.difficulty.label(),
            speed = self.speed,
            "Round started"
        );
    }

    pub fn difficulty(&self) -> GameDifficulty {
        self.difficulty
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        match id {
            PlayerId::One => Some(&self.player1),
            PlayerId::Two => self.player2.as_ref(),
        }
    }

    pub fn fruit(&self) -> Coordinates {
        self.fruit
    }

    pub fn obstacles(&self) -> &Obstacles {
        &self.obstacles
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Steers a snake. Ignored unless the round is running, and for player two
    /// in a single player round.
    pub fn steer(&mut self, id: PlayerId, direction: Direction) {
        if self.status != MatchStatus::Running {
            return;
        }
        let player = match id {
            PlayerId::One => Some(&mut self.player1),
            PlayerId::Two => self.player2.as_mut(),
        };
        if let Some(player) = player {
            player.snake.steer(direction);
        }
    }

    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            MatchStatus::Running => MatchStatus::Paused,
            MatchStatus::Paused => MatchStatus::Running,
            MatchStatus::Over => MatchStatus::Over,
        };
    }

    fn tick_interval(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.speed))
    }

    /// Feeds one frame worth of real time into the match. At most one tick runs
    /// per call, once `1 / speed` seconds have piled up while running.
    pub fn advance(&mut self, frame_time: Duration) -> Option<RoundSummary> {
        self.elapsed += frame_time;
        if self.status != MatchStatus::Running {
            return None;
        }
        self.tick_timer += frame_time;
        if self.tick_timer < self.tick_interval() {
            return None;
        }
        self.tick_timer = Duration::ZERO;
        self.tick()
    }

    /// One simulation step. Returns the round summary on the tick that ends the round.
    pub fn tick(&mut self) -> Option<RoundSummary> {
        if self.status != MatchStatus::Running {
            return None;
        }
        self.update_player(PlayerId::One);
        if self.player2.is_some() {
            self.update_player(PlayerId::Two);
        }

        let player1_dead = self.player1.snake.is_dead();
        let player2_dead = self.player2.as_ref().is_some_and(|p| p.snake.is_dead());
        if !player1_dead && !player2_dead {
            return None;
        }

        let outcome = match self.mode {
            GameMode::SinglePlayer => Outcome::Lost,
            GameMode::TwoPlayers => match (player1_dead, player2_dead) {
                (true, true) => Outcome::Tie,
                (true, false) => Outcome::Winner(PlayerId::Two),
                _ => Outcome::Winner(PlayerId::One),
            },
        };
        self.status = MatchStatus::Over;
        self.outcome = Some(outcome);
        self.finish_round(outcome)
    }

    fn finish_round(&mut self, outcome: Outcome) -> Option<RoundSummary> {
        if self.round_reported {
            return None;
        }
        self.round_reported = true;

        let best_score = self
            .player2
            .as_ref()
            .map_or(self.player1.score, |p| p.score.max(self.player1.score));
        let new_high_score = best_score > self.high_score;
        if new_high_score {
            self.high_score = best_score;
        }
        info!(
            ?outcome,
            best_score,
            new_high_score,
            elapsed = self.elapsed.as_secs_f32(),
            "Round over"
        );
        Some(RoundSummary {
            outcome,
            best_score,
            new_high_score,
        })
    }

    fn update_player(&mut self, id: PlayerId) {
        let (player, opponent) = match id {
            PlayerId::One => (&mut self.player1, self.player2.as_ref()),
            PlayerId::Two => match self.player2.as_mut() {
                Some(player) => (player, Some(&self.player1)),
                None => return,
            },
        };
        if player.snake.is_dead() {
            return;
        }

        let old_tail = player.snake.advance();
        let head = player.snake.head();

        let out_of_bounds = !head.is_in_bounds();
        let on_obstacle = self.obstacles.contains(head);
        let bites_itself = player.snake.bites_itself();
        let hits_opponent = opponent
            .is_some_and(|other| !other.snake.is_dead() && other.snake.occupies(head));
        if out_of_bounds || on_obstacle || bites_itself || hits_opponent {
            player.snake.kill();
            debug!(player = ?id, x = head.x, y = head.y, "Snake died");
            return;
        }

        if head != self.fruit {
            return;
        }
        player.snake.grow(old_tail);
        player.score += 1;
        let score = player.score;
        debug!(player = ?id, score, "Fruit eaten");

        self.relocate_fruit();
        self.speed = num::clamp(self.speed + 1, 1, MAX_SPEED);
        if score % OBSTACLE_EVERY == 0 {
            self.add_obstacle();
        }
    }

    fn relocate_fruit(&mut self) {
        let occupancy = occupancy(&self.player1, &self.player2, &self.obstacles);
        if let Some(position) = occupancy.place_fruit(&mut self.rng) {
            self.fruit = position;
        }
    }

    fn add_obstacle(&mut self) {
        let occupancy = occupancy(&self.player1, &self.player2, &self.obstacles);
        if let Some(position) = occupancy.place_obstacle(&mut self.rng, self.fruit) {
            self.obstacles.push(position);
            debug!(x = position.x, y = position.y, count = self.obstacles.len(), "Obstacle added");
        }
    }
}

fn player1_snake() -> Snake {
    Snake::new(Coordinates::new(10, 10), Direction::Right, Color::Green)
}

fn player2_snake() -> Snake {
    Snake::new(
        Coordinates::new(GRID_WIDTH - 10, GRID_HEIGHT - 10),
        Direction::Left,
        Color::Blue,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::MAX_OBSTACLES;
    use crate::snake::MAX_SNAKE_LENGTH;
    use rand::Rng;

    fn seeded(mode: GameMode) -> Match {
        Match::with_rng(GameDifficulty::Easy, mode, 0, StdRng::seed_from_u64(1234))
    }

    fn body(player: &Player) -> Vec<Coordinates> {
        player.snake.body().copied().collect()
    }

    fn place_snake(game: &mut Match, id: PlayerId, cells: &[(i32, i32)], direction: Direction) {
        let snake = Snake::from_body(
            cells.iter().map(|&(x, y)| Coordinates::new(x, y)).collect(),
            direction,
        );
        match id {
            PlayerId::One => game.player1.snake = snake,
            PlayerId::Two => game.player2.as_mut().unwrap().snake = snake,
        }
    }

    #[test]
    fn test_initial_layout() {
        let game = seeded(GameMode::TwoPlayers);
        let p1 = game.player(PlayerId::One).unwrap();
        let p2 = game.player(PlayerId::Two).unwrap();
        assert_eq!(body(p1), vec![Coordinates::new(10, 10), Coordinates::new(9, 10)]);
        assert_eq!(p1.snake.direction(), Direction::Right);
        assert_eq!(body(p2), vec![Coordinates::new(30, 20), Coordinates::new(31, 20)]);
        assert_eq!(p2.snake.direction(), Direction::Left);
        assert_eq!(game.speed(), 5);
        assert_eq!(game.status(), MatchStatus::Running);
        assert!(!p1.snake.occupies(game.fruit()));
        assert!(!p2.snake.occupies(game.fruit()));

        let single = seeded(GameMode::SinglePlayer);
        assert!(single.player(PlayerId::Two).is_none());
    }

    #[test]
    fn test_eating_fruit() {
        let mut game = seeded(GameMode::SinglePlayer);
        game.fruit = Coordinates::new(11, 10);

        assert_eq!(game.tick(), None);

        let p1 = game.player(PlayerId::One).unwrap();
        assert_eq!(p1.snake.head(), Coordinates::new(11, 10));
        assert_eq!(p1.score(), 1);
        assert_eq!(p1.snake.len(), 3);
        assert_eq!(
            body(p1),
            vec![Coordinates::new(11, 10), Coordinates::new(10, 10), Coordinates::new(9, 10)]
        );
        assert_ne!(game.fruit(), Coordinates::new(11, 10));
        assert!(!p1.snake.occupies(game.fruit()));
        assert!(!game.obstacles().contains(game.fruit()));
        assert_eq!(game.speed(), 6);
    }

    #[test]
    fn test_wall_collision() {
        let mut game = seeded(GameMode::SinglePlayer);
        game.fruit = Coordinates::new(0, 0);
        place_snake(
            &mut game,
            PlayerId::One,
            &[(GRID_WIDTH - 1, 5), (GRID_WIDTH - 2, 5)],
            Direction::Right,
        );

        let summary = game.tick().unwrap();

        let p1 = game.player(PlayerId::One).unwrap();
        assert!(p1.snake.is_dead());
        assert_eq!(p1.snake.len(), 2);
        assert_eq!(
            body(p1),
            vec![Coordinates::new(GRID_WIDTH, 5), Coordinates::new(GRID_WIDTH - 1, 5)]
        );
        assert_eq!(game.status(), MatchStatus::Over);
        assert_eq!(summary.outcome, Outcome::Lost);
        assert_eq!(game.outcome(), Some(Outcome::Lost));
    }

    #[test]
    fn test_obstacle_collision() {
        let mut game = seeded(GameMode::SinglePlayer);
        game.fruit = Coordinates::new(0, 0);
        game.obstacles.push(Coordinates::new(11, 10));
        game.tick();
        assert!(game.player(PlayerId::One).unwrap().snake.is_dead());
    }

    #[test]
    fn test_head_on_opponent_body() {
        let mut game = seeded(GameMode::TwoPlayers);
        game.fruit = Coordinates::new(0, 0);
        // player two sits at (30,20),(31,20); player one drops onto its tail
        place_snake(&mut game, PlayerId::One, &[(31, 19), (31, 18)], Direction::Down);

        let summary = game.tick().unwrap();

        assert!(game.player(PlayerId::One).unwrap().snake.is_dead());
        assert!(!game.player(PlayerId::Two).unwrap().snake.is_dead());
        assert_eq!(summary.outcome, Outcome::Winner(PlayerId::Two));
        assert_eq!(game.status(), MatchStatus::Over);
    }

    #[test]
    fn test_dead_opponent_does_not_block() {
        let mut game = seeded(GameMode::TwoPlayers);
        game.fruit = Coordinates::new(0, 0);
        game.player2.as_mut().unwrap().snake.kill();
        place_snake(&mut game, PlayerId::One, &[(31, 19), (31, 18)], Direction::Down);

        let summary = game.tick().unwrap();

        assert!(!game.player(PlayerId::One).unwrap().snake.is_dead());
        assert_eq!(summary.outcome, Outcome::Winner(PlayerId::One));
    }

    #[test]
    fn test_tie_when_both_die() {
        let mut game = seeded(GameMode::TwoPlayers);
        game.fruit = Coordinates::new(20, 15);
        place_snake(&mut game, PlayerId::One, &[(0, 3), (1, 3)], Direction::Left);
        place_snake(
            &mut game,
            PlayerId::Two,
            &[(GRID_WIDTH - 1, 8), (GRID_WIDTH - 2, 8)],
            Direction::Right,
        );

        let summary = game.tick().unwrap();
        assert_eq!(summary.outcome, Outcome::Tie);
    }

    #[test]
    fn test_player_two_dies_player_one_wins() {
        let mut game = seeded(GameMode::TwoPlayers);
        game.fruit = Coordinates::new(20, 15);
        place_snake(&mut game, PlayerId::Two, &[(5, 0), (5, 1)], Direction::Up);

        let summary = game.tick().unwrap();
        assert_eq!(summary.outcome, Outcome::Winner(PlayerId::One));
    }

    #[test]
    fn test_dead_snake_is_frozen() {
        let mut game = seeded(GameMode::TwoPlayers);
        game.player2.as_mut().unwrap().snake.kill();
        let before = body(game.player(PlayerId::Two).unwrap());

        game.update_player(PlayerId::Two);
        game.update_player(PlayerId::Two);

        assert_eq!(body(game.player(PlayerId::Two).unwrap()), before);
    }

    #[test]
    fn test_speed_is_capped() {
        let mut game = seeded(GameMode::SinglePlayer);
        game.speed = MAX_SPEED;
        game.fruit = Coordinates::new(11, 10);
        game.tick();
        assert_eq!(game.speed(), MAX_SPEED);
    }

    #[test]
    fn test_obstacle_every_third_fruit() {
        let mut game = seeded(GameMode::SinglePlayer);
        game.player1.score = 2;
        game.fruit = Coordinates::new(11, 10);
        game.tick();

        assert_eq!(game.player(PlayerId::One).unwrap().score(), 3);
        assert_eq!(game.obstacles().len(), 1);
        let obstacle = *game.obstacles().iter().next().unwrap();
        assert_ne!(obstacle, game.fruit());
        assert!(!game.player1.snake.occupies(obstacle));
    }

    #[test]
    fn test_no_obstacle_past_capacity() {
        let mut game = seeded(GameMode::SinglePlayer);
        for i in 0..MAX_OBSTACLES as i32 {
            game.obstacles.push(Coordinates::new(i % GRID_WIDTH, 25 + i / GRID_WIDTH));
        }
        game.player1.score = 2;
        game.fruit = Coordinates::new(11, 10);
        game.tick();
        assert_eq!(game.obstacles().len(), MAX_OBSTACLES);
    }

    #[test]
    fn test_steering_rules() {
        let mut game = seeded(GameMode::SinglePlayer);
        game.steer(PlayerId::One, Direction::Left);
        assert_eq!(game.player1.snake.direction(), Direction::Right);
        game.steer(PlayerId::One, Direction::Up);
        assert_eq!(game.player1.snake.direction(), Direction::Up);
        // no second snake to steer
        game.steer(PlayerId::Two, Direction::Down);

        game.toggle_pause();
        game.steer(PlayerId::One, Direction::Left);
        assert_eq!(game.player1.snake.direction(), Direction::Up);
    }

    #[test]
    fn test_pause_stops_time_based_ticks() {
        let mut game = seeded(GameMode::SinglePlayer);
        game.fruit = Coordinates::new(0, 0);
        game.toggle_pause();
        assert_eq!(game.status(), MatchStatus::Paused);
        game.advance(Duration::from_secs(2));
        assert_eq!(game.player1.snake.head(), Coordinates::new(10, 10));

        game.toggle_pause();
        assert_eq!(game.status(), MatchStatus::Running);
    }

    #[test]
    fn test_advance_ticks_once_per_interval() {
        let mut game = seeded(GameMode::SinglePlayer);
        game.fruit = Coordinates::new(0, 0);
        // easy: 5 ticks per second
        game.advance(Duration::from_millis(100));
        assert_eq!(game.player1.snake.head(), Coordinates::new(10, 10));
        game.advance(Duration::from_millis(100));
        assert_eq!(game.player1.snake.head(), Coordinates::new(11, 10));
        // a long frame still runs a single tick
        game.advance(Duration::from_secs(1));
        assert_eq!(game.player1.snake.head(), Coordinates::new(12, 10));
        assert_eq!(game.elapsed(), Duration::from_millis(1200));
    }

    #[test]
    fn test_round_summary_reported_once() {
        let mut game = seeded(GameMode::SinglePlayer);
        game.fruit = Coordinates::new(0, 0);
        game.player1.score = 4;
        place_snake(
            &mut game,
            PlayerId::One,
            &[(GRID_WIDTH - 1, 5), (GRID_WIDTH - 2, 5)],
            Direction::Right,
        );

        let mut reports = Vec::new();
        for _ in 0..50 {
            if let Some(summary) = game.advance(Duration::from_millis(250)) {
                reports.push(summary);
            }
        }
        assert_eq!(game.tick(), None);
        assert_eq!(
            reports,
            vec![RoundSummary {
                outcome: Outcome::Lost,
                best_score: 4,
                new_high_score: true,
            }]
        );
        assert_eq!(game.high_score(), 4);
    }

    #[test]
    fn test_high_score_only_when_exceeded() {
        let mut game = Match::with_rng(
            GameDifficulty::Normal,
            GameMode::TwoPlayers,
            10,
            StdRng::seed_from_u64(5),
        );
        game.fruit = Coordinates::new(0, 0);
        game.player1.score = 3;
        game.player2.as_mut().unwrap().score = 7;
        place_snake(&mut game, PlayerId::One, &[(0, 3), (1, 3)], Direction::Left);

        let summary = game.tick().unwrap();
        assert_eq!(summary.best_score, 7);
        assert!(!summary.new_high_score);
        assert_eq!(game.high_score(), 10);
    }

    #[test]
    fn test_restart_reseeds_and_keeps_high_score() {
        let mut game = Match::with_rng(
            GameDifficulty::Hardcore,
            GameMode::TwoPlayers,
            0,
            StdRng::seed_from_u64(9),
        );
        game.fruit = Coordinates::new(11, 10);
        game.tick();
        place_snake(&mut game, PlayerId::One, &[(0, 3), (1, 3)], Direction::Left);
        game.tick();
        assert_eq!(game.status(), MatchStatus::Over);
        assert_eq!(game.high_score(), 1);

        game.restart();

        let p1 = game.player(PlayerId::One).unwrap();
        let p2 = game.player(PlayerId::Two).unwrap();
        assert_eq!(body(p1), vec![Coordinates::new(10, 10), Coordinates::new(9, 10)]);
        assert_eq!(body(p2), vec![Coordinates::new(30, 20), Coordinates::new(31, 20)]);
        assert_eq!(p1.snake.direction(), Direction::Right);
        assert_eq!(p2.snake.direction(), Direction::Left);
        assert_eq!((p1.score(), p2.score()), (0, 0));
        assert_eq!(game.obstacles().len(), 0);
        assert_eq!(game.speed(), GameDifficulty::Hardcore.get_speed());
        assert_eq!(game.elapsed(), Duration::ZERO);
        assert_eq!(game.status(), MatchStatus::Running);
        assert_eq!(game.outcome(), None);
        assert_eq!(game.high_score(), 1);
        assert_eq!(game.mode(), GameMode::TwoPlayers);
        assert_eq!(game.difficulty(), GameDifficulty::Hardcore);
    }

    #[test]
    fn test_random_play_invariants() {
        let directions = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
        let mut steering = StdRng::seed_from_u64(77);
        for seed in 0..20 {
            let mut game = Match::with_rng(
                GameDifficulty::Easy,
                GameMode::TwoPlayers,
                0,
                StdRng::seed_from_u64(seed),
            );
            while game.status() == MatchStatus::Running {
                game.steer(PlayerId::One, directions[steering.random_range(0..4)]);
                game.steer(PlayerId::Two, directions[steering.random_range(0..4)]);
                let before: Vec<(usize, Coordinates, Direction)> = [PlayerId::One, PlayerId::Two]
                    .iter()
                    .map(|id| {
                        let snake = game.player(*id).unwrap().snake();
                        (snake.len(), snake.head(), snake.direction())
                    })
                    .collect();

                game.tick();

                let players = [PlayerId::One, PlayerId::Two];
                for (id, (len, head, direction)) in players.iter().zip(before) {
                    let snake = game.player(*id).unwrap().snake();
                    assert!(snake.len() == len || snake.len() == len + 1);
                    assert!(snake.len() <= MAX_SNAKE_LENGTH);
                    assert_eq!(snake.head(), head.step(direction));
                }
                if game.status() == MatchStatus::Running {
                    let occupancy = occupancy(&game.player1, &game.player2, &game.obstacles);
                    assert!(!occupancy.is_occupied(game.fruit()));
                }
            }
        }
    }
}
