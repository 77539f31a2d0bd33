use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{GameConfig, SnakeState};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Interactive terminal play: arrows/WASD steer absolutely, J/K issue
/// relative turns, and the snake keeps moving forward on every tick.
pub struct HumanMode {
    state: SnakeState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
    pending: Option<KeyAction>,
    game_over_recorded: bool,
    seed: Option<u64>,
}

impl HumanMode {
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        let mut state = SnakeState::new(&config);
        state.reset(seed);

        Self {
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(config.palette),
            input_handler: InputHandler::new(),
            should_quit: false,
            pending: None,
            game_over_recorded: false,
            seed,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Game ticks at 5 Hz (200ms per tick)
        let tick_interval = Duration::from_millis(200);
        let mut tick_timer = interval(tick_interval);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                action @ (KeyAction::Play(_) | KeyAction::Turn(_)) => {
                    self.pending = Some(action);
                }
                KeyAction::Restart => self.reset_game(),
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }
    }

    fn update_game(&mut self) {
        use crate::game::Turn;

        if self.state.status().is_terminal() {
            if !self.game_over_recorded {
                let won = self.state.status() == crate::game::Status::Won;
                self.metrics.on_game_over(self.state.score(), won);
                self.game_over_recorded = true;
            }
            return;
        }

        match self.pending.take() {
            Some(KeyAction::Play(direction)) => {
                self.state.play(direction);
            }
            Some(KeyAction::Turn(turn)) => {
                self.state.turn(turn);
            }
            // No input this tick: keep sliding forward.
            _ => {
                self.state.turn(Turn::Forward);
            }
        }
    }

    fn reset_game(&mut self) {
        self.state.reset(self.seed);
        self.metrics.on_game_start();
        self.pending = None;
        self.game_over_recorded = false;
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Status;

    #[test]
    fn test_game_initialization() {
        let mode = HumanMode::new(GameConfig::default(), Some(1));
        assert_eq!(mode.state.status(), Status::Playing);
        assert_eq!(mode.state.score(), 0);
    }

    #[test]
    fn test_game_reset() {
        let mut mode = HumanMode::new(GameConfig::default(), Some(1));
        mode.state.score = 10;
        mode.state.status = Status::LostWall;
        mode.game_over_recorded = true;
        mode.reset_game();
        assert_eq!(mode.state.score(), 0);
        assert_eq!(mode.state.status(), Status::Playing);
        assert!(!mode.game_over_recorded);
    }

    #[test]
    fn test_terminal_tick_records_metrics_once() {
        let mut mode = HumanMode::new(GameConfig::default(), Some(1));
        mode.state.status = Status::LostWall;
        mode.update_game();
        mode.update_game();
        assert_eq!(mode.metrics.games_played, 1);
    }
}
