use anyhow::Result;
use clap::ValueEnum;

use crate::agent::{Agent, GreedyAgent, RandomAgent};
use crate::game::{GameConfig, SnakeState, Status};
use crate::sensors::{observation, SensorMode};

/// Which baseline policy drives the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AgentKind {
    /// Steer toward the fruit, avoiding blocked cells
    Greedy,
    /// Pick a safe turn at random
    Random,
}

/// Batch agent evaluation: runs seeded episodes to a terminal status or
/// a step cap and reports scores on stdout.
///
/// The baseline agents consume the default observation layout; the
/// sensor mode only selects which observation vector gets traced when
/// `verbose` is on.
pub struct AgentMode {
    config: GameConfig,
    kind: AgentKind,
    sensor_mode: SensorMode,
    episodes: u32,
    max_steps: u32,
    seed: Option<u64>,
    verbose: bool,
}

/// Outcome of a single episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeResult {
    pub status: Status,
    pub score: u32,
    pub steps: u32,
}

impl AgentMode {
    pub fn new(
        config: GameConfig,
        kind: AgentKind,
        sensor_mode: SensorMode,
        episodes: u32,
        max_steps: u32,
        seed: Option<u64>,
        verbose: bool,
    ) -> Self {
        Self {
            config,
            kind,
            sensor_mode,
            episodes,
            max_steps,
            seed,
            verbose,
        }
    }

    pub fn run(&self) -> Result<()> {
        let mut agent: Box<dyn Agent> = match self.kind {
            AgentKind::Greedy => Box::new(GreedyAgent::new()),
            AgentKind::Random => Box::new(RandomAgent::new(self.seed)),
        };

        let mut state = SnakeState::new(&self.config);
        let mut total_score = 0u64;
        let mut best_score = 0u32;
        let mut wins = 0u32;

        for episode in 0..self.episodes {
            // Distinct but reproducible seed per episode.
            let seed = self.seed.map(|seed| seed + u64::from(episode));
            let result = self.run_episode(&mut state, agent.as_mut(), seed);

            total_score += u64::from(result.score);
            best_score = best_score.max(result.score);
            if result.status == Status::Won {
                wins += 1;
            }
            println!(
                "episode {:>4}: score {:>3}  steps {:>5}  {:?}",
                episode + 1,
                result.score,
                result.steps,
                result.status
            );
        }

        let mean = total_score as f64 / f64::from(self.episodes.max(1));
        println!(
            "{:?} agent over {} episodes: mean score {:.2}, best {}, wins {}",
            self.kind, self.episodes, mean, best_score, wins
        );
        Ok(())
    }

    fn run_episode(
        &self,
        state: &mut SnakeState,
        agent: &mut dyn Agent,
        seed: Option<u64>,
    ) -> EpisodeResult {
        state.reset(seed);
        let mut steps = 0;

        while state.status() == Status::Playing && steps < self.max_steps {
            if self.verbose {
                let trace = observation(state, self.sensor_mode);
                println!("step {:>5} {:?} {:?}", steps, self.sensor_mode, trace);
            }
            let turn = agent.act(&observation(state, SensorMode::Default));
            state.turn(turn);
            steps += 1;
        }

        EpisodeResult {
            status: state.status(),
            score: state.score(),
            steps,
        }
    }
}
