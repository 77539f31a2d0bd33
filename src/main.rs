use anyhow::Result;
use clap::{Parser, ValueEnum};
use fastsnake::game::GameConfig;
use fastsnake::modes::{AgentKind, AgentMode, HumanMode};
use fastsnake::sensors::SensorMode;

#[derive(Parser)]
#[command(name = "fastsnake")]
#[command(version, about = "Grid snake with agent sensors")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// Grid rows (including the boundary ring)
    #[arg(long, default_value = "12")]
    rows: usize,

    /// Grid columns (including the boundary ring)
    #[arg(long, default_value = "12")]
    cols: usize,

    /// Seed for reproducible fruit placement
    #[arg(long)]
    seed: Option<u64>,

    /// Baseline policy for agent mode
    #[arg(long, default_value = "greedy")]
    agent: AgentKind,

    /// Sensor suite traced in verbose agent mode: default, lidar or elidar
    #[arg(long, default_value = "default")]
    sensors: SensorMode,

    /// Number of episodes in agent mode
    #[arg(long, default_value = "10")]
    episodes: u32,

    /// Step cap per episode in agent mode
    #[arg(long, default_value = "1000")]
    max_steps: u32,

    /// Print the observation vector at every step in agent mode
    #[arg(long)]
    verbose: bool,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play snake with keyboard controls
    Human,
    /// Run a baseline agent and report scores
    Agent,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::new(cli.rows, cli.cols);

    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(config, cli.seed);
            human_mode.run().await?;
        }
        Mode::Agent => {
            let agent_mode = AgentMode::new(
                config,
                cli.agent,
                cli.sensors,
                cli.episodes,
                cli.max_steps,
                cli.seed,
                cli.verbose,
            );
            agent_mode.run()?;
        }
    }

    Ok(())
}
