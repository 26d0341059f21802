use anyhow::{anyhow, Result};
use serde::Serialize;
use tracing::{debug, trace};

use crate::core::types::{Orientation, NUM_COLUMNS};
use crate::core::{GameSnapshot, RandomSource, Shape, SimpleRng};
use crate::engine::{apply_place, Session};

/// Upper bound on ticks spent waiting for one shape to land
const MAX_TICKS_PER_PIECE: u32 = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub seed: u32,
    pub max_pieces: u32,
    pub verbose: u8,
    pub json: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            max_pieces: 500,
            verbose: 0,
            json: false,
        }
    }
}

pub fn parse_sim_args(args: &[String]) -> Result<SimConfig> {
    let mut config = SimConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "--pieces" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --pieces"))?;
                config.max_pieces = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --pieces value: {}", v))?;
            }
            "--verbose" | "-v" => config.verbose = config.verbose.saturating_add(1),
            "-vv" => config.verbose = config.verbose.saturating_add(2),
            "--json" => config.json = true,
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(config)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimSummary {
    pub seed: u32,
    pub pieces_landed: u32,
    pub lines_cleared: usize,
    pub final_score: u32,
    pub final_level: u32,
    pub game_over: bool,
    pub snapshot: GameSnapshot,
}

/// Play one seeded game with a random placement policy
///
/// Each shape gets a target orientation and column drawn from a policy RNG
/// seeded separately from the game. Score and level come from the last
/// landing, since ending the game resets them.
pub fn run_sim(config: &SimConfig) -> SimSummary {
    let mut session = Session::new(config.seed);
    let mut policy = SimpleRng::new(config.seed.wrapping_mul(31).wrapping_add(17));
    let mut final_score = 0;
    let mut final_level = 1;

    session.begin();
    while !session.is_over() && session.pieces_landed() < config.max_pieces {
        if let Some(falling) = session.game().falling_shape() {
            let (column, orientation) = choose_target(falling, &mut policy);
            if let Err(err) = apply_place(session.game_mut(), column, orientation) {
                trace!(column, %orientation, code = err.code(), "placement rejected: {}", err);
            }
        }

        for _ in 0..MAX_TICKS_PER_PIECE {
            let step = session.tick();
            if let Some(landing) = step.landing {
                if landing.lines_cleared > 0 {
                    debug!(lines = landing.lines_cleared, score = landing.score, "lines cleared");
                }
                final_score = landing.score;
                final_level = landing.level;
                break;
            }
            if session.is_over() {
                break;
            }
        }
    }

    SimSummary {
        seed: config.seed,
        pieces_landed: session.pieces_landed(),
        lines_cleared: session.lines_cleared(),
        final_score,
        final_level,
        game_over: session.is_over(),
        snapshot: session.snapshot(),
    }
}

fn choose_target(falling: &Shape, policy: &mut impl RandomSource) -> (i8, Orientation) {
    let orientation = Orientation::from_index(policy.next_range(4));
    let column = policy.next_range(NUM_COLUMNS as u32) as i8;
    trace!(kind = falling.kind().as_str(), column, %orientation, "policy target");
    (column, orientation)
}
