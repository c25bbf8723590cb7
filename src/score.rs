// src/score.rs
//! Fantasy score derivation.
//!
//! The same calculation serves both roles: players are compared against the
//! defense vectors of their opponents, defenses against the offense vectors.

use std::collections::HashMap;
use std::error::Error;

use crate::rankings::{TeamVector, ZERO_VECTOR};
use crate::schedule::Opponent;

/// Everything the calculation produced, kept so verbose output can show the
/// differential next to the scalar.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreBreakdown {
    /// Componentwise mean of the vectors faced so far.
    pub average: TeamVector,
    /// This week's opponent vector.
    pub current: TeamVector,
    /// current minus average, per component.
    pub diff: TeamVector,
    pub score: f32,
}

impl ScoreBreakdown {
    fn bye() -> Self {
        Self { average: ZERO_VECTOR, current: ZERO_VECTOR, diff: ZERO_VECTOR, score: 0.0 }
    }
}

/// Componentwise mean of the opponent vectors for every team in `schedule`.
/// An empty schedule yields the zero vector; averaging zero games must
/// never divide. An opponent missing from `vectors` is fatal.
pub fn average_vector(
    schedule: &[String],
    vectors: &HashMap<String, TeamVector>,
) -> Result<TeamVector, Box<dyn Error>> {
    if schedule.is_empty() {
        return Ok(ZERO_VECTOR);
    }

    let mut avg = ZERO_VECTOR;
    for team in schedule {
        let stats = vectors
            .get(team)
            .ok_or_else(|| format!("No ranking entry for opponent '{}'", team))?;
        for i in 0..avg.len() {
            avg[i] += stats[i];
        }
    }
    let n = schedule.len() as f32;
    for v in avg.iter_mut() {
        *v /= n;
    }
    Ok(avg)
}

/// Score an entity against its upcoming opponent.
///
/// A bye scores exactly 0 with no lookups. Otherwise the differential
/// between this week's opponent and the average opponent faced is computed
/// per component.
// TODO: fold `diff` into the scalar once the component weights are settled;
// until then the scalar stays the name-length placeholder so rankings remain
// comparable run to run.
pub fn score_against(
    name: &str,
    opponent: &Opponent,
    schedule: &[String],
    vectors: &HashMap<String, TeamVector>,
) -> Result<ScoreBreakdown, Box<dyn Error>> {
    let current = match opponent {
        Opponent::Bye => return Ok(ScoreBreakdown::bye()),
        Opponent::Team(team) => *vectors
            .get(team)
            .ok_or_else(|| format!("No ranking entry for opponent '{}'", team))?,
    };

    let average = average_vector(schedule, vectors)?;

    let mut diff = ZERO_VECTOR;
    for i in 0..diff.len() {
        diff[i] = current[i] - average[i];
    }

    Ok(ScoreBreakdown {
        average,
        current,
        diff,
        score: name.chars().count() as f32,
    })
}
