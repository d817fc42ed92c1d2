use crate::{
    algorithm::merge::merge_oriented,
    algorithm::orientation::{Orientation, ScoreResult, score},
    algorithm::working_set::{Piece, StripId, WorkingSet},
    io::error::{ErrorContext, ReassemblyError, Result, WithContext},
    model::strip::Strip,
};
use log::{debug, info};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Assembly parameters
#[derive(Clone, Copy, Debug, Default)]
pub struct AssemblyConfig {
    /// Score candidates of a round on the rayon thread pool
    ///
    /// Has no effect unless the `parallel` feature is enabled. Results are
    /// identical to the sequential path.
    pub parallel: bool,
}

/// Record of one merge round
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MergeRecord {
    /// Round number, starting at 1
    pub round: usize,
    /// Strip selected as the current strip
    pub current: StripId,
    /// Best-matching partner of the current strip
    pub partner: StripId,
    /// Which of the two was placed on the left
    pub orientation: Orientation,
    /// Id given to the merged strip
    pub merged: StripId,
    /// Edge cost of the chosen join
    pub cost: u64,
}

impl MergeRecord {
    /// Ids of the (left, right) strips of the join
    pub const fn sides(&self) -> (StripId, StripId) {
        match self.orientation {
            Orientation::CurrentLeft => (self.current, self.partner),
            Orientation::PartnerLeft => (self.partner, self.current),
        }
    }
}

/// Final reassembled image with its provenance
#[derive(Clone, Debug)]
pub struct Assembly {
    /// Reassembled image
    pub strip: Strip,
    /// Load-order indices of the source strips, left to right
    pub order: Vec<usize>,
    /// Sum of the costs of every join
    pub total_cost: u64,
    /// Merge rounds in execution order
    pub merges: Vec<MergeRecord>,
}

/// Greedy nearest-match reassembly of strips
///
/// Each round takes the first live strip in id order, scores it against every
/// other live strip, and merges it with the cheapest partner in the cheaper
/// orientation. Candidate ties go to the earliest id. The merge result joins
/// the working set under a fresh id, so a run over `N` strips takes exactly
/// `N - 1` rounds.
pub struct GreedyAssembler {
    working_set: WorkingSet,
    config: AssemblyConfig,
    round: usize,
    total_cost: u64,
    merges: Vec<MergeRecord>,
}

impl GreedyAssembler {
    /// Create an assembler over `strips`; strip `i` receives id `i`
    ///
    /// # Errors
    ///
    /// Returns [`ReassemblyError::EmptyInput`] if `strips` is empty
    pub fn new(strips: Vec<Strip>, config: AssemblyConfig) -> Result<Self> {
        if strips.is_empty() {
            return Err(ReassemblyError::EmptyInput);
        }
        info!("assembling {} strips", strips.len());

        let rounds = strips.len() - 1;
        Ok(Self {
            working_set: WorkingSet::from_strips(strips),
            config,
            round: 0,
            total_cost: 0,
            merges: Vec::with_capacity(rounds),
        })
    }

    /// Parameters this assembler was created with
    pub const fn config(&self) -> AssemblyConfig {
        self.config
    }

    /// Live pieces
    pub const fn working_set(&self) -> &WorkingSet {
        &self.working_set
    }

    /// Number of strips still to be merged
    pub const fn remaining(&self) -> usize {
        self.working_set.len()
    }

    /// Number of completed rounds
    pub const fn round(&self) -> usize {
        self.round
    }

    /// Sum of join costs so far
    pub const fn total_cost(&self) -> u64 {
        self.total_cost
    }

    /// Completed merge rounds
    pub fn merges(&self) -> &[MergeRecord] {
        &self.merges
    }

    /// Perform one merge round
    ///
    /// Returns `None` once a single strip remains. The working set is left
    /// untouched when the round fails.
    ///
    /// # Errors
    ///
    /// Returns [`ReassemblyError::Assembly`] naming the offending pair if two
    /// strips differ in height
    pub fn merge_round(&mut self) -> Result<Option<MergeRecord>> {
        if self.working_set.len() <= 1 {
            return Ok(None);
        }
        let round = self.round + 1;

        let Some((current_id, current)) = self.working_set.iter().next() else {
            return Ok(None);
        };

        let best = self.best_match(round, current_id, current)?;
        let partner = self
            .working_set
            .get(best.partner)
            .ok_or_else(|| ReassemblyError::InvalidSourceData {
                reason: format!("strip {} vanished from the working set", best.partner),
            })?;

        let merged_strip = merge_oriented(&current.strip, &partner.strip, best.orientation)
            .with_context(ErrorContext {
                round: Some(round),
                pair: Some((current_id, best.partner)),
            })?;

        let (Some(current), Some(partner)) = (
            self.working_set.remove(current_id),
            self.working_set.remove(best.partner),
        ) else {
            return Err(ReassemblyError::InvalidSourceData {
                reason: format!("round {round} lost track of its pair"),
            });
        };

        let sources = match best.orientation {
            Orientation::CurrentLeft => [current.sources, partner.sources].concat(),
            Orientation::PartnerLeft => [partner.sources, current.sources].concat(),
        };
        let merged = self.working_set.insert(Piece {
            strip: merged_strip,
            sources,
        });

        let record = MergeRecord {
            round,
            current: current_id,
            partner: best.partner,
            orientation: best.orientation,
            merged,
            cost: best.cost,
        };
        let (left, right) = record.sides();
        debug!(
            "round {round}: {left} + {right} -> {merged} (cost {}, {} left)",
            best.cost,
            self.working_set.len()
        );

        self.round = round;
        self.total_cost += best.cost;
        self.merges.push(record);
        Ok(Some(record))
    }

    /// Run the remaining rounds and return the single surviving strip
    ///
    /// # Errors
    ///
    /// Returns [`ReassemblyError::Assembly`] if any round fails; no partial
    /// result is produced
    pub fn run(mut self) -> Result<Assembly> {
        while self.merge_round()?.is_some() {}

        let piece = self
            .working_set
            .first()
            .and_then(|id| self.working_set.remove(id))
            .ok_or(ReassemblyError::EmptyInput)?;

        info!(
            "assembled {} strips in {} rounds (total cost {})",
            piece.sources.len(),
            self.round,
            self.total_cost
        );

        Ok(Assembly {
            strip: piece.strip,
            order: piece.sources,
            total_cost: self.total_cost,
            merges: self.merges,
        })
    }

    /// Cheapest partner of `current` among the other live pieces
    fn best_match(&self, round: usize, current_id: StripId, current: &Piece) -> Result<ScoreResult> {
        let mut best: Option<ScoreResult> = None;

        for (partner, scored) in self.score_candidates(current_id, current) {
            let candidate = scored.with_context(ErrorContext {
                round: Some(round),
                pair: Some((current_id, partner)),
            })?;
            // Strict comparison keeps the earliest candidate on ties
            if best.is_none_or(|b| candidate.cost < b.cost) {
                best = Some(candidate);
            }
        }

        best.ok_or_else(|| ReassemblyError::InvalidSourceData {
            reason: format!("strip {current_id} has no partner in round {round}"),
        })
    }

    /// Scores against every other live piece, in canonical order
    fn score_candidates(
        &self,
        current_id: StripId,
        current: &Piece,
    ) -> Vec<(StripId, Result<ScoreResult>)> {
        let candidates: Vec<(StripId, &Piece)> = self
            .working_set
            .iter()
            .filter(|(id, _)| *id != current_id)
            .collect();

        #[cfg(feature = "parallel")]
        {
            if self.config.parallel {
                return candidates
                    .par_iter()
                    .map(|&(id, piece)| (id, score(&current.strip, id, &piece.strip)))
                    .collect();
            }
        }

        candidates
            .iter()
            .map(|&(id, piece)| (id, score(&current.strip, id, &piece.strip)))
            .collect()
    }
}

/// Reassemble `strips` with the default configuration
///
/// # Errors
///
/// Returns an error if `strips` is empty or two strips differ in height
pub fn assemble(strips: Vec<Strip>) -> Result<Assembly> {
    GreedyAssembler::new(strips, AssemblyConfig::default())?.run()
}
