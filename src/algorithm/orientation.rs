//! Choosing which of two strips goes on the left

use crate::algorithm::similarity::edge_similarity;
use crate::algorithm::working_set::StripId;
use crate::io::error::Result;
use crate::model::strip::Strip;

/// Which strip of a scored pair is placed on the left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// The current strip sits left of its partner
    CurrentLeft,
    /// The partner sits left of the current strip
    PartnerLeft,
}

/// Outcome of scoring the current strip against one partner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    /// Edge cost of the cheaper orientation
    pub cost: u64,
    /// Orientation achieving `cost`
    pub orientation: Orientation,
    /// Strip the current strip was scored against
    pub partner: StripId,
}

/// Score both adjacency orders of `current` and `partner`
///
/// Compares the right edge of `current` with the left edge of `partner`, and
/// the right edge of `partner` with the left edge of `current`. Equal costs
/// resolve to [`Orientation::CurrentLeft`].
///
/// # Errors
///
/// Returns [`crate::ReassemblyError::MismatchedHeight`] if the strips differ
/// in height
pub fn score(current: &Strip, partner_id: StripId, partner: &Strip) -> Result<ScoreResult> {
    let cost_current_left = edge_similarity(current.rightmost_column(), partner.leftmost_column())?;
    let cost_partner_left = edge_similarity(partner.rightmost_column(), current.leftmost_column())?;

    let (cost, orientation) = if cost_partner_left < cost_current_left {
        (cost_partner_left, Orientation::PartnerLeft)
    } else {
        (cost_current_left, Orientation::CurrentLeft)
    };

    Ok(ScoreResult {
        cost,
        orientation,
        partner: partner_id,
    })
}
