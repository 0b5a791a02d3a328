//! The difficulty engine (spec component H, §4.H): given a chain tip and a
//! candidate header timestamp, returns the compact `nBits` target the
//! candidate must satisfy. Deviates from the ancestor in exactly the three
//! ways §1 calls out: an *average* of recent difficulty bits rather than a
//! single endpoint, *intra-window* emergency adjustments, and an underflow
//! fallback in the intermediate target arithmetic.

use primitive_types::U256;
use tracing::debug;

use crate::compact::{get_compact, set_compact};
use crate::error::ConsensusError;
use crate::params::ConsensusParams;

/// A read-only view onto one entry in the chain's block index, as consumed
/// by the difficulty engine (spec §6, "Consumed from the chain subsystem").
/// `parent` returns an owned cursor rather than a reference so that callers
/// backed by index-based storage (see `tests/` for a `Vec`-backed reference
/// implementation) don't need self-referential borrows.
pub trait ChainContext: Sized + Clone {
    fn height(&self) -> u32;
    fn time(&self) -> i64;
    fn bits(&self) -> u32;
    fn parent(&self) -> Option<Self>;
}

/// Walk parent links from `tip` down to (and including) `height_first`,
/// returning the ancestor entry at that height and the arithmetic mean of
/// the decoded targets over the inclusive range `[height_first, tip.height]`.
///
/// This is the one place the difficulty engine reads beyond the immediate
/// tip (§9 Design Notes); a production chain index SHOULD cache the running
/// sum per entry to make this O(1) amortized instead of O(W) per call.
pub fn ancestor_and_average_difficulty<T: ChainContext>(
    tip: &T,
    height_first: u32,
) -> Result<(T, U256), ConsensusError> {
    if height_first > tip.height() {
        return Err(ConsensusError::HeightFirstBeforeGenesis {
            requested: height_first as i64,
            tip: tip.height(),
        });
    }

    let mut total = U256::zero();
    let mut count = U256::zero();
    let mut cur = tip.clone();
    loop {
        let (value, _, _) = set_compact(cur.bits());
        total += value;
        count += U256::one();
        if cur.height() == height_first {
            return Ok((cur, total / count));
        }
        cur = cur
            .parent()
            .ok_or(ConsensusError::MissingAncestor { target: height_first })?;
    }
}

/// Re-derive the compact target from an already-selected window: the
/// ancestor at `first_time`, the observed span ending at `endpoint_time`,
/// and the window's average decoded target `avg_bits`. Exposed directly for
/// tests, per spec §6.
pub fn calculate_next_work_required(
    tip_bits: u32,
    first_time: i64,
    endpoint_time: i64,
    avg_bits: U256,
    params: &ConsensusParams,
) -> u32 {
    if params.no_retargeting {
        return tip_bits;
    }

    let mut actual = endpoint_time - first_time;
    let lo = params.target_timespan / 4;
    let hi = params.target_timespan * 4;
    if actual < lo {
        actual = lo;
    }
    if actual > hi {
        actual = hi;
    }
    let actual = U256::from(actual as u64);
    let target_timespan = U256::from(params.target_timespan as u64);

    let mut new = (avg_bits / target_timespan) * actual;
    if new.is_zero() {
        // Underflow fallback: avg_bits < target_timespan made the divide
        // collapse to zero before the multiply had a chance to matter.
        // Multiply first, divide second, so small average targets still
        // move.
        debug!("difficulty: underflow fallback (avg_bits < target_timespan)");
        new = (avg_bits * actual) / target_timespan;
    }

    if new > params.pow_limit {
        debug!("difficulty: clamping new target down to pow_limit");
        new = params.pow_limit;
    }

    get_compact(new)
}

/// The entry point: given the chain tip and a candidate header's timestamp,
/// return the `nBits` the candidate block must satisfy.
///
/// Fails only on chain-structure violations (§7 kind 2): these indicate a
/// caller bug (a tip before genesis, a broken parent chain) rather than
/// anything about the candidate header itself, so they return `Err` instead
/// of the `bool` that `check_proof_of_work` uses for header-level rejection.
pub fn get_next_work_required<T: ChainContext>(
    tip: &T,
    candidate_time: i64,
    params: &ConsensusParams,
) -> Result<u32, ConsensusError> {
    let pow_limit_compact = get_compact(params.pow_limit);
    let window = params.window;
    let height = tip.height();

    if height < window {
        debug!("difficulty: early chain (height {} < window {})", height, window);
        return Ok(pow_limit_compact);
    }

    if height % window != 0 {
        if params.allow_min_difficulty {
            if candidate_time > tip.time() + 2 * params.target_spacing {
                debug!("difficulty: min-difficulty override (stalled testnet)");
                return Ok(pow_limit_compact);
            }
            let mut cursor = tip.clone();
            loop {
                let should_advance =
                    cursor.height() % window != 0 && cursor.bits() == pow_limit_compact;
                if !should_advance {
                    break;
                }
                match cursor.parent() {
                    Some(parent) => cursor = parent,
                    None => break,
                }
            }
            return Ok(cursor.bits());
        }

        let (height_first, endpoint_time) = if candidate_time > tip.time() + params.target_spacing / 2 {
            (height - window + 1, candidate_time)
        } else {
            (height - window, tip.time())
        };

        let (first, avg_bits) = ancestor_and_average_difficulty(tip, height_first)?;

        if candidate_time > tip.time() + 5 * params.target_spacing {
            debug!("difficulty: emergency retarget (too hard)");
            return Ok(calculate_next_work_required(
                tip.bits(),
                first.time(),
                endpoint_time,
                avg_bits,
                params,
            ));
        }

        let d = candidate_time - first.time();
        if d - params.target_timespan > params.target_timespan / 4 {
            debug!("difficulty: emergency retarget (too hard on average)");
            return Ok(calculate_next_work_required(
                tip.bits(),
                first.time(),
                endpoint_time,
                avg_bits,
                params,
            ));
        }
        if d < (params.target_timespan / 4) * 3 {
            debug!("difficulty: emergency retarget (too easy)");
            return Ok(calculate_next_work_required(
                tip.bits(),
                first.time(),
                endpoint_time,
                avg_bits,
                params,
            ));
        }

        return Ok(tip.bits());
    }

    let height_first = height - window;
    let (first, avg_bits) = ancestor_and_average_difficulty(tip, height_first)?;
    Ok(calculate_next_work_required(
        tip.bits(),
        first.time(),
        tip.time(),
        avg_bits,
        params,
    ))
}
