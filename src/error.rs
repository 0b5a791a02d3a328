//! Consensus error types.
//!
//! Per §7, only chain-structure violations (programmer bugs: a null tip, a
//! missing ancestor, a height before genesis) are surfaced as `Err` here.
//! Invalid proof-of-work input is a §7 kind-1 failure and stays a plain
//! `bool` from [`crate::pow::check_proof_of_work`], matching its spec
//! signature.

use thiserror::Error;

/// Errors returned by the difficulty engine when the caller has violated an
/// invariant the chain is supposed to guarantee (never offering a tip before
/// genesis, never breaking parent links).
#[derive(Debug, Error)]
pub enum ConsensusError {
    #[error("ancestor walk requested height {requested}, but the tip is only at height {tip}")]
    HeightFirstBeforeGenesis { requested: i64, tip: u32 },

    #[error("missing ancestor: walked off the parent chain before reaching height {target}")]
    MissingAncestor { target: u32 },
}
