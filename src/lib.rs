#![deny(unused_import_braces, unused_qualifications, trivial_casts, trivial_numeric_casts)]
#![deny(unused_qualifications, variant_size_differences, stable_features, unreachable_pub)]
#![deny(non_shorthand_field_patterns, unused_attributes, unused_extern_crates)]
#![deny(
    renamed_and_removed_lints,
    stable_features,
    unused_allocation,
    unused_comparisons,
    bare_trait_objects
)]
#![deny(unused_must_use, unused_mut, unused_unsafe, private_in_public)]
#![forbid(unsafe_code)]

//! Consensus-critical proof-of-work core for the Dowscoin network.
//!
//! Two tightly coupled subsystems: [`hash::dows_hash`], the custom
//! block-header hash every validator runs on every header, and
//! [`difficulty`], the rule by which the target adjusts from block to
//! block. [`pow`] ties them together into the boolean range check a
//! candidate header must pass.
//!
//! Out of scope, by design: peer-to-peer networking, block/transaction
//! serialization, the UTXO set, script interpretation, wallet key
//! management, RPC/UI, storage, and chain bootstrapping. Those are external
//! collaborators; this crate only defines the interfaces it needs from them
//! (see [`difficulty::ChainContext`]).

pub mod compact;
pub mod difficulty;
pub mod error;
pub mod hash;
pub mod params;
pub mod pow;

pub use compact::{get_compact, set_compact};
pub use difficulty::{
    ancestor_and_average_difficulty, calculate_next_work_required, get_next_work_required,
    ChainContext,
};
pub use error::ConsensusError;
pub use hash::dows_hash;
pub use params::ConsensusParams;
pub use pow::check_proof_of_work;
