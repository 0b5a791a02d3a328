//! The proof-of-work range check (spec component I, §4.I).

use primitive_types::U256;

use crate::compact::set_compact;
use crate::params::ConsensusParams;

/// Decode `nBits`, validate its range, and test `hash` against the decoded
/// target. `hash` is interpreted as an unsigned 256-bit big-endian integer.
///
/// Rejects (returns `false`, never panics or raises) if the compact target
/// is negative, zero, overflowed, or exceeds `pow_limit`; rejects if the
/// hash numerically exceeds the target. This is a §7 kind-1 failure surface
/// — a boolean rejection, not an exception.
pub fn check_proof_of_work(hash: &[u8; 32], bits: u32, params: &ConsensusParams) -> bool {
    let (target, negative, overflow) = set_compact(bits);

    if negative || overflow || target.is_zero() || target > params.pow_limit {
        return false;
    }

    let hash_value = U256::from_big_endian(hash);
    hash_value <= target
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compact::get_compact;

    fn hash_from_u256(value: U256) -> [u8; 32] {
        let mut out = [0u8; 32];
        value.to_big_endian(&mut out);
        out
    }

    #[test]
    fn accepts_a_hash_at_or_below_target() {
        let params = ConsensusParams::mainnet();
        let bits = 0x1f0fffff;
        let (target, _, _) = set_compact(bits);
        let hash = hash_from_u256(target);
        assert!(check_proof_of_work(&hash, bits, &params));
    }

    #[test]
    fn rejects_a_hash_above_target() {
        let params = ConsensusParams::mainnet();
        let bits = 0x1f0fffff;
        let (target, _, _) = set_compact(bits);
        let hash = hash_from_u256(target + U256::one());
        assert!(!check_proof_of_work(&hash, bits, &params));
    }

    #[test]
    fn rejects_a_target_above_pow_limit() {
        let params = ConsensusParams::mainnet();
        // One exponent step above pow_limit's own compact encoding.
        let bits = get_compact(params.pow_limit) + (1 << 24);
        let hash = [0u8; 32];
        assert!(!check_proof_of_work(&hash, bits, &params));
    }

    #[test]
    fn rejects_a_negative_target() {
        let params = ConsensusParams::mainnet();
        let bits = 0x01923456;
        let hash = [0u8; 32];
        assert!(!check_proof_of_work(&hash, bits, &params));
    }

    #[test]
    fn rejects_a_zero_target() {
        let params = ConsensusParams::mainnet();
        let hash = [0u8; 32];
        assert!(!check_proof_of_work(&hash, 0x03000000, &params));
    }

    #[test]
    fn accepts_the_published_genesis_hash_at_its_own_difficulty() {
        use crate::params::genesis;
        let params = ConsensusParams::mainnet();
        let hash_hex = genesis::MAINNET.hash;
        let mut hash = [0u8; 32];
        hex::decode_to_slice(hash_hex, &mut hash).unwrap();
        assert!(check_proof_of_work(&hash, genesis::MAINNET.bits, &params));
    }
}
