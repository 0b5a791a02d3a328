//! The DowsHash orchestrator (spec component G): composes the table,
//! synthesizer, and shuffler with two outer double-SHA-256 compressions to
//! produce the final 256-bit block hash.

use sha2::{Digest, Sha256};

use super::pcg32::Pcg32;
use super::shuffle::shuffle_hash256;
use super::synth::Program;
use super::table::{chunk32_at, HASH_BASE_SIZE_IN_BYTES};

/// Number of 32-byte table chunks folded into the finalization pass.
const HASH_BASE_USE_COUNT: usize = 64;

fn sha256d(data: &[u8]) -> [u8; 32] {
    let once = Sha256::digest(data);
    Sha256::digest(once).into()
}

/// Read eight big-endian bytes starting at `bits[i mod 32]`, with every
/// subsequent byte index also taken modulo 32.
fn get_u64(bits: &[u8; 32], i: usize) -> u64 {
    let mut x = 0u64;
    for j in 0..8 {
        x = (x << 8) | bits[(i + j) % 32] as u64;
    }
    x
}

/// Accumulate a `(seed, incr)` pair by scanning `h` in 4-byte strides,
/// folding `get_u64` from the forward offset into `seed` and from the
/// reflected offset into `incr`, advancing `seed` by one PCG32 draw after
/// each stride. `seed`/`incr` carry whatever state the caller already
/// holds — callers that need a fresh derivation pass in `(0, 0)`.
fn accumulate_seed_incr(h: &[u8; 32], seed: &mut u64, incr: &mut u64) {
    let mut i = 0usize;
    while i < 32 {
        *seed = seed.wrapping_add(get_u64(h, i));
        *incr = incr.wrapping_add(get_u64(h, 31 - i));
        let mut rng = Pcg32::new(*seed, *incr);
        *seed = seed.wrapping_add(rng.next_u32() as u64);
        i += 4;
    }
}

/// The proof-of-work hash. Deterministic, allocation-free beyond a single
/// scratch buffer, and side-effect-free beyond the one-time mixing table
/// initialization triggered on first use.
///
/// `seed`/`incr` are accumulated once across both derivation passes — the
/// second pass continues from where the first left off rather than
/// restarting at `(0, 0)`.
pub fn dows_hash(input: &[u8; 32]) -> [u8; 32] {
    let mut h = *input;
    let mut seed = 0u64;
    let mut incr = 0u64;
    accumulate_seed_incr(&h, &mut seed, &mut incr);
    let program = Program::synthesize(seed, incr);
    shuffle_hash256(&program, &mut h);

    let mut preimage = Vec::with_capacity(64);
    preimage.extend_from_slice(input);
    preimage.extend_from_slice(&h);
    let result = sha256d(&preimage);

    accumulate_seed_incr(&result, &mut seed, &mut incr);
    let mut rng = Pcg32::new(seed, incr);

    let mut buf = Vec::with_capacity(32 + HASH_BASE_USE_COUNT * 32);
    buf.extend_from_slice(&result);
    for _ in 0..HASH_BASE_USE_COUNT {
        let n = (rng.next_u32() as usize) % HASH_BASE_SIZE_IN_BYTES;
        buf.extend_from_slice(&chunk32_at(n));
    }
    sha256d(&buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pins_the_zero_input_vector() {
        let got = dows_hash(&[0u8; 32]);
        assert_eq!(
            hex::encode(got),
            "fd4ff609993f86385952aefea26f9389a5d5e027ede7bae63943557e37c13dcf"
        );
    }

    #[test]
    fn pins_the_ascending_bytes_vector() {
        let mut input = [0u8; 32];
        for (i, b) in input.iter_mut().enumerate() {
            *b = i as u8;
        }
        let got = dows_hash(&input);
        assert_eq!(
            hex::encode(got),
            "169507d1791adcca4de081f4336f4d0b3350ea2bdba35a05b2afda4318266432"
        );
    }

    #[test]
    fn is_deterministic() {
        let input = [7u8; 32];
        assert_eq!(dows_hash(&input), dows_hash(&input));
    }

    #[test]
    fn single_bit_flip_produces_an_avalanche() {
        let a = [0x5au8; 32];
        let mut b = a;
        b[0] ^= 1;
        let ha = dows_hash(&a);
        let hb = dows_hash(&b);
        let flipped: u32 = ha
            .iter()
            .zip(hb.iter())
            .map(|(x, y)| (x ^ y).count_ones())
            .sum();
        assert!(flipped >= 80, "only {} bits flipped", flipped);
    }

    #[test]
    fn random_single_bit_flips_average_a_strong_avalanche() {
        use rand::{Rng, SeedableRng};

        let mut rng = rand::rngs::StdRng::seed_from_u64(0xd0c0_ffee);
        let trials = 64;
        let mut total = 0u64;
        for _ in 0..trials {
            let mut a = [0u8; 32];
            rng.fill(&mut a);
            let bit = rng.gen_range(0..256);
            let mut b = a;
            b[bit / 8] ^= 1 << (bit % 8);

            let ha = dows_hash(&a);
            let hb = dows_hash(&b);
            total += ha
                .iter()
                .zip(hb.iter())
                .map(|(x, y)| (x ^ y).count_ones() as u64)
                .sum::<u64>();
        }
        let average = total as f64 / trials as f64;
        assert!(average >= 120.0, "average flipped bits only {average}");
    }
}
