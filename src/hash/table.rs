//! The fixed mixing table (spec component A).
//!
//! A 64 KiB byte array, filled exactly once at first use by the PCG32 stream
//! seeded with the two literal constants below, and never mutated again. All
//! addressing into the table wraps modulo [`HASH_BASE_SIZE_IN_BYTES`]; the
//! wrap-around is load-bearing, not a defensive guard.

use once_cell::sync::Lazy;

use super::pcg32::Pcg32;

/// Size of the mixing table, in bytes. Part of the wire contract.
pub const HASH_BASE_SIZE_IN_BYTES: usize = 65536;

/// The two literal PCG32 seed constants used to fill the table. Also part of
/// the wire contract: any implementation that seeds the table differently
/// produces a different chain.
const TABLE_SEED_STATE: u64 = 599128178199824553;
const TABLE_SEED_SEQ: u64 = 2055286011627441373;

static HASH_BASE: Lazy<Box<[u8; HASH_BASE_SIZE_IN_BYTES]>> = Lazy::new(init_hash_base);

fn init_hash_base() -> Box<[u8; HASH_BASE_SIZE_IN_BYTES]> {
    let mut table = Box::new([0u8; HASH_BASE_SIZE_IN_BYTES]);
    let mut rng = Pcg32::new(TABLE_SEED_STATE, TABLE_SEED_SEQ);
    let mut i = 0;
    while i < HASH_BASE_SIZE_IN_BYTES {
        let r = rng.next_u32();
        table[i] = (r & 0xFF) as u8;
        table[i + 1] = ((r >> 8) & 0xFF) as u8;
        table[i + 2] = ((r >> 16) & 0xFF) as u8;
        table[i + 3] = ((r >> 24) & 0xFF) as u8;
        i += 4;
    }
    table
}

/// Read four consecutive table bytes starting at `i` (wrapping modulo the
/// table size at every address, not just the start) and assemble them
/// little-endian into a 32-bit word.
pub(crate) fn get_u32_from_hash_base(i: u32) -> u32 {
    let table = &*HASH_BASE;
    let base = i as usize % HASH_BASE_SIZE_IN_BYTES;
    let b0 = table[base] as u32;
    let b1 = table[(base + 1) % HASH_BASE_SIZE_IN_BYTES] as u32;
    let b2 = table[(base + 2) % HASH_BASE_SIZE_IN_BYTES] as u32;
    let b3 = table[(base + 3) % HASH_BASE_SIZE_IN_BYTES] as u32;
    b0 | (b1 << 8) | (b2 << 16) | (b3 << 24)
}

/// Copy a 32-byte chunk out of the table starting at byte offset `n`,
/// wrapping modulo the table size when the chunk would otherwise run past
/// the end. Used by the orchestrator's finalization step.
pub(crate) fn chunk32_at(n: usize) -> [u8; 32] {
    let table = &*HASH_BASE;
    let mut out = [0u8; 32];
    if n + 32 <= HASH_BASE_SIZE_IN_BYTES {
        out.copy_from_slice(&table[n..n + 32]);
    } else {
        for (j, slot) in out.iter_mut().enumerate() {
            *slot = table[(n + j) % HASH_BASE_SIZE_IN_BYTES];
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_32_bytes_match_the_pinned_constant() {
        let table = &*HASH_BASE;
        assert_eq!(
            hex::encode(&table[..32]),
            "f336786e5c9d82754bd32c7387d377f1d638a126816decc4696d1ae806253af4"
        );
    }

    #[test]
    fn indexing_wraps_at_the_table_boundary() {
        let wrapped = get_u32_from_hash_base((HASH_BASE_SIZE_IN_BYTES - 1) as u32);
        let table = &*HASH_BASE;
        let expect = (table[HASH_BASE_SIZE_IN_BYTES - 1] as u32)
            | ((table[0] as u32) << 8)
            | ((table[1] as u32) << 16)
            | ((table[2] as u32) << 24);
        assert_eq!(wrapped, expect);
    }

    #[test]
    fn chunk32_wraps_near_the_end() {
        let n = HASH_BASE_SIZE_IN_BYTES - 5;
        let chunk = chunk32_at(n);
        let table = &*HASH_BASE;
        assert_eq!(chunk[0], table[n]);
        assert_eq!(chunk[5], table[0]);
    }
}
