//! Magic bitboard tables for slider attacks.
//!
//! Each square carries a `{mask, magic, shift, table}` entry; an attack
//! lookup masks the blockers, multiplies by the magic, shifts, and indexes
//! the table. The magic multipliers are found once at table initialization
//! by a seeded sparse-random search, so the tables are deterministic and
//! immutable for the life of the process.

use once_cell::sync::Lazy;
use rand::prelude::*;

const MAGIC_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// A single magic entry: relevant-occupancy mask, multiplier, shift, and the
/// attack table indexed by `((blockers & mask) * magic) >> shift`.
pub(crate) struct MagicEntry {
    mask: u64,
    magic: u64,
    shift: u32,
    table: Box<[u64]>,
}

impl MagicEntry {
    #[inline]
    fn attacks(&self, occupancy: u64) -> u64 {
        let blockers = occupancy & self.mask;
        let index = (blockers.wrapping_mul(self.magic) >> self.shift) as usize;
        self.table[index]
    }
}

/// Per-square magic entries for one slider kind.
pub(crate) struct MagicTable {
    entries: Vec<MagicEntry>,
}

impl MagicTable {
    #[inline]
    pub(crate) fn attacks(&self, square: usize, occupancy: u64) -> u64 {
        self.entries[square].attacks(occupancy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slider {
    Rook,
    Bishop,
}

impl Slider {
    const fn directions(self) -> [(isize, isize); 4] {
        match self {
            Slider::Rook => [(1, 0), (-1, 0), (0, 1), (0, -1)],
            Slider::Bishop => [(1, 1), (1, -1), (-1, 1), (-1, -1)],
        }
    }
}

/// Relevant-occupancy mask: the ray squares whose occupancy can change the
/// attack set. The final square of each ray is excluded (a blocker there
/// changes nothing), so edge squares never appear in the mask.
fn relevant_mask(slider: Slider, sq: usize) -> u64 {
    let rank = (sq / 8) as isize;
    let file = (sq % 8) as isize;
    let mut mask = 0u64;
    for (dr, df) in slider.directions() {
        let mut r = rank + dr;
        let mut f = file + df;
        while (0..8).contains(&(r + dr)) && (0..8).contains(&(f + df)) {
            mask |= 1u64 << (r * 8 + f);
            r += dr;
            f += df;
        }
    }
    mask
}

/// Slow ray scan, inclusive of the first blocker in each direction. Used
/// only to seed the tables, never on the hot path.
fn attacks_by_rays(slider: Slider, sq: usize, blockers: u64) -> u64 {
    let rank = (sq / 8) as isize;
    let file = (sq % 8) as isize;
    let mut attacks = 0u64;
    for (dr, df) in slider.directions() {
        let mut r = rank + dr;
        let mut f = file + df;
        while (0..8).contains(&r) && (0..8).contains(&f) {
            let b = 1u64 << (r * 8 + f);
            attacks |= b;
            if blockers & b != 0 {
                break;
            }
            r += dr;
            f += df;
        }
    }
    attacks
}

/// Expand a subset index into an occupancy pattern over the mask bits,
/// lowest mask bit first.
fn index_to_occupancy(index: usize, mask: u64) -> u64 {
    let mut occupancy = 0u64;
    let mut remaining = mask;
    let mut i = 0;
    while remaining != 0 {
        let lsb = remaining & remaining.wrapping_neg();
        remaining &= remaining - 1;
        if index & (1 << i) != 0 {
            occupancy |= lsb;
        }
        i += 1;
    }
    occupancy
}

/// Generate a sparse 64-bit candidate by AND-ing three random values; sparse
/// multipliers collide far less often in the magic index.
#[inline]
fn random_sparse_u64(rng: &mut StdRng) -> u64 {
    rng.gen::<u64>() & rng.gen::<u64>() & rng.gen::<u64>()
}

/// Search for a multiplier that maps every blocker pattern to a table slot
/// without conflicting attack sets. Benign collisions (same attacks) are
/// allowed, which is what makes the tables compact.
fn find_magic(
    rng: &mut StdRng,
    mask: u64,
    shift: u32,
    occupancies: &[u64],
    references: &[u64],
    table: &mut [u64],
) -> Option<u64> {
    for _attempt in 0..2_000_000 {
        let magic = random_sparse_u64(rng);
        // A multiplier that cannot spread the mask into the high bits will
        // never index the whole table; skip it without building anything.
        if (mask.wrapping_mul(magic) >> 56).count_ones() < 6 {
            continue;
        }

        table.fill(u64::MAX);
        let mut valid = true;
        for (&occ, &attack) in occupancies.iter().zip(references.iter()) {
            let index = (occ.wrapping_mul(magic) >> shift) as usize;
            if table[index] == u64::MAX {
                table[index] = attack;
            } else if table[index] != attack {
                valid = false;
                break;
            }
        }
        if valid {
            return Some(magic);
        }
    }
    None
}

fn build_entry(slider: Slider, sq: usize, rng: &mut StdRng) -> MagicEntry {
    let mask = relevant_mask(slider, sq);
    let bits = mask.count_ones();
    let shift = 64 - bits;
    let size = 1usize << bits;

    let occupancies: Vec<u64> = (0..size).map(|i| index_to_occupancy(i, mask)).collect();
    let references: Vec<u64> = occupancies
        .iter()
        .map(|&occ| attacks_by_rays(slider, sq, occ))
        .collect();

    let mut table = vec![0u64; size];
    let magic = find_magic(rng, mask, shift, &occupancies, &references, &mut table)
        .expect("magic search exhausted its attempt budget");

    // Unfilled slots (benign-collision gaps) are never indexed; zero them so
    // the sentinel does not leak.
    for slot in table.iter_mut() {
        if *slot == u64::MAX {
            *slot = 0;
        }
    }

    MagicEntry {
        mask,
        magic,
        shift,
        table: table.into_boxed_slice(),
    }
}

fn build_table(slider: Slider) -> MagicTable {
    let mut rng = StdRng::seed_from_u64(MAGIC_SEED);
    let entries: Vec<MagicEntry> =
        (0..64).map(|sq| build_entry(slider, sq, &mut rng)).collect();
    #[cfg(feature = "logging")]
    log::debug!(
        "{:?} magic tables ready ({} entries)",
        slider,
        entries.iter().map(|e| e.table.len()).sum::<usize>()
    );
    MagicTable { entries }
}

pub(crate) static ROOK_MAGICS: Lazy<MagicTable> = Lazy::new(|| build_table(Slider::Rook));
pub(crate) static BISHOP_MAGICS: Lazy<MagicTable> = Lazy::new(|| build_table(Slider::Bishop));
