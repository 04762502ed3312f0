
use std::fmt;

use log::debug;

use crate::sp2_math::PrngState;

const W1_LEVELS: u32 = 4;
const W2_LEVELS: u32 = 4;
const W3_LEVELS: u32 = 1;
const W4_LEVELS: u32 = 4;
const W5_LEVELS: u32 = 1;
const W6_LEVELS: u32 = 4;
const NON_W7_LEVELS: u32 =
    W1_LEVELS + W2_LEVELS + W3_LEVELS + W4_LEVELS + W5_LEVELS + W6_LEVELS;

/// World 7 runs from 7-1 through 7-98 before looping.
pub const W7_LEVELS: u32 = 98;

/// First world-7 level that counts as Cosmic Ocean.
/// Note: this condition might not strictly match the game's logic.
pub const CO_FIRST_LEVEL: u32 = 5;

/// How many Cosmic Ocean levels one run visits.
pub const NUM_CO_LEVELS: u32 = W7_LEVELS - CO_FIRST_LEVEL + 1;

/// The eight themes a Cosmic Ocean level can borrow from, in the order
/// the game indexes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subtheme {
    Dwelling,
    Jungle,
    Volcana,
    TidePool,
    Temple,
    IceCaves,
    NeoBabylon,
    SunkenCity,
}

impl Subtheme {
    pub const ALL: [Subtheme; 8] = [
        Subtheme::Dwelling,
        Subtheme::Jungle,
        Subtheme::Volcana,
        Subtheme::TidePool,
        Subtheme::Temple,
        Subtheme::IceCaves,
        Subtheme::NeoBabylon,
        Subtheme::SunkenCity,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Subtheme::Dwelling => "Dwelling",
            Subtheme::Jungle => "Jungle",
            Subtheme::Volcana => "Volcana",
            Subtheme::TidePool => "Tide Pool",
            Subtheme::Temple => "Temple",
            Subtheme::IceCaves => "Ice Caves",
            Subtheme::NeoBabylon => "Neo Babylon",
            Subtheme::SunkenCity => "Sunken City",
        }
    }

    /// `index` must come from a roll in [0, 8).
    fn from_index(index: u32) -> Self {
        Self::ALL[index as usize]
    }
}

impl fmt::Display for Subtheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// The sampled values for one Cosmic Ocean level. Read-only once emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelRecord {
    pub world: u32,
    pub level: u32,
    pub subtheme: Subtheme,
    pub width: u32,
    pub height: u32,
    pub dark_level: bool,
}

impl LevelRecord {
    /// CO levels have empty "rooms" along all four edges, so only the
    /// interior contributes to the room count.
    pub fn co_rooms(&self) -> u64 {
        ((self.width - 2) * (self.height - 2)) as u64
    }
}

/// Iterator over the Cosmic Ocean levels of one seed's run, in level
/// order. Replays the game's per-level seed derivation from 1-1 onward;
/// the levels before 7-5 never surface a record, but each still consumes
/// one sequencing step, which shifts every later level's values.
pub struct CosmicLevels {
    session_seed: u64,
    level_seed: u64,
    level: u32,
    dark_level_in_world: bool,
}

impl CosmicLevels {
    pub fn new(seed: u32) -> Self {
        let state = PrngState::init(seed as u64);
        let session_seed = state.a;
        // Seeding itself counts as 1-1's sequencing step.
        let mut level_seed = session_seed.wrapping_add(state.b);
        for _ in 1..NON_W7_LEVELS {
            level_seed = level_seed.wrapping_add(session_seed);
        }
        CosmicLevels {
            session_seed,
            level_seed,
            level: 0,
            dark_level_in_world: false,
        }
    }
}

impl Iterator for CosmicLevels {
    type Item = LevelRecord;

    fn next(&mut self) -> Option<LevelRecord> {
        while self.level < W7_LEVELS {
            self.level += 1;
            let level = self.level;
            self.level_seed = self.level_seed.wrapping_add(self.session_seed);

            let folded = ((self.level_seed >> 0x20) ^ self.level_seed) as u32;
            let mut rng = PrngState::from_level_seed(folded);
            // The game advances ten times here to fill its RNG buffers,
            // but it never reads the tenth result back, so nine calls
            // reach the same intermediate.
            for _ in 0..9 {
                rng.advance();
            }
            let mut rng = PrngState::from_level_seed(rng.a as u32);

            let subtheme = if level >= CO_FIRST_LEVEL {
                let subtheme = Subtheme::from_index(rng.rand_int(8));
                rng.advance();
                Some(subtheme)
            }
            else {
                None
            };

            // One-shot 1-in-12 roll; once a world has gone dark, neither
            // the roll nor its advance happens again.
            if !self.dark_level_in_world {
                if rng.rand_int(12) == 0 {
                    self.dark_level_in_world = true;
                }
                rng.advance();
            }

            if let Some(subtheme) = subtheme {
                // Two attribute rolls this simulation doesn't need.
                rng.advance();
                rng.advance();
                let width = rng.rand_int(4) + 5;
                rng.advance();
                let height = rng.rand_int(5) + 4;

                return Some(LevelRecord {
                    world: 7,
                    level,
                    subtheme,
                    width,
                    height,
                    dark_level: self.dark_level_in_world,
                });
            }
        }
        None
    }
}

/// Everything derived for one seed: the room-count metric plus the full
/// record list for diagnostic output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub seed: u32,
    pub total_co_rooms: u64,
    pub levels: Vec<LevelRecord>,
}

impl Run {
    pub fn simulate(seed: u32) -> Self {
        let levels: Vec<LevelRecord> = CosmicLevels::new(seed).collect();
        let total_co_rooms = levels.iter().map(LevelRecord::co_rooms).sum();
        debug!("{seed:08X}: {total_co_rooms} CO rooms across {} levels", levels.len());
        Run { seed, total_co_rooms, levels }
    }
}

/// Metric-only fast path for range scans; skips collecting the records.
pub fn total_co_rooms(seed: u32) -> u64 {
    CosmicLevels::new(seed).map(|level| level.co_rooms()).sum()
}
