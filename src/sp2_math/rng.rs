/// Spelunky 2's internal PRNG, reconstructed from the game.
/// Level generation is fully deterministic after seeding, which is what
/// allows us to reproduce Cosmic Ocean level dimensions for a seed
/// without ever running the game: the seed shown on the run screen is
/// the value fed to `init` at session start.
/// Every constant, rotation amount, and evaluation order below is
/// load-bearing. A "close enough" value doesn't fail loudly; it just
/// produces wrong dimensions for every seed from then on.

const PRNG_M0: u64 = 0x9E6C63D0676A9A99;
const PRNG_M1: u64 = 0xD3833E804F4C574B;

/// The avalanche step shared by both seeding paths.
#[inline]
fn shift_mix(x: u64) -> u64 {
    (x >> 0x33) ^ x ^ (x >> 0x17)
}

/// One generator state: the (a, b) pair of 64-bit words the game carries
/// between successive advances. Plain value type; copying it forks the
/// sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrngState {
    pub a: u64,
    pub b: u64,
}

impl PrngState {
    /// Seeds the generator the way the game does at the start of a run.
    /// The `c` substitution keeps a seed of zero from collapsing the
    /// whole state to zero, and `a` is forced odd so the multiplicative
    /// step in `advance` remains a bijection on 64-bit words.
    pub fn init(seed: u64) -> Self {
        let c: u64 = if seed == 0 { 1 } else { 0 };
        let mut b = c.wrapping_sub(seed).wrapping_mul(PRNG_M0);
        b = shift_mix(b).wrapping_mul(PRNG_M0);
        let a = b.rotate_left(0x1B).wrapping_mul(PRNG_M0) | 1;

        let mut b = shift_mix(b).wrapping_mul(PRNG_M1);
        let c: u64 = if b == 0 { 1 } else { 0 };
        b = c.wrapping_sub(b).wrapping_mul(PRNG_M0);
        b = shift_mix(b).wrapping_mul(PRNG_M0);
        b = b.rotate_left(0x1B).wrapping_mul(PRNG_M0);

        PrngState { a, b }
    }

    /// The shorter re-seed the game applies while generating a level:
    /// the same zero-guard and avalanche pattern as `init`, but with no
    /// odd-forcing on `a` and no final multiply on `b`.
    pub fn from_level_seed(value: u32) -> Self {
        let v = value as u64;
        let c: u64 = if v == 0 { 1 } else { 0 };
        let mut b = c.wrapping_sub(v).wrapping_mul(PRNG_M0);
        b = shift_mix(b).wrapping_mul(PRNG_M0);
        let a = b.rotate_left(0x1B).wrapping_mul(PRNG_M0);
        let b = shift_mix(b);
        PrngState { a, b }
    }

    /// Advances the state. This is the game's only transition primitive;
    /// the subtraction uses the pre-update `a`.
    pub fn advance(&mut self) {
        let a0 = self.a;
        self.a = self.b.wrapping_mul(PRNG_M1);
        self.b = self.b.wrapping_sub(a0).rotate_left(0x1B);
    }

    /// Returns a uint in [0, max), derived from the low 32 bits of `a`
    /// by multiply-high rather than remainder (this is how the game
    /// avoids modulo bias).
    pub fn rand_int(&self, max: u32) -> u32 {
        ((self.a as u32 as u64 * max as u64) >> 0x20) as u32
    }
}
