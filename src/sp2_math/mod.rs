mod rng;

pub use rng::PrngState;
