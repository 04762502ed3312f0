use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum SeedError {
    #[error("Seed must be 8 digits long, excluding the optional '0x' at the beginning.")]
    InvalidLength,

    #[error("Seed contained invalid hex digits! You can only use 0-9 and A-F (case insensitive).")]
    InvalidHexDigits,
}

#[derive(Debug, Error, Clone)]
pub enum SearchError {
    #[error("Seed range is empty")]
    EmptyRange,

    #[error("Seed range starting at {start:#010X} with {num_seeds} seeds extends past 0xFFFFFFFF")]
    RangeOverflow { start: u32, num_seeds: u32 },
}
