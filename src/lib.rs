pub mod errors;
pub mod levelgen;
pub mod search;
pub mod sp2_math;

use errors::SeedError;

/// Parses an 8-hex-digit Spelunky 2 seed string, with or without a "0x"
/// prefix. These are the seeds the game shows on the run setup screen.
pub fn parse_seed(src: &str) -> Result<u32, SeedError> {
    let trimmed = src.strip_prefix("0x").unwrap_or(src);
    if trimmed.len() != 8 {
        Err(SeedError::InvalidLength)
    }
    else {
        u32::from_str_radix(trimmed, 16).map_err(|_| SeedError::InvalidHexDigits)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed("00005365").unwrap(), 0x5365);
        assert_eq!(parse_seed("0xbaba2233").unwrap(), 0xBABA2233);
        assert_eq!(parse_seed("BABA2233").unwrap(), 0xBABA2233);
        assert!(matches!(parse_seed("1234"), Err(SeedError::InvalidLength)));
        assert!(matches!(parse_seed("1234567G"), Err(SeedError::InvalidHexDigits)));
    }
}
