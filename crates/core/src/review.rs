//! Customer review rules.

/// Ratings are whole stars in `MIN_RATING..=MAX_RATING`.
pub const MIN_RATING: i16 = 1;
pub const MAX_RATING: i16 = 5;
