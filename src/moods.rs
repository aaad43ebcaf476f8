//! Static emotion-to-seed lookup.
//!
//! Maps the frontend's detected emotion labels to the seed genres and
//! artists used to bias a recommendation query. The table is fixed at
//! compile time and never mutated.

/// Seed data for one emotion label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedProfile {
    pub genres: &'static [&'static str],
    pub artists: &'static [&'static str],
}

// Arijit Singh, Shreya Ghoshal
const HAPPY: SeedProfile = SeedProfile {
    genres: &["bollywood", "indian"],
    artists: &["3tD5dCEq52Ud27zi9iNT6L", "0LyfQWJT6nXafLPZqxe9Of"],
};

// A. R. Rahman, Lata Mangeshkar
const SAD: SeedProfile = SeedProfile {
    genres: &["indian", "acoustic"],
    artists: &["0LyfQWJT6nXafLPZqxe9Of", "1mYsTxnqsietFxj1OgoGbG"],
};

// Amit Trivedi, Arijit Singh
const ANGRY: SeedProfile = SeedProfile {
    genres: &["indian", "chill"],
    artists: &["7rZR0ugcLEhNrFYOrUtZii", "3tD5dCEq52Ud27zi9iNT6L"],
};

const DEFAULT: SeedProfile = HAPPY;

/// Returns the seed profile for an emotion label. Unrecognized labels
/// (including the empty string) fall back to the default profile.
pub fn seeds_for(emotion: &str) -> SeedProfile {
    match emotion {
        "happy" => HAPPY,
        "sad" => SAD,
        "angry" => ANGRY,
        _ => DEFAULT,
    }
}
