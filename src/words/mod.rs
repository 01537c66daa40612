//! Candidate words per difficulty tier.
//!
//! The bank is built once at startup and is read-only afterwards, so a
//! single instance can back any number of rounds.

mod bank;

pub use bank::WordBank;
pub(crate) use bank::is_playable_word;
