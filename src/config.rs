// ============================================================
// Governance constants — fixed at compile time
// ============================================================

/// Voting window: ~24 hours of 6-second rounds
pub const VOTING_PERIOD_BLOCKS: u64 = 14_400;

/// Reputation granted on admission, both to the founder at
/// initialization and to accounts admitted by a passed proposal
pub const STARTING_REPUTATION: u64 = 100;
