multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Voting window open, or closed but not yet executed.
    Active,
    /// votes_for > votes_against at execution. Effect applied. Terminal.
    Passed,
    /// Tie or majority against at execution. Terminal.
    Failed,
}

// ============================================================
// Proposal Effect — what a passing proposal does
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ProposalEffect<M: ManagedTypeApi> {
    pub transfer_amount: BigUint<M>,
    pub transfer_to: Option<ManagedAddress<M>>,
    pub add_member: Option<ManagedAddress<M>>,
}

impl<M: ManagedTypeApi> ProposalEffect<M> {
    /// The treasury payout this effect carries, if any.
    pub fn transfer(&self) -> Option<(&ManagedAddress<M>, &BigUint<M>)> {
        match &self.transfer_to {
            Some(to) if self.transfer_amount > 0u64 => Some((to, &self.transfer_amount)),
            _ => None,
        }
    }
}

// ============================================================
// Proposal — the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    pub title: ManagedBuffer<M>,
    pub description: ManagedBuffer<M>,
    pub start_block: u64,
    /// Last block nonce at which ballots are accepted.
    pub end_block: u64,
    pub votes_for: u64,
    pub votes_against: u64,
    pub status: ProposalStatus,
    pub executed: bool,
    /// Opened during the bootstrap phase.
    pub genesis: bool,
    pub effect: ProposalEffect<M>,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn is_active(&self) -> bool {
        self.status == ProposalStatus::Active
    }

    pub fn is_voting_open(&self, block: u64) -> bool {
        block <= self.end_block
    }

    /// Strict majority; a tie fails.
    pub fn has_majority(&self) -> bool {
        self.votes_for > self.votes_against
    }
}

// ============================================================
// Vote Record — one permanent ballot per (proposal, voter)
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum VoteDirection {
    For,
    Against,
}

impl VoteDirection {
    pub fn from_support(support: bool) -> Self {
        if support {
            VoteDirection::For
        } else {
            VoteDirection::Against
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub struct VoteRecord {
    pub direction: VoteDirection,
    /// Voter reputation at the block the ballot was cast
    pub weight: u64,
}

// ============================================================
// Member — registry entry
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub struct Member {
    pub reputation: u64,
    pub joined_at: u64,
}

// ============================================================
// Disbursement Outcome — treasury report back to the lifecycle
// ============================================================

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum DisbursementOutcome {
    Sent,
    InsufficientFunds,
}
