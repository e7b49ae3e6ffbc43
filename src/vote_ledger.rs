multiversx_sc::imports!();

use crate::errors::ERR_ALREADY_VOTED;
use crate::types::{VoteDirection, VoteRecord};

/// One permanent ballot per (proposal, voter). Entries are never
/// overwritten or removed.
#[multiversx_sc::module]
pub trait VoteLedgerModule {
    fn record_vote(
        &self,
        proposal_id: u64,
        voter: &ManagedAddress,
        direction: VoteDirection,
        weight: u64,
    ) {
        let ballot = self.votes(proposal_id, voter);
        require!(ballot.is_empty(), ERR_ALREADY_VOTED);

        ballot.set(VoteRecord { direction, weight });
        self.vote_count(proposal_id).update(|count| *count += 1);
    }

    fn lookup_vote(&self, proposal_id: u64, voter: &ManagedAddress) -> Option<VoteRecord> {
        let ballot = self.votes(proposal_id, voter);
        if ballot.is_empty() {
            None
        } else {
            Some(ballot.get())
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getVote)]
    fn get_vote(&self, proposal_id: u64, voter: &ManagedAddress) -> Option<VoteRecord> {
        self.lookup_vote(proposal_id, voter)
    }

    #[view(hasVoted)]
    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> bool {
        !self.votes(proposal_id, voter).is_empty()
    }

    #[view(getVoteCount)]
    fn get_vote_count(&self, proposal_id: u64) -> u64 {
        self.vote_count(proposal_id).get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("votes")]
    fn votes(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<VoteRecord>;

    #[storage_mapper("voteCount")]
    fn vote_count(&self, proposal_id: u64) -> SingleValueMapper<u64>;
}
