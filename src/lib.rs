#![no_std]

multiversx_sc::imports!();

pub mod config;
pub mod errors;
pub mod events;
pub mod membership;
pub mod treasury;
pub mod types;
pub mod vote_ledger;

use config::{STARTING_REPUTATION, VOTING_PERIOD_BLOCKS};
use errors::{
    ERR_ALREADY_EXISTS, ERR_DELAY_NOT_MET, ERR_EXPIRED, ERR_INSUFFICIENT_FUNDS,
    ERR_INSUFFICIENT_REPUTATION, ERR_INVALID_PARAMETER, ERR_NOT_ACTIVE, ERR_NOT_FOUND,
    ERR_UNAUTHORIZED,
};
use types::{DisbursementOutcome, Proposal, ProposalEffect, ProposalStatus, VoteDirection};

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait ReputationDao:
    events::EventsModule
    + membership::MembershipModule
    + vote_ledger::VoteLedgerModule
    + treasury::TreasuryModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// `min_reputation_to_propose` is fixed for the lifetime of the
    /// deployment; upgrades leave it untouched.
    #[init]
    fn init(&self, min_reputation_to_propose: u64) {
        self.min_reputation_to_propose().set(min_reputation_to_propose);
        self.proposal_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: initializeDao
    // Owner only. One-time self-admission of the contract owner
    // as founding member. Opens the bootstrap phase.
    // ========================================================

    #[endpoint(initializeDao)]
    fn initialize_dao(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.blockchain().get_owner_address(),
            ERR_UNAUTHORIZED
        );
        require!(self.founder().is_empty(), ERR_ALREADY_EXISTS);

        let now = self.blockchain().get_block_nonce();
        self.admit(&caller, STARTING_REPUTATION, now);
        self.founder().set(&caller);
        self.bootstrap_open().set(true);
    }

    // ========================================================
    // ENDPOINT: createProposal
    // Members with enough reputation can propose. During the
    // bootstrap phase the founder may open the genesis proposal
    // regardless of reputation.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        title: ManagedBuffer,
        description: ManagedBuffer,
        transfer_amount: BigUint,
        transfer_to: Option<ManagedAddress>,
        add_member: Option<ManagedAddress>,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        let member = self.require_member(&caller);

        require!(!title.is_empty(), ERR_INVALID_PARAMETER);
        require!(
            transfer_amount == 0u64 || transfer_to.is_some(),
            ERR_INVALID_PARAMETER
        );

        let genesis = self.bootstrap_open().get();
        if member.reputation < self.min_reputation_to_propose().get() {
            require!(
                genesis && self.founder().get() == caller,
                ERR_INSUFFICIENT_REPUTATION
            );
        }

        let proposal_id = self.proposal_count().get();
        let start_block = self.blockchain().get_block_nonce();

        let proposal = Proposal {
            id: proposal_id,
            proposer: caller.clone(),
            title,
            description,
            start_block,
            end_block: start_block + VOTING_PERIOD_BLOCKS,
            votes_for: 0,
            votes_against: 0,
            status: ProposalStatus::Active,
            executed: false,
            genesis,
            effect: ProposalEffect {
                transfer_amount,
                transfer_to,
                add_member,
            },
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id + 1);
        if genesis {
            self.bootstrap_open().set(false);
        }

        self.proposal_created_event(
            proposal_id,
            &caller,
            &proposal.title,
            &proposal.effect.transfer_amount,
        );

        proposal_id
    }

    // ========================================================
    // ENDPOINT: vote
    // For/Against, weighted by the voter's current reputation.
    // The window is inclusive of end_block.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, support: bool) {
        let mut proposal = self.require_proposal(proposal_id);
        require!(proposal.is_active(), ERR_NOT_ACTIVE);

        let now = self.blockchain().get_block_nonce();
        require!(proposal.is_voting_open(now), ERR_EXPIRED);

        let voter = self.blockchain().get_caller();
        let weight = self.reputation_of(&voter);
        let direction = VoteDirection::from_support(support);

        self.record_vote(proposal_id, &voter, direction, weight);
        match direction {
            VoteDirection::For => proposal.votes_for += weight,
            VoteDirection::Against => proposal.votes_against += weight,
        }
        self.proposals(proposal_id).set(&proposal);

        self.vote_event(proposal_id, &voter, support, weight);
    }

    // ========================================================
    // ENDPOINT: executeProposal
    // Anyone can call once the window has fully elapsed.
    // Active → Passed (effect applied) or Failed, exactly once.
    // ========================================================

    #[endpoint(executeProposal)]
    fn execute_proposal(&self, proposal_id: u64) -> bool {
        let mut proposal = self.require_proposal(proposal_id);
        require!(proposal.is_active(), ERR_NOT_ACTIVE);

        let now = self.blockchain().get_block_nonce();
        require!(!proposal.is_voting_open(now), ERR_DELAY_NOT_MET);

        let passed = proposal.has_majority();
        if passed {
            self.apply_effect(&proposal, now);
            proposal.status = ProposalStatus::Passed;
            proposal.executed = true;
        } else {
            proposal.status = ProposalStatus::Failed;
        }
        self.proposals(proposal_id).set(&proposal);

        self.proposal_concluded_event(
            proposal_id,
            passed,
            proposal.votes_for,
            proposal.votes_against,
        );

        passed
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        let stored = self.proposals(proposal_id);
        require!(!stored.is_empty(), ERR_NOT_FOUND);
        stored.get()
    }

    /// A treasury shortfall aborts the whole execution: the proposal
    /// stays Active and can be executed again once the treasury is funded.
    fn apply_effect(&self, proposal: &Proposal<Self::Api>, now: u64) {
        if let Some((to, amount)) = proposal.effect.transfer() {
            match self.disburse(proposal.id, to, amount) {
                DisbursementOutcome::Sent => {}
                DisbursementOutcome::InsufficientFunds => sc_panic!(ERR_INSUFFICIENT_FUNDS),
            }
        }

        if let Some(account) = &proposal.effect.add_member {
            self.admit(account, STARTING_REPUTATION, now);
        }
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, id: u64) -> Option<Proposal<Self::Api>> {
        let stored = self.proposals(id);
        if stored.is_empty() {
            None
        } else {
            Some(stored.get())
        }
    }

    #[view(getProposalCount)]
    fn get_proposal_count(&self) -> u64 {
        self.proposal_count().get()
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        let end = core::cmp::min(from.saturating_add(count), total);

        for id in from..end {
            result.push(self.proposals(id).get());
        }
        result
    }

    #[view(getActiveProposals)]
    fn get_active_proposals(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        let now = self.blockchain().get_block_nonce();

        for id in 0..total {
            let proposal = self.proposals(id).get();
            if proposal.is_active() && proposal.is_voting_open(now) {
                result.push(proposal);
            }
        }
        result
    }

    #[view(isBootstrapOpen)]
    fn is_bootstrap_open(&self) -> bool {
        self.bootstrap_open().get()
    }

    #[view(getFounder)]
    fn get_founder(&self) -> Option<ManagedAddress> {
        if self.founder().is_empty() {
            None
        } else {
            Some(self.founder().get())
        }
    }

    #[view(getGovernanceConfig)]
    fn get_governance_config(&self) -> MultiValue3<u64, u64, u64> {
        (
            VOTING_PERIOD_BLOCKS,
            self.min_reputation_to_propose().get(),
            STARTING_REPUTATION,
        )
            .into()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("minReputationToPropose")]
    fn min_reputation_to_propose(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("founder")]
    fn founder(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("bootstrapOpen")]
    fn bootstrap_open(&self) -> SingleValueMapper<bool>;

    /// Next proposal ID to assign
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;
}
