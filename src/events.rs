multiversx_sc::imports!();

/// Append-only log consumed by off-chain indexers. Every state change
/// made by the registry, the lifecycle and the treasury lands here.
#[multiversx_sc::module]
pub trait EventsModule {
    #[event("memberAdmitted")]
    fn member_admitted_event(
        &self,
        #[indexed] member: &ManagedAddress,
        #[indexed] reputation: u64,
        joined_at: u64,
    );

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] title: &ManagedBuffer,
        transfer_amount: &BigUint,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: bool,
        weight: u64,
    );

    #[event("proposalConcluded")]
    fn proposal_concluded_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] passed: bool,
        #[indexed] votes_for: u64,
        votes_against: u64,
    );

    #[event("deposit")]
    fn deposit_event(&self, #[indexed] from: &ManagedAddress, amount: &BigUint);

    #[event("treasuryDisbursed")]
    fn treasury_disbursed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );
}
