multiversx_sc::imports!();

use crate::errors::ERR_INVALID_PARAMETER;
use crate::types::DisbursementOutcome;

/// The DAO's pooled EGLD, held on the contract account itself. Anyone
/// may fund it; only a passed proposal can pay out of it.
#[multiversx_sc::module]
pub trait TreasuryModule: crate::events::EventsModule {
    #[endpoint(deposit)]
    #[payable("EGLD")]
    fn deposit(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();
        require!(amount > 0u64, ERR_INVALID_PARAMETER);

        self.deposit_event(&caller, &amount);
    }

    /// Pays `amount` to `to` on behalf of a passed proposal. Not an
    /// endpoint: reachable only from proposal execution.
    fn disburse(
        &self,
        proposal_id: u64,
        to: &ManagedAddress,
        amount: &BigUint,
    ) -> DisbursementOutcome {
        if self.get_treasury_balance() < *amount {
            return DisbursementOutcome::InsufficientFunds;
        }

        self.send().direct_egld(to, amount);
        self.treasury_disbursed_event(proposal_id, to, amount);
        DisbursementOutcome::Sent
    }

    #[view(getTreasuryBalance)]
    fn get_treasury_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }
}
