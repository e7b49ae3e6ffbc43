multiversx_sc::imports!();

use crate::errors::ERR_NOT_MEMBER;
use crate::types::Member;

/// Registry of members and their reputation. Reputation is fixed at
/// admission and members are never removed.
#[multiversx_sc::module]
pub trait MembershipModule: crate::events::EventsModule {
    /// Inserts a member record if the account has none. Returns `false`
    /// (and changes nothing) when the account is already a member.
    fn admit(&self, account: &ManagedAddress, reputation: u64, at_block: u64) -> bool {
        let info = self.member_info(account);
        if !info.is_empty() {
            return false;
        }

        info.set(Member {
            reputation,
            joined_at: at_block,
        });
        self.members().insert(account.clone());

        self.member_admitted_event(account, reputation, at_block);
        true
    }

    fn require_member(&self, account: &ManagedAddress) -> Member {
        let info = self.member_info(account);
        require!(!info.is_empty(), ERR_NOT_MEMBER);
        info.get()
    }

    fn reputation_of(&self, account: &ManagedAddress) -> u64 {
        self.require_member(account).reputation
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getMemberInfo)]
    fn get_member_info(&self, account: &ManagedAddress) -> Option<Member> {
        let info = self.member_info(account);
        if info.is_empty() {
            None
        } else {
            Some(info.get())
        }
    }

    #[view(isMember)]
    fn is_member(&self, account: &ManagedAddress) -> bool {
        self.members().contains(account)
    }

    #[view(getMembers)]
    fn get_members(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let total = self.members().len() as u64;
        let start = core::cmp::min(from, total);
        let end = core::cmp::min(from.saturating_add(count), total);

        // both bounds are clamped to the set length, so the casts are lossless
        for member in self
            .members()
            .iter()
            .skip(start as usize)
            .take((end - start) as usize)
        {
            result.push(member);
        }
        result
    }

    #[view(getMemberCount)]
    fn get_member_count(&self) -> u64 {
        self.members().len() as u64
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("memberInfo")]
    fn member_info(&self, account: &ManagedAddress) -> SingleValueMapper<Member>;

    #[storage_mapper("members")]
    fn members(&self) -> UnorderedSetMapper<ManagedAddress>;
}
