multiversx_sc::imports!();

use crate::config::{MAX_WEIGHT, MIN_WEIGHT};

pub fn is_valid_weight(weight: u64) -> bool {
    (MIN_WEIGHT..=MAX_WEIGHT).contains(&weight)
}

// ============================================================
// MembershipLedger
//
// member -> weight, the cached total and the guardian set.
// Every write goes through `set_weight`, so the total and the
// guardian set never disagree with the weight table.
// ============================================================

#[multiversx_sc::module]
pub trait LedgerModule: crate::events::EventsModule {
    /// Construction-time bulk insert. Fails the whole deployment on
    /// the first invalid entry.
    fn seed_members(&self, initial_members: MultiValueEncoded<MultiValue2<ManagedAddress, u64>>) {
        for entry in initial_members.into_iter() {
            let (member, weight) = entry.into_tuple();
            require!(!self.members().contains(&member), "Duplicate member");
            require!(is_valid_weight(weight), "Invalid weight");
            self.set_weight(&member, weight);
        }

        require!(self.total_weight().get() > 0, "Zero total weight");
    }

    /// Inserts, updates or (at weight 0) removes a member.
    fn set_weight(&self, member: &ManagedAddress, new_weight: u64) {
        require!(
            new_weight == 0 || is_valid_weight(new_weight),
            "Invalid weight"
        );

        let old_weight = self.member_weight(member).get();
        if old_weight == new_weight {
            return;
        }

        if new_weight == 0 {
            self.member_weight(member).clear();
            self.members().swap_remove(member);
        } else {
            self.member_weight(member).set(new_weight);
            self.members().insert(member.clone());
        }

        // total >= old_weight holds because old_weight is part of the sum
        self.total_weight()
            .update(|total| *total = *total - old_weight + new_weight);

        let was_guardian = old_weight == MAX_WEIGHT;
        let is_guardian = new_weight == MAX_WEIGHT;
        if is_guardian && !was_guardian {
            self.guardians().insert(member.clone());
            self.guardian_added_event(member);
        } else if was_guardian && !is_guardian {
            self.guardians().swap_remove(member);
            self.guardian_removed_event(member);
        }

        self.member_weight_changed_event(member, old_weight, new_weight);
    }

    fn require_member(&self, address: &ManagedAddress) {
        require!(self.members().contains(address), "Only members");
    }

    // ========================================================
    // ENDPOINT: decreaseOwnWeight
    // Self-service, no proposal needed. 0 leaves the squad.
    // ========================================================

    #[endpoint(decreaseOwnWeight)]
    fn decrease_own_weight(&self, new_weight: u64) {
        let caller = self.blockchain().get_caller();
        self.require_member(&caller);

        let current_weight = self.member_weight(&caller).get();
        require!(new_weight < current_weight, "Not a decrease");

        self.set_weight(&caller, new_weight);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getTotalWeight)]
    fn get_total_weight(&self) -> u64 {
        self.total_weight().get()
    }

    #[view(getMemberWeight)]
    fn get_member_weight(&self, member: ManagedAddress) -> u64 {
        self.member_weight(&member).get()
    }

    #[view(isMember)]
    fn is_member(&self, address: ManagedAddress) -> bool {
        self.members().contains(&address)
    }

    #[view(getMembers)]
    fn get_members(&self) -> MultiValueEncoded<MultiValue2<ManagedAddress, u64>> {
        let mut result = MultiValueEncoded::new();
        for member in self.members().iter() {
            let weight = self.member_weight(&member).get();
            result.push((member, weight).into());
        }
        result
    }

    #[view(getMemberCount)]
    fn get_member_count(&self) -> usize {
        self.members().len()
    }

    #[view(getGuardians)]
    fn get_guardians(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for guardian in self.guardians().iter() {
            result.push(guardian);
        }
        result
    }

    #[view(isGuardian)]
    fn is_guardian(&self, address: ManagedAddress) -> bool {
        self.guardians().contains(&address)
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("memberWeight")]
    fn member_weight(&self, member: &ManagedAddress) -> SingleValueMapper<u64>;

    #[storage_mapper("members")]
    fn members(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("guardians")]
    fn guardians(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("totalWeight")]
    fn total_weight(&self) -> SingleValueMapper<u64>;
}
