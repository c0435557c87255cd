multiversx_sc::imports!();

use crate::types::ProposalKind;

#[multiversx_sc::module]
pub trait EventsModule {
    // ── Membership ──

    #[event("memberWeightChanged")]
    fn member_weight_changed_event(
        &self,
        #[indexed] member: &ManagedAddress,
        #[indexed] old_weight: u64,
        new_weight: u64,
    );

    #[event("guardianAdded")]
    fn guardian_added_event(&self, #[indexed] member: &ManagedAddress);

    #[event("guardianRemoved")]
    fn guardian_removed_event(&self, #[indexed] member: &ManagedAddress);

    // ── Proposals ──

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] target: &ManagedAddress,
        #[indexed] weight: u64,
        kind: ProposalKind,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        weight: u64,
    );

    #[event("proposalPassed")]
    fn proposal_passed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] vote_weight: u64,
        total_weight: u64,
    );

    #[event("authorityHandedOff")]
    fn authority_handed_off_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] new_authority: &ManagedAddress,
    );

    // ── Fees ──

    #[event("feesClaimed")]
    fn fees_claimed_event(&self, #[indexed] caller: &ManagedAddress, #[indexed] timestamp: u64);

    #[event("feesReceived")]
    fn fees_received_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    );

    #[event("feesSent")]
    fn fees_sent_event(
        &self,
        #[indexed] member: &ManagedAddress,
        #[indexed] egld_amount: &BigUint,
        token_amount: &BigUint,
    );

    #[event("feesDistributed")]
    fn fees_distributed_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] egld_balance: &BigUint,
        token_balance: &BigUint,
    );
}
