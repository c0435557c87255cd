multiversx_sc::imports!();

use crate::config::PROPOSAL_DURATION;
use crate::ledger::is_valid_weight;
use crate::pool_proxy;
use crate::types::{Proposal, ProposalKind};

// ============================================================
// ProposalEngine
//
// Open -> Passed is the only transition. A proposal that misses
// its deadline stays Open in storage forever and can never pass.
// Quorum is a strict majority of the live total weight, computed
// from the live weights of the recorded voters at tally time.
// ============================================================

#[multiversx_sc::module]
pub trait ProposalModule:
    crate::config::ConfigModule + crate::ledger::LedgerModule + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINTS: propose*
    // Any member can propose. The proposer votes automatically.
    // ========================================================

    #[endpoint(proposeIncrease)]
    fn propose_increase(&self, target: ManagedAddress, weight: u64) -> u64 {
        let caller = self.blockchain().get_caller();
        self.require_member(&caller);
        require!(!target.is_zero(), "Invalid member");
        require!(is_valid_weight(weight), "Invalid weight");

        let current_weight = self.require_weight_change(&target, weight);
        require!(weight > current_weight, "Not an increase");

        self.create_proposal(&caller, ProposalKind::Weight, target, weight)
    }

    #[endpoint(proposeDecrease)]
    fn propose_decrease(&self, target: ManagedAddress, weight: u64) -> u64 {
        let caller = self.blockchain().get_caller();
        self.require_member(&caller);
        require!(is_valid_weight(weight), "Invalid weight");

        let current_weight = self.require_weight_change(&target, weight);
        require!(weight < current_weight, "Not a decrease");

        self.create_proposal(&caller, ProposalKind::Weight, target, weight)
    }

    #[endpoint(proposeRemoval)]
    fn propose_removal(&self, target: ManagedAddress) -> u64 {
        let caller = self.blockchain().get_caller();
        self.require_member(&caller);
        self.require_weight_change(&target, 0);

        self.create_proposal(&caller, ProposalKind::Weight, target, 0)
    }

    #[endpoint(proposeAuthority)]
    fn propose_authority(&self, new_authority: ManagedAddress) -> u64 {
        let caller = self.blockchain().get_caller();
        self.require_member(&caller);
        require!(!new_authority.is_zero(), "Invalid authority");

        self.create_proposal(&caller, ProposalKind::Authority, new_authority, 0)
    }

    // ========================================================
    // ENDPOINT: vote
    // Membership is re-checked live, not at proposal creation.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        self.cast_vote(proposal_id, &caller);
    }

    // ========================================================
    // ENDPOINT: tally
    // Anyone can call. Surfaces passes that accumulated passively
    // through weight changes elsewhere.
    // ========================================================

    #[endpoint(tally)]
    fn tally(&self, proposal_id: u64) {
        self.require_proposal_exists(proposal_id);
        self.try_pass(proposal_id);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// Returns the target's current weight.
    fn require_weight_change(&self, target: &ManagedAddress, weight: u64) -> u64 {
        let current_weight = self.member_weight(target).get();
        require!(weight != current_weight, "Weight unchanged");
        current_weight
    }

    fn create_proposal(
        &self,
        proposer: &ManagedAddress,
        kind: ProposalKind,
        target: ManagedAddress,
        weight: u64,
    ) -> u64 {
        let proposal_id = self.proposals().len() as u64 + 1;
        let now = self.blockchain().get_block_timestamp();

        let proposal = Proposal {
            id: proposal_id,
            kind,
            proposer: proposer.clone(),
            target,
            weight,
            created_at: now,
            deadline: now + PROPOSAL_DURATION,
            passed: false,
        };
        self.proposals().push(&proposal);

        self.proposal_created_event(proposal_id, proposer, &proposal.target, weight, kind);

        self.cast_vote(proposal_id, proposer);

        proposal_id
    }

    fn cast_vote(&self, proposal_id: u64, voter: &ManagedAddress) {
        self.require_proposal_exists(proposal_id);
        self.require_member(voter);
        require!(
            !self.voters(proposal_id).contains(voter),
            "Already voted"
        );

        self.voters(proposal_id).insert(voter.clone());
        self.vote_event(proposal_id, voter, self.member_weight(voter).get());

        self.try_pass(proposal_id);
    }

    /// Passes the proposal and runs its effect exactly once.
    /// Returns whether this call passed it.
    fn try_pass(&self, proposal_id: u64) -> bool {
        let index = self.proposal_index(proposal_id);
        let mut proposal = self.proposals().get(index);

        let now = self.blockchain().get_block_timestamp();
        require!(!proposal.is_expired(now), "Proposal expired");

        if proposal.passed {
            return false;
        }

        let vote_weight = self.live_vote_weight(proposal_id);
        let total_weight = self.total_weight().get();
        if 2 * vote_weight <= total_weight {
            return false;
        }

        // Stored before the effect runs, so a re-entrant tally sees Passed
        proposal.passed = true;
        self.proposals().set(index, &proposal);
        self.proposal_passed_event(proposal_id, vote_weight, total_weight);

        self.execute_proposal(&proposal);

        true
    }

    fn execute_proposal(&self, proposal: &Proposal<Self::Api>) {
        match proposal.kind {
            ProposalKind::Weight => {
                self.set_weight(&proposal.target, proposal.weight);
            }
            ProposalKind::Authority => {
                let pool_address = self.pool_address().get();
                self.tx()
                    .to(&pool_address)
                    .typed(pool_proxy::PoolProxy)
                    .upgrade_authority(proposal.target.clone())
                    .sync_call();

                self.authority_handed_off_event(proposal.id, &proposal.target);
            }
        }
    }

    /// Sum of the live weights of everyone who voted. Voters who have
    /// since left the squad count for 0.
    fn live_vote_weight(&self, proposal_id: u64) -> u64 {
        let mut vote_weight = 0u64;
        for voter in self.voters(proposal_id).iter() {
            vote_weight += self.member_weight(&voter).get();
        }
        vote_weight
    }

    fn proposal_exists(&self, proposal_id: u64) -> bool {
        proposal_id >= 1 && proposal_id <= self.proposals().len() as u64
    }

    fn require_proposal_exists(&self, proposal_id: u64) {
        require!(self.proposal_exists(proposal_id), "Proposal does not exist");
    }

    /// Storage index of an existing proposal. Ids are compared as u64
    /// so none aliases a lower index on 32-bit targets.
    fn proposal_index(&self, proposal_id: u64) -> usize {
        self.require_proposal_exists(proposal_id);
        match usize::try_from(proposal_id) {
            Ok(index) => index,
            Err(_) => sc_panic!("Proposal does not exist"),
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposalCount)]
    fn get_proposal_count(&self) -> u64 {
        self.proposals().len() as u64
    }

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.proposals().get(self.proposal_index(proposal_id))
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposals().len() as u64;
        if count == 0 || total == 0 {
            return result;
        }
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for id in start..=end {
            result.push(self.proposals().get(self.proposal_index(id)));
        }
        result
    }

    #[view(getActiveProposals)]
    fn get_active_proposals(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let now = self.blockchain().get_block_timestamp();

        for proposal in self.proposals().iter() {
            if !proposal.passed && !proposal.is_expired(now) {
                result.push(proposal);
            }
        }
        result
    }

    #[view(getVoters)]
    fn get_voters(&self, proposal_id: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for voter in self.voters(proposal_id).iter() {
            result.push(voter);
        }
        result
    }

    #[view(hasVoted)]
    fn has_voted(&self, proposal_id: u64, address: ManagedAddress) -> bool {
        self.voters(proposal_id).contains(&address)
    }

    #[view(getVoteWeight)]
    fn get_vote_weight(&self, proposal_id: u64) -> u64 {
        self.live_vote_weight(proposal_id)
    }

    #[view(getPoolAuthority)]
    fn get_pool_authority(&self) -> ManagedAddress {
        let pool_address = self.pool_address().get();
        self.tx()
            .to(&pool_address)
            .typed(pool_proxy::PoolProxy)
            .get_authority()
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    /// Append-only, 1-based: proposal `id` lives at index `id`
    #[storage_mapper("proposals")]
    fn proposals(&self) -> VecMapper<Proposal<Self::Api>>;

    #[storage_mapper("voters")]
    fn voters(&self, proposal_id: u64) -> UnorderedSetMapper<ManagedAddress>;
}
