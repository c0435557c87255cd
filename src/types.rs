multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal Kind — what a passed proposal does
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalKind {
    /// Sets the target's weight. A weight of 0 removes the target.
    Weight,
    /// Hands control of the pool over to the target.
    Authority,
}

// ============================================================
// Proposal — the core governance record
// ============================================================

/// Append-only record. Only `passed` is ever rewritten after creation.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub kind: ProposalKind,
    pub proposer: ManagedAddress<M>,
    /// Member whose weight changes, or the new pool authority
    pub target: ManagedAddress<M>,
    /// Requested weight (0 = remove). Always 0 for authority hand-offs.
    pub weight: u64,
    pub created_at: u64,
    /// Tallies at or after this timestamp fail
    pub deadline: u64,
    pub passed: bool,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.deadline
    }
}
