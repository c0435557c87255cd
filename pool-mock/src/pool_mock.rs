#![no_std]

multiversx_sc::imports!();

pub mod pool_mock_proxy;

/// Stand-in for the liquidity pool. Tracks its authority and
/// counts fee collections and hand-offs; holds no liquidity.
///
/// `setReentry` makes the next hand-offs call `tally` back on the
/// outgoing authority before returning.
#[multiversx_sc::contract]
pub trait PoolMock {
    #[init]
    fn init(&self, authority: ManagedAddress) {
        self.authority().set(&authority);
        self.collect_count().set(0u64);
        self.upgrade_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(collectFees)]
    fn collect_fees(&self) {
        self.collect_count().update(|count| *count += 1);
    }

    #[endpoint(upgradeAuthority)]
    fn upgrade_authority(&self, new_authority: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.authority().get(), "Only authority");
        self.authority().set(&new_authority);
        self.upgrade_count().update(|count| *count += 1);

        let proposal_id = self.reentry_proposal().get();
        if proposal_id > 0 {
            self.tx()
                .to(&caller)
                .raw_call("tally")
                .argument(&proposal_id)
                .sync_call();
        }
    }

    #[endpoint(setReentry)]
    fn set_reentry(&self, proposal_id: u64) {
        self.reentry_proposal().set(proposal_id);
    }

    #[view(getAuthority)]
    #[storage_mapper("authority")]
    fn authority(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getCollectCount)]
    #[storage_mapper("collectCount")]
    fn collect_count(&self) -> SingleValueMapper<u64>;

    #[view(getUpgradeCount)]
    #[storage_mapper("upgradeCount")]
    fn upgrade_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("reentryProposal")]
    fn reentry_proposal(&self) -> SingleValueMapper<u64>;
}
