#![no_std]

multiversx_sc::imports!();

pub mod config;
pub mod events;
pub mod fees;
pub mod ledger;
pub mod pool_proxy;
pub mod proposals;
pub mod squad_treasury_proxy;
pub mod types;

// ============================================================
// Contract
//
// A fixed squad of weighted members governs a pool through
// majority proposals, and claims and shares out its fees.
// ============================================================

#[multiversx_sc::contract]
pub trait SquadTreasury:
    config::ConfigModule
    + events::EventsModule
    + ledger::LedgerModule
    + proposals::ProposalModule
    + fees::FeeModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        pool_address: ManagedAddress,
        fee_token: TokenIdentifier,
        fee_claim_delay: u64,
        fee_send_delay: u64,
        guardian_fee_bps: u64,
        initial_members: MultiValueEncoded<MultiValue2<ManagedAddress, u64>>,
    ) {
        self.set_config(
            pool_address,
            fee_token,
            fee_claim_delay,
            fee_send_delay,
            guardian_fee_bps,
        );
        self.seed_members(initial_members);
        self.last_claim_time().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
