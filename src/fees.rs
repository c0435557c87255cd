multiversx_sc::imports!();

use crate::config::BPS_DENOMINATOR;
use crate::pool_proxy;

// ============================================================
// FeeScheduler
//
// Both gates are measured from the last claim. Distribution pays
// out what the contract holds at the start of the call; division
// dust stays for the next round.
// ============================================================

#[multiversx_sc::module]
pub trait FeeModule:
    crate::config::ConfigModule + crate::ledger::LedgerModule + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: claimFees
    // Pulls accrued fees out of the pool.
    // ========================================================

    #[endpoint(claimFees)]
    fn claim_fees(&self) {
        let caller = self.blockchain().get_caller();
        self.require_member(&caller);

        let now = self.blockchain().get_block_timestamp();
        require!(
            now >= self.last_claim_time().get() + self.fee_claim_delay().get(),
            "Fee claim delay not elapsed"
        );

        self.last_claim_time().set(now);

        let pool_address = self.pool_address().get();
        self.tx()
            .to(&pool_address)
            .typed(pool_proxy::PoolProxy)
            .collect_fees()
            .sync_call();

        self.fees_claimed_event(&caller, now);
    }

    // ========================================================
    // ENDPOINT: sendFees
    // Splits the EGLD and fee token balances across members by
    // live weight, after the guardian cut. All-or-nothing: one
    // failed transfer reverts the whole round.
    // ========================================================

    #[endpoint(sendFees)]
    fn send_fees(&self) {
        let caller = self.blockchain().get_caller();
        self.require_member(&caller);

        let now = self.blockchain().get_block_timestamp();
        require!(
            now >= self.last_claim_time().get() + self.fee_send_delay().get(),
            "Fee send delay not elapsed"
        );

        let fee_token = self.fee_token().get();
        let egld_balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        let token_balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(fee_token.clone()), 0);

        let total_weight = self.total_weight().get();
        let guardian_fee_bps = self.guardian_fee_bps().get();
        let guardian_count = self.guardians().len() as u64;

        let (egld_per_guardian, egld_pool) =
            split_guardian_cut(&egld_balance, guardian_fee_bps, guardian_count);
        let (token_per_guardian, token_pool) =
            split_guardian_cut(&token_balance, guardian_fee_bps, guardian_count);

        for member in self.members().iter() {
            let weight = self.member_weight(&member).get();
            let mut egld_amount = &egld_pool * weight / total_weight;
            let mut token_amount = &token_pool * weight / total_weight;

            if self.guardians().contains(&member) {
                egld_amount += &egld_per_guardian;
                token_amount += &token_per_guardian;
            }

            if egld_amount == 0u64 && token_amount == 0u64 {
                continue;
            }
            if egld_amount > 0u64 {
                self.send().direct_egld(&member, &egld_amount);
            }
            if token_amount > 0u64 {
                self.send().direct_esdt(&member, &fee_token, 0, &token_amount);
            }
            self.fees_sent_event(&member, &egld_amount, &token_amount);
        }

        self.fees_distributed_event(&caller, &egld_balance, &token_balance);
    }

    // ========================================================
    // ENDPOINT: receiveFees
    // Custody entry for EGLD and the fee token.
    // ========================================================

    #[payable("*")]
    #[endpoint(receiveFees)]
    fn receive_fees(&self) {
        let (token, amount) = self.call_value().egld_or_single_fungible_esdt();
        require!(
            token.is_egld() || token == EgldOrEsdtTokenIdentifier::esdt(self.fee_token().get()),
            "Unsupported fee token"
        );

        let caller = self.blockchain().get_caller();
        self.fees_received_event(&caller, &token, &amount);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getLastClaimTime)]
    fn get_last_claim_time(&self) -> u64 {
        self.last_claim_time().get()
    }

    #[view(getNextClaimTime)]
    fn get_next_claim_time(&self) -> u64 {
        self.last_claim_time().get() + self.fee_claim_delay().get()
    }

    /// (EGLD balance, fee token balance)
    #[view(getFeeBalances)]
    fn get_fee_balances(&self) -> MultiValue2<BigUint, BigUint> {
        let egld_balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        let token_balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(self.fee_token().get()), 0);
        (egld_balance, token_balance).into()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("lastClaimTime")]
    fn last_claim_time(&self) -> SingleValueMapper<u64>;
}

/// Returns (amount per guardian, pool split by weight). With no
/// guardians the cut is not paid out and stays in the contract.
fn split_guardian_cut<M: ManagedTypeApi>(
    balance: &BigUint<M>,
    guardian_fee_bps: u64,
    guardian_count: u64,
) -> (BigUint<M>, BigUint<M>) {
    let cut = balance * guardian_fee_bps / BPS_DENOMINATOR;
    let weighted_pool = balance - &cut;
    if guardian_count == 0 {
        return (BigUint::zero(), weighted_pool);
    }
    (cut / guardian_count, weighted_pool)
}
