multiversx_sc::imports!();

/// Lowest weight a present member can hold
pub const MIN_WEIGHT: u64 = 1;

/// Highest weight. Members at this weight are guardians.
pub const MAX_WEIGHT: u64 = 3;

/// Voting window: 3 days in seconds
pub const PROPOSAL_DURATION: u64 = 259_200;

/// Basis points denominator
pub const BPS_DENOMINATOR: u64 = 10_000;

#[multiversx_sc::module]
pub trait ConfigModule {
    fn set_config(
        &self,
        pool_address: ManagedAddress,
        fee_token: TokenIdentifier,
        fee_claim_delay: u64,
        fee_send_delay: u64,
        guardian_fee_bps: u64,
    ) {
        require!(!pool_address.is_zero(), "Invalid pool address");
        require!(fee_token.is_valid_esdt_identifier(), "Invalid fee token");
        require!(
            guardian_fee_bps <= BPS_DENOMINATOR,
            "Invalid guardian fee share"
        );

        self.pool_address().set(&pool_address);
        self.fee_token().set(&fee_token);
        self.fee_claim_delay().set(fee_claim_delay);
        self.fee_send_delay().set(fee_send_delay);
        self.guardian_fee_bps().set(guardian_fee_bps);
    }

    /// (pool, fee token, claim delay, send delay, guardian bps, proposal duration)
    #[view(getConfig)]
    fn get_config(
        &self,
    ) -> MultiValue6<ManagedAddress, TokenIdentifier, u64, u64, u64, u64> {
        (
            self.pool_address().get(),
            self.fee_token().get(),
            self.fee_claim_delay().get(),
            self.fee_send_delay().get(),
            self.guardian_fee_bps().get(),
            PROPOSAL_DURATION,
        )
            .into()
    }

    #[storage_mapper("poolAddress")]
    fn pool_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("feeToken")]
    fn fee_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[storage_mapper("feeClaimDelay")]
    fn fee_claim_delay(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("feeSendDelay")]
    fn fee_send_delay(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("guardianFeeBps")]
    fn guardian_fee_bps(&self) -> SingleValueMapper<u64>;
}
