#![allow(dead_code)]

use multiversx_sc_scenario::imports::*;

use pool_mock::pool_mock_proxy;
use squad_treasury::{squad_treasury_proxy, types::Proposal};

pub const CODE_PATH: MxscPath = MxscPath::new("output/squad-treasury.mxsc.json");
pub const POOL_CODE_PATH: MxscPath = MxscPath::new("pool-mock/output/pool-mock.mxsc.json");

pub const OWNER: TestAddress = TestAddress::new("owner");
pub const ALICE: TestAddress = TestAddress::new("alice");
pub const BOB: TestAddress = TestAddress::new("bob");
pub const CAROL: TestAddress = TestAddress::new("carol");
pub const DAVE: TestAddress = TestAddress::new("dave");
pub const OUTSIDER: TestAddress = TestAddress::new("outsider");
pub const FUNDER: TestAddress = TestAddress::new("funder");
pub const NEW_AUTHORITY: TestAddress = TestAddress::new("new-authority");

pub const SC_ADDRESS: TestSCAddress = TestSCAddress::new("squad-treasury");
pub const POOL_ADDRESS: TestSCAddress = TestSCAddress::new("pool");

pub const FEE_TOKEN_ID: &str = "SQUAD-123456";
pub const FEE_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new(FEE_TOKEN_ID);
pub const OTHER_TOKEN_ID: &str = "OTHER-abcdef";
pub const OTHER_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new(OTHER_TOKEN_ID);

pub const START_TIME: u64 = 1_000_000;
pub const CLAIM_DELAY: u64 = 86_400;
pub const SEND_DELAY: u64 = 3_600;

/// {alice: 3, bob: 2, carol: 1}, total 6
pub const DEFAULT_SQUAD: [(TestAddress, u64); 3] = [(ALICE, 3), (BOB, 2), (CAROL, 1)];

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(CODE_PATH, squad_treasury::ContractBuilder);
    blockchain.register_contract(POOL_CODE_PATH, pool_mock::ContractBuilder);
    blockchain
}

pub fn members_arg(
    members: &[(TestAddress, u64)],
) -> MultiValueEncoded<StaticApi, MultiValue2<ManagedAddress<StaticApi>, u64>> {
    let mut result = MultiValueEncoded::new();
    for (address, weight) in members {
        result.push((address.to_managed_address(), *weight).into());
    }
    result
}

pub struct SquadTestState {
    pub world: ScenarioWorld,
}

impl SquadTestState {
    /// Accounts, block time and the pool mock, whose authority is the
    /// squad contract. The squad itself is not deployed yet.
    pub fn new() -> Self {
        let mut world = world();

        world.account(OWNER).nonce(1);
        for user in [ALICE, BOB, CAROL, DAVE, OUTSIDER, NEW_AUTHORITY] {
            world.account(user).nonce(1).balance(0);
        }
        world
            .account(FUNDER)
            .nonce(1)
            .balance(10_000)
            .esdt_balance(FEE_TOKEN, 10_000)
            .esdt_balance(OTHER_TOKEN, 10_000);

        world.current_block().block_timestamp(START_TIME);

        world
            .tx()
            .from(OWNER)
            .typed(pool_mock_proxy::PoolMockProxy)
            .init(SC_ADDRESS)
            .code(POOL_CODE_PATH)
            .new_address(POOL_ADDRESS)
            .run();

        Self { world }
    }

    pub fn deployed(guardian_fee_bps: u64, members: &[(TestAddress, u64)]) -> Self {
        let mut state = Self::new();
        state.deploy(guardian_fee_bps, members);
        state
    }

    pub fn deploy(&mut self, guardian_fee_bps: u64, members: &[(TestAddress, u64)]) {
        self.world
            .tx()
            .from(OWNER)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .init(
                POOL_ADDRESS,
                TokenIdentifier::<StaticApi>::from(FEE_TOKEN_ID),
                CLAIM_DELAY,
                SEND_DELAY,
                guardian_fee_bps,
                members_arg(members),
            )
            .code(CODE_PATH)
            .new_address(SC_ADDRESS)
            .run();
    }

    pub fn deploy_expect_error(&mut self, members: &[(TestAddress, u64)], message: &str) {
        self.deploy_config_expect_error(
            POOL_ADDRESS.to_managed_address(),
            FEE_TOKEN_ID,
            0,
            members,
            message,
        );
    }

    pub fn deploy_config_expect_error(
        &mut self,
        pool_address: ManagedAddress<StaticApi>,
        fee_token_id: &str,
        guardian_fee_bps: u64,
        members: &[(TestAddress, u64)],
        message: &str,
    ) {
        self.world
            .tx()
            .from(OWNER)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .init(
                pool_address,
                TokenIdentifier::<StaticApi>::from(fee_token_id),
                CLAIM_DELAY,
                SEND_DELAY,
                guardian_fee_bps,
                members_arg(members),
            )
            .code(CODE_PATH)
            .new_address(SC_ADDRESS)
            .returns(ExpectError(4, message))
            .run();
    }

    pub fn config(
        &mut self,
    ) -> (
        ManagedAddress<StaticApi>,
        TokenIdentifier<StaticApi>,
        u64,
        u64,
        u64,
        u64,
    ) {
        self.world
            .query()
            .to(SC_ADDRESS)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .get_config()
            .returns(ReturnsResult)
            .run()
            .into_tuple()
    }

    pub fn set_time(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    // ── Membership ──

    pub fn decrease_own_weight(&mut self, from: TestAddress, new_weight: u64) {
        self.world
            .tx()
            .from(from)
            .to(SC_ADDRESS)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .decrease_own_weight(new_weight)
            .run();
    }

    pub fn decrease_own_weight_expect_error(
        &mut self,
        from: TestAddress,
        new_weight: u64,
        message: &str,
    ) {
        self.world
            .tx()
            .from(from)
            .to(SC_ADDRESS)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .decrease_own_weight(new_weight)
            .returns(ExpectError(4, message))
            .run();
    }

    pub fn total_weight(&mut self) -> u64 {
        self.world
            .query()
            .to(SC_ADDRESS)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .get_total_weight()
            .returns(ReturnsResult)
            .run()
    }

    pub fn weight(&mut self, member: TestAddress) -> u64 {
        self.world
            .query()
            .to(SC_ADDRESS)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .get_member_weight(member)
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_member(&mut self, address: TestAddress) -> bool {
        self.world
            .query()
            .to(SC_ADDRESS)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .is_member(address)
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_guardian(&mut self, address: TestAddress) -> bool {
        self.world
            .query()
            .to(SC_ADDRESS)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .is_guardian(address)
            .returns(ReturnsResult)
            .run()
    }

    pub fn member_count(&mut self) -> usize {
        self.world
            .query()
            .to(SC_ADDRESS)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .get_member_count()
            .returns(ReturnsResult)
            .run()
    }

    pub fn members(&mut self) -> Vec<(ManagedAddress<StaticApi>, u64)> {
        let members = self
            .world
            .query()
            .to(SC_ADDRESS)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .get_members()
            .returns(ReturnsResult)
            .run();
        members.into_iter().map(|entry| entry.into_tuple()).collect()
    }

    pub fn guardians(&mut self) -> Vec<ManagedAddress<StaticApi>> {
        let guardians = self
            .world
            .query()
            .to(SC_ADDRESS)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .get_guardians()
            .returns(ReturnsResult)
            .run();
        guardians.into_iter().collect()
    }

    // ── Proposals ──

    pub fn propose_increase(&mut self, from: TestAddress, target: TestAddress, weight: u64) -> u64 {
        self.world
            .tx()
            .from(from)
            .to(SC_ADDRESS)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .propose_increase(target, weight)
            .returns(ReturnsResult)
            .run()
    }

    pub fn propose_decrease(&mut self, from: TestAddress, target: TestAddress, weight: u64) -> u64 {
        self.world
            .tx()
            .from(from)
            .to(SC_ADDRESS)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .propose_decrease(target, weight)
            .returns(ReturnsResult)
            .run()
    }

    pub fn propose_removal(&mut self, from: TestAddress, target: TestAddress) -> u64 {
        self.world
            .tx()
            .from(from)
            .to(SC_ADDRESS)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .propose_removal(target)
            .returns(ReturnsResult)
            .run()
    }

    pub fn propose_authority(&mut self, from: TestAddress, new_authority: TestAddress) -> u64 {
        self.world
            .tx()
            .from(from)
            .to(SC_ADDRESS)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .propose_authority(new_authority)
            .returns(ReturnsResult)
            .run()
    }

    pub fn vote(&mut self, from: TestAddress, proposal_id: u64) {
        self.world
            .tx()
            .from(from)
            .to(SC_ADDRESS)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .vote(proposal_id)
            .run();
    }

    pub fn vote_expect_error(&mut self, from: TestAddress, proposal_id: u64, message: &str) {
        self.world
            .tx()
            .from(from)
            .to(SC_ADDRESS)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .vote(proposal_id)
            .returns(ExpectError(4, message))
            .run();
    }

    pub fn tally(&mut self, from: TestAddress, proposal_id: u64) {
        self.world
            .tx()
            .from(from)
            .to(SC_ADDRESS)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .tally(proposal_id)
            .run();
    }

    pub fn tally_expect_error(&mut self, from: TestAddress, proposal_id: u64, message: &str) {
        self.world
            .tx()
            .from(from)
            .to(SC_ADDRESS)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .tally(proposal_id)
            .returns(ExpectError(4, message))
            .run();
    }

    pub fn proposal(&mut self, proposal_id: u64) -> Proposal<StaticApi> {
        self.world
            .query()
            .to(SC_ADDRESS)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .get_proposal(proposal_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn proposal_count(&mut self) -> u64 {
        self.world
            .query()
            .to(SC_ADDRESS)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .get_proposal_count()
            .returns(ReturnsResult)
            .run()
    }

    pub fn has_voted(&mut self, proposal_id: u64, address: TestAddress) -> bool {
        self.world
            .query()
            .to(SC_ADDRESS)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .has_voted(proposal_id, address)
            .returns(ReturnsResult)
            .run()
    }

    pub fn proposal_ids(&mut self, from: u64, count: u64) -> Vec<u64> {
        let proposals = self
            .world
            .query()
            .to(SC_ADDRESS)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .get_proposals(from, count)
            .returns(ReturnsResult)
            .run();
        proposals.into_iter().map(|proposal| proposal.id).collect()
    }

    pub fn active_proposal_ids(&mut self) -> Vec<u64> {
        let proposals = self
            .world
            .query()
            .to(SC_ADDRESS)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .get_active_proposals()
            .returns(ReturnsResult)
            .run();
        proposals.into_iter().map(|proposal| proposal.id).collect()
    }

    pub fn voters(&mut self, proposal_id: u64) -> Vec<ManagedAddress<StaticApi>> {
        let voters = self
            .world
            .query()
            .to(SC_ADDRESS)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .get_voters(proposal_id)
            .returns(ReturnsResult)
            .run();
        voters.into_iter().collect()
    }

    pub fn vote_weight(&mut self, proposal_id: u64) -> u64 {
        self.world
            .query()
            .to(SC_ADDRESS)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .get_vote_weight(proposal_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn pool_authority(&mut self) -> ManagedAddress<StaticApi> {
        self.world
            .query()
            .to(POOL_ADDRESS)
            .typed(pool_mock_proxy::PoolMockProxy)
            .authority()
            .returns(ReturnsResult)
            .run()
    }

    /// Makes the pool call `tally(proposal_id)` back from inside
    /// each `upgradeAuthority`.
    pub fn set_pool_reentry(&mut self, proposal_id: u64) {
        self.world
            .tx()
            .from(OWNER)
            .to(POOL_ADDRESS)
            .typed(pool_mock_proxy::PoolMockProxy)
            .set_reentry(proposal_id)
            .run();
    }

    pub fn pool_upgrade_count(&mut self) -> u64 {
        self.world
            .query()
            .to(POOL_ADDRESS)
            .typed(pool_mock_proxy::PoolMockProxy)
            .upgrade_count()
            .returns(ReturnsResult)
            .run()
    }

    // ── Fees ──

    pub fn claim_fees(&mut self, from: TestAddress) {
        self.world
            .tx()
            .from(from)
            .to(SC_ADDRESS)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .claim_fees()
            .run();
    }

    pub fn claim_fees_expect_error(&mut self, from: TestAddress, message: &str) {
        self.world
            .tx()
            .from(from)
            .to(SC_ADDRESS)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .claim_fees()
            .returns(ExpectError(4, message))
            .run();
    }

    pub fn send_fees(&mut self, from: TestAddress) {
        self.world
            .tx()
            .from(from)
            .to(SC_ADDRESS)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .send_fees()
            .run();
    }

    pub fn send_fees_expect_error(&mut self, from: TestAddress, message: &str) {
        self.world
            .tx()
            .from(from)
            .to(SC_ADDRESS)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .send_fees()
            .returns(ExpectError(4, message))
            .run();
    }

    /// Moves EGLD and fee tokens from the funder into the treasury.
    pub fn fund(&mut self, egld_amount: u64, token_amount: u64) {
        if egld_amount > 0 {
            self.world
                .tx()
                .from(FUNDER)
                .to(SC_ADDRESS)
                .typed(squad_treasury_proxy::SquadTreasuryProxy)
                .receive_fees()
                .egld(BigUint::<StaticApi>::from(egld_amount))
                .run();
        }
        if token_amount > 0 {
            let fee_token = TokenIdentifier::<StaticApi>::from(FEE_TOKEN_ID);
            let amount = BigUint::<StaticApi>::from(token_amount);
            self.world
                .tx()
                .from(FUNDER)
                .to(SC_ADDRESS)
                .typed(squad_treasury_proxy::SquadTreasuryProxy)
                .receive_fees()
                .single_esdt(&fee_token, 0, &amount)
                .run();
        }
    }

    pub fn last_claim_time(&mut self) -> u64 {
        self.world
            .query()
            .to(SC_ADDRESS)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .get_last_claim_time()
            .returns(ReturnsResult)
            .run()
    }

    pub fn next_claim_time(&mut self) -> u64 {
        self.world
            .query()
            .to(SC_ADDRESS)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .get_next_claim_time()
            .returns(ReturnsResult)
            .run()
    }

    /// (EGLD, fee token) held by the treasury
    pub fn fee_balances(&mut self) -> (BigUint<StaticApi>, BigUint<StaticApi>) {
        self.world
            .query()
            .to(SC_ADDRESS)
            .typed(squad_treasury_proxy::SquadTreasuryProxy)
            .get_fee_balances()
            .returns(ReturnsResult)
            .run()
            .into_tuple()
    }

    pub fn collect_count(&mut self) -> u64 {
        self.world
            .query()
            .to(POOL_ADDRESS)
            .typed(pool_mock_proxy::PoolMockProxy)
            .collect_count()
            .returns(ReturnsResult)
            .run()
    }
}
