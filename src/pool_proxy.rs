use multiversx_sc::proxy_imports::*;

pub struct PoolProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for PoolProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = PoolProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        PoolProxyMethods { wrapped_tx: tx }
    }
}

pub struct PoolProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> PoolProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    /// Pulls accrued fees into the caller's custody. May collect nothing.
    pub fn collect_fees(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("collectFees")
            .original_result()
    }

    /// Only callable by the pool's current authority.
    pub fn upgrade_authority<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        new_authority: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("upgradeAuthority")
            .argument(&new_authority)
            .original_result()
    }

    pub fn get_authority(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAuthority")
            .original_result()
    }
}
