use crate::contract::{PendingTx, Weth9Binding, WrappedToken};
use crate::dump::{signed, DumpState};
use crate::Error;

use alloy::primitives::utils::parse_ether;
use alloy::primitives::{Address, I256, U256};
use alloy::providers::Provider;

/// A client for a deployed WETH9 wrapped-native-token contract.
///
/// The client binds once to a contract (directly by address, or through the
/// static per-chain table), exposes deposit/withdraw/balance operations, and
/// optionally prints a balance-delta trace around each state-mutating call.
/// Rebinding means constructing a new client; the binding itself is never
/// mutated in place.
///
/// At most one state-mutating call should be in flight per instance at a
/// time. The client holds no locks; concurrent mutating calls on one
/// instance produce interleaved diagnostic traces.
pub struct Weth9Client<W> {
    token: W,
    account: Address,
    dump: bool,
}

impl<W: WrappedToken> Weth9Client<W> {
    /// Binds to a wrapped-token contract on behalf of the signer `account`.
    ///
    /// Probes the connection with a native-balance query and fails with
    /// [Error::Binding] if the provider behind `token` is unreachable.
    /// Emits an identification banner naming the account. Diagnostics start
    /// enabled; use [set_dump][Self::set_dump] to silence them.
    pub async fn bind(token: W, account: Address) -> Result<Self, Error> {
        token
            .native_balance(account)
            .await
            .map_err(|e| Error::Binding(format!("Signer has no usable connection: {e}")))?;

        let client = Self {
            token,
            account,
            dump: true,
        };
        client.log_line('-', 80);
        client.dump_log(&format!(
            "EXECUTING: Weth9Client::bind signer address = {}",
            client.account
        ));
        client.log_line('-', 80);
        Ok(client)
    }

    /// The signer account the client snapshots balances for.
    pub fn account(&self) -> Address {
        self.account
    }

    /// The bound wrapped-token contract.
    pub fn token(&self) -> &W {
        &self.token
    }

    /// Toggles the balance-delta trace around state-mutating calls.
    pub fn set_dump(&mut self, dump: bool) {
        self.dump = dump;
    }

    /// Converts `eth_amount` (a decimal string, e.g. `"1.5"`) to wei and
    /// deposits that amount of native currency for wrapped tokens. Returns
    /// the pending-transaction handle of the deposit call.
    pub async fn deposit_eth(&self, eth_amount: &str) -> Result<PendingTx, Error> {
        let wei_amount = parse_ether(eth_amount)
            .map_err(|e| Error::Conversion(format!("Malformed ETH amount {eth_amount:?}: {e}")))?;
        let state = self
            .begin_dump(
                format!("EXECUTING: Weth9Client::deposit_eth({eth_amount})"),
                signed_deduction(wei_amount)?,
            )
            .await?;

        let tx = self.token.deposit(wei_amount).await?;

        self.finish_dump(state).await?;
        Ok(tx)
    }

    /// Deposits `wei_amount` of native currency, already in wei.
    pub async fn deposit_wei(&self, wei_amount: U256) -> Result<PendingTx, Error> {
        let state = self
            .begin_dump(
                format!("EXECUTING: Weth9Client::deposit_wei({wei_amount})"),
                signed_deduction(wei_amount)?,
            )
            .await?;

        let tx = self.token.deposit(wei_amount).await?;

        self.finish_dump(state).await?;
        Ok(tx)
    }

    /// Converts `eth_amount` (a decimal string) to wei and withdraws that
    /// amount of wrapped tokens back into native currency.
    ///
    /// A withdrawal increases the account's native balance, so the expected
    /// deduction is recorded negated relative to a deposit.
    pub async fn withdraw_eth(&self, eth_amount: &str) -> Result<PendingTx, Error> {
        let wei_amount = parse_ether(eth_amount)
            .map_err(|e| Error::Conversion(format!("Malformed ETH amount {eth_amount:?}: {e}")))?;
        let state = self
            .begin_dump(
                format!("EXECUTING: Weth9Client::withdraw_eth({eth_amount})"),
                -signed_deduction(wei_amount)?,
            )
            .await?;

        let tx = self.token.withdraw(wei_amount).await?;

        self.finish_dump(state).await?;
        Ok(tx)
    }

    /// Withdraws `wei_amount` of wrapped tokens, already in wei.
    pub async fn withdraw_wei(&self, wei_amount: U256) -> Result<PendingTx, Error> {
        let state = self
            .begin_dump(
                format!("EXECUTING: Weth9Client::withdraw_wei({wei_amount})"),
                -signed_deduction(wei_amount)?,
            )
            .await?;

        let tx = self.token.withdraw(wei_amount).await?;

        self.finish_dump(state).await?;
        Ok(tx)
    }

    /// Returns the native-currency balance of `address` in wei.
    pub async fn eth_balance(&self, address: Address) -> Result<U256, Error> {
        self.token.native_balance(address).await
    }

    /// Returns the wrapped-token balance of `address` in wei.
    pub async fn weth_balance(&self, address: Address) -> Result<U256, Error> {
        self.token.balance_of(address).await
    }

    /// Snapshots the account's balances for the trace of one mutating call.
    /// Returns None when diagnostics are off, so no balance queries are
    /// issued at all.
    async fn begin_dump(
        &self,
        action: String,
        wei_deduction: I256,
    ) -> Result<Option<DumpState>, Error> {
        if !self.dump {
            return Ok(None);
        }
        let before_eth = self.token.native_balance(self.account).await?;
        let before_weth = self.token.balance_of(self.account).await?;
        Ok(Some(DumpState {
            before_eth,
            before_weth,
            action,
            wei_deduction,
        }))
    }

    /// Snapshots the after balances and prints the trace for a completed
    /// mutating call.
    async fn finish_dump(&self, state: Option<DumpState>) -> Result<(), Error> {
        let Some(state) = state else {
            return Ok(());
        };
        let after_eth = self.token.native_balance(self.account).await?;
        let after_weth = self.token.balance_of(self.account).await?;
        for line in state.render(after_eth, after_weth) {
            self.dump_log(&line);
        }
        Ok(())
    }

    fn log_line(&self, ch: char, len: usize) {
        self.dump_log(&ch.to_string().repeat(len));
    }

    fn dump_log(&self, msg: &str) {
        if self.dump {
            println!("{msg}");
        }
    }
}

impl<P: Provider> Weth9Client<Weth9Binding<P>> {
    /// Resolves the WETH9 address for `chain_id` through the static network
    /// table, binds to it, and behaves as [bind][Self::bind]. Unknown chain
    /// ids bind to the all-zero sentinel address rather than failing.
    pub async fn bind_default_network(
        chain_id: u64,
        provider: P,
        account: Address,
    ) -> Result<Self, Error> {
        Self::bind(Weth9Binding::for_chain(chain_id, provider), account).await
    }
}

/// The expected wei deduction for a call moving `wei_amount`, as a signed
/// value so withdrawals can negate it.
fn signed_deduction(wei_amount: U256) -> Result<I256, Error> {
    signed(wei_amount).ok_or_else(|| {
        Error::Conversion(format!("Amount {wei_amount} wei exceeds the signed range"))
    })
}
