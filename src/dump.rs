//! Balance-delta bookkeeping around state-mutating contract calls.

use alloy::primitives::{Sign, I256, U256};

/// Snapshot taken at the start of a single state-mutating call, consumed
/// when the call completes. Built fresh for every call; values never carry
/// over from one call to the next.
pub(crate) struct DumpState {
    pub before_eth: U256,
    pub before_weth: U256,
    pub action: String,
    pub wei_deduction: I256,
}

impl DumpState {
    /// Total native-currency cost of the call: before minus after balance.
    pub fn total_cost(&self, after_eth: U256) -> I256 {
        signed_diff(self.before_eth, after_eth)
    }

    /// Portion of the total cost not explained by the recorded deduction,
    /// i.e. the gas fee paid for the transaction.
    pub fn gas_fee(&self, after_eth: U256) -> I256 {
        self.total_cost(after_eth).saturating_sub(self.wei_deduction)
    }

    /// Renders the trace block for a completed call, all amounts in wei.
    pub fn render(&self, after_eth: U256, after_weth: U256) -> Vec<String> {
        vec![
            format!("before ETH balance (wei)       = {}", self.before_eth),
            format!("before WETH balance (wei)      = {}", self.before_weth),
            self.action.clone(),
            format!("after ETH balance (wei)        = {}", after_eth),
            format!("after WETH balance (wei)       = {}", after_weth),
            "-".repeat(32),
            format!("wei deduction amount           = {}", self.wei_deduction),
            format!("gas fee transaction cost (wei) = {}", self.gas_fee(after_eth)),
            format!("total transaction cost (wei)   = {}", self.total_cost(after_eth)),
            "=".repeat(100),
        ]
    }
}

/// Signed difference `a - b` of two unsigned balances.
pub(crate) fn signed_diff(a: U256, b: U256) -> I256 {
    if a >= b {
        I256::checked_from_sign_and_abs(Sign::Positive, a - b).unwrap_or(I256::MAX)
    } else {
        I256::checked_from_sign_and_abs(Sign::Negative, b - a).unwrap_or(I256::MIN)
    }
}

/// Converts an unsigned wei amount to its signed counterpart.
pub(crate) fn signed(wei: U256) -> Option<I256> {
    I256::checked_from_sign_and_abs(Sign::Positive, wei)
}
