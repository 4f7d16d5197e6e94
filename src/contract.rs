//! WETH9 contract surface: the ABI, a narrow async trait covering the four
//! calls the client needs, and the alloy-backed binding implementing it.

use crate::Error;

use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::Provider;
use alloy::sol;
use async_trait::async_trait;

// Creates Rust bindings for the WETH9 ABI using alloy's sol! macro
sol! {
    #[sol(rpc)]
    contract WETH9 {
        event Approval(address indexed src, address indexed guy, uint256 wad);
        event Transfer(address indexed src, address indexed dst, uint256 wad);
        event Deposit(address indexed dst, uint256 wad);
        event Withdrawal(address indexed src, uint256 wad);

        function name() public view returns (string memory);
        function symbol() public view returns (string memory);
        function decimals() public view returns (uint8);
        function totalSupply() public view returns (uint256);
        function balanceOf(address guy) public view returns (uint256);
        function allowance(address src, address guy) public view returns (uint256);
        function approve(address guy, uint256 wad) public returns (bool);
        function transfer(address dst, uint256 wad) public returns (bool);
        function transferFrom(address src, address dst, uint256 wad) public returns (bool);
        function deposit() public payable;
        function withdraw(uint256 wad) public;
    }
}

/// The deployed WETH9 JSON ABI, including the payable fallback that the
/// `sol!` interface above does not model. Exposed read-only for callers
/// that construct their own bindings.
pub const WETH9_ABI: &str = r#"[
    {"constant":true,"inputs":[],"name":"name","outputs":[{"name":"","type":"string"}],"payable":false,"stateMutability":"view","type":"function"},
    {"constant":false,"inputs":[{"name":"guy","type":"address"},{"name":"wad","type":"uint256"}],"name":"approve","outputs":[{"name":"","type":"bool"}],"payable":false,"stateMutability":"nonpayable","type":"function"},
    {"constant":true,"inputs":[],"name":"totalSupply","outputs":[{"name":"","type":"uint256"}],"payable":false,"stateMutability":"view","type":"function"},
    {"constant":false,"inputs":[{"name":"src","type":"address"},{"name":"dst","type":"address"},{"name":"wad","type":"uint256"}],"name":"transferFrom","outputs":[{"name":"","type":"bool"}],"payable":false,"stateMutability":"nonpayable","type":"function"},
    {"constant":false,"inputs":[{"name":"wad","type":"uint256"}],"name":"withdraw","outputs":[],"payable":false,"stateMutability":"nonpayable","type":"function"},
    {"constant":true,"inputs":[],"name":"decimals","outputs":[{"name":"","type":"uint8"}],"payable":false,"stateMutability":"view","type":"function"},
    {"constant":true,"inputs":[{"name":"","type":"address"}],"name":"balanceOf","outputs":[{"name":"","type":"uint256"}],"payable":false,"stateMutability":"view","type":"function"},
    {"constant":true,"inputs":[],"name":"symbol","outputs":[{"name":"","type":"string"}],"payable":false,"stateMutability":"view","type":"function"},
    {"constant":false,"inputs":[{"name":"dst","type":"address"},{"name":"wad","type":"uint256"}],"name":"transfer","outputs":[{"name":"","type":"bool"}],"payable":false,"stateMutability":"nonpayable","type":"function"},
    {"constant":false,"inputs":[],"name":"deposit","outputs":[],"payable":true,"stateMutability":"payable","type":"function"},
    {"constant":true,"inputs":[{"name":"","type":"address"},{"name":"","type":"address"}],"name":"allowance","outputs":[{"name":"","type":"uint256"}],"payable":false,"stateMutability":"view","type":"function"},
    {"payable":true,"stateMutability":"payable","type":"fallback"},
    {"anonymous":false,"inputs":[{"indexed":true,"name":"src","type":"address"},{"indexed":true,"name":"guy","type":"address"},{"indexed":false,"name":"wad","type":"uint256"}],"name":"Approval","type":"event"},
    {"anonymous":false,"inputs":[{"indexed":true,"name":"src","type":"address"},{"indexed":true,"name":"dst","type":"address"},{"indexed":false,"name":"wad","type":"uint256"}],"name":"Transfer","type":"event"},
    {"anonymous":false,"inputs":[{"indexed":true,"name":"dst","type":"address"},{"indexed":false,"name":"wad","type":"uint256"}],"name":"Deposit","type":"event"},
    {"anonymous":false,"inputs":[{"indexed":true,"name":"src","type":"address"},{"indexed":false,"name":"wad","type":"uint256"}],"name":"Withdrawal","type":"event"}
]"#;

/// An opaque handle to a submitted but not yet confirmed transaction.
///
/// Callers can await confirmation themselves through their provider using
/// the transaction hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTx {
    tx_hash: TxHash,
}

impl PendingTx {
    /// Wraps the hash of a submitted transaction.
    pub fn new(tx_hash: TxHash) -> Self {
        Self { tx_hash }
    }

    /// Returns the hash of the submitted transaction.
    pub fn tx_hash(&self) -> TxHash {
        self.tx_hash
    }
}

impl std::fmt::Display for PendingTx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tx_hash)
    }
}

/// The narrow contract surface consumed by [Weth9Client][crate::Weth9Client]:
/// the two state-mutating entry points and the two balance queries. Decouples
/// the client from the full ABI and makes it mockable in tests.
#[async_trait]
pub trait WrappedToken: Send + Sync {
    /// Calls the payable deposit entry point with `value` wei attached.
    async fn deposit(&self, value: U256) -> Result<PendingTx, Error>;

    /// Calls the withdraw entry point for `amount` wei of wrapped tokens.
    async fn withdraw(&self, amount: U256) -> Result<PendingTx, Error>;

    /// Returns the wrapped-token balance of `address` in wei.
    async fn balance_of(&self, address: Address) -> Result<U256, Error>;

    /// Returns the native-currency balance of `address` in wei.
    async fn native_balance(&self, address: Address) -> Result<U256, Error>;
}

/// An alloy-backed [WrappedToken] bound to a deployed WETH9 contract.
///
/// Created once at connect time and never mutated in place; rebinding means
/// constructing a new value. The provider is expected to carry the signer
/// wallet so that deposit and withdraw transactions can be signed and sent.
pub struct Weth9Binding<P: Provider> {
    contract: WETH9::WETH9Instance<P>,
}

impl<P: Provider> Weth9Binding<P> {
    /// Binds to the WETH9 contract deployed at `address`.
    pub fn new(address: Address, provider: P) -> Self {
        Self {
            contract: WETH9::new(address, provider),
        }
    }

    /// Binds to the default WETH9 deployment for `chain_id` per the static
    /// network table. Unknown chain ids bind to the all-zero sentinel
    /// address rather than failing.
    pub fn for_chain(chain_id: u64, provider: P) -> Self {
        Self::new(crate::networks::weth9_address(chain_id), provider)
    }

    /// The address of the bound contract.
    pub fn address(&self) -> Address {
        *self.contract.address()
    }
}

#[async_trait]
impl<P: Provider> WrappedToken for Weth9Binding<P> {
    async fn deposit(&self, value: U256) -> Result<PendingTx, Error> {
        let pending = self
            .contract
            .deposit()
            .value(value)
            .send()
            .await
            .map_err(|e| Error::Transaction(format!("Failed to send deposit: {e}")))?;
        Ok(PendingTx::new(*pending.tx_hash()))
    }

    async fn withdraw(&self, amount: U256) -> Result<PendingTx, Error> {
        let pending = self
            .contract
            .withdraw(amount)
            .send()
            .await
            .map_err(|e| Error::Transaction(format!("Failed to send withdraw: {e}")))?;
        Ok(PendingTx::new(*pending.tx_hash()))
    }

    async fn balance_of(&self, address: Address) -> Result<U256, Error> {
        self.contract
            .balanceOf(address)
            .call()
            .await
            .map_err(|e| Error::Transaction(format!("Failed to call balanceOf: {e}")))
    }

    async fn native_balance(&self, address: Address) -> Result<U256, Error> {
        self.contract
            .provider()
            .get_balance(address)
            .await
            .map_err(|e| Error::Provider(format!("Failed to get balance: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::b256;
    use alloy::sol_types::SolCall;

    #[test]
    fn test_sol_interface_signatures() {
        assert_eq!(WETH9::depositCall::SIGNATURE, "deposit()");
        assert_eq!(WETH9::withdrawCall::SIGNATURE, "withdraw(uint256)");
        assert_eq!(WETH9::balanceOfCall::SIGNATURE, "balanceOf(address)");
        assert_eq!(
            WETH9::transferFromCall::SIGNATURE,
            "transferFrom(address,address,uint256)"
        );
    }

    #[test]
    fn test_abi_json_is_well_formed() {
        let abi: serde_json::Value = serde_json::from_str(WETH9_ABI).unwrap();
        let entries = abi.as_array().unwrap();

        let functions: Vec<&str> = entries
            .iter()
            .filter(|e| e["type"] == "function")
            .map(|e| e["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            functions,
            vec![
                "name",
                "approve",
                "totalSupply",
                "transferFrom",
                "withdraw",
                "decimals",
                "balanceOf",
                "symbol",
                "transfer",
                "deposit",
                "allowance"
            ]
        );

        let events: Vec<&str> = entries
            .iter()
            .filter(|e| e["type"] == "event")
            .map(|e| e["name"].as_str().unwrap())
            .collect();
        assert_eq!(events, vec!["Approval", "Transfer", "Deposit", "Withdrawal"]);

        let fallbacks: Vec<&serde_json::Value> = entries
            .iter()
            .filter(|e| e["type"] == "fallback")
            .collect();
        assert_eq!(fallbacks.len(), 1);
        assert_eq!(fallbacks[0]["payable"], true);
    }

    #[test]
    fn test_pending_tx_exposes_hash() {
        let hash = b256!("e4216d69bf935587b82243e68189de7ade0aa5b6f70dd0de8636b8d643431c0b");
        let tx = PendingTx::new(hash);
        assert_eq!(tx.tx_hash(), hash);
        assert_eq!(
            tx.to_string(),
            "0xe4216d69bf935587b82243e68189de7ade0aa5b6f70dd0de8636b8d643431c0b"
        );
    }
}
