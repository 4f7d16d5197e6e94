//! # WETH9 Client Library
//!
//! A convenience wrapper around the canonical WETH9 wrapped-native-token
//! contract: deposit native currency for wrapped tokens, withdraw it back,
//! and query balances, with an optional balance-delta trace printed around
//! each state-mutating call.
//!
//! This library uses the [alloy](https://github.com/alloy-rs/alloy) framework for Ethereum interactions.
//!
//! ## Quickstart Guide
//!
//! Bind a [Weth9Client] to the default WETH9 deployment of a known chain and
//! wrap some ETH. The provider must carry the signer wallet so that deposit
//! and withdraw transactions can be signed.
//! ```no_run
//! use weth9_client::prelude::*;
//! use alloy::network::EthereumWallet;
//! use alloy::signers::local::PrivateKeySigner;
//!
//! # async fn wrap() -> Result<(), weth9_client::Error> {
//! let signer: PrivateKeySigner = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80".parse().unwrap();
//! let account = signer.address();
//! let provider = ProviderBuilder::new()
//!     .wallet(EthereumWallet::from(signer))
//!     .connect_http("http://127.0.0.1:8545".parse().unwrap());
//!
//! let client = Weth9Client::bind_default_network(HARDHAT, provider, account).await?;
//! let pending = client.deposit_eth("1.5").await?;
//! println!("deposit submitted: {}", pending.tx_hash());
//! # Ok(())
//! # }
//! ```
//!
//! ## Balance Queries
//! Both the native and the wrapped balance of any address can be read
//! through the bound client.
//! ```no_run
//! # use weth9_client::prelude::*;
//! # async fn balances(client: Weth9Client<Weth9Binding<impl Provider>>) -> Result<(), weth9_client::Error> {
//! let address: Address = "0xFf7FD50BF684eb853787179cc9c784b55Ac68699".parse().unwrap();
//! let eth = client.eth_balance(address).await?;
//! let weth = client.weth_balance(address).await?;
//! println!("{eth} wei native, {weth} wei wrapped");
//! # Ok(())
//! # }
//! ```
//!
//! ## Diagnostics
//! Every deposit and withdrawal prints a before/after balance trace by
//! default. Call `client.set_dump(false)` to silence it; with the trace off
//! no balance snapshots are taken at all. The trace state is scoped to one
//! call, so run at most one mutating call per client instance at a time if
//! trace fidelity matters.
//!
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod contract;
pub use contract::{PendingTx, Weth9Binding, WrappedToken, WETH9, WETH9_ABI};
mod dump;
mod error;
pub use error::Error;
pub mod networks;
mod weth_client;
pub use weth_client::Weth9Client;
pub use alloy;
pub mod prelude;
