//! This prelude module simplifies importing many useful items from the weth9_client crate using a glob import.
//!
//! To use this prelude, add the following to your code:
//! ```
//! use weth9_client::prelude::*;
//! ```

pub use crate::networks::{weth9_address, BURN_ADDRESS, ETHEREUM, HARDHAT, POLYGON, SEPOLIA};
pub use crate::{Error, PendingTx, Weth9Binding, Weth9Client, WrappedToken, WETH9, WETH9_ABI};

pub use alloy::primitives::{Address, TxHash, U256};
pub use alloy::providers::{Provider, ProviderBuilder};
