//! Static table of well-known WETH9 deployments per chain id.

use alloy::primitives::{address, Address};

/// Chain id of the Ethereum mainnet.
pub const ETHEREUM: u64 = 1;
/// Chain id of the Polygon PoS sidechain.
pub const POLYGON: u64 = 137;
/// Chain id of the Sepolia testnet.
pub const SEPOLIA: u64 = 11155111;
/// Chain id of a local Hardhat/Anvil development node.
pub const HARDHAT: u64 = 31337;

/// The all-zero sentinel address used for unrecognized chain ids.
pub const BURN_ADDRESS: Address = Address::ZERO;

const ETHEREUM_WETH9: Address = address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");
const POLYGON_WETH9: Address = address!("7ceb23fd6bc0add59e62ac25578270cff1b9f619");
const SEPOLIA_WETH9: Address = address!("fff9976782d46cc05630d1f6ebab18b2324d6b14");
const HARDHAT_WETH9: Address = address!("dc64a140aa3e981100a9beca4e685f962f0cf6c9");

/// Returns the well-known WETH9 contract address for a recognized chain id.
///
/// Unrecognized chain ids resolve to [BURN_ADDRESS] rather than an error;
/// binding to the sentinel is a deliberate permissive default. Pure lookup,
/// no network access.
pub fn weth9_address(chain_id: u64) -> Address {
    match chain_id {
        ETHEREUM => ETHEREUM_WETH9,
        POLYGON => POLYGON_WETH9,
        SEPOLIA => SEPOLIA_WETH9,
        HARDHAT => HARDHAT_WETH9,
        _ => BURN_ADDRESS,
    }
}
