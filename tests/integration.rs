//! Integration tests for the WETH9 client
//!
//! The network-facing tests require Anvil (local Ethereum node).
//! Install with: `cargo install --git https://github.com/foundry-rs/foundry anvil`
//!
//! Run with: `cargo test --test integration -- --ignored`

use weth9_client::prelude::*;

use alloy::network::EthereumWallet;
use alloy::node_bindings::Anvil;
use alloy::signers::local::PrivateKeySigner;

/// Check if Anvil is available
fn anvil_available() -> bool {
    std::process::Command::new("anvil")
        .arg("--version")
        .output()
        .is_ok()
}

#[tokio::test]
async fn test_bind_fails_against_unreachable_provider() {
    let account: Address = "0x3cDB3d9e1B74692Bb1E3bb5fc81938151cA64b02".parse().unwrap();
    // Port 9 is the discard port; nothing is listening there.
    let provider = ProviderBuilder::new().connect_http("http://127.0.0.1:9".parse().unwrap());

    let result = Weth9Client::bind_default_network(HARDHAT, provider, account).await;
    assert!(matches!(result, Err(weth9_client::Error::Binding(_))));
}

#[test]
fn test_default_network_binding_matches_manual_binding() {
    let provider_a = ProviderBuilder::new().connect_http("http://127.0.0.1:8545".parse().unwrap());
    let provider_b = ProviderBuilder::new().connect_http("http://127.0.0.1:8545".parse().unwrap());

    let by_chain = Weth9Binding::for_chain(HARDHAT, provider_a);
    let by_address = Weth9Binding::new(weth9_address(HARDHAT), provider_b);
    assert_eq!(by_chain.address(), by_address.address());
}

#[test]
fn test_unknown_chain_binds_to_burn_address() {
    let provider = ProviderBuilder::new().connect_http("http://127.0.0.1:8545".parse().unwrap());
    let binding = Weth9Binding::for_chain(999999, provider);
    assert_eq!(binding.address(), BURN_ADDRESS);
}

#[ignore]
#[tokio::test]
async fn test_bind_with_anvil() {
    if !anvil_available() {
        println!("Skipping test - anvil not installed");
        return;
    }

    let anvil = Anvil::new().spawn();
    let signer: PrivateKeySigner = anvil.keys()[0].clone().into();
    let account = signer.address();
    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .connect_http(anvil.endpoint().parse().unwrap());

    let client = Weth9Client::bind_default_network(HARDHAT, provider, account)
        .await
        .unwrap();

    // Anvil's default accounts have 10000 ETH
    let balance = client.eth_balance(account).await.unwrap();
    assert_eq!(balance, U256::from(10000000000000000000000u128));
    drop(anvil);
}

#[ignore]
#[tokio::test]
async fn test_weth_balance_fails_without_deployed_contract_with_anvil() {
    if !anvil_available() {
        println!("Skipping test - anvil not installed");
        return;
    }

    let anvil = Anvil::new().spawn();
    let signer: PrivateKeySigner = anvil.keys()[0].clone().into();
    let account = signer.address();
    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .connect_http(anvil.endpoint().parse().unwrap());

    let mut client = Weth9Client::bind_default_network(HARDHAT, provider, account)
        .await
        .unwrap();
    client.set_dump(false);

    // A fresh Anvil has no WETH9 deployed at the default address, so the
    // balanceOf call cannot decode a return value.
    let result = client.weth_balance(account).await;
    assert!(result.is_err());
    drop(anvil);
}
