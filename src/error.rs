use thiserror::Error;

/// Custom Error type for the weth9_client crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Failure to establish a contract binding, usually because the signer
    /// or provider has no usable network connection at connect time.
    #[error("Binding error: {0}")]
    Binding(String),
    /// The underlying contract call was reverted or rejected.
    #[error("Transaction error: {0}")]
    Transaction(String),
    /// Network or provider failure on an RPC request.
    #[error("Provider error: {0}")]
    Provider(String),
    /// A malformed decimal amount string or an out-of-range amount.
    #[error("Conversion error: {0}")]
    Conversion(String),
}
