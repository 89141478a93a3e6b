use alloy::{
    primitives::{Address, TxHash},
    providers::{PendingTransactionError, Provider},
    rpc::types::TransactionRequest,
    transports::{RpcError, Transport, TransportErrorKind},
};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    cut::{cut_calldata, remove_cut},
    interface::FacetInterface,
};

/// Failure modes of a diamond cut submission.
#[derive(Debug, Error)]
pub enum CutError {
    #[error("facet interface `{name}` has no function selectors, nothing to remove")]
    EmptyInterface { name: String },

    #[error("failed to submit diamond cut: {0}")]
    Submission(#[from] RpcError<TransportErrorKind>),

    #[error("failed while waiting for diamond cut receipt: {0}")]
    Receipt(#[from] PendingTransactionError),

    #[error("diamond cut reverted on-chain, tx: {tx_hash}")]
    Reverted { tx_hash: TxHash },
}

/// Remove every selector of `facet` from the diamond's routing table.
///
/// Builds a single Remove cut (zero facet address) and submits one
/// diamondCut transaction under `gas_limit`. Signing, nonce and fee
/// handling come from the provider's wallet and fillers. Returns the
/// transaction hash once the receipt reports success; no retries.
pub async fn remove_facet<T, P>(
    provider: &P,
    diamond: Address,
    facet: &FacetInterface,
    gas_limit: u64,
) -> Result<TxHash, CutError>
where
    T: Transport + Clone,
    P: Provider<T>,
{
    let cut = remove_cut(facet);
    if cut.functionSelectors.is_empty() {
        return Err(CutError::EmptyInterface {
            name: facet.name.clone(),
        });
    }

    info!(
        %diamond,
        facet = %facet.name,
        selectors = cut.functionSelectors.len(),
        "submitting diamond cut (remove)"
    );

    let tx = TransactionRequest::default()
        .to(diamond)
        .input(cut_calldata(vec![cut]).into())
        .gas_limit(gas_limit);

    let pending = provider.send_transaction(tx).await?;
    let tx_hash = *pending.tx_hash();
    debug!(%tx_hash, "diamond cut sent, waiting for inclusion");

    let receipt = pending.get_receipt().await?;
    if !receipt.status() {
        return Err(CutError::Reverted { tx_hash });
    }

    info!(
        tx_hash = %receipt.transaction_hash,
        gas_used = %receipt.gas_used,
        "diamond cut confirmed"
    );
    Ok(receipt.transaction_hash)
}
