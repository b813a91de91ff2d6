// Asset Transfer Operations
// This module contains transfer and safe-transfer operation logic.

use log::debug;

use crate::asset::{Asset, AssetError, AssetEvent, AssetResult};
use crate::context::RuntimeContext;
use crate::crypto::Address;

use super::{check_asset_permission, AssetStorage};

// ========================================
// Transfer Operation
// ========================================

/// Transfer an asset to a new owner
///
/// The caller must be the current owner, the approved spender for the asset,
/// or an approved operator for the owner. The single-spender approval is
/// cleared on success; an existing listing price travels with the asset.
///
/// # Returns
/// - `Ok(())`: Success
/// - `Err(AssetError)`: Error code
pub fn transfer_from<S: AssetStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    from: &Address,
    to: &Address,
    token_id: u64,
) -> AssetResult<()> {
    // An unminted id has no owner, so `from` can not hold it
    let asset = storage.get_asset(token_id).ok_or(AssetError::NotOwner)?;
    if asset.owner != *from {
        return Err(AssetError::NotOwner);
    }

    check_asset_permission(storage, &asset, &ctx.caller)?;

    apply_transfer(storage, asset, to)?;
    debug!("asset {} moved from {} to {}", token_id, from, to);
    Ok(())
}

// ========================================
// Safe Transfer Operation
// ========================================

/// Outcome of probing a destination for the asset-receipt capability
pub enum ReceiverAck {
    /// Receiver accepted the asset
    Accepted,
    /// Receiver declined the asset
    Rejected,
}

/// External receiver-capability probe used by safe transfers.
///
/// The registry can not tell on its own whether a destination is able to
/// take custody of an asset; the surrounding runtime answers through this
/// trait. "No executable code at the destination" and "destination code
/// declined" are distinct failures.
pub trait ReceiverProbe {
    /// Check if the address carries executable code
    fn is_contract(&self, address: &Address) -> bool;

    /// Ask the destination contract to acknowledge the asset receipt.
    /// Invoked once per safe transfer, never retried.
    fn on_asset_received(
        &self,
        contract: &Address,
        operator: &Address,
        from: &Address,
        token_id: u64,
        data: &[u8],
    ) -> ReceiverAck;
}

/// Safe-transfer an asset, verifying the destination can receive it
///
/// Performs the same ownership and authorization checks as [`transfer_from`],
/// then consults the probe before any state is written: a declined or
/// code-less destination aborts with the registry untouched.
pub fn safe_transfer_from<S: AssetStorage + ?Sized, P: ReceiverProbe + ?Sized>(
    storage: &mut S,
    probe: &P,
    ctx: &RuntimeContext,
    from: &Address,
    to: &Address,
    token_id: u64,
    data: &[u8],
) -> AssetResult<()> {
    let asset = storage.get_asset(token_id).ok_or(AssetError::NotOwner)?;
    if asset.owner != *from {
        return Err(AssetError::NotOwner);
    }

    check_asset_permission(storage, &asset, &ctx.caller)?;

    if !probe.is_contract(to) {
        return Err(AssetError::RecipientNotContract);
    }
    match probe.on_asset_received(to, &ctx.caller, from, token_id, data) {
        ReceiverAck::Accepted => {}
        ReceiverAck::Rejected => return Err(AssetError::RecipientRejected),
    }

    apply_transfer(storage, asset, to)?;
    debug!("asset {} safely moved from {} to {}", token_id, from, to);
    Ok(())
}

// ========================================
// Shared Ownership Reassignment
// ========================================

/// Reassign ownership, clear the single-spender approval and adjust both
/// owners' counts. Also used by the exchange settlement.
pub(super) fn apply_transfer<S: AssetStorage + ?Sized>(
    storage: &mut S,
    mut asset: Asset,
    to: &Address,
) -> AssetResult<()> {
    let from = asset.owner;
    let token_id = asset.token_id;

    asset.owner = *to;
    asset.clear_approval();
    storage.set_asset(&asset)?;

    storage.decrement_balance(&from)?;
    storage.increment_balance(to)?;
    storage.append_event(AssetEvent::Transfer {
        from: Some(from),
        to: *to,
        token_id,
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::{approve, mint, set_approval_for_all};
    use super::*;
    use crate::asset::MemoryAssetStore;
    use std::collections::HashSet;

    fn registry() -> Address {
        Address::new([99u8; 32])
    }

    fn setup_test() -> (MemoryAssetStore, u64, Address) {
        let mut storage = MemoryAssetStore::new(registry());
        let owner = Address::new([1u8; 32]);
        let ctx = RuntimeContext::new(owner);
        let token_id = mint(&mut storage, &ctx).unwrap();
        (storage, token_id, owner)
    }

    // Mock receiver probe
    struct MockProbe {
        contracts: HashSet<Address>,
        accepting: HashSet<Address>,
    }

    impl MockProbe {
        fn new() -> Self {
            Self {
                contracts: HashSet::new(),
                accepting: HashSet::new(),
            }
        }

        fn add_contract(&mut self, address: Address, accepts: bool) {
            self.contracts.insert(address);
            if accepts {
                self.accepting.insert(address);
            }
        }
    }

    impl ReceiverProbe for MockProbe {
        fn is_contract(&self, address: &Address) -> bool {
            self.contracts.contains(address)
        }

        fn on_asset_received(
            &self,
            contract: &Address,
            _operator: &Address,
            _from: &Address,
            _token_id: u64,
            _data: &[u8],
        ) -> ReceiverAck {
            if self.accepting.contains(contract) {
                ReceiverAck::Accepted
            } else {
                ReceiverAck::Rejected
            }
        }
    }

    #[test]
    fn test_transfer_by_owner() {
        let (mut storage, token_id, owner) = setup_test();
        let recipient = Address::new([2u8; 32]);

        let ctx = RuntimeContext::new(owner);
        transfer_from(&mut storage, &ctx, &owner, &recipient, token_id).unwrap();

        let asset = storage.get_asset(token_id).unwrap();
        assert_eq!(asset.owner, recipient);
        assert!(asset.approved.is_none());
        assert_eq!(storage.get_balance(&owner), 0);
        assert_eq!(storage.get_balance(&recipient), 1);
        assert_eq!(
            storage.events().last(),
            Some(&AssetEvent::Transfer {
                from: Some(owner),
                to: recipient,
                token_id,
            })
        );
    }

    #[test]
    fn test_transfer_by_approved_spender() {
        let (mut storage, token_id, owner) = setup_test();
        let spender = Address::new([2u8; 32]);
        let recipient = Address::new([3u8; 32]);

        let owner_ctx = RuntimeContext::new(owner);
        approve(&mut storage, &owner_ctx, &spender, token_id).unwrap();

        let spender_ctx = RuntimeContext::new(spender);
        transfer_from(&mut storage, &spender_ctx, &owner, &recipient, token_id).unwrap();

        assert_eq!(storage.get_asset(token_id).unwrap().owner, recipient);
    }

    #[test]
    fn test_transfer_by_operator() {
        let (mut storage, token_id, owner) = setup_test();
        let operator = Address::new([2u8; 32]);
        let recipient = Address::new([3u8; 32]);

        let owner_ctx = RuntimeContext::new(owner);
        set_approval_for_all(&mut storage, &owner_ctx, &operator, true).unwrap();

        let operator_ctx = RuntimeContext::new(operator);
        transfer_from(&mut storage, &operator_ctx, &owner, &recipient, token_id).unwrap();

        assert_eq!(storage.get_asset(token_id).unwrap().owner, recipient);
    }

    #[test]
    fn test_transfer_wrong_from_fails() {
        let (mut storage, token_id, owner) = setup_test();
        let stranger = Address::new([2u8; 32]);

        let ctx = RuntimeContext::new(owner);
        let result = transfer_from(&mut storage, &ctx, &stranger, &owner, token_id);
        assert_eq!(result, Err(AssetError::NotOwner));
    }

    #[test]
    fn test_transfer_unminted_fails() {
        let (mut storage, _token_id, owner) = setup_test();
        let recipient = Address::new([2u8; 32]);

        let ctx = RuntimeContext::new(owner);
        let result = transfer_from(&mut storage, &ctx, &owner, &recipient, 42);
        assert_eq!(result, Err(AssetError::NotOwner));
    }

    #[test]
    fn test_transfer_unauthorized_fails() {
        let (mut storage, token_id, owner) = setup_test();
        let stranger = Address::new([2u8; 32]);

        let ctx = RuntimeContext::new(stranger);
        let result = transfer_from(&mut storage, &ctx, &owner, &stranger, token_id);
        assert_eq!(result, Err(AssetError::NotAuthorized));
    }

    #[test]
    fn test_transfer_clears_approval() {
        let (mut storage, token_id, owner) = setup_test();
        let spender = Address::new([2u8; 32]);
        let recipient = Address::new([3u8; 32]);

        let owner_ctx = RuntimeContext::new(owner);
        approve(&mut storage, &owner_ctx, &spender, token_id).unwrap();
        transfer_from(&mut storage, &owner_ctx, &owner, &recipient, token_id).unwrap();

        assert!(storage.get_asset(token_id).unwrap().approved.is_none());
    }

    #[test]
    fn test_safe_transfer_to_plain_account_fails() {
        let (mut storage, token_id, owner) = setup_test();
        let recipient = Address::new([2u8; 32]);
        let probe = MockProbe::new();

        let ctx = RuntimeContext::new(owner);
        let result =
            safe_transfer_from(&mut storage, &probe, &ctx, &owner, &recipient, token_id, &[]);
        assert_eq!(result, Err(AssetError::RecipientNotContract));

        // Nothing moved
        assert_eq!(storage.get_asset(token_id).unwrap().owner, owner);
        assert_eq!(storage.get_balance(&owner), 1);
    }

    #[test]
    fn test_safe_transfer_to_accepting_contract() {
        let (mut storage, token_id, owner) = setup_test();
        let contract = Address::new([2u8; 32]);
        let mut probe = MockProbe::new();
        probe.add_contract(contract, true);

        let ctx = RuntimeContext::new(owner);
        safe_transfer_from(
            &mut storage,
            &probe,
            &ctx,
            &owner,
            &contract,
            token_id,
            b"payload",
        )
        .unwrap();

        assert_eq!(storage.get_asset(token_id).unwrap().owner, contract);
        assert_eq!(
            storage.events().last(),
            Some(&AssetEvent::Transfer {
                from: Some(owner),
                to: contract,
                token_id,
            })
        );
    }

    #[test]
    fn test_safe_transfer_to_rejecting_contract_fails() {
        let (mut storage, token_id, owner) = setup_test();
        let contract = Address::new([2u8; 32]);
        let mut probe = MockProbe::new();
        probe.add_contract(contract, false);

        let events_before = storage.events().len();
        let ctx = RuntimeContext::new(owner);
        let result =
            safe_transfer_from(&mut storage, &probe, &ctx, &owner, &contract, token_id, &[]);
        assert_eq!(result, Err(AssetError::RecipientRejected));

        // Nothing moved, nothing logged
        assert_eq!(storage.get_asset(token_id).unwrap().owner, owner);
        assert_eq!(storage.events().len(), events_before);
    }
}
