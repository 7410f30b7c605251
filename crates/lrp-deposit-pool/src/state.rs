use crate::msg::WithdrawalRequest;
use cosmwasm_std::{Addr, StdError, StdResult, Storage, Uint128};
use cw_storage_plus::{Item, Map};

/// The delegate queue, insertion-ordered, no duplicates.
/// [`IS_DELEGATE`] mirrors membership and must stay in sync.
pub(crate) const DELEGATES: Item<Vec<Addr>> = Item::new("delegates");
pub(crate) const IS_DELEGATE: Map<&Addr, bool> = Map::new("is_delegate");

pub(crate) const MAX_DELEGATES: Item<u32> = Item::new("max_delegates");
pub(crate) const MIN_DEPOSIT: Item<Uint128> = Item::new("min_deposit");
pub(crate) const WITHDRAWAL_DELAY_BLOCKS: Item<u64> = Item::new("withdrawal_delay_blocks");

pub(crate) const RECEIPT_TOKEN: Item<Addr> = Item::new("receipt_token");
pub(crate) const UNSTAKING_VAULT: Item<Addr> = Item::new("unstaking_vault");
pub(crate) const CONVERTER: Item<Addr> = Item::new("converter");

/// Open withdrawal requests, keyed by owner and a monotone id.
pub(crate) const WITHDRAWAL_REQUESTS: Map<(&Addr, u64), WithdrawalRequest> =
    Map::new("withdrawal_requests");
pub(crate) const NEXT_WITHDRAWAL_ID: Item<u64> = Item::new("next_withdrawal_id");

pub(crate) fn get_receipt_token(storage: &dyn Storage) -> StdResult<Addr> {
    RECEIPT_TOKEN
        .may_load(storage)?
        .ok_or(StdError::not_found("receipt_token"))
}

pub(crate) fn get_unstaking_vault(storage: &dyn Storage) -> StdResult<Addr> {
    UNSTAKING_VAULT
        .may_load(storage)?
        .ok_or(StdError::not_found("unstaking_vault"))
}

pub(crate) fn get_delegates(storage: &dyn Storage) -> StdResult<Vec<Addr>> {
    DELEGATES
        .may_load(storage)
        .map(|res| res.unwrap_or_default())
}

pub(crate) fn is_delegate(storage: &dyn Storage, addr: &Addr) -> StdResult<bool> {
    IS_DELEGATE
        .may_load(storage, addr)
        .map(|res| res.unwrap_or(false))
}

/// Reserve the next withdrawal request id.
pub(crate) fn next_withdrawal_id(storage: &mut dyn Storage) -> StdResult<u64> {
    let id = NEXT_WITHDRAWAL_ID.may_load(storage)?.unwrap_or(0);
    NEXT_WITHDRAWAL_ID.save(storage, &(id + 1))?;
    Ok(id)
}
