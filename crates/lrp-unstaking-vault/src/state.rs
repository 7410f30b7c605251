use cosmwasm_std::{Addr, StdError, StdResult, Storage, Uint128};
use cw_storage_plus::{Item, Map};
use lrp_library::asset::AssetId;

/// Per-asset counter of shares currently mid-unstake from the external
/// protocol. Keyed by [`AssetId::id`].
const SHARES_UNSTAKING: Map<&str, Uint128> = Map::new("shares_unstaking");

/// The deposit pool contract.
pub(crate) const DEPOSIT_POOL: Item<Addr> = Item::new("deposit_pool");

/// The external restaking protocol's strategy manager.
pub(crate) const STRATEGY_MANAGER: Item<Addr> = Item::new("strategy_manager");

pub(crate) fn get_deposit_pool(storage: &dyn Storage) -> StdResult<Addr> {
    DEPOSIT_POOL
        .may_load(storage)?
        .ok_or(StdError::not_found("deposit_pool"))
}

pub(crate) fn get_strategy_manager(storage: &dyn Storage) -> StdResult<Addr> {
    STRATEGY_MANAGER
        .may_load(storage)?
        .ok_or(StdError::not_found("strategy_manager"))
}

/// Add to an asset's mid-unstake counter, returning the new total.
pub(crate) fn add_shares(
    storage: &mut dyn Storage,
    asset: &AssetId,
    shares: Uint128,
) -> StdResult<Uint128> {
    SHARES_UNSTAKING.update(storage, asset.id().as_str(), |tracked| -> StdResult<_> {
        tracked
            .unwrap_or(Uint128::zero())
            .checked_add(shares)
            .map_err(StdError::from)
    })
}

/// Subtract from an asset's mid-unstake counter, returning the new total.
/// Underflow is the caller's error to surface.
pub(crate) fn sub_shares(
    storage: &mut dyn Storage,
    asset: &AssetId,
    shares: Uint128,
) -> StdResult<Uint128> {
    SHARES_UNSTAKING.update(storage, asset.id().as_str(), |tracked| -> StdResult<_> {
        tracked
            .unwrap_or(Uint128::zero())
            .checked_sub(shares)
            .map_err(StdError::from)
    })
}

/// Shares of `asset` currently mid-unstake, zero if never tracked.
pub(crate) fn get_shares(storage: &dyn Storage, asset: &AssetId) -> StdResult<Uint128> {
    SHARES_UNSTAKING
        .may_load(storage, asset.id().as_str())
        .map(|res| res.unwrap_or(Uint128::zero()))
}
