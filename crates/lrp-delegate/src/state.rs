use cosmwasm_std::{Addr, StdError, StdResult, Storage, Uint128};
use cw_storage_plus::Item;

pub(crate) const DEPOSIT_POOL: Item<Addr> = Item::new("deposit_pool");
pub(crate) const UNSTAKING_VAULT: Item<Addr> = Item::new("unstaking_vault");

/// The external restaking protocol's strategy manager.
pub(crate) const STRATEGY_MANAGER: Item<Addr> = Item::new("strategy_manager");

/// The external protocol's native staking deposit contract.
pub(crate) const NATIVE_STAKING: Item<Addr> = Item::new("native_staking");

/// Fixed native amount staked per call.
pub(crate) const STAKE_UNIT: Item<Uint128> = Item::new("stake_unit");

/// Native value staked with the protocol but not yet reflected in the pod
/// balance. Reconciled off-chain when the protocol verifies the deposit.
pub(crate) const STAKED_UNVERIFIED: Item<Uint128> = Item::new("staked_unverified");

pub(crate) fn get_deposit_pool(storage: &dyn Storage) -> StdResult<Addr> {
    DEPOSIT_POOL
        .may_load(storage)?
        .ok_or(StdError::not_found("deposit_pool"))
}

pub(crate) fn get_unstaking_vault(storage: &dyn Storage) -> StdResult<Addr> {
    UNSTAKING_VAULT
        .may_load(storage)?
        .ok_or(StdError::not_found("unstaking_vault"))
}

pub(crate) fn get_strategy_manager(storage: &dyn Storage) -> StdResult<Addr> {
    STRATEGY_MANAGER
        .may_load(storage)?
        .ok_or(StdError::not_found("strategy_manager"))
}

pub(crate) fn get_native_staking(storage: &dyn Storage) -> StdResult<Addr> {
    NATIVE_STAKING
        .may_load(storage)?
        .ok_or(StdError::not_found("native_staking"))
}

/// Bump the staked-but-unverified counter, returning the new total.
pub(crate) fn add_staked_unverified(
    storage: &mut dyn Storage,
    amount: Uint128,
) -> StdResult<Uint128> {
    let total = STAKED_UNVERIFIED
        .may_load(storage)?
        .unwrap_or(Uint128::zero())
        .checked_add(amount)
        .map_err(StdError::from)?;
    STAKED_UNVERIFIED.save(storage, &total)?;
    Ok(total)
}

pub(crate) fn get_staked_unverified(storage: &dyn Storage) -> StdResult<Uint128> {
    STAKED_UNVERIFIED
        .may_load(storage)
        .map(|res| res.unwrap_or(Uint128::zero()))
}
