use cosmwasm_std::{Addr, StdError, StdResult, Storage, Uint128};
use cw_storage_plus::{Item, Map};
use lrp_library::asset::AssetId;

pub(crate) const DEPOSIT_POOL: Item<Addr> = Item::new("deposit_pool");

/// Native value of assets pulled for conversion and not yet returned.
const NATIVE_VALUE_IN_WITHDRAWAL: Item<Uint128> = Item::new("native_value_in_withdrawal");

/// Cumulative native funds ever swapped into each asset. A monotone
/// counter, written for observability but not enforced as a cap.
const CONVERSION_LIMIT: Map<&str, Uint128> = Map::new("conversion_limit");

/// Per-asset black-box unstake/claim adapter.
pub(crate) const ADAPTERS: Map<&str, Addr> = Map::new("adapters");

pub(crate) fn get_deposit_pool(storage: &dyn Storage) -> StdResult<Addr> {
    DEPOSIT_POOL
        .may_load(storage)?
        .ok_or(StdError::not_found("deposit_pool"))
}

pub(crate) fn get_native_value_in_withdrawal(storage: &dyn Storage) -> StdResult<Uint128> {
    NATIVE_VALUE_IN_WITHDRAWAL
        .may_load(storage)
        .map(|res| res.unwrap_or(Uint128::zero()))
}

/// Increase the in-withdrawal value, returning the new total.
pub(crate) fn add_native_value_in_withdrawal(
    storage: &mut dyn Storage,
    value: Uint128,
) -> StdResult<Uint128> {
    let total = get_native_value_in_withdrawal(storage)?
        .checked_add(value)
        .map_err(StdError::from)?;
    NATIVE_VALUE_IN_WITHDRAWAL.save(storage, &total)?;
    Ok(total)
}

/// Decrease the in-withdrawal value, floored at zero: native proceeds can
/// come back worth more than the value recorded on the way out.
pub(crate) fn sub_native_value_in_withdrawal(
    storage: &mut dyn Storage,
    value: Uint128,
) -> StdResult<Uint128> {
    let total = get_native_value_in_withdrawal(storage)?.saturating_sub(value);
    NATIVE_VALUE_IN_WITHDRAWAL.save(storage, &total)?;
    Ok(total)
}

pub(crate) fn get_conversion_limit(storage: &dyn Storage, asset: &AssetId) -> StdResult<Uint128> {
    CONVERSION_LIMIT
        .may_load(storage, asset.id().as_str())
        .map(|res| res.unwrap_or(Uint128::zero()))
}

/// Accumulate native funds swapped into `asset`, returning the new total.
pub(crate) fn add_conversion_limit(
    storage: &mut dyn Storage,
    asset: &AssetId,
    funds: Uint128,
) -> StdResult<Uint128> {
    CONVERSION_LIMIT.update(storage, asset.id().as_str(), |tracked| -> StdResult<_> {
        tracked
            .unwrap_or(Uint128::zero())
            .checked_add(funds)
            .map_err(StdError::from)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockStorage;

    #[test]
    fn in_withdrawal_value_floors_at_zero() {
        let mut store = MockStorage::new();

        add_native_value_in_withdrawal(&mut store, Uint128::new(100)).unwrap();
        let total = sub_native_value_in_withdrawal(&mut store, Uint128::new(150)).unwrap();
        assert_eq!(total, Uint128::zero());
        assert_eq!(
            get_native_value_in_withdrawal(&store).unwrap(),
            Uint128::zero()
        );
    }

    #[test]
    fn conversion_limit_accumulates() {
        let mut store = MockStorage::new();
        let asset = AssetId::Cw20(Addr::unchecked("lst"));

        assert_eq!(
            get_conversion_limit(&store, &asset).unwrap(),
            Uint128::zero()
        );
        add_conversion_limit(&mut store, &asset, Uint128::new(40)).unwrap();
        let total = add_conversion_limit(&mut store, &asset, Uint128::new(60)).unwrap();
        assert_eq!(total, Uint128::new(100));
    }
}
