use crate::asset::AssetId;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Deps, StdError, StdResult, Storage, Uint128};
use cw_storage_plus::Item;

/// Fixed-point scale of all oracle rates: 1e18.
/// A rate of `PRICE_ONE` means one unit of the asset is worth one unit of
/// the native asset.
pub const PRICE_ONE: Uint128 = Uint128::new(1_000_000_000_000_000_000);

/// Address of the price oracle contract, stored by every consumer.
pub const ORACLE: Item<Addr> = Item::new("_oracle");

/// Set the oracle address, called once during `initialization`.
pub fn set_oracle(storage: &mut dyn Storage, oracle: &Addr) -> StdResult<()> {
    ORACLE.save(storage, oracle)
}

/// Get the oracle address.
/// If [`set_oracle`] has not been called, it will return an [StdError::NotFound]
pub fn get_oracle(storage: &dyn Storage) -> StdResult<Addr> {
    ORACLE
        .may_load(storage)?
        .ok_or(StdError::not_found("oracle"))
}

/// Query interface of the price oracle.
/// All rates are native-asset value per unit, 1e18 scale.
#[cw_serde]
pub enum QueryMsg {
    AssetPrice { asset: AssetId },
    ReceiptTokenPrice {},
}

/// Native value of one unit of `asset`, 1e18 scale.
/// `AssetPrice(Native)` is always [`PRICE_ONE`].
pub fn asset_price(deps: Deps, asset: &AssetId) -> StdResult<Uint128> {
    if asset.is_native() {
        return Ok(PRICE_ONE);
    }
    let oracle = get_oracle(deps.storage)?;
    deps.querier.query_wasm_smart(
        oracle,
        &QueryMsg::AssetPrice {
            asset: asset.clone(),
        },
    )
}

/// Native value of one receipt token, 1e18 scale.
pub fn receipt_token_price(deps: Deps) -> StdResult<Uint128> {
    let oracle = get_oracle(deps.storage)?;
    deps.querier
        .query_wasm_smart(oracle, &QueryMsg::ReceiptTokenPrice {})
}
