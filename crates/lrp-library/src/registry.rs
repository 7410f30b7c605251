use crate::asset::AssetId;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Deps, MessageInfo, StdError, StdResult, Storage, Uint128};
use cw_storage_plus::Item;

/// Address of the asset registry contract, stored by every consumer.
pub const REGISTRY: Item<Addr> = Item::new("_registry");

/// Errors raised by the registry interface.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RegistryError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: sender does not hold the {role} role")]
    Unauthorized { role: String },
}

/// Set the registry address, called once during `initialization`.
pub fn set_registry(storage: &mut dyn Storage, registry: &Addr) -> StdResult<()> {
    REGISTRY.save(storage, registry)
}

/// Get the registry address.
/// If [`set_registry`] has not been called, it will return an [StdError::NotFound]
pub fn get_registry(storage: &dyn Storage) -> StdResult<Addr> {
    REGISTRY
        .may_load(storage)?
        .ok_or(StdError::not_found("registry"))
}

/// Query interface of the asset registry.
/// The registry is an external collaborator: it owns per-asset metadata
/// (supported flag, deposit limit, assigned strategy) and role membership.
#[cw_serde]
pub enum QueryMsg {
    IsSupportedAsset { asset: AssetId },
    DepositLimit { asset: AssetId },
    AssetStrategy { asset: AssetId },
    SupportedAssets {},
    IsAdmin { addr: String },
    IsManager { addr: String },
    IsOperator { addr: String },
}

pub fn is_supported_asset(deps: Deps, asset: &AssetId) -> StdResult<bool> {
    let registry = get_registry(deps.storage)?;
    deps.querier.query_wasm_smart(
        registry,
        &QueryMsg::IsSupportedAsset {
            asset: asset.clone(),
        },
    )
}

/// The absolute cap on an asset's total backing value.
pub fn deposit_limit(deps: Deps, asset: &AssetId) -> StdResult<Uint128> {
    let registry = get_registry(deps.storage)?;
    deps.querier.query_wasm_smart(
        registry,
        &QueryMsg::DepositLimit {
            asset: asset.clone(),
        },
    )
}

/// The delegate-strategy assigned to an asset, if any.
pub fn asset_strategy(deps: Deps, asset: &AssetId) -> StdResult<Option<Addr>> {
    let registry = get_registry(deps.storage)?;
    deps.querier.query_wasm_smart(
        registry,
        &QueryMsg::AssetStrategy {
            asset: asset.clone(),
        },
    )
}

pub fn supported_assets(deps: Deps) -> StdResult<Vec<AssetId>> {
    let registry = get_registry(deps.storage)?;
    deps.querier
        .query_wasm_smart(registry, &QueryMsg::SupportedAssets {})
}

fn assert_role(deps: Deps, role: &str, msg: &QueryMsg) -> Result<(), RegistryError> {
    let registry = get_registry(deps.storage)?;
    let held: bool = deps.querier.query_wasm_smart(registry, msg)?;
    if !held {
        return Err(RegistryError::Unauthorized {
            role: role.to_string(),
        });
    }
    Ok(())
}

/// Asserts that the sender holds the admin role.
pub fn assert_admin(deps: Deps, info: &MessageInfo) -> Result<(), RegistryError> {
    assert_role(
        deps,
        "admin",
        &QueryMsg::IsAdmin {
            addr: info.sender.to_string(),
        },
    )
}

/// Asserts that the sender holds the manager role.
pub fn assert_manager(deps: Deps, info: &MessageInfo) -> Result<(), RegistryError> {
    assert_role(
        deps,
        "manager",
        &QueryMsg::IsManager {
            addr: info.sender.to_string(),
        },
    )
}

/// Asserts that the sender holds the operator role.
pub fn assert_operator(deps: Deps, info: &MessageInfo) -> Result<(), RegistryError> {
    assert_role(
        deps,
        "operator",
        &QueryMsg::IsOperator {
            addr: info.sender.to_string(),
        },
    )
}
