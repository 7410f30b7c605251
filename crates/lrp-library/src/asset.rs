use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Api, BankMsg, Coin, CosmosMsg, QuerierWrapper, StdError, StdResult,
    Storage, Uint128, WasmMsg,
};
use cw20::{BalanceResponse as Cw20BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};
use cw_storage_plus::Item;
use std::fmt;

/// The chain's native staking denom, set once per contract during `instantiate`.
const NATIVE_DENOM: Item<String> = Item::new("_native_denom");

/// Set the native denom, called once during `initialization`.
pub fn set_denom(storage: &mut dyn Storage, denom: impl Into<String>) -> StdResult<()> {
    NATIVE_DENOM.save(storage, &denom.into())
}

/// Get the native denom.
/// If [`set_denom`] has not been called, it will return an [StdError::NotFound]
pub fn get_denom(storage: &dyn Storage) -> StdResult<String> {
    NATIVE_DENOM
        .may_load(storage)?
        .ok_or(StdError::not_found("native_denom"))
}

/// Identity of an asset held or moved by the protocol.
/// `Native` is the chain's staking denom; `Cw20` is a registered
/// liquid-staking token contract.
#[cw_serde]
pub enum AssetId {
    Native,
    Cw20(Addr),
}

impl AssetId {
    /// Stable string form used as a storage key and in events.
    pub fn id(&self) -> String {
        match self {
            AssetId::Native => "native".to_string(),
            AssetId::Cw20(addr) => format!("cw20:{}", addr),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, AssetId::Native)
    }

    /// Validate the embedded address for the cw20 variant.
    pub fn validate(&self, api: &dyn Api) -> StdResult<()> {
        if let AssetId::Cw20(addr) = self {
            api.addr_validate(addr.as_str())?;
        }
        Ok(())
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Query `account`'s balance of `asset`: bank balance for the native asset,
/// cw20 balance otherwise. Works for any account, not just the caller.
pub fn balance_of(
    querier: &QuerierWrapper,
    storage: &dyn Storage,
    asset: &AssetId,
    account: &Addr,
) -> StdResult<Uint128> {
    match asset {
        AssetId::Native => {
            let denom = get_denom(storage)?;
            Ok(querier.query_balance(account, denom)?.amount)
        }
        AssetId::Cw20(token) => {
            let res: Cw20BalanceResponse = querier.query_wasm_smart(
                token.to_string(),
                &Cw20QueryMsg::Balance {
                    address: account.to_string(),
                },
            )?;
            Ok(res.balance)
        }
    }
}

/// Build a transfer of `amount` of `asset` from the calling contract to `recipient`.
pub fn transfer_msg(
    storage: &dyn Storage,
    asset: &AssetId,
    recipient: &Addr,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    match asset {
        AssetId::Native => Ok(BankMsg::Send {
            to_address: recipient.to_string(),
            amount: vec![Coin {
                denom: get_denom(storage)?,
                amount,
            }],
        }
        .into()),
        AssetId::Cw20(token) => Ok(WasmMsg::Execute {
            contract_addr: token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                recipient: recipient.to_string(),
                amount,
            })?,
            funds: vec![],
        }
        .into()),
    }
}

/// Build a cw20 `TransferFrom` pulling `amount` from `owner` to `recipient`.
/// The owner must have approved an allowance for the calling contract.
pub fn transfer_from_msg(
    token: &Addr,
    owner: &Addr,
    recipient: &Addr,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: owner.to_string(),
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    }
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, MockStorage};

    #[test]
    fn test_denom() {
        let mut store = MockStorage::new();
        assert!(get_denom(&store).is_err());

        set_denom(&mut store, "untrn").unwrap();
        assert_eq!(get_denom(&store).unwrap(), "untrn");
    }

    #[test]
    fn test_asset_id() {
        let deps = mock_dependencies();
        let token = deps.api.addr_make("lst");

        let native = AssetId::Native;
        assert_eq!(native.id(), "native");
        assert!(native.is_native());

        let cw20 = AssetId::Cw20(token.clone());
        assert_eq!(cw20.id(), format!("cw20:{}", token));
        assert!(!cw20.is_native());
        cw20.validate(&deps.api).unwrap();

        let invalid = AssetId::Cw20(Addr::unchecked("not-bech32"));
        assert!(invalid.validate(&deps.api).is_err());
    }

    #[test]
    fn test_transfer_msg_native() {
        let mut store = MockStorage::new();
        set_denom(&mut store, "untrn").unwrap();

        let recipient = Addr::unchecked("recipient");
        let msg = transfer_msg(&store, &AssetId::Native, &recipient, Uint128::new(100)).unwrap();
        assert_eq!(
            msg,
            CosmosMsg::Bank(BankMsg::Send {
                to_address: recipient.to_string(),
                amount: vec![Coin {
                    denom: "untrn".to_string(),
                    amount: Uint128::new(100),
                }],
            })
        );
    }
}
