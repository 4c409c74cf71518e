use crate::error::CustomErrorCode;
use anchor_lang::prelude::*;

#[allow(deprecated)]
use anchor_lang::solana_program::bpf_loader_upgradeable::UpgradeableLoaderState;

/// Only the upgrade authority recorded in the program's ProgramData account may
/// configure or pause the exchange.
pub fn require_upgrade_authority(program_data: &AccountInfo, admin: &Signer) -> Result<()> {
    let data = program_data
        .try_borrow_data()
        .map_err(|_| CustomErrorCode::InvalidProgramData)?;

    let state = bincode::deserialize::<UpgradeableLoaderState>(&data)
        .map_err(|_| CustomErrorCode::InvalidProgramData)?;

    let UpgradeableLoaderState::ProgramData {
        upgrade_authority_address,
        ..
    } = state
    else {
        return err!(CustomErrorCode::InvalidProgramData);
    };

    let upgrade_authority =
        upgrade_authority_address.ok_or(CustomErrorCode::NoUpgradeAuthority)?;
    require_keys_eq!(
        admin.key(),
        upgrade_authority,
        CustomErrorCode::InvalidUpgradeAuthority
    );

    Ok(())
}
