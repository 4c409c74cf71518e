//! Program-derived signing identities.
//!
//! Two PDAs sign on behalf of the program: the reward mint authority, derived
//! from a fixed seed, and the collateral escrow, derived from the collateral
//! mint address. The escrow token account lives at its own PDA and is its own
//! token authority.
//!
//! Callers supply bumps as instruction arguments. They are checked against
//! `find_program_address` on every call and only the canonical bump is accepted.

use crate::error::CustomErrorCode;
use anchor_lang::prelude::*;

pub const REWARD_MINT_AUTHORITY_SEED: &[u8] = b"reward_mint_authority";

pub fn reward_mint_authority_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[REWARD_MINT_AUTHORITY_SEED], program_id)
}

pub fn escrow_address(program_id: &Pubkey, collateral_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[collateral_mint.as_ref()], program_id)
}

/// Fails with `InvalidBump` unless `bump` is the canonical bump for `seeds` and
/// the canonical address is `expected`.
pub fn verify_canonical_bump(
    program_id: &Pubkey,
    seeds: &[&[u8]],
    bump: u8,
    expected: &Pubkey,
) -> Result<()> {
    let (address, canonical_bump) = Pubkey::find_program_address(seeds, program_id);
    if bump != canonical_bump || address != *expected {
        msg!(
            "Rejected bump {} for {}: canonical is {} at {}",
            bump,
            expected,
            canonical_bump,
            address
        );
        return err!(CustomErrorCode::InvalidBump);
    }
    Ok(())
}

pub fn verify_reward_mint_authority(program_id: &Pubkey, bump: u8, authority: &Pubkey) -> Result<()> {
    verify_canonical_bump(program_id, &[REWARD_MINT_AUTHORITY_SEED], bump, authority)
}

pub fn verify_escrow(
    program_id: &Pubkey,
    collateral_mint: &Pubkey,
    bump: u8,
    escrow: &Pubkey,
) -> Result<()> {
    verify_canonical_bump(program_id, &[collateral_mint.as_ref()], bump, escrow)
}
