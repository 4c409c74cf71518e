//! # staker - Collateral Escrow and Reward Mint Exchange
//!
//! ## Business Process Flow
//!
//! 1. Initial Setup:
//!    - Admin creates two token types: Collateral and Reward
//!    - Admin hands the reward mint authority to the program PDA
//!    - Admin initializes program with both mint addresses
//!    - Anyone provisions the program's collateral escrow account
//!
//! 2. Stake:
//!    - User deposits collateral tokens into the escrow account
//!    - Program mints the same amount of reward tokens to the user
//!
//! 3. Unstake:
//!    - User burns reward tokens
//!    - Program returns the same amount of collateral from escrow
//!
//! Works with mints owned by either the SPL Token program or Token-2022.
//!
//! Authority is held by PDAs (Program Derived Addresses) whose bumps are
//! re-derived and must be canonical on every call. Both token operations of
//! an exchange run in the same instruction, so the runtime commits or rolls
//! back them together.

pub mod account_structs;
pub mod authority;
pub mod error;
pub mod events;
pub mod exchange;
mod guard;
pub mod processor;
pub mod state;
pub mod token_standard;

use account_structs::*;
use anchor_lang::prelude::*;

declare_id!("2vteEBtJopYp8Shc1kbD29WCjAZezp8mJMoDkmX5xGca");

#[program]
pub mod staker {
    use super::*;

    /// Records the collateral and reward mints. Only the program upgrade authority
    /// may call this, and the reward mint's authority must already be the
    /// reward-mint-authority PDA.
    pub fn initialize(
        ctx: Context<Initialize>,
        collateral_mint: Pubkey,
        reward_mint: Pubkey,
    ) -> Result<()> {
        processor::initialize(ctx, collateral_mint, reward_mint)
    }

    /// Pauses or unpauses stake and unstake.
    pub fn pause(ctx: Context<Pause>, paused: bool) -> Result<()> {
        processor::pause(ctx, paused)
    }

    /// Creates the program's collateral escrow token account if it does not exist.
    /// Calling it again is a no-op that reports the current escrow balance.
    pub fn create_escrow_account(ctx: Context<CreateEscrowAccount>, bump_escrow: u8) -> Result<()> {
        processor::create_escrow_account(ctx, bump_escrow)
    }

    /// Handles user deposits of collateral:
    /// - Mints `amount` reward tokens to the user, signed by the mint authority PDA
    /// - Transfers `amount` collateral tokens from the user into escrow
    pub fn stake(ctx: Context<Stake>, bump_mint: u8, bump_escrow: u8, amount: u64) -> Result<()> {
        processor::stake(ctx, bump_mint, bump_escrow, amount)
    }

    /// Reverses a stake:
    /// - Burns `amount` reward tokens from the user
    /// - Transfers `amount` collateral tokens from escrow back to the user, signed by the escrow PDA
    pub fn unstake(ctx: Context<Unstake>, bump_escrow: u8, amount: u64) -> Result<()> {
        processor::unstake(ctx, bump_escrow, amount)
    }
}
