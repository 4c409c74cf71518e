use anchor_lang::prelude::*;

/// Size of a token account without extensions. Both standards share this base layout.
pub const TOKEN_ACCOUNT_LEN: usize = anchor_spl::token::TokenAccount::LEN;

#[account]
pub struct Config {
    pub collateral_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub paused: bool,
    pub bump: u8,
}

impl Config {
    pub const LEN: usize = 8 + 32 + 32 + 1 + 1;
}
