use anchor_lang::prelude::*;

#[event]
pub struct EscrowAccountReady {
    pub escrow: Pubkey,
    pub mint: Pubkey,
    pub payer: Pubkey,
    pub balance: u64,
    pub created: bool,
}

#[event]
pub struct StakeEvent {
    pub user: Pubkey,
    pub amount: u64,
    pub collateral_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub escrow: Pubkey,
}

#[event]
pub struct UnstakeEvent {
    pub user: Pubkey,
    pub amount: u64,
    pub collateral_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub escrow: Pubkey,
}

#[event]
pub struct ProtocolPauseUpdated {
    pub admin: Pubkey,
    pub paused: bool,
}
