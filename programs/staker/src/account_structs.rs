use crate::error::*;
use crate::exchange::ExchangeBalances;
use crate::state::*;
use crate::token_standard::read_token_account;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount};

use anchor_lang::solana_program::bpf_loader_upgradeable::{self};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = signer,
        space = Config::LEN,
        seeds = [b"config"],
        bump
    )]
    pub config: Account<'info, Config>,

    pub collateral_mint: Box<InterfaceAccount<'info, Mint>>,
    pub reward_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(mut)]
    pub signer: Signer<'info>,

    /// CHECK: This is the program data account that contains the update authority
    #[account(
        constraint = program_data.key() == get_program_data_address(&crate::id()) @ CustomErrorCode::InvalidProgramData
    )]
    pub program_data: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct Pause<'info> {
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    /// CHECK: This is the program data account that contains the update authority
    #[account(
        constraint = program_data.key() == get_program_data_address(&crate::id()) @ CustomErrorCode::InvalidProgramData
    )]
    pub program_data: UncheckedAccount<'info>,

    pub signer: Signer<'info>,
}

#[derive(Accounts)]
pub struct CreateEscrowAccount<'info> {
    #[account(
        seeds = [b"config"],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    /// CHECK: Its owner selects the token program; resolved in the processor.
    #[account(
        constraint = collateral_mint.key() == config.collateral_mint @ CustomErrorCode::WrongMint
    )]
    pub collateral_mint: UncheckedAccount<'info>,

    /// CHECK: May not exist yet. The address is checked against the canonical
    /// escrow PDA and any existing contents are validated in the processor.
    #[account(mut)]
    pub escrow_account: UncheckedAccount<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    /// CHECK: Either SPL Token or Token-2022, must match the collateral mint owner
    pub token_program: UncheckedAccount<'info>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct Stake<'info> {
    #[account(
        seeds = [b"config"],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    // Supply changes, so the mint is write-locked for the whole transaction.
    #[account(
        mut,
        constraint = reward_mint.key() == config.reward_mint @ CustomErrorCode::WrongMint,
        constraint = reward_mint.mint_authority == Some(reward_mint_authority.key()).into() @ CustomErrorCode::InvalidMintAuthority
    )]
    pub reward_mint: Box<InterfaceAccount<'info, Mint>>,

    /// CHECK: Signing PDA only. Canonical bump and address verified in the processor.
    pub reward_mint_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = user_reward_account.mint == config.reward_mint @ CustomErrorCode::WrongMint,
        constraint = user_reward_account.owner == user.key() @ CustomErrorCode::WrongAccount
    )]
    pub user_reward_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// CHECK: Selects the token program. Owner, mint and holder are checked in the
    /// processor once the owner resolves to a supported token program.
    #[account(mut)]
    pub user_collateral_account: UncheckedAccount<'info>,

    pub user: Signer<'info>,

    #[account(
        mut,
        constraint = escrow_account.mint == config.collateral_mint @ CustomErrorCode::WrongMint,
        constraint = escrow_account.owner == escrow_account.key() @ CustomErrorCode::WrongAccount
    )]
    pub escrow_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        constraint = collateral_mint.key() == config.collateral_mint @ CustomErrorCode::WrongMint
    )]
    pub collateral_mint: Box<InterfaceAccount<'info, Mint>>,

    /// CHECK: Either SPL Token or Token-2022, resolved from the user's collateral account owner
    pub token_program: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct Unstake<'info> {
    #[account(
        seeds = [b"config"],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        constraint = reward_mint.key() == config.reward_mint @ CustomErrorCode::WrongMint
    )]
    pub reward_mint: Box<InterfaceAccount<'info, Mint>>,

    /// CHECK: Selects the token program. Owner, mint and holder are checked in the
    /// processor once the owner resolves to a supported token program.
    #[account(mut)]
    pub user_reward_account: UncheckedAccount<'info>,

    pub user: Signer<'info>,

    #[account(
        mut,
        constraint = escrow_account.mint == config.collateral_mint @ CustomErrorCode::WrongMint,
        constraint = escrow_account.owner == escrow_account.key() @ CustomErrorCode::WrongAccount
    )]
    pub escrow_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = user_collateral_account.mint == config.collateral_mint @ CustomErrorCode::WrongMint,
        constraint = user_collateral_account.owner == user.key() @ CustomErrorCode::WrongAccount
    )]
    pub user_collateral_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        constraint = collateral_mint.key() == config.collateral_mint @ CustomErrorCode::WrongMint
    )]
    pub collateral_mint: Box<InterfaceAccount<'info, Mint>>,

    /// CHECK: Either SPL Token or Token-2022, resolved from the user's reward account owner
    pub token_program: UncheckedAccount<'info>,
}

// Helper function to derive the program data address
fn get_program_data_address(program_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[program_id.as_ref()], &bpf_loader_upgradeable::id()).0
}

impl<'info> Stake<'info> {
    pub fn user_collateral(&self) -> Result<TokenAccount> {
        let account = read_token_account(&self.user_collateral_account)?;
        require_keys_eq!(account.mint, self.config.collateral_mint, CustomErrorCode::WrongMint);
        require_keys_eq!(account.owner, self.user.key(), CustomErrorCode::WrongAccount);
        Ok(account)
    }

    pub fn balances(&self) -> Result<ExchangeBalances> {
        Ok(ExchangeBalances {
            user_collateral: self.user_collateral()?.amount,
            user_reward: self.user_reward_account.amount,
            escrow: self.escrow_account.amount,
            reward_supply: self.reward_mint.supply,
        })
    }

    pub fn reload_balances(&mut self) -> Result<ExchangeBalances> {
        self.user_reward_account.reload()?;
        self.escrow_account.reload()?;
        self.reward_mint.reload()?;
        self.balances()
    }
}

impl<'info> Unstake<'info> {
    pub fn user_reward(&self) -> Result<TokenAccount> {
        let account = read_token_account(&self.user_reward_account)?;
        require_keys_eq!(account.mint, self.config.reward_mint, CustomErrorCode::WrongMint);
        require_keys_eq!(account.owner, self.user.key(), CustomErrorCode::WrongAccount);
        Ok(account)
    }

    pub fn balances(&self) -> Result<ExchangeBalances> {
        Ok(ExchangeBalances {
            user_collateral: self.user_collateral_account.amount,
            user_reward: self.user_reward()?.amount,
            escrow: self.escrow_account.amount,
            reward_supply: self.reward_mint.supply,
        })
    }

    pub fn reload_balances(&mut self) -> Result<ExchangeBalances> {
        self.user_collateral_account.reload()?;
        self.escrow_account.reload()?;
        self.reward_mint.reload()?;
        self.balances()
    }
}
