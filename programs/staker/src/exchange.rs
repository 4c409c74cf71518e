//! Balance bookkeeping for the 1:1 collateral/reward exchange.
//!
//! Both transitions are planned here with checked arithmetic before any token
//! CPI runs. After the CPIs the processor reloads the accounts and compares
//! what landed against the plan.

use crate::error::CustomErrorCode;
use anchor_lang::prelude::*;

/// Every balance a single exchange touches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExchangeBalances {
    pub user_collateral: u64,
    pub user_reward: u64,
    pub escrow: u64,
    pub reward_supply: u64,
}

impl ExchangeBalances {
    /// Collateral moves from the user into escrow; the same amount of reward is minted.
    pub fn after_stake(&self, amount: u64) -> Result<Self> {
        require!(
            self.user_collateral >= amount,
            CustomErrorCode::InsufficientFunds
        );

        Ok(Self {
            user_collateral: self
                .user_collateral
                .checked_sub(amount)
                .ok_or(CustomErrorCode::Underflow)?,
            user_reward: self
                .user_reward
                .checked_add(amount)
                .ok_or(CustomErrorCode::Overflow)?,
            escrow: self
                .escrow
                .checked_add(amount)
                .ok_or(CustomErrorCode::Overflow)?,
            reward_supply: self
                .reward_supply
                .checked_add(amount)
                .ok_or(CustomErrorCode::Overflow)?,
        })
    }

    /// Reward is burned from the user; the same amount of collateral leaves escrow.
    pub fn after_unstake(&self, amount: u64) -> Result<Self> {
        require!(self.user_reward >= amount, CustomErrorCode::InsufficientFunds);
        // Unreachable while the 1:1 invariant holds, but never assumed.
        require!(self.escrow >= amount, CustomErrorCode::InsufficientFunds);

        Ok(Self {
            user_collateral: self
                .user_collateral
                .checked_add(amount)
                .ok_or(CustomErrorCode::Overflow)?,
            user_reward: self
                .user_reward
                .checked_sub(amount)
                .ok_or(CustomErrorCode::Underflow)?,
            escrow: self
                .escrow
                .checked_sub(amount)
                .ok_or(CustomErrorCode::Underflow)?,
            reward_supply: self
                .reward_supply
                .checked_sub(amount)
                .ok_or(CustomErrorCode::Underflow)?,
        })
    }

    pub fn verify(&self, observed: &Self) -> Result<()> {
        if self != observed {
            msg!("Planned balances {:?}, observed {:?}", self, observed);
            return err!(CustomErrorCode::BalanceMismatch);
        }
        Ok(())
    }
}
