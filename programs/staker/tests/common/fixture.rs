//! A deployed staker program with its two mints, driven one instruction at a time.

use litesvm::types::TransactionResult;
use litesvm::LiteSVM;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use staker::authority::{escrow_address, reward_mint_authority_address};
use staker::exchange::ExchangeBalances;

use super::instructions::*;
use super::mock_accounts::*;
use super::setup::*;

pub const DECIMALS: u8 = 6;

pub struct User {
    pub keypair: Keypair,
    pub collateral: Pubkey,
    pub reward: Pubkey,
}

pub struct Exchange {
    pub svm: LiteSVM,
    pub admin: Keypair,
    pub token_program: Pubkey,
    pub collateral_mint: Pubkey,
    pub reward_mint: Pubkey,
}

impl Exchange {
    /// Program deployed and both mints created under `token_program`, with the
    /// reward mint already handed to the mint authority PDA. Not initialized.
    pub fn deployed(token_program: Pubkey) -> Self {
        let mut svm = LiteSVM::new();
        deploy_staker_program(&mut svm);

        let admin = Keypair::new();
        svm.airdrop(&admin.pubkey(), 10_000_000_000).unwrap();
        set_upgrade_authority(&mut svm, Some(admin.pubkey()));

        let (mint_authority, _) = reward_mint_authority_address(&staker::ID);
        let collateral_mint = create_mint(&mut svm, &token_program, &admin.pubkey(), DECIMALS);
        let reward_mint = create_mint(&mut svm, &token_program, &mint_authority, DECIMALS);

        Self {
            svm,
            admin,
            token_program,
            collateral_mint,
            reward_mint,
        }
    }

    /// Initialized, escrow not provisioned yet.
    pub fn initialized(token_program: Pubkey) -> Self {
        let mut exchange = Self::deployed(token_program);
        exchange.initialize().expect("initialize");
        exchange
    }

    /// Initialized with the escrow account in place.
    pub fn ready(token_program: Pubkey) -> Self {
        let mut exchange = Self::initialized(token_program);
        exchange.provision_escrow().expect("create escrow account");
        exchange
    }

    pub fn initialize(&mut self) -> TransactionResult {
        let ix = initialize_ix(&self.admin.pubkey(), &self.collateral_mint, &self.reward_mint);
        send(&mut self.svm, ix, &[&self.admin])
    }

    pub fn pause(&mut self, paused: bool) -> TransactionResult {
        let ix = pause_ix(&self.admin.pubkey(), paused);
        send(&mut self.svm, ix, &[&self.admin])
    }

    pub fn escrow(&self) -> (Pubkey, u8) {
        escrow_address(&staker::ID, &self.collateral_mint)
    }

    pub fn provision_escrow(&mut self) -> TransactionResult {
        let (_, bump) = self.escrow();
        self.provision_escrow_with_bump(bump)
    }

    pub fn provision_escrow_with_bump(&mut self, bump_escrow: u8) -> TransactionResult {
        let ix = create_escrow_account_ix(
            &self.admin.pubkey(),
            &self.collateral_mint,
            &self.token_program,
            bump_escrow,
        );
        send(&mut self.svm, ix, &[&self.admin])
    }

    /// A funded user holding `collateral` collateral tokens and an empty reward account.
    pub fn new_user(&mut self, collateral: u64) -> User {
        let keypair = Keypair::new();
        self.svm.airdrop(&keypair.pubkey(), 1_000_000_000).unwrap();
        let collateral = create_token_account(
            &mut self.svm,
            &self.token_program,
            &self.collateral_mint,
            &keypair.pubkey(),
            collateral,
        );
        let reward = create_token_account(
            &mut self.svm,
            &self.token_program,
            &self.reward_mint,
            &keypair.pubkey(),
            0,
        );
        User {
            keypair,
            collateral,
            reward,
        }
    }

    pub fn accounts_for(&self, user: &User) -> ExchangeAccounts {
        ExchangeAccounts {
            user: user.keypair.pubkey(),
            user_collateral: user.collateral,
            user_reward: user.reward,
            collateral_mint: self.collateral_mint,
            reward_mint: self.reward_mint,
            token_program: self.token_program,
        }
    }

    pub fn stake(&mut self, user: &User, amount: u64) -> TransactionResult {
        let (_, bump_mint) = reward_mint_authority_address(&staker::ID);
        let (_, bump_escrow) = self.escrow();
        self.stake_with_bumps(user, bump_mint, bump_escrow, amount)
    }

    pub fn stake_with_bumps(
        &mut self,
        user: &User,
        bump_mint: u8,
        bump_escrow: u8,
        amount: u64,
    ) -> TransactionResult {
        let ix = stake_ix(&self.accounts_for(user), bump_mint, bump_escrow, amount);
        send(&mut self.svm, ix, &[&user.keypair])
    }

    pub fn unstake(&mut self, user: &User, amount: u64) -> TransactionResult {
        let (_, bump_escrow) = self.escrow();
        self.unstake_with_bump(user, bump_escrow, amount)
    }

    pub fn unstake_with_bump(&mut self, user: &User, bump_escrow: u8, amount: u64) -> TransactionResult {
        let ix = unstake_ix(&self.accounts_for(user), bump_escrow, amount);
        send(&mut self.svm, ix, &[&user.keypair])
    }

    pub fn balances(&self, user: &User) -> ExchangeBalances {
        ExchangeBalances {
            user_collateral: token_balance(&self.svm, &user.collateral),
            user_reward: token_balance(&self.svm, &user.reward),
            escrow: token_balance(&self.svm, &self.escrow().0),
            reward_supply: mint_supply(&self.svm, &self.reward_mint),
        }
    }
}
