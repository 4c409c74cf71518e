//! Token state written straight into the test ledger.
//!
//! Mints and user accounts use the base layouts, which SPL Token and Token-2022
//! both accept; only the owning program differs.

use anchor_lang::solana_program::program_option::COption;
use anchor_lang::solana_program::program_pack::Pack;
use anchor_spl::token_2022::spl_token_2022::state::{Account as TokenState, AccountState, Mint};
use litesvm::LiteSVM;
use solana_sdk::account::Account;
use solana_sdk::pubkey::Pubkey;

pub fn create_mint(
    svm: &mut LiteSVM,
    token_program: &Pubkey,
    authority: &Pubkey,
    decimals: u8,
) -> Pubkey {
    let mint = Pubkey::new_unique();
    let mut data = vec![0u8; Mint::LEN];
    Mint::pack(
        Mint {
            mint_authority: COption::Some(*authority),
            supply: 0,
            decimals,
            is_initialized: true,
            freeze_authority: COption::None,
        },
        &mut data,
    )
    .unwrap();

    write_account(svm, mint, data, token_program);
    mint
}

pub fn create_token_account(
    svm: &mut LiteSVM,
    token_program: &Pubkey,
    mint: &Pubkey,
    owner: &Pubkey,
    amount: u64,
) -> Pubkey {
    let address = Pubkey::new_unique();
    let mut data = vec![0u8; TokenState::LEN];
    TokenState::pack(
        TokenState {
            mint: *mint,
            owner: *owner,
            amount,
            delegate: COption::None,
            state: AccountState::Initialized,
            is_native: COption::None,
            delegated_amount: 0,
            close_authority: COption::None,
        },
        &mut data,
    )
    .unwrap();

    write_account(svm, address, data, token_program);
    address
}

/// Hand an existing account to another program, keeping its data.
pub fn reassign(svm: &mut LiteSVM, address: &Pubkey, owner: &Pubkey) {
    let mut account = svm.get_account(address).expect("account exists");
    account.owner = *owner;
    svm.set_account(*address, account).unwrap();
}

pub fn token_state(svm: &LiteSVM, address: &Pubkey) -> TokenState {
    let account = svm.get_account(address).expect("token account exists");
    TokenState::unpack(&account.data[..TokenState::LEN]).unwrap()
}

pub fn token_balance(svm: &LiteSVM, address: &Pubkey) -> u64 {
    token_state(svm, address).amount
}

pub fn mint_supply(svm: &LiteSVM, mint: &Pubkey) -> u64 {
    let account = svm.get_account(mint).expect("mint exists");
    Mint::unpack(&account.data[..Mint::LEN]).unwrap().supply
}

fn write_account(svm: &mut LiteSVM, address: Pubkey, data: Vec<u8>, owner: &Pubkey) {
    let account = Account {
        lamports: svm.minimum_balance_for_rent_exemption(data.len()),
        data,
        owner: *owner,
        executable: false,
        rent_epoch: 0,
    };
    svm.set_account(address, account).unwrap();
}
