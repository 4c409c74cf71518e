//! Dispatch between the legacy SPL Token program and Token-2022.
//!
//! Both programs accept the same logical instructions (initialize account,
//! mint, checked transfer, burn) with different program ids and optional
//! per-account extension data. Everything outside this module is agnostic to
//! which one owns a given mint.

use crate::error::CustomErrorCode;
use crate::state::TOKEN_ACCOUNT_LEN;
use anchor_lang::prelude::*;
use anchor_spl::token;
use anchor_spl::token_2022::{self, spl_token_2022};
use anchor_spl::token_interface::{Mint, TokenAccount};
use spl_token_2022::extension::{BaseStateWithExtensions, ExtensionType, StateWithExtensions};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenStandard {
    Legacy,
    Extensions,
}

impl TokenStandard {
    pub fn from_program_id(program_id: &Pubkey) -> Result<Self> {
        if *program_id == token::ID {
            Ok(Self::Legacy)
        } else if *program_id == token_2022::ID {
            Ok(Self::Extensions)
        } else {
            msg!("Unsupported token program: {}", program_id);
            err!(CustomErrorCode::UnsupportedTokenProgram)
        }
    }

    pub fn program_id(self) -> Pubkey {
        match self {
            Self::Legacy => token::ID,
            Self::Extensions => token_2022::ID,
        }
    }

    /// Bytes needed for a token account of `mint`. Token-2022 mints may require
    /// extensions on every account that holds them (transfer fee amounts,
    /// transfer hook state, ...).
    pub fn account_space(self, mint: &AccountInfo) -> Result<usize> {
        match self {
            Self::Legacy => Ok(TOKEN_ACCOUNT_LEN),
            Self::Extensions => {
                let data = mint.try_borrow_data()?;
                let mint_state = StateWithExtensions::<spl_token_2022::state::Mint>::unpack(&data[..])?;
                let required = ExtensionType::get_required_init_account_extensions(
                    &mint_state.get_extension_types()?,
                );
                Ok(ExtensionType::try_calculate_account_len::<
                    spl_token_2022::state::Account,
                >(&required)?)
            }
        }
    }
}

/// Deserializes a token account that reached the instruction unchecked. Call it
/// only after `TokenProgram::resolve` has accepted the account's owner.
pub fn read_token_account(account: &AccountInfo) -> Result<TokenAccount> {
    let data = account.try_borrow_data()?;
    let state = TokenAccount::try_deserialize(&mut &data[..])?;
    Ok(state)
}

/// A token program account resolved to the standard it implements.
pub struct TokenProgram<'info> {
    pub standard: TokenStandard,
    program: AccountInfo<'info>,
}

impl<'info> TokenProgram<'info> {
    /// Resolves the standard from the program that owns `account`, and requires
    /// the instruction's token program to be that same program.
    pub fn resolve(account: &AccountInfo<'info>, program: &AccountInfo<'info>) -> Result<Self> {
        let standard = TokenStandard::from_program_id(account.owner)?;
        require_keys_eq!(*account.owner, *program.key, CustomErrorCode::WrongAccount);
        Ok(Self {
            standard,
            program: program.clone(),
        })
    }

    pub fn id(&self) -> Pubkey {
        self.standard.program_id()
    }

    /// Every token account and mint touched by one instruction must belong to the
    /// resolved program.
    pub fn require_owner_of(&self, account: &AccountInfo<'info>) -> Result<()> {
        require_keys_eq!(*account.owner, self.id(), CustomErrorCode::WrongAccount);
        Ok(())
    }

    pub fn account_space(&self, mint: &AccountInfo<'info>) -> Result<usize> {
        self.standard.account_space(mint)
    }

    pub fn initialize_account(
        &self,
        account: AccountInfo<'info>,
        mint: AccountInfo<'info>,
        authority: AccountInfo<'info>,
    ) -> Result<()> {
        let program = self.program.clone();
        match self.standard {
            TokenStandard::Legacy => token::initialize_account3(CpiContext::new(
                program,
                token::InitializeAccount3 {
                    account,
                    mint,
                    authority,
                },
            )),
            TokenStandard::Extensions => token_2022::initialize_account3(CpiContext::new(
                program,
                token_2022::InitializeAccount3 {
                    account,
                    mint,
                    authority,
                },
            )),
        }
    }

    pub fn mint_to(
        &self,
        mint: AccountInfo<'info>,
        to: AccountInfo<'info>,
        authority: AccountInfo<'info>,
        signer_seeds: &[&[&[u8]]],
        amount: u64,
    ) -> Result<()> {
        let program = self.program.clone();
        match self.standard {
            TokenStandard::Legacy => token::mint_to(
                CpiContext::new_with_signer(
                    program,
                    token::MintTo {
                        mint,
                        to,
                        authority,
                    },
                    signer_seeds,
                ),
                amount,
            ),
            TokenStandard::Extensions => token_2022::mint_to(
                CpiContext::new_with_signer(
                    program,
                    token_2022::MintTo {
                        mint,
                        to,
                        authority,
                    },
                    signer_seeds,
                ),
                amount,
            ),
        }
    }

    pub fn transfer(
        &self,
        from: AccountInfo<'info>,
        mint: &InterfaceAccount<'info, Mint>,
        to: AccountInfo<'info>,
        authority: AccountInfo<'info>,
        signer_seeds: &[&[&[u8]]],
        amount: u64,
    ) -> Result<()> {
        let program = self.program.clone();
        let decimals = mint.decimals;
        let mint = mint.to_account_info();
        match self.standard {
            TokenStandard::Legacy => token::transfer_checked(
                CpiContext::new_with_signer(
                    program,
                    token::TransferChecked {
                        from,
                        mint,
                        to,
                        authority,
                    },
                    signer_seeds,
                ),
                amount,
                decimals,
            ),
            TokenStandard::Extensions => token_2022::transfer_checked(
                CpiContext::new_with_signer(
                    program,
                    token_2022::TransferChecked {
                        from,
                        mint,
                        to,
                        authority,
                    },
                    signer_seeds,
                ),
                amount,
                decimals,
            ),
        }
    }

    pub fn burn(
        &self,
        mint: AccountInfo<'info>,
        from: AccountInfo<'info>,
        authority: AccountInfo<'info>,
        amount: u64,
    ) -> Result<()> {
        let program = self.program.clone();
        match self.standard {
            TokenStandard::Legacy => token::burn(
                CpiContext::new(
                    program,
                    token::Burn {
                        mint,
                        from,
                        authority,
                    },
                ),
                amount,
            ),
            TokenStandard::Extensions => token_2022::burn(
                CpiContext::new(
                    program,
                    token_2022::Burn {
                        mint,
                        from,
                        authority,
                    },
                ),
                amount,
            ),
        }
    }
}
