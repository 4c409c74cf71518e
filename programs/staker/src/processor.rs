use crate::account_structs::*;
use crate::authority::{
    reward_mint_authority_address, verify_escrow, verify_reward_mint_authority,
    REWARD_MINT_AUTHORITY_SEED,
};
use crate::error::*;
use crate::events::*;
use crate::guard::require_upgrade_authority;
use crate::token_standard::{read_token_account, TokenProgram, TokenStandard};
use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount};

pub fn initialize(
    ctx: Context<Initialize>,
    collateral_mint: Pubkey,
    reward_mint: Pubkey,
) -> Result<()> {
    require_upgrade_authority(&ctx.accounts.program_data, &ctx.accounts.signer)?;
    require!(
        collateral_mint != reward_mint,
        CustomErrorCode::CollateralAndRewardMintCannotBeSame
    );
    require_keys_eq!(
        ctx.accounts.collateral_mint.key(),
        collateral_mint,
        CustomErrorCode::WrongMint
    );
    require_keys_eq!(
        ctx.accounts.reward_mint.key(),
        reward_mint,
        CustomErrorCode::WrongMint
    );

    // stake and unstake take a single token program, so both mints must live under it.
    let collateral_standard =
        TokenStandard::from_program_id(ctx.accounts.collateral_mint.to_account_info().owner)?;
    let reward_standard =
        TokenStandard::from_program_id(ctx.accounts.reward_mint.to_account_info().owner)?;
    require!(
        collateral_standard == reward_standard,
        CustomErrorCode::WrongAccount
    );

    // No one but this program may ever mint the reward token.
    let (reward_mint_authority, _) = reward_mint_authority_address(ctx.program_id);
    require!(
        ctx.accounts.reward_mint.mint_authority == Some(reward_mint_authority).into(),
        CustomErrorCode::InvalidMintAuthority
    );

    let config = &mut ctx.accounts.config;
    config.collateral_mint = collateral_mint;
    config.reward_mint = reward_mint;
    config.paused = false;
    config.bump = ctx.bumps.config;

    msg!(
        "Initialized with collateral mint {} and reward mint {} ({:?})",
        collateral_mint,
        reward_mint,
        collateral_standard
    );

    Ok(())
}

pub fn pause(ctx: Context<Pause>, paused: bool) -> Result<()> {
    require_upgrade_authority(&ctx.accounts.program_data, &ctx.accounts.signer)?;
    ctx.accounts.config.paused = paused;

    msg!("Protocol paused: {}", paused);
    emit!(ProtocolPauseUpdated {
        admin: ctx.accounts.signer.key(),
        paused,
    });

    Ok(())
}

pub fn create_escrow_account(ctx: Context<CreateEscrowAccount>, bump_escrow: u8) -> Result<()> {
    let collateral_mint = ctx.accounts.collateral_mint.key();
    let mint_info = ctx.accounts.collateral_mint.to_account_info();
    let escrow = ctx.accounts.escrow_account.to_account_info();

    // Everything is validated before the payer is charged.
    verify_escrow(ctx.program_id, &collateral_mint, bump_escrow, escrow.key)?;
    let token_program =
        TokenProgram::resolve(&mint_info, &ctx.accounts.token_program.to_account_info())?;

    if *escrow.owner != system_program::ID {
        token_program.require_owner_of(&escrow)?;
        let existing = read_token_account(&escrow)?;
        require_keys_eq!(existing.mint, collateral_mint, CustomErrorCode::WrongMint);
        require_keys_eq!(existing.owner, escrow.key(), CustomErrorCode::WrongAccount);

        msg!(
            "Escrow account {} already exists with balance {}",
            escrow.key,
            existing.amount
        );
        emit!(EscrowAccountReady {
            escrow: escrow.key(),
            mint: collateral_mint,
            payer: ctx.accounts.payer.key(),
            balance: existing.amount,
            created: false,
        });
        return Ok(());
    }

    let space = token_program.account_space(&mint_info)?;
    let rent = Rent::get()?.minimum_balance(space);
    let owner = token_program.id();
    let seeds: &[&[u8]] = &[collateral_mint.as_ref(), &[bump_escrow]];
    let signer = &[&seeds[..]];
    let system = ctx.accounts.system_program.to_account_info();
    let payer = ctx.accounts.payer.to_account_info();

    let funded = escrow.lamports();
    if funded == 0 {
        system_program::create_account(
            CpiContext::new_with_signer(
                system.clone(),
                CreateAccount {
                    from: payer,
                    to: escrow.clone(),
                },
                signer,
            ),
            rent,
            space as u64,
            &owner,
        )?;
    } else {
        // Someone sent lamports to the PDA ahead of time; create_account would refuse it.
        let shortfall = rent.saturating_sub(funded);
        if shortfall > 0 {
            system_program::transfer(
                CpiContext::new(
                    system.clone(),
                    system_program::Transfer {
                        from: payer,
                        to: escrow.clone(),
                    },
                ),
                shortfall,
            )?;
        }
        system_program::allocate(
            CpiContext::new_with_signer(
                system.clone(),
                Allocate {
                    account_to_allocate: escrow.clone(),
                },
                signer,
            ),
            space as u64,
        )?;
        system_program::assign(
            CpiContext::new_with_signer(
                system,
                Assign {
                    account_to_assign: escrow.clone(),
                },
                signer,
            ),
            &owner,
        )?;
    }

    // The escrow is its own authority: only this program, signing with the escrow
    // seeds, can move collateral out.
    token_program.initialize_account(escrow.clone(), mint_info, escrow.clone())?;

    msg!(
        "Created escrow account {} for mint {} ({} bytes, {:?})",
        escrow.key,
        collateral_mint,
        space,
        token_program.standard
    );
    emit!(EscrowAccountReady {
        escrow: escrow.key(),
        mint: collateral_mint,
        payer: ctx.accounts.payer.key(),
        balance: 0,
        created: true,
    });

    Ok(())
}

pub fn stake(ctx: Context<Stake>, bump_mint: u8, bump_escrow: u8, amount: u64) -> Result<()> {
    require!(!ctx.accounts.config.paused, CustomErrorCode::ProtocolPaused);

    let collateral_mint = ctx.accounts.collateral_mint.key();
    verify_reward_mint_authority(
        ctx.program_id,
        bump_mint,
        &ctx.accounts.reward_mint_authority.key(),
    )?;
    verify_escrow(
        ctx.program_id,
        &collateral_mint,
        bump_escrow,
        &ctx.accounts.escrow_account.key(),
    )?;

    let token_program = TokenProgram::resolve(
        &ctx.accounts.user_collateral_account.to_account_info(),
        &ctx.accounts.token_program.to_account_info(),
    )?;
    for account in [
        ctx.accounts.reward_mint.to_account_info(),
        ctx.accounts.user_reward_account.to_account_info(),
        ctx.accounts.escrow_account.to_account_info(),
        ctx.accounts.collateral_mint.to_account_info(),
    ] {
        token_program.require_owner_of(&account)?;
    }

    let planned = ctx.accounts.balances()?.after_stake(amount)?;

    let accounts = &ctx.accounts;
    let seeds: &[&[u8]] = &[REWARD_MINT_AUTHORITY_SEED, &[bump_mint]];
    let signer = &[&seeds[..]];
    token_program.mint_to(
        accounts.reward_mint.to_account_info(),
        accounts.user_reward_account.to_account_info(),
        accounts.reward_mint_authority.to_account_info(),
        signer,
        amount,
    )?;

    token_program.transfer(
        accounts.user_collateral_account.to_account_info(),
        &accounts.collateral_mint,
        accounts.escrow_account.to_account_info(),
        accounts.user.to_account_info(),
        &[],
        amount,
    )?;

    let observed = ctx.accounts.reload_balances()?;
    planned.verify(&observed)?;

    emit!(StakeEvent {
        user: ctx.accounts.user.key(),
        amount,
        collateral_mint,
        reward_mint: ctx.accounts.reward_mint.key(),
        escrow: ctx.accounts.escrow_account.key(),
    });

    Ok(())
}

pub fn unstake(ctx: Context<Unstake>, bump_escrow: u8, amount: u64) -> Result<()> {
    require!(!ctx.accounts.config.paused, CustomErrorCode::ProtocolPaused);

    let collateral_mint = ctx.accounts.collateral_mint.key();
    verify_escrow(
        ctx.program_id,
        &collateral_mint,
        bump_escrow,
        &ctx.accounts.escrow_account.key(),
    )?;

    let token_program = TokenProgram::resolve(
        &ctx.accounts.user_reward_account.to_account_info(),
        &ctx.accounts.token_program.to_account_info(),
    )?;
    for account in [
        ctx.accounts.reward_mint.to_account_info(),
        ctx.accounts.user_collateral_account.to_account_info(),
        ctx.accounts.escrow_account.to_account_info(),
        ctx.accounts.collateral_mint.to_account_info(),
    ] {
        token_program.require_owner_of(&account)?;
    }

    let planned = ctx.accounts.balances()?.after_unstake(amount)?;

    let accounts = &ctx.accounts;
    token_program.burn(
        accounts.reward_mint.to_account_info(),
        accounts.user_reward_account.to_account_info(),
        accounts.user.to_account_info(),
        amount,
    )?;

    let seeds: &[&[u8]] = &[collateral_mint.as_ref(), &[bump_escrow]];
    let signer = &[&seeds[..]];
    token_program.transfer(
        accounts.escrow_account.to_account_info(),
        &accounts.collateral_mint,
        accounts.user_collateral_account.to_account_info(),
        accounts.escrow_account.to_account_info(),
        signer,
        amount,
    )?;

    let observed = ctx.accounts.reload_balances()?;
    planned.verify(&observed)?;

    emit!(UnstakeEvent {
        user: ctx.accounts.user.key(),
        amount,
        collateral_mint,
        reward_mint: ctx.accounts.reward_mint.key(),
        escrow: ctx.accounts.escrow_account.key(),
    });

    Ok(())
}
