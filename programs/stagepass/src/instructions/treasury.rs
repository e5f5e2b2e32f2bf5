use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::StagepassError;
use crate::state::Registry;
use crate::utils::{safe_add, safe_sub};

#[derive(Accounts)]
pub struct DepositTreasury<'info> {
    #[account(mut)]
    pub multisig: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct WithdrawTreasury<'info> {
    pub multisig: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// CHECK: Destination wallet chosen by the multisig
    #[account(mut)]
    pub destination: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct FundSigner<'info> {
    pub multisig: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// CHECK: Must be the registry's platform signer wallet
    #[account(
        mut,
        address = registry.platform_signer @ StagepassError::InvalidAddress,
    )]
    pub platform_signer_wallet: UncheckedAccount<'info>,
}

pub fn deposit_treasury(ctx: Context<DepositTreasury>, amount: u64) -> Result<()> {
    ctx.accounts
        .registry
        .assert_multisig(&ctx.accounts.multisig.key())?;
    require!(amount > 0, StagepassError::InvalidAmount);

    let transfer = anchor_lang::system_program::Transfer {
        from: ctx.accounts.multisig.to_account_info(),
        to: ctx.accounts.registry.to_account_info(),
    };
    anchor_lang::system_program::transfer(
        CpiContext::new(ctx.accounts.system_program.to_account_info(), transfer),
        amount,
    )?;

    let registry = &mut ctx.accounts.registry;
    registry.total_deposited = safe_add(registry.total_deposited, amount)?;

    emit!(TreasuryDeposited {
        registry: registry.key(),
        from: ctx.accounts.multisig.key(),
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });
    msg!("Treasury deposit: {} lamports", amount);
    Ok(())
}

pub fn withdraw_treasury(ctx: Context<WithdrawTreasury>, amount: u64) -> Result<()> {
    ctx.accounts
        .registry
        .assert_multisig(&ctx.accounts.multisig.key())?;
    require!(amount > 0, StagepassError::InvalidAmount);
    require!(
        ctx.accounts.destination.key() != Pubkey::default(),
        StagepassError::InvalidAddress
    );

    pay_out(
        &ctx.accounts.registry,
        &ctx.accounts.destination.to_account_info(),
        amount,
    )?;

    let registry = &mut ctx.accounts.registry;
    registry.total_withdrawn = safe_add(registry.total_withdrawn, amount)?;

    emit!(TreasuryWithdrawn {
        registry: registry.key(),
        destination: ctx.accounts.destination.key(),
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });
    msg!("Treasury withdrawal: {} lamports", amount);
    Ok(())
}

pub fn fund_signer(ctx: Context<FundSigner>, amount: u64) -> Result<()> {
    ctx.accounts
        .registry
        .assert_multisig(&ctx.accounts.multisig.key())?;
    require!(amount > 0, StagepassError::InvalidAmount);

    pay_out(
        &ctx.accounts.registry,
        &ctx.accounts.platform_signer_wallet.to_account_info(),
        amount,
    )?;

    let registry = &mut ctx.accounts.registry;
    registry.total_withdrawn = safe_add(registry.total_withdrawn, amount)?;

    emit!(SignerFunded {
        registry: registry.key(),
        destination: ctx.accounts.platform_signer_wallet.key(),
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });
    msg!("Platform signer funded: {} lamports", amount);
    Ok(())
}

// The registry PDA owns data, so outbound transfers are direct lamport
// moves. The rent-exempt floor must survive every withdrawal.
fn pay_out<'info>(
    registry: &Account<'info, Registry>,
    destination: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let registry_info = registry.to_account_info();
    let rent_floor = Rent::get()?.minimum_balance(registry_info.data_len());
    let remaining = safe_sub(registry_info.lamports(), amount)?;
    require!(remaining >= rent_floor, StagepassError::InsufficientFunds);

    **registry_info.try_borrow_mut_lamports()? = remaining;
    let dest_balance = destination
        .lamports()
        .checked_add(amount)
        .ok_or(StagepassError::MathOverflow)?;
    **destination.try_borrow_mut_lamports()? = dest_balance;
    Ok(())
}

#[event]
pub struct TreasuryDeposited {
    pub registry: Pubkey,
    pub from: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct TreasuryWithdrawn {
    pub registry: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct SignerFunded {
    pub registry: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
