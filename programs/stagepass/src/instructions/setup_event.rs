use anchor_lang::prelude::*;
use crate::state::EventLedger;
use crate::utils::validate_uri;

#[derive(Accounts)]
pub struct SetupEvent<'info> {
    pub platform_signer: Signer<'info>,

    #[account(mut)]
    pub event_ledger: Account<'info, EventLedger>,
}

pub fn enable_sale(ctx: Context<SetupEvent>) -> Result<()> {
    let ledger = &mut ctx.accounts.event_ledger;
    ledger.assert_setup_op(&ctx.accounts.platform_signer.key())?;

    ledger.sale_active = true;

    emit!(SaleEnabled {
        ledger: ledger.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });
    msg!("Sale enabled");
    Ok(())
}

pub fn set_base_uri(ctx: Context<SetupEvent>, base_uri: String) -> Result<()> {
    let ledger = &mut ctx.accounts.event_ledger;
    ledger.assert_setup_op(&ctx.accounts.platform_signer.key())?;
    validate_uri(&base_uri)?;

    ledger.base_uri = base_uri.clone();

    emit!(BaseUriSet {
        ledger: ledger.key(),
        base_uri,
        timestamp: Clock::get()?.unix_timestamp,
    });
    msg!("Base URI set");
    Ok(())
}

/// Hands the ledger from the platform's setup window to the owner.
/// There is no way back.
pub fn complete_setup(ctx: Context<SetupEvent>) -> Result<()> {
    let ledger = &mut ctx.accounts.event_ledger;
    ledger.assert_setup_op(&ctx.accounts.platform_signer.key())?;

    ledger.complete_setup();

    emit!(SetupCompleted {
        ledger: ledger.key(),
        owner: ledger.roles.owner,
        timestamp: Clock::get()?.unix_timestamp,
    });
    msg!("Setup complete, ledger is active");
    Ok(())
}

#[event]
pub struct SaleEnabled {
    pub ledger: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct BaseUriSet {
    pub ledger: Pubkey,
    pub base_uri: String,
    pub timestamp: i64,
}

#[event]
pub struct SetupCompleted {
    pub ledger: Pubkey,
    pub owner: Pubkey,
    pub timestamp: i64,
}
