use anchor_lang::prelude::*;
use crate::state::{EventLedger, LedgerActor};

#[derive(Accounts)]
pub struct CloseEvent<'info> {
    pub signer: Signer<'info>,

    #[account(mut)]
    pub event_ledger: Account<'info, EventLedger>,
}

pub fn cancel_event(ctx: Context<CloseEvent>) -> Result<()> {
    let ledger = &mut ctx.accounts.event_ledger;
    let signer_key = ctx.accounts.signer.key();

    ledger.assert_active_phase()?;
    let actor = ledger.resolve_lifecycle_actor(&signer_key)?;
    ledger.cancel(actor)?;

    emit!(LedgerCanceled {
        ledger: ledger.key(),
        actor: signer_key,
        by_platform: actor == LedgerActor::Platform,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Event canceled");

    Ok(())
}

pub fn end_event(ctx: Context<CloseEvent>) -> Result<()> {
    let ledger = &mut ctx.accounts.event_ledger;
    let signer_key = ctx.accounts.signer.key();

    ledger.assert_active_phase()?;
    let actor = ledger.resolve_lifecycle_actor(&signer_key)?;
    ledger.end(actor)?;

    emit!(LedgerEnded {
        ledger: ledger.key(),
        actor: signer_key,
        by_platform: actor == LedgerActor::Platform,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Event ended");

    Ok(())
}

#[event]
pub struct LedgerCanceled {
    pub ledger: Pubkey,
    pub actor: Pubkey,
    pub by_platform: bool,
    pub timestamp: i64,
}

#[event]
pub struct LedgerEnded {
    pub ledger: Pubkey,
    pub actor: Pubkey,
    pub by_platform: bool,
    pub timestamp: i64,
}
