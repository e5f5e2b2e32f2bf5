use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::StagepassError;
use crate::state::{CreateEventParams, EventLedger, LedgerKind, Registry};
use crate::utils::{validate_event_name, validate_uri};

#[derive(Accounts)]
#[instruction(params: CreateEventParams)]
pub struct CreateEvent<'info> {
    #[account(mut)]
    pub platform_signer: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        init,
        payer = platform_signer,
        space = 8 + EventLedger::SIZE,
        seeds = [
            EVENT_SEED,
            params.organizer.as_ref(),
            registry.total_events.to_le_bytes().as_ref(),
            &[params.kind as u8],
        ],
        bump
    )]
    pub event_ledger: Account<'info, EventLedger>,

    pub system_program: Program<'info, System>,
}

pub fn create_event(ctx: Context<CreateEvent>, params: CreateEventParams) -> Result<()> {
    let registry = &ctx.accounts.registry;
    registry.assert_platform_signer(&ctx.accounts.platform_signer.key())?;
    registry.assert_not_paused()?;
    require!(
        params.organizer != Pubkey::default(),
        StagepassError::InvalidAddress
    );
    validate_event_name(&params.name)?;
    validate_uri(&params.base_uri)?;
    require!(
        params.max_supply > 0 && params.max_supply <= MAX_TICKET_SUPPLY,
        StagepassError::InvalidSupply
    );

    // Capture keys before mutable borrows
    let registry_key = registry.key();
    let ledger_key = ctx.accounts.event_ledger.key();
    let platform_signer = ctx.accounts.platform_signer.key();
    let template = registry.template_for(params.kind);
    let mint_signer = registry.mint_signer_default;

    let registry = &mut ctx.accounts.registry;
    let index = registry.record_event(ledger_key, params.organizer)?;

    let now = Clock::get()?.unix_timestamp;
    let ledger = &mut ctx.accounts.event_ledger;
    ledger.init_checked(
        registry_key,
        index,
        &params,
        &template,
        platform_signer,
        mint_signer,
        now,
        ctx.bumps.event_ledger,
    )?;

    emit!(EventCreated {
        registry: registry_key,
        ledger: ledger_key,
        organizer: params.organizer,
        kind: params.kind,
        index,
        max_supply: params.max_supply,
        payment_ref: params.payment_ref,
        timestamp: now,
    });

    msg!("Event ledger {} created at index {}", ledger_key, index);

    Ok(())
}

#[event]
pub struct EventCreated {
    pub registry: Pubkey,
    pub ledger: Pubkey,
    pub organizer: Pubkey,
    pub kind: LedgerKind,
    pub index: u64,
    pub max_supply: u32,
    pub payment_ref: [u8; 32],
    pub timestamp: i64,
}
