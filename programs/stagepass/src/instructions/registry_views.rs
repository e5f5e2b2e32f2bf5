use anchor_lang::prelude::*;
use crate::constants::REGISTRY_SEED;
use crate::state::{EventEntry, LedgerKind, Registry};

#[derive(Accounts)]
pub struct RegistryView<'info> {
    #[account(seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Account<'info, Registry>,
}

pub fn total_events(ctx: Context<RegistryView>) -> Result<u64> {
    Ok(ctx.accounts.registry.total_events)
}

pub fn get_events(ctx: Context<RegistryView>, offset: u64, limit: u64) -> Result<Vec<EventEntry>> {
    Ok(ctx.accounts.registry.events_page(offset, limit))
}

pub fn predict_event_address(
    ctx: Context<RegistryView>,
    kind: LedgerKind,
    organizer: Pubkey,
) -> Result<Pubkey> {
    let registry = &ctx.accounts.registry;
    Ok(Registry::derive_event_address(
        ctx.program_id,
        kind,
        &organizer,
        registry.total_events,
    ))
}

pub fn registry_balance(ctx: Context<RegistryView>) -> Result<u64> {
    Ok(ctx.accounts.registry.to_account_info().lamports())
}
