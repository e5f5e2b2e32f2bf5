use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::{EventLedger, TicketType};

#[derive(Accounts)]
pub struct IncreaseSupply<'info> {
    pub owner: Signer<'info>,

    #[account(mut)]
    pub event_ledger: Account<'info, EventLedger>,
}

#[derive(Accounts)]
#[instruction(type_id: u16)]
pub struct IncreaseTypeSupply<'info> {
    pub owner: Signer<'info>,

    pub event_ledger: Account<'info, EventLedger>,

    #[account(
        mut,
        seeds = [
            TICKET_TYPE_SEED,
            event_ledger.key().as_ref(),
            type_id.to_le_bytes().as_ref(),
        ],
        bump = ticket_type.bump,
    )]
    pub ticket_type: Account<'info, TicketType>,
}

pub fn increase_supply(ctx: Context<IncreaseSupply>, new_max_supply: u32) -> Result<()> {
    let ledger = &mut ctx.accounts.event_ledger;
    ledger.assert_active_phase()?;
    ledger.assert_owner(&ctx.accounts.owner.key())?;

    ledger.raise_supply_cap(new_max_supply)?;

    emit!(SupplyIncreased {
        ledger: ledger.key(),
        new_max_supply,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Max supply raised to {}", new_max_supply);

    Ok(())
}

pub fn increase_type_supply(
    ctx: Context<IncreaseTypeSupply>,
    type_id: u16,
    new_max_supply: u32,
) -> Result<()> {
    let ledger = &ctx.accounts.event_ledger;
    ledger.assert_active_phase()?;
    ledger.assert_owner(&ctx.accounts.owner.key())?;

    let ticket_type = &mut ctx.accounts.ticket_type;
    ticket_type.raise_supply_cap(new_max_supply)?;

    emit!(TypeSupplyIncreased {
        ledger: ledger.key(),
        type_id,
        new_max_supply,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Type {} max supply raised to {}", type_id, new_max_supply);

    Ok(())
}

#[event]
pub struct SupplyIncreased {
    pub ledger: Pubkey,
    pub new_max_supply: u32,
    pub timestamp: i64,
}

#[event]
pub struct TypeSupplyIncreased {
    pub ledger: Pubkey,
    pub type_id: u16,
    pub new_max_supply: u32,
    pub timestamp: i64,
}
