use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::{EventLedger, TicketType};
use crate::utils::{validate_name, validate_uri};

// Post-setup twin of define_ticket_type: the owner grows the type table
// after the platform has handed the ledger over.
#[derive(Accounts)]
#[instruction(type_id: u16)]
pub struct AddTicketType<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(mut)]
    pub event_ledger: Account<'info, EventLedger>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + TicketType::SIZE,
        seeds = [
            TICKET_TYPE_SEED,
            event_ledger.key().as_ref(),
            type_id.to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub ticket_type: Account<'info, TicketType>,

    pub system_program: Program<'info, System>,
}

pub fn add_ticket_type(
    ctx: Context<AddTicketType>,
    type_id: u16,
    name: String,
    zone_level: u8,
    max_supply: u32,
    uri: String,
) -> Result<()> {
    let ledger = &ctx.accounts.event_ledger;
    ledger.assert_active_phase()?;
    ledger.assert_owner(&ctx.accounts.owner.key())?;
    validate_name(&name, MAX_TYPE_NAME)?;
    validate_uri(&uri)?;

    let ledger_key = ledger.key();
    let ticket_type = &mut ctx.accounts.ticket_type;
    ticket_type.define(
        ledger_key,
        type_id,
        name.clone(),
        zone_level,
        max_supply,
        uri,
        ctx.bumps.ticket_type,
    )?;

    let ledger = &mut ctx.accounts.event_ledger;
    ledger.register_type()?;

    emit!(TicketTypeAdded {
        ledger: ledger_key,
        type_id,
        name,
        zone_level,
        max_supply,
        timestamp: Clock::get()?.unix_timestamp,
    });
    msg!("Ticket type {} added", type_id);
    Ok(())
}

#[event]
pub struct TicketTypeAdded {
    pub ledger: Pubkey,
    pub type_id: u16,
    pub name: String,
    pub zone_level: u8,
    pub max_supply: u32,
    pub timestamp: i64,
}
