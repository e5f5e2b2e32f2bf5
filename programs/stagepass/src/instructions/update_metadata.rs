use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::{EventLedger, Ticket, TicketType};
use crate::utils::validate_uri;

#[derive(Accounts)]
pub struct SetTokenUri<'info> {
    pub owner: Signer<'info>,

    pub event_ledger: Account<'info, EventLedger>,

    #[account(
        mut,
        seeds = [
            TICKET_SEED,
            event_ledger.key().as_ref(),
            ticket.ticket_id.to_le_bytes().as_ref(),
        ],
        bump = ticket.bump,
    )]
    pub ticket: Account<'info, Ticket>,
}

#[derive(Accounts)]
#[instruction(type_id: u16)]
pub struct SetTypeUri<'info> {
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

#[derive(Accounts)]
pub struct UpdateBaseUri<'info> {
    pub owner: Signer<'info>,

    #[account(mut)]
    pub event_ledger: Account<'info, EventLedger>,
}

pub fn set_token_uri(ctx: Context<SetTokenUri>, uri: String) -> Result<()> {
    let ledger = &ctx.accounts.event_ledger;
    ledger.assert_active_phase()?;
    ledger.assert_owner(&ctx.accounts.owner.key())?;
    validate_uri(&uri)?;

    let ticket = &mut ctx.accounts.ticket;
    ticket.uri = uri;

    emit!(TokenUriUpdated {
        ledger: ledger.key(),
        ticket_id: ticket.ticket_id,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Ticket {} URI updated", ticket.ticket_id);

    Ok(())
}

pub fn set_type_uri(ctx: Context<SetTypeUri>, type_id: u16, uri: String) -> Result<()> {
    let ledger = &ctx.accounts.event_ledger;
    ledger.assert_active_phase()?;
    ledger.assert_owner(&ctx.accounts.owner.key())?;
    validate_uri(&uri)?;

    let ticket_type = &mut ctx.accounts.ticket_type;
    ticket_type.uri = uri;

    emit!(TypeUriUpdated {
        ledger: ledger.key(),
        type_id,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Type {} URI updated", type_id);

    Ok(())
}

pub fn update_base_uri(ctx: Context<UpdateBaseUri>, base_uri: String) -> Result<()> {
    let ledger = &mut ctx.accounts.event_ledger;
    ledger.assert_active_phase()?;
    ledger.assert_owner(&ctx.accounts.owner.key())?;
    validate_uri(&base_uri)?;

    ledger.base_uri = base_uri;

    emit!(BaseUriUpdated {
        ledger: ledger.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Base URI updated");

    Ok(())
}

#[event]
pub struct TokenUriUpdated {
    pub ledger: Pubkey,
    pub ticket_id: u32,
    pub timestamp: i64,
}

#[event]
pub struct TypeUriUpdated {
    pub ledger: Pubkey,
    pub type_id: u16,
    pub timestamp: i64,
}

#[event]
pub struct BaseUriUpdated {
    pub ledger: Pubkey,
    pub timestamp: i64,
}
