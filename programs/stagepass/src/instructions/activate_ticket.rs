use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::{EventLedger, Ticket};

#[derive(Accounts)]
pub struct ActivateTicket<'info> {
    pub platform_signer: Signer<'info>,

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

pub fn activate_ticket(ctx: Context<ActivateTicket>) -> Result<()> {
    let ledger = &ctx.accounts.event_ledger;
    ledger.assert_active_phase()?;
    ledger.assert_platform(&ctx.accounts.platform_signer.key())?;

    let ledger_key = ledger.key();
    let now = Clock::get()?.unix_timestamp;

    let ticket = &mut ctx.accounts.ticket;
    ticket.activate(now)?;

    emit!(TicketActivated {
        ledger: ledger_key,
        ticket: ticket.key(),
        ticket_id: ticket.ticket_id,
        holder: ticket.holder,
        timestamp: now,
    });

    msg!("Ticket {} activated", ticket.ticket_id);

    Ok(())
}

#[event]
pub struct TicketActivated {
    pub ledger: Pubkey,
    pub ticket: Pubkey,
    pub ticket_id: u32,
    pub holder: Pubkey,
    pub timestamp: i64,
}
