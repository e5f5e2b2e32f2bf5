use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::StagepassError;
use crate::state::{EventLedger, Ticket};

#[derive(Accounts)]
pub struct TransferTicket<'info> {
    pub holder: Signer<'info>,

    pub event_ledger: Account<'info, EventLedger>,

    #[account(
        mut,
        seeds = [
            TICKET_SEED,
            event_ledger.key().as_ref(),
            ticket.ticket_id.to_le_bytes().as_ref(),
        ],
        bump = ticket.bump,
        constraint = ticket.holder == holder.key() @ StagepassError::NotTicketHolder,
    )]
    pub ticket: Account<'info, Ticket>,
}

pub fn transfer_ticket(ctx: Context<TransferTicket>, new_holder: Pubkey) -> Result<()> {
    let ledger = &ctx.accounts.event_ledger;
    let ticket = &mut ctx.accounts.ticket;

    // Activation locks the ticket in place until the event has ended.
    ticket.assert_transferable(ledger.ended)?;

    let previous_holder = ticket.holder;
    ticket.transfer_to(new_holder)?;

    emit!(TicketTransferred {
        ledger: ledger.key(),
        ticket: ticket.key(),
        ticket_id: ticket.ticket_id,
        from: previous_holder,
        to: new_holder,
        transfer_count: ticket.transfer_count,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Ticket {} transferred", ticket.ticket_id);

    Ok(())
}

#[event]
pub struct TicketTransferred {
    pub ledger: Pubkey,
    pub ticket: Pubkey,
    pub ticket_id: u32,
    pub from: Pubkey,
    pub to: Pubkey,
    pub transfer_count: u32,
    pub timestamp: i64,
}
