use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::{admit_claim, ClaimMarker, EventLedger, SingleInventory, Ticket, TicketInventory};
use crate::utils::claim_auth;

#[derive(Accounts)]
#[instruction(claim_id: [u8; 32])]
pub struct ClaimTicket<'info> {
    #[account(mut)]
    pub claimant: Signer<'info>,

    #[account(mut)]
    pub event_ledger: Account<'info, EventLedger>,

    #[account(
        init,
        payer = claimant,
        space = 8 + Ticket::SIZE,
        seeds = [
            TICKET_SEED,
            event_ledger.key().as_ref(),
            event_ledger.total_minted.saturating_add(1).to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub ticket: Account<'info, Ticket>,

    #[account(
        init_if_needed,
        payer = claimant,
        space = 8 + ClaimMarker::SIZE,
        seeds = [
            CLAIM_SEED,
            event_ledger.key().as_ref(),
            claim_id.as_ref(),
        ],
        bump
    )]
    pub claim_marker: Account<'info, ClaimMarker>,

    pub system_program: Program<'info, System>,
}

pub fn claim_ticket(
    ctx: Context<ClaimTicket>,
    claim_id: [u8; 32],
    recovery_id: u8,
    signature: [u8; 64],
) -> Result<()> {
    // Capture keys before mutable borrows
    let ledger_key = ctx.accounts.event_ledger.key();
    let claimant_key = ctx.accounts.claimant.key();

    ctx.accounts.event_ledger.assert_active_phase()?;
    ctx.accounts.event_ledger.assert_claim_open()?;

    let mut inventory = SingleInventory {
        ledger: &mut ctx.accounts.event_ledger,
    };
    admit_claim(&inventory, ctx.accounts.claim_marker.used)?;

    claim_auth::verify_claim(
        &inventory.ledger.roles.mint_signer,
        &ledger_key,
        None,
        &claim_id,
        &claimant_key,
        recovery_id,
        &signature,
    )?;

    inventory.record_mint()?;
    let ticket_id = inventory.ledger.total_minted;
    let now = Clock::get()?.unix_timestamp;

    let ticket = &mut ctx.accounts.ticket;
    ticket.ledger = ledger_key;
    ticket.ticket_id = ticket_id;
    ticket.ticket_type = None;
    ticket.holder = claimant_key;
    ticket.activated = false;
    ticket.activated_at = None;
    ticket.claim_id = claim_id;
    ticket.claimed_at = now;
    ticket.uri = String::new();
    ticket.transfer_count = 0;
    ticket.bump = ctx.bumps.ticket;

    ctx.accounts.claim_marker.consume(
        ledger_key,
        claim_id,
        claimant_key,
        ticket_id,
        now,
        ctx.bumps.claim_marker,
    );

    emit!(TicketClaimed {
        ledger: ledger_key,
        ticket: ctx.accounts.ticket.key(),
        ticket_id,
        ticket_type: None,
        claimant: claimant_key,
        timestamp: now,
    });

    msg!("Ticket {} claimed", ticket_id);

    Ok(())
}

#[event]
pub struct TicketClaimed {
    pub ledger: Pubkey,
    pub ticket: Pubkey,
    pub ticket_id: u32,
    pub ticket_type: Option<u16>,
    pub claimant: Pubkey,
    pub timestamp: i64,
}
