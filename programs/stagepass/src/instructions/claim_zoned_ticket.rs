use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::StagepassError;
use crate::state::{
    admit_claim, ClaimMarker, EventLedger, Ticket, TicketInventory, TicketType, ZonedInventory,
};
use crate::utils::claim_auth;
use super::claim_ticket::TicketClaimed;

#[derive(Accounts)]
#[instruction(type_id: u16, claim_id: [u8; 32])]
pub struct ClaimZonedTicket<'info> {
    #[account(mut)]
    pub claimant: Signer<'info>,

    #[account(mut)]
    pub event_ledger: Account<'info, EventLedger>,

    /// CHECK: Deserialized in the handler so a missing type surfaces in
    /// claim precondition order
    #[account(
        mut,
        seeds = [
            TICKET_TYPE_SEED,
            event_ledger.key().as_ref(),
            type_id.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub ticket_type: UncheckedAccount<'info>,

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

pub fn claim_zoned_ticket(
    ctx: Context<ClaimZonedTicket>,
    type_id: u16,
    claim_id: [u8; 32],
    recovery_id: u8,
    signature: [u8; 64],
) -> Result<()> {
    // Capture keys before mutable borrows
    let ledger_key = ctx.accounts.event_ledger.key();
    let claimant_key = ctx.accounts.claimant.key();

    ctx.accounts.event_ledger.assert_active_phase()?;
    ctx.accounts.event_ledger.assert_claim_open()?;

    // An undefined type is a plain empty PDA, so it has to be inspected
    // here rather than by the account layer.
    let type_info = ctx.accounts.ticket_type.to_account_info();
    require!(!type_info.data_is_empty(), StagepassError::InvalidTicketType);
    require_keys_eq!(*type_info.owner, crate::ID, StagepassError::InvalidTicketType);
    let mut ticket_type: TicketType = {
        let mut data: &[u8] = &type_info.try_borrow_data()?;
        TicketType::try_deserialize(&mut data)?
    };
    require!(
        ticket_type.defined
            && ticket_type.ledger == ledger_key
            && ticket_type.type_id == type_id,
        StagepassError::InvalidTicketType
    );

    let mut inventory = ZonedInventory {
        ledger: &mut ctx.accounts.event_ledger,
        ticket_type: &mut ticket_type,
    };
    admit_claim(&inventory, ctx.accounts.claim_marker.used)?;

    claim_auth::verify_claim(
        &inventory.ledger.roles.mint_signer,
        &ledger_key,
        Some(type_id),
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
    ticket.ticket_type = Some(type_id);
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

    // Write the manually loaded type record back
    {
        let mut data = type_info.try_borrow_mut_data()?;
        let mut cursor: &mut [u8] = &mut data;
        ticket_type.try_serialize(&mut cursor)?;
    }

    emit!(TicketClaimed {
        ledger: ledger_key,
        ticket: ctx.accounts.ticket.key(),
        ticket_id,
        ticket_type: Some(type_id),
        claimant: claimant_key,
        timestamp: now,
    });

    msg!("Ticket {} claimed for type {}", ticket_id, type_id);

    Ok(())
}
