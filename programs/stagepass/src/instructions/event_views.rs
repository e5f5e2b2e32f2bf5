use anchor_lang::prelude::*;
use crate::constants::{TICKET_SEED, TICKET_TYPE_SEED};
use crate::errors::StagepassError;
use crate::state::{EventLedger, LedgerKind, LedgerPhase, Ticket, TicketType};

#[derive(Accounts)]
pub struct EventView<'info> {
    pub event_ledger: Account<'info, EventLedger>,
}

#[derive(Accounts)]
pub struct TicketView<'info> {
    pub event_ledger: Account<'info, EventLedger>,

    #[account(
        seeds = [TICKET_SEED, event_ledger.key().as_ref(), ticket.ticket_id.to_le_bytes().as_ref()],
        bump = ticket.bump,
        constraint = ticket.ledger == event_ledger.key() @ StagepassError::InvalidAddress,
    )]
    pub ticket: Account<'info, Ticket>,
}

#[derive(Accounts)]
#[instruction(type_id: u16)]
pub struct TicketTypeView<'info> {
    pub event_ledger: Account<'info, EventLedger>,

    #[account(
        seeds = [TICKET_TYPE_SEED, event_ledger.key().as_ref(), type_id.to_le_bytes().as_ref()],
        bump = ticket_type.bump,
        constraint = ticket_type.ledger == event_ledger.key() @ StagepassError::InvalidTicketType,
    )]
    pub ticket_type: Account<'info, TicketType>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct EventInfo {
    pub registry: Pubkey,
    pub index: u64,
    pub kind: LedgerKind,
    pub owner: Pubkey,
    pub role_version: u16,
    pub phase: LedgerPhase,
    pub name: String,
    pub base_uri: String,
    pub sale_active: bool,
    pub canceled: bool,
    pub ended: bool,
    pub max_supply: u32,
    pub total_minted: u32,
    pub type_count: u16,
    pub created_at: i64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct TicketInfo {
    pub ledger: Pubkey,
    pub ticket_id: u32,
    pub ticket_type: Option<u16>,
    pub holder: Pubkey,
    pub activated: bool,
    pub activated_at: Option<i64>,
    pub claimed_at: i64,
    pub uri: String,
    pub transfer_count: u32,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct TicketTypeInfo {
    pub ledger: Pubkey,
    pub type_id: u16,
    pub name: String,
    pub zone_level: u8,
    pub max_supply: u32,
    pub minted: u32,
    pub active: bool,
    pub uri: String,
}

pub fn get_event_info(ctx: Context<EventView>) -> Result<EventInfo> {
    let ledger = &ctx.accounts.event_ledger;
    Ok(EventInfo {
        registry: ledger.registry,
        index: ledger.index,
        kind: ledger.kind,
        owner: ledger.roles.owner,
        role_version: ledger.roles.version,
        phase: ledger.phase,
        name: ledger.name.clone(),
        base_uri: ledger.base_uri.clone(),
        sale_active: ledger.sale_active,
        canceled: ledger.canceled,
        ended: ledger.ended,
        max_supply: ledger.max_supply,
        total_minted: ledger.total_minted,
        type_count: ledger.type_count,
        created_at: ledger.created_at,
    })
}

pub fn get_ticket_info(ctx: Context<TicketView>) -> Result<TicketInfo> {
    let ticket = &ctx.accounts.ticket;

    // An unset per-ticket URI falls back to the ledger's base URI.
    let uri = if ticket.uri.is_empty() {
        ctx.accounts.event_ledger.base_uri.clone()
    } else {
        ticket.uri.clone()
    };

    Ok(TicketInfo {
        ledger: ticket.ledger,
        ticket_id: ticket.ticket_id,
        ticket_type: ticket.ticket_type,
        holder: ticket.holder,
        activated: ticket.activated,
        activated_at: ticket.activated_at,
        claimed_at: ticket.claimed_at,
        uri,
        transfer_count: ticket.transfer_count,
    })
}

pub fn get_ticket_type_info(ctx: Context<TicketTypeView>, _type_id: u16) -> Result<TicketTypeInfo> {
    let ticket_type = &ctx.accounts.ticket_type;
    Ok(TicketTypeInfo {
        ledger: ticket_type.ledger,
        type_id: ticket_type.type_id,
        name: ticket_type.name.clone(),
        zone_level: ticket_type.zone_level,
        max_supply: ticket_type.max_supply,
        minted: ticket_type.minted,
        active: ticket_type.active,
        uri: ticket_type.uri.clone(),
    })
}
