use anchor_lang::prelude::*;

pub mod claim_marker;
pub mod event_ledger;
pub mod inventory;
pub mod registry;
pub mod ticket;
pub mod ticket_type;


pub use claim_marker::*;
pub use event_ledger::*;
pub use inventory::*;
pub use registry::*;
pub use ticket::*;
pub use ticket_type::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct CreateEventParams {
    pub kind: LedgerKind,
    pub name: String,
    pub base_uri: String,
    pub max_supply: u32,
    pub organizer: Pubkey,
    pub payment_ref: [u8; 32],
}
