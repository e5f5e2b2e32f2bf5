use anchor_lang::prelude::*;
use crate::constants::MAX_URI_LENGTH;
use crate::errors::StagepassError;

#[account]
#[derive(Default)]
pub struct Ticket {
    pub ledger: Pubkey,              // 32 bytes - Parent event ledger
    pub ticket_id: u32,              // 4 bytes - Unique ID within the ledger
    pub ticket_type: Option<u16>,    // 1 + 2 bytes - Zoned variant only
    pub holder: Pubkey,              // 32 bytes
    pub activated: bool,             // 1 byte - Has been used for entry
    pub activated_at: Option<i64>,   // 1 + 8 bytes
    pub activated_holder: Pubkey,    // 32 bytes - Holder of record at activation
    pub claim_id: [u8; 32],          // 32 bytes - Identifier consumed by the claim
    pub claimed_at: i64,             // 8 bytes
    pub uri: String,                 // 4 + 128 bytes - Per-ticket override, empty = base URI
    pub transfer_count: u32,         // 4 bytes
    pub bump: u8,                    // 1 byte
}

impl Ticket {
    pub const SIZE: usize = 32 + 4 + 3 + 32 + 1 + 9 + 32 + 32 + 8 + (4 + MAX_URI_LENGTH) + 4 + 1;

    /// Marks the ticket as used for entry. Exactly once per ticket.
    pub fn activate(&mut self, now: i64) -> Result<()> {
        require!(!self.activated, StagepassError::AlreadyActivated);
        self.activated = true;
        self.activated_at = Some(now);
        self.activated_holder = self.holder;
        Ok(())
    }

    /// Transfer guard. A never-activated ticket moves freely; an
    /// activated one is locked until the event has ended.
    pub fn assert_transferable(&self, ledger_ended: bool) -> Result<()> {
        if self.activated && !ledger_ended {
            return Err(StagepassError::TransferLocked.into());
        }
        Ok(())
    }

    pub fn transfer_to(&mut self, new_holder: Pubkey) -> Result<()> {
        require!(new_holder != Pubkey::default(), StagepassError::InvalidAddress);
        self.holder = new_holder;
        self.transfer_count = self
            .transfer_count
            .checked_add(1)
            .ok_or(StagepassError::MathOverflow)?;
        Ok(())
    }
}
