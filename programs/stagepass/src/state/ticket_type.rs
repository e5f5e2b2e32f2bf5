use anchor_lang::prelude::*;
use crate::constants::{MAX_TICKET_SUPPLY, MAX_TYPE_NAME, MAX_URI_LENGTH};
use crate::errors::StagepassError;

#[account]
#[derive(Default)]
pub struct TicketType {
    pub ledger: Pubkey,    // 32 bytes - Parent event ledger
    pub type_id: u16,      // 2 bytes - Caller-chosen identifier
    pub name: String,      // 4 + 32 bytes
    pub zone_level: u8,    // 1 byte - Access level label
    pub max_supply: u32,   // 4 bytes
    pub minted: u32,       // 4 bytes
    pub active: bool,      // 1 byte
    pub defined: bool,     // 1 byte - Set exactly once, guards duplicates
    pub uri: String,       // 4 + 128 bytes
    pub bump: u8,          // 1 byte
}

impl TicketType {
    pub const SIZE: usize =
        32 + 2 + (4 + MAX_TYPE_NAME) + 1 + 4 + 4 + 1 + 1 + (4 + MAX_URI_LENGTH) + 1;

    /// Populates a freshly created type record. A record that is already
    /// defined rejects redefinition.
    #[allow(clippy::too_many_arguments)]
    pub fn define(
        &mut self,
        ledger: Pubkey,
        type_id: u16,
        name: String,
        zone_level: u8,
        max_supply: u32,
        uri: String,
        bump: u8,
    ) -> Result<()> {
        require!(!self.defined, StagepassError::DuplicateTicketType);
        require!(
            max_supply > 0 && max_supply <= MAX_TICKET_SUPPLY,
            StagepassError::InvalidSupply
        );

        self.ledger = ledger;
        self.type_id = type_id;
        self.name = name;
        self.zone_level = zone_level;
        self.max_supply = max_supply;
        self.minted = 0;
        self.active = true;
        self.defined = true;
        self.uri = uri;
        self.bump = bump;
        Ok(())
    }

    pub fn raise_supply_cap(&mut self, new_max_supply: u32) -> Result<()> {
        require!(new_max_supply > self.max_supply, StagepassError::InvalidSupply);
        require!(
            new_max_supply <= MAX_TICKET_SUPPLY,
            StagepassError::InvalidSupply
        );
        self.max_supply = new_max_supply;
        Ok(())
    }
}
