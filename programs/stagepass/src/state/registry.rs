use anchor_lang::prelude::*;
use crate::constants::{
    EVENT_SEED, GET_EVENTS_PAGE_LIMIT, MAX_TICKET_TYPES, MAX_TRACKED_EVENTS, MINT_SIGNER_LEN,
};
use crate::errors::StagepassError;
use crate::utils::safe_add;
use super::LedgerKind;

#[account]
#[derive(Default)]
pub struct Registry {
    pub admin: Pubkey,                            // 32 bytes
    pub multisig: Pubkey,                         // 32 bytes
    pub platform_signer: Pubkey,                  // 32 bytes
    pub mint_signer_default: [u8; MINT_SIGNER_LEN], // 20 bytes
    pub paused: bool,                             // 1 byte
    pub single_template: LedgerTemplate,          // 4 bytes
    pub zoned_template: LedgerTemplate,           // 4 bytes
    pub total_events: u64,                        // 8 bytes
    pub total_deposited: u64,                     // 8 bytes
    pub total_withdrawn: u64,                     // 8 bytes
    pub events: Vec<EventEntry>,                  // 4 + 128 * 64 bytes
    pub bump: u8,                                 // 1 byte
}

/// Descriptor a new ledger is stamped from. `version` tags provenance,
/// `max_types` bounds the type table of zoned ledgers.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct LedgerTemplate {
    pub version: u16,   // 2 bytes
    pub max_types: u16, // 2 bytes
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventEntry {
    pub ledger: Pubkey,    // 32 bytes
    pub organizer: Pubkey, // 32 bytes
}

impl LedgerTemplate {
    pub const SIZE: usize = 2 + 2;
}

impl EventEntry {
    pub const SIZE: usize = 32 + 32;
}

impl Registry {
    pub const SIZE: usize = 32
        + 32
        + 32
        + MINT_SIGNER_LEN
        + 1
        + LedgerTemplate::SIZE
        + LedgerTemplate::SIZE
        + 8
        + 8
        + 8
        + (4 + MAX_TRACKED_EVENTS * EventEntry::SIZE)
        + 1;

    pub fn assert_admin(&self, caller: &Pubkey) -> Result<()> {
        require!(*caller == self.admin, StagepassError::NotAdmin);
        Ok(())
    }

    pub fn assert_multisig(&self, caller: &Pubkey) -> Result<()> {
        require!(*caller == self.multisig, StagepassError::NotMultisig);
        Ok(())
    }

    pub fn assert_platform_signer(&self, caller: &Pubkey) -> Result<()> {
        require!(*caller == self.platform_signer, StagepassError::NotPlatformSigner);
        Ok(())
    }

    pub fn assert_not_paused(&self) -> Result<()> {
        require!(!self.paused, StagepassError::Paused);
        Ok(())
    }

    pub fn template_for(&self, kind: LedgerKind) -> LedgerTemplate {
        match kind {
            LedgerKind::SingleType => self.single_template,
            LedgerKind::Zoned => self.zoned_template,
        }
    }

    pub fn set_template(&mut self, kind: LedgerKind, template: LedgerTemplate) -> Result<()> {
        require!(template.version != 0, StagepassError::InvalidTemplate);
        require!(
            template.max_types >= 1 && template.max_types <= MAX_TICKET_TYPES,
            StagepassError::InvalidTemplate
        );
        match kind {
            LedgerKind::SingleType => self.single_template = template,
            LedgerKind::Zoned => self.zoned_template = template,
        }
        Ok(())
    }

    /// Appends a freshly created ledger and returns the index it was
    /// created under.
    pub fn record_event(&mut self, ledger: Pubkey, organizer: Pubkey) -> Result<u64> {
        require!(
            self.events.len() < MAX_TRACKED_EVENTS,
            StagepassError::EventListFull
        );
        let index = self.total_events;
        self.events.push(EventEntry { ledger, organizer });
        self.total_events = safe_add(self.total_events, 1)?;
        Ok(index)
    }

    /// Page of the deployed-ledger list. `limit` is clamped to what is
    /// left past `offset` and to the return-data page cap.
    pub fn events_page(&self, offset: u64, limit: u64) -> Vec<EventEntry> {
        let len = self.events.len() as u64;
        if offset >= len {
            return Vec::new();
        }
        let take = limit.min(len - offset).min(GET_EVENTS_PAGE_LIMIT);
        self.events[offset as usize..(offset + take) as usize].to_vec()
    }

    /// Address the next ledger for `organizer` of the given kind will be
    /// created at. Deterministic in the current event count.
    pub fn derive_event_address(
        program_id: &Pubkey,
        kind: LedgerKind,
        organizer: &Pubkey,
        index: u64,
    ) -> Pubkey {
        Pubkey::find_program_address(
            &[
                EVENT_SEED,
                organizer.as_ref(),
                &index.to_le_bytes(),
                &[kind as u8],
            ],
            program_id,
        )
        .0
    }
}
