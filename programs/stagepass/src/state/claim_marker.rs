use anchor_lang::prelude::*;

/// One marker account per claim identifier. Existence alone is not
/// enough to prove consumption, the `used` flag is, so a replayed claim
/// surfaces the dedicated already-claimed condition.
#[account]
#[derive(Default)]
pub struct ClaimMarker {
    pub ledger: Pubkey,     // 32 bytes - Ledger the identifier is scoped to
    pub claim_id: [u8; 32], // 32 bytes
    pub used: bool,         // 1 byte
    pub claimed_by: Pubkey, // 32 bytes
    pub ticket_id: u32,     // 4 bytes
    pub claimed_at: i64,    // 8 bytes
    pub bump: u8,           // 1 byte
}

impl ClaimMarker {
    pub const SIZE: usize = 32 + 32 + 1 + 32 + 4 + 8 + 1;

    pub fn consume(
        &mut self,
        ledger: Pubkey,
        claim_id: [u8; 32],
        claimed_by: Pubkey,
        ticket_id: u32,
        now: i64,
        bump: u8,
    ) {
        self.ledger = ledger;
        self.claim_id = claim_id;
        self.used = true;
        self.claimed_by = claimed_by;
        self.ticket_id = ticket_id;
        self.claimed_at = now;
        self.bump = bump;
    }
}
