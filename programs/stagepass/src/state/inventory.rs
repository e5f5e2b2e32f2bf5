use anchor_lang::prelude::*;
use crate::errors::StagepassError;
use super::{EventLedger, LedgerKind, TicketType};

/// Supply tracking behind a claim. The two ledger kinds differ only
/// here, so the shared claim path works against this trait and each
/// kind supplies its own capacity and counter rules.
pub trait TicketInventory {
    /// Fails unless the claim fits, with the most specific condition
    /// first: kind mismatch, then type-level checks, then the global cap.
    fn check_capacity(&self) -> Result<()>;

    /// Bumps the counters for one minted ticket.
    fn record_mint(&mut self) -> Result<()>;

    fn ticket_type(&self) -> Option<u16>;
}

pub struct SingleInventory<'a> {
    pub ledger: &'a mut EventLedger,
}

pub struct ZonedInventory<'a> {
    pub ledger: &'a mut EventLedger,
    pub ticket_type: &'a mut TicketType,
}

impl TicketInventory for SingleInventory<'_> {
    fn check_capacity(&self) -> Result<()> {
        require!(
            self.ledger.kind == LedgerKind::SingleType,
            StagepassError::UnsupportedLedgerKind
        );
        require!(
            self.ledger.total_minted < self.ledger.max_supply,
            StagepassError::SupplyExhausted
        );
        Ok(())
    }

    fn record_mint(&mut self) -> Result<()> {
        self.ledger.total_minted = self
            .ledger
            .total_minted
            .checked_add(1)
            .ok_or(StagepassError::MathOverflow)?;
        Ok(())
    }

    fn ticket_type(&self) -> Option<u16> {
        None
    }
}

impl TicketInventory for ZonedInventory<'_> {
    fn check_capacity(&self) -> Result<()> {
        require!(
            self.ledger.kind == LedgerKind::Zoned,
            StagepassError::UnsupportedLedgerKind
        );
        require!(self.ticket_type.active, StagepassError::TicketTypeInactive);
        require!(
            self.ticket_type.minted < self.ticket_type.max_supply,
            StagepassError::TypeSupplyExhausted
        );
        require!(
            self.ledger.total_minted < self.ledger.max_supply,
            StagepassError::SupplyExhausted
        );
        Ok(())
    }

    fn record_mint(&mut self) -> Result<()> {
        self.ticket_type.minted = self
            .ticket_type
            .minted
            .checked_add(1)
            .ok_or(StagepassError::MathOverflow)?;
        self.ledger.total_minted = self
            .ledger
            .total_minted
            .checked_add(1)
            .ok_or(StagepassError::MathOverflow)?;
        Ok(())
    }

    fn ticket_type(&self) -> Option<u16> {
        Some(self.ticket_type.type_id)
    }
}

/// Shared admission step: capacity first, then single-use claim check.
pub fn admit_claim<I: TicketInventory>(inventory: &I, claim_used: bool) -> Result<()> {
    inventory.check_capacity()?;
    require!(!claim_used, StagepassError::AlreadyClaimed);
    Ok(())
}
