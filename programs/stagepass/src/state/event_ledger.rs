use anchor_lang::prelude::*;
use crate::constants::{MAX_EVENT_NAME, MAX_TICKET_SUPPLY, MAX_URI_LENGTH, MINT_SIGNER_LEN};
use crate::errors::StagepassError;
use super::{CreateEventParams, LedgerTemplate};

#[account]
#[derive(Default)]
pub struct EventLedger {
    pub registry: Pubkey,            // 32 bytes - Registry that created this ledger
    pub index: u64,                  // 8 bytes - Position in the registry list
    pub kind: LedgerKind,            // 1 byte
    pub roles: RoleConfig,           // 86 bytes - Versioned role record
    pub phase: LedgerPhase,          // 1 byte
    pub name: String,                // 4 + 64 bytes
    pub base_uri: String,            // 4 + 128 bytes
    pub sale_active: bool,           // 1 byte
    pub canceled: bool,              // 1 byte - Permanent once set
    pub ended: bool,                 // 1 byte - Permanent once set
    pub max_supply: u32,             // 4 bytes
    pub total_minted: u32,           // 4 bytes
    pub type_count: u16,             // 2 bytes - Zoned variant only
    pub max_types: u16,              // 2 bytes - Zoned variant only
    pub template_version: u16,       // 2 bytes
    pub platform_cancel_used: bool,  // 1 byte - One-time platform cancel spent
    pub platform_end_used: bool,     // 1 byte - One-time platform end spent
    pub payment_ref: [u8; 32],       // 32 bytes - Opaque payment proof, not verified here
    pub created_at: i64,             // 8 bytes
    pub bump: u8,                    // 1 byte
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum LedgerKind {
    #[default]
    SingleType,
    Zoned,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum LedgerPhase {
    #[default]
    Setup,
    Active,
}

/// Per-ledger role record. Every rotation bumps `version`, so consumers
/// can tell stale role snapshots from current ones.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default, Debug, PartialEq, Eq)]
pub struct RoleConfig {
    pub version: u16,                        // 2 bytes - 0 means uninitialized
    pub owner: Pubkey,                       // 32 bytes
    pub platform_signer: Pubkey,             // 32 bytes
    pub mint_signer: [u8; MINT_SIGNER_LEN],  // 20 bytes - Keccak address of the claim signer
}

/// Which role a lifecycle call resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LedgerActor {
    Owner,
    Platform,
}

impl RoleConfig {
    pub const SIZE: usize = 2 + 32 + 32 + MINT_SIGNER_LEN;
}

impl EventLedger {
    pub const SIZE: usize = 32
        + 8
        + 1
        + RoleConfig::SIZE
        + 1
        + (4 + MAX_EVENT_NAME)
        + (4 + MAX_URI_LENGTH)
        + 1
        + 1
        + 1
        + 4
        + 4
        + 2
        + 2
        + 2
        + 1
        + 1
        + 32
        + 8
        + 1;

    /// One-time construction. A ledger whose role record already carries
    /// a version has been initialized before.
    #[allow(clippy::too_many_arguments)]
    pub fn init_checked(
        &mut self,
        registry: Pubkey,
        index: u64,
        params: &CreateEventParams,
        template: &LedgerTemplate,
        platform_signer: Pubkey,
        mint_signer: [u8; MINT_SIGNER_LEN],
        now: i64,
        bump: u8,
    ) -> Result<()> {
        require!(self.roles.version == 0, StagepassError::DoubleInitialization);
        require!(
            mint_signer != [0u8; MINT_SIGNER_LEN],
            StagepassError::InvalidAddress
        );

        self.registry = registry;
        self.index = index;
        self.kind = params.kind;
        self.roles = RoleConfig {
            version: 1,
            owner: params.organizer,
            platform_signer,
            mint_signer,
        };
        self.phase = LedgerPhase::Setup;
        self.name = params.name.clone();
        self.base_uri = params.base_uri.clone();
        self.sale_active = false;
        self.canceled = false;
        self.ended = false;
        self.max_supply = params.max_supply;
        self.total_minted = 0;
        self.type_count = 0;
        self.max_types = match params.kind {
            LedgerKind::SingleType => 0,
            LedgerKind::Zoned => template.max_types,
        };
        self.template_version = template.version;
        self.platform_cancel_used = false;
        self.platform_end_used = false;
        self.payment_ref = params.payment_ref;
        self.created_at = now;
        self.bump = bump;
        Ok(())
    }

    pub fn assert_owner(&self, caller: &Pubkey) -> Result<()> {
        require!(*caller == self.roles.owner, StagepassError::NotOwner);
        Ok(())
    }

    pub fn assert_platform(&self, caller: &Pubkey) -> Result<()> {
        require!(
            *caller == self.roles.platform_signer,
            StagepassError::NotPlatformSigner
        );
        Ok(())
    }

    /// Setup operations: platform only, and never again once setup is
    /// complete. The role check runs first so a completed setup surfaces
    /// its own condition only to the role that lost access.
    pub fn assert_setup_op(&self, caller: &Pubkey) -> Result<()> {
        self.assert_platform(caller)?;
        require!(
            self.phase == LedgerPhase::Setup,
            StagepassError::SetupAlreadyComplete
        );
        Ok(())
    }

    pub fn assert_active_phase(&self) -> Result<()> {
        require!(
            self.phase == LedgerPhase::Active,
            StagepassError::SetupNotComplete
        );
        Ok(())
    }

    /// Claim admission gate, checked in a fixed order so callers can
    /// branch on the cause.
    pub fn assert_claim_open(&self) -> Result<()> {
        require!(self.sale_active, StagepassError::SaleNotActive);
        require!(!self.canceled, StagepassError::EventCanceled);
        require!(!self.ended, StagepassError::EventEnded);
        Ok(())
    }

    pub fn resolve_lifecycle_actor(&self, caller: &Pubkey) -> Result<LedgerActor> {
        if *caller == self.roles.owner {
            Ok(LedgerActor::Owner)
        } else if *caller == self.roles.platform_signer {
            Ok(LedgerActor::Platform)
        } else {
            Err(StagepassError::NotOwnerOrPlatform.into())
        }
    }

    pub fn complete_setup(&mut self) {
        self.phase = LedgerPhase::Active;
    }

    pub fn toggle_sale(&mut self) -> Result<bool> {
        require!(!self.canceled, StagepassError::EventCanceled);
        require!(!self.ended, StagepassError::EventEnded);
        self.sale_active = !self.sale_active;
        Ok(self.sale_active)
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

    /// Cancel, by owner or by the platform's one-time emergency path.
    pub fn cancel(&mut self, actor: LedgerActor) -> Result<()> {
        if actor == LedgerActor::Platform {
            require!(
                !self.platform_cancel_used,
                StagepassError::ActionAlreadyExecuted
            );
        }
        require!(!self.ended, StagepassError::EventAlreadyEnded);
        require!(!self.canceled, StagepassError::EventCanceled);
        self.canceled = true;
        if actor == LedgerActor::Platform {
            self.platform_cancel_used = true;
        }
        Ok(())
    }

    /// End, by owner or by the platform's one-time emergency path.
    pub fn end(&mut self, actor: LedgerActor) -> Result<()> {
        if actor == LedgerActor::Platform {
            require!(
                !self.platform_end_used,
                StagepassError::ActionAlreadyExecuted
            );
        }
        require!(!self.canceled, StagepassError::EventCanceled);
        require!(!self.ended, StagepassError::EventAlreadyEnded);
        self.ended = true;
        if actor == LedgerActor::Platform {
            self.platform_end_used = true;
        }
        Ok(())
    }

    /// Reserves the next slot in the zoned type table.
    pub fn register_type(&mut self) -> Result<u16> {
        require!(
            self.kind == LedgerKind::Zoned,
            StagepassError::UnsupportedLedgerKind
        );
        require!(
            self.type_count < self.max_types,
            StagepassError::TicketTypeLimitReached
        );
        self.type_count = self
            .type_count
            .checked_add(1)
            .ok_or(StagepassError::MathOverflow)?;
        Ok(self.type_count)
    }

    pub fn rotate_platform_signer(&mut self, new_signer: Pubkey) -> Result<()> {
        require!(new_signer != Pubkey::default(), StagepassError::InvalidAddress);
        self.roles.platform_signer = new_signer;
        self.bump_role_version()
    }

    /// Rotating the mint signer invalidates every signature issued under
    /// the previous one, since verification always uses the current value.
    pub fn rotate_mint_signer(&mut self, new_signer: [u8; MINT_SIGNER_LEN]) -> Result<()> {
        require!(
            new_signer != [0u8; MINT_SIGNER_LEN],
            StagepassError::InvalidAddress
        );
        self.roles.mint_signer = new_signer;
        self.bump_role_version()
    }

    pub fn transfer_ownership(&mut self, new_owner: Pubkey) -> Result<()> {
        require!(new_owner != Pubkey::default(), StagepassError::InvalidAddress);
        self.roles.owner = new_owner;
        self.bump_role_version()
    }

    fn bump_role_version(&mut self) -> Result<()> {
        self.roles.version = self
            .roles
            .version
            .checked_add(1)
            .ok_or(StagepassError::MathOverflow)?;
        Ok(())
    }
}
