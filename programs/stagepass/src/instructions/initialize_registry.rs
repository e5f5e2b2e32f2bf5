use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::StagepassError;
use crate::state::{LedgerTemplate, Registry};

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = 8 + Registry::SIZE,
        seeds = [REGISTRY_SEED],
        bump
    )]
    pub registry: Account<'info, Registry>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_registry(
    ctx: Context<InitializeRegistry>,
    multisig: Pubkey,
    platform_signer: Pubkey,
    mint_signer_default: [u8; MINT_SIGNER_LEN],
) -> Result<()> {
    require!(multisig != Pubkey::default(), StagepassError::InvalidAddress);
    require!(
        platform_signer != Pubkey::default(),
        StagepassError::InvalidAddress
    );
    require!(
        mint_signer_default != [0u8; MINT_SIGNER_LEN],
        StagepassError::InvalidAddress
    );

    let registry = &mut ctx.accounts.registry;
    registry.admin = ctx.accounts.admin.key();
    registry.multisig = multisig;
    registry.platform_signer = platform_signer;
    registry.mint_signer_default = mint_signer_default;
    registry.paused = false;
    registry.single_template = LedgerTemplate {
        version: 1,
        max_types: 1,
    };
    registry.zoned_template = LedgerTemplate {
        version: 1,
        max_types: MAX_TICKET_TYPES,
    };
    registry.total_events = 0;
    registry.total_deposited = 0;
    registry.total_withdrawn = 0;
    registry.events = Vec::new();
    registry.bump = ctx.bumps.registry;

    emit!(RegistryInitialized {
        registry: registry.key(),
        admin: registry.admin,
        multisig,
        platform_signer,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Registry initialized");

    Ok(())
}

#[event]
pub struct RegistryInitialized {
    pub registry: Pubkey,
    pub admin: Pubkey,
    pub multisig: Pubkey,
    pub platform_signer: Pubkey,
    pub timestamp: i64,
}
