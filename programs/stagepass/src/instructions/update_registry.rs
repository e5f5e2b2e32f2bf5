use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::StagepassError;
use crate::state::{LedgerKind, LedgerTemplate, Registry};

#[derive(Accounts)]
pub struct UpdateRegistry<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,
}

pub fn set_admin(ctx: Context<UpdateRegistry>, new_admin: Pubkey) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.assert_admin(&ctx.accounts.admin.key())?;
    require!(new_admin != Pubkey::default(), StagepassError::InvalidAddress);

    registry.admin = new_admin;

    emit_config_update(registry, &ctx.accounts.admin.key())?;
    msg!("Registry admin set to {}", new_admin);
    Ok(())
}

pub fn set_multisig(ctx: Context<UpdateRegistry>, new_multisig: Pubkey) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.assert_admin(&ctx.accounts.admin.key())?;
    require!(new_multisig != Pubkey::default(), StagepassError::InvalidAddress);

    registry.multisig = new_multisig;

    emit_config_update(registry, &ctx.accounts.admin.key())?;
    msg!("Registry multisig set to {}", new_multisig);
    Ok(())
}

pub fn set_platform_signer(ctx: Context<UpdateRegistry>, new_signer: Pubkey) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.assert_admin(&ctx.accounts.admin.key())?;
    require!(new_signer != Pubkey::default(), StagepassError::InvalidAddress);

    registry.platform_signer = new_signer;

    emit_config_update(registry, &ctx.accounts.admin.key())?;
    msg!("Registry platform signer set to {}", new_signer);
    Ok(())
}

pub fn set_mint_signer_default(
    ctx: Context<UpdateRegistry>,
    new_signer: [u8; MINT_SIGNER_LEN],
) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.assert_admin(&ctx.accounts.admin.key())?;
    require!(
        new_signer != [0u8; MINT_SIGNER_LEN],
        StagepassError::InvalidAddress
    );

    registry.mint_signer_default = new_signer;

    emit_config_update(registry, &ctx.accounts.admin.key())?;
    msg!("Registry default mint signer rotated");
    Ok(())
}

pub fn set_template(
    ctx: Context<UpdateRegistry>,
    kind: LedgerKind,
    template: LedgerTemplate,
) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.assert_admin(&ctx.accounts.admin.key())?;
    registry.set_template(kind, template)?;

    emit_config_update(registry, &ctx.accounts.admin.key())?;
    msg!("Registry template updated to v{}", template.version);
    Ok(())
}

pub fn toggle_pause(ctx: Context<UpdateRegistry>) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.assert_admin(&ctx.accounts.admin.key())?;

    registry.paused = !registry.paused;
    let paused = registry.paused;

    emit!(PauseToggled {
        registry: registry.key(),
        paused,
        timestamp: Clock::get()?.unix_timestamp,
    });
    msg!("Registry paused: {}", paused);
    Ok(())
}

fn emit_config_update(registry: &Account<Registry>, admin: &Pubkey) -> Result<()> {
    emit!(RegistryConfigUpdated {
        registry: registry.key(),
        admin: *admin,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

#[event]
pub struct RegistryConfigUpdated {
    pub registry: Pubkey,
    pub admin: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct PauseToggled {
    pub registry: Pubkey,
    pub paused: bool,
    pub timestamp: i64,
}
