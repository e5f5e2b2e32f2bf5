use anchor_lang::prelude::*;
use crate::constants::MINT_SIGNER_LEN;
use crate::state::EventLedger;

#[derive(Accounts)]
pub struct RotateKeys<'info> {
    pub owner: Signer<'info>,

    #[account(mut)]
    pub event_ledger: Account<'info, EventLedger>,
}

pub fn rotate_platform_signer(ctx: Context<RotateKeys>, new_signer: Pubkey) -> Result<()> {
    let ledger = &mut ctx.accounts.event_ledger;
    ledger.assert_active_phase()?;
    ledger.assert_owner(&ctx.accounts.owner.key())?;

    ledger.rotate_platform_signer(new_signer)?;

    emit!(PlatformSignerRotated {
        ledger: ledger.key(),
        new_signer,
        version: ledger.roles.version,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Platform signer rotated");

    Ok(())
}

pub fn rotate_mint_signer(
    ctx: Context<RotateKeys>,
    new_signer: [u8; MINT_SIGNER_LEN],
) -> Result<()> {
    let ledger = &mut ctx.accounts.event_ledger;
    ledger.assert_active_phase()?;
    ledger.assert_owner(&ctx.accounts.owner.key())?;

    ledger.rotate_mint_signer(new_signer)?;

    emit!(MintSignerRotated {
        ledger: ledger.key(),
        new_signer,
        version: ledger.roles.version,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Mint signer rotated");

    Ok(())
}

pub fn transfer_ownership(ctx: Context<RotateKeys>, new_owner: Pubkey) -> Result<()> {
    let ledger = &mut ctx.accounts.event_ledger;
    ledger.assert_active_phase()?;
    ledger.assert_owner(&ctx.accounts.owner.key())?;

    let previous_owner = ledger.roles.owner;
    ledger.transfer_ownership(new_owner)?;

    emit!(OwnershipTransferred {
        ledger: ledger.key(),
        previous_owner,
        new_owner,
        version: ledger.roles.version,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Ownership transferred to {}", new_owner);

    Ok(())
}

#[event]
pub struct PlatformSignerRotated {
    pub ledger: Pubkey,
    pub new_signer: Pubkey,
    pub version: u16,
    pub timestamp: i64,
}

#[event]
pub struct MintSignerRotated {
    pub ledger: Pubkey,
    pub new_signer: [u8; MINT_SIGNER_LEN],
    pub version: u16,
    pub timestamp: i64,
}

#[event]
pub struct OwnershipTransferred {
    pub ledger: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
    pub version: u16,
    pub timestamp: i64,
}
