use anchor_lang::prelude::*;
use crate::state::EventLedger;

#[derive(Accounts)]
pub struct ToggleSale<'info> {
    pub owner: Signer<'info>,

    #[account(mut)]
    pub event_ledger: Account<'info, EventLedger>,
}

pub fn toggle_sale(ctx: Context<ToggleSale>) -> Result<()> {
    let ledger = &mut ctx.accounts.event_ledger;
    ledger.assert_active_phase()?;
    ledger.assert_owner(&ctx.accounts.owner.key())?;

    let sale_active = ledger.toggle_sale()?;

    emit!(SaleToggled {
        ledger: ledger.key(),
        sale_active,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Sale active: {}", sale_active);

    Ok(())
}

#[event]
pub struct SaleToggled {
    pub ledger: Pubkey,
    pub sale_active: bool,
    pub timestamp: i64,
}
