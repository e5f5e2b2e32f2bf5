use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::{CreateEventParams, EventEntry, LedgerKind, LedgerTemplate};

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod stagepass {
    use super::*;

    // ---- Registry administration ----

    pub fn initialize_registry(
        ctx: Context<InitializeRegistry>,
        multisig: Pubkey,
        platform_signer: Pubkey,
        mint_signer_default: [u8; 20],
    ) -> Result<()> {
        instructions::initialize_registry::initialize_registry(
            ctx,
            multisig,
            platform_signer,
            mint_signer_default,
        )
    }

    pub fn set_admin(ctx: Context<UpdateRegistry>, new_admin: Pubkey) -> Result<()> {
        instructions::update_registry::set_admin(ctx, new_admin)
    }

    pub fn set_multisig(ctx: Context<UpdateRegistry>, new_multisig: Pubkey) -> Result<()> {
        instructions::update_registry::set_multisig(ctx, new_multisig)
    }

    pub fn set_platform_signer(ctx: Context<UpdateRegistry>, new_signer: Pubkey) -> Result<()> {
        instructions::update_registry::set_platform_signer(ctx, new_signer)
    }

    pub fn set_mint_signer_default(
        ctx: Context<UpdateRegistry>,
        new_signer: [u8; 20],
    ) -> Result<()> {
        instructions::update_registry::set_mint_signer_default(ctx, new_signer)
    }

    pub fn set_template(
        ctx: Context<UpdateRegistry>,
        kind: LedgerKind,
        template: LedgerTemplate,
    ) -> Result<()> {
        instructions::update_registry::set_template(ctx, kind, template)
    }

    pub fn toggle_pause(ctx: Context<UpdateRegistry>) -> Result<()> {
        instructions::update_registry::toggle_pause(ctx)
    }

    // ---- Treasury ----

    pub fn deposit_treasury(ctx: Context<DepositTreasury>, amount: u64) -> Result<()> {
        instructions::treasury::deposit_treasury(ctx, amount)
    }

    pub fn withdraw_treasury(ctx: Context<WithdrawTreasury>, amount: u64) -> Result<()> {
        instructions::treasury::withdraw_treasury(ctx, amount)
    }

    pub fn fund_signer(ctx: Context<FundSigner>, amount: u64) -> Result<()> {
        instructions::treasury::fund_signer(ctx, amount)
    }

    // ---- Registry views ----

    pub fn total_events(ctx: Context<RegistryView>) -> Result<u64> {
        instructions::registry_views::total_events(ctx)
    }

    pub fn get_events(
        ctx: Context<RegistryView>,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<EventEntry>> {
        instructions::registry_views::get_events(ctx, offset, limit)
    }

    pub fn predict_event_address(
        ctx: Context<RegistryView>,
        kind: LedgerKind,
        organizer: Pubkey,
    ) -> Result<Pubkey> {
        instructions::registry_views::predict_event_address(ctx, kind, organizer)
    }

    pub fn registry_balance(ctx: Context<RegistryView>) -> Result<u64> {
        instructions::registry_views::registry_balance(ctx)
    }

    // ---- Event creation and setup ----

    pub fn create_event(ctx: Context<CreateEvent>, params: CreateEventParams) -> Result<()> {
        instructions::create_event::create_event(ctx, params)
    }

    pub fn enable_sale(ctx: Context<SetupEvent>) -> Result<()> {
        instructions::setup_event::enable_sale(ctx)
    }

    pub fn set_base_uri(ctx: Context<SetupEvent>, base_uri: String) -> Result<()> {
        instructions::setup_event::set_base_uri(ctx, base_uri)
    }

    pub fn complete_setup(ctx: Context<SetupEvent>) -> Result<()> {
        instructions::setup_event::complete_setup(ctx)
    }

    pub fn define_ticket_type(
        ctx: Context<DefineTicketType>,
        type_id: u16,
        name: String,
        zone_level: u8,
        max_supply: u32,
        uri: String,
    ) -> Result<()> {
        instructions::define_ticket_type::define_ticket_type(
            ctx, type_id, name, zone_level, max_supply, uri,
        )
    }

    // ---- Claims ----

    pub fn claim_ticket(
        ctx: Context<ClaimTicket>,
        claim_id: [u8; 32],
        recovery_id: u8,
        signature: [u8; 64],
    ) -> Result<()> {
        instructions::claim_ticket::claim_ticket(ctx, claim_id, recovery_id, signature)
    }

    pub fn claim_zoned_ticket(
        ctx: Context<ClaimZonedTicket>,
        type_id: u16,
        claim_id: [u8; 32],
        recovery_id: u8,
        signature: [u8; 64],
    ) -> Result<()> {
        instructions::claim_zoned_ticket::claim_zoned_ticket(
            ctx,
            type_id,
            claim_id,
            recovery_id,
            signature,
        )
    }

    // ---- Ticket lifecycle ----

    pub fn activate_ticket(ctx: Context<ActivateTicket>) -> Result<()> {
        instructions::activate_ticket::activate_ticket(ctx)
    }

    pub fn transfer_ticket(ctx: Context<TransferTicket>, new_holder: Pubkey) -> Result<()> {
        instructions::transfer_ticket::transfer_ticket(ctx, new_holder)
    }

    // ---- Owner operations ----

    pub fn toggle_sale(ctx: Context<ToggleSale>) -> Result<()> {
        instructions::toggle_sale::toggle_sale(ctx)
    }

    pub fn increase_supply(ctx: Context<IncreaseSupply>, new_max_supply: u32) -> Result<()> {
        instructions::increase_supply::increase_supply(ctx, new_max_supply)
    }

    pub fn increase_type_supply(
        ctx: Context<IncreaseTypeSupply>,
        type_id: u16,
        new_max_supply: u32,
    ) -> Result<()> {
        instructions::increase_supply::increase_type_supply(ctx, type_id, new_max_supply)
    }

    pub fn add_ticket_type(
        ctx: Context<AddTicketType>,
        type_id: u16,
        name: String,
        zone_level: u8,
        max_supply: u32,
        uri: String,
    ) -> Result<()> {
        instructions::add_ticket_type::add_ticket_type(ctx, type_id, name, zone_level, max_supply, uri)
    }

    pub fn set_token_uri(ctx: Context<SetTokenUri>, uri: String) -> Result<()> {
        instructions::update_metadata::set_token_uri(ctx, uri)
    }

    pub fn set_type_uri(ctx: Context<SetTypeUri>, type_id: u16, uri: String) -> Result<()> {
        instructions::update_metadata::set_type_uri(ctx, type_id, uri)
    }

    pub fn update_base_uri(ctx: Context<UpdateBaseUri>, base_uri: String) -> Result<()> {
        instructions::update_metadata::update_base_uri(ctx, base_uri)
    }

    pub fn cancel_event(ctx: Context<CloseEvent>) -> Result<()> {
        instructions::close_event::cancel_event(ctx)
    }

    pub fn end_event(ctx: Context<CloseEvent>) -> Result<()> {
        instructions::close_event::end_event(ctx)
    }

    pub fn rotate_platform_signer(ctx: Context<RotateKeys>, new_signer: Pubkey) -> Result<()> {
        instructions::rotate_keys::rotate_platform_signer(ctx, new_signer)
    }

    pub fn rotate_mint_signer(ctx: Context<RotateKeys>, new_signer: [u8; 20]) -> Result<()> {
        instructions::rotate_keys::rotate_mint_signer(ctx, new_signer)
    }

    pub fn transfer_ownership(ctx: Context<RotateKeys>, new_owner: Pubkey) -> Result<()> {
        instructions::rotate_keys::transfer_ownership(ctx, new_owner)
    }

    // ---- Event views ----

    pub fn get_event_info(ctx: Context<EventView>) -> Result<EventInfo> {
        instructions::event_views::get_event_info(ctx)
    }

    pub fn get_ticket_info(ctx: Context<TicketView>) -> Result<TicketInfo> {
        instructions::event_views::get_ticket_info(ctx)
    }

    pub fn get_ticket_type_info(
        ctx: Context<TicketTypeView>,
        type_id: u16,
    ) -> Result<TicketTypeInfo> {
        instructions::event_views::get_ticket_type_info(ctx, type_id)
    }
}

#[cfg(test)]
mod test {
    #[test]
    fn test_id() {
        assert_eq!(
            super::ID.to_string(),
            "Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS"
        );
    }
}

#[cfg(test)]
mod tests;
