#[cfg(test)]
mod tests {
    use anchor_lang::prelude::*;

    use crate::errors::StagepassError;
    use crate::state::{
        CreateEventParams, EventLedger, LedgerActor, LedgerKind, LedgerPhase, LedgerTemplate,
        Ticket,
    };

    fn new_ledger(kind: LedgerKind) -> (EventLedger, Pubkey, Pubkey) {
        let owner = Pubkey::new_unique();
        let platform = Pubkey::new_unique();
        let mut ledger = EventLedger::default();
        let params = CreateEventParams {
            kind,
            name: "Warehouse Rave".to_string(),
            base_uri: "https://tickets.example/rave".to_string(),
            max_supply: 500,
            organizer: owner,
            payment_ref: [7u8; 32],
        };
        let template = LedgerTemplate {
            version: 1,
            max_types: 8,
        };
        ledger
            .init_checked(
                Pubkey::new_unique(),
                3,
                &params,
                &template,
                platform,
                [0xAB; 20],
                1_700_000_000,
                254,
            )
            .unwrap();
        (ledger, owner, platform)
    }

    #[test]
    fn setup_window_belongs_to_the_platform() {
        let (mut ledger, owner, platform) = new_ledger(LedgerKind::SingleType);

        assert_eq!(ledger.phase, LedgerPhase::Setup);
        assert_eq!(
            ledger.assert_setup_op(&owner),
            Err(StagepassError::NotPlatformSigner.into())
        );
        ledger.assert_setup_op(&platform).unwrap();

        // Owner operations wait until the handoff
        assert_eq!(
            ledger.assert_active_phase(),
            Err(StagepassError::SetupNotComplete.into())
        );

        ledger.complete_setup();
        ledger.assert_active_phase().unwrap();
        assert_eq!(
            ledger.assert_setup_op(&platform),
            Err(StagepassError::SetupAlreadyComplete.into())
        );
    }

    #[test]
    fn activated_ticket_stays_put_until_the_event_ends() {
        let (mut ledger, _owner, _platform) = new_ledger(LedgerKind::SingleType);
        ledger.complete_setup();
        ledger.toggle_sale().unwrap();

        let holder = Pubkey::new_unique();
        let mut ticket = Ticket {
            ledger: Pubkey::new_unique(),
            ticket_id: 1,
            holder,
            ..Ticket::default()
        };

        // A never-activated ticket moves freely
        ticket.assert_transferable(ledger.ended).unwrap();
        ticket.transfer_to(Pubkey::new_unique()).unwrap();
        assert_eq!(ticket.transfer_count, 1);

        ticket.activate(1_700_000_500).unwrap();
        assert_eq!(ticket.activated_at, Some(1_700_000_500));
        assert_eq!(
            ticket.activate(1_700_000_501),
            Err(StagepassError::AlreadyActivated.into())
        );

        assert_eq!(
            ticket.assert_transferable(ledger.ended),
            Err(StagepassError::TransferLocked.into())
        );

        ledger.end(LedgerActor::Owner).unwrap();
        ticket.assert_transferable(ledger.ended).unwrap();
        ticket.transfer_to(Pubkey::new_unique()).unwrap();
        assert_eq!(ticket.transfer_count, 2);
    }

    #[test]
    fn platform_emergency_cancel_spends_its_single_use() {
        let (mut ledger, _owner, platform) = new_ledger(LedgerKind::SingleType);
        ledger.complete_setup();
        ledger.toggle_sale().unwrap();

        assert_eq!(
            ledger.resolve_lifecycle_actor(&platform),
            Ok(LedgerActor::Platform)
        );
        assert_eq!(
            ledger.resolve_lifecycle_actor(&Pubkey::new_unique()),
            Err(StagepassError::NotOwnerOrPlatform.into())
        );

        ledger.cancel(LedgerActor::Platform).unwrap();
        assert!(ledger.canceled);
        assert!(ledger.platform_cancel_used);

        // The spent action reports before the ledger state does
        assert_eq!(
            ledger.cancel(LedgerActor::Platform),
            Err(StagepassError::ActionAlreadyExecuted.into())
        );
        assert_eq!(
            ledger.cancel(LedgerActor::Owner),
            Err(StagepassError::EventCanceled.into())
        );
        assert_eq!(
            ledger.end(LedgerActor::Owner),
            Err(StagepassError::EventCanceled.into())
        );

        // Claims slam shut with the cancellation
        assert_eq!(
            ledger.assert_claim_open(),
            Err(StagepassError::EventCanceled.into())
        );
    }

    #[test]
    fn ownership_handoff_moves_control() {
        let (mut ledger, owner, _platform) = new_ledger(LedgerKind::SingleType);
        ledger.complete_setup();

        let successor = Pubkey::new_unique();
        ledger.assert_owner(&owner).unwrap();
        ledger.transfer_ownership(successor).unwrap();

        assert_eq!(
            ledger.assert_owner(&owner),
            Err(StagepassError::NotOwner.into())
        );
        ledger.assert_owner(&successor).unwrap();
        assert_eq!(ledger.roles.version, 2);

        // The claim signer is untouched by the handoff
        assert_eq!(ledger.roles.mint_signer, [0xAB; 20]);
    }
}
