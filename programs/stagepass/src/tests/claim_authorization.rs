#[cfg(test)]
mod tests {
    use anchor_lang::prelude::*;
    use libsecp256k1::{Message, PublicKey, SecretKey};

    use crate::constants::MINT_SIGNER_LEN;
    use crate::errors::StagepassError;
    use crate::state::{
        admit_claim, CreateEventParams, EventLedger, LedgerKind, LedgerTemplate, SingleInventory,
        TicketInventory, TicketType, ZonedInventory,
    };
    use crate::utils::claim_auth;

    fn keypair(seed: u8) -> (SecretKey, [u8; MINT_SIGNER_LEN]) {
        let secret = SecretKey::parse(&[seed; 32]).unwrap();
        let public = PublicKey::from_secret_key(&secret);
        let hash = anchor_lang::solana_program::keccak::hash(&public.serialize()[1..]);
        let mut address = [0u8; MINT_SIGNER_LEN];
        address.copy_from_slice(&hash.to_bytes()[12..]);
        (secret, address)
    }

    fn sign_claim(
        secret: &SecretKey,
        ledger: &Pubkey,
        ticket_type: Option<u16>,
        claim_id: &[u8; 32],
        claimant: &Pubkey,
    ) -> (u8, [u8; 64]) {
        let digest = claim_auth::claim_digest(ledger, ticket_type, claim_id, claimant);
        let message = claim_auth::signed_message(&digest);
        let (signature, recovery_id) = libsecp256k1::sign(&Message::parse(&message), secret);
        (recovery_id.serialize(), signature.serialize())
    }

    fn single_ledger(
        mint_signer: [u8; MINT_SIGNER_LEN],
        max_supply: u32,
    ) -> (EventLedger, Pubkey) {
        let mut ledger = EventLedger::default();
        let params = CreateEventParams {
            kind: LedgerKind::SingleType,
            name: "Night Show".to_string(),
            base_uri: "https://tickets.example/meta".to_string(),
            max_supply,
            organizer: Pubkey::new_unique(),
            payment_ref: [0u8; 32],
        };
        let template = LedgerTemplate {
            version: 1,
            max_types: 1,
        };
        ledger
            .init_checked(
                Pubkey::new_unique(),
                0,
                &params,
                &template,
                Pubkey::new_unique(),
                mint_signer,
                1_700_000_000,
                250,
            )
            .unwrap();
        ledger.complete_setup();
        ledger.toggle_sale().unwrap();
        (ledger, Pubkey::new_unique())
    }

    fn zoned_ledger(
        mint_signer: [u8; MINT_SIGNER_LEN],
        type_supply: u32,
        global_supply: u32,
    ) -> (EventLedger, TicketType, Pubkey) {
        let mut ledger = EventLedger::default();
        let params = CreateEventParams {
            kind: LedgerKind::Zoned,
            name: "Arena Night".to_string(),
            base_uri: "https://tickets.example/arena".to_string(),
            max_supply: global_supply,
            organizer: Pubkey::new_unique(),
            payment_ref: [0u8; 32],
        };
        let template = LedgerTemplate {
            version: 1,
            max_types: 8,
        };
        ledger
            .init_checked(
                Pubkey::new_unique(),
                0,
                &params,
                &template,
                Pubkey::new_unique(),
                mint_signer,
                1_700_000_000,
                252,
            )
            .unwrap();
        let ledger_key = Pubkey::new_unique();
        let mut ticket_type = TicketType::default();
        ticket_type
            .define(
                ledger_key,
                1,
                "Floor".to_string(),
                0,
                type_supply,
                String::new(),
                251,
            )
            .unwrap();
        ledger.register_type().unwrap();
        ledger.complete_setup();
        ledger.toggle_sale().unwrap();
        (ledger, ticket_type, ledger_key)
    }

    /// Runs the admission pipeline the claim instruction runs, against
    /// in-memory state.
    fn try_single_claim(
        ledger: &mut EventLedger,
        ledger_key: &Pubkey,
        marker_used: &mut bool,
        claimant: &Pubkey,
        claim_id: &[u8; 32],
        recovery_id: u8,
        signature: &[u8; 64],
    ) -> Result<u32> {
        ledger.assert_active_phase()?;
        ledger.assert_claim_open()?;
        let mut inventory = SingleInventory { ledger };
        admit_claim(&inventory, *marker_used)?;
        claim_auth::verify_claim(
            &inventory.ledger.roles.mint_signer,
            ledger_key,
            None,
            claim_id,
            claimant,
            recovery_id,
            signature,
        )?;
        inventory.record_mint()?;
        *marker_used = true;
        Ok(inventory.ledger.total_minted)
    }

    fn try_zoned_claim(
        ledger: &mut EventLedger,
        ticket_type: &mut TicketType,
        ledger_key: &Pubkey,
        marker_used: &mut bool,
        claimant: &Pubkey,
        claim_id: &[u8; 32],
        recovery_id: u8,
        signature: &[u8; 64],
    ) -> Result<u32> {
        ledger.assert_active_phase()?;
        ledger.assert_claim_open()?;
        let type_id = ticket_type.type_id;
        let mut inventory = ZonedInventory {
            ledger,
            ticket_type,
        };
        admit_claim(&inventory, *marker_used)?;
        claim_auth::verify_claim(
            &inventory.ledger.roles.mint_signer,
            ledger_key,
            Some(type_id),
            claim_id,
            claimant,
            recovery_id,
            signature,
        )?;
        inventory.record_mint()?;
        *marker_used = true;
        Ok(inventory.ledger.total_minted)
    }

    #[test]
    fn valid_signature_mints_until_supply_runs_out() {
        let (secret, address) = keypair(1);
        let (mut ledger, ledger_key) = single_ledger(address, 2);

        for expected_id in 1..=2u32 {
            let claimant = Pubkey::new_unique();
            let claim_id = [expected_id as u8; 32];
            let (recovery_id, signature) =
                sign_claim(&secret, &ledger_key, None, &claim_id, &claimant);
            let mut used = false;
            let ticket_id = try_single_claim(
                &mut ledger,
                &ledger_key,
                &mut used,
                &claimant,
                &claim_id,
                recovery_id,
                &signature,
            )
            .unwrap();
            assert_eq!(ticket_id, expected_id);
            assert!(used);
        }

        // Supply runs out before the signature is even looked at
        let claimant = Pubkey::new_unique();
        let claim_id = [9u8; 32];
        let mut used = false;
        let result = try_single_claim(
            &mut ledger,
            &ledger_key,
            &mut used,
            &claimant,
            &claim_id,
            0,
            &[0u8; 64],
        );
        assert_eq!(result, Err(StagepassError::SupplyExhausted.into()));
        assert!(!used);
        assert_eq!(ledger.total_minted, 2);
    }

    #[test]
    fn signature_is_bound_to_the_claimant() {
        let (secret, address) = keypair(2);
        let (mut ledger, ledger_key) = single_ledger(address, 10);

        let intended = Pubkey::new_unique();
        let interceptor = Pubkey::new_unique();
        let claim_id = [4u8; 32];
        let (recovery_id, signature) =
            sign_claim(&secret, &ledger_key, None, &claim_id, &intended);

        let mut used = false;
        let result = try_single_claim(
            &mut ledger,
            &ledger_key,
            &mut used,
            &interceptor,
            &claim_id,
            recovery_id,
            &signature,
        );
        assert_eq!(result, Err(StagepassError::InvalidSignature.into()));
        assert_eq!(ledger.total_minted, 0);
        assert!(!used);

        // The wallet it was issued to still gets through
        let ticket_id = try_single_claim(
            &mut ledger,
            &ledger_key,
            &mut used,
            &intended,
            &claim_id,
            recovery_id,
            &signature,
        )
        .unwrap();
        assert_eq!(ticket_id, 1);
    }

    #[test]
    fn signature_is_bound_to_the_claim_identifier() {
        let (secret, address) = keypair(8);
        let (mut ledger, ledger_key) = single_ledger(address, 10);

        let claimant = Pubkey::new_unique();
        let issued_id = [10u8; 32];
        let presented_id = [11u8; 32];
        let (recovery_id, signature) =
            sign_claim(&secret, &ledger_key, None, &issued_id, &claimant);

        // Presenting the signature under a different identifier fails and
        // leaves that identifier's marker unburned
        let mut presented_used = false;
        let result = try_single_claim(
            &mut ledger,
            &ledger_key,
            &mut presented_used,
            &claimant,
            &presented_id,
            recovery_id,
            &signature,
        );
        assert_eq!(result, Err(StagepassError::InvalidSignature.into()));
        assert_eq!(ledger.total_minted, 0);
        assert!(!presented_used);

        let mut issued_used = false;
        let ticket_id = try_single_claim(
            &mut ledger,
            &ledger_key,
            &mut issued_used,
            &claimant,
            &issued_id,
            recovery_id,
            &signature,
        )
        .unwrap();
        assert_eq!(ticket_id, 1);
        assert!(issued_used);
    }

    #[test]
    fn reusing_a_claim_id_is_rejected() {
        let (secret, address) = keypair(3);
        let (mut ledger, ledger_key) = single_ledger(address, 10);

        let claimant = Pubkey::new_unique();
        let claim_id = [5u8; 32];
        let (recovery_id, signature) =
            sign_claim(&secret, &ledger_key, None, &claim_id, &claimant);

        let mut used = false;
        try_single_claim(
            &mut ledger,
            &ledger_key,
            &mut used,
            &claimant,
            &claim_id,
            recovery_id,
            &signature,
        )
        .unwrap();

        let result = try_single_claim(
            &mut ledger,
            &ledger_key,
            &mut used,
            &claimant,
            &claim_id,
            recovery_id,
            &signature,
        );
        assert_eq!(result, Err(StagepassError::AlreadyClaimed.into()));
        assert_eq!(ledger.total_minted, 1);
    }

    #[test]
    fn signature_does_not_transfer_across_ledgers() {
        let (secret, address) = keypair(4);
        let (mut ledger_a, key_a) = single_ledger(address, 10);
        let (mut ledger_b, key_b) = single_ledger(address, 10);

        let claimant = Pubkey::new_unique();
        let claim_id = [6u8; 32];
        let (recovery_id, signature) = sign_claim(&secret, &key_a, None, &claim_id, &claimant);

        let mut used = false;
        let replay = try_single_claim(
            &mut ledger_b,
            &key_b,
            &mut used,
            &claimant,
            &claim_id,
            recovery_id,
            &signature,
        );
        assert_eq!(replay, Err(StagepassError::InvalidSignature.into()));
        assert_eq!(ledger_b.total_minted, 0);

        try_single_claim(
            &mut ledger_a,
            &key_a,
            &mut used,
            &claimant,
            &claim_id,
            recovery_id,
            &signature,
        )
        .unwrap();
    }

    #[test]
    fn mint_signer_rotation_invalidates_outstanding_signatures() {
        let (old_secret, old_address) = keypair(5);
        let (new_secret, new_address) = keypair(6);
        let (mut ledger, ledger_key) = single_ledger(old_address, 10);

        let claimant = Pubkey::new_unique();
        let claim_id = [8u8; 32];
        let (recovery_id, signature) =
            sign_claim(&old_secret, &ledger_key, None, &claim_id, &claimant);

        ledger.rotate_mint_signer(new_address).unwrap();
        assert_eq!(ledger.roles.version, 2);

        let mut used = false;
        let stale = try_single_claim(
            &mut ledger,
            &ledger_key,
            &mut used,
            &claimant,
            &claim_id,
            recovery_id,
            &signature,
        );
        assert_eq!(stale, Err(StagepassError::InvalidSignature.into()));

        let (recovery_id, signature) =
            sign_claim(&new_secret, &ledger_key, None, &claim_id, &claimant);
        let ticket_id = try_single_claim(
            &mut ledger,
            &ledger_key,
            &mut used,
            &claimant,
            &claim_id,
            recovery_id,
            &signature,
        )
        .unwrap();
        assert_eq!(ticket_id, 1);
    }

    #[test]
    fn zoned_claims_bind_the_type_and_burn_both_counters() {
        let (secret, address) = keypair(7);
        let (mut ledger, mut floor, ledger_key) = zoned_ledger(address, 5, 100);

        let claimant = Pubkey::new_unique();
        let claim_id = [2u8; 32];

        // Signed for a different type than the one claimed against
        let (recovery_id, signature) =
            sign_claim(&secret, &ledger_key, Some(2), &claim_id, &claimant);
        let mut used = false;
        let mismatched = try_zoned_claim(
            &mut ledger,
            &mut floor,
            &ledger_key,
            &mut used,
            &claimant,
            &claim_id,
            recovery_id,
            &signature,
        );
        assert_eq!(mismatched, Err(StagepassError::InvalidSignature.into()));
        assert_eq!(floor.minted, 0);

        let (recovery_id, signature) =
            sign_claim(&secret, &ledger_key, Some(1), &claim_id, &claimant);
        let ticket_id = try_zoned_claim(
            &mut ledger,
            &mut floor,
            &ledger_key,
            &mut used,
            &claimant,
            &claim_id,
            recovery_id,
            &signature,
        )
        .unwrap();
        assert_eq!(ticket_id, 1);
        assert_eq!(floor.minted, 1);
        assert_eq!(ledger.total_minted, 1);
    }

    #[test]
    fn zoned_type_cap_hits_before_the_global_cap() {
        let (secret, address) = keypair(9);
        let (mut ledger, mut floor, ledger_key) = zoned_ledger(address, 1, 100);

        let claimant = Pubkey::new_unique();
        let claim_id = [3u8; 32];
        let (recovery_id, signature) =
            sign_claim(&secret, &ledger_key, Some(1), &claim_id, &claimant);
        let mut used = false;
        try_zoned_claim(
            &mut ledger,
            &mut floor,
            &ledger_key,
            &mut used,
            &claimant,
            &claim_id,
            recovery_id,
            &signature,
        )
        .unwrap();

        // Second claim dies on the type cap, signature never consulted
        let mut second_used = false;
        let result = try_zoned_claim(
            &mut ledger,
            &mut floor,
            &ledger_key,
            &mut second_used,
            &Pubkey::new_unique(),
            &[7u8; 32],
            0,
            &[0u8; 64],
        );
        assert_eq!(result, Err(StagepassError::TypeSupplyExhausted.into()));
        assert_eq!(ledger.total_minted, 1);
    }
}
