use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;
use solana_program::secp256k1_recover::secp256k1_recover;

use crate::constants::{CLAIM_MESSAGE_PREFIX, MINT_SIGNER_LEN};
use crate::errors::StagepassError;

/// Canonical digest over everything a claim signature commits to: the
/// ledger identity, the type id for zoned claims, the single-use claim
/// identifier, and the claimant wallet.
pub fn claim_digest(
    ledger: &Pubkey,
    ticket_type: Option<u16>,
    claim_id: &[u8; 32],
    claimant: &Pubkey,
) -> [u8; 32] {
    let mut data = Vec::with_capacity(98);
    data.extend_from_slice(ledger.as_ref());
    if let Some(type_id) = ticket_type {
        data.extend_from_slice(&type_id.to_le_bytes());
    }
    data.extend_from_slice(claim_id);
    data.extend_from_slice(claimant.as_ref());
    keccak::hash(&data).to_bytes()
}

/// The message actually signed: the digest behind the domain prefix, so
/// claim signatures can never collide with any other signed payload.
pub fn signed_message(digest: &[u8; 32]) -> [u8; 32] {
    keccak::hashv(&[CLAIM_MESSAGE_PREFIX, digest]).to_bytes()
}

/// Recovers the 20-byte signer address from a 64-byte signature plus
/// recovery id. Any malformed input surfaces as InvalidSignature.
pub fn recover_signer(
    message: &[u8; 32],
    recovery_id: u8,
    signature: &[u8; 64],
) -> Result<[u8; MINT_SIGNER_LEN]> {
    let pubkey = secp256k1_recover(message, recovery_id, signature)
        .map_err(|_| StagepassError::InvalidSignature)?;
    let hash = keccak::hash(&pubkey.to_bytes());
    let mut signer = [0u8; MINT_SIGNER_LEN];
    signer.copy_from_slice(&hash.to_bytes()[32 - MINT_SIGNER_LEN..]);
    Ok(signer)
}

/// Pure verification step of a claim: recompute the bound message and
/// check the signature resolves to the current mint signer.
pub fn verify_claim(
    mint_signer: &[u8; MINT_SIGNER_LEN],
    ledger: &Pubkey,
    ticket_type: Option<u16>,
    claim_id: &[u8; 32],
    claimant: &Pubkey,
    recovery_id: u8,
    signature: &[u8; 64],
) -> Result<()> {
    let digest = claim_digest(ledger, ticket_type, claim_id, claimant);
    let message = signed_message(&digest);
    let recovered = recover_signer(&message, recovery_id, signature)?;
    require!(recovered == *mint_signer, StagepassError::InvalidSignature);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_binds_every_input() {
        let ledger = Pubkey::new_unique();
        let claimant = Pubkey::new_unique();
        let claim_id = [7u8; 32];

        let base = claim_digest(&ledger, None, &claim_id, &claimant);
        assert_eq!(base, claim_digest(&ledger, None, &claim_id, &claimant));

        assert_ne!(base, claim_digest(&Pubkey::new_unique(), None, &claim_id, &claimant));
        assert_ne!(base, claim_digest(&ledger, Some(1), &claim_id, &claimant));
        assert_ne!(base, claim_digest(&ledger, None, &[8u8; 32], &claimant));
        assert_ne!(base, claim_digest(&ledger, None, &claim_id, &Pubkey::new_unique()));
    }

    #[test]
    fn type_id_changes_digest() {
        let ledger = Pubkey::new_unique();
        let claimant = Pubkey::new_unique();
        let claim_id = [1u8; 32];
        let a = claim_digest(&ledger, Some(1), &claim_id, &claimant);
        let b = claim_digest(&ledger, Some(2), &claim_id, &claimant);
        assert_ne!(a, b);
    }

    #[test]
    fn prefix_separates_message_from_digest() {
        let digest = [3u8; 32];
        assert_ne!(signed_message(&digest), digest);
        assert_eq!(signed_message(&digest), signed_message(&digest));
    }

    #[test]
    fn garbage_signature_is_invalid() {
        let message = [9u8; 32];
        let result = recover_signer(&message, 5, &[0u8; 64]);
        assert!(result.is_err());
    }
}
