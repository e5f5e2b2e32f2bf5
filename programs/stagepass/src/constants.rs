// Seeds
pub const REGISTRY_SEED: &[u8] = b"registry";
pub const EVENT_SEED: &[u8] = b"event";
pub const TICKET_SEED: &[u8] = b"ticket";
pub const TICKET_TYPE_SEED: &[u8] = b"ticket_type";
pub const CLAIM_SEED: &[u8] = b"claim";

// Limits
pub const MAX_EVENT_NAME: usize = 64;
pub const MAX_TYPE_NAME: usize = 32;
pub const MAX_URI_LENGTH: usize = 128;
pub const MAX_TICKET_SUPPLY: u32 = 1_000_000;
pub const MAX_TICKET_TYPES: u16 = 32;
pub const MAX_TRACKED_EVENTS: usize = 128;
pub const GET_EVENTS_PAGE_LIMIT: u64 = 12;   // keeps a page inside return-data size

// Claim authorization
// Domain prefix hashed in front of every 32-byte claim digest before recovery.
pub const CLAIM_MESSAGE_PREFIX: &[u8] = b"\x19Stagepass Signed Claim:\n32";
pub const MINT_SIGNER_LEN: usize = 20;
