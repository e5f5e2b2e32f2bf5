use anchor_lang::prelude::*;

// Variant order is load-bearing: integrators branch on the stable codes.
#[error_code]
pub enum StagepassError {
    #[msg("Caller is not the event owner")]
    NotOwner,
    #[msg("Caller is not the platform signer")]
    NotPlatformSigner,
    #[msg("Caller is neither the event owner nor the platform signer")]
    NotOwnerOrPlatform,
    #[msg("Caller is not the registry admin")]
    NotAdmin,
    #[msg("Caller is not the registry multisig")]
    NotMultisig,
    #[msg("Caller is not the mint signer")]
    NotMintSigner,
    #[msg("Caller is not the ticket holder")]
    NotTicketHolder,
    #[msg("Claim signature does not resolve to the current mint signer")]
    InvalidSignature,
    #[msg("Claim identifier has already been used")]
    AlreadyClaimed,
    #[msg("Ticket sale is not active")]
    SaleNotActive,
    #[msg("Event has been canceled")]
    EventCanceled,
    #[msg("Event has ended")]
    EventEnded,
    #[msg("Event has already ended")]
    EventAlreadyEnded,
    #[msg("Maximum ticket supply reached")]
    SupplyExhausted,
    #[msg("Maximum supply for this ticket type reached")]
    TypeSupplyExhausted,
    #[msg("Ticket type does not exist")]
    InvalidTicketType,
    #[msg("Ticket type is not active")]
    TicketTypeInactive,
    #[msg("Ticket type is already defined")]
    DuplicateTicketType,
    #[msg("Activated tickets are locked until the event ends")]
    TransferLocked,
    #[msg("Ticket has already been activated")]
    AlreadyActivated,
    #[msg("Setup phase is already complete")]
    SetupAlreadyComplete,
    #[msg("Setup phase is not complete")]
    SetupNotComplete,
    #[msg("Platform has already executed this one-time action")]
    ActionAlreadyExecuted,
    #[msg("Address cannot be the null identity")]
    InvalidAddress,
    #[msg("Ledger is already initialized")]
    DoubleInitialization,
    #[msg("Registry is paused")]
    Paused,
    #[msg("Operation is not supported for this ledger kind")]
    UnsupportedLedgerKind,
    #[msg("Ticket type limit reached")]
    TicketTypeLimitReached,
    #[msg("Registry event list is full")]
    EventListFull,
    #[msg("Insufficient treasury balance")]
    InsufficientFunds,
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Supply must increase and stay within the global cap")]
    InvalidSupply,
    #[msg("Name exceeds maximum length")]
    NameTooLong,
    #[msg("URI exceeds maximum length")]
    UriTooLong,
    #[msg("String contains invalid characters")]
    InvalidCharacters,
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Invalid template configuration")]
    InvalidTemplate,
}
