mod claim_authorization;
mod lifecycle;
