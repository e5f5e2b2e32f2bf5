pub mod claim_auth;

use anchor_lang::prelude::*;
use crate::constants::{MAX_URI_LENGTH, MAX_EVENT_NAME};
use crate::errors::StagepassError;

pub fn validate_string(input: &str) -> Result<()> {
    require!(
        input.chars().all(|c| c.is_ascii_graphic() || c == ' '),
        StagepassError::InvalidCharacters
    );
    Ok(())
}

pub fn validate_name(input: &str, max_len: usize) -> Result<()> {
    require!(input.len() <= max_len, StagepassError::NameTooLong);
    validate_string(input)
}

pub fn validate_uri(input: &str) -> Result<()> {
    require!(input.len() <= MAX_URI_LENGTH, StagepassError::UriTooLong);
    validate_string(input)
}

pub fn validate_event_name(input: &str) -> Result<()> {
    validate_name(input, MAX_EVENT_NAME)
}

pub fn safe_add(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b).ok_or(StagepassError::MathOverflow.into())
}

pub fn safe_sub(a: u64, b: u64) -> Result<u64> {
    a.checked_sub(b).ok_or(StagepassError::InsufficientFunds.into())
}
