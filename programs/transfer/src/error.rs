//! Custom Error Types
//!
//! This module defines all errors that the transfer program can return.
//! Each error has a unique numeric code that clients can match against.
//!
//! # Usage
//!
//! ```ignore
//! use crate::error::TransferError;
//!
//! fn some_check() -> ProgramResult {
//!     if !valid {
//!         return Err(TransferError::OwnerMismatch.into());
//!     }
//!     Ok(())
//! }
//! ```

use solana_program::program_error::ProgramError;
use thiserror::Error;

// =============================================================================
// ERROR ENUM
// =============================================================================

/// Errors that may be returned by the transfer program.
///
/// Each variant becomes a unique error code when converted to ProgramError.
/// The codes are assigned based on the order of variants (0, 1, 2, ...).
///
/// # Important
///
/// After deployment, NEVER reorder these variants!
/// Clients depend on stable error codes.
/// Always add new errors at the end.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// Error 0: Invalid instruction data.
    ///
    /// Could not parse the instruction data.
    /// Wrong format, missing bytes, invalid discriminant.
    #[error("Invalid instruction")]
    InvalidInstruction,

    /// Error 1: Account is not owned by the expected program.
    ///
    /// Token accounts passed to TransferSplTokens must be owned by the
    /// SPL Token program. Anything else could carry attacker-crafted data
    /// that merely looks like a token account.
    #[error("Account not owned by the expected program")]
    InvalidAccountOwner,

    /// Error 2: Authority does not match.
    ///
    /// The signer is neither the source token account's owner nor its
    /// approved delegate.
    #[error("Owner mismatch")]
    OwnerMismatch,

    /// Error 3: Mint mismatch.
    ///
    /// Source and destination token accounts hold different mints.
    /// E.g., can't transfer USDC into a BONK account.
    #[error("Mint mismatch")]
    MintMismatch,

    /// Error 4: Insufficient funds.
    ///
    /// The source account doesn't have enough lamports or tokens for the
    /// requested amount. The CPI target would reject this anyway; failing
    /// here gives clients a stable, program-specific code.
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// Error 5: Account is frozen.
    ///
    /// Frozen token accounts cannot send or receive tokens.
    /// Must be thawed by the mint's freeze authority first.
    #[error("Account is frozen")]
    AccountFrozen,
}

// =============================================================================
// CONVERSION TO PROGRAMERROR
// =============================================================================

/// Convert TransferError to ProgramError.
///
/// This implementation allows using the `?` operator with our errors.
///
/// The error code is simply the enum variant's position (0-indexed).
/// InvalidInstruction = 0, InvalidAccountOwner = 1, etc.
impl From<TransferError> for ProgramError {
    fn from(e: TransferError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

WHY CUSTOM ERRORS?
==================

Solana provides generic ProgramError variants like InvalidArgument and
InvalidAccountData, but these are vague. Custom errors give clients a
specific numeric code to match on.

When your program returns Err(TransferError::InsufficientFunds.into()):

1. On-chain: Returns ProgramError::Custom(4)
2. In transaction logs: "Program failed with error: Custom(4)"
3. Client SDK: the error surfaces with code 4 attached

ERROR CODE STABILITY
====================

Safe changes:
- Add new variants at the end
- Change error messages (string only)

Unsafe changes:
- Reorder, remove, or insert variants in the middle
*/
