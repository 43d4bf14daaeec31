//! Assertion Helper Functions
//!
//! Common validation checks used across all processors.
//! These functions make security checks consistent and readable.
//!
//! # Usage Pattern
//!
//! ```ignore
//! pub fn process(...) -> ProgramResult {
//!     // Validate everything first
//!     assert_signer(from_info)?;
//!     assert_writable(from_info)?;
//!     assert_program(system_program_info, &system_program::id())?;
//!
//!     // Then do the actual work
//!     ...
//! }
//! ```

use crate::error::TransferError;
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    program_error::ProgramError,
    pubkey::Pubkey,
};

// =============================================================================
// SIGNER CHECKS
// =============================================================================

/// Assert that an account is a signer of the transaction.
///
/// # Why This Matters
///
/// Both of our instructions spend from an account the signer controls.
/// If we don't check that the controller signed, anyone could name
/// someone else's account as the source and drain it.
///
/// # Errors
///
/// Returns `MissingRequiredSignature` if not a signer.
pub fn assert_signer(account: &AccountInfo) -> ProgramResult {
    if !account.is_signer {
        Err(ProgramError::MissingRequiredSignature)
    } else {
        Ok(())
    }
}

// =============================================================================
// WRITABLE CHECKS
// =============================================================================

/// Assert that an account is writable.
///
/// # Why This Matters
///
/// If an account isn't marked writable in the transaction, the runtime
/// will reject the CPI's modifications to it. This check gives a clearer
/// error earlier.
///
/// # Errors
///
/// Returns `InvalidAccountData` if not writable.
pub fn assert_writable(account: &AccountInfo) -> ProgramResult {
    if !account.is_writable {
        Err(ProgramError::InvalidAccountData)
    } else {
        Ok(())
    }
}

// =============================================================================
// OWNERSHIP CHECKS
// =============================================================================

/// Assert that an account is owned by the expected program.
///
/// # Why This Matters
///
/// An attacker could create an account owned by their own program with
/// data that merely looks like a token account. We only trust state in
/// accounts the token program itself owns.
///
/// # Errors
///
/// Returns `InvalidAccountOwner` if the owner doesn't match.
pub fn assert_owned_by(account: &AccountInfo, owner: &Pubkey) -> ProgramResult {
    if account.owner != owner {
        Err(TransferError::InvalidAccountOwner.into())
    } else {
        Ok(())
    }
}

// =============================================================================
// PROGRAM ACCOUNT CHECKS
// =============================================================================

/// Assert that an account is the expected program.
///
/// # Why This Matters
///
/// We are about to CPI into this account. If a transaction could smuggle
/// in a different program here, our validated accounts would be handed to
/// arbitrary code. Only ever invoke the exact program we expect.
///
/// # Errors
///
/// Returns `IncorrectProgramId` if the key doesn't match.
pub fn assert_program(account: &AccountInfo, expected: &Pubkey) -> ProgramResult {
    if account.key != expected {
        Err(ProgramError::IncorrectProgramId)
    } else {
        Ok(())
    }
}

/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

WHY ASSERTIONS?
===============

Every processor needs the same checks:
1. Did the source's controller sign?
2. Are the accounts we're about to mutate writable?
3. Is the state we're reading owned by the program we trust?
4. Is the CPI target the real program?

Without helper functions the same if-blocks get copy-pasted everywhere
and it's easy to forget one. With them, each check is one auditable line.

THE PATTERN
===========

Every processor follows this pattern:

```rust
pub fn process(...) -> ProgramResult {
    // 1. Parse accounts
    let account_iter = &mut accounts.iter();
    let account1 = next_account_info(account_iter)?;

    // 2. Validate EVERYTHING
    assert_signer(authority)?;
    assert_writable(account1)?;
    // ... more checks ...

    // 3. Then, and only then, invoke
    invoke(&ix, &[...])?;

    Ok(())
}
```
*/
