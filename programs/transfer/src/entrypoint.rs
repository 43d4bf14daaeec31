//! Program Entrypoint
//!
//! This module defines the entrypoint for the Solana program.
//! The entrypoint is where the Solana runtime calls into our program
//! when a transaction includes an instruction for us.
//!
//! Think of it like the `main()` function, but for on-chain programs.

// =============================================================================
// CONDITIONAL COMPILATION
// =============================================================================

// Only compile this module if the "no-entrypoint" feature is NOT enabled
// This allows other programs to use our crate without entrypoint conflicts
#![cfg(not(feature = "no-entrypoint"))]

// =============================================================================
// IMPORTS
// =============================================================================

use crate::processor::Processor;
use solana_program::{
    account_info::AccountInfo,
    entrypoint,
    entrypoint::ProgramResult,
    pubkey::Pubkey,
};

// =============================================================================
// ENTRYPOINT DECLARATION
// =============================================================================

// This macro generates the actual entrypoint that Solana looks for
// It handles:
// - Setting up the heap allocator
// - Deserializing accounts from raw memory
// - Calling our function with proper types
// - Converting our Result to what Solana expects
entrypoint!(process_instruction);

// =============================================================================
// ENTRYPOINT FUNCTION
// =============================================================================

/// The main entrypoint for the transfer program.
///
/// This function is called by the Solana runtime for every instruction
/// sent to our program.
///
/// # Arguments
///
/// * `program_id` - The public key of this program (our deployed address)
/// * `accounts` - Slice of all accounts involved in this instruction
/// * `instruction_data` - The raw bytes of instruction-specific data
///
/// # Returns
///
/// * `Ok(())` - Instruction executed successfully
/// * `Err(ProgramError)` - Something went wrong; the transaction rolls back
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    // Delegate to our processor
    // This separation makes the code more organized and testable
    Processor::process(program_id, accounts, instruction_data)
}

/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

THE ENTRYPOINT MACRO
====================

entrypoint!(process_instruction);

This single line does A LOT:

1. Creates the actual `entrypoint` symbol that Solana looks for
2. Sets up a custom allocator for the BPF heap
3. Sets up a custom panic handler
4. Deserializes the raw input buffer into Rust types

What the macro gives us:
- program_id: &Pubkey (32 bytes, our address)
- accounts: &[AccountInfo] (variable length array)
- instruction_data: &[u8] (variable length bytes)

CPI AND SIGNER PRIVILEGES
=========================

Both of our instructions end in a cross-program invocation (CPI).
A detail that matters for this program: signer privileges extend through
a CPI. When the user signs as `from`, and we invoke the system program
with `from` in the account list, the system program sees `from` as a
signer too. That is why this program can forward transfers without
holding any authority of its own.

CONDITIONAL COMPILATION
=======================

#![cfg(not(feature = "no-entrypoint"))]

This entire file is only compiled when the feature is NOT set.
Another program depending on this crate for its instruction builders
enables "no-entrypoint" so the two entrypoints don't collide.
*/
