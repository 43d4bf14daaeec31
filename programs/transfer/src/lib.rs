//! # Transfer Program
//!
//! An on-chain program that forwards transfers of the two asset kinds on
//! Solana: native SOL (lamports) and SPL tokens.
//!
//! ## Overview
//!
//! The program owns no accounts and keeps no state. Each instruction
//! validates the accounts it was given and then delegates the actual balance
//! movement to the program that owns those balances:
//!
//! - Lamport transfers are a CPI into the system program
//! - Token transfers are a CPI into the SPL Token program
//!
//! The ledger applies each CPI atomically; if anything fails, the whole
//! transaction rolls back.
//!
//! ## Instructions
//!
//! | # | Instruction | Description |
//! |---|-------------|-------------|
//! | 0 | TransferLamports | Move lamports between two system accounts |
//! | 1 | TransferSplTokens | Move tokens between two token accounts |

// =============================================================================
// MODULE DECLARATIONS
// =============================================================================

/// Program entrypoint - where Solana calls into our program
pub mod entrypoint;

/// Custom error types with unique codes
pub mod error;

/// Instruction definitions, parsing, and client-side builders
pub mod instruction;

/// Instruction processors (business logic)
pub mod processor;

/// Utility functions for account validation
pub mod utils;

// =============================================================================
// RE-EXPORTS
// =============================================================================

// Make commonly used types available at crate root
// Users can write: use transfer_program::TransferError;
// Instead of: use transfer_program::error::TransferError;

pub use error::TransferError;
pub use instruction::TransferInstruction;
pub use processor::Processor;

// =============================================================================
// PROGRAM ID
// =============================================================================

// This macro declares the program's on-chain address
solana_program::declare_id!("AMXANSzuTYvXaYEC3Hwbn3Nx2fiGJFj9LEzXvVXvRQFX");

/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

WHY DOES THIS PROGRAM EXIST?
============================

Neither transfer needs a custom program in principle: a wallet could call
the system program or the token program directly. Routing them through one
program gives clients a single instruction surface for both asset kinds,
and gives us one place to bolt on policy later (limits, allow-lists, fees).

WHY NO STATE MODULE?
====================

The token program keeps token balances, the runtime keeps lamport balances.
This program only reads the accounts it is handed (to validate them) and
never packs data of its own, so there is nothing to put in a state module.

DECLARE_ID MACRO
================

solana_program::declare_id!("AMXA...RQFX");

This creates:
- A constant `ID` of type Pubkey
- A function `id()` that returns the Pubkey
- A function `check_id(id: &Pubkey) -> bool`

The string is a base58-encoded 32-byte public key - the address the
program is deployed at.
*/
