//! Instruction Types
//!
//! This module defines all instructions supported by the transfer program.
//! Each instruction has:
//! - A discriminant (first byte, identifies the instruction type)
//! - Instruction-specific data (remaining bytes)
//! - Expected accounts (documented, not encoded in data)
//!
//! # Instruction Format
//!
//! ```text
//! [discriminant: u8][amount: u64, little-endian]
//! ```
//!
//! # Discriminant Values
//!
//! | Value | Instruction |
//! |-------|-------------|
//! | 0 | TransferLamports |
//! | 1 | TransferSplTokens |
//!
//! The module also provides builder functions (`transfer_lamports`,
//! `transfer_spl_tokens`) that assemble a complete `Instruction` with the
//! right account metas, so clients and tests never hand-write the layout.

use crate::error::TransferError;
use solana_program::{
    instruction::{AccountMeta, Instruction},
    program_error::ProgramError,
    pubkey::Pubkey,
    system_program,
};

// =============================================================================
// TRANSFER INSTRUCTION ENUM
// =============================================================================

/// All instructions supported by the transfer program.
///
/// Each variant contains the instruction-specific data.
/// Account requirements are documented in comments but not encoded.
#[derive(Clone, Debug, PartialEq)]
pub enum TransferInstruction {
    /// Move lamports from one system account to another.
    ///
    /// Executed as a CPI into the system program, so the source must be a
    /// plain system-owned account with no data.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | from | ✓ | ✓ | Source account, pays the lamports |
    /// | 1 | to | ✓ | | Destination account |
    /// | 2 | system_program | | | The system program |
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (0)
    /// [1..9]: amount (u64, little-endian)
    /// ```
    TransferLamports {
        /// Amount of lamports to transfer
        amount: u64,
    },

    /// Move tokens from one token account to another.
    ///
    /// Executed as a CPI into the SPL Token program. The authority's
    /// signature extends through the CPI, so the token program sees it
    /// as the signing owner (or delegate) of the source account.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | authority | | ✓ | Owner or delegate of the source |
    /// | 1 | source | ✓ | | Source token account |
    /// | 2 | destination | ✓ | | Destination token account |
    /// | 3 | token_program | | | The SPL Token program |
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (1)
    /// [1..9]: amount (u64, little-endian)
    /// ```
    ///
    /// # Notes
    ///
    /// - Amount is in base units; the UI amount is base units / 10^decimals
    /// - Both token accounts must hold the same mint
    TransferSplTokens {
        /// Amount of tokens to transfer, in base units
        amount: u64,
    },
}

// =============================================================================
// INSTRUCTION PARSING (UNPACK)
// =============================================================================

impl TransferInstruction {
    /// Parse instruction data into a TransferInstruction.
    ///
    /// # Arguments
    /// * `input` - Raw instruction data bytes
    ///
    /// # Returns
    /// * `Ok(TransferInstruction)` - Successfully parsed instruction
    /// * `Err(InvalidInstruction)` - Could not parse
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        // Get the discriminant (first byte)
        let (&discriminant, rest) = input
            .split_first()
            .ok_or(TransferError::InvalidInstruction)?;

        // Parse based on discriminant
        Ok(match discriminant {
            // =================================================================
            // 0: TransferLamports
            // =================================================================
            0 => TransferInstruction::TransferLamports {
                amount: Self::unpack_amount(rest)?,
            },

            // =================================================================
            // 1: TransferSplTokens
            // =================================================================
            1 => TransferInstruction::TransferSplTokens {
                amount: Self::unpack_amount(rest)?,
            },

            // =================================================================
            // Unknown instruction
            // =================================================================
            _ => return Err(TransferError::InvalidInstruction.into()),
        })
    }

    /// Parse a little-endian u64 amount from the payload bytes.
    ///
    /// Bytes beyond the amount are ignored, matching SPL Token's parser;
    /// `pack` never emits them, so packed data always round-trips exactly.
    fn unpack_amount(rest: &[u8]) -> Result<u64, ProgramError> {
        let bytes: [u8; 8] = rest
            .get(..8)
            .and_then(|slice| slice.try_into().ok())
            .ok_or(TransferError::InvalidInstruction)?;
        Ok(u64::from_le_bytes(bytes))
    }

    // =========================================================================
    // INSTRUCTION PACKING (for tests and clients)
    // =========================================================================

    /// Pack instruction into bytes.
    ///
    /// This is the inverse of `unpack()`.
    /// Used by the builder functions below to create instruction data.
    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(9);

        match self {
            TransferInstruction::TransferLamports { amount } => {
                buf.push(0); // discriminant
                buf.extend_from_slice(&amount.to_le_bytes());
            }

            TransferInstruction::TransferSplTokens { amount } => {
                buf.push(1);
                buf.extend_from_slice(&amount.to_le_bytes());
            }
        }

        buf
    }
}

// =============================================================================
// INSTRUCTION BUILDERS
// =============================================================================

/// Build a `TransferLamports` instruction.
///
/// # Arguments
///
/// * `from` - Source account, must sign the transaction
/// * `to` - Destination account
/// * `amount` - Lamports to move
pub fn transfer_lamports(from: &Pubkey, to: &Pubkey, amount: u64) -> Instruction {
    Instruction {
        program_id: crate::id(),
        accounts: vec![
            AccountMeta::new(*from, true),
            AccountMeta::new(*to, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: TransferInstruction::TransferLamports { amount }.pack(),
    }
}

/// Build a `TransferSplTokens` instruction.
///
/// # Arguments
///
/// * `authority` - Owner (or delegate) of the source token account, must sign
/// * `source` - Source token account
/// * `destination` - Destination token account
/// * `amount` - Tokens to move, in base units
pub fn transfer_spl_tokens(
    authority: &Pubkey,
    source: &Pubkey,
    destination: &Pubkey,
    amount: u64,
) -> Instruction {
    Instruction {
        program_id: crate::id(),
        accounts: vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(*source, false),
            AccountMeta::new(*destination, false),
            AccountMeta::new_readonly(spl_token::id(), false),
        ],
        data: TransferInstruction::TransferSplTokens { amount }.pack(),
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpack_transfer_lamports() {
        let mut data = vec![0u8];
        data.extend_from_slice(&500_000_000u64.to_le_bytes());
        assert_eq!(
            TransferInstruction::unpack(&data).unwrap(),
            TransferInstruction::TransferLamports {
                amount: 500_000_000
            }
        );
    }

    #[test]
    fn test_unpack_empty_data_fails() {
        assert_eq!(
            TransferInstruction::unpack(&[]).unwrap_err(),
            TransferError::InvalidInstruction.into()
        );
    }

    #[test]
    fn test_unpack_truncated_amount_fails() {
        // Discriminant plus only 4 of the 8 amount bytes
        let data = [1u8, 0xE8, 0x03, 0x00, 0x00];
        assert_eq!(
            TransferInstruction::unpack(&data).unwrap_err(),
            TransferError::InvalidInstruction.into()
        );
    }

    #[test]
    fn test_unpack_ignores_trailing_bytes() {
        // Extra bytes after the amount are tolerated, as in SPL Token
        let mut data = vec![0u8];
        data.extend_from_slice(&500u64.to_le_bytes());
        data.extend_from_slice(&[0xFF, 0xFF]);
        assert_eq!(
            TransferInstruction::unpack(&data).unwrap(),
            TransferInstruction::TransferLamports { amount: 500 }
        );
    }

    #[test]
    fn test_unpack_unknown_discriminant_fails() {
        let mut data = vec![7u8];
        data.extend_from_slice(&500u64.to_le_bytes());
        assert_eq!(
            TransferInstruction::unpack(&data).unwrap_err(),
            TransferError::InvalidInstruction.into()
        );
    }

    #[test]
    fn test_builder_account_metas() {
        let from = Pubkey::new_unique();
        let to = Pubkey::new_unique();
        let ix = transfer_lamports(&from, &to, 42);

        assert_eq!(ix.program_id, crate::id());
        assert_eq!(ix.accounts.len(), 3);
        assert!(ix.accounts[0].is_signer && ix.accounts[0].is_writable);
        assert!(!ix.accounts[1].is_signer && ix.accounts[1].is_writable);
        assert_eq!(ix.accounts[2].pubkey, system_program::id());
        assert_eq!(ix.data[0], 0);

        let authority = Pubkey::new_unique();
        let source = Pubkey::new_unique();
        let destination = Pubkey::new_unique();
        let ix = transfer_spl_tokens(&authority, &source, &destination, 500);

        assert_eq!(ix.accounts.len(), 4);
        assert!(ix.accounts[0].is_signer && !ix.accounts[0].is_writable);
        assert_eq!(ix.accounts[3].pubkey, spl_token::id());
        assert_eq!(ix.data[0], 1);
    }
}

/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

INSTRUCTION FORMAT
==================

Every instruction sent to a Solana program has:
1. Program ID (which program to call)
2. Accounts (which accounts are involved)
3. Data (instruction-specific bytes)

This module defines how we parse #3 (the data).

Our format:
[discriminant: 1 byte][amount: 8 bytes, little-endian]

WHY NOT USE BORSH?
==================

Manual serialization keeps the exact byte layout stable and obvious, and
SPL Token set the precedent: its own Transfer is one discriminant byte
followed by a little-endian u64. Matching that convention means anyone who
has decoded a token instruction can decode ours.

WHY BUILDER FUNCTIONS?
======================

The account ORDER is part of the program's contract but lives only in
documentation. A builder function pins it in code:

    let ix = transfer_lamports(&from.pubkey(), &to.pubkey(), amount);

is harder to get wrong than assembling three AccountMetas by hand, and is
the convention the SPL programs follow (spl_token::instruction::transfer
and friends are exactly this shape).
*/
