//! TransferLamports Instruction Processor
//!
//! Moves lamports between two system accounts via a CPI into the
//! system program.

use crate::error::TransferError;
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    program::invoke,
    pubkey::Pubkey,
    system_instruction, system_program,
};

/// Process TransferLamports instruction
///
/// Accounts expected:
/// 0. `[writable, signer]` Source account
/// 1. `[writable]` Destination account
/// 2. `[]` System program
pub fn process(
    _program_id: &Pubkey,
    accounts: &[AccountInfo],
    amount: u64,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Source
    let from_info = next_account_info(account_info_iter)?;

    // Account 1: Destination
    let to_info = next_account_info(account_info_iter)?;

    // Account 2: System program
    let system_program_info = next_account_info(account_info_iter)?;

    // Validate source
    assert_signer(from_info)?;
    assert_writable(from_info)?;

    // Validate destination
    assert_writable(to_info)?;

    // Validate CPI target
    assert_program(system_program_info, &system_program::id())?;

    // Pre-flight balance check. The system program rejects this too, but
    // failing here surfaces our own stable error code instead of a raw
    // system-program failure.
    if from_info.lamports() < amount {
        return Err(TransferError::InsufficientFunds.into());
    }

    // Build and invoke the system transfer. The source's signature extends
    // through the CPI, which is what authorizes the debit.
    let transfer_instruction =
        system_instruction::transfer(from_info.key, to_info.key, amount);

    invoke(
        &transfer_instruction,
        &[
            from_info.clone(),
            to_info.clone(),
            system_program_info.clone(),
        ],
    )?;

    Ok(())
}
