//! TransferSplTokens Instruction Processor
//!
//! Moves tokens between two token accounts via a CPI into the SPL Token
//! program. The token program does the balance bookkeeping; we validate
//! the accounts up front so failures carry our own error codes.

use crate::error::TransferError;
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    program::invoke,
    program_option::COption,
    program_pack::Pack,
    pubkey::Pubkey,
};
use spl_token::state::Account as TokenAccount;

/// Process TransferSplTokens instruction
///
/// Accounts expected:
/// 0. `[signer]` Authority (owner or delegate of the source)
/// 1. `[writable]` Source token account
/// 2. `[writable]` Destination token account
/// 3. `[]` SPL Token program
pub fn process(
    _program_id: &Pubkey,
    accounts: &[AccountInfo],
    amount: u64,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Authority
    let authority_info = next_account_info(account_info_iter)?;

    // Account 1: Source token account
    let source_info = next_account_info(account_info_iter)?;

    // Account 2: Destination token account
    let dest_info = next_account_info(account_info_iter)?;

    // Account 3: Token program
    let token_program_info = next_account_info(account_info_iter)?;

    // Validate authority
    assert_signer(authority_info)?;

    // Validate CPI target
    assert_program(token_program_info, &spl_token::id())?;

    // Validate source
    assert_owned_by(source_info, &spl_token::id())?;
    assert_writable(source_info)?;

    // Validate destination
    assert_owned_by(dest_info, &spl_token::id())?;
    assert_writable(dest_info)?;

    // Load states (unpack fails on uninitialized accounts)
    let source = TokenAccount::unpack(&source_info.data.borrow())?;
    let dest = TokenAccount::unpack(&dest_info.data.borrow())?;

    // Validate not frozen
    if source.is_frozen() || dest.is_frozen() {
        return Err(TransferError::AccountFrozen.into());
    }

    // Validate mints match
    if source.mint != dest.mint {
        return Err(TransferError::MintMismatch.into());
    }

    // Validate the signer controls the source, as its owner or as its
    // approved delegate
    let is_owner = source.owner == *authority_info.key;
    let is_delegate = source.delegate == COption::Some(*authority_info.key);
    if !is_owner && !is_delegate {
        return Err(TransferError::OwnerMismatch.into());
    }

    // Validate sufficient funds
    if source.amount < amount {
        return Err(TransferError::InsufficientFunds.into());
    }

    // Build and invoke the token transfer. The authority's signature
    // extends through the CPI.
    // Mint equality was checked above, so plain transfer is sufficient
    // and transfer_checked adds nothing here.
    #[allow(deprecated)]
    let transfer_instruction = spl_token::instruction::transfer(
        token_program_info.key,
        source_info.key,
        dest_info.key,
        authority_info.key,
        &[],
        amount,
    )?;

    invoke(
        &transfer_instruction,
        &[
            source_info.clone(),
            dest_info.clone(),
            authority_info.clone(),
            token_program_info.clone(),
        ],
    )?;

    Ok(())
}
