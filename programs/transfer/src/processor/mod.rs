//! Instruction Processors
//!
//! This module contains the business logic for each instruction.
//! Each instruction has its own file for clarity and maintainability.

pub mod transfer_lamports;
pub mod transfer_spl_tokens;

use crate::instruction::TransferInstruction;
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

/// Main processor that routes instructions to specific handlers
pub struct Processor;

impl Processor {
    /// Process a transfer program instruction
    pub fn process(
        program_id: &Pubkey,
        accounts: &[AccountInfo],
        instruction_data: &[u8],
    ) -> ProgramResult {
        // Parse the instruction
        let instruction = TransferInstruction::unpack(instruction_data)?;

        // Route to appropriate handler
        match instruction {
            TransferInstruction::TransferLamports { amount } => {
                msg!("Instruction: TransferLamports");
                transfer_lamports::process(program_id, accounts, amount)
            }

            TransferInstruction::TransferSplTokens { amount } => {
                msg!("Instruction: TransferSplTokens");
                transfer_spl_tokens::process(program_id, accounts, amount)
            }
        }
    }
}
