use chia_protocol::{Coin, Program};
use chia_tx_driver::{assemble, Spend, SpendAuthority, SpendContext, SpendInput};
use chia_tx_types::{CoinSolution, SpendBundle, SpendRequest};
use clvm_tools_rs::classic::clvm_tools::binutils::{assemble as assemble_clvm, disassemble};
use clvmr::{
    serde::{node_from_bytes, serialized_length_from_bytes},
    Allocator, NodePtr,
};

use crate::{
    de::decode_hex, AssembleDescription, ParseError, PuzzleKind, RawSpendDescription,
    SpendDescription, TransactionDescription,
};

/// Parses a JSON transaction description into an unsigned [`SpendBundle`].
pub fn parse_transaction(json: &str) -> Result<SpendBundle, ParseError> {
    let description: TransactionDescription = serde_json::from_str(json)?;
    parse_description(&description)
}

/// Builds an unsigned [`SpendBundle`] from an already deserialized description.
///
/// Each entry is turned into coin solutions in order and the results are concatenated.
pub fn parse_description(description: &TransactionDescription) -> Result<SpendBundle, ParseError> {
    let mut ctx = SpendContext::new();
    let mut coin_solutions = Vec::new();

    for (index, spend) in description.spends.iter().enumerate() {
        match spend {
            SpendDescription::Assemble(spend) => {
                tracing::debug!("assembling spend entry {index}");
                coin_solutions.extend(parse_assemble(&mut ctx, spend)?);
            }
            SpendDescription::Raw(spend) => {
                tracing::debug!("adding raw spend entry {index}");
                coin_solutions.push(parse_raw(&mut ctx, spend)?);
            }
        }
    }

    Ok(SpendBundle::unsigned(coin_solutions))
}

fn parse_assemble(
    ctx: &mut SpendContext,
    spend: &AssembleDescription,
) -> Result<Vec<CoinSolution>, ParseError> {
    let inputs = spend
        .input_coins
        .iter()
        .map(|input| {
            let authority = match input.puzzle {
                PuzzleKind::Standard => SpendAuthority::Standard(input.pubkey),
                PuzzleKind::DelegatedConditions => {
                    SpendAuthority::DelegatedConditions(input.pubkey)
                }
            };
            SpendInput::new(input.coin.into(), authority)
        })
        .collect::<Vec<_>>();

    let outputs = spend
        .spend_requests
        .iter()
        .copied()
        .map(SpendRequest::from)
        .collect::<Vec<_>>();

    Ok(assemble(ctx, &inputs, &outputs, true)?)
}

fn parse_raw(
    ctx: &mut SpendContext,
    spend: &RawSpendDescription,
) -> Result<CoinSolution, ParseError> {
    let coin: Coin = spend.input_coin.into();
    let puzzle = parse_program_ptr(ctx, &spend.puzzle_reveal)?;
    let solution = parse_program_ptr(ctx, &spend.solution)?;
    Ok(ctx.coin_solution(coin, Spend::new(puzzle, solution))?)
}

/// Parses CLVM assembly text, or serialized CLVM given as `0x` prefixed hex, into a [`Program`].
pub fn parse_program(text: &str) -> Result<Program, ParseError> {
    let mut ctx = SpendContext::new();
    let ptr = parse_program_ptr(&mut ctx, text)?;
    Ok(ctx.extract::<Program>(ptr)?)
}

/// Renders serialized CLVM, given as hex with an optional `0x` prefix, as CLVM assembly text.
pub fn disassemble_program_hex(text: &str) -> Result<String, ParseError> {
    let mut allocator = Allocator::new();
    let ptr = deserialize_hex(&mut allocator, text)?;
    Ok(disassemble(&allocator, ptr, None))
}

fn parse_program_ptr(ctx: &mut SpendContext, text: &str) -> Result<NodePtr, ParseError> {
    let text = text.trim();

    if text.starts_with("0x") {
        return deserialize_hex(&mut ctx.allocator, text);
    }

    assemble_clvm(&mut ctx.allocator, text).map_err(|error| {
        ParseError::MalformedDescription(format!("invalid clvm {text:?}: {error:?}"))
    })
}

/// Deserializes exactly one CLVM value, rejecting anything left over after it.
fn deserialize_hex(allocator: &mut Allocator, text: &str) -> Result<NodePtr, ParseError> {
    let malformed = |error: std::io::Error| {
        ParseError::MalformedDescription(format!("invalid serialized clvm {text:?}: {error}"))
    };

    let bytes = decode_hex(text.trim())
        .map_err(|error| ParseError::MalformedDescription(error.to_string()))?;
    let length = serialized_length_from_bytes(&bytes).map_err(malformed)?;

    if length != bytes.len() as u64 {
        return Err(ParseError::MalformedDescription(format!(
            "serialized clvm {text:?} has {} trailing bytes",
            bytes.len() as u64 - length
        )));
    }

    node_from_bytes(allocator, &bytes).map_err(malformed)
}
