use chia_protocol::Coin;
use chia_tx_types::{
    build_solution, CoinSolution, Conditions, SpendAssertions, SpendBundle, SpendRequest,
};

use crate::{DriverError, SpendAuthority, SpendContext};

/// A coin to be spent, along with the authority that unlocks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpendInput {
    pub coin: Coin,
    pub authority: SpendAuthority,
}

impl SpendInput {
    pub fn new(coin: Coin, authority: SpendAuthority) -> Self {
        Self { coin, authority }
    }
}

/// Spends `inputs` to create `outputs`.
///
/// The last input is the origin coin. It is spent first and creates every output, while the
/// remaining inputs follow in their original order and output no conditions at all. Whatever
/// value isn't claimed by the outputs is left as fee.
///
/// With `validate` set, the outputs must total strictly less than the inputs.
pub fn assemble(
    ctx: &mut SpendContext,
    inputs: &[SpendInput],
    outputs: &[SpendRequest],
    validate: bool,
) -> Result<Vec<CoinSolution>, DriverError> {
    let Some((origin, rest)) = inputs.split_last() else {
        return Err(DriverError::InvalidArgument(
            "at least one input coin is required".to_string(),
        ));
    };

    let input_value: u128 = inputs
        .iter()
        .map(|input| u128::from(input.coin.amount))
        .sum();
    let output_value: u128 = outputs
        .iter()
        .map(|output| u128::from(output.amount))
        .sum();

    if validate && output_value >= input_value {
        return Err(DriverError::InsufficientFunds {
            input: input_value,
            output: output_value,
        });
    }

    let mut coin_solutions = Vec::with_capacity(inputs.len());

    let conditions = build_solution(outputs, &SpendAssertions::default());
    tracing::debug!(
        "spending origin coin {} with {} outputs",
        origin.coin.coin_id(),
        outputs.len()
    );
    coin_solutions.push(origin.authority.spend(ctx, origin.coin, conditions)?);

    for input in rest {
        tracing::debug!("spending coin {} with no conditions", input.coin.coin_id());
        coin_solutions.push(input.authority.spend(ctx, input.coin, Conditions::new())?);
    }

    tracing::info!(
        "assembled {} coin solutions, {} mojos in and {} mojos out",
        coin_solutions.len(),
        input_value,
        output_value
    );

    Ok(coin_solutions)
}

/// Assembles `inputs` and `outputs` in a fresh [`SpendContext`] and wraps the result in an
/// unsigned [`SpendBundle`].
pub fn create_unsigned_transaction(
    inputs: &[SpendInput],
    outputs: &[SpendRequest],
    validate: bool,
) -> Result<SpendBundle, DriverError> {
    let mut ctx = SpendContext::new();
    let coin_solutions = assemble(&mut ctx, inputs, outputs, validate)?;
    Ok(SpendBundle::unsigned(coin_solutions))
}
