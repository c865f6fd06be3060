//! The pure transition function.

use crate::config::EngineConfig;
use crate::core::{
    format_number, ArithmeticError, EngineState, Guard, Operation, Rejection, Symbol, TapResult,
};

/// Result of applying one symbol to a state.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The symbol was accepted; this is the next state.
    Applied(EngineState),

    /// The symbol was a guarded no-op; the state is unchanged.
    Rejected {
        reason: Rejection,
        state: EngineState,
    },

    /// Equals could not produce a finite result; the state is unchanged.
    Failed {
        error: ArithmeticError,
        state: EngineState,
    },
}

impl Outcome {
    /// The state after the press, whatever its fate.
    pub fn state(&self) -> &EngineState {
        match self {
            Self::Applied(state) => state,
            Self::Rejected { state, .. } | Self::Failed { state, .. } => state,
        }
    }

    pub fn into_state(self) -> EngineState {
        match self {
            Self::Applied(state) => state,
            Self::Rejected { state, .. } | Self::Failed { state, .. } => state,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    pub fn error(&self) -> Option<&ArithmeticError> {
        match self {
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn tap_result(&self) -> TapResult {
        match self {
            Self::Applied(_) => TapResult::Accepted,
            Self::Rejected { reason, .. } => TapResult::Rejected(*reason),
            Self::Failed { error, .. } => TapResult::Failed(error.clone()),
        }
    }
}

enum Refusal {
    Rejected(Rejection),
    Failed(ArithmeticError),
}

impl From<Rejection> for Refusal {
    fn from(reason: Rejection) -> Self {
        Self::Rejected(reason)
    }
}

impl From<ArithmeticError> for Refusal {
    fn from(error: ArithmeticError) -> Self {
        Self::Failed(error)
    }
}

/// Transition rules compiled from an [`EngineConfig`].
///
/// # Example
///
/// ```rust
/// use abacus::core::{EngineState, Symbol};
/// use abacus::engine::Engine;
///
/// let engine = Engine::default();
/// let state = engine.apply(&EngineState::new(), Symbol::Digit(4)).into_state();
/// assert_eq!(state.display_value(), "4");
/// ```
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    digit_guards: Vec<Guard>,
    locked_guards: Vec<Guard>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let digit_guards = vec![Guard::input_len(config.max_input_len)];
        let locked_guards = if config.decimal_lock {
            vec![Guard::decimal_lock()]
        } else {
            Vec::new()
        };
        Self {
            config,
            digit_guards,
            locked_guards,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Apply one symbol to a state (pure).
    ///
    /// Never panics and never leaves a non-finite readout behind.
    pub fn apply(&self, state: &EngineState, symbol: Symbol) -> Outcome {
        let step = match symbol {
            Symbol::Digit(digit) => self.digit(state, digit),
            Symbol::Decimal => decimal(state),
            Symbol::Negate => self.negate(state),
            Symbol::Percent => self.percent(state),
            Symbol::Operator(op) => self.operator(state, op),
            Symbol::Equals => equals(state),
            Symbol::Clear => Ok(EngineState::new()),
        };

        match step {
            Ok(next) => Outcome::Applied(next),
            Err(Refusal::Rejected(reason)) => Outcome::Rejected {
                reason,
                state: state.clone(),
            },
            Err(Refusal::Failed(error)) => Outcome::Failed {
                error,
                state: state.clone(),
            },
        }
    }

    fn check(guards: &[Guard], state: &EngineState) -> Result<(), Rejection> {
        guards.iter().try_for_each(|g| g.check(state))
    }

    fn digit(&self, state: &EngineState, digit: u8) -> Result<EngineState, Refusal> {
        let Some(symbol) = Symbol::digit(digit) else {
            return Err(Rejection::InvalidDigit(digit).into());
        };
        Self::check(&self.digit_guards, state)?;

        let label = symbol.label();
        let mut next = state.clone();
        if state.just_evaluated {
            next.display_value = label.to_string();
            next.equation_trace = label.to_string();
            next.just_evaluated = false;
            next.decimal_entered = false;
            next.number_start = Some(0);
            return Ok(next);
        }

        if next.number_start.is_none() {
            next.number_start = Some(next.equation_trace.len());
        }
        if next.display_value == "0" {
            next.display_value = label.to_string();
        } else {
            next.display_value.push_str(label);
        }
        next.equation_trace.push_str(label);
        Ok(next)
    }

    fn negate(&self, state: &EngineState) -> Result<EngineState, Refusal> {
        Self::check(&self.locked_guards, state)?;
        let value = operand(state)?;

        let mut next = state.clone();
        let start = next
            .number_start
            .filter(|&i| next.equation_trace.is_char_boundary(i));
        if value > 0.0 {
            next.display_value.insert(0, '-');
            if let Some(i) = start {
                next.equation_trace.insert(i, '-');
            }
        } else if value < 0.0 {
            next.display_value.remove(0);
            if let Some(i) = start.filter(|&i| next.equation_trace[i..].starts_with('-')) {
                next.equation_trace.remove(i);
            }
        } else {
            return Err(Rejection::ZeroHasNoSign.into());
        }
        Ok(next)
    }

    fn percent(&self, state: &EngineState) -> Result<EngineState, Refusal> {
        Self::check(&self.locked_guards, state)?;
        let value = operand(state)?;

        let mut next = state.clone();
        next.display_value = format_number(value / 100.0);
        next.equation_trace.push('%');
        Ok(next)
    }

    fn operator(&self, state: &EngineState, op: Operation) -> Result<EngineState, Refusal> {
        let Some(glyph) = op.trace_glyph() else {
            return Err(Rejection::NoOperation.into());
        };
        Self::check(&self.locked_guards, state)?;
        let value = operand(state)?;

        let mut next = state.clone();
        next.equation_trace.push_str(glyph);
        next.accumulator = value;
        next.pending_operation = op;
        next.display_value = "0".to_string();
        next.decimal_entered = false;
        next.number_start = Some(next.equation_trace.len());
        Ok(next)
    }
}

fn operand(state: &EngineState) -> Result<f64, ArithmeticError> {
    state
        .value()
        .ok_or_else(|| ArithmeticError::InvalidOperand(state.display_value.clone()))
}

fn decimal(state: &EngineState) -> Result<EngineState, Refusal> {
    if state.display_value.contains('.') {
        return Err(Rejection::DecimalAlreadyEntered.into());
    }

    // A result is not part of the trace, so it has no start offset there.
    let mut next = state.clone();
    if next.number_start.is_none() && !state.just_evaluated {
        next.number_start = Some(next.equation_trace.len());
    }
    next.display_value.push('.');
    next.equation_trace.push('.');
    next.decimal_entered = true;
    Ok(next)
}

fn equals(state: &EngineState) -> Result<EngineState, Refusal> {
    let mut next = state.clone();

    if state.pending_operation.is_pending() {
        let left = state.accumulator;
        let right = operand(state)?;
        if state.pending_operation == Operation::Divide && right == 0.0 {
            return Err(ArithmeticError::DivisionByZero.into());
        }
        let result = state
            .pending_operation
            .apply(left, right)
            .filter(|r| r.is_finite())
            .ok_or(ArithmeticError::NonFinite { left, right })?;

        next.display_value = format_number(result);
        next.accumulator = result;
        next.pending_operation = Operation::None;
    }

    next.equation_trace.push_str(" = ");
    next.just_evaluated = true;
    next.number_start = None;
    Ok(next)
}

/// Apply one symbol with the default configuration (pure).
///
/// Refused and failed presses return the state unchanged.
///
/// ```rust
/// use abacus::core::{EngineState, Operation, Symbol};
/// use abacus::engine::apply;
///
/// let state = [
///     Symbol::Digit(3),
///     Symbol::Operator(Operation::Add),
///     Symbol::Digit(4),
///     Symbol::Equals,
/// ]
/// .into_iter()
/// .fold(EngineState::new(), |state, symbol| apply(&state, symbol));
///
/// assert_eq!(state.display_value(), "7");
/// assert_eq!(state.equation_trace(), "3 + 4 = ");
/// ```
pub fn apply(state: &EngineState, symbol: Symbol) -> EngineState {
    Engine::default().apply(state, symbol).into_state()
}
