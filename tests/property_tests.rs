//! Property-based tests for the calculator engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated key sequences.

use abacus::checkpoint::Checkpoint;
use abacus::core::{EngineState, Operation, Symbol};
use abacus::engine::{Engine, Outcome};
use abacus::{Calculator, EngineConfig};
use proptest::prelude::*;

fn arbitrary_symbol() -> impl Strategy<Value = Symbol> {
    prop::sample::select(Symbol::ALL.to_vec())
}

prop_compose! {
    fn arbitrary_digit()(d in 0..=9u8) -> Symbol {
        Symbol::Digit(d)
    }
}

prop_compose! {
    fn arbitrary_operator()(variant in 0..4u8) -> Symbol {
        match variant {
            0 => Symbol::Operator(Operation::Add),
            1 => Symbol::Operator(Operation::Subtract),
            2 => Symbol::Operator(Operation::Multiply),
            _ => Symbol::Operator(Operation::Divide),
        }
    }
}

fn run(engine: &Engine, symbols: &[Symbol]) -> EngineState {
    symbols.iter().fold(EngineState::new(), |state, &symbol| {
        engine.apply(&state, symbol).into_state()
    })
}

proptest! {
    #[test]
    fn digits_concatenate_from_clear(digits in prop::collection::vec(arbitrary_digit(), 1..20)) {
        let engine = Engine::default();
        let state = run(&engine, &digits);

        let mut expected = String::from("0");
        for symbol in &digits {
            if expected.len() > 10 {
                continue;
            }
            let label = symbol.label();
            if expected == "0" {
                expected = label.to_string();
            } else {
                expected.push_str(label);
            }
        }

        prop_assert_eq!(state.display_value(), expected.as_str());
    }

    #[test]
    fn clear_always_returns_initial_state(symbols in prop::collection::vec(arbitrary_symbol(), 0..40)) {
        let engine = Engine::default();
        let state = run(&engine, &symbols);

        let cleared = engine.apply(&state, Symbol::Clear);
        prop_assert_eq!(cleared, Outcome::Applied(EngineState::new()));
    }

    #[test]
    fn decimal_is_idempotent(symbols in prop::collection::vec(arbitrary_symbol(), 0..40)) {
        let engine = Engine::default();
        let state = run(&engine, &symbols);

        let once = engine.apply(&state, Symbol::Decimal).into_state();
        let twice = engine.apply(&once, Symbol::Decimal).into_state();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn readout_is_always_finite(symbols in prop::collection::vec(arbitrary_symbol(), 0..60)) {
        let engine = Engine::default();
        let mut state = EngineState::new();

        for symbol in symbols {
            state = engine.apply(&state, symbol).into_state();
            let value = state.value();
            prop_assert!(value.is_some(), "readout {:?} does not parse", state.display_value());
            prop_assert!(state.display_value().matches('.').count() <= 1);
        }
    }

    #[test]
    fn trace_offset_stays_on_a_char_boundary(symbols in prop::collection::vec(arbitrary_symbol(), 0..60)) {
        let engine = Engine::default();
        let state = run(&engine, &symbols);

        if let Some(offset) = state.number_start() {
            prop_assert!(state.equation_trace().is_char_boundary(offset));
        }
    }

    #[test]
    fn operator_is_a_no_op_while_decimal_pending(
        symbols in prop::collection::vec(arbitrary_symbol(), 0..40),
        operator in arbitrary_operator(),
    ) {
        let engine = Engine::default();
        let state = engine.apply(&run(&engine, &symbols), Symbol::Decimal).into_state();

        if state.decimal_entered() {
            let after = engine.apply(&state, operator).into_state();
            prop_assert_eq!(after, state);
        }
    }

    #[test]
    fn evaluation_clears_pending_operation(symbols in prop::collection::vec(arbitrary_symbol(), 0..40)) {
        let engine = Engine::default();
        let state = run(&engine, &symbols);

        if let Outcome::Applied(next) = engine.apply(&state, Symbol::Equals) {
            prop_assert_eq!(next.pending_operation(), Operation::None);
            prop_assert!(next.just_evaluated());
            prop_assert!(next.equation_trace().ends_with(" = "));
        }
    }

    #[test]
    fn operator_after_result_keeps_it_evaluated(
        symbols in prop::collection::vec(arbitrary_symbol(), 0..40),
        operator in arbitrary_operator(),
    ) {
        let engine = Engine::default();
        let state = run(&engine, &symbols);

        if let Outcome::Applied(evaluated) = engine.apply(&state, Symbol::Equals) {
            if let Outcome::Applied(next) = engine.apply(&evaluated, operator) {
                prop_assert!(next.just_evaluated());
                prop_assert!(next.equation_trace().starts_with(evaluated.equation_trace()));
                prop_assert_eq!(next.display_value(), "0");

                let fresh = engine.apply(&next, Symbol::Digit(1)).into_state();
                prop_assert_eq!(fresh.equation_trace(), "1");
            }
        }
    }

    #[test]
    fn apply_is_deterministic(
        symbols in prop::collection::vec(arbitrary_symbol(), 0..40),
        next in arbitrary_symbol(),
    ) {
        let engine = Engine::default();
        let state = run(&engine, &symbols);

        prop_assert_eq!(engine.apply(&state, next), engine.apply(&state, next));
    }

    #[test]
    fn unlocked_engine_keeps_invariants(symbols in prop::collection::vec(arbitrary_symbol(), 0..60)) {
        let engine = Engine::new(EngineConfig {
            decimal_lock: false,
            ..EngineConfig::default()
        });
        let state = run(&engine, &symbols);

        prop_assert!(state.value().is_some());
        prop_assert!(state.accumulator().is_finite());
    }

    #[test]
    fn session_matches_pure_engine(symbols in prop::collection::vec(arbitrary_symbol(), 0..40)) {
        let mut calc = Calculator::new();
        calc.press_all(symbols.iter().copied());

        let state = run(&Engine::default(), &symbols);
        prop_assert_eq!(calc.state(), &state);
        prop_assert_eq!(calc.history().len(), symbols.len());
    }

    #[test]
    fn reachable_states_survive_checkpoints(symbols in prop::collection::vec(arbitrary_symbol(), 0..40)) {
        let mut calc = Calculator::new();
        calc.press_all(symbols);

        let bytes = calc.checkpoint().to_bytes().unwrap();
        let restored = Checkpoint::from_bytes(&bytes).unwrap().resume().unwrap();
        prop_assert_eq!(restored.state(), calc.state());
    }
}
