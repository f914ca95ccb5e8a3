//! Model-based checks: random operation sequences, some of them failing, are
//! replayed against the engine and against a plain two-vector model.

use std::num::NonZeroUsize;

use command_engine::prelude::*;
use proptest::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("command {0} refused")]
struct Refused(u32);

/// Receiver that records the net-applied command ids in order.
#[derive(Debug, Default)]
struct Ledger {
    applied: Vec<u32>,
}

#[derive(Debug, Clone, Copy)]
struct Step {
    id: u32,
    fail_execute: bool,
    fail_undo: bool,
}

impl Command for Step {
    type Context = Ledger;
    type Error = Refused;

    fn execute(&mut self, ledger: &mut Ledger) -> Result<(), Refused> {
        if self.fail_execute {
            return Err(Refused(self.id));
        }
        ledger.applied.push(self.id);
        Ok(())
    }

    fn undo(&mut self, ledger: &mut Ledger) -> Result<(), Refused> {
        if self.fail_undo {
            return Err(Refused(self.id));
        }
        assert_eq!(ledger.applied.pop(), Some(self.id), "undo out of order");
        Ok(())
    }
}

#[derive(Debug, Clone)]
enum Op {
    Submit { fail_execute: bool, fail_undo: bool },
    Undo,
    Redo,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (prop::bool::weighted(0.15), prop::bool::weighted(0.15))
            .prop_map(|(fail_execute, fail_undo)| Op::Submit { fail_execute, fail_undo }),
        2 => Just(Op::Undo),
        2 => Just(Op::Redo),
    ]
}

#[derive(Default)]
struct Model {
    history: Vec<Step>,
    redo: Vec<Step>,
}

fn ids<'a>(steps: impl Iterator<Item = &'a Step>) -> Vec<u32> {
    steps.map(|step| step.id).collect()
}

fn assert_matches(engine: &Engine<Step>, model: &Model, ledger: &Ledger) {
    let history = ids(engine.history());
    let redo = ids(engine.redo_stack());

    assert_eq!(history, ids(model.history.iter()));
    assert_eq!(redo, ids(model.redo.iter()));
    assert!(history.iter().all(|id| !redo.contains(id)), "command on both stacks");
    assert_eq!(ledger.applied, history, "history must equal net-applied commands");
    assert_eq!(engine.can_undo(), !history.is_empty());
    assert_eq!(engine.can_redo(), !redo.is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn stacks_follow_model(ops in prop::collection::vec(op(), 0..60)) {
        let mut engine = Engine::new();
        let mut model = Model::default();
        let mut ledger = Ledger::default();
        let mut next_id = 0;

        for op in ops {
            match op {
                Op::Submit { fail_execute, fail_undo } => {
                    next_id += 1;
                    let step = Step { id: next_id, fail_execute, fail_undo };
                    let result = engine.submit(step, &mut ledger);
                    if fail_execute {
                        let failure = result.unwrap_err();
                        prop_assert_eq!(failure.phase(), Phase::Execute);
                    } else {
                        prop_assert!(result.is_ok());
                        model.redo.clear();
                        model.history.push(step);
                    }
                }
                Op::Undo => {
                    let result = engine.undo(&mut ledger);
                    match model.history.last().copied() {
                        None => {
                            prop_assert_eq!(result.unwrap(), UndoOutcome::EmptyHistory);
                        }
                        Some(step) if step.fail_undo => {
                            prop_assert_eq!(result.unwrap_err().phase(), Phase::Undo);
                        }
                        Some(_) => {
                            prop_assert_eq!(result.unwrap(), UndoOutcome::Undone);
                            let step = model.history.pop().unwrap();
                            model.redo.push(step);
                        }
                    }
                }
                Op::Redo => {
                    let result = engine.redo(&mut ledger);
                    // execute never fails on a command that made it into history once
                    match model.redo.pop() {
                        None => {
                            prop_assert_eq!(result.unwrap(), RedoOutcome::EmptyRedo);
                        }
                        Some(step) => {
                            prop_assert_eq!(result.unwrap(), RedoOutcome::Redone);
                            model.history.push(step);
                        }
                    }
                }
            }

            assert_matches(&engine, &model, &ledger);
        }
    }

    #[test]
    fn undo_then_redo_is_identity(count in 1usize..20, undos in 1usize..20) {
        let mut engine = Engine::new();
        let mut ledger = Ledger::default();

        for id in 0..u32::try_from(count).unwrap() {
            let step = Step { id, fail_execute: false, fail_undo: false };
            engine.submit(step, &mut ledger).unwrap();
        }
        let before = ids(engine.history());

        let undone = undos.min(count);
        for _ in 0..undone {
            prop_assert!(engine.undo(&mut ledger).unwrap().is_applied());
        }
        prop_assert_eq!(engine.history_len(), count - undone);
        prop_assert_eq!(engine.redo_len(), undone);

        for _ in 0..undone {
            prop_assert!(engine.redo(&mut ledger).unwrap().is_applied());
        }
        prop_assert_eq!(ids(engine.history()), before.clone());
        prop_assert_eq!(ledger.applied, before);
        prop_assert_eq!(engine.redo_len(), 0);
    }

    #[test]
    fn bounded_history_never_exceeds_limit(
        limit in 1usize..8,
        ops in prop::collection::vec(op(), 0..60)
    ) {
        let limit = NonZeroUsize::new(limit).unwrap();
        let mut engine = Engine::with_config(EngineConfig::new().with_history_limit(limit));
        let mut ledger = Ledger::default();
        let mut next_id = 0;

        for op in ops {
            // failures are covered by `stacks_follow_model`
            let _ = match op {
                Op::Submit { .. } => {
                    next_id += 1;
                    let step = Step { id: next_id, fail_execute: false, fail_undo: false };
                    engine.submit(step, &mut ledger).map(|()| true)
                }
                Op::Undo => engine.undo(&mut ledger).map(UndoOutcome::is_applied),
                Op::Redo => engine.redo(&mut ledger).map(RedoOutcome::is_applied),
            };

            prop_assert!(engine.history_len() <= limit.get());
            prop_assert!(engine.redo_len() <= limit.get());
        }
    }
}
