//! Folds the flat command stream into per-module assertion groups.
//!
//! Spec-test semantics are order-dependent: every `assert_return` targets
//! the nearest preceding `module` command, and assertions may mutate module
//! state, so both the group order and the assertion order inside a group
//! must match the stream exactly.

use super::command::{Action, Assertion, Command, TestModule};
use super::WastError;

/// Group a command stream into ordered [`TestModule`]s.
///
/// A `module` command always opens a fresh group, even when the filename
/// repeats: a reloaded module starts from pristine state and its
/// assertions must not be merged into the earlier instance. Commands we
/// do not translate (and assertions whose action is not an invoke) are
/// dropped. An assertion arriving before any module is an ordering
/// violation in the descriptor.
pub fn group(file: &str, commands: Vec<Command>) -> Result<Vec<TestModule>, WastError> {
    commands
        .into_iter()
        .try_fold(Vec::new(), |mut modules: Vec<TestModule>, cmd| {
            match cmd {
                Command::Module { filename } => modules.push(TestModule {
                    filename,
                    assertions: Vec::new(),
                }),
                Command::AssertReturn { action, expected } => {
                    if let Action::Invoke { field, args } = action {
                        let current = modules.last_mut().ok_or_else(|| WastError::Ordering {
                            file: file.to_string(),
                        })?;
                        current.assertions.push(Assertion {
                            field,
                            args,
                            expected,
                        });
                    }
                }
                Command::Other => {}
            }
            Ok(modules)
        })
}
