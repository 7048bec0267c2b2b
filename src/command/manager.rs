//! Command stacks.

use log::debug;

type Step<T> = Box<dyn Fn(&mut T)>;

/// One reversible change to a `T`.
pub struct Command<T> {
    label: Option<String>,
    action: Step<T>,
    inverse: Step<T>,
}

impl<T> Command<T> {
    /// Build a command from an action and the closure that reverts it.
    pub fn new(action: impl Fn(&mut T) + 'static, inverse: impl Fn(&mut T) + 'static) -> Self {
        Self {
            label: None,
            action: Box::new(action),
            inverse: Box::new(inverse),
        }
    }

    /// Attach a label for logging.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Apply the change.
    pub fn apply(&self, target: &mut T) {
        (self.action)(target);
    }

    /// Revert the change.
    pub fn revert(&self, target: &mut T) {
        (self.inverse)(target);
    }
}

impl<T> std::fmt::Debug for Command<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command").field("label", &self.label).finish_non_exhaustive()
    }
}

/// Two-stack undo/redo manager.
///
/// Doing a new action empties the redo stack. Both stacks are unbounded
/// and strictly last-in first-out.
pub struct CommandManager<T> {
    undo: Vec<Command<T>>,
    redo: Vec<Command<T>>,
}

impl<T> Default for CommandManager<T> {
    fn default() -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
        }
    }
}

impl<T> CommandManager<T> {
    /// Create a manager with empty stacks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `action` on `target` and record it with its `inverse`.
    pub fn do_action(
        &mut self,
        target: &mut T,
        action: impl Fn(&mut T) + 'static,
        inverse: impl Fn(&mut T) + 'static,
    ) {
        self.execute(target, Command::new(action, inverse));
    }

    /// Run a prebuilt command and record it.
    pub fn execute(&mut self, target: &mut T, command: Command<T>) {
        command.apply(target);
        debug!("do {}", command.label().unwrap_or("command"));
        self.undo.push(command);
        self.redo.clear();
    }

    /// Revert the most recent command. Returns `false` if there was none.
    pub fn undo(&mut self, target: &mut T) -> bool {
        let Some(command) = self.undo.pop() else {
            return false;
        };
        command.revert(target);
        debug!("undo {}", command.label().unwrap_or("command"));
        self.redo.push(command);
        true
    }

    /// Re-apply the most recently undone command. Returns `false` if there
    /// was none.
    pub fn redo(&mut self, target: &mut T) -> bool {
        let Some(command) = self.redo.pop() else {
            return false;
        };
        command.apply(target);
        debug!("redo {}", command.label().unwrap_or("command"));
        self.undo.push(command);
        true
    }

    /// Drop both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    /// Whether there is a command to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Whether there is an undone command to redo.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of commands that can be undone.
    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    /// Number of commands that can be redone.
    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }
}

impl<T> std::fmt::Debug for CommandManager<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandManager")
            .field("undo", &self.undo.len())
            .field("redo", &self.redo.len())
            .finish()
    }
}
