use std::fmt::Display;

use crate::{Context, Location};

/// Severity level of a [`Diagnostic`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Note,
    Remark,
}

impl Display for DiagnosticSeverity {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(formatter, "error"),
            Self::Warning => write!(formatter, "warning"),
            Self::Note => write!(formatter, "note"),
            Self::Remark => write!(formatter, "remark"),
        }
    }
}

/// Message reported through the diagnostics engine of a [`Context`] (e.g., a verification failure). Diagnostics are
/// delivered to the handlers attached to the [`Context`] using [`Context::attach_diagnostics_handler`].
///
/// The [`Display`] rendering of a [`Diagnostic`] is its message only. Its severity and location are accessible
/// through the corresponding accessors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    severity: DiagnosticSeverity,
    location: Location,
    message: String,
}

impl Diagnostic {
    pub fn new<M: Into<String>>(severity: DiagnosticSeverity, location: Location, message: M) -> Self {
        Self { severity, location, message: message.into() }
    }

    /// Returns the [`DiagnosticSeverity`] of this [`Diagnostic`].
    pub fn severity(&self) -> DiagnosticSeverity {
        self.severity
    }

    /// Returns the [`Location`] at which this [`Diagnostic`] was reported.
    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Diagnostic {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.message)
    }
}

/// ID of a [`Diagnostic`] handler. Refer to [`Context::attach_diagnostics_handler`] for more information.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DiagnosticHandlerId {
    pub(crate) id: usize,
}

/// Boxed [`Diagnostic`] handler stored in a [`Context`].
pub(crate) type DiagnosticHandler = Box<dyn FnMut(&Diagnostic) -> bool>;

impl Context {
    /// Attaches a [`Diagnostic`]s handler to this [`Context`] and returns a [`DiagnosticHandlerId`] that can be used
    /// to detach the handler later on, if needed, using [`Context::detach_diagnostics_handler`]. Note that handlers
    /// will be invoked in the reverse order of attachment until one of them processes the [`Diagnostic`] completely.
    ///
    /// # Parameters
    ///
    ///   * `handler` - Function that accepts a [`Diagnostic`] and returns `true` when it processes it completely
    ///     (meaning that no other handler will be invoked later on for the same [`Diagnostic`]), and `false`
    ///     otherwise to let other handlers attempt to process the [`Diagnostic`].
    pub fn attach_diagnostics_handler<F: FnMut(&Diagnostic) -> bool + 'static>(
        &self,
        handler: F,
    ) -> DiagnosticHandlerId {
        let id = self.next_diagnostics_handler_id.get();
        self.next_diagnostics_handler_id.set(id + 1);
        self.diagnostics_handlers.borrow_mut().push((id, Box::new(handler)));
        DiagnosticHandlerId { id }
    }

    /// Detaches a [`Diagnostic`]s handler from this [`Context`]. Note that this will also drop the underlying handler.
    pub fn detach_diagnostics_handler(&self, id: DiagnosticHandlerId) {
        self.diagnostics_handlers.borrow_mut().retain(|(handler_id, _)| *handler_id != id.id);
    }

    /// Emits the provided [`Diagnostic`] through the diagnostics engine of this [`Context`]. Error diagnostics that
    /// are not handled by any attached handler are logged using [`tracing`].
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        let handled = match self.diagnostics_handlers.try_borrow_mut() {
            Ok(mut handlers) => handlers.iter_mut().rev().any(|(_, handler)| handler(&diagnostic)),
            // Diagnostics emitted from within a handler cannot be dispatched to the handlers again.
            Err(_) => false,
        };
        if !handled && diagnostic.severity() == DiagnosticSeverity::Error {
            tracing::error!(location = %diagnostic.location(), "{}", diagnostic.message());
        }
    }

    /// Emits an error [`Diagnostic`] with the provided message at the provided [`Location`].
    pub fn emit_error<M: Into<String>>(&self, location: Location, message: M) {
        self.emit_diagnostic(Diagnostic::new(DiagnosticSeverity::Error, location, message));
    }
}
