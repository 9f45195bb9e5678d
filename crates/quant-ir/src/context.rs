use std::cell::{Cell, Ref, RefCell, RefMut};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::diagnostics::DiagnosticHandler;
use crate::{Attribute, Dialect, Location, Type};

/// Options that control the behavior of a [`Context`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ContextOptions {
    /// If `true`, operations that do not belong to a loaded [`Dialect`] (or that are not known to their dialect)
    /// are accepted by verification instead of being reported as unregistered operations.
    pub allow_unregistered_operations: bool,
}

/// Storage for the operations and values that are owned by a [`Context`]. Operations and values are referenced by
/// their index in this storage, and indices are never reused: erased operations stay in the storage (marked as
/// erased) until the owning [`Context`] is dropped.
#[derive(Default)]
pub(crate) struct IrStorage {
    pub(crate) operations: Vec<OperationData>,
    pub(crate) values: Vec<ValueData>,
}

pub(crate) struct OperationData {
    pub(crate) name: String,
    pub(crate) location: Location,
    pub(crate) operands: Vec<usize>,
    pub(crate) results: Vec<usize>,
    pub(crate) attributes: BTreeMap<String, Attribute>,
    pub(crate) erased: bool,
}

pub(crate) struct ValueData {
    pub(crate) r#type: Type,
    pub(crate) location: Location,
    pub(crate) definition: ValueDefinition,
}

/// Describes where a value is defined.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ValueDefinition {
    BlockArgument { index: usize },
    OperationResult { operation: usize, index: usize },
}

/// [`Context`]s are the top-level containers of the IR. They own all operations and values (which are accessed
/// through lightweight handles that borrow the [`Context`], such as [`OperationRef`](crate::OperationRef) and
/// [`ValueRef`](crate::ValueRef)), the set of loaded [`Dialect`]s, and the diagnostic handlers that verification
/// failures and parsing errors are reported to.
///
/// [`Context`]s use interior mutability and are not thread-safe. Distinct [`Context`]s are fully independent and can
/// be used from different threads.
pub struct Context {
    options: ContextOptions,
    storage: RefCell<IrStorage>,
    dialects: RefCell<Vec<Rc<dyn Dialect>>>,
    pub(crate) diagnostics_handlers: RefCell<Vec<(usize, DiagnosticHandler)>>,
    pub(crate) next_diagnostics_handler_id: Cell<usize>,
}

impl Context {
    /// Creates a new [`Context`] with the default [`ContextOptions`].
    pub fn new() -> Self {
        Self::with_options(ContextOptions::default())
    }

    /// Creates a new [`Context`] with the provided [`ContextOptions`].
    pub fn with_options(options: ContextOptions) -> Self {
        Self {
            options,
            storage: RefCell::new(IrStorage::default()),
            dialects: RefCell::new(Vec::new()),
            diagnostics_handlers: RefCell::new(Vec::new()),
            next_diagnostics_handler_id: Cell::new(0),
        }
    }

    /// Returns the [`ContextOptions`] of this [`Context`].
    pub fn options(&self) -> ContextOptions {
        self.options
    }

    /// Returns `true` if this [`Context`] accepts operations that are not registered with any loaded [`Dialect`].
    pub fn allows_unregistered_operations(&self) -> bool {
        self.options.allow_unregistered_operations
    }

    /// Loads the provided [`Dialect`] into this [`Context`]. Loading a dialect whose namespace is already loaded
    /// is a no-op. Returns `true` if the dialect was newly loaded.
    pub fn load_dialect<D: Dialect + 'static>(&self, dialect: D) -> bool {
        let mut dialects = self.dialects.borrow_mut();
        if dialects.iter().any(|loaded| loaded.namespace() == dialect.namespace()) {
            return false;
        }
        tracing::debug!(namespace = dialect.namespace(), "loaded dialect");
        dialects.push(Rc::new(dialect));
        true
    }

    /// Returns the loaded [`Dialect`] with the provided namespace, if there is one.
    pub fn dialect(&self, namespace: &str) -> Option<Rc<dyn Dialect>> {
        self.dialects.borrow().iter().find(|dialect| dialect.namespace() == namespace).cloned()
    }

    /// Returns the namespaces of all [`Dialect`]s that are loaded in this [`Context`], in load order.
    pub fn loaded_dialects(&self) -> Vec<&'static str> {
        self.dialects.borrow().iter().map(|dialect| dialect.namespace()).collect()
    }

    pub(crate) fn storage(&self) -> Ref<'_, IrStorage> {
        self.storage.borrow()
    }

    pub(crate) fn storage_mut(&self) -> RefMut<'_, IrStorage> {
        self.storage.borrow_mut()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
