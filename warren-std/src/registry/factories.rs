//! Registry of named factories.
//!
//! Bindings refer to interpreters by identifier. The factory registry turns
//! an identifier back into an instance. It is shared with the host, which may
//! register components that are not interpreters under the same namespace;
//! resolving such a name is a configuration error, not a crash.

use std::{any::Any, collections::HashMap, fmt, sync::Arc};
use warren_core::{Interpreter, RegistryError};

/// An object built by a factory.
pub enum Instance {
    /// The object carries the interpreter capability.
    Interpreter(Arc<dyn Interpreter>),
    /// Any other host component.
    Component(Box<dyn Any + Send + Sync>),
}

impl Instance {
    /// The interpreter view of the instance, if it has one.
    pub fn into_interpreter(self) -> Option<Arc<dyn Interpreter>> {
        match self {
            Instance::Interpreter(interpreter) => Some(interpreter),
            Instance::Component(_) => None,
        }
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instance::Interpreter(_) => f.write_str("Instance::Interpreter(..)"),
            Instance::Component(_) => f.write_str("Instance::Component(..)"),
        }
    }
}

type Construct = Arc<dyn Fn() -> Instance + Send + Sync>;

/// Named constructors, looked up by binding identifier.
#[derive(Clone, Default)]
pub struct Factories {
    entries: HashMap<String, Construct>,
}

impl Factories {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructor for an interpreter type.
    ///
    /// A fresh instance is built on every resolution.
    pub fn register_interpreter<T, F>(
        &mut self,
        name: impl Into<String>,
        construct: F,
    ) -> Result<(), RegistryError>
    where
        T: Interpreter,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.insert(
            name.into(),
            Arc::new(move || Instance::Interpreter(Arc::new(construct()))),
        )
    }

    /// Register one interpreter instance shared by every resolution.
    pub fn register_shared(
        &mut self,
        name: impl Into<String>,
        interpreter: Arc<dyn Interpreter>,
    ) -> Result<(), RegistryError> {
        self.insert(
            name.into(),
            Arc::new(move || Instance::Interpreter(interpreter.clone())),
        )
    }

    /// Register a constructor for a component that is not an interpreter.
    pub fn register_component<T, F>(
        &mut self,
        name: impl Into<String>,
        construct: F,
    ) -> Result<(), RegistryError>
    where
        T: Any + Send + Sync,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.insert(
            name.into(),
            Arc::new(move || Instance::Component(Box::new(construct()))),
        )
    }

    fn insert(&mut self, name: String, construct: Construct) -> Result<(), RegistryError> {
        if self.entries.contains_key(&name) {
            return Err(RegistryError::DuplicateFactory(name));
        }
        self.entries.insert(name, construct);
        Ok(())
    }

    /// Returns true if a factory is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Build the object registered under `name`.
    pub fn construct(&self, name: &str) -> Option<Instance> {
        self.entries.get(name).map(|construct| construct())
    }

    /// Registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of registered factories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Factories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}

#[cfg(feature = "inventory")]
mod collected {
    use super::{Factories, Instance};
    use std::sync::Arc;
    use warren_core::{Interpreter, RegistryError};

    /// Registration entry for an interpreter in the global registry.
    ///
    /// This struct is submitted to `inventory` for automatic collection, usually
    /// through [`submit_interpreter!`](crate::submit_interpreter) or
    /// `#[warren::interpreter(name = "...")]`.
    pub struct InterpreterRegistration {
        /// The identifier bindings refer to.
        pub name: &'static str,
        /// Builds a fresh instance.
        pub construct: fn() -> Arc<dyn Interpreter>,
    }

    impl InterpreterRegistration {
        /// Create a registration entry.
        pub const fn new(name: &'static str, construct: fn() -> Arc<dyn Interpreter>) -> Self {
            Self { name, construct }
        }
    }

    inventory::collect!(InterpreterRegistration);

    impl Factories {
        /// Build a registry from every statically submitted interpreter.
        ///
        /// Returns an error if two registrations share a name.
        pub fn collected() -> Result<Self, RegistryError> {
            let mut factories = Factories::new();
            for registration in inventory::iter::<InterpreterRegistration>() {
                let construct = registration.construct;
                factories.insert(
                    registration.name.to_owned(),
                    Arc::new(move || Instance::Interpreter(construct())),
                )?;
            }
            Ok(factories)
        }
    }
}

#[cfg(feature = "inventory")]
pub use collected::InterpreterRegistration;

/// Submit an interpreter type to the global registry under a name.
///
/// The type must implement `Default`. Collect the submissions with
/// [`Factories::collected`].
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct OrderInterpreter;
/// impl Interpreter for OrderInterpreter { ... }
///
/// warren_std::submit_interpreter!("OrderInterpreter", OrderInterpreter);
/// ```
#[cfg(feature = "inventory")]
#[macro_export]
macro_rules! submit_interpreter {
    ($name:expr, $ty:ty) => {
        $crate::inventory::submit! {
            $crate::registry::InterpreterRegistration::new(
                $name,
                || -> ::std::sync::Arc<dyn $crate::warren_core::Interpreter> {
                    ::std::sync::Arc::new(<$ty as ::core::default::Default>::default())
                },
            )
        }
    };
}
