//! Token registry with context partitioning
//!
//! ## Architecture
//!
//! ```text
//! Registry("app")
//! ├── providers: TypeId(Token) → Provider      ← set / get / instantiate
//! └── contexts (insertion order)
//!     ├── {"provider": "paypal"} → Registry("app")
//!     └── {"provider": "stripe"} → Registry("app")   ← select(|ctx| ...)
//! ```
//!
//! Children start empty and inherit nothing from their parent. Selection is a
//! linear scan over the context keys; the first key accepted by the predicate
//! wins.
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//!
//! use inverse_domain::context::field_equals;
//! use inverse_domain::registry::Registry;
//! use inverse_domain::token::{Token, TokenSet};
//! use serde_json::json;
//!
//! struct App;
//! impl TokenSet for App {}
//!
//! struct Greeting;
//! impl Token for Greeting {
//!     type Set = App;
//!     type Service = String;
//!     type Args = ();
//!     const NAME: &'static str = "greeting";
//! }
//!
//! let mut registry: Registry<App> = Registry::new("app");
//! registry
//!     .create_context(json!({ "locale": "en" }))
//!     .set_instance(Greeting, Arc::new("hello".to_string()));
//!
//! let english = registry.select(field_equals("locale", "en")).unwrap();
//! assert_eq!(*english.get(Greeting).unwrap(), "hello");
//! assert!(!registry.has(Greeting));
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::context::JsonContext;
use crate::error::{BoxError, Error, Result};
use crate::provider::{Provider, ProviderKind};
use crate::token::{Token, TokenSet};

/// Type-erased registration
struct Slot {
    name: &'static str,
    kind: ProviderKind,
    provider: Box<dyn Any + Send + Sync>,
}

/// Registry mapping the tokens of `S` to providers, partitioned by context keys `C`
pub struct Registry<S, C = JsonContext> {
    id: String,
    providers: HashMap<TypeId, Slot>,
    contexts: Vec<(C, Registry<S, C>)>,
    tokens: PhantomData<fn() -> S>,
}

impl<S: TokenSet, C> Registry<S, C> {
    /// Create an empty registry
    ///
    /// # Arguments
    /// * `id` - Identifier used in diagnostics only
    pub fn new<I: Into<String>>(id: I) -> Self {
        Self {
            id: id.into(),
            providers: HashMap::new(),
            contexts: Vec::new(),
            tokens: PhantomData,
        }
    }

    /// Registry identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Check whether a provider of either kind is registered for `token`
    pub fn has<K: Token<Set = S>>(&self, _token: K) -> bool {
        self.providers.contains_key(&TypeId::of::<K>())
    }

    /// Register `provider` under `token`, replacing any earlier registration
    pub fn set<K: Token<Set = S>>(&mut self, _token: K, provider: Provider<K>) -> &mut Self {
        let kind = provider.kind();
        let slot = Slot {
            name: K::NAME,
            kind,
            provider: Box::new(provider),
        };

        match self.providers.insert(TypeId::of::<K>(), slot) {
            Some(previous) => debug!(
                registry = %self.id,
                token = K::NAME,
                kind = %kind,
                replaced = %previous.kind,
                "Provider overwritten"
            ),
            None => debug!(registry = %self.id, token = K::NAME, kind = %kind, "Provider registered"),
        }
        self
    }

    /// Register a ready instance under `token`
    pub fn set_instance<K: Token<Set = S>>(
        &mut self,
        token: K,
        service: Arc<K::Service>,
    ) -> &mut Self {
        self.set(token, Provider::instance(service))
    }

    /// Register an infallible constructor under `token`
    pub fn set_factory<K, F>(&mut self, token: K, build: F) -> &mut Self
    where
        K: Token<Set = S>,
        F: Fn(K::Args) -> Box<K::Service> + Send + Sync + 'static,
    {
        self.set(token, Provider::factory(build))
    }

    /// Register a fallible constructor under `token`
    pub fn set_try_factory<K, F, E>(&mut self, token: K, build: F) -> &mut Self
    where
        K: Token<Set = S>,
        F: Fn(K::Args) -> std::result::Result<Box<K::Service>, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        self.set(token, Provider::try_factory(build))
    }

    /// Remove the registration for `token`, returning its kind if one existed
    pub fn remove<K: Token<Set = S>>(&mut self, _token: K) -> Option<ProviderKind> {
        let removed = self.providers.remove(&TypeId::of::<K>())?;
        debug!(registry = %self.id, token = K::NAME, kind = %removed.kind, "Provider removed");
        Some(removed.kind)
    }

    /// Sorted names of the registered tokens
    pub fn tokens(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.providers.values().map(|slot| slot.name).collect();
        names.sort_unstable();
        names
    }

    /// Number of direct registrations
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the registry has no direct registrations
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    // ========================================================================
    // Resolution
    // ========================================================================

    /// Look up the raw provider registered for `token`
    pub fn provider<K: Token<Set = S>>(&self, _token: K) -> Result<&Provider<K>> {
        self.lookup::<K>()
    }

    /// Resolve the shared instance registered for `token`
    ///
    /// # Returns
    /// * `Ok(Arc<Service>)` - The registered instance, pointer-equal across calls
    /// * `Err(Error::MissingDependency)` - Nothing registered for `token`
    /// * `Err(Error::ProviderKindMismatch)` - `token` holds a factory
    pub fn get<K: Token<Set = S>>(&self, _token: K) -> Result<Arc<K::Service>> {
        match self.lookup::<K>()? {
            Provider::Instance(service) => {
                trace!(registry = %self.id, token = K::NAME, "Resolved instance");
                Ok(Arc::clone(service))
            }
            Provider::Factory(_) => Err(Error::kind_mismatch(
                self.id.as_str(),
                K::NAME,
                ProviderKind::Instance,
                ProviderKind::Factory,
            )),
        }
    }

    /// Build a new instance from the factory registered for `token`
    ///
    /// Nothing is cached: every call invokes the factory with `args`.
    ///
    /// # Returns
    /// * `Ok(Box<Service>)` - The freshly built instance
    /// * `Err(Error::MissingDependency)` - Nothing registered for `token`
    /// * `Err(Error::ProviderKindMismatch)` - `token` holds an instance
    /// * `Err(Error::Construction)` - The factory's own error, unchanged
    pub fn instantiate<K: Token<Set = S>>(
        &self,
        _token: K,
        args: K::Args,
    ) -> Result<Box<K::Service>> {
        match self.lookup::<K>()? {
            Provider::Factory(build) => {
                trace!(registry = %self.id, token = K::NAME, "Instantiating provider");
                build(args).map_err(Error::Construction)
            }
            Provider::Instance(_) => Err(Error::kind_mismatch(
                self.id.as_str(),
                K::NAME,
                ProviderKind::Factory,
                ProviderKind::Instance,
            )),
        }
    }

    fn lookup<K: Token<Set = S>>(&self) -> Result<&Provider<K>> {
        self.providers
            .get(&TypeId::of::<K>())
            .and_then(|slot| slot.provider.downcast_ref::<Provider<K>>())
            .ok_or_else(|| {
                debug!(registry = %self.id, token = K::NAME, "Unregistered dependency token");
                Error::missing_dependency(self.id.as_str(), K::NAME)
            })
    }

    // ========================================================================
    // Contexts
    // ========================================================================

    /// Create an empty child registry under `context` and return it
    ///
    /// Every call adds a new child, even when an equal key is already
    /// stored. Selection only ever consults the predicate, so the earlier
    /// child keeps winning for predicates both keys satisfy.
    pub fn create_context(&mut self, context: C) -> &mut Self {
        let child = Self::new(self.id.clone());
        self.contexts.push((context, child));
        debug!(registry = %self.id, contexts = self.contexts.len(), "Context created");

        let index = self.contexts.len() - 1;
        &mut self.contexts[index].1
    }

    /// Replace the child stored under a key equal to `context` with an empty one
    ///
    /// The replaced child keeps its position and loses its registrations.
    /// Without an equal key this behaves like [`Registry::create_context`].
    pub fn replace_context(&mut self, context: C) -> &mut Self
    where
        C: PartialEq,
    {
        let Some(index) = self.contexts.iter().position(|(key, _)| *key == context) else {
            return self.create_context(context);
        };

        warn!(registry = %self.id, "Context already exists, replacing its registry");
        self.contexts[index].1 = Self::new(self.id.clone());
        &mut self.contexts[index].1
    }

    /// Select the first child whose context key satisfies `predicate`
    ///
    /// Keys are scanned in insertion order.
    pub fn select<F>(&self, mut predicate: F) -> Result<&Self>
    where
        F: FnMut(&C) -> bool,
    {
        match self
            .contexts
            .iter()
            .find_map(|(key, child)| predicate(key).then_some(child))
        {
            Some(child) => Ok(child),
            None => Err(missing_child(&self.id)),
        }
    }

    /// Mutable variant of [`Registry::select`]
    pub fn select_mut<F>(&mut self, mut predicate: F) -> Result<&mut Self>
    where
        F: FnMut(&C) -> bool,
    {
        let id = self.id.as_str();
        self.contexts
            .iter_mut()
            .find_map(|(key, child)| predicate(key).then_some(child))
            .ok_or_else(|| missing_child(id))
    }

    /// First child registered under a key equal to `context`
    pub fn context(&self, context: &C) -> Option<&Self>
    where
        C: PartialEq,
    {
        self.contexts
            .iter()
            .find_map(|(key, child)| (key == context).then_some(child))
    }

    /// Mutable variant of [`Registry::context`]
    pub fn context_mut(&mut self, context: &C) -> Option<&mut Self>
    where
        C: PartialEq,
    {
        self.contexts
            .iter_mut()
            .find_map(|(key, child)| (&*key == context).then_some(child))
    }

    /// Context keys and their children, in insertion order
    pub fn contexts(&self) -> impl Iterator<Item = (&C, &Self)> {
        self.contexts.iter().map(|(key, child)| (key, child))
    }

    /// Number of child contexts
    pub fn context_count(&self) -> usize {
        self.contexts.len()
    }
}

fn missing_child(registry: &str) -> Error {
    debug!(registry, "No context matched the predicate");
    Error::missing_child_container(registry)
}

impl<S, C> fmt::Debug for Registry<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens: Vec<&'static str> = self.providers.values().map(|slot| slot.name).collect();
        tokens.sort_unstable();

        f.debug_struct("Registry")
            .field("id", &self.id)
            .field("tokens", &tokens)
            .field("contexts", &self.contexts.len())
            .finish()
    }
}
