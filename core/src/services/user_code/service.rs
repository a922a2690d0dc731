//! Registry resolving user-code generators by code type.

use std::collections::HashMap;
use std::sync::Arc;

use super::generator::{
    AlphanumericUserCodeGenerator, NumericUserCodeGenerator, UserCodeGenerator,
};

/// Type-string-indexed registry of user-code generators.
///
/// New code types register without touching the orchestrator.
pub struct UserCodeService {
    generators: HashMap<String, Arc<dyn UserCodeGenerator>>,
}

impl UserCodeService {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            generators: HashMap::new(),
        }
    }

    /// Create a registry with the built-in numeric and alphanumeric
    /// generators registered.
    pub fn with_defaults() -> Self {
        let mut service = Self::new();
        service.register(Arc::new(NumericUserCodeGenerator::default()));
        service.register(Arc::new(AlphanumericUserCodeGenerator::default()));
        service
    }

    /// Register a generator under its declared code type, replacing any
    /// previous registration for that type.
    pub fn register(&mut self, generator: Arc<dyn UserCodeGenerator>) {
        self.generators
            .insert(generator.code_type().to_string(), generator);
    }

    /// Resolve the generator for a code type.
    pub fn generator(&self, code_type: &str) -> Option<Arc<dyn UserCodeGenerator>> {
        self.generators.get(code_type).cloned()
    }
}

impl Default for UserCodeService {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oob_shared::constants::code_types;

    #[test]
    fn defaults_resolve_known_types() {
        let service = UserCodeService::with_defaults();
        assert!(service.generator(code_types::NUMERIC).is_some());
        assert!(service.generator(code_types::ALPHANUMERIC).is_some());
    }

    #[test]
    fn unknown_type_resolves_to_none() {
        let service = UserCodeService::with_defaults();
        assert!(service.generator("morse").is_none());
    }

    #[test]
    fn registration_replaces_existing_type() {
        let mut service = UserCodeService::with_defaults();
        service.register(Arc::new(NumericUserCodeGenerator::new(9, 7)));
        let generator = service.generator(code_types::NUMERIC).unwrap();
        assert_eq!(generator.retry_limit(), 7);
    }
}
