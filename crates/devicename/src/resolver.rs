//! Identifier lookup against the held mapping table.

use crate::error::Result;
use crate::fetch::{MappingFetcher, MappingTable};
use devicename_platform::IdentifierProvider;
use std::sync::{PoisonError, RwLock};
use tracing::debug;

/// Resolves the running device's name against a locally held mapping table.
///
/// Fetching and resolving are split so the orchestration layer fetches at
/// most once per cache miss and resolves from already-held data.
pub struct Resolver {
    provider: Box<dyn IdentifierProvider>,
    fetcher: MappingFetcher,
    table: RwLock<MappingTable>,
}

impl Resolver {
    /// Resolver over the given provider, starting with an empty table.
    #[must_use]
    pub fn new(provider: Box<dyn IdentifierProvider>) -> Self {
        Self {
            provider,
            fetcher: MappingFetcher::new(),
            table: RwLock::new(MappingTable::new()),
        }
    }

    /// Fresh hardware identifier from the underlying provider.
    #[must_use]
    pub fn current_identifier(&self) -> String {
        self.provider.current_identifier()
    }

    /// Download the provider's mapping document and replace the held table.
    ///
    /// Fetch errors propagate untouched. The lock is never held across the
    /// network await; racing loads are allowed and the last writer wins.
    pub async fn load_mapping_table(&self) -> Result<()> {
        let table = self.fetcher.fetch(&self.provider.mapping_url()).await?;
        *self.table.write().unwrap_or_else(PoisonError::into_inner) = table;
        Ok(())
    }

    /// Best available name for the running device.
    ///
    /// An identifier absent from the table is a normal "unknown model"
    /// outcome, not an error: the raw identifier comes back unchanged.
    #[must_use]
    pub fn resolve_name(&self) -> String {
        let identifier = self.provider.current_identifier();
        let table = self.table.read().unwrap_or_else(PoisonError::into_inner);
        match table.get(&identifier) {
            Some(name) => name.clone(),
            None => {
                debug!(%identifier, "identifier not in mapping table, keeping raw value");
                identifier
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devicename_platform::Family;

    struct FixedProvider(&'static str);

    impl IdentifierProvider for FixedProvider {
        fn family(&self) -> Family {
            Family::Ios
        }

        fn current_identifier(&self) -> String {
            self.0.to_owned()
        }
    }

    fn resolver_with_table(identifier: &'static str, table: MappingTable) -> Resolver {
        let resolver = Resolver::new(Box::new(FixedProvider(identifier)));
        *resolver
            .table
            .write()
            .unwrap_or_else(PoisonError::into_inner) = table;
        resolver
    }

    #[test]
    fn test_known_identifier_resolves_to_mapped_name() {
        let table = MappingTable::from([("iPhone17,4".to_owned(), "iPhone 15 Pro".to_owned())]);
        let resolver = resolver_with_table("iPhone17,4", table);
        assert_eq!(resolver.resolve_name(), "iPhone 15 Pro");
    }

    #[test]
    fn test_unknown_identifier_falls_back_to_itself() {
        let table = MappingTable::from([("iPhone17,4".to_owned(), "iPhone 15 Pro".to_owned())]);
        let resolver = resolver_with_table("iPhoneUnknown,1", table);
        assert_eq!(resolver.resolve_name(), "iPhoneUnknown,1");
    }

    #[test]
    fn test_empty_table_falls_back_to_identifier() {
        let resolver = Resolver::new(Box::new(FixedProvider("Watch7,1")));
        assert_eq!(resolver.resolve_name(), "Watch7,1");
    }

    #[test]
    fn test_empty_identifier_is_a_legal_raw_value() {
        let resolver = Resolver::new(Box::new(FixedProvider("")));
        assert_eq!(resolver.resolve_name(), "");
    }
}
