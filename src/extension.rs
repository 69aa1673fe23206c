//! The provider surface registered with the analytics host.
//!
//! The host learns about this extension through plain data: an
//! [`ExtensionInfo`] naming the extension and its display tab, the
//! [`CallEvent`]s on which providers should be invoked, and a list of
//! [`Provider`]s, each binding display metadata to an accessor on the
//! [`ClaimReporter`]. Registration is explicit — the provider list is built
//! once at construction and handed over whole — rather than discovered
//! through reflection.

use serde::Serialize;
use uuid::Uuid;

use crate::{
    domain::Table,
    registry::ClaimRegistry,
    reporter::{ClaimReporter, InitializationError},
};

/// Host events on which an extension's providers are invoked.
///
/// Which events an extension subscribes to is declared here; enforcing the
/// schedule is the host's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CallEvent {
    /// Invoked only on explicit request.
    Manual,
    /// Invoked when the extension is registered.
    ServerExtensionRegister,
    /// Invoked periodically while the server runs.
    ServerPeriodical,
    /// Invoked when a player joins.
    PlayerJoin,
    /// Invoked when a player leaves.
    PlayerLeave,
}

/// The shape of a provider's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProviderKind {
    /// A yes/no flag.
    Boolean,
    /// A non-negative integer.
    Number,
    /// A two-column table.
    Table,
}

/// A value produced by a provider for one player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ProviderValue {
    /// Result of a [`ProviderKind::Boolean`] provider.
    Boolean(bool),
    /// Result of a [`ProviderKind::Number`] provider.
    Number(u64),
    /// Result of a [`ProviderKind::Table`] provider.
    Table(Table),
}

/// Display metadata for a single provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProviderDescriptor {
    /// Stable machine name, unique within the extension.
    pub name: &'static str,
    /// Short display text.
    pub text: &'static str,
    /// Longer description shown alongside the value.
    pub description: &'static str,
    /// Display tab the value is grouped under, if any.
    pub tab: Option<&'static str>,
    /// The shape of the provider's result.
    pub kind: ProviderKind,
}

/// Extension-level display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExtensionInfo {
    /// The extension's display name.
    pub name: &'static str,
    /// The display tab this extension declares.
    pub tab: &'static str,
}

/// A provider: display metadata bound to a reporter accessor.
#[derive(Debug)]
pub struct Provider<R> {
    descriptor: ProviderDescriptor,
    accessor: fn(&ClaimReporter<R>, Uuid) -> ProviderValue,
}

impl<R: ClaimRegistry> Provider<R> {
    /// The provider's display metadata.
    #[must_use]
    pub const fn descriptor(&self) -> &ProviderDescriptor {
        &self.descriptor
    }

    /// Produces the provider's value for one player.
    #[must_use]
    pub fn fetch(&self, reporter: &ClaimReporter<R>, player: Uuid) -> ProviderValue {
        (self.accessor)(reporter, player)
    }
}

/// A provider's descriptor paired with its value, as delivered to the
/// reporting sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderReport {
    /// The provider's display metadata.
    pub descriptor: ProviderDescriptor,
    /// The value produced for the queried player.
    pub value: ProviderValue,
}

/// The GriefPrevention data extension.
///
/// Wraps a [`ClaimReporter`] and exposes its operations as named providers
/// for the analytics host to collect on player leave.
#[derive(Debug)]
pub struct GriefPreventionExtension<R> {
    reporter: ClaimReporter<R>,
    providers: Vec<Provider<R>>,
}

impl<R: ClaimRegistry> GriefPreventionExtension<R> {
    /// Creates the extension over the registry supplied by the host wiring.
    ///
    /// # Errors
    ///
    /// Returns [`InitializationError`] if no registry is available. The
    /// extension must not be registered in that case.
    pub fn new(registry: Option<R>) -> Result<Self, InitializationError> {
        let reporter = ClaimReporter::new(registry)?;
        Ok(Self {
            reporter,
            providers: provider_table(),
        })
    }

    /// The extension's display metadata.
    #[must_use]
    pub const fn info() -> ExtensionInfo {
        ExtensionInfo {
            name: "GriefPrevention",
            tab: "Claims",
        }
    }

    /// The events on which the host should invoke the providers.
    #[must_use]
    pub const fn call_events() -> &'static [CallEvent] {
        &[CallEvent::PlayerLeave]
    }

    /// The registered providers, in registration order.
    #[must_use]
    pub fn providers(&self) -> &[Provider<R>] {
        &self.providers
    }

    /// The underlying reporter.
    #[must_use]
    pub const fn reporter(&self) -> &ClaimReporter<R> {
        &self.reporter
    }

    /// Produces the named provider's value for one player.
    ///
    /// Returns `None` if no provider with that name is registered.
    #[must_use]
    pub fn fetch(&self, name: &str, player: Uuid) -> Option<ProviderValue> {
        let provider = self
            .providers
            .iter()
            .find(|provider| provider.descriptor.name == name)?;
        Some(provider.fetch(&self.reporter, player))
    }

    /// Produces every provider's value for one player.
    ///
    /// This is what the host dispatches on a player-leave event.
    #[must_use]
    pub fn collect(&self, player: Uuid) -> Vec<ProviderReport> {
        tracing::debug!("collecting {} providers for {player}", self.providers.len());
        self.providers
            .iter()
            .map(|provider| ProviderReport {
                descriptor: provider.descriptor,
                value: provider.fetch(&self.reporter, player),
            })
            .collect()
    }
}

/// The static provider registration table.
///
/// Names, display texts, and descriptions match the upstream extension.
fn provider_table<R: ClaimRegistry>() -> Vec<Provider<R>> {
    vec![
        Provider {
            descriptor: ProviderDescriptor {
                name: "soft_muted",
                text: "SoftMuted",
                description: "Are the player's messages muted for others, but shown to them",
                tab: None,
                kind: ProviderKind::Boolean,
            },
            accessor: |reporter, player| ProviderValue::Boolean(reporter.is_soft_muted(player)),
        },
        Provider {
            descriptor: ProviderDescriptor {
                name: "claims",
                text: "Claims",
                description: "How many claims the player has",
                tab: None,
                kind: ProviderKind::Number,
            },
            accessor: |reporter, player| ProviderValue::Number(reporter.claim_count(player)),
        },
        Provider {
            descriptor: ProviderDescriptor {
                name: "claimed_area",
                text: "Claimed Area",
                description: "How large area the player has claimed",
                tab: None,
                kind: ProviderKind::Number,
            },
            accessor: |reporter, player| ProviderValue::Number(reporter.claimed_area(player)),
        },
        Provider {
            descriptor: ProviderDescriptor {
                name: "claim_table",
                text: "Claims",
                description: "The player's claims, largest first",
                tab: Some("Claims"),
                kind: ProviderKind::Table,
            },
            accessor: |reporter, player| ProviderValue::Table(reporter.claim_table(player)),
        },
    ]
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::{CallEvent, GriefPreventionExtension, ProviderKind, ProviderValue};
    use crate::{
        domain::{Claim, Location},
        registry::MemoryClaimRegistry,
        reporter::InitializationError,
    };

    fn extension_with_one_player() -> (GriefPreventionExtension<MemoryClaimRegistry>, Uuid) {
        let player = Uuid::new_v4();
        let mut registry = MemoryClaimRegistry::new();
        registry.add_claim(Claim::new(player, 50, Location::new(10.0, 64.0, 20.0)));
        registry.add_claim(Claim::new(player, 100, Location::new(5.0, 64.0, 5.0)));
        registry.add_claim(Claim::new(
            Uuid::new_v4(),
            30,
            Location::new(0.0, 64.0, 0.0),
        ));
        registry.set_soft_muted(player, true);

        let extension = GriefPreventionExtension::new(Some(registry)).unwrap();
        (extension, player)
    }

    #[test]
    fn construction_fails_without_a_registry() {
        let result = GriefPreventionExtension::<MemoryClaimRegistry>::new(None);
        assert_eq!(result.unwrap_err(), InitializationError);
    }

    #[test]
    fn invoked_on_player_leave() {
        assert_eq!(
            GriefPreventionExtension::<MemoryClaimRegistry>::call_events(),
            &[CallEvent::PlayerLeave]
        );
    }

    #[test]
    fn registers_the_four_providers() {
        let (extension, _) = extension_with_one_player();

        let registered: Vec<(&str, ProviderKind)> = extension
            .providers()
            .iter()
            .map(|provider| (provider.descriptor().name, provider.descriptor().kind))
            .collect();

        assert_eq!(
            registered,
            [
                ("soft_muted", ProviderKind::Boolean),
                ("claims", ProviderKind::Number),
                ("claimed_area", ProviderKind::Number),
                ("claim_table", ProviderKind::Table),
            ]
        );
    }

    #[test]
    fn table_provider_is_grouped_under_the_claims_tab() {
        let (extension, _) = extension_with_one_player();

        for provider in extension.providers() {
            let descriptor = provider.descriptor();
            let expected = (descriptor.name == "claim_table").then_some("Claims");
            assert_eq!(descriptor.tab, expected, "{}", descriptor.name);
        }
    }

    #[test]
    fn fetch_returns_reporter_values() {
        let (extension, player) = extension_with_one_player();

        assert_eq!(
            extension.fetch("soft_muted", player),
            Some(ProviderValue::Boolean(true))
        );
        assert_eq!(
            extension.fetch("claims", player),
            Some(ProviderValue::Number(2))
        );
        assert_eq!(
            extension.fetch("claimed_area", player),
            Some(ProviderValue::Number(150))
        );
        assert_eq!(extension.fetch("unknown", player), None);
    }

    #[test]
    fn collect_reports_every_provider() {
        let (extension, player) = extension_with_one_player();

        let reports = extension.collect(player);
        assert_eq!(reports.len(), 4);

        let ProviderValue::Table(table) = &reports[3].value else {
            panic!("expected a table, got {:?}", reports[3].value);
        };
        let rows: Vec<(&str, u64)> = table
            .rows()
            .iter()
            .map(|row| (row.location.as_str(), row.area))
            .collect();
        assert_eq!(rows, [("x: 5 z: 5", 100), ("x: 10 z: 20", 50)]);
    }

    #[test]
    fn info_names_the_extension_and_tab() {
        let info = GriefPreventionExtension::<MemoryClaimRegistry>::info();
        assert_eq!(info.name, "GriefPrevention");
        assert_eq!(info.tab, "Claims");
    }
}
