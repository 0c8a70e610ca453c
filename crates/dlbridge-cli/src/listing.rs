//! Catalog listings.

use clap::ValueEnum;
use dlbridge_core::catalog::option_sets;
use dlbridge_core::constants::{
    BARCODE_HOST_SYMBOL, BARCODE_MANAGER_VERSION, CRADLE_HOST_SYMBOL, CRADLE_MANAGER_VERSION,
    KEYBOARD_HOST_SYMBOL,
};
use dlbridge_core::{PropertyId, SymbologyId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogKind {
    /// Scanner property ids.
    Properties,
    /// Symbology ids reported in scan results.
    Symbologies,
    /// Enumerated option sets and their values.
    Options,
    /// Injected host managers and their interface versions.
    Managers,
}

const MANAGERS: [(&str, Option<u32>); 3] = [
    (BARCODE_HOST_SYMBOL, Some(BARCODE_MANAGER_VERSION)),
    (CRADLE_HOST_SYMBOL, Some(CRADLE_MANAGER_VERSION)),
    (KEYBOARD_HOST_SYMBOL, None),
];

/// Lines describing the catalog entries whose name contains `filter`.
pub fn list(kind: CatalogKind, filter: Option<&str>) -> Vec<String> {
    let filter = filter.map(str::to_ascii_uppercase);
    let keep = |name: &str| {
        filter
            .as_deref()
            .is_none_or(|filter| name.to_ascii_uppercase().contains(filter))
    };

    match kind {
        CatalogKind::Properties => PropertyId::ALL
            .iter()
            .filter(|(name, _)| keep(name))
            .map(|(name, id)| format!("{:>6}  {}", id.as_u32(), name))
            .collect(),
        CatalogKind::Symbologies => SymbologyId::ALL
            .iter()
            .filter(|(name, _)| keep(name))
            .map(|(name, id)| format!("{:>3}  {}", id.as_u32(), name))
            .collect(),
        CatalogKind::Options => option_sets()
            .into_iter()
            .filter(|(set, values)| keep(set) || values.iter().any(|(name, _)| keep(name)))
            .flat_map(|(set, values)| {
                std::iter::once(set.to_string())
                    .chain(values.into_iter().map(|(name, value)| format!("  {value:>3}  {name}")))
            })
            .collect(),
        CatalogKind::Managers => MANAGERS
            .iter()
            .filter(|(symbol, _)| keep(symbol))
            .map(|(symbol, version)| match version {
                Some(version) => format!("{symbol:<16}v{version}"),
                None => format!("{symbol:<16}-"),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_is_case_insensitive() {
        let lines = list(CatalogKind::Properties, Some("code39_enable_check"));
        assert_eq!(lines, ["   258  CODE39_ENABLE_CHECK"]);
    }

    #[test]
    fn test_filter_matches_substrings() {
        let lines = list(CatalogKind::Properties, Some("code39_enable"));
        assert_eq!(lines, ["   256  CODE39_ENABLE", "   258  CODE39_ENABLE_CHECK"]);
    }

    #[test]
    fn test_unfiltered_symbologies() {
        let lines = list(CatalogKind::Symbologies, None);
        assert_eq!(lines.len(), SymbologyId::ALL.len());
        assert!(lines.contains(&" 33  QRCODE".to_string()));
    }

    #[test]
    fn test_option_sets_keep_their_values() {
        let lines = list(CatalogKind::Options, Some("LedAction"));
        assert_eq!(
            lines,
            [
                "LedAction",
                "    0  BLINK_FAST",
                "    1  BLINK_SLOW",
                "    2  LED_OFF",
                "    3  LED_ON",
                "    4  TOGGLE",
            ]
        );
    }

    #[test]
    fn test_managers_show_interface_versions() {
        assert_eq!(
            list(CatalogKind::Managers, None),
            ["_DLBarcodeMgr   v4", "_DLCradleMgr    v1", "_DLKeyboardMgr  -"]
        );
        assert_eq!(list(CatalogKind::Managers, Some("cradle")), ["_DLCradleMgr    v1"]);
    }

    #[test]
    fn test_no_match() {
        assert!(list(CatalogKind::Symbologies, Some("no-such-symbology")).is_empty());
    }
}
