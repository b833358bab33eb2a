//! Values derived from a [`TemplateConfig`] for the `setup` object in
//! `src/auto-generated.ts` and for the webpack externals table.

use base64::Engine;
use indexmap::IndexMap;
use serde::Serialize;

use crate::config::{AuxiliaryModule, TemplateConfig};
use crate::error::{Result, ScaffoldError};
use crate::version;

/// `rxjs` ships its operators as a separate entry point that must resolve to a
/// member of the rxjs global.
const RXJS: &str = "rxjs";
const RXJS_OPERATORS: &str = "rxjs/operators";

/// How webpack resolves an external at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalBinding {
    pub commonjs: String,
    pub commonjs2: String,
    pub root: RootSymbol,
}

/// Global symbol (or path into a global) an external is exposed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RootSymbol {
    Global(String),
    Member(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedSymbol {
    pub api_key: String,
    pub exported_symbol: String,
}

/// Public URLs of a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageLinks {
    pub developer_documentation: String,
    pub npm_package: String,
    pub source_github: String,
    pub user_guide: String,
}

impl PackageLinks {
    /// Links for `name`. Scoped packages (`@org/pkg`) map to `github.com/org/pkg`,
    /// unscoped ones to the `youwol` organization.
    pub fn for_package(name: &str) -> Self {
        let source_github = match name.strip_prefix('@').and_then(|n| n.split_once('/')) {
            Some((org, pkg)) => format!("https://github.com/{org}/{pkg}"),
            None => format!("https://github.com/youwol/{name}"),
        };
        Self {
            developer_documentation: format!(
                "https://platform.youwol.com/applications/@youwol/cdn-explorer/latest?package={name}&tab=doc"
            ),
            npm_package: format!("https://www.npmjs.com/package/{name}"),
            source_github,
            user_guide: format!("https://l.youwol.com/doc/{name}"),
        }
    }
}

/// Asset id of a package: the standard base64 encoding of its name.
pub fn asset_id(name: &str) -> String {
    base64::engine::general_purpose::STANDARD.encode(name.as_bytes())
}

/// API key of the package's own version.
pub fn api_version(config: &TemplateConfig) -> Result<String> {
    key_for(config.name(), config.version())
}

fn key_for(package: &str, range: &str) -> Result<String> {
    version::api_key(range).ok_or_else(|| ScaffoldError::InvalidVersion {
        package: package.to_string(),
        version: range.to_string(),
    })
}

/// The webpack `externals` table.
pub fn externals_table(config: &TemplateConfig) -> Result<IndexMap<String, ExternalBinding>> {
    let mut table = IndexMap::new();
    for (name, range) in config.externals() {
        let key = key_for(name, range)?;
        table.insert(
            name.clone(),
            ExternalBinding {
                commonjs: name.clone(),
                commonjs2: name.clone(),
                root: RootSymbol::Global(format!("{name}_APIv{key}")),
            },
        );
    }

    if let Some(range) = config.externals().get(RXJS) {
        let key = key_for(RXJS, range)?;
        table.insert(
            RXJS_OPERATORS.to_string(),
            ExternalBinding {
                commonjs: RXJS_OPERATORS.to_string(),
                commonjs2: RXJS_OPERATORS.to_string(),
                root: RootSymbol::Member(vec![format!("{RXJS}_APIv{key}"), "operators".into()]),
            },
        );
    }
    Ok(table)
}

/// Symbol each external registers itself under once installed.
pub fn exported_symbols(config: &TemplateConfig) -> Result<IndexMap<String, ExportedSymbol>> {
    config
        .externals()
        .iter()
        .map(|(name, range)| -> Result<(String, ExportedSymbol)> {
            Ok((
                name.clone(),
                ExportedSymbol {
                    api_key: key_for(name, range)?,
                    exported_symbol: name.clone(),
                },
            ))
        })
        .collect()
}

/// An auxiliary module as listed in `secondaryEntries`, `name` last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecondaryEntry<'a> {
    pub entry_file: &'a str,
    pub load_dependencies: &'a [String],
    pub name: &'a str,
}

impl<'a> From<&'a AuxiliaryModule> for SecondaryEntry<'a> {
    fn from(module: &'a AuxiliaryModule) -> Self {
        Self {
            entry_file: &module.entry_file,
            load_dependencies: &module.load_dependencies,
            name: &module.name,
        }
    }
}

/// Auxiliary modules keyed by name.
pub fn secondary_entries(config: &TemplateConfig) -> IndexMap<String, SecondaryEntry<'_>> {
    config
        .bundles
        .auxiliary_modules
        .iter()
        .map(|m| (m.name.clone(), SecondaryEntry::from(m)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BundleSpec;
    use crate::manifest::PackageManifest;

    fn config(externals: &[(&str, &str)]) -> TemplateConfig {
        let mut spec = BundleSpec::starter();
        for (name, range) in externals {
            spec.externals.insert(name.to_string(), range.to_string());
        }
        spec.auxiliary_modules.push(AuxiliaryModule {
            name: "file-info".into(),
            entry_file: "./lib/file-info/index.ts".into(),
            load_dependencies: vec!["rxjs".into()],
        });
        TemplateConfig::new(
            PackageManifest {
                name: "@youwol/os-widgets".into(),
                version: "0.2.0-wip".into(),
                description: String::new(),
                author: "greinisch@youwol.com".into(),
            },
            spec,
        )
    }

    #[test]
    fn test_asset_id_is_base64_of_name() {
        assert_eq!(asset_id("@youwol/os-widgets"), "QHlvdXdvbC9vcy13aWRnZXRz");
    }

    #[test]
    fn test_api_version_from_prerelease() {
        assert_eq!(api_version(&config(&[])).unwrap(), "02");
    }

    #[test]
    fn test_externals_table_roots() {
        let table =
            externals_table(&config(&[("@youwol/os-core", "^0.1.12"), ("marked", "^4.2.3")]))
                .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table["@youwol/os-core"].root,
            RootSymbol::Global("@youwol/os-core_APIv01".into())
        );
        assert_eq!(table["marked"].commonjs, "marked");
        assert_eq!(table["marked"].commonjs2, "marked");
    }

    #[test]
    fn test_rxjs_adds_operators_entry_last() {
        let table = externals_table(&config(&[("rxjs", "^6.5.5"), ("marked", "^4.2.3")])).unwrap();
        let keys: Vec<_> = table.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["rxjs", "marked", "rxjs/operators"]);
        assert_eq!(
            table["rxjs/operators"].root,
            RootSymbol::Member(vec!["rxjs_APIv6".into(), "operators".into()])
        );
    }

    #[test]
    fn test_member_root_serializes_as_array() {
        let table = externals_table(&config(&[("rxjs", "^6.5.5")])).unwrap();
        let json = serde_json::to_value(&table["rxjs/operators"]).unwrap();
        assert_eq!(json["root"], serde_json::json!(["rxjs_APIv6", "operators"]));
    }

    #[test]
    fn test_exported_symbols() {
        let symbols = exported_symbols(&config(&[("@youwol/fv-group", "^0.2.3")])).unwrap();
        let symbol = &symbols["@youwol/fv-group"];
        assert_eq!(symbol.api_key, "02");
        assert_eq!(symbol.exported_symbol, "@youwol/fv-group");
    }

    #[test]
    fn test_secondary_entry_lists_name_last() {
        let config = config(&[("rxjs", "^6.5.5")]);
        let entries = secondary_entries(&config);
        assert_eq!(entries["file-info"].entry_file, "./lib/file-info/index.ts");

        let json = serde_json::to_string(&entries).unwrap();
        assert_eq!(
            json,
            r#"{"file-info":{"entryFile":"./lib/file-info/index.ts","loadDependencies":["rxjs"],"name":"file-info"}}"#
        );
    }

    #[test]
    fn test_links_for_scoped_package() {
        let links = PackageLinks::for_package("@youwol/os-widgets");
        assert_eq!(links.source_github, "https://github.com/youwol/os-widgets");
        assert_eq!(
            links.npm_package,
            "https://www.npmjs.com/package/@youwol/os-widgets"
        );
    }

    #[test]
    fn test_links_for_unscoped_package() {
        let links = PackageLinks::for_package("widgets");
        assert_eq!(links.source_github, "https://github.com/youwol/widgets");
    }
}
