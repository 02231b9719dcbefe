//! Raw OVAL records as exported by vuln-list-alt.
//!
//! Field names follow the upstream export (Go-style PascalCase). Every field
//! defaults to empty, whether missing or `null`, so partially populated
//! records decode; interpreting the values is left to the services layer.

use serde::{Deserialize, Deserializer};

/// Decodes an explicit `null` the same way as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// `objects.json`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ObjectsFile {
    #[serde(rename = "RPMInfoObjects", deserialize_with = "null_as_default")]
    pub rpm_info_objects: Vec<RawObject>,
}

/// A package identity referenced by tests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RawObject {
    #[serde(rename = "ID", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// `states.json`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StatesFile {
    #[serde(rename = "RPMInfoStates", deserialize_with = "null_as_default")]
    pub rpm_info_states: Vec<RawState>,
}

/// A version/architecture constraint referenced by tests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RawState {
    #[serde(rename = "ID", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub arch: Matcher,
    #[serde(rename = "EVR", deserialize_with = "null_as_default")]
    pub evr: Matcher,
}

/// One typed comparison inside a state (`<arch>` or `<evr>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Matcher {
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub datatype: String,
    #[serde(deserialize_with = "null_as_default")]
    pub operation: String,
}

impl Matcher {
    pub fn new(datatype: &str, operation: &str, text: &str) -> Self {
        Self {
            text: text.to_string(),
            datatype: datatype.to_string(),
            operation: operation.to_string(),
        }
    }
}

/// `tests.json`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TestsFile {
    #[serde(rename = "RPMInfoTests", deserialize_with = "null_as_default")]
    pub rpm_info_tests: Vec<RawTest>,
}

/// Links an object to an optional state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RawTest {
    #[serde(rename = "ID", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub object: ObjectRef,
    #[serde(deserialize_with = "null_as_default")]
    pub state: StateRef,
}

impl RawTest {
    pub fn new(id: &str, object_ref: &str, state_ref: &str) -> Self {
        Self {
            id: id.to_string(),
            object: ObjectRef {
                object_ref: object_ref.to_string(),
            },
            state: StateRef {
                state_ref: state_ref.to_string(),
            },
        }
    }

    pub fn object_ref(&self) -> &str {
        &self.object.object_ref
    }

    pub fn state_ref(&self) -> &str {
        &self.state.state_ref
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ObjectRef {
    #[serde(deserialize_with = "null_as_default")]
    pub object_ref: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct StateRef {
    #[serde(deserialize_with = "null_as_default")]
    pub state_ref: String,
}

/// `definitions.json`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DefinitionsFile {
    #[serde(rename = "Definition", deserialize_with = "null_as_default")]
    pub definitions: Vec<Definition>,
}

/// One advisory definition with its criteria tree.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Definition {
    #[serde(rename = "ID", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: Metadata,
    #[serde(deserialize_with = "null_as_default")]
    pub criteria: CriteriaNode,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Metadata {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub references: Vec<Reference>,
    #[serde(deserialize_with = "null_as_default")]
    pub advisory: AdvisoryMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Reference {
    #[serde(rename = "RefID", deserialize_with = "null_as_default")]
    pub ref_id: String,
    #[serde(rename = "RefURL", deserialize_with = "null_as_default")]
    pub ref_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
}

impl Reference {
    pub fn new(ref_id: &str, ref_url: &str, source: &str) -> Self {
        Self {
            ref_id: ref_id.to_string(),
            ref_url: ref_url.to_string(),
            source: source.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AdvisoryMetadata {
    #[serde(deserialize_with = "null_as_default")]
    pub severity: String,
    #[serde(rename = "CVEs", deserialize_with = "null_as_default")]
    pub cves: Vec<CrossReference>,
    #[serde(rename = "BDUs", deserialize_with = "null_as_default")]
    pub bulletins: Vec<CrossReference>,
    #[serde(
        rename = "AffectedCPEList",
        alias = "AffectedCPEs",
        deserialize_with = "null_as_default"
    )]
    pub affected_cpes: AffectedCpes,
}

/// A CVE or BDU entry attached to a definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CrossReference {
    #[serde(rename = "ID", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub impact: String,
    #[serde(deserialize_with = "null_as_default")]
    pub href: String,
}

impl CrossReference {
    pub fn new(id: &str, impact: &str, href: &str) -> Self {
        Self {
            id: id.to_string(),
            impact: impact.to_string(),
            href: href.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AffectedCpes {
    #[serde(rename = "CPEs", deserialize_with = "null_as_default")]
    pub cpes: Vec<String>,
}

/// A node of a definition's criteria tree.
///
/// `operator` is decoded for completeness but never evaluated: every reachable
/// criterion contributes on its own (see `CriteriaEvaluator`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CriteriaNode {
    #[serde(deserialize_with = "null_as_default")]
    pub operator: String,
    #[serde(deserialize_with = "null_as_default")]
    pub criterions: Vec<Criterion>,
    #[serde(deserialize_with = "null_as_default")]
    pub criterias: Vec<CriteriaNode>,
}

impl CriteriaNode {
    /// Builds a node from leaf test refs and child nodes
    pub fn new(test_refs: &[&str], children: Vec<CriteriaNode>) -> Self {
        Self {
            operator: String::new(),
            criterions: test_refs
                .iter()
                .map(|test_ref| Criterion {
                    test_ref: test_ref.to_string(),
                    comment: String::new(),
                })
                .collect(),
            criterias: children,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Criterion {
    #[serde(deserialize_with = "null_as_default")]
    pub test_ref: String,
    #[serde(deserialize_with = "null_as_default")]
    pub comment: String,
}

/// The four record tables of one product directory.
#[derive(Debug, Clone, Default)]
pub struct OvalFeed {
    pub objects: Vec<RawObject>,
    pub states: Vec<RawState>,
    pub tests: Vec<RawTest>,
    pub definitions: Vec<Definition>,
}
