//! On-disk vuln-list-alt feed trees for tests.

use std::fs;
use std::path::{Path, PathBuf};

pub const KWORKSTATION_CPE: &str = "cpe:/o:alt:kworkstation:10";
pub const SERVER_CPE: &str = "cpe:/o:alt:server:10";

pub const OBJECTS: &str = r#"{"RPMInfoObjects":[
    {"ID":"oval:org.altlinux.errata:obj:1","Version":"1","Name":"libfoo"},
    {"ID":"oval:org.altlinux.errata:obj:2","Version":"1","Name":"libbar"}
]}"#;

pub const STATES: &str = r#"{"RPMInfoStates":[
    {"ID":"oval:org.altlinux.errata:ste:1",
     "Arch":{"Text":"x86_64|i586","Datatype":"string","Operation":"pattern match"},
     "EVR":{"Text":"0:1.2-alt1","Datatype":"evr_string","Operation":"less than"}},
    {"ID":"oval:org.altlinux.errata:ste:2",
     "EVR":{"Text":"0:2.0-alt1","Datatype":"evr_string","Operation":"less than"}}
]}"#;

pub const TESTS: &str = r#"{"RPMInfoTests":[
    {"ID":"oval:org.altlinux.errata:tst:1",
     "Object":{"ObjectRef":"oval:org.altlinux.errata:obj:1"},
     "State":{"StateRef":"oval:org.altlinux.errata:ste:1"}},
    {"ID":"oval:org.altlinux.errata:tst:2",
     "Object":{"ObjectRef":"oval:org.altlinux.errata:obj:2"},
     "State":{"StateRef":"oval:org.altlinux.errata:ste:2"}}
]}"#;

/// libfoo fixed by ALT-PU-2024-1, libbar only known by its CVE, plus one unaffected definition
pub const DEFINITIONS: &str = r#"{"Definition":[
    {"ID":"oval:org.altlinux.errata:def:20241",
     "Metadata":{
        "Title":"ALT-PU-2024-1: package libfoo update",
        "Description":"Fixes a heap overflow",
        "References":[{"RefID":"ALT-PU-2024-1","RefURL":"https://errata.altlinux.org/ALT-PU-2024-1","Source":"ALTPU"}],
        "Advisory":{
            "Severity":"High",
            "BDUs":[{"ID":"BDU:2024-00001","Impact":"Medium","Href":"https://bdu.fstec.ru/vul/2024-00001"}],
            "CVEs":[{"ID":"CVE-2024-9999","Impact":"High","Href":"https://nvd.nist.gov/vuln/detail/CVE-2024-9999"}],
            "AffectedCPEList":{"CPEs":["cpe:/o:alt:kworkstation:10"]}
        }},
     "Criteria":{"Operator":"OR","Criterions":[{"TestRef":"oval:org.altlinux.errata:tst:1"}]}},
    {"ID":"oval:org.altlinux.errata:def:20242",
     "Metadata":{
        "Title":"libbar vulnerability",
        "Advisory":{
            "Severity":"Low",
            "CVEs":[{"ID":"CVE-2024-1111","Impact":"Low","Href":"https://nvd.nist.gov/vuln/detail/CVE-2024-1111"}],
            "AffectedCPEList":{"CPEs":["cpe:/o:alt:kworkstation:10"]}
        }},
     "Criteria":{"Operator":"AND","Criterias":[{"Criterions":[{"TestRef":"oval:org.altlinux.errata:tst:2"}]}]}},
    {"ID":"oval:org.altlinux.errata:def:unaffected:1",
     "Metadata":{"Title":"not affected"},
     "Criteria":{"Criterions":[{"TestRef":"oval:org.altlinux.errata:tst:1"}]}}
]}"#;

/// `<root>/vuln-list-alt/oval/<branch>/<product>`
pub fn product_dir(root: &Path, branch: &str, product: &str) -> PathBuf {
    root.join("vuln-list-alt")
        .join("oval")
        .join(branch)
        .join(product)
}

/// Writes the four feed files of one product
pub fn write_product(
    root: &Path,
    branch: &str,
    product: &str,
    objects: &str,
    states: &str,
    tests: &str,
    definitions: &str,
) -> PathBuf {
    let dir = product_dir(root, branch, product);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("objects.json"), objects).unwrap();
    fs::write(dir.join("states.json"), states).unwrap();
    fs::write(dir.join("tests.json"), tests).unwrap();
    fs::write(dir.join("definitions.json"), definitions).unwrap();
    dir
}

/// Writes the standard libfoo/libbar feed under `p10/kworkstation`
pub fn write_standard_feed(root: &Path) -> PathBuf {
    write_product(root, "p10", "kworkstation", OBJECTS, STATES, TESTS, DEFINITIONS)
}
