use pretty_assertions::assert_eq;
use proptest::prelude::*;
use winget_manifest::{
    InstallerInputs, InstallerSwitches, ManifestInputs, ManifestRecord, encode, to_json_dump,
};

fn installer(arch: &str, url: &str) -> InstallerInputs {
    InstallerInputs {
        architecture: arch.into(),
        download_url: url.into(),
        sha256: Some("abc".into()),
        ..Default::default()
    }
}

fn minimal_inputs() -> ManifestInputs {
    ManifestInputs {
        package_id: "Pub.App".into(),
        version: "1.0".into(),
        application_name: "App".into(),
        publisher: "Pub".into(),
        license_type: "MIT".into(),
        installer_type: "exe".into(),
        installers: vec![installer("x64", "https://x/a.exe")],
        ..Default::default()
    }
}

fn render(inputs: &ManifestInputs) -> String {
    let record = ManifestRecord::from_inputs(inputs).unwrap();
    String::from_utf8(encode(&record).unwrap()).unwrap()
}

#[test]
fn minimal_manifest_renders_in_field_order() {
    insta::assert_snapshot!(render(&minimal_inputs()), @r###"
    Id: Pub.App
    Version: '1.0'
    Name: App
    Publisher: Pub
    License: MIT
    InstallerType: exe
    Installers:
    - Arch: x64
      Url: https://x/a.exe
      Sha256: abc
    "###);
}

#[test]
fn full_manifest_renders_nested_blocks() {
    let mut inputs = minimal_inputs();
    inputs.license_url = Some("https://x/license".into());
    inputs.app_moniker = Some("app".into());
    inputs.tags = vec!["utility".into(), "tools".into()];
    inputs.installers[0].language = Some("en-US".into());
    inputs.installers[0].scope = Some("machine".into());
    inputs.installers[0].switches = Some(InstallerSwitches {
        silent: Some("/S".into()),
        silent_with_progress: Some("/P".into()),
        ..Default::default()
    });
    inputs.installers.push(installer("arm64", "https://x/b.exe"));

    insta::assert_snapshot!(render(&inputs), @r###"
    Id: Pub.App
    Version: '1.0'
    Name: App
    Publisher: Pub
    License: MIT
    LicenseUrl: https://x/license
    AppMoniker: app
    Tags:
    - utility
    - tools
    InstallerType: exe
    Installers:
    - Arch: x64
      Url: https://x/a.exe
      Sha256: abc
      Language: en-US
      Switches:
        Silent: /S
        SilentWithProgress: /P
      Scope: machine
    - Arch: arm64
      Url: https://x/b.exe
      Sha256: abc
    "###);
}

#[test]
fn omitted_optionals_leave_no_keys() {
    let mut inputs = minimal_inputs();
    inputs.license_url = Some(String::new());
    inputs.tags = vec![];

    let yaml = render(&inputs);

    assert!(!yaml.contains("LicenseUrl"));
    assert!(!yaml.contains("Tags"));
    assert!(!yaml.contains("null"));
    assert!(!yaml.contains("~"));
}

#[test]
fn installer_order_is_preserved() {
    let mut inputs = minimal_inputs();
    inputs.installers = vec![
        installer("x86", "https://x/32.exe"),
        installer("x64", "https://x/64.exe"),
    ];
    let mut reversed = inputs.clone();
    reversed.installers.reverse();

    let a = render(&inputs);
    let b = render(&reversed);

    assert!(a.find("32.exe").unwrap() < a.find("64.exe").unwrap());
    assert!(b.find("64.exe").unwrap() < b.find("32.exe").unwrap());
    assert_ne!(a, b);
}

#[test]
fn encoding_is_valid_yaml_with_same_content() {
    let yaml = render(&minimal_inputs());
    let parsed: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

    assert_eq!(parsed["Id"].as_str(), Some("Pub.App"));
    assert_eq!(parsed["Version"].as_str(), Some("1.0"));
    assert_eq!(parsed["Installers"][0]["Arch"].as_str(), Some("x64"));
}

#[test]
fn json_dump_uses_four_space_indent_and_field_order() {
    let record = ManifestRecord::from_inputs(&minimal_inputs()).unwrap();
    let dump = to_json_dump(&record).unwrap();

    assert!(dump.starts_with("{\n    \"Id\": \"Pub.App\",\n    \"Version\": \"1.0\","));
    let value: serde_json::Value = serde_json::from_str(&dump).unwrap();
    assert_eq!(value["Installers"][0]["Url"], "https://x/a.exe");
}

#[test]
fn json_dump_is_not_the_canonical_form() {
    let record = ManifestRecord::from_inputs(&minimal_inputs()).unwrap();

    assert_ne!(to_json_dump(&record).unwrap().into_bytes(), encode(&record).unwrap());
}

fn field() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ._:/-]{0,24}"
}

prop_compose! {
    fn arb_inputs()(
        package_id in "[A-Za-z]{1,8}\\.[A-Za-z]{1,8}",
        version in "[0-9]{1,3}(\\.[0-9]{1,3}){0,3}",
        name in "[A-Za-z][A-Za-z0-9 ]{0,16}",
        license_url in proptest::option::of(field()),
        tags in proptest::collection::vec(field(), 0..4),
        arches in proptest::collection::vec(
            prop_oneof![Just("x86"), Just("x64"), Just("arm"), Just("arm64"), Just("neutral")],
            1..4,
        ),
        language in proptest::option::of(field()),
    ) -> ManifestInputs {
        ManifestInputs {
            package_id,
            version,
            application_name: name,
            publisher: "Pub".into(),
            license_type: "MIT".into(),
            license_url,
            tags,
            installer_type: "msi".into(),
            installers: arches
                .into_iter()
                .map(|arch| InstallerInputs {
                    language: language.clone(),
                    ..installer(arch, "https://x/setup.msi")
                })
                .collect(),
            ..Default::default()
        }
    }
}

proptest! {
    #[test]
    fn encoding_is_deterministic(inputs in arb_inputs()) {
        let first = ManifestRecord::from_inputs(&inputs).unwrap();
        let second = ManifestRecord::from_inputs(&inputs).unwrap();

        prop_assert_eq!(encode(&first).unwrap(), encode(&first).unwrap());
        prop_assert_eq!(encode(&first).unwrap(), encode(&second).unwrap());
    }

    #[test]
    fn encoding_round_trips_identifier(inputs in arb_inputs()) {
        let record = ManifestRecord::from_inputs(&inputs).unwrap();
        let yaml = String::from_utf8(encode(&record).unwrap()).unwrap();
        let parsed: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

        prop_assert_eq!(parsed["Id"].as_str(), Some(record.id()));
        prop_assert_eq!(parsed["Version"].as_str(), Some(record.version()));
        prop_assert_eq!(
            parsed["Installers"].as_sequence().map(Vec::len),
            Some(record.installers().len())
        );
    }
}
