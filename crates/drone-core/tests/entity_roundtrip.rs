//! Serde roundtrip and JsonSchema validation tests for all entity types.

use drone_core::entities::*;
use drone_core::enums::Tool;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_port() -> Port {
    let mut port = Port::new(22, "tcp");
    port.alive = true;
    port.service = "ssh".into();
    port.product = "OpenSSH 9.6".into();
    port.notes.push(Note::new("ssh-hostkey", "2048 aa:bb:cc", Tool::Nmap));
    port
}

fn sample_host() -> Host {
    let mut host = Host::with_address("10.0.1.1");
    host.mac_addr = Some("AA:BB:CC:DD:EE:01".into());
    host.hostnames.push("gateway.local".into());
    host.ports.push(sample_port());
    host.os.push(Os::new(Tool::Nmap, 50, "Linux 5.15"));
    host.web_directories.push(WebPath::new(
        "http://10.0.1.1",
        "http://10.0.1.1/admin/",
        80,
        "200",
    ));
    host
}

roundtrip_and_validate!(note_roundtrip, Note, Note::new("title", "body", Tool::Nmap));

roundtrip_and_validate!(port_roundtrip, Port, sample_port());

roundtrip_and_validate!(os_roundtrip, Os, Os::new(Tool::Nmap, 50, "Linux 5.15"));

roundtrip_and_validate!(
    web_path_roundtrip,
    WebPath,
    WebPath::new("http://a.example", "http://a.example/x.php", 80, "302")
);

roundtrip_and_validate!(host_roundtrip, Host, sample_host());

roundtrip_and_validate!(host_default_roundtrip, Host, Host::new());

roundtrip_and_validate!(
    command_roundtrip,
    Command,
    Command {
        tool: Tool::Dirb,
        command: "dirb -a Mozilla/5.0 -r".into(),
    }
);

roundtrip_and_validate!(
    project_roundtrip,
    Project,
    Project {
        project_id: "proj-1".into(),
        commands: vec![Command {
            tool: Tool::Nmap,
            command: "nmap -sV 10.0.1.0/24".into(),
        }],
        hosts: vec![sample_host()],
    }
);

#[test]
fn host_serializes_with_lair_field_names() {
    let value = serde_json::to_value(sample_host()).unwrap();
    for key in [
        "string_addr",
        "long_addr",
        "mac_addr",
        "hostnames",
        "alive",
        "ports",
        "os",
        "web_directories",
    ] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(value["os"][0]["tool"], "nmap");
    assert_eq!(value["ports"][0]["notes"][0]["last_modified_by"], "nmap");
    assert_eq!(value["web_directories"][0]["path_clean"], "_admin_");
}
