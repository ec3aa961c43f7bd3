use super::*;
use crate::net::types::{VmCpu, VmHardware};

fn make_vm(template: i64) -> Vm {
    Vm {
        proxmox_id: 100,
        name: Some("kali".to_owned()),
        status: "stopped".to_owned(),
        node: "pve1".to_owned(),
        hardware_details: VmHardware {
            description: String::new(),
            template,
            cpu: VmCpu::default(),
            memory_mb: None,
            boot_order: None,
            disks: serde_json::Value::Null,
            network_interfaces: serde_json::Value::Null,
        },
    }
}

// =============================================================
// Endpoint formatting
// =============================================================

#[test]
fn template_tag_endpoint_formats_expected_path() {
    assert_eq!(template_tag_endpoint(9000), "/templates/9000/tag");
}

// =============================================================
// Input parsing
// =============================================================

#[test]
fn parse_lab_groups_splits_and_trims() {
    assert_eq!(
        parse_lab_groups(" red-team , blue-team ,ad-lab"),
        vec!["red-team".to_owned(), "blue-team".to_owned(), "ad-lab".to_owned()]
    );
}

#[test]
fn parse_lab_groups_drops_empty_entries() {
    assert_eq!(parse_lab_groups(",, ,"), Vec::<String>::new());
    assert_eq!(parse_lab_groups(""), Vec::<String>::new());
}

#[test]
fn parse_vmid_accepts_padded_digits() {
    assert_eq!(parse_vmid(" 9000 "), Some(9000));
}

#[test]
fn parse_vmid_rejects_non_numeric_input() {
    assert_eq!(parse_vmid("kali"), None);
    assert_eq!(parse_vmid(""), None);
}

// =============================================================
// Template filter
// =============================================================

#[test]
fn is_template_checks_hardware_flag() {
    assert!(is_template(&make_vm(1)));
    assert!(!is_template(&make_vm(0)));
}
