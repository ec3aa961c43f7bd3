//! Card component for one VM in the dashboard grid.

#[cfg(test)]
#[path = "vm_card_test.rs"]
mod vm_card_test;

use leptos::prelude::*;

use crate::net::types::Vm;

/// CSS modifier for a VM lifecycle status.
fn status_modifier(status: &str) -> &'static str {
    match status {
        "running" => "vm-card__status--running",
        "stopped" => "vm-card__status--stopped",
        _ => "vm-card__status--other",
    }
}

/// Label for the configured memory, when reported.
fn memory_label(memory_mb: Option<i64>) -> String {
    match memory_mb {
        Some(mb) => format!("{mb} MB"),
        None => "n/a".to_owned(),
    }
}

/// A card summarizing one VM.
#[component]
pub fn VmCard(vm: Vm) -> impl IntoView {
    let name = vm.name.clone().unwrap_or_else(|| format!("vm-{}", vm.proxmox_id));
    let status_class = format!("vm-card__status {}", status_modifier(&vm.status));
    let memory = memory_label(vm.hardware_details.memory_mb);

    view! {
        <div class="vm-card">
            <span class="vm-card__name">{name}</span>
            <span class="vm-card__id">{vm.proxmox_id}</span>
            <span class=status_class>{vm.status.clone()}</span>
            <span class="vm-card__node">{vm.node.clone()}</span>
            <span class="vm-card__memory">{memory}</span>
        </div>
    }
}
