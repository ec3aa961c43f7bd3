use super::*;

#[test]
fn status_modifier_maps_known_states() {
    assert_eq!(status_modifier("running"), "vm-card__status--running");
    assert_eq!(status_modifier("stopped"), "vm-card__status--stopped");
}

#[test]
fn status_modifier_falls_back_for_unknown_states() {
    assert_eq!(status_modifier("suspended"), "vm-card__status--other");
}

#[test]
fn memory_label_formats_reported_memory() {
    assert_eq!(memory_label(Some(2048)), "2048 MB");
}

#[test]
fn memory_label_handles_unreported_memory() {
    assert_eq!(memory_label(None), "n/a");
}
