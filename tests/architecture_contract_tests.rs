//! Architecture contract tests.

mod support;

use support::architecture::{
    find_lines_containing, find_non_export_lines_in_mod_files, path_exists, read_relative,
};

#[test]
fn cli_has_no_direct_infrastructure_imports() {
    let hits = find_lines_containing(
        "src/adapter/inbound/cli",
        &["use crate::infrastructure", "crate::infrastructure::"],
    );

    assert!(
        hits.is_empty(),
        "found direct infrastructure imports in inbound CLI adapters: {hits:#?}"
    );
}

#[test]
fn domain_has_no_framework_or_outer_layer_imports() {
    let hits = find_lines_containing(
        "src/domain",
        &[
            "crate::adapter",
            "crate::infrastructure",
            "crate::application",
            "crate::port",
            "tokio::",
            "tracing::",
        ],
    );

    assert!(
        hits.is_empty(),
        "found forbidden imports in domain layer: {hits:#?}"
    );
}

#[test]
fn mod_rs_is_export_only() {
    let violations = find_non_export_lines_in_mod_files("src");
    assert!(
        violations.is_empty(),
        "found non-export content in mod.rs files: {violations:#?}"
    );
}

#[test]
fn cli_operator_bridge_uses_operator_name() {
    let source = read_relative("src/adapter/inbound/cli/operator.rs");
    assert!(
        source.contains("pub fn operator() -> &'static dyn OperatorPort"),
        "operator bridge should expose `operator()` capability accessor"
    );
}

#[test]
fn operator_ports_are_transport_agnostic() {
    let hits = find_lines_containing("src/port/inbound/operator", &["std::path::Path", "PathBuf"]);
    assert!(
        hits.is_empty(),
        "operator inbound ports should not expose filesystem path types: {hits:#?}"
    );
}

#[test]
fn application_layer_has_no_direct_adapter_imports() {
    let hits = find_lines_containing("src/application", &["crate::adapter::", "crate::infrastructure::"]);
    assert!(
        hits.is_empty(),
        "application layer should not import adapters or infrastructure: {hits:#?}"
    );
}

#[test]
fn only_process_adapter_spawns_commands() {
    let hits = find_lines_containing("src", &["Command::new("]);
    let outside: Vec<_> = hits
        .into_iter()
        .filter(|(path, _, _)| path != "src/adapter/outbound/process.rs")
        .collect();
    assert!(
        outside.is_empty(),
        "external programs should be spawned only by the process adapter: {outside:#?}"
    );
}

#[test]
fn no_code_changes_the_process_working_directory() {
    let hits = find_lines_containing("src", &["set_current_dir"]);
    assert!(
        hits.is_empty(),
        "commands should receive their working directory explicitly: {hits:#?}"
    );
}

#[test]
fn outbound_ports_live_under_port_layer() {
    assert!(path_exists("src/port/outbound/hypervisor.rs"));
    assert!(path_exists("src/port/outbound/compose.rs"));
}
