use super::*;
use crate::fs::mock::MockFs;
use crate::process::mock::RecordingRunner;
use crate::registry::mock::{single_file_descriptor, MockRegistry};

fn plain_formatter() -> ErrorFormatter {
    ErrorFormatter::with_color_detection(false, || false)
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn failure_does_not_stop_remaining_components() {
    let registry = MockRegistry::new()
        .with_component("snippet", single_file_descriptor("snippet.tsx", "export {};"))
        .with_component("editor", single_file_descriptor("editor.tsx", "export {};"));
    let fs = MockFs::new();
    let runner = RecordingRunner::new();
    let layout = ProjectLayout::new("/project");
    let scaffold = ScaffoldConfig::default();
    let mapping = WorkspaceMapping::default();
    let installer = ComponentInstaller::new(InstallContext {
        registry: &registry,
        fs: &fs,
        runner: &runner,
        layout: &layout,
        scaffold: &scaffold,
        mapping: &mapping,
    });

    let (success, failure) = add_components(
        &installer,
        &names(&["snippet", "missing", "editor"]),
        &plain_formatter(),
    )
    .await;

    assert_eq!((success, failure), (2, 1));
    assert_eq!(
        runner.command_lines(),
        vec![
            "npx shadcn@latest add https://registry.test/r/snippet.json",
            "npx shadcn@latest add https://registry.test/r/editor.json",
        ]
    );
}

#[tokio::test]
async fn blank_names_are_skipped() {
    let registry = MockRegistry::new()
        .with_component("snippet", single_file_descriptor("snippet.tsx", "export {};"));
    let fs = MockFs::new();
    let runner = RecordingRunner::new();
    let layout = ProjectLayout::new("/project");
    let scaffold = ScaffoldConfig::default();
    let mapping = WorkspaceMapping::default();
    let installer = ComponentInstaller::new(InstallContext {
        registry: &registry,
        fs: &fs,
        runner: &runner,
        layout: &layout,
        scaffold: &scaffold,
        mapping: &mapping,
    });

    let (success, failure) =
        add_components(&installer, &names(&["  ", "", " snippet "]), &plain_formatter()).await;

    assert_eq!((success, failure), (1, 0));
    assert_eq!(runner.calls().len(), 1);
}
