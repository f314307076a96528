// pydocs: Python package documentation builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::PipInstaller;
use crate::config::types::DependencyConfig;

#[test]
fn test_pip_args_upgrade_by_default() {
    let installer = PipInstaller::new("pdoc");
    insta::assert_snapshot!(
        installer.args().join(" "),
        @"-m pip install --disable-pip-version-check --upgrade pdoc"
    );
}

#[test]
fn test_pip_args_pinned_without_upgrade() {
    let installer = PipInstaller::from_config(&DependencyConfig {
        install: true,
        requirement: "pdoc==14.7.0".to_string(),
        upgrade: false,
    });
    assert_eq!(installer.requirement(), "pdoc==14.7.0");
    insta::assert_snapshot!(
        installer.args().join(" "),
        @"-m pip install --disable-pip-version-check pdoc==14.7.0"
    );
}

#[cfg(unix)]
mod with_fake_python {
    use std::sync::Arc;

    use crate::error::{DependencyInstallError, DocsError, ProcessError};
    use crate::tools::test_utils::{FakePython, run_with_logs};
    use crate::tools::{DependencyInstaller, ToolContext};

    use super::PipInstaller;

    #[tokio::test]
    async fn test_pip_runs_interpreter() {
        let python = FakePython::new(0, "");
        let ctx = ToolContext::new(Arc::new(python.config()), false);

        PipInstaller::new("pdoc").ensure(&ctx).await.unwrap();

        assert_eq!(
            python.invocations(),
            ["-m pip install --disable-pip-version-check --upgrade pdoc"]
        );
    }

    #[tokio::test]
    async fn test_pip_failure_is_dependency_install_error() {
        let python = FakePython::new(1, "ERROR: No matching distribution found for pdoc");
        let ctx = ToolContext::new(Arc::new(python.config()), false);

        let err = PipInstaller::new("pdoc").ensure(&ctx).await.unwrap_err();
        match DocsError::find_in(&err) {
            Some(DocsError::DependencyInstall(e)) => match &**e {
                DependencyInstallError::InstallFailed {
                    requirement,
                    code,
                    diagnostics,
                } => {
                    assert_eq!(requirement, "pdoc");
                    assert_eq!(*code, 1);
                    assert_eq!(
                        diagnostics,
                        "ERROR: No matching distribution found for pdoc"
                    );
                }
                other @ DependencyInstallError::InterpreterNotFound(_) => {
                    panic!("unexpected error: {other}")
                }
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_pip_killed_after_timeout() {
        let python = FakePython::hanging();
        let mut config = python.config();
        config.tools.timeout_secs = Some(1);
        let ctx = ToolContext::new(Arc::new(config), false);

        let err = PipInstaller::new("pdoc").ensure(&ctx).await.unwrap_err();
        match DocsError::find_in(&err) {
            Some(DocsError::Process(e)) => {
                assert!(matches!(**e, ProcessError::Timeout { timeout_secs: 1, .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(python.invocations().len(), 1);
    }

    #[tokio::test]
    async fn test_pip_dry_run_does_not_execute() {
        let python = FakePython::new(0, "");
        let ctx = ToolContext::new(Arc::new(python.config()), true);

        let logs = run_with_logs(|| async {
            PipInstaller::new("pdoc").ensure(&ctx).await
        })
        .await
        .unwrap();

        assert!(python.invocations().is_empty());
        assert!(logs.contains("[dry-run] Would install dependency"), "{logs}");
        assert!(logs.contains("-m pip install"), "{logs}");
    }
}
