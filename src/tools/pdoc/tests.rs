// pydocs: Python package documentation builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::PdocGenerator;
use crate::tools::GenerateOptions;

fn options() -> GenerateOptions {
    GenerateOptions::builder()
        .entry_point("mypkg/__init__.py")
        .output_dir("docs")
        .logo_url("https://example.com/logo.png")
        .logo_link_url("https://example.com/")
        .build()
}

#[test]
fn test_pdoc_args_full() {
    insta::assert_snapshot!(
        PdocGenerator::args(&options()).join(" "),
        @"-m pdoc mypkg/__init__.py -o docs --logo https://example.com/logo.png --logo-link https://example.com/ --mermaid --math"
    );
}

#[test]
fn test_pdoc_args_without_logo_or_rendering() {
    let options = GenerateOptions::builder()
        .entry_point("mypkg/__init__.py")
        .output_dir("out")
        .mermaid(false)
        .math(false)
        .extra_args(vec!["--docformat".to_string(), "google".to_string()])
        .build();
    insta::assert_snapshot!(
        PdocGenerator::args(&options).join(" "),
        @"-m pdoc mypkg/__init__.py -o out --docformat google"
    );
}

#[cfg(unix)]
mod with_fake_python {
    use std::sync::Arc;

    use crate::error::{DocGenerationError, DocsError};
    use crate::tools::test_utils::{FakePython, run_with_logs};
    use crate::tools::{DocGenerator, ToolContext};

    use super::{PdocGenerator, options};

    #[tokio::test]
    async fn test_pdoc_runs_interpreter() {
        let python = FakePython::new(0, "");
        let ctx = ToolContext::new(Arc::new(python.config()), false);

        PdocGenerator::new()
            .generate(&ctx, &options())
            .await
            .unwrap();

        let calls = python.invocations();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].starts_with("-m pdoc mypkg/__init__.py -o docs"));
    }

    #[tokio::test]
    async fn test_pdoc_runs_from_package_root_with_utf8_output() {
        let python = FakePython::new(0, "");
        let root = tempfile::tempdir().unwrap();
        let root_path = root.path().canonicalize().unwrap();
        let ctx = ToolContext::new(Arc::new(python.config()), false).with_working_dir(&root_path);

        PdocGenerator::new()
            .generate(&ctx, &options())
            .await
            .unwrap();

        assert_eq!(
            python.last_context(),
            [
                format!("cwd={}", root_path.display()),
                "PYTHONIOENCODING=utf-8".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_pdoc_failure_surfaces_diagnostics() {
        let python = FakePython::new(2, "ImportError: No module named mypkg");
        let ctx = ToolContext::new(Arc::new(python.config()), false);

        let err = PdocGenerator::new()
            .generate(&ctx, &options())
            .await
            .unwrap_err();

        let Some(DocsError::DocGeneration(e)) = DocsError::find_in(&err) else {
            panic!("unexpected error: {err:#}");
        };
        let DocGenerationError::GeneratorFailed {
            code, diagnostics, ..
        } = &**e;
        assert_eq!(*code, 2);
        assert_eq!(diagnostics, "ImportError: No module named mypkg");
        assert_eq!(DocsError::find_in(&err).map(DocsError::exit_code), Some(2));
    }

    #[tokio::test]
    async fn test_pdoc_dry_run_logs_command() {
        let python = FakePython::new(0, "");
        let ctx = ToolContext::new(Arc::new(python.config()), true);

        let logs = run_with_logs(|| async {
            PdocGenerator::new().generate(&ctx, &options()).await
        })
        .await
        .unwrap();

        assert!(python.invocations().is_empty());
        assert!(logs.contains("[dry-run] Would generate documentation"), "{logs}");
        assert!(logs.contains("--mermaid --math"), "{logs}");
    }
}
