//! Shared test utilities for integration tests.
//!
//! Provides helpers for writing markdown documents to temporary
//! directories.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Writes markdown to a file in a new temporary directory.
///
/// # Arguments
///
/// * `name`: File name within the temporary directory
/// * `markdown`: File content
///
/// # Returns
///
/// Temporary directory (kept alive by the caller) and the file path
///
/// # Errors
///
/// Returns error if directory creation or writing fails
#[allow(dead_code)]
pub fn write_markdown(name: &str, markdown: &str) -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join(name);
    fs::write(&path, markdown)?;
    Ok((dir, path))
}

/// A document exercising every GOV.UK template.
#[allow(dead_code)]
pub const KITCHEN_SINK: &str = r#"---
headingsStartWith: xl
---

# Apply for a licence

You can [apply online](https://www.gov.uk/apply "Apply").

> You must be 18 or over.

## Before you start

1. Check you are eligible
2. Gather your documents

* [x] Read the guidance
* [ ] Fill in the form

***

| Document | Required |
|:---------|---------:|
| Passport | Yes |

```rust
fn main() {}
```

Use `apply --now` to submit.
"#;
