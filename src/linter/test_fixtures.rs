//! Shared bash scripts for linter, checker, and output tests.

/// A script that satisfies every rule.
pub const CLEAN_SCRIPT: &str = r#"#!/bin/bash
# Project: demo
# Author: Jane Doe
# Copyright 2024

usage() {
    echo "usage: demo <name>"
}

main() {
    if [ "$#" -eq 0 ]; then
        usage
        exit 1
    fi
    for name in "$@"; do
        echo "hello $name"
    done
    case "$1" in
        -h)
            usage
            ;;
    esac
    while [ -n "$1" ]; do
        shift
    done
}

main "$@"
"#;

/// Minimal header that satisfies every file-level fact.
pub const HEADER: &str = "#!/bin/bash\n# Project: demo\n# Author: Jane Doe\n# Copyright 2024\nusage() {\n    echo usage\n}\nmain() {\n    true\n}\nmain \"$@\"\n";

/// Number of lines in [`HEADER`].
pub const HEADER_LINES: usize = 11;

/// [`HEADER`] followed by `body`; body lines start at `HEADER_LINES + 1`.
pub fn script_with(body: &str) -> String {
    format!("{HEADER}{body}")
}
