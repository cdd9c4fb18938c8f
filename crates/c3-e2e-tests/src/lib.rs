//! Test-only crate. The end-to-end scenarios live under `tests/`.
