//! Cross-crate lobby scenarios live in `tests/`.
