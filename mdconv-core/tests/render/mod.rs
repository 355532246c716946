//! End-to-end rendering tests
//!
//! Each file drives `render` with whole documents and checks the exact HTML.

mod blocks;
mod defects;
mod documents;
mod inline;
