//! Output format tests through the registry.

mod html;
