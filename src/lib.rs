//! Browser behavior for the SAFE admin and supervisor panels.
//!
//! This crate is compiled to WebAssembly and loaded by the server-rendered
//! admin and supervisor pages. The server renders all markup, including
//! hidden per-row fragments; this crate opens and closes the modal dialogs,
//! fills their fields from the clicked row, copies fragments into them,
//! switches the enrollment forms, and bootstraps the dashboard charts.
//!
//! Everything except [`browser`] is plain Rust over the [`dom::Dom`] seam and
//! runs natively, so the panels are tested against [`memory::MemoryDom`]
//! without a browser. Build with `--features hydrate` for the web-sys
//! bindings.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`panel`] | [`panel::Panel`]: owns the page handle and modal state, dispatches clicks and keys |
//! | [`modal`] | Modal identities and the open-modal state |
//! | [`trigger`] | Typed configs read from trigger buttons' `data-*` attributes |
//! | [`fragment`] | Copies pre-rendered markup between containers |
//! | [`forms`] | Course/path enrollment form toggle |
//! | [`chart`] | Chart data, Chart.js configs, and chart bootstrap |
//! | [`dom`] | The id-addressed DOM trait |
//! | [`memory`] | In-memory DOM for tests and tooling |
//! | [`config`] | Page-level configuration |
//! | [`consts`] | Element ids, labels and colors shared with the templates |
//! | [`error`] | [`error::PanelError`] |
//! | `browser` | web-sys DOM, Chart.js binding, exported JS functions (`hydrate` only) |

pub mod chart;
pub mod config;
pub mod consts;
pub mod dom;
pub mod error;
pub mod forms;
pub mod fragment;
pub mod memory;
pub mod modal;
pub mod panel;
pub mod trigger;

#[cfg(feature = "hydrate")]
pub mod browser;

pub use error::PanelError;
pub use panel::Panel;
