//! UI module - TUI rendering components.
//!
//! Each [`testlist_view::Template`] variant has its own renderer:
//! - `shell.rs`: header bar, search input and suggestions (`TestListShell`)
//! - `table.rs`: test case table (`TestTable`)
//! - `tab_bar.rs`: search tab plus one header per detail tab (`DetailsTab`)
//! - `details.rs`: detail pane of one test (`DetailsPane`)
//! - `layout.rs`: region layout, template dispatch and mouse hit testing

mod details;
mod layout;
mod shell;
mod tab_bar;
mod table;

pub mod widgets;

pub use layout::{click, regions, render, Regions};
