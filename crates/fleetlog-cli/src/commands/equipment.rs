//! Equipment catalog listing.

use std::path::Path;

use anyhow::Result;

use crate::context::{load_catalog, RunContext};
use crate::output::{emit, equipment_table};

/// Handle the `equipment` subcommand: list the master catalog sorted by id.
pub fn handle_list_equipment(ctx: &RunContext, catalog: &Path) -> Result<()> {
    let catalog = load_catalog(catalog)?;
    let items = catalog.items_sorted();
    emit(ctx.format, items.as_slice(), equipment_table)
}
