//! Command dispatch.

use std::io::Write;

use anyhow::{Context, Result, bail};
use serde::Serialize;

use brewerp_costing::CupCount;
use brewerp_infra::{Confirmation, StateStore, Workspace};
use brewerp_inventory::{InventoryItem, InventoryItemForm, paginate};
use brewerp_recipes::RecipeForm;

use crate::args::{Commands, InventoryCommand, ItemPatch, RecipeCommand};
use crate::render;

const ABORTED: &str = "Nothing deleted. This cannot be undone; pass --yes to confirm.";

fn print_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("failed to encode JSON output")?;
    writeln!(out)?;
    Ok(())
}

fn require_session<S: StateStore>(workspace: &Workspace<S>) -> Result<()> {
    workspace
        .auth()
        .require_authenticated()
        .context("run `brewerp login <email>` first")?;
    Ok(())
}

/// Run one command against `workspace`, writing results to `out`.
pub fn execute<S: StateStore>(
    workspace: &mut Workspace<S>,
    command: Commands,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Commands::Login { email } => {
            let auth = workspace.sign_in(&email)?;
            if json {
                print_json(out, auth)?;
            } else {
                writeln!(out, "Authentication successful!")?;
                render::whoami(out, auth)?;
            }
        }
        Commands::Logout => {
            workspace.sign_out();
            writeln!(out, "Signed out")?;
        }
        Commands::Whoami => {
            if json {
                print_json(out, workspace.auth())?;
            } else {
                render::whoami(out, workspace.auth())?;
            }
        }
        Commands::Inventory(cmd) => {
            require_session(workspace)?;
            inventory(workspace, cmd, json, out)?;
        }
        Commands::Recipe(cmd) => {
            require_session(workspace)?;
            recipe(workspace, cmd, json, out)?;
        }
        Commands::Cogs { id } => {
            require_session(workspace)?;
            let breakdown = workspace.cost_breakdown(id)?;
            if json {
                print_json(out, &breakdown)?;
            } else if let Some(recipe) = workspace.recipes().get(id) {
                render::breakdown(out, recipe, &breakdown)?;
            }
        }
        Commands::Reset { yes } => {
            require_session(workspace)?;
            if !yes {
                bail!("reset replaces the whole catalog; pass --yes to confirm");
            }
            workspace.reset_catalog()?;
            writeln!(out, "Catalog restored to defaults")?;
        }
    }
    Ok(())
}

fn apply_patch(mut form: InventoryItemForm, patch: ItemPatch) -> InventoryItemForm {
    if let Some(name) = patch.name {
        form.name = name;
    }
    if let Some(quantity) = patch.quantity {
        form.quantity = quantity;
    }
    if let Some(uom) = patch.uom {
        form.uom = uom;
    }
    if let Some(price) = patch.price {
        form.price_per_qty = price;
    }
    form
}

fn inventory<S: StateStore>(
    workspace: &mut Workspace<S>,
    cmd: InventoryCommand,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    match cmd {
        InventoryCommand::List { search, page, per_page } => {
            let matches = workspace.inventory().search(search.as_deref().unwrap_or(""));
            let page = paginate(&matches, page, per_page);
            if json {
                print_json(out, &page)?;
            } else {
                render::inventory_page(out, &page)?;
            }
        }
        InventoryCommand::Add(fields) => {
            let form = InventoryItemForm {
                id: None,
                name: fields.name,
                quantity: fields.quantity,
                uom: fields.uom,
                price_per_qty: fields.price,
            };
            let item = workspace.add_inventory_item(&form)?;
            report_item(out, "Added", &item, json)?;
        }
        InventoryCommand::Update { id, fields } => {
            let current = workspace
                .inventory()
                .get(id)
                .with_context(|| format!("inventory item {id} not found"))?;
            let form = apply_patch(InventoryItemForm::from(current), fields);
            workspace.update_inventory_item(&form)?;
            if let Some(item) = workspace.inventory().get(id) {
                report_item(out, "Updated", item, json)?;
            }
        }
        InventoryCommand::Delete { id, yes } => {
            let dangling = workspace.recipes().referencing(id).len();
            match workspace.delete_inventory_item(id, Confirmation::from(yes))? {
                Some(item) => {
                    writeln!(out, "Deleted {} ({})", item.name, item.id)?;
                    if dangling > 0 {
                        writeln!(
                            out,
                            "{dangling} recipe(s) still list this item; it now costs nothing there"
                        )?;
                    }
                }
                None if !yes => writeln!(out, "{ABORTED}")?,
                None => writeln!(out, "No inventory item {id}")?,
            }
        }
    }
    Ok(())
}

fn report_item(out: &mut dyn Write, verb: &str, item: &InventoryItem, json: bool) -> Result<()> {
    if json {
        print_json(out, item)
    } else {
        writeln!(out, "{verb} {} ({})", item.name, item.id)?;
        Ok(())
    }
}

fn recipe<S: StateStore>(
    workspace: &mut Workspace<S>,
    cmd: RecipeCommand,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    match cmd {
        RecipeCommand::List => {
            if json {
                print_json(out, workspace.recipes().list())?;
            } else {
                render::recipe_list(out, workspace.recipes().list(), workspace.inventory().list())?;
            }
        }
        RecipeCommand::Show { id, cups } => {
            let cups: CupCount = cups.parse()?;
            let analysis = workspace.profit(id, cups)?;
            if json {
                print_json(out, &analysis)?;
            } else if let Some(recipe) = workspace.recipes().get(id) {
                render::recipe_detail(out, recipe, workspace.inventory().list(), &analysis)?;
            }
        }
        RecipeCommand::Add { name, description, ingredients, price } => {
            let form = RecipeForm {
                id: None,
                name,
                description,
                ingredients,
                selling_price: price,
            };
            let recipe = workspace.add_recipe(&form)?;
            if json {
                print_json(out, &recipe)?;
            } else {
                writeln!(out, "Added {} ({})", recipe.name, recipe.id)?;
            }
        }
        RecipeCommand::Update { id, name, description, ingredients, price } => {
            let current = workspace
                .recipes()
                .get(id)
                .with_context(|| format!("recipe {id} not found"))?;
            let mut form = RecipeForm::from(current);
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(description) = description {
                form.description = description;
            }
            if !ingredients.is_empty() {
                form.ingredients = ingredients;
            }
            if let Some(price) = price {
                form.selling_price = price;
            }
            workspace.update_recipe(&form)?;
            writeln!(out, "Updated recipe {id}")?;
        }
        RecipeCommand::Delete { id, yes } => {
            match workspace.delete_recipe(id, Confirmation::from(yes))? {
                Some(recipe) => writeln!(out, "Deleted {} ({})", recipe.name, recipe.id)?,
                None if !yes => writeln!(out, "{ABORTED}")?,
                None => writeln!(out, "No recipe {id}")?,
            }
        }
    }
    Ok(())
}
