//! Plain-text views.

use std::io::{self, Write};

use brewerp_auth::AuthState;
use brewerp_costing::{CostBreakdown, ProfitAnalysis, calculate_cogs, format_amount, format_rupiah};
use brewerp_inventory::{InventoryItem, Page};
use brewerp_recipes::Recipe;

pub fn whoami(out: &mut dyn Write, auth: &AuthState) -> io::Result<()> {
    match (&auth.is_authenticated, &auth.email) {
        (true, Some(email)) => writeln!(out, "Signed in as {email}"),
        _ => writeln!(out, "Not signed in"),
    }
}

pub fn inventory_page(out: &mut dyn Write, page: &Page<&InventoryItem>) -> io::Result<()> {
    if page.total_items == 0 {
        return writeln!(out, "No items found.");
    }

    writeln!(out, "{:>4}  {:<20} {:>10}  {:<6} {:>16}", "ID", "NAME", "QTY", "UOM", "PRICE/QTY")?;
    for item in &page.items {
        writeln!(
            out,
            "{:>4}  {:<20} {:>10}  {:<6} {:>16}",
            item.id,
            item.name,
            format_amount(item.quantity),
            item.uom,
            format_rupiah(item.price_per_qty)
        )?;
    }
    writeln!(
        out,
        "Page {} of {} ({} items)",
        page.page,
        page.total_pages.max(1),
        page.total_items
    )
}

pub fn recipe_list(out: &mut dyn Write, recipes: &[Recipe], inventory: &[InventoryItem]) -> io::Result<()> {
    if recipes.is_empty() {
        return writeln!(out, "No recipes yet.");
    }
    for recipe in recipes {
        writeln!(
            out,
            "{:>4}  {:<28} COGS: {}",
            recipe.id,
            recipe.name,
            format_rupiah(calculate_cogs(&recipe.items, inventory))
        )?;
    }
    Ok(())
}

pub fn recipe_detail(
    out: &mut dyn Write,
    recipe: &Recipe,
    inventory: &[InventoryItem],
    analysis: &ProfitAnalysis,
) -> io::Result<()> {
    writeln!(out, "{}", recipe.name)?;
    writeln!(out, "{}", recipe.description)?;
    writeln!(out)?;
    writeln!(out, "Ingredients")?;
    for line in &recipe.items {
        let item = inventory.iter().find(|item| item.id == line.item_id);
        let name = item.map_or("(deleted item)", |item| item.name.as_str());
        writeln!(
            out,
            "  {:<24} {:>8} {}",
            name,
            format_amount(line.quantity),
            line.unit_label(item)
        )?;
    }
    writeln!(out)?;

    let cups = analysis.cups;
    writeln!(out, "Cost per cup:            {}", format_rupiah(analysis.cost_per_cup))?;
    writeln!(out, "Total COGS ({cups} cups):    {}", format_rupiah(analysis.total_cost))?;
    writeln!(out, "Selling price:           {}", format_rupiah(analysis.selling_price))?;
    writeln!(out, "Profit:                  {}", format_rupiah(analysis.profit_per_cup))?;
    writeln!(out, "Total profit ({cups} cups):  {}", format_rupiah(analysis.total_profit))?;
    if let Some(margin) = analysis.margin {
        writeln!(out, "Margin:                  {}%", format_amount(margin * 100.0))?;
    }
    Ok(())
}

pub fn breakdown(out: &mut dyn Write, recipe: &Recipe, breakdown: &CostBreakdown) -> io::Result<()> {
    writeln!(out, "{} (recipe {})", recipe.name, recipe.id)?;
    for line in &breakdown.lines {
        match (&line.name, &line.uom) {
            (Some(name), Some(uom)) => writeln!(
                out,
                "  {:<24} {:>8} x {:<6} {:>14}",
                name,
                format_amount(line.quantity),
                uom,
                format_rupiah(line.cost)
            )?,
            _ => writeln!(
                out,
                "  {:<24} {:>8}   {:<6} {:>14}",
                format!("missing item {}", line.item_id),
                format_amount(line.quantity),
                "-",
                format_rupiah(0.0)
            )?,
        }
    }
    writeln!(out, "  {:<24} {:>32}", "TOTAL", format_rupiah(breakdown.total))
}
