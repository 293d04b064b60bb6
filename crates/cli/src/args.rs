use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use brewerp_core::{InventoryItemId, RecipeId};
use brewerp_inventory::DEFAULT_PAGE_SIZE;
use brewerp_observability::LogFormat;
use brewerp_recipes::IngredientInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    /// Compact human-readable lines
    Pretty,
    /// One JSON object per line
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "brewerp")]
#[command(about = "Coffee-shop inventory, recipes and cost of goods sold", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding the saved state (defaults to the platform data dir)
    #[arg(long, env = "BREWERP_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log output format
    #[arg(long, env = "BREWERP_LOG_FORMAT", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,

    /// Log level used when RUST_LOG is not set
    #[arg(long, env = "BREWERP_LOG_LEVEL", default_value = "warn", global = true)]
    pub log_level: String,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in with an email address (simulated magic link)
    Login {
        email: String,
    },

    /// Sign out
    Logout,

    /// Show who is signed in
    Whoami,

    /// Manage raw materials
    #[command(subcommand)]
    Inventory(InventoryCommand),

    /// Manage recipes
    #[command(subcommand)]
    Recipe(RecipeCommand),

    /// Show the per-ingredient cost of a recipe
    Cogs {
        id: RecipeId,
    },

    /// Restore the default catalog
    Reset {
        /// Confirm without prompting
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum InventoryCommand {
    /// List items, optionally filtered by name
    List {
        /// Case-insensitive name filter
        #[arg(short, long)]
        search: Option<String>,

        /// Page to show (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Items per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        per_page: usize,
    },

    /// Add an item
    Add(ItemFields),

    /// Change an item; omitted fields keep their current value
    Update {
        id: InventoryItemId,

        #[command(flatten)]
        fields: ItemPatch,
    },

    /// Delete an item (recipes using it keep the line at zero cost)
    Delete {
        id: InventoryItemId,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args, Debug)]
pub struct ItemFields {
    /// Item name
    #[arg(long)]
    pub name: String,

    /// Size of one purchased batch, in the unit below
    #[arg(long)]
    pub quantity: String,

    /// Unit of measure (kg, Liter, pcs, ...)
    #[arg(long)]
    pub uom: String,

    /// Price paid for one batch
    #[arg(long)]
    pub price: String,
}

#[derive(Args, Debug, Default)]
pub struct ItemPatch {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub quantity: Option<String>,

    #[arg(long)]
    pub uom: Option<String>,

    #[arg(long)]
    pub price: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum RecipeCommand {
    /// List recipes with their cost per cup
    List,

    /// Show a recipe with cost and profit for a number of cups
    Show {
        id: RecipeId,

        /// Number of cups (at least 1)
        #[arg(long, default_value = "1")]
        cups: String,
    },

    /// Add a recipe
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: String,

        /// Ingredient as ITEM_ID=QUANTITY (repeatable)
        #[arg(long = "ingredient", short = 'i', value_parser = parse_ingredient)]
        ingredients: Vec<IngredientInput>,

        /// Selling price per cup
        #[arg(long)]
        price: String,
    },

    /// Change a recipe; passing any --ingredient replaces the whole list
    Update {
        id: RecipeId,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long = "ingredient", short = 'i', value_parser = parse_ingredient)]
        ingredients: Vec<IngredientInput>,

        #[arg(long)]
        price: Option<String>,
    },

    /// Delete a recipe
    Delete {
        id: RecipeId,

        #[arg(long)]
        yes: bool,
    },
}

/// `5=18` -> 18 units of item 5.
pub fn parse_ingredient(raw: &str) -> Result<IngredientInput, String> {
    let (id, quantity) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ITEM_ID=QUANTITY, got {raw:?}"))?;
    let item_id: InventoryItemId = id.parse().map_err(|e| format!("{e}"))?;
    Ok(IngredientInput::new(item_id, quantity.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_ingredient_pairs() {
        let input = parse_ingredient("5=18").unwrap();
        assert_eq!(input, IngredientInput::new(InventoryItemId::new(5), "18"));
        assert!(parse_ingredient("5").is_err());
        assert!(parse_ingredient("x=1").is_err());
    }

    #[test]
    fn parses_recipe_add() {
        let cli = Cli::try_parse_from([
            "brewerp", "recipe", "add", "--name", "Americano", "--description", "Black",
            "-i", "5=18", "-i", "6=200", "--price", "18000",
        ])
        .unwrap();
        match cli.command {
            Commands::Recipe(RecipeCommand::Add { ingredients, price, .. }) => {
                assert_eq!(ingredients.len(), 2);
                assert_eq!(price, "18000");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn inventory_list_defaults() {
        let cli = Cli::try_parse_from(["brewerp", "inventory", "list"]).unwrap();
        match cli.command {
            Commands::Inventory(InventoryCommand::List { search, page, per_page }) => {
                assert!(search.is_none());
                assert_eq!(page, 1);
                assert_eq!(per_page, DEFAULT_PAGE_SIZE);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
