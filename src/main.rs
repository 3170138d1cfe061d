//! Meal Picker command line front end
//!
//! Each invocation loads the list, applies one action, and saves on change.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::PathBuf;

    use anyhow::{Context, Result, bail};
    use clap::{Parser, Subcommand};

    use meal_picker::config::Config;
    use meal_picker::platform::FileStorage;
    use meal_picker::{MealPicker, Restaurant, RestaurantDraft};

    #[derive(Debug, Parser)]
    #[command(name = "meal-picker", version, about = "Let chance pick your meal")]
    struct Cli {
        /// Directory holding saved restaurants
        #[arg(long, global = true, env = "MEAL_PICKER_DATA_DIR")]
        data_dir: Option<PathBuf>,

        /// Settings slot name
        #[arg(long, global = true, env = "MEAL_PICKER_SLOT")]
        slot: Option<String>,

        /// More log output (-v info, -vv debug)
        #[arg(short, long, global = true, action = clap::ArgAction::Count)]
        verbose: u8,

        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// List restaurants
        List,
        /// Show a restaurant's menu
        Show { name: String },
        /// Pick a random meal (from the first restaurant if none is named)
        Pick { name: Option<String> },
        /// Add a restaurant
        Add {
            name: String,
            /// Menu entries as "Category=item, item"
            #[arg(short, long = "category")]
            categories: Vec<String>,
        },
        /// Edit a restaurant
        Edit {
            name: String,
            #[arg(long)]
            rename: Option<String>,
            /// Items to append as "Category=item, item"
            #[arg(short, long = "category")]
            categories: Vec<String>,
            /// Category to remove
            #[arg(long)]
            drop_category: Vec<String>,
        },
        /// Delete a restaurant
        Delete { name: String },
        /// Remove all custom restaurants and restore the original list
        Reset,
    }

    impl Cli {
        fn log_filter(&self) -> &'static str {
            match self.verbose {
                0 => "warn",
                1 => "info",
                _ => "debug",
            }
        }
    }

    pub fn run() -> Result<()> {
        let cli = Cli::parse();
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
            .init();

        let config = Config::resolve(cli.data_dir.clone(), cli.slot.clone())?;
        log::info!(
            "Using slot '{}' in {}",
            config.slot,
            config.data_dir.display()
        );
        let store = config.open_store();
        let mut picker = MealPicker::open(&store);

        match cli.command {
            Command::List => {
                for r in picker.restaurants() {
                    println!("{} ({} items)", r.name, r.item_count());
                }
            }
            Command::Show { name } => {
                let r = find(&picker, &name)?;
                print_menu(r);
            }
            Command::Pick { name } => {
                if let Some(name) = name {
                    let id = find(&picker, &name)?.id;
                    picker.select(id);
                }
                let Some(selected) = picker.selected().map(|r| r.name.clone()) else {
                    bail!("No restaurants to pick from");
                };
                let meal = picker.pick_random_meal();
                if meal.is_empty() {
                    println!("{selected} has nothing on the menu");
                } else {
                    println!("Random meal from {selected}:");
                    for (category, item) in meal {
                        println!("  {category}: {item}");
                    }
                }
            }
            Command::Add { name, categories } => {
                if picker.find_by_name(&name).is_some() {
                    log::warn!("A restaurant named '{}' already exists", name.trim());
                    eprintln!("Note: '{}' already exists; lookups by name use the first one", name.trim());
                }
                let mut draft = RestaurantDraft::new();
                draft.name = name;
                apply_categories(&mut draft, &categories)?;
                let added = picker
                    .commit(&draft)
                    .context("Restaurant name must not be blank")?;
                println!("Added {}", added.name);
            }
            Command::Edit {
                name,
                rename,
                categories,
                drop_category,
            } => {
                let mut draft = RestaurantDraft::edit(find(&picker, &name)?);
                if let Some(new_name) = rename {
                    draft.name = new_name;
                }
                for category in &drop_category {
                    if !draft.delete_category(category) {
                        log::warn!("No category '{}' to drop", category);
                    }
                }
                apply_categories(&mut draft, &categories)?;
                let updated = picker
                    .commit(&draft)
                    .context("Restaurant name must not be blank")?;
                println!("Updated {}", updated.name);
            }
            Command::Delete { name } => {
                let id = find(&picker, &name)?.id;
                picker.delete(id);
                println!("Deleted {name}");
            }
            Command::Reset => {
                picker.reset();
                println!("Restored {} default restaurants", picker.restaurants().len());
            }
        }
        Ok(())
    }

    fn find<'a>(picker: &'a MealPicker<'_, FileStorage>, name: &str) -> Result<&'a Restaurant> {
        let mut matches = picker.named(name);
        let first = matches
            .next()
            .with_context(|| format!("No restaurant named '{name}'"))?;
        let others = matches.count();
        if others > 0 {
            log::warn!("{} more restaurants named '{}'; using {}", others, name, first.id);
        }
        Ok(first)
    }

    fn apply_categories(draft: &mut RestaurantDraft, entries: &[String]) -> Result<()> {
        for entry in entries {
            let Some((category, items)) = entry.split_once('=') else {
                bail!("Expected \"Category=item, item\", got '{entry}'");
            };
            if category.trim().is_empty() {
                bail!("Category name must not be blank in '{entry}'");
            }
            draft.add_items_from_list(category, items);
        }
        Ok(())
    }

    fn print_menu(r: &Restaurant) {
        println!("Menu for {}", r.name);
        for (category, items) in &r.menu {
            println!("{category}");
            for item in items {
                println!("  • {item}");
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    cli::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web build is used as a library through `platform::LocalStorage`
}
