//! Command-line storefront

use libbabyshop::{
    core::{
        catalog::{CatalogQuery, RELATED_PRODUCTS_LIMIT},
        summary::OrderSummary,
        types::{CheckoutStep, PaymentMethod, ShippingMethod, SortOrder},
    },
    models::{ShippingDetails, DEFAULT_COUNTRY},
    StoreConfig, Storefront,
};

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Baby shop storefront CLI
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Path to a JSON config file
    #[clap(short, long, default_value = "~/.babyshop/config.json")]
    config: PathBuf,

    /// Override the directory state is kept in
    #[clap(short, long)]
    data_dir: Option<PathBuf>,

    /// Subcommands
    #[clap(subcommand)]
    command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Browse products
    Catalog {
        #[clap(subcommand)]
        command: CatalogCommands,
    },
    /// Manage the cart
    Cart {
        #[clap(subcommand)]
        command: CartCommands,
    },
    /// Sign in and out
    Account {
        #[clap(subcommand)]
        command: AccountCommands,
    },
    /// Place an order for everything in the cart
    Checkout(CheckoutArgs),
}

/// Catalog commands
#[derive(Subcommand, Debug)]
enum CatalogCommands {
    /// List products
    List {
        /// Category to show ("all" for every category)
        #[clap(short, long)]
        category: Option<String>,
        /// Search term matched against name and description
        #[clap(short, long)]
        search: Option<String>,
        /// Sort order (default, price-low-to-high, price-high-to-low, name-a-to-z, name-z-to-a)
        #[clap(long, default_value = "default")]
        sort: String,
    },
    /// Show one product and related items
    Show {
        /// Product ID
        #[clap(short, long)]
        id: String,
    },
}

/// Cart commands
#[derive(Subcommand, Debug)]
enum CartCommands {
    /// Add a product
    Add {
        /// Product ID
        #[clap(short, long)]
        id: String,
        /// Quantity to add
        #[clap(short, long, default_value_t = 1)]
        quantity: i64,
    },
    /// Remove a product
    Remove {
        /// Product ID
        #[clap(short, long)]
        id: String,
    },
    /// Set the quantity of a product (0 removes it)
    Set {
        /// Product ID
        #[clap(short, long)]
        id: String,
        /// New quantity
        #[clap(short, long, allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart
    Clear,
    /// Show the cart and its summary
    Show,
}

/// Account commands
#[derive(Subcommand, Debug)]
enum AccountCommands {
    /// Sign in with email and password
    Login {
        #[clap(short, long)]
        email: String,
        #[clap(short, long)]
        password: String,
    },
    /// Sign in with Google
    Google,
    /// Create an account
    Register {
        #[clap(short, long)]
        email: String,
        #[clap(short, long)]
        password: String,
        #[clap(short, long)]
        name: String,
    },
    /// Sign out
    Logout,
    /// Show the signed-in user
    Whoami,
}

/// Checkout arguments
#[derive(Args, Debug)]
struct CheckoutArgs {
    /// Contact email (defaults to the signed-in user's)
    #[clap(long)]
    email: Option<String>,
    #[clap(long)]
    first_name: String,
    #[clap(long)]
    last_name: String,
    #[clap(long)]
    address: String,
    #[clap(long)]
    apartment: Option<String>,
    #[clap(long)]
    city: String,
    #[clap(long)]
    state: String,
    #[clap(long)]
    zip_code: String,
    #[clap(long, default_value = DEFAULT_COUNTRY)]
    country: String,
    #[clap(long)]
    phone: String,
    /// Shipping method (standard or express)
    #[clap(long, default_value = "standard")]
    shipping: String,
    /// Payment method (credit-card, paypal or pay-on-delivery)
    #[clap(long, default_value = "credit-card")]
    payment: String,
}

/// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    let config_path = expand_path(&cli.config)?;
    let mut config = StoreConfig::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    let mut shop = Storefront::open(config)?;

    match cli.command {
        Commands::Catalog { command } => handle_catalog_command(command, &shop)?,
        Commands::Cart { command } => handle_cart_command(command, &mut shop)?,
        Commands::Account { command } => handle_account_command(command, &mut shop).await?,
        Commands::Checkout(args) => handle_checkout(args, &mut shop)?,
    }

    Ok(())
}

/// Handle catalog commands
fn handle_catalog_command(command: CatalogCommands, shop: &Storefront) -> Result<()> {
    match command {
        CatalogCommands::List {
            category,
            search,
            sort,
        } => {
            let sort_order =
                SortOrder::from_str(&sort).ok_or_else(|| anyhow!("Unknown sort order '{}'", sort))?;

            let query = CatalogQuery {
                category,
                search_term: search,
                sort_order,
            };

            let products = shop.catalog().query(&query);
            if products.is_empty() {
                println!("No products found. Try changing your filters or search term.");
            }

            for product in products {
                println!(
                    "{:<8} {:<30} {:>9} {}",
                    product.id, product.name, product.price, product.category
                );
            }
        }
        CatalogCommands::Show { id } => {
            let product = shop.catalog().require(&id)?;
            println!("{} ({})", product.name, product.id);
            println!("  Price:    {}", product.price);
            println!("  Category: {}", product.category);
            println!("  {}", product.description);

            let related = shop.catalog().related(&id, RELATED_PRODUCTS_LIMIT);
            if !related.is_empty() {
                println!("You may also like:");
                for other in related {
                    println!("  {:<8} {} ({})", other.id, other.name, other.price);
                }
            }
        }
    }

    Ok(())
}

/// Handle cart commands
fn handle_cart_command(command: CartCommands, shop: &mut Storefront) -> Result<()> {
    match command {
        CartCommands::Add { id, quantity } => {
            shop.add_to_cart(&id, quantity)?;
            println!(
                "Added {} x {}. Cart has {} items.",
                quantity.max(1),
                id,
                shop.cart().total_items()
            );
        }
        CartCommands::Remove { id } => {
            shop.cart_mut().remove_item(&id);
            println!("Removed {}.", id);
        }
        CartCommands::Set { id, quantity } => {
            if shop.cart().get(&id).is_none() {
                return Err(anyhow!("Product {} is not in the cart", id));
            }
            shop.cart_mut().update_quantity(&id, quantity);
            println!("{} now x{}.", id, shop.cart().quantity_of(&id));
        }
        CartCommands::Clear => {
            shop.cart_mut().clear_cart();
            println!("Cart cleared.");
        }
        CartCommands::Show => print_cart(shop),
    }

    Ok(())
}

/// Handle account commands
async fn handle_account_command(command: AccountCommands, shop: &mut Storefront) -> Result<()> {
    match command {
        AccountCommands::Login { email, password } => {
            let user = shop.auth_mut().login(&email, &password).await?;
            println!("Signed in as {}", user.display_name());
        }
        AccountCommands::Google => {
            let user = shop.auth_mut().login_with_google().await?;
            println!("Signed in as {}", user.display_name());
        }
        AccountCommands::Register {
            email,
            password,
            name,
        } => {
            let user = shop.auth_mut().register(&email, &password, &name).await?;
            println!("Welcome, {} ({})", user.display_name(), user.id);
        }
        AccountCommands::Logout => {
            shop.auth_mut().logout().await?;
            println!("Signed out.");
        }
        AccountCommands::Whoami => match shop.auth().current_user() {
            Some(user) => println!("{} <{}> [{}]", user.display_name(), user.email, user.role.as_str()),
            None => println!("Not signed in."),
        },
    }

    Ok(())
}

/// Run the checkout wizard non-interactively
fn handle_checkout(args: CheckoutArgs, shop: &mut Storefront) -> Result<()> {
    let shipping_method = ShippingMethod::from_str(&args.shipping)
        .ok_or_else(|| anyhow!("Unknown shipping method '{}'", args.shipping))?;
    let payment_method = PaymentMethod::from_str(&args.payment)
        .ok_or_else(|| anyhow!("Unknown payment method '{}'", args.payment))?;

    let mut flow = shop.begin_checkout();
    if flow.step() == CheckoutStep::Account {
        // Continue as guest
        flow.continue_to_shipping(None)?;
    }

    let email = args
        .email
        .or_else(|| {
            let prefilled = flow.shipping().email.clone();
            (!prefilled.is_empty()).then_some(prefilled)
        })
        .ok_or_else(|| anyhow!("--email is required when not signed in"))?;

    flow.submit_shipping(ShippingDetails {
        email,
        first_name: args.first_name,
        last_name: args.last_name,
        address: args.address,
        apartment: args.apartment,
        city: args.city,
        state: args.state,
        zip_code: args.zip_code,
        country: args.country,
        phone: args.phone,
    })?;
    flow.select_shipping_method(shipping_method);
    flow.select_payment_method(payment_method);

    let confirmation = shop.place_order(&mut flow)?;

    println!("Order placed successfully!");
    println!("  Order ID: {}", confirmation.order_id);
    for item in &confirmation.items {
        println!("  {} x{} = {}", item.name, item.quantity, item.line_total());
    }
    print_summary(&confirmation.summary);

    Ok(())
}

fn print_cart(shop: &Storefront) {
    let cart = shop.cart();
    if cart.is_empty() {
        println!("Your cart is empty.");
        return;
    }

    println!("Your Cart ({})", cart.total_items());
    for entry in cart.entries() {
        println!(
            "  {:<8} {:<30} {:>9} x{:<3} {:>10}",
            entry.product.id,
            entry.product.name,
            entry.product.price,
            entry.quantity,
            entry.line_total()
        );
    }

    print_summary(&shop.summary(ShippingMethod::Standard));
}

fn print_summary(summary: &OrderSummary) {
    println!("  Subtotal ({} items): {:.2}", summary.total_items, summary.subtotal);
    if summary.shipping.is_zero() {
        println!("  Shipping: Free");
    } else {
        println!("  Shipping: {:.2}", summary.shipping);
    }
    println!("  Tax: {:.2}", summary.tax);
    println!("  Total: {:.2}", summary.total);

    if let Some(remaining) = summary.amount_to_free_shipping {
        println!("  Add {:.2} more to qualify for free shipping!", remaining);
    }
}

/// Helper function to expand a path
fn expand_path(path: &std::path::Path) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();

    if path_str.starts_with('~') {
        let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;

        let remainder = path_str.strip_prefix("~/").unwrap_or("");
        Ok(home.join(remainder))
    } else {
        Ok(path.to_path_buf())
    }
}
