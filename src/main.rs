use clap::Parser;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vending_machine::application::machine::VendingMachine;
use vending_machine::application::shared::SharedVendingMachine;
use vending_machine::domain::money::Amount;
use vending_machine::infrastructure::dispenser::RecordingDispenser;
use vending_machine::infrastructure::resources::ResourceLocator;
use vending_machine::interfaces::catalog::inventory_loader::{InventoryLoader, LoaderOptions};
use vending_machine::interfaces::csv::inventory_writer::InventoryWriter;
use vending_machine::interfaces::order::Order;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Vend orders, `selection[:quantity]`, applied in order
    orders: Vec<String>,

    /// Directory holding the inventory resource
    #[arg(long, default_value = ".")]
    resources: PathBuf,

    /// Inventory resource name
    #[arg(long, default_value = "VendingInventory")]
    name: String,

    /// Inventory resource type (plist or json)
    #[arg(long = "type", default_value = "plist")]
    kind: String,

    /// Balance the machine starts with
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    balance: Decimal,

    /// Funds to deposit before vending (repeatable)
    #[arg(long, allow_negative_numbers = true)]
    deposit: Vec<Decimal>,

    /// Fail on malformed or unknown catalog entries instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Report every dispensed line on stderr
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let options = if cli.strict {
        LoaderOptions::strict()
    } else {
        LoaderOptions::default()
    };
    let loader = InventoryLoader::new(ResourceLocator::new(&cli.resources)).with_options(options);
    let inventory = loader.load(&cli.name, &cli.kind).into_diagnostic()?;

    let balance = Amount::new(cli.balance).into_diagnostic()?;
    let recorder = RecordingDispenser::new();
    let machine = SharedVendingMachine::new(
        VendingMachine::with_balance(inventory, balance).dispensing_to(recorder.clone()),
    );

    for amount in cli.deposit {
        if let Err(e) = machine.deposit(amount).await {
            eprintln!("Error depositing {}: {}", amount, e);
        }
    }

    for raw in &cli.orders {
        let order = match raw.parse::<Order>() {
            Ok(order) => order,
            Err(e) => {
                eprintln!("Error reading order: {}", e);
                continue;
            }
        };
        match machine.vend(order.quantity, order.selection).await {
            Ok(vend) => info!(
                selection = %vend.selection,
                quantity = vend.quantity,
                total = %vend.total,
                "vended"
            ),
            Err(e) => eprintln!("Error vending {}: {}", raw, e),
        }
    }

    if cli.verbose {
        for (selection, quantity) in recorder.dispensed() {
            eprintln!("Dispensed {} x {}", quantity, selection);
        }
    }

    let (balance, inventory) = machine.snapshot().await;

    let stdout = io::stdout();
    let mut writer = InventoryWriter::new(stdout.lock());
    writer.write_state(&inventory, balance).into_diagnostic()?;

    Ok(())
}
