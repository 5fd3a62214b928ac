pub mod inventory_loader;
