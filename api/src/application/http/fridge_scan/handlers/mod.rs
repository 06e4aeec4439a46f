pub mod scan_fridge;
