use std::env;
use std::fs;

use diamond_engine::{selector_of, FacetInterface};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("Usage: selector_calc <interface_json>");
        return;
    }

    let raw = fs::read_to_string(&args[1]).expect("Failed to read interface file");
    let iface: FacetInterface = serde_json::from_str(&raw).expect("Invalid interface JSON");

    println!("{} ({} functions)", iface.name, iface.functions.len());
    for sig in &iface.functions {
        let selector = selector_of(sig);
        println!("0x{} -> {}", hex::encode(selector), sig);
    }
}
