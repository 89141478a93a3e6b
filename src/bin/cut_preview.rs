// Dry run: build the Remove cut for a facet interface and print the
// calldata that remove_facet would submit. Nothing is sent.

use std::env;
use std::fs;

use alloy::primitives::Address;
use anyhow::{Context, Result};

use diamond_engine::{cut_calldata, remove_cut, selector_of, FacetInterface};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("Usage: cut_preview <interface_json>");
        return Ok(());
    }

    let raw = fs::read_to_string(&args[1])
        .with_context(|| format!("Failed to read interface file '{}'", args[1]))?;
    let iface: FacetInterface =
        serde_json::from_str(&raw).with_context(|| format!("Invalid interface JSON '{}'", args[1]))?;

    let cut = remove_cut(&iface);
    println!("Facet: {}", iface.name);
    println!("Action: Remove (facet address {:?})", Address::ZERO);
    println!("Selectors ({}):", cut.functionSelectors.len());
    for sig in &iface.functions {
        println!("  0x{} {}", hex::encode(selector_of(sig)), sig);
    }

    let calldata = cut_calldata(vec![cut]);
    println!("diamondCut calldata ({} bytes):", calldata.len());
    println!("0x{}", hex::encode(&calldata));

    Ok(())
}
