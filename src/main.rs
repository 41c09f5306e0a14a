use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;

// Use library instead of local modules
use pairing_codes::{
    default_export_filename, export_to_path, import_from_path, payload, AccessoryCategory,
    CredentialStore, MergePolicy, PairingCredential,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(String::as_str).unwrap_or("list");

    match command {
        "list" => run_list(),
        "add" => run_add(&args[2..]),
        "encode" => run_encode(&args[2..]),
        "decode" => run_decode(&args[2..]),
        "remove" => run_remove(&args[2..]),
        "import" => run_import(&args[2..]),
        "export" => run_export(&args[2..]),
        "categories" => run_categories(),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command: {other}")
        }
    }
}

fn print_usage() {
    println!("pairing-codes {}", pairing_codes::VERSION);
    println!();
    println!("Usage:");
    println!("  pairing-codes list");
    println!("  pairing-codes add <pairing-code> <setup-id> [category-code] [name...]");
    println!("  pairing-codes encode <id>");
    println!("  pairing-codes decode <payload>");
    println!("  pairing-codes remove <id>");
    println!("  pairing-codes import <file> [--replace]");
    println!("  pairing-codes export [dest]");
    println!("  pairing-codes categories");
}

fn run_list() -> Result<()> {
    let store = CredentialStore::open_default();

    if store.is_empty() {
        println!("No credentials stored yet.");
        println!("Add one with: pairing-codes add <pairing-code> <setup-id>");
        return Ok(());
    }

    // Same ordering the original list surface uses: by display name
    let mut credentials: Vec<&PairingCredential> = store.credentials().iter().collect();
    credentials.sort_by_key(|c| c.name().unwrap_or("Untitled Device").to_string());

    println!("✓ {} credential(s) in {}", store.len(), store.path().display());
    for credential in credentials {
        println!(
            "  {}  {:<24}  {:<18}  {} / {}",
            credential.id(),
            credential.name().unwrap_or("Untitled Device"),
            credential.category().label(),
            credential.pairing_code(),
            credential.setup_id(),
        );
    }

    Ok(())
}

fn run_add(args: &[String]) -> Result<()> {
    let (pairing_code, setup_id) = match (args.first(), args.get(1)) {
        (Some(code), Some(setup_id)) => (code.as_str(), setup_id.as_str()),
        _ => bail!("usage: pairing-codes add <pairing-code> <setup-id> [category-code] [name...]"),
    };

    let category = match args.get(2) {
        Some(raw) => {
            let code: u8 = raw
                .parse()
                .with_context(|| format!("category code must be a number, got '{raw}'"))?;
            AccessoryCategory::from_code(code)
                .with_context(|| format!("no accessory category with code {code}"))?
        }
        None => AccessoryCategory::default(),
    };

    let mut credential = PairingCredential::new(pairing_code, setup_id, category);
    if args.len() > 3 {
        credential.set_name(Some(args[3..].join(" ")));
    }

    // Same gate as the original entry form: placeholder first, then validity
    if credential.is_placeholder() {
        bail!("pairing code has no digits; nothing to store");
    }
    if !credential.is_valid() {
        bail!(
            "credential is not valid: pairing code needs 8 digits (got '{}') and the setup id needs 4 characters (got '{}')",
            credential.pairing_code(),
            credential.setup_id()
        );
    }

    let payload_text = payload::encode(&credential)?;

    let mut store = CredentialStore::open_default();
    store.add(credential)?;

    println!("✓ Added credential ({} total)", store.len());
    println!("  Payload: {payload_text}");

    Ok(())
}

fn run_encode(args: &[String]) -> Result<()> {
    let Some(id) = args.first() else {
        bail!("usage: pairing-codes encode <id>");
    };

    let store = CredentialStore::open_default();
    let credential = store
        .get(id)
        .with_context(|| format!("no credential with id {id}"))?;

    if credential.is_placeholder() {
        bail!("pairing code has not been entered yet; refusing to encode the placeholder");
    }

    println!("{}", payload::encode(credential)?);
    Ok(())
}

fn run_decode(args: &[String]) -> Result<()> {
    let Some(text) = args.first() else {
        bail!("usage: pairing-codes decode <payload>");
    };

    // A mismatch is a non-result, not an error: scanned text is arbitrary
    let Some(scanned) = payload::decode(text) else {
        println!("✗ Not a pairing payload (no {} prefix)", pairing_codes::PAYLOAD_PREFIX);
        return Ok(());
    };

    println!(
        "  Pairing code: {}",
        scanned.pairing_code.as_deref().unwrap_or("(not decoded)")
    );
    println!(
        "  Setup ID:     {}",
        scanned.setup_id.as_deref().unwrap_or("(not decoded)")
    );
    println!(
        "  Category:     {}",
        scanned
            .category
            .map(|c| c.label())
            .unwrap_or("(not decoded)")
    );

    Ok(())
}

fn run_remove(args: &[String]) -> Result<()> {
    let Some(id) = args.first() else {
        bail!("usage: pairing-codes remove <id>");
    };

    let mut store = CredentialStore::open_default();
    if store.get(id).is_none() {
        println!("Nothing to remove: no credential with id {id}");
        return Ok(());
    }

    store.remove(id)?;
    println!("✓ Removed credential ({} remaining)", store.len());
    Ok(())
}

fn run_import(args: &[String]) -> Result<()> {
    let Some(file) = args.iter().find(|a| *a != "--replace") else {
        bail!("usage: pairing-codes import <file> [--replace]");
    };
    let policy = if args.iter().any(|a| a == "--replace") {
        MergePolicy::Replace
    } else {
        MergePolicy::Add
    };

    let mut store = CredentialStore::open_default();
    let count = import_from_path(&mut store, PathBuf::from(file).as_path(), policy)
        .with_context(|| format!("failed to import {file}"))?;

    match policy {
        MergePolicy::Replace => println!("✓ Imported {count} credential(s), replacing existing"),
        MergePolicy::Add => println!(
            "✓ Imported {} credential(s), store now holds {}",
            count,
            store.len()
        ),
    }

    Ok(())
}

fn run_export(args: &[String]) -> Result<()> {
    let dest = match args.first() {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(default_export_filename()),
    };

    let store = CredentialStore::open_default();
    export_to_path(&store, &dest)
        .with_context(|| format!("failed to export to {}", dest.display()))?;

    println!("✓ Exported {} credential(s) to {}", store.len(), dest.display());
    Ok(())
}

fn run_categories() -> Result<()> {
    let mut categories = AccessoryCategory::ALL.to_vec();
    categories.sort_by_key(|c| c.label());

    println!("Code  Category             Icon");
    for category in categories {
        println!(
            "{:>4}  {:<20} {}",
            category.code(),
            category.label(),
            category.icon()
        );
    }

    Ok(())
}
