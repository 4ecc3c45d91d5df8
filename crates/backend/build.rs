use std::env;
use std::fs;
use std::path::{Path, PathBuf};

// config.toml кладётся рядом с бинарником, там его ищет load_config
fn main() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let source_config = manifest_dir.join("config.toml");
    println!("cargo:rerun-if-changed={}", source_config.display());

    if !source_config.exists() {
        println!(
            "cargo:warning=config.toml not found at {:?}, embedded default will be used (see config.toml.example)",
            source_config
        );
        return;
    }

    let (Ok(out_dir), Ok(profile)) = (env::var("OUT_DIR"), env::var("PROFILE")) else {
        return;
    };

    // OUT_DIR: target/<profile>/build/backend-xxx/out
    let Some(target_dir) = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
    else {
        println!("cargo:warning=target profile directory not found for {}", out_dir);
        return;
    };

    let dest_config = target_dir.join("config.toml");
    if let Err(e) = fs::copy(&source_config, &dest_config) {
        println!("cargo:warning=Failed to copy config.toml: {}", e);
    }
}
