use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let source = if Path::new("secrets.rs").exists() {
        "secrets.rs"
    } else {
        println!(
            "cargo:warning=secrets.rs not found, building with the placeholder values from secrets.sample.rs"
        );
        "secrets.sample.rs"
    };

    let out_dir = env::var("OUT_DIR").unwrap();
    fs::copy(source, Path::new(&out_dir).join("secrets.rs")).unwrap();

    println!("cargo:rerun-if-changed=secrets.rs");
    println!("cargo:rerun-if-changed=secrets.sample.rs");
}
