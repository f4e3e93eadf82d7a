use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() {
    // Put memory.x where the cortex-m-rt linker script can find it
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    File::create(out_dir.join("memory.x"))
        .unwrap()
        .write_all(include_bytes!("memory.x"))
        .unwrap();
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");

    // Ensure target is correct
    let target = env::var("TARGET").unwrap();
    if !target.starts_with("thumbv6m") {
        panic!("This crate only supports the RP2040 (thumbv6m-none-eabi)!");
    }
}
