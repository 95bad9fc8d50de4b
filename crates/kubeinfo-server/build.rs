use std::process::Command;

/// Records the compiler version as `KUBEINFO_RUSTC_VERSION`, e.g. `rustc 1.80.0`.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());

    let version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .and_then(|s| s.split_whitespace().nth(1).map(str::to_string))
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=KUBEINFO_RUSTC_VERSION=rustc {version}");
    println!("cargo:rerun-if-env-changed=RUSTC");
    Ok(())
}
