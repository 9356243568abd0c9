use vergen::EmitBuilder;

fn main() -> anyhow::Result<()> {
    EmitBuilder::builder()
        .build_date()
        .cargo_target_triple()
        .rustc_semver()
        .emit()?;

    println!("cargo:rerun-if-changed=startup.toml");
    Ok(())
}
